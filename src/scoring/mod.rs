//! Per-contributor score accumulation
//!
//! A [`ScoreBoard`] lives for exactly one scoring run. It holds one
//! [`ContributorRecord`] per login, remembers the order logins were first
//! seen, and computes totals from a [`ScoreRuleSet`] on demand.

pub mod impact;

use crate::config::ScoreRuleSet;
use crate::core::{ContributionEvent, ContributionKind, ContributorRecord};
use std::collections::HashMap;

pub use impact::{file_complexity_score, pull_request_impact, ImpactFile};

#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    index: HashMap<String, usize>,
    entries: Vec<(String, ContributorRecord)>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `kind` for `login`
    pub fn increment(&mut self, login: Option<&str>, kind: ContributionKind) {
        self.increment_by(login, kind, Some(1));
    }

    /// Add `amount` to `kind` for `login`.
    ///
    /// A missing or empty login is a no-op and creates no record. A missing
    /// amount counts as zero but still registers the login.
    pub fn increment_by(
        &mut self,
        login: Option<&str>,
        kind: ContributionKind,
        amount: Option<u64>,
    ) {
        let Some(record) = self.record_mut(login) else {
            return;
        };
        let counter = record.counter_mut(kind);
        *counter = counter.saturating_add(amount.unwrap_or(0));
    }

    pub fn apply(&mut self, event: &ContributionEvent) {
        self.increment_by(event.actor.as_deref(), event.kind, Some(event.amount));
    }

    /// Add structural complexity credit; negative or non-finite scores are ignored
    pub fn add_complexity(&mut self, login: Option<&str>, score: f64) {
        if !score.is_finite() || score < 0.0 {
            log::debug!("Ignoring invalid complexity score {}", score);
            return;
        }
        if let Some(record) = self.record_mut(login) {
            record.complexity += score;
        }
    }

    fn record_mut(&mut self, login: Option<&str>) -> Option<&mut ContributorRecord> {
        let login = login.filter(|l| !l.is_empty())?;
        let idx = match self.index.get(login).copied() {
            Some(idx) => idx,
            None => {
                self.entries
                    .push((login.to_string(), ContributorRecord::default()));
                let idx = self.entries.len() - 1;
                self.index.insert(login.to_string(), idx);
                idx
            }
        };
        Some(&mut self.entries[idx].1)
    }

    pub fn get(&self, login: &str) -> Option<&ContributorRecord> {
        self.index.get(login).map(|idx| &self.entries[*idx].1)
    }

    pub fn contains(&self, login: &str) -> bool {
        self.index.contains_key(login)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in first-seen login order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContributorRecord)> {
        self.entries
            .iter()
            .map(|(login, record)| (login.as_str(), record))
    }

    pub fn total(&self, login: &str, rules: &ScoreRuleSet) -> Option<f64> {
        self.get(login).map(|record| rules.total(record))
    }
}

impl Extend<ContributionEvent> for ScoreBoard {
    fn extend<I: IntoIterator<Item = ContributionEvent>>(&mut self, events: I) {
        for event in events {
            self.apply(&event);
        }
    }
}

impl FromIterator<ContributionEvent> for ScoreBoard {
    fn from_iter<I: IntoIterator<Item = ContributionEvent>>(events: I) -> Self {
        let mut board = ScoreBoard::new();
        board.extend(events);
        board
    }
}
