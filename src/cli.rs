use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repscore")]
#[command(about = "Contributor reputation scoring and patch complexity analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every contributor of a repository
    Score {
        /// Repository owner
        #[arg(long, env = "GITHUB_OWNER")]
        owner: Option<String>,

        /// Repository name
        #[arg(long, env = "GITHUB_REPO")]
        repo: Option<String>,

        /// JSON snapshot of repository activity
        #[arg(long)]
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Credit structural complexity of added code
        #[arg(long)]
        complexity: bool,

        /// Configuration file (defaults to the nearest .repscore.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Impact score of one pull request, or a leaderboard of merged pull requests
    Impact {
        /// Repository owner
        #[arg(long, env = "GITHUB_OWNER")]
        owner: Option<String>,

        /// Repository name
        #[arg(long, env = "GITHUB_REPO")]
        repo: Option<String>,

        /// JSON snapshot of repository activity
        #[arg(long)]
        snapshot: PathBuf,

        /// Pull request number; omit to rank authors by summed impact
        #[arg(long)]
        pr: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Configuration file (defaults to the nearest .repscore.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Structural complexity of the lines a unified diff adds
    Analyze {
        /// Patch file; `-` reads stdin
        patch: PathBuf,

        /// Language tag (js, ts, tsx, css); inferred from the patch file extension when omitted
        #[arg(long)]
        lang: Option<String>,
    },

    /// Initialize a .repscore.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` takes precedence
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "repscore", "-vv", "score", "--owner", "acme", "--repo", "widgets", "--snapshot",
            "snap.json", "--format", "json", "--complexity",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Score {
                owner,
                repo,
                format,
                complexity,
                ..
            } => {
                assert_eq!(owner.as_deref(), Some("acme"));
                assert_eq!(repo.as_deref(), Some("widgets"));
                assert_eq!(format, OutputFormat::Json);
                assert!(complexity);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from(["repscore", "analyze", "change.diff", "--lang", "css"]).unwrap();
        match cli.command {
            Commands::Analyze { patch, lang } => {
                assert_eq!(patch, PathBuf::from("change.diff"));
                assert_eq!(lang.as_deref(), Some("css"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_impact_command() {
        let cli = Cli::try_parse_from([
            "repscore", "impact", "--snapshot", "s.json", "--config", "team.toml",
        ])
        .unwrap();
        match cli.command {
            Commands::Impact { pr, config, .. } => {
                assert_eq!(pr, None);
                assert_eq!(config, Some(PathBuf::from("team.toml")));
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["repscore", "impact", "--snapshot", "s.json", "--pr", "7"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Impact { pr: Some(7), .. }));
    }

    #[test]
    fn test_impact_requires_snapshot() {
        assert!(Cli::try_parse_from(["repscore", "impact", "--pr", "7"]).is_err());
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(1), log::LevelFilter::Info);
        assert_eq!(log_level(5), log::LevelFilter::Trace);
    }
}
