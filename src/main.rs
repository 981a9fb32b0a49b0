use anyhow::Result;
use clap::Parser;
use repscore::cli::{log_level, Cli, Commands};
use repscore::commands::{self, AnalyzeConfig, ImpactConfig, ScoreConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbosity))
        .parse_env("RUST_LOG")
        .init();

    match cli.command {
        Commands::Score {
            owner,
            repo,
            snapshot,
            format,
            output,
            complexity,
            config,
        } => commands::score_contributors(ScoreConfig {
            owner,
            repo,
            snapshot,
            format: format.into(),
            output,
            complexity,
            config,
        }),
        Commands::Impact {
            owner,
            repo,
            snapshot,
            pr,
            format,
            config,
        } => commands::score_impact(ImpactConfig {
            owner,
            repo,
            snapshot,
            pull_request: pr,
            format: format.into(),
            config,
        }),
        Commands::Analyze { patch, lang } => commands::analyze_patch(AnalyzeConfig { patch, lang }),
        Commands::Init { force } => commands::init_config(force),
    }
}
