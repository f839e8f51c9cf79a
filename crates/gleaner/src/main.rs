mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = gleaner_core::Paths::new()?;
    let config_path = cli.config;
    let load_config = || commands::load_config(config_path.as_deref(), &paths);

    match cli.command {
        Commands::Init { force } => {
            let target = config_path.clone().unwrap_or_else(|| paths.config_file());
            commands::init::run(&target, force)
        }
        Commands::Expand { query, local } => commands::expand::run(&query, local, &load_config()?),
        Commands::Rank {
            query,
            docs,
            algorithm,
            limit,
            local,
            format,
            no_history,
        } => {
            let options = commands::rank::RankOptions {
                algorithm,
                limit,
                local,
                format,
                record_history: !no_history,
            };
            commands::rank::run(&query, &docs, &options, load_config()?, &paths)
        }
        Commands::Stats { docs, top } => commands::stats::run(&docs, top),
        Commands::History { stats, limit } => commands::history::run(stats, limit, &paths),
        Commands::Version => commands::version::run(),
    }
}
