use clap::{Parser, Subcommand, ValueEnum};
use gleaner_core::Algorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gleaner")]
#[command(version)]
#[command(about = "Rank crawled documents against an expanded search query")]
pub struct Cli {
    /// Config file (defaults to ~/.gleaner/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file with every setting filled in
    Init {
        /// Overwrite an existing config with the defaults
        #[arg(long)]
        force: bool,
    },

    /// Expand a query and print the result as JSON
    Expand {
        query: String,

        /// Skip the language model even when a credential is configured
        #[arg(long)]
        local: bool,
    },

    /// Rank a JSONL batch of processed documents
    Rank {
        /// Search query
        #[arg(short, long)]
        query: String,

        /// JSONL file of {url, title, text} records
        #[arg(short, long)]
        docs: PathBuf,

        /// Scoring algorithm (bm25 or tfidf)
        #[arg(long)]
        algorithm: Option<Algorithm>,

        /// Maximum results to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Skip the language model even when a credential is configured
        #[arg(long)]
        local: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Do not record this search in history
        #[arg(long)]
        no_history: bool,
    },

    /// Show corpus statistics for a JSONL batch
    Stats {
        #[arg(short, long)]
        docs: PathBuf,

        /// Number of most frequent terms to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// View search history
    History {
        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        /// Number of recent searches to list
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["gleaner", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_rank() {
        let cli = Cli::try_parse_from([
            "gleaner",
            "rank",
            "--query",
            "healthcare startup",
            "--docs",
            "docs.jsonl",
            "--algorithm",
            "tfidf",
            "-n",
            "5",
            "--format",
            "json",
        ])
        .unwrap();
        if let Commands::Rank {
            query,
            docs,
            algorithm,
            limit,
            local,
            format,
            no_history,
        } = cli.command
        {
            assert_eq!(query, "healthcare startup");
            assert_eq!(docs, PathBuf::from("docs.jsonl"));
            assert_eq!(algorithm, Some(Algorithm::TfIdf));
            assert_eq!(limit, Some(5));
            assert!(!local);
            assert_eq!(format, OutputFormat::Json);
            assert!(!no_history);
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_algorithm() {
        let cli = Cli::try_parse_from([
            "gleaner", "rank", "-q", "x", "-d", "d.jsonl", "--algorithm", "cosine",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::try_parse_from(["gleaner", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }

    #[test]
    fn test_cli_global_config() {
        let cli =
            Cli::try_parse_from(["gleaner", "expand", "fast cars", "--config", "c.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
        assert!(matches!(cli.command, Commands::Expand { local: false, .. }));
    }
}
