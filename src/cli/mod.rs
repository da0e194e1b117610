pub mod dashboard;
pub mod init;
pub mod input;
pub mod input_form;
pub mod invoices;
pub mod samples;
pub mod status;
pub mod summary;
pub mod transaction_manager;
pub mod transactions;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "warung",
    version,
    about = "Terminal financial dashboard for small businesses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enter monthly figures and balance-sheet items, then view the summary.
    Input {
        /// JSON record to pre-fill the form with (opens on the summary)
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Write the latest complete record (or the seed) here as JSON on exit
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Open the transaction and invoice panel.
    Transactions {
        /// Statement file to select on open (.csv, .xlsx, .xls or .pdf)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print a saved record and its profit, margin and growth.
    Summary {
        /// JSON record to summarize
        #[arg(long)]
        seed: PathBuf,
    },
    /// Print invoice counters and the invoice list.
    Invoices,
    /// Select a statement file and print the categorized transactions.
    Samples {
        /// Statement file (.csv, .xlsx, .xls or .pdf)
        #[arg(long)]
        file: PathBuf,
    },
    /// Write settings: user name, log level and data directory.
    Init {
        /// Name used in the dashboard greeting
        #[arg(long = "user-name")]
        user_name: Option<String>,
        /// Log level or filter directive, e.g. debug or warung=trace
        #[arg(long = "log-level")]
        log_level: Option<String>,
        /// Path for warung data and logs (default: ~/Documents/warung)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show current settings and the log file location.
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["warung"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_summary_requires_seed() {
        assert!(Cli::try_parse_from(["warung", "summary"]).is_err());
        let cli = Cli::try_parse_from(["warung", "summary", "--seed", "r.json"]).unwrap();
        match cli.command {
            Some(Commands::Summary { seed }) => assert_eq!(seed, PathBuf::from("r.json")),
            _ => panic!("expected summary"),
        }
    }

    #[test]
    fn test_init_flags() {
        let cli = Cli::try_parse_from([
            "warung",
            "init",
            "--user-name",
            "Siti Rahma",
            "--log-level",
            "debug",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Init {
                user_name,
                log_level,
                data_dir,
            }) => {
                assert_eq!(user_name.as_deref(), Some("Siti Rahma"));
                assert_eq!(log_level.as_deref(), Some("debug"));
                assert!(data_dir.is_none());
            }
            _ => panic!("expected init"),
        }
    }
}
