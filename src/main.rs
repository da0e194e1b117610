mod cli;
mod error;
mod fmt;
mod intake;
mod logging;
mod metrics;
mod models;
mod samples;
mod settings;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let settings = settings::load_settings();

    // status only reads; it must not create the log file it reports on
    let wants_log = !matches!(cli.command, Some(Commands::Status));
    if wants_log {
        if let Err(e) = logging::init(&settings) {
            eprintln!("Warning: logging disabled: {e}");
        }
    }
    tracing::debug!(data_dir = %settings.data_dir, "starting");

    let result = match cli.command {
        None => cli::dashboard::run(&settings),
        Some(Commands::Input { seed, output }) => {
            cli::input::run(seed.as_deref(), output.as_deref())
        }
        Some(Commands::Transactions { file }) => cli::transactions::run(file.as_deref()),
        Some(Commands::Summary { seed }) => cli::summary::run(&seed),
        Some(Commands::Invoices) => cli::invoices::run(),
        Some(Commands::Samples { file }) => cli::samples::run(&file),
        Some(Commands::Init {
            user_name,
            log_level,
            data_dir,
        }) => cli::init::run(user_name, log_level, data_dir),
        Some(Commands::Status) => cli::status::run(),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
