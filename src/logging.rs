use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, WarungError};
use crate::settings::Settings;

/// Global level filter: `RUST_LOG` wins, then the configured level, then "info".
fn make_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Open (or create) the log file in append mode, creating its directory first.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            WarungError::Logging(format!("cannot open log file '{}': {e}", path.display()))
        })
}

/// Initializes file logging. Call once at startup.
///
/// The terminal belongs to the TUI, so records only go to
/// `<data_dir>/logs/warung.log`. Returns the log file path.
pub fn init(settings: &Settings) -> Result<PathBuf> {
    let path = settings.log_path();
    let file = open_log_file(&path)?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(make_filter(&settings.log_level))
        .with(file_layer)
        .try_init()
        .map_err(|e| WarungError::Logging(e.to_string()))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(path)
}
