use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::{load_settings, settings_path};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let config = settings_path();
    let log_path = settings.log_path();

    let user = if settings.user_name.is_empty() {
        "(not set)"
    } else {
        settings.user_name.as_str()
    };
    let origin = if config.exists() { "" } else { " (defaults)" };

    println!("User:       {user}");
    println!("Settings:   {}{origin}", config.display());
    println!("Data dir:   {}", settings.data_dir);
    println!("Log level:  {}", settings.log_level);
    println!("Log file:   {}", log_path.display());

    if log_path.exists() {
        let size = std::fs::metadata(&log_path)?.len();
        println!("Log size:   {}", format_bytes(size));
    } else {
        println!("Log size:   (not created yet)");
    }
    Ok(())
}
