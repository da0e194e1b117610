use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(
    user_name: Option<String>,
    log_level: Option<String>,
    data_dir: Option<String>,
) -> Result<()> {
    let mut settings = load_settings();
    if let Some(name) = user_name {
        settings.user_name = name.trim().to_string();
    }
    if let Some(level) = log_level {
        settings.log_level = level;
    }
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }

    save_settings(&settings)?;
    std::fs::create_dir_all(settings.log_dir())?;

    println!("Saved settings to {}", settings_path().display());
    println!("Data directory: {}", settings.data_dir);
    Ok(())
}
