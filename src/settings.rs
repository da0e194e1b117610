use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WarungError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_dir_string")]
    pub data_dir: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_dir_string() -> String {
    default_data_dir().to_string_lossy().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir_string(),
            user_name: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("logs")
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir().join("warung.log")
    }

    /// First word of the configured user name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.user_name.split_whitespace().next()
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("warung")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("warung")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        parse_settings(&content)
    } else {
        Settings::default()
    }
}

/// Parse settings JSON, falling back to defaults when it is malformed.
pub fn parse_settings(content: &str) -> Settings {
    serde_json::from_str(content).unwrap_or_default()
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| WarungError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/test".to_string(),
            user_name: "Sari Wulandari".to_string(),
            log_level: "debug".to_string(),
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let loaded = parse_settings(&content);
        assert_eq!(loaded.user_name, "Sari Wulandari");
        assert_eq!(loaded.data_dir, "/tmp/test");
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.user_name.is_empty());
        assert_eq!(s.log_level, "info");
        assert!(s.data_dir.ends_with("warung"));
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let s = parse_settings(r#"{"user_name": "Budi"}"#);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.user_name, "Budi");
        assert!(!s.data_dir.is_empty());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let s = parse_settings("{not json");
        assert_eq!(s.log_level, "info");
        assert!(s.user_name.is_empty());
    }

    #[test]
    fn test_log_path_lives_under_data_dir() {
        let s = Settings {
            data_dir: "/tmp/warung".to_string(),
            ..Settings::default()
        };
        assert_eq!(s.log_path(), PathBuf::from("/tmp/warung/logs/warung.log"));
    }

    #[test]
    fn test_first_name() {
        let mut s = Settings::default();
        assert_eq!(s.first_name(), None);
        s.user_name = "Sari Wulandari".to_string();
        assert_eq!(s.first_name(), Some("Sari"));
    }
}
