use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;

const DEFAULT_DATETIME_FORMAT: &str = "%a, %d %b %Y %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TOML file the appointments are read from.
    pub appointments_file: PathBuf,
    /// `chrono` format used when printing appointment date-times.
    pub datetime_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    appointments_file: Option<PathBuf>,
    datetime_format: Option<String>,
}

impl Config {
    /// Loads config from disk (first XDG path, then native) and applies defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let appointments_file = file_config
            .appointments_file
            .unwrap_or_else(Self::default_appointments_file);
        let datetime_format = file_config
            .datetime_format
            .unwrap_or_else(|| DEFAULT_DATETIME_FORMAT.to_string());

        Self {
            appointments_file,
            datetime_format,
        }
    }

    /// Default appointment book: `{data_dir}/appt/appointments.toml`
    /// - macOS:   `~/Library/Application Support/appt`
    /// - Linux:   `$XDG_DATA_HOME/appt` or `~/.local/share/appt`
    /// - Windows: `%APPDATA%\appt`
    fn default_appointments_file() -> PathBuf {
        let dir = match BaseDirs::new() {
            Some(base) => base.data_dir().join("appt"),
            None => PathBuf::from("./appt"),
        };
        dir.join("appointments.toml")
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("appt").join("config.toml"));
            v.push(b.config_dir().join("appt").join("config.toml"));
        }
        v
    }

    /// Reads the first existing config file. No file at all means defaults.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
