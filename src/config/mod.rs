use crate::core::calculator::DEFAULT_BASE_RATE;
use crate::core::schedules::BUNDLED_SCHEDULES;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_schedules")]
    pub schedules: String,
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,
    #[serde(default = "default_timeline_width")]
    pub timeline_width: usize,
}

fn default_schedules() -> String {
    Config::schedules_file().to_string_lossy().to_string()
}
fn default_base_rate() -> f64 {
    DEFAULT_BASE_RATE
}
fn default_timeline_width() -> usize {
    64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedules: default_schedules(),
            base_rate: default_base_rate(),
            timeline_width: default_timeline_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("otrate")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".otrate")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("otrate.conf")
    }

    /// Return the default path of the bell-schedule file
    pub fn schedules_file() -> PathBuf {
        Self::config_dir().join("school_times.json")
    }

    /// Schedule file path with `~/` expanded
    pub fn schedules_path(&self) -> PathBuf {
        expand_tilde(&self.schedules)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;

        Self::check_base_rate(cfg.base_rate)?;

        Ok(cfg)
    }

    /// Accepts only finite, positive base rates.
    pub fn check_base_rate(rate: f64) -> AppResult<f64> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(AppError::Config(format!(
                "base rate must be a positive number, got {}",
                rate
            )));
        }
        Ok(rate)
    }

    /// Initialize configuration and schedule files
    pub fn init_all(custom_schedules: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Schedule file: user provided or default
        let schedules_path = if let Some(name) = custom_schedules {
            expand_tilde(&name)
        } else {
            Self::schedules_file()
        };

        let config = Config {
            schedules: schedules_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        // Starter schedules, never overwriting an existing file
        if !schedules_path.exists() {
            if let Some(parent) = schedules_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&schedules_path, BUNDLED_SCHEDULES)?;
        }

        success(format!("Schedules:   {}", schedules_path.display()));

        Ok(())
    }
}
