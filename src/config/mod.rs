use crate::core::calculator::compliance::HosLimits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_max_driving")]
    pub max_driving_hours: f64,
    #[serde(default = "default_max_on_duty")]
    pub max_on_duty_hours: f64,

    /// Printed on log sheets in place of missing identity fields
    #[serde(default = "default_placeholder")]
    pub unknown_placeholder: String,

    /// Presentation defaults, used only when the trip carries no value
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub carrier_name: Option<String>,

    #[serde(default = "default_separator_char")]
    pub separator_char: String,

    /// Max characters of the rotated labels under the grid
    #[serde(default = "default_label_chars")]
    pub remark_label_chars: usize,
}

fn default_max_driving() -> f64 {
    HosLimits::default().max_driving_hours
}
fn default_max_on_duty() -> f64 {
    HosLimits::default().max_on_duty_hours
}
fn default_placeholder() -> String {
    "Unknown".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_label_chars() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_driving_hours: default_max_driving(),
            max_on_duty_hours: default_max_on_duty(),
            unknown_placeholder: default_placeholder(),
            driver_name: None,
            carrier_name: None,
            separator_char: default_separator_char(),
            remark_label_chars: default_label_chars(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.hoslog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hoslog")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hoslog.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;

        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Load the default config file
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Write a default configuration file at `path`, creating parent dirs.
    pub fn init_at(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }

    pub fn limits(&self) -> HosLimits {
        HosLimits {
            max_driving_hours: self.max_driving_hours,
            max_on_duty_hours: self.max_on_duty_hours,
        }
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    fn validate(&self) -> AppResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.max_driving_hours) || !positive(self.max_on_duty_hours) {
            return Err(AppError::Config(
                "HOS limits must be positive numbers of hours".to_string(),
            ));
        }
        if self.max_driving_hours > 24.0 || self.max_on_duty_hours > 24.0 {
            return Err(AppError::Config(
                "HOS limits cannot exceed 24 hours".to_string(),
            ));
        }
        Ok(())
    }
}
