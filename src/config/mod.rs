#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, SalonError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_DATA_FILE: &str = "salon_data.json";

/// Effective settings after merging the TOML file (if any) with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: String,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl AppConfig {
    /// Flags win over file values, file values win over defaults.
    pub fn merge(
        file: Option<&TomlConfig>,
        data_file: Option<&str>,
        verbose: bool,
        log_format: Option<&str>,
    ) -> Result<Self> {
        let data_file = data_file
            .or_else(|| file.and_then(TomlConfig::data_file))
            .unwrap_or(DEFAULT_DATA_FILE)
            .to_string();

        let format_name = log_format.or_else(|| file.and_then(TomlConfig::log_format));
        let log_format = match format_name {
            None => LogFormat::default(),
            Some(name) => {
                LogFormat::parse(name).ok_or_else(|| SalonError::InvalidConfigValueError {
                    field: "log_format".to_string(),
                    value: name.to_string(),
                    reason: LogFormat::ALLOWED.to_string(),
                })?
            }
        };

        Ok(Self {
            data_file,
            verbose: verbose || file.is_some_and(TomlConfig::verbose),
            log_format,
        })
    }
}

impl ConfigProvider for AppConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}
