#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::adapters::csv_store::current_calendar_year;
use crate::adapters::render::OutputFormat;
use crate::core::progress::SearchProgress;
use crate::utils::error::{Result, Tm8sError};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_CSV_PATH: &str = "players_database.csv";

/// 合併後的執行設定：命令列 > TOML > 預設值
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub csv_path: String,
    pub current_year: i32,
    pub color: bool,
    pub format: OutputFormat,
    pub progress: Option<SearchProgress>,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            current_year: current_calendar_year(),
            color: true,
            format: OutputFormat::Text,
            progress: None,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let mut settings = Self::default();

        if let Some(path) = &config.data.csv_path {
            settings.csv_path = path.clone();
        }
        if let Some(year) = config.data.current_year {
            settings.current_year = year;
        }
        if let Some(color) = config.display.color {
            settings.color = color;
        }
        if let Some(format) = &config.display.format {
            settings.format = parse_format("display.format", format)?;
        }
        if let Some(progress) = config.progress.as_ref() {
            if config.progress_enabled() {
                let defaults = SearchProgress::default();
                settings.progress = Some(SearchProgress::new(
                    progress.step.unwrap_or(defaults.step()),
                    progress
                        .tick_ms
                        .map(Duration::from_millis)
                        .unwrap_or(defaults.tick()),
                ));
            }
        }
        settings.log_level = config.log_level().map(str::to_string);

        Ok(settings)
    }
}

pub fn parse_format(field_name: &str, value: &str) -> Result<OutputFormat> {
    OutputFormat::from_name(value).ok_or_else(|| Tm8sError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!(
            "Unsupported format. Valid formats: {}",
            OutputFormat::NAMES.join(", ")
        ),
    })
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data.csv_path", &self.csv_path)?;
        validation::validate_year("data.current_year", self.current_year)?;
        Ok(())
    }
}
