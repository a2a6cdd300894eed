use thiserror::Error;

#[derive(Error, Debug)]
pub enum Tm8sError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data error at row {row}: {message}")]
    DataError { row: u64, message: String },

    #[error("Unknown player: {name}")]
    UnknownPlayer { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl Tm8sError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Tm8sError::IoError(_) => ErrorCategory::Io,
            Tm8sError::CsvError(_)
            | Tm8sError::SerializationError(_)
            | Tm8sError::DataError { .. } => ErrorCategory::Data,
            Tm8sError::ConfigError { .. }
            | Tm8sError::ConfigValidationError { .. }
            | Tm8sError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Tm8sError::UnknownPlayer { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Tm8sError::IoError(_) => {
                "Check that the data file exists and is readable".to_string()
            }
            Tm8sError::CsvError(_) | Tm8sError::DataError { .. } => {
                "Check the CSV columns: Player Name, Club, Start Year, End Year".to_string()
            }
            Tm8sError::SerializationError(_) => "Try the text output format".to_string(),
            Tm8sError::ConfigError { .. } | Tm8sError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            Tm8sError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration or command line", field)
            }
            Tm8sError::UnknownPlayer { .. } => {
                "Use `tm8s search <name>` to find the exact player name".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Tm8sError::IoError(e) => format!("Could not access a file: {}", e),
            Tm8sError::CsvError(e) => format!("The player database could not be read: {}", e),
            Tm8sError::DataError { row, message } => {
                format!("The player database has a bad row ({}): {}", row, message)
            }
            Tm8sError::UnknownPlayer { name } => {
                format!("No player named '{}' in the database", name)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Tm8sError>;
