use thiserror::Error;

#[derive(Error, Debug)]
pub enum GmtError {
    #[error("Invalid GMT offset input: '{input}'")]
    InvalidOffsetInput { input: String },

    #[error("Invalid catalog entry '{name}': {reason}")]
    InvalidCatalogEntry { name: String, reason: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Catalog,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GmtError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GmtError::InvalidOffsetInput { .. } => ErrorCategory::Input,
            GmtError::InvalidCatalogEntry { .. } | GmtError::CsvError(_) => ErrorCategory::Catalog,
            GmtError::ConfigValidationError { .. }
            | GmtError::InvalidConfigValueError { .. }
            | GmtError::TomlError(_) => ErrorCategory::Configuration,
            GmtError::IoError(_) | GmtError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Bad user input is retryable; broken catalog or config data is not.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Catalog | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GmtError::InvalidOffsetInput { .. } => "Please enter a valid GMT offset.".to_string(),
            GmtError::InvalidCatalogEntry { name, reason } => {
                format!("The city catalog contains a bad entry '{}': {}", name, reason)
            }
            GmtError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            GmtError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            GmtError::IoError(e) => format!("Could not read a file: {}", e),
            GmtError::CsvError(e) => format!("Could not read the city CSV file: {}", e),
            GmtError::TomlError(e) => format!("Could not parse the configuration file: {}", e),
            GmtError::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Enter a whole number between -11 and 12, e.g. 2 or -4",
            ErrorCategory::Catalog => {
                "Check that every catalog row has a non-empty name and a gmt_offset between -11 and 12"
            }
            ErrorCategory::Configuration => "Check the configuration file against the documented keys",
            ErrorCategory::System => "Check file paths and permissions, then try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, GmtError>;
