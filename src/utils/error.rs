use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid date/time '{value}': expected {expected}")]
    DateTimeError { value: String, expected: String },

    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    #[error("Master {master_id} does not work on {date}")]
    MasterNotWorking { master_id: u32, date: String },

    #[error("Appointment {start}-{end} does not fit the working hours of master {master_id}")]
    OutsideWorkingHours {
        master_id: u32,
        start: String,
        end: String,
    },

    #[error("Time slot is already taken by appointment {appointment_id}")]
    SlotTaken { appointment_id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Configuration,
    Validation,
    Scheduling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SalonError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, key: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            key: key.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Storage
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } | Self::DateTimeError { .. } | Self::NotFound { .. } => {
                ErrorCategory::Validation
            }
            Self::MasterNotWorking { .. }
            | Self::OutsideWorkingHours { .. }
            | Self::SlotTaken { .. } => ErrorCategory::Scheduling,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Scheduling => ErrorSeverity::Medium,
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not access the data file: {}", e),
            Self::SerializationError(e) => format!("The data file is not valid JSON: {}", e),
            Self::CsvError(e) => format!("Could not write the CSV export: {}", e),
            Self::MasterNotWorking { date, .. } => {
                format!("The master does not work on {}", date)
            }
            Self::OutsideWorkingHours { .. } => {
                "The appointment does not fit the master's working hours".to_string()
            }
            Self::SlotTaken { .. } => "This time is already taken".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that the data file path exists and is writable".to_string(),
            Self::SerializationError(_) => {
                "Fix or remove the data file; a missing file starts an empty salon".to_string()
            }
            Self::CsvError(_) => "Check the export destination".to_string(),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
            Self::ValidationError { .. } => "Fill in every required field".to_string(),
            Self::DateTimeError { expected, .. } => format!("Use the format {}", expected),
            Self::NotFound { entity, .. } => {
                format!("List the existing {} entries and pick one of them", entity.to_lowercase())
            }
            Self::MasterNotWorking { .. } => {
                "Add a working window for the master with `schedule add` first".to_string()
            }
            Self::OutsideWorkingHours { .. } => {
                "Pick a start time so the whole service ends inside a working window".to_string()
            }
            Self::SlotTaken { .. } => "Choose another time or another master".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SalonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduling_errors_are_medium_severity() {
        let err = SalonError::SlotTaken { appointment_id: 3 };
        assert_eq!(err.category(), ErrorCategory::Scheduling);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "This time is already taken");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = SalonError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_validation_and_config_errors_are_high_severity() {
        assert_eq!(SalonError::validation("x").severity(), ErrorSeverity::High);
        let err = SalonError::ConfigError {
            message: "x".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
    }

    #[test]
    fn test_not_found_message() {
        let err = SalonError::not_found("Service", 99);
        assert_eq!(err.to_string(), "Service not found: 99");
        assert!(err.recovery_suggestion().contains("service"));
    }
}
