use std::path::PathBuf;
use thiserror::Error;

/// Batch-level errors. Any of these aborts the current run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Required columns missing in {source_name}: {}", missing.join(", "))]
    MissingColumns {
        source_name: String,
        missing: Vec<String>,
    },

    #[error("Cannot create output directory {}: {message}", path.display())]
    OutputDir { path: PathBuf, message: String },

    #[error("Photo matching failed: {0}")]
    Photos(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a missing-columns error for a named input
    pub fn missing_columns(source_name: impl Into<String>, missing: Vec<String>) -> Self {
        Self::MissingColumns {
            source_name: source_name.into(),
            missing,
        }
    }

    /// Create an output directory error
    pub fn output_dir(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::OutputDir {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a photo matching error
    pub fn photos_error(msg: impl Into<String>) -> Self {
        Self::Photos(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if the error is caused by the input data itself rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InputNotFound { .. }
                | AppError::MissingColumns { .. }
                | AppError::Csv(_)
                | AppError::Workbook(_)
        )
    }
}

/// Per-record name problems. These are logged and recovered from, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name field is empty")]
    Empty,

    #[error("cannot split '{name}' into first and last name ({tokens} tokens)")]
    Ambiguous { name: String, tokens: usize },
}

impl NameError {
    /// Create an ambiguous name error
    pub fn ambiguous(name: impl Into<String>, tokens: usize) -> Self {
        Self::Ambiguous {
            name: name.into(),
            tokens,
        }
    }

    /// Whether the record is kept with an empty field. Ambiguous names drop the row.
    pub fn keeps_record(&self) -> bool {
        matches!(self, NameError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_missing_columns_message_lists_headers() {
        let error = AppError::missing_columns(
            "rosters.csv",
            vec!["Team".to_string(), "Sweater".to_string()],
        );
        assert_eq!(
            error.to_string(),
            "Required columns missing in rosters.csv: Team, Sweater"
        );
        assert!(error.is_input_error());
    }

    #[test]
    fn test_input_not_found_message() {
        let error = AppError::input_not_found("/tmp/nope.csv");
        assert_eq!(error.to_string(), "Input file not found: /tmp/nope.csv");
        assert!(error.is_input_error());
    }

    #[test]
    fn test_output_dir_is_not_input_error() {
        let error = AppError::output_dir("/root/csv", "permission denied");
        assert!(!error.is_input_error());
        assert_eq!(
            error.to_string(),
            "Cannot create output directory /root/csv: permission denied"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: AppError = io.into();
        assert!(matches!(error, AppError::Io(_)));
    }

    #[test]
    fn test_only_empty_names_keep_the_record() {
        assert!(NameError::Empty.keeps_record());
        let error = NameError::ambiguous("Anna Maria De La Cruz", 5);
        assert!(!error.keeps_record());
        assert_eq!(
            error.to_string(),
            "cannot split 'Anna Maria De La Cruz' into first and last name (5 tokens)"
        );
    }
}
