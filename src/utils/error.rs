use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Cannot read input file '{path}': {source}", path = path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl AnalyzeError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileAccess { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileAccess { .. } => ErrorSeverity::High,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FileAccess { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Input file '{}' does not exist", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading '{}'", path.display())
                }
                _ => format!("Failed to read '{}': {}", path.display(), source),
            },
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' = '{}' is invalid: {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FileAccess { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check the path, or pass the file explicitly with --input"
                }
                std::io::ErrorKind::PermissionDenied => "Check the file permissions",
                _ => "Make sure the path points to a readable text file",
            },
            Self::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            Self::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
