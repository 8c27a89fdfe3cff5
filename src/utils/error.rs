use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot access {}: {source}", path.display())]
    FileAccessError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing column '{column}' on line {line}")]
    MissingColumnError { column: String, line: u64 },

    #[error("Input table {} has no header row", path.display())]
    EmptyInputError { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::FileAccessError {
            path: path.into(),
            source,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. }
        )
    }

    /// 依錯誤類型決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FileAccessError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("File not found: {}", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path.display())
                }
                _ => self.to_string(),
            },
            EtlError::MissingColumnError { column, line } => format!(
                "Row on line {} has no '{}' column; check the input header",
                line, column
            ),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
