use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 輸入或配置問題，使用者可自行修正
    Configuration,
    /// 儲存層或系統層失敗
    Critical,
}

impl DedupError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlParseError(_) => ErrorSeverity::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::StorageError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the catalog file exists and is readable",
            Self::SerializationError(_) => {
                "Check that the catalog is valid JSON with `users` and `global` entries"
            }
            Self::TomlParseError(_) => "Fix the syntax of the TOML configuration file",
            Self::StorageError { .. } => "Retry the check once the recipe store is reachable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration values and command-line flags"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Configuration => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DedupError>;
