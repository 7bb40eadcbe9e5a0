use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to start '{command}': {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    /// 對應到行程結束碼，沿用 shell 的慣例
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::SpawnError { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => 126,
                _ => 127,
            },
            _ => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RunnerError::IoError(e) => format!("無法讀取檔案: {}", e),
            RunnerError::SerializationError(e) => format!("無法輸出執行摘要: {}", e),
            RunnerError::ConfigError { message } => format!("設定錯誤: {}", message),
            RunnerError::ConfigValidationError { field, message } => {
                format!("設定 '{}' 有誤: {}", field, message)
            }
            RunnerError::InvalidConfigValueError { field, value, reason } => {
                format!("設定 '{}' 的值 '{}' 無效: {}", field, value, reason)
            }
            RunnerError::SpawnError { command, .. } => format!("無法執行指令: {}", command),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RunnerError::IoError(_) => "Check that the config file exists and is readable",
            RunnerError::SerializationError(_) => "Re-run with --verbose to inspect the report",
            RunnerError::ConfigError { .. }
            | RunnerError::ConfigValidationError { .. }
            | RunnerError::InvalidConfigValueError { .. } => {
                "Fix the [[checks]] entries in the config file"
            }
            RunnerError::SpawnError { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => "Make sure the program is executable",
                _ => "Install the tool or make sure it is on PATH",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
