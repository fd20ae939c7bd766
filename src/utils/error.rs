use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Identifier pool '{pool}' is empty")]
    EmptyPoolError { pool: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
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

impl PublishError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PublishError::HttpError(_) => ErrorCategory::Network,
            PublishError::SerializationError(_) | PublishError::CsvError(_) => ErrorCategory::Data,
            PublishError::ConfigValidationError { .. }
            | PublishError::InvalidConfigValueError { .. }
            | PublishError::EmptyPoolError { .. } => ErrorCategory::Configuration,
            PublishError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 連線失敗通常是目標服務尚未啟動，重跑即可
            PublishError::HttpError(_) => ErrorSeverity::Medium,
            PublishError::SerializationError(_) | PublishError::CsvError(_) => ErrorSeverity::High,
            PublishError::ConfigValidationError { .. }
            | PublishError::InvalidConfigValueError { .. }
            | PublishError::EmptyPoolError { .. } => ErrorSeverity::High,
            PublishError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PublishError::HttpError(e) if e.is_connect() => {
                "Make sure the orders service is running and reachable at the configured endpoint"
                    .to_string()
            }
            PublishError::HttpError(e) if e.is_timeout() => {
                "The orders service did not answer in time; raise --timeout-seconds or check the service"
                    .to_string()
            }
            PublishError::HttpError(_) => "Check the endpoint URL and the network connection".to_string(),
            PublishError::SerializationError(_) => "Report this as a bug: generated orders must always serialize".to_string(),
            PublishError::CsvError(_) | PublishError::IoError(_) => {
                "Check that the report path is writable".to_string()
            }
            PublishError::ConfigValidationError { field, .. }
            | PublishError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            PublishError::EmptyPoolError { pool } => {
                format!("Configure a {} pool size of at least 1", pool)
            }
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not publish orders: {}", self),
            ErrorCategory::Data => format!("Could not encode order data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
