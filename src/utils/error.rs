use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("No real roots (discriminant {discriminant})")]
    NoRealRootsError { discriminant: f64 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Numeric overflow: {message}")]
    NumericOverflowError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Math,
    Input,
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

impl AddonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AddonError::ApiError(_) | AddonError::HttpStatusError { .. } => ErrorCategory::Network,
            AddonError::NoRealRootsError { .. } | AddonError::NumericOverflowError { .. } => {
                ErrorCategory::Math
            }
            AddonError::ValidationError { .. } => ErrorCategory::Input,
            AddonError::ConfigValidationError { .. }
            | AddonError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AddonError::IoError(_)
            | AddonError::SerializationError(_)
            | AddonError::TaskError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 無實根是預期中的結果，不算真正的錯誤
            AddonError::NoRealRootsError { .. } => ErrorSeverity::Low,
            AddonError::ApiError(_) | AddonError::HttpStatusError { .. } => ErrorSeverity::Medium,
            AddonError::ValidationError { .. }
            | AddonError::NumericOverflowError { .. }
            | AddonError::ConfigValidationError { .. }
            | AddonError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AddonError::IoError(_)
            | AddonError::SerializationError(_)
            | AddonError::TaskError(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether retrying the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AddonError::ApiError(e) => e.is_timeout() || e.is_connect(),
            AddonError::HttpStatusError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AddonError::ApiError(_) => {
                "Check network connectivity, or run with --offline to skip network steps".to_string()
            }
            AddonError::HttpStatusError { status, .. } if *status >= 500 => {
                "The remote server is failing; try again later".to_string()
            }
            AddonError::HttpStatusError { .. } => "Verify the endpoint URL".to_string(),
            AddonError::NoRealRootsError { .. } => {
                "Choose coefficients with b² - 4ac >= 0 for real roots".to_string()
            }
            AddonError::NumericOverflowError { .. } => {
                "Scale the coefficients down to a smaller magnitude".to_string()
            }
            AddonError::ValidationError { .. } => "Check the input values".to_string(),
            AddonError::ConfigValidationError { field, .. }
            | AddonError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the CLI flags or config file", field)
            }
            AddonError::IoError(_) => "Check file paths and permissions".to_string(),
            AddonError::SerializationError(_) | AddonError::TaskError(_) => {
                "This is likely a bug; rerun with --verbose and report it".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Math => format!("Calculation failed: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AddonError>;
