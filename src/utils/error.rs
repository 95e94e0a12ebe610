use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Image API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid base64 image payload: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("Image generation error: {message}")]
    GenerationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Upstream,
    System,
}

impl DesignerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DesignerError::ConfigNotFound { .. }
            | DesignerError::ConfigParseError { .. }
            | DesignerError::MissingConfigError { .. }
            | DesignerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DesignerError::ValidationError { .. } => ErrorCategory::Input,
            DesignerError::HttpError(_)
            | DesignerError::ApiError { .. }
            | DesignerError::DecodeError(_)
            | DesignerError::GenerationError { .. } => ErrorCategory::Upstream,
            DesignerError::IoError(_) | DesignerError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Process exit code used by the binary when this error aborts startup or a headless run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => 1,
            ErrorCategory::Upstream => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DesignerError::HttpError(e) if e.is_timeout() => {
                "The image service did not answer in time".to_string()
            }
            DesignerError::HttpError(_) => "Could not reach the image service".to_string(),
            DesignerError::ApiError { message, .. } => {
                format!("The image service rejected the request: {}", message)
            }
            DesignerError::ConfigNotFound { path } => {
                format!("Configuration file '{}' does not exist", path)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DesignerError::ConfigNotFound { .. } => {
                "Pass --config with the path to a params.yml file"
            }
            DesignerError::ConfigParseError { .. } => {
                "Check the YAML syntax and that n_image is a positive integer"
            }
            DesignerError::MissingConfigError { .. } => {
                "Set OPENAI_API_KEY in the environment or in a .env file"
            }
            DesignerError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the parameter file"
            }
            DesignerError::ValidationError { .. } => "Adjust the input and try again",
            DesignerError::HttpError(_) => "Check the network connection and --api-base",
            DesignerError::ApiError { status: 401, .. } => "Verify that OPENAI_API_KEY is valid",
            DesignerError::ApiError { status: 429, .. } => "Wait a moment before retrying",
            DesignerError::ApiError { .. } | DesignerError::GenerationError { .. } => {
                "Try rephrasing the description or retry later"
            }
            DesignerError::DecodeError(_) => "Retry the request; the service sent corrupt data",
            DesignerError::IoError(_) => "Check file permissions and available disk space",
            DesignerError::SerializationError(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, DesignerError>;
