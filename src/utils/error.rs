use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Cannot read input file '{}': {}", .path.display(), .source)]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cannot write output file '{}': {}", .path.display(), .source)]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Health check failed with status {status}: {body}")]
    HealthCheck { status: u16, body: String },

    #[error("Plan file parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Output,
    Service,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SmokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmokeError::InputFile { .. } => ErrorCategory::Input,
            SmokeError::Request { .. } => ErrorCategory::Network,
            SmokeError::OutputFile { .. } => ErrorCategory::Output,
            SmokeError::HealthCheck { .. } => ErrorCategory::Service,
            SmokeError::TomlError(_)
            | SmokeError::ConfigError { .. }
            | SmokeError::InvalidConfigValueError { .. }
            | SmokeError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 服務暫時不可用，重跑通常即可
            ErrorCategory::Network | ErrorCategory::Service => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SmokeError::InputFile { path, .. } => {
                format!("Input document not found or unreadable: {}", path.display())
            }
            SmokeError::Request { url, .. } => {
                format!("Could not reach the conversion service at {}", url)
            }
            SmokeError::OutputFile { path, .. } => {
                format!("Could not save the response to {}", path.display())
            }
            SmokeError::HealthCheck { status, .. } => {
                format!("The conversion service answered the health check with {}", status)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SmokeError::InputFile { .. } => {
                "Check --docs-dir or the input paths in the plan file"
            }
            SmokeError::Request { .. } => {
                "Make sure the conversion service is running and --base-url points at it"
            }
            SmokeError::OutputFile { .. } => {
                "Check that --output-path exists and is writable"
            }
            SmokeError::HealthCheck { status: 401, .. } => {
                "The API key was rejected; pass the service's key with --api-key or API_KEY"
            }
            SmokeError::HealthCheck { .. } => "Inspect the conversion service logs",
            _ => "Fix the configuration and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;
