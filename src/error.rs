// Error taxonomy shared by the server and the packer
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The artifact could not be read, decoded or failed its shape checks.
    #[error("failed to load artifact: {0}")]
    Artifact(String),

    /// A form field was missing or did not hold a real number.
    #[error("invalid value for field {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Scaling or prediction failed for an otherwise valid input.
    #[error("prediction pipeline failed: {0}")]
    Pipeline(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline(msg.into())
    }

    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<candle::Error> for AppError {
    fn from(e: candle::Error) -> Self {
        Self::Pipeline(e.to_string())
    }
}
