pub mod classify;
pub mod locale;
pub mod session;
pub mod speech;

use thiserror::Error;

use crate::speech::recognition::RecognitionError;

#[derive(Error, Debug, Clone)]
pub enum KrishiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Speech recognition error: {0}")]
    RecognitionError(#[from] RecognitionError),
}

impl KrishiError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // A missing table entry means the build itself is wrong
            KrishiError::ConfigError(_) => false,
            // Recognition errors end the listening attempt, nothing more
            KrishiError::RecognitionError(_) => true,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            KrishiError::ConfigError(_) => {
                "Configuration error. Please check the language tables.".to_string()
            }
            KrishiError::RecognitionError(e) => e.user_message(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KrishiError>;
