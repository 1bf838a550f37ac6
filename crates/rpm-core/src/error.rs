//! Error types for the lesson-plan generator library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Stage;

/// The single notification shown to users for any provider failure.
pub const PROVIDER_FAILURE_NOTICE: &str = "Gagal menghubungi AI. Silakan coba lagi.";

/// Errors raised while talking to a text-generation provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status
    #[error("Provider returned status {status}: {message}")]
    Api { status: u16, message: String },
    /// Network, TLS or timeout failure before a response was received
    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body could not be understood
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
    /// No API key was configured for a provider that needs one
    #[error("No API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,
}

/// Comprehensive error type for all generation operations.
#[derive(Error, Debug)]
pub enum RpmError {
    /// A provider call failed while producing one stage of the document
    #[error("Generation failed during {stage}: {source}")]
    Provider {
        stage: Stage,
        #[source]
        source: ProviderError,
    },
    /// A toolbox provider call failed
    #[error("Toolbox generation failed: {source}")]
    Toolbox {
        #[source]
        source: ProviderError,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A generation was triggered while another was still in flight
    #[error("A generation is already in progress")]
    GenerationInProgress,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RpmError {
        RpmError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RpmError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl fmt::Display) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    /// Whether this error came from the text-generation provider.
    ///
    /// Provider failures of every kind are reported to users as one generic
    /// notification; callers use this to pick that message.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::Toolbox { .. })
    }

    /// The message suitable for showing to users.
    ///
    /// Provider failures collapse into [`PROVIDER_FAILURE_NOTICE`]; every
    /// other error is shown as is.
    pub fn user_message(&self) -> String {
        if self.is_provider_failure() {
            PROVIDER_FAILURE_NOTICE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Extension trait attaching a generation stage to provider results.
pub trait ProviderResultExt<T> {
    /// Map a provider error into [`RpmError::Provider`] for the given stage.
    fn in_stage(self, stage: Stage) -> Result<T>;
}

impl<T> ProviderResultExt<T> for std::result::Result<T, ProviderError> {
    fn in_stage(self, stage: Stage) -> Result<T> {
        self.map_err(|source| RpmError::Provider { stage, source })
    }
}

/// Extension trait for file system results.
pub trait FsResultExt<T> {
    /// Map an I/O error into [`RpmError::FileSystem`] for the given path.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| RpmError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, RpmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_carries_stage() {
        let err: Result<()> = Err(ProviderError::MissingApiKey).in_stage(Stage::B);
        let err = err.unwrap_err();
        assert!(err.is_provider_failure());
        assert!(err.to_string().contains("stage B"));
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = RpmError::invalid_input("sessions").with_reason("must be a number");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'sessions': must be a number"
        );
        assert!(!err.is_provider_failure());
    }

    #[test]
    fn test_user_message_hides_provider_details() {
        let err: Result<()> = Err(ProviderError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })
        .in_stage(Stage::A);
        assert_eq!(err.unwrap_err().user_message(), PROVIDER_FAILURE_NOTICE);

        let err = RpmError::invalid_input("sessions").with_reason("must be a number");
        assert_eq!(err.user_message(), err.to_string());
    }
}
