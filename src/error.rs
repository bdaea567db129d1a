//! Error types for the release tooling.
//!
//! Every failure kind surfaces here so each binary's `main` can map it to a
//! process exit code in one place instead of exiting from nested logic.

use thiserror::Error;

/// Main error type for lcg release operations.
#[derive(Error, Debug)]
pub enum LcgError {
    #[error("{0} is not set")]
    MissingToken(String),

    #[error("invalid version file: {0}")]
    Version(String),

    #[error("invalid artifact directory: {0}")]
    Artifacts(String),

    #[error("{context} failed with status {status}: {body}")]
    Api {
        context: String,
        status: u16,
        body: String,
    },

    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid authorization header: {0}")]
    AuthHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using LcgError
pub type Result<T> = std::result::Result<T, LcgError>;

impl LcgError {
    /// Create an API error carrying the unexpected status and response body.
    pub fn api(context: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            context: context.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a version file error
    pub fn version(msg: impl Into<String>) -> Self {
        Self::Version(msg.into())
    }

    /// Create an artifact directory error
    pub fn artifacts(msg: impl Into<String>) -> Self {
        Self::Artifacts(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = LcgError::MissingToken("GITHUB_TOKEN".into());
        assert_eq!(err.to_string(), "GITHUB_TOKEN is not set");

        let err = LcgError::api("release lookup", 500, "oops");
        assert_eq!(
            err.to_string(),
            "release lookup failed with status 500: oops"
        );

        let err = LcgError::version("VERSION.txt not found");
        assert_eq!(
            err.to_string(),
            "invalid version file: VERSION.txt not found"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = LcgError::api("release creation", 422, "");
        assert!(matches!(err, LcgError::Api { status: 422, .. }));

        let err = LcgError::artifacts("empty");
        assert!(matches!(err, LcgError::Artifacts(_)));
    }

    #[test]
    fn test_from_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LcgError = io_err.into();
        assert!(matches!(err, LcgError::Io(_)));
    }
}
