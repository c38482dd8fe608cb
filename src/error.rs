//! Error types for ringback-gen.
//!
//! Defines the error codes and the error type used by the generator and
//! the WAV writer.

use std::fmt;

/// Error codes identifying the class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A generation parameter is out of range.
    /// Trigger: negative duration, zero sample rate, amplitude outside (0, 1].
    InvalidParameter,

    /// The output WAV file could not be written.
    /// Trigger: missing directory, permission denied, disk full.
    WriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::WriteFailed => "WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "A tone generation parameter is out of range",
            ErrorCode::WriteFailed => "Failed to write the output WAV file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => {
                "Use a non-negative duration, a sample rate above zero, \
                 an amplitude in (0, 1] and positive frequencies"
            }
            ErrorCode::WriteFailed => {
                "Check that the output directory is writable and has free space, \
                 or point RINGBACK_OUTPUT_PATH somewhere else. \
                 A partially written file should be discarded"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ringback generation.
#[derive(Debug)]
pub struct RingbackError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RingbackError {
    /// Creates a new RingbackError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new RingbackError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_PARAMETER error.
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidParameter,
            format!("Invalid {}: {}", name, reason.into()),
        )
    }

    /// Creates a WRITE_FAILED error wrapping the underlying cause.
    pub fn write_failed(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let context = context.into();
        let message = format!("{}: {}", context, source);
        Self::with_source(ErrorCode::WriteFailed, message, source)
    }
}

impl fmt::Display for RingbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for RingbackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using RingbackError.
pub type Result<T> = std::result::Result<T, RingbackError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidParameter.as_str(), "INVALID_PARAMETER");
        assert_eq!(ErrorCode::WriteFailed.as_str(), "WRITE_FAILED");
    }

    #[test]
    fn error_code_hints_not_empty() {
        for code in [ErrorCode::InvalidParameter, ErrorCode::WriteFailed] {
            assert!(!code.description().is_empty());
            assert!(!code.recovery_hint().is_empty());
        }
    }

    #[test]
    fn invalid_parameter_display() {
        let err = RingbackError::invalid_parameter("amplitude", "1.5 is above 1.0");
        let text = err.to_string();
        assert!(text.contains("INVALID_PARAMETER"));
        assert!(text.contains("amplitude"));
        assert!(text.contains("Recovery:"));
        assert!(err.source().is_none());
    }

    #[test]
    fn write_failed_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = RingbackError::write_failed("Failed to create WAV file", io);
        assert_eq!(err.code, ErrorCode::WriteFailed);
        assert!(err.message.contains("denied"));
        assert!(err.source().is_some());
    }
}
