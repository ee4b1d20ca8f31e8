use thiserror::Error;

/// An unrecognised mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}` (expected one of: neutral, simple, trader, risks)")]
pub struct ParseModeError(pub String);

/// Failures on the remote interpretation path.
///
/// The heuristic pipeline never produces these; they only come from an
/// [`Interpreter`](crate::Interpreter) implementation.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("Missing text")]
    MissingText,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Model returned invalid JSON. Please try again. ({0})")]
    InvalidOutput(String),
}

impl InterpretError {
    /// HTTP status a server surface would answer with.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::MissingText => 400,
            Self::Transport(_) | Self::Status { .. } => 500,
            Self::InvalidOutput(_) => 502,
        }
    }

    /// Whether the transport layer may retry the same request on its own.
    ///
    /// Invalid output is left to the caller.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::MissingText | Self::InvalidOutput(_) => false,
        }
    }

    #[must_use]
    pub const fn is_invalid_output(&self) -> bool {
        matches!(self, Self::InvalidOutput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(InterpretError::MissingText.http_status(), 400);
        assert_eq!(InterpretError::Transport("reset".into()).http_status(), 500);
        assert_eq!(
            InterpretError::Status {
                status: 503,
                body: String::new()
            }
            .http_status(),
            500
        );
        assert_eq!(InterpretError::InvalidOutput("eof".into()).http_status(), 502);
    }

    #[test]
    fn test_retryable() {
        assert!(InterpretError::Transport("timeout".into()).is_retryable());
        assert!(
            InterpretError::Status {
                status: 429,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(
            !InterpretError::Status {
                status: 401,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!InterpretError::InvalidOutput("x".into()).is_retryable());
        assert!(!InterpretError::MissingText.is_retryable());
    }
}
