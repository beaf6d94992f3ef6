//! Error type definitions for sampling operations

use thiserror::Error as ThisError;

/// Primary error type for sampling operations
///
/// Stalls (too few buffered bytes, a full output buffer, a producer that is
/// not ready) are never errors; they are reported through
/// [`Tick::Stalled`](crate::Tick::Stalled).
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Operation that checked the length
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Why it was rejected
        message: &'static str,
    },

    /// `start` was called while a run is still alive
    #[error("{context}: a sampling run is already in progress")]
    Busy {
        /// Sampler that refused the start
        context: &'static str,
    },

    /// The producer ended its stream before enough candidates were accepted
    #[error("byte stream ended after {accepted} of {required} coefficients")]
    StreamExhausted {
        /// Coefficients accepted before the stream ended
        accepted: usize,
        /// Coefficients a run must emit
        required: usize,
    },

    /// The producer reported a failure of its own
    #[error("{context}: producer failure: {message}")]
    Producer {
        /// Producer that failed
        context: &'static str,
        /// Failure description
        message: &'static str,
    },

    /// A handshake or ordering contract was violated by a collaborator
    #[error("{context}: protocol violation: {message}")]
    Protocol {
        /// Where the violation was detected
        context: &'static str,
        /// What was violated
        message: &'static str,
    },

    /// A driver gave up after its tick budget
    #[error("sampling run did not finish within {limit} ticks")]
    TickLimit {
        /// The exhausted budget
        limit: u64,
    },
}

/// Result type for sampling operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Busy { .. } => Self::Busy { context },
            Self::Producer { message, .. } => Self::Producer { context, message },
            Self::Protocol { message, .. } => Self::Protocol { context, message },
            other @ (Self::StreamExhausted { .. } | Self::TickLimit { .. }) => other,
        }
    }

    /// Whether the error aborted a run that was already in flight
    pub fn is_run_failure(&self) -> bool {
        matches!(
            self,
            Self::StreamExhausted { .. } | Self::Producer { .. } | Self::Protocol { .. }
        )
    }
}
