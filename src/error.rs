/// Errors produced while building an alphabet or encoding/decoding identifiers.
///
/// Every variant carries a short reason. The `Display` text is what the panicking
/// `*_or_panic` entry points report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The alphabet was rejected at construction time.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
    /// The value handed to `encode` is not a UUID in one of the accepted shapes.
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),
    /// The string handed to `decode` is not a valid encoding under the alphabet.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The converter produced output of the wrong width. Indicates a bug, not bad input.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl Error {
    pub(crate) fn invalid_alphabet(reason: impl Into<String>) -> Self {
        Self::InvalidAlphabet(reason.into())
    }

    pub(crate) fn invalid_uuid(reason: impl Into<String>) -> Self {
        Self::InvalidUuid(reason.into())
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Returns `true` when the error was caused by the caller's input or configuration.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::InternalInvariant(_))
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
