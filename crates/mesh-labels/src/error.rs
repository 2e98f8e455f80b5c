//! Error types for mesh-labels

/// Result type for label operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a label.
///
/// Every variant is an invalid-input error: the caller passed values that can
/// never produce a label, so retrying with the same arguments is pointless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The model or application name was empty.
    #[error("{field} must be at least 1 character long")]
    EmptyName { field: &'static str },

    /// Prefix, suffix, digest and separators leave no room for the names.
    #[error(
        "fixed label portion (prefix, suffix, hash and separators) is too long ({fixed_length} chars); \
         must leave at least 1 character each for the model and app names within {max_length} characters"
    )]
    FixedPortionTooLong {
        fixed_length: usize,
        max_length: usize,
    },
}

impl Error {
    /// Whether this error was caused by the arguments rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyName { .. } | Self::FixedPortionTooLong { .. })
    }
}
