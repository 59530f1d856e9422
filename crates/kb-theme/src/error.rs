//! Theme error types.
//!
//! All errors stem from static, author-controlled configuration. None of
//! them is retryable: [`ValidationError`] is fixed by correcting the
//! offending entry, [`ConfigurationError`] is fatal and must abort startup
//! since serving with an inconsistent sidebar registry would silently show
//! wrong navigation.

/// Error for malformed navigation entry fields.
///
/// Surfaced at construction time, before the entry enters any collection.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Navigation label is empty.
    #[error("navigation label cannot be empty")]
    EmptyLabel,
    /// Navigation target does not start with '/'.
    #[error("navigation target {0:?} must start with '/'")]
    RelativeTarget(String),
}

/// Error for an inconsistent or ambiguous sidebar registry.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Sidebar prefix is not of the form `/section/`.
    #[error("sidebar prefix {0:?} must start and end with '/'")]
    InvalidPrefix(String),
    /// Two registrations used the same prefix. Equal-length prefixes are
    /// the only way resolution could be ambiguous, so this is rejected at
    /// registration rather than surfacing at resolve time.
    #[error("sidebar prefix {0:?} is already registered")]
    DuplicatePrefix(String),
    /// An entry target is not nested under its sidebar prefix.
    #[error("entry target {target:?} does not start with sidebar prefix {prefix:?}")]
    TargetOutsidePrefix {
        /// The prefix the group was registered under.
        prefix: String,
        /// The offending entry target.
        target: String,
    },
    /// Mutation was attempted after the registry was frozen.
    #[error("sidebar registry is frozen and cannot be modified")]
    Frozen,
}
