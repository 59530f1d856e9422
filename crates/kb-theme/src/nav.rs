//! Validated navigation link values.

use serde::Serialize;

use crate::error::ValidationError;

/// A single labeled link, used both in the top navigation bar and inside
/// sidebar groups.
///
/// Immutable once constructed; validation happens in [`NavEntry::new`] so
/// every entry reaching the renderer has a non-empty label and an absolute
/// route target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    label: String,
    target: String,
}

impl NavEntry {
    /// Create a navigation entry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyLabel`] if `label` is empty and
    /// [`ValidationError::RelativeTarget`] if `target` does not start
    /// with '/'.
    pub fn new(
        label: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        let target = target.into();

        if label.is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        if !target.starts_with('/') {
            return Err(ValidationError::RelativeTarget(target));
        }

        Ok(Self { label, target })
    }

    /// User-facing link text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Route path the entry links to (always starts with '/').
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}
