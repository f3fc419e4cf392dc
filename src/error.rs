// Error types for the binding layer
//
// Only configuration mistakes are errors here. Domain-data edge cases
// (missing document log, empty transaction list) are normal states with
// their own renderings and never surface through this type.

use thiserror::Error;

/// Errors raised while binding values onto a markup fragment.
#[derive(Debug, Error)]
pub enum BindError {
    /// A panel referenced a slot the fragment's template does not declare.
    ///
    /// This is a build-time mismatch between binding code and template,
    /// not a runtime condition to recover from.
    #[error("slot '{slot}' does not exist in fragment '{fragment}'")]
    UnknownSlot { fragment: String, slot: String },

    /// A theme override file failed to parse.
    #[error("invalid theme file: {0}")]
    Theme(#[from] toml::de::Error),
}

impl BindError {
    pub(crate) fn unknown_slot(fragment: &str, slot: &str) -> Self {
        Self::UnknownSlot {
            fragment: fragment.to_string(),
            slot: slot.to_string(),
        }
    }
}
