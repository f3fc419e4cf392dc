//! Collaborator seams for the binding layer
//!
//! Panels never reach into a global service registry. The persistence and
//! localization collaborators are passed into each populate call as trait
//! objects, so tests and the demo binary can substitute in-memory
//! implementations without any ambient state.

use crate::domain::DocLog;
use std::collections::BTreeMap;

/// Persistence seam: resolve a document log entry by identifier.
///
/// A lookup miss is a normal, expected outcome - callers render a defined
/// absent state, never an error. Caching and pooling are the collaborator's
/// concern; this layer calls once per populate and does not retry.
pub trait DocLogLookup {
    fn find_by_id(&self, id: &str) -> Option<&DocLog>;
}

/// Localization seam: resolve a message key for a locale.
///
/// The result is treated as an opaque string; no formatting or
/// interpolation happens in this layer.
pub trait Localizer {
    fn translate(&self, key: &str, locale: &str) -> String;
}

/// In-memory document store for tests and the demo binary.
#[derive(Debug, Default)]
pub struct InMemoryDocStore {
    docs: BTreeMap<String, DocLog>,
}

impl InMemoryDocStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc: DocLog) {
        self.docs.insert(doc.id.clone(), doc);
    }
}

impl DocLogLookup for InMemoryDocStore {
    fn find_by_id(&self, id: &str) -> Option<&DocLog> {
        self.docs.get(id)
    }
}

/// In-memory message catalog keyed by locale then message key.
///
/// Resolution order: exact locale, then the `en` fallback, then the key
/// itself. Returning the key keeps a missing translation visible in the
/// rendered page instead of producing an empty label.
#[derive(Debug, Default)]
pub struct MessageCatalog {
    messages: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.messages
            .entry(locale.into())
            .or_default()
            .insert(key.into(), message.into());
    }

    /// Catalog pre-loaded with the English strings the stock panels use.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (key, message) in [
            ("btn-ok", "OK"),
            ("btn-cancel", "Cancel"),
            ("btn-copy", "Copy to clipboard"),
            ("doclog-no-transactions", "No transactions."),
            ("export-pdf", "Export as PDF"),
            ("export-csv", "Export as CSV"),
            ("export-xml", "Export as XML"),
        ] {
            catalog.insert("en", key, message);
        }
        catalog
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.messages
            .get(locale)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }
}

impl Localizer for MessageCatalog {
    fn translate(&self, key: &str, locale: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup("en", key))
            .unwrap_or(key)
            .to_string()
    }
}
