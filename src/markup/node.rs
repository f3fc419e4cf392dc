// Slot node - one placeholder in the render tree
//
// A slot accumulates attribute and text bindings during populate and is
// serialized for the host rendering engine afterwards. Repeated regions
// (option lists, transaction rows) nest child slots under `items`.

use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// A single named placeholder in a markup template.
///
/// Slots start out present and empty. Panels bind attributes and text onto
/// them; a detached slot drops out of the serialized tree entirely, so the
/// host engine never sees bindings of a hidden section.
#[derive(Debug, Clone)]
pub struct Slot {
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    items: Vec<Slot>,
    present: bool,
}

impl Default for Slot {
    fn default() -> Self {
        Self::new()
    }
}

impl Slot {
    /// Create an empty, present slot.
    pub fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
            text: None,
            items: Vec::new(),
            present: true,
        }
    }

    /// Overwrite an attribute value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append to an attribute value with a single-space separator.
    ///
    /// The existing value comes first, the appended value second. On an
    /// unset attribute this behaves like `set_attr`.
    pub fn append_attr(&mut self, name: impl Into<String>, value: &str) {
        let name = name.into();
        match self.attributes.get_mut(&name) {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(value);
            }
            _ => {
                self.attributes.insert(name, value.to_string());
            }
        }
    }

    /// Current value of an attribute, if bound.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set the slot's text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The slot's text content, if bound.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Add a repeated child item (list rows, buttons in a group).
    pub fn add_item(&mut self, item: Slot) {
        self.items.push(item);
    }

    /// Repeated child items in insertion order.
    pub fn items(&self) -> &[Slot] {
        &self.items
    }

    /// Remove the slot from the output tree entirely.
    ///
    /// Detaching is stronger than styling invisible: the serialized page
    /// carries no trace of the slot or anything bound to it.
    pub fn detach(&mut self) {
        self.present = false;
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Serialize for the host rendering engine.
    ///
    /// Returns `Value::Null` for a detached slot; callers omit null slots
    /// from the enclosing tree. Empty fields are not emitted.
    pub fn render(&self) -> Value {
        if !self.present {
            return Value::Null;
        }
        let mut out = Map::new();
        if !self.attributes.is_empty() {
            out.insert("attributes".to_string(), json!(self.attributes));
        }
        if let Some(text) = &self.text {
            out.insert("text".to_string(), json!(text));
        }
        if !self.items.is_empty() {
            let items: Vec<Value> = self.items.iter().map(Slot::render).collect();
            out.insert("items".to_string(), Value::Array(items));
        }
        Value::Object(out)
    }
}
