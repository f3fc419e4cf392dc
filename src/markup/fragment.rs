// Fragment - the named slot set of one template region
//
// A fragment is constructed from the slot names its template declares and
// is populated exactly once per render. Binding a name the template never
// declared is a configuration error and is surfaced, not recovered:
// it means binding code and template have drifted apart.

use super::node::Slot;
use crate::error::BindError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// How an attribute binding combines with an existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Overwrite the attribute entirely.
    Replace,
    /// Concatenate onto any existing value with a single-space separator,
    /// existing value first. Used to stack a context class onto a base class.
    Append,
}

/// One template region's worth of named slots.
///
/// The whole fragment can be detached, which is how disclosure hides a
/// section: the serialized page then carries no slots from it at all.
#[derive(Debug, Clone)]
pub struct Fragment {
    name: String,
    slots: BTreeMap<String, Slot>,
    present: bool,
}

impl Fragment {
    /// Create a fragment declaring the given slot names.
    pub fn new(name: impl Into<String>, slot_names: &[&str]) -> Self {
        let slots = slot_names
            .iter()
            .map(|n| (n.to_string(), Slot::new()))
            .collect();
        Self {
            name: name.into(),
            slots,
            present: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a slot for inspection.
    pub fn slot(&self, name: &str) -> Result<&Slot, BindError> {
        self.slots
            .get(name)
            .ok_or_else(|| BindError::unknown_slot(&self.name, name))
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Slot, BindError> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| BindError::unknown_slot(&self.name, name))
    }

    /// Bind an attribute value onto a slot.
    pub fn bind_attr(
        &mut self,
        slot: &str,
        attribute: &str,
        value: &str,
        mode: BindMode,
    ) -> Result<(), BindError> {
        let node = self.slot_mut(slot)?;
        match mode {
            BindMode::Replace => node.set_attr(attribute, value),
            BindMode::Append => node.append_attr(attribute, value),
        }
        Ok(())
    }

    /// Bind text content onto a slot.
    pub fn set_text(&mut self, slot: &str, text: impl Into<String>) -> Result<(), BindError> {
        self.slot_mut(slot)?.set_text(text);
        Ok(())
    }

    /// Add a repeated child item under a list slot.
    pub fn add_item(&mut self, slot: &str, item: Slot) -> Result<(), BindError> {
        self.slot_mut(slot)?.add_item(item);
        Ok(())
    }

    /// Detach a single slot from the output tree.
    pub fn detach(&mut self, slot: &str) -> Result<(), BindError> {
        self.slot_mut(slot)?.detach();
        Ok(())
    }

    /// Detach the whole fragment from the output tree.
    pub fn detach_fragment(&mut self) {
        self.present = false;
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Serialize the fragment for the host rendering engine.
    ///
    /// A detached fragment renders as `Value::Null`; detached slots within a
    /// present fragment are omitted from the slot map.
    pub fn render(&self) -> Value {
        if !self.present {
            return Value::Null;
        }
        let mut slots = Map::new();
        for (name, slot) in &self.slots {
            if slot.is_present() {
                slots.insert(name.clone(), slot.render());
            }
        }
        let mut out = Map::new();
        out.insert("fragment".to_string(), Value::String(self.name.clone()));
        out.insert("slots".to_string(), Value::Object(slots));
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment() -> Fragment {
        Fragment::new("badge", &["title", "img", "count"])
    }

    #[test]
    fn test_bind_attr_replace_then_append() {
        let mut f = fragment();
        f.bind_attr("title", "class", "base", BindMode::Replace).unwrap();
        f.bind_attr("title", "class", "appended", BindMode::Append).unwrap();
        assert_eq!(f.slot("title").unwrap().attr("class"), Some("base appended"));
    }

    #[test]
    fn test_replace_resets_appended_value() {
        // Populate convention: base values are written with Replace first,
        // so re-populating a fragment converges instead of accumulating.
        let mut f = fragment();
        for _ in 0..2 {
            f.bind_attr("title", "class", "base", BindMode::Replace).unwrap();
            f.bind_attr("title", "class", "ctx", BindMode::Append).unwrap();
        }
        assert_eq!(f.slot("title").unwrap().attr("class"), Some("base ctx"));
    }

    #[test]
    fn test_unknown_slot_is_configuration_error() {
        let mut f = fragment();
        let err = f
            .bind_attr("no-such-slot", "class", "x", BindMode::Replace)
            .unwrap_err();
        match err {
            BindError::UnknownSlot { fragment, slot } => {
                assert_eq!(fragment, "badge");
                assert_eq!(slot, "no-such-slot");
            }
            other => panic!("expected UnknownSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_detached_fragment_renders_null() {
        let mut f = fragment();
        f.set_text("count", "3").unwrap();
        f.detach_fragment();
        assert_eq!(f.render(), Value::Null);
    }

    #[test]
    fn test_render_omits_detached_slots() {
        let mut f = fragment();
        f.set_text("count", "3").unwrap();
        f.detach("img").unwrap();
        let rendered = f.render();
        let slots = rendered["slots"].as_object().unwrap();
        assert!(slots.contains_key("count"));
        assert!(!slots.contains_key("img"));
    }
}
