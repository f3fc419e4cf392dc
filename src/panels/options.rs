// Option list - enumerated domain options with one default selection
//
// Renders one list item per supplied option, preserving the enumeration
// order. Default marking compares by option value, not display label.
// A default value that matches no option marks nothing - callers rely on
// no-match-means-unselected, so this is deliberately not "fixed" here.

use crate::error::BindError;
use crate::markup::{Fragment, Slot};
use serde_json::Value;

/// Slot holding the rendered option items.
const SLOT_OPTIONS: &str = "option-list";

/// One selectable domain option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Raw value submitted back to the server.
    pub value: String,
    /// Human-readable label. Two options with the same label but
    /// different values are distinct.
    pub label: String,
}

impl OptionEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Select-list panel over an externally supplied, ordered option set.
#[derive(Debug)]
pub struct OptionListPanel {
    fragment: Fragment,
}

impl OptionListPanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::new(name, &[SLOT_OPTIONS]),
        }
    }

    /// Populate the list, marking the entry whose value equals the
    /// caller-supplied default. Zero or several matches are possible and
    /// are rendered as-is.
    pub fn populate(
        &mut self,
        options: &[OptionEntry],
        default: &OptionEntry,
    ) -> Result<(), BindError> {
        for option in options {
            let mut item = Slot::new();
            item.set_attr("value", &option.value);
            item.set_text(&option.label);
            if option.value == default.value {
                item.set_attr("selected", "selected");
            }
            self.fragment.add_item(SLOT_OPTIONS, item)?;
        }
        Ok(())
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn render(&self) -> Value {
        self.fragment.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts() -> Vec<OptionEntry> {
        vec![
            OptionEntry::new("A", "Arial"),
            OptionEntry::new("T", "Times"),
        ]
    }

    #[test]
    fn test_order_preserved_and_default_marked() {
        let mut panel = OptionListPanel::new("font-select");
        panel
            .populate(&fonts(), &OptionEntry::new("T", "Times"))
            .unwrap();
        let items = panel.fragment().slot(SLOT_OPTIONS).unwrap().items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text(), Some("Arial"));
        assert_eq!(items[0].attr("selected"), None);
        assert_eq!(items[1].text(), Some("Times"));
        assert_eq!(items[1].attr("selected"), Some("selected"));
    }

    #[test]
    fn test_unknown_default_marks_nothing() {
        let mut panel = OptionListPanel::new("font-select");
        panel
            .populate(&fonts(), &OptionEntry::new("Z", "Zapf"))
            .unwrap();
        let items = panel.fragment().slot(SLOT_OPTIONS).unwrap().items();
        assert!(items.iter().all(|i| i.attr("selected").is_none()));
    }

    #[test]
    fn test_selection_is_by_value_not_label() {
        let options = vec![
            OptionEntry::new("t1", "Times"),
            OptionEntry::new("t2", "Times"),
        ];
        let mut panel = OptionListPanel::new("font-select");
        panel
            .populate(&options, &OptionEntry::new("t2", "Times"))
            .unwrap();
        let items = panel.fragment().slot(SLOT_OPTIONS).unwrap().items();
        assert_eq!(items[0].attr("selected"), None);
        assert_eq!(items[1].attr("selected"), Some("selected"));
    }

    #[test]
    fn test_item_value_attribute_is_raw_value() {
        let mut panel = OptionListPanel::new("font-select");
        panel
            .populate(&fonts(), &OptionEntry::new("A", "Arial"))
            .unwrap();
        let items = panel.fragment().slot(SLOT_OPTIONS).unwrap().items();
        assert_eq!(items[0].attr("value"), Some("A"));
    }
}
