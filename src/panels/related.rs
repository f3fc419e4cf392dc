// Related-items badge - the fixed-slot disclosure specialization
//
// Pins the reusable slot naming for "related records" badges (a document's
// transactions, a user's jobs, ...) so every caller shares one template
// contract. All behavior lives in the disclosure core; this panel only
// fixes the slot names.

use super::disclosure::{disclose, DisclosureSlots};
use crate::error::BindError;
use crate::markup::Fragment;
use serde_json::Value;

/// Fixed slot layout shared by all related-item badges.
const RELATED_SLOTS: DisclosureSlots = DisclosureSlots {
    title: "related",
    image: "related-img",
    count: "related-count",
};

/// Icon badge showing how many related records a domain object owns.
///
/// Hidden entirely when the count is not positive.
#[derive(Debug)]
pub struct RelatedItemsPanel {
    fragment: Fragment,
}

impl RelatedItemsPanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::new(
                name,
                &[RELATED_SLOTS.title, RELATED_SLOTS.image, RELATED_SLOTS.count],
            ),
        }
    }

    /// Populate the badge from a count, tooltip text and icon path.
    pub fn populate(
        &mut self,
        count: i64,
        text: &str,
        image_path: &str,
    ) -> Result<(), BindError> {
        disclose(&mut self.fragment, &RELATED_SLOTS, count, text, image_path)
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

    #[test]
    fn test_revealed_badge_uses_fixed_slot_names() {
        let mut panel = RelatedItemsPanel::new("doc-trx-badge");
        panel.populate(3, "Transactions", "icons/coins.png").unwrap();
        let f = panel.fragment();
        assert_eq!(f.slot("related").unwrap().attr("title"), Some("Transactions"));
        assert_eq!(f.slot("related-img").unwrap().attr("src"), Some("icons/coins.png"));
        assert_eq!(f.slot("related-count").unwrap().text(), Some("3"));
    }

    #[test]
    fn test_zero_count_badge_is_absent() {
        let mut panel = RelatedItemsPanel::new("doc-trx-badge");
        panel.populate(0, "Transactions", "icons/coins.png").unwrap();
        assert_eq!(panel.render(), Value::Null);
    }
}
