// Count-based disclosure - the shared show-or-omit decision
//
// A disclosed section is all-or-nothing: either the whole fragment is
// detached (nothing of it reaches the serialized page, no slot binding is
// even evaluated) or the full title/image/count layout is bound. Partial
// rendering is not possible by construction.

use crate::error::BindError;
use crate::markup::{BindMode, Fragment};
use tracing::debug;

/// The slot names a disclosure section binds when revealed.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureSlots {
    /// Slot carrying the tooltip text.
    pub title: &'static str,
    /// Slot carrying the icon image source.
    pub image: &'static str,
    /// Slot carrying the decimal count text.
    pub count: &'static str,
}

/// Populate a disclosure section.
///
/// A non-positive count detaches the fragment before any slot is touched,
/// so hidden sections leak no bound values into the output tree. A positive
/// count binds the tooltip, the image source and the decimal count text.
pub fn disclose(
    fragment: &mut Fragment,
    slots: &DisclosureSlots,
    count: i64,
    text: &str,
    image_path: &str,
) -> Result<(), BindError> {
    if count <= 0 {
        debug!(fragment = fragment.name(), count, "section hidden");
        fragment.detach_fragment();
        return Ok(());
    }
    fragment.bind_attr(slots.title, "title", text, BindMode::Replace)?;
    fragment.bind_attr(slots.image, "src", image_path, BindMode::Replace)?;
    fragment.set_text(slots.count, count.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const SLOTS: DisclosureSlots = DisclosureSlots {
        title: "title",
        image: "img",
        count: "count",
    };

    fn fragment() -> Fragment {
        Fragment::new("section", &["title", "img", "count"])
    }

    #[test]
    fn test_zero_count_hides_section_entirely() {
        let mut f = fragment();
        disclose(&mut f, &SLOTS, 0, "Jobs", "icons/jobs.png").unwrap();
        assert!(!f.is_present());
        assert_eq!(f.render(), Value::Null);
    }

    #[test]
    fn test_negative_count_hides_section() {
        let mut f = fragment();
        disclose(&mut f, &SLOTS, -3, "Jobs", "icons/jobs.png").unwrap();
        assert_eq!(f.render(), Value::Null);
    }

    #[test]
    fn test_hidden_section_evaluates_no_bindings() {
        // The slot names here do not exist, so any binding attempt would
        // error. Hiding must short-circuit before that point.
        let mut f = Fragment::new("section", &["other"]);
        disclose(&mut f, &SLOTS, 0, "Jobs", "icons/jobs.png").unwrap();
    }

    #[test]
    fn test_positive_count_binds_all_three_slots() {
        let mut f = fragment();
        disclose(&mut f, &SLOTS, 7, "Jobs", "icons/jobs.png").unwrap();
        assert_eq!(f.slot("title").unwrap().attr("title"), Some("Jobs"));
        assert_eq!(f.slot("img").unwrap().attr("src"), Some("icons/jobs.png"));
        assert_eq!(f.slot("count").unwrap().text(), Some("7"));
    }

    #[test]
    fn test_count_text_is_decimal_string() {
        let mut f = fragment();
        disclose(&mut f, &SLOTS, 1042, "Jobs", "icons/jobs.png").unwrap();
        assert_eq!(f.slot("count").unwrap().text(), Some("1042"));
    }
}
