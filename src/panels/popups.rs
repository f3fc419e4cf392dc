// Popup and utility panels - stateless fixed-slot binders
//
// No branching logic here: each panel wires a fixed set of labels and
// attributes onto its template slots. Labels go through the localization
// seam; domain button sets come from the static value tables.

use crate::domain::EXPORT_FORMATS;
use crate::error::BindError;
use crate::markup::{BindMode, Fragment, Slot};
use crate::services::Localizer;
use serde_json::Value;

/// Modal confirmation dialog with localized OK/Cancel buttons.
#[derive(Debug)]
pub struct ConfirmDialogPanel {
    fragment: Fragment,
}

impl ConfirmDialogPanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::new(
                name,
                &["dialog-title", "dialog-question", "btn-ok", "btn-cancel"],
            ),
        }
    }

    pub fn populate(
        &mut self,
        i18n: &dyn Localizer,
        locale: &str,
        title: &str,
        question: &str,
    ) -> Result<(), BindError> {
        self.fragment.set_text("dialog-title", title)?;
        self.fragment.set_text("dialog-question", question)?;
        self.fragment
            .set_text("btn-ok", i18n.translate("btn-ok", locale))?;
        self.fragment
            .set_text("btn-cancel", i18n.translate("btn-cancel", locale))?;
        Ok(())
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn render(&self) -> Value {
        self.fragment.render()
    }
}

/// Button that copies the content of another page element client-side.
///
/// Binds the target element id as a data attribute for the host page's
/// clipboard widget; nothing here touches a clipboard.
#[derive(Debug)]
pub struct CopyToClipboardPanel {
    fragment: Fragment,
}

impl CopyToClipboardPanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::new(name, &["copy-btn"]),
        }
    }

    pub fn populate(
        &mut self,
        i18n: &dyn Localizer,
        locale: &str,
        target_id: &str,
    ) -> Result<(), BindError> {
        self.fragment.bind_attr(
            "copy-btn",
            "data-clipboard-target",
            &format!("#{target_id}"),
            BindMode::Replace,
        )?;
        self.fragment
            .set_text("copy-btn", i18n.translate("btn-copy", locale))?;
        Ok(())
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn render(&self) -> Value {
        self.fragment.render()
    }
}

/// Report export button group: one button per entry of the export format
/// table, in table order.
#[derive(Debug)]
pub struct ExportButtonsPanel {
    fragment: Fragment,
}

impl ExportButtonsPanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::new(name, &["export-buttons"]),
        }
    }

    pub fn populate(&mut self, i18n: &dyn Localizer, locale: &str) -> Result<(), BindError> {
        for format in EXPORT_FORMATS {
            let mut button = Slot::new();
            button.set_attr("id", format!("export-{}", format.key));
            button.set_attr("data-format", format.key);
            button.set_attr("src", format.icon);
            button.set_attr(
                "title",
                i18n.translate(&format!("export-{}", format.key), locale),
            );
            button.set_text(format.label);
            self.fragment.add_item("export-buttons", button)?;
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
    use crate::services::MessageCatalog;

    #[test]
    fn test_confirm_dialog_binds_localized_buttons() {
        let i18n = MessageCatalog::with_defaults();
        let mut panel = ConfirmDialogPanel::new("delete-dialog");
        panel
            .populate(&i18n, "en", "Delete document", "Delete this document log entry?")
            .unwrap();
        let f = panel.fragment();
        assert_eq!(f.slot("dialog-title").unwrap().text(), Some("Delete document"));
        assert_eq!(f.slot("btn-ok").unwrap().text(), Some("OK"));
        assert_eq!(f.slot("btn-cancel").unwrap().text(), Some("Cancel"));
    }

    #[test]
    fn test_copy_button_targets_element_id() {
        let i18n = MessageCatalog::with_defaults();
        let mut panel = CopyToClipboardPanel::new("copy-voucher");
        panel.populate(&i18n, "en", "voucher-code").unwrap();
        let slot = panel.fragment().slot("copy-btn").unwrap();
        assert_eq!(slot.attr("data-clipboard-target"), Some("#voucher-code"));
        assert_eq!(slot.text(), Some("Copy to clipboard"));
    }

    #[test]
    fn test_export_group_has_one_button_per_format() {
        let i18n = MessageCatalog::with_defaults();
        let mut panel = ExportButtonsPanel::new("report-export");
        panel.populate(&i18n, "en").unwrap();
        let buttons = panel.fragment().slot("export-buttons").unwrap().items();
        assert_eq!(buttons.len(), EXPORT_FORMATS.len());
        assert_eq!(buttons[0].attr("id"), Some("export-pdf"));
        assert_eq!(buttons[0].attr("title"), Some("Export as PDF"));
        assert_eq!(buttons[1].attr("data-format"), Some("csv"));
    }
}
