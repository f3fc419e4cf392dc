// Message box - severity-styled text block
//
// The class string is always the theme's wrap token plus the resolved
// severity token. The wrap token is bound with Replace before the severity
// token is appended, so re-populating converges on the same class value.

use crate::domain::Severity;
use crate::error::BindError;
use crate::markup::{BindMode, Fragment};
use crate::theme::Theme;
use serde_json::Value;

/// Slot carrying the styled message text.
const SLOT_MSG: &str = "msg";

/// A one-line message block styled by severity.
#[derive(Debug)]
pub struct MessagePanel {
    fragment: Fragment,
}

impl MessagePanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::new(name, &[SLOT_MSG]),
        }
    }

    pub fn populate(
        &mut self,
        theme: &Theme,
        severity: Severity,
        text: &str,
    ) -> Result<(), BindError> {
        self.fragment
            .bind_attr(SLOT_MSG, "class", theme.wrap_token(), BindMode::Replace)?;
        self.fragment.bind_attr(
            SLOT_MSG,
            "class",
            theme.severity_token(severity),
            BindMode::Append,
        )?;
        self.fragment.set_text(SLOT_MSG, text)?;
        Ok(())
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn render(&self) -> Value {
        self.fragment.render()
    }
}
