// Account transaction add-in - child records of a document log entry
//
// Resolves the parent document through the injected persistence seam.
// A lookup miss and an empty transaction list are distinct, deliberate
// states: "parent missing" renders a localized no-data message with the
// row list detached, "parent with zero transactions" renders a present
// list with zero rows. Neither is an error.

use crate::domain::AccountTrx;
use crate::error::BindError;
use crate::markup::{Fragment, Slot};
use crate::services::{DocLogLookup, Localizer};
use serde_json::Value;
use tracing::debug;

/// Slot holding one rendered row per transaction.
const SLOT_TRX_LIST: &str = "trx-list";
/// Slot holding the localized absent-parent message.
const SLOT_NO_DATA: &str = "no-data";

/// Date format used on transaction rows.
const ROW_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Add-in panel listing the account transactions of one document log entry.
#[derive(Debug)]
pub struct AccountTrxPanel {
    fragment: Fragment,
}

impl AccountTrxPanel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::new(name, &[SLOT_TRX_LIST, SLOT_NO_DATA]),
        }
    }

    /// Resolve the parent document and render its transactions.
    pub fn populate(
        &mut self,
        lookup: &dyn DocLogLookup,
        i18n: &dyn Localizer,
        locale: &str,
        doc_log_id: &str,
    ) -> Result<(), BindError> {
        match lookup.find_by_id(doc_log_id) {
            None => {
                debug!(doc_log_id, "document log entry not found");
                self.fragment.detach(SLOT_TRX_LIST)?;
                self.fragment.set_text(
                    SLOT_NO_DATA,
                    i18n.translate("doclog-no-transactions", locale),
                )?;
            }
            Some(doc) => {
                self.fragment.detach(SLOT_NO_DATA)?;
                for trx in &doc.transactions {
                    self.fragment.add_item(SLOT_TRX_LIST, render_row(trx))?;
                }
            }
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

fn render_row(trx: &AccountTrx) -> Slot {
    let mut row = Slot::new();
    row.set_attr("data-trx-type", trx.trx_type.as_str());
    row.set_attr("data-date", trx.date.format(ROW_DATE_FORMAT).to_string());
    row.set_text(format!("{} {}", trx.currency, format_cents(trx.amount_cents)));
    row
}

/// Format a signed cent amount as a decimal string, e.g. -1250 -> "-12.50".
fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
