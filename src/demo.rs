// Demo page: assemble every panel from canned print-job data
//
// Builds the slot tree a real admin page would hand to the rendering
// engine, using an in-memory document store and the stock message catalog.
// One document log has transactions, one has none, and one id is
// deliberately missing so all three add-in states show up in the output.
//
// Run with: cargo run -- --locale en

use crate::domain::{AccountTrx, DocLog, Severity, TrxType, FONT_FAMILIES, LICENSES};
use crate::error::BindError;
use crate::panels::{
    AccountTrxPanel, ConfirmDialogPanel, CopyToClipboardPanel, ExportButtonsPanel, MessagePanel,
    OptionEntry, OptionListPanel, RelatedItemsPanel,
};
use crate::services::{DocLogLookup, InMemoryDocStore, Localizer};
use crate::theme::Theme;
use chrono::{TimeZone, Utc};
use serde_json::{Map, Value};

/// Icon shown on transaction badges.
const TRX_BADGE_ICON: &str = "famfamfam-silk/money.png";

/// Build the sample document store: one document with transactions, one
/// without.
pub fn sample_store() -> InMemoryDocStore {
    let mut store = InMemoryDocStore::new();
    store.insert(DocLog {
        id: "doc-1001".to_string(),
        title: "quarterly-report.pdf".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 20, 10, 15, 0).unwrap(),
        transactions: vec![
            AccountTrx {
                trx_type: TrxType::PrintOut,
                amount_cents: -340,
                currency: "EUR".to_string(),
                date: Utc.with_ymd_and_hms(2026, 8, 20, 10, 16, 0).unwrap(),
            },
            AccountTrx {
                trx_type: TrxType::Adjust,
                amount_cents: 40,
                currency: "EUR".to_string(),
                date: Utc.with_ymd_and_hms(2026, 8, 20, 11, 2, 0).unwrap(),
            },
        ],
    });
    store.insert(DocLog {
        id: "doc-1002".to_string(),
        title: "poster-draft.pdf".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 21, 16, 40, 0).unwrap(),
        transactions: Vec::new(),
    });
    store
}

/// Assemble the demo admin page as one slot tree.
///
/// Hidden fragments render as null and are dropped from the page map, so
/// the output shows exactly what the engine would serialize.
pub fn build_page(
    theme: &Theme,
    i18n: &dyn Localizer,
    store: &dyn DocLogLookup,
    locale: &str,
) -> Result<Value, BindError> {
    let mut page = Map::new();

    let mut status = MessagePanel::new("status-msg");
    status.populate(theme, Severity::Warn, "Toner low on office-printer-2")?;
    insert(&mut page, status.render());

    // Badge for a document with transactions, and one for a document
    // without any - the second stays out of the page entirely.
    for id in ["doc-1001", "doc-1002"] {
        let count = store
            .find_by_id(id)
            .map_or(0, |doc| doc.transactions.len() as i64);
        let mut badge = RelatedItemsPanel::new(format!("{id}-trx-badge"));
        badge.populate(count, "Account transactions", TRX_BADGE_ICON)?;
        insert(&mut page, badge.render());
    }

    let mut fonts = OptionListPanel::new("report-font");
    let font_options: Vec<OptionEntry> = FONT_FAMILIES
        .iter()
        .map(|f| OptionEntry::new(f.key, f.label))
        .collect();
    fonts.populate(&font_options, &OptionEntry::new("T", "Times"))?;
    insert(&mut page, fonts.render());

    let mut licenses = OptionListPanel::new("about-licenses");
    let license_options: Vec<OptionEntry> = LICENSES
        .iter()
        .map(|l| OptionEntry::new(l.spdx_id, l.name))
        .collect();
    licenses.populate(&license_options, &OptionEntry::new("", ""))?;
    insert(&mut page, licenses.render());

    for id in ["doc-1001", "doc-1002", "doc-9999"] {
        let mut trx = AccountTrxPanel::new(format!("{id}-trx"));
        trx.populate(store, i18n, locale, id)?;
        insert(&mut page, trx.render());
    }

    let mut dialog = ConfirmDialogPanel::new("delete-dialog");
    dialog.populate(
        i18n,
        locale,
        "Delete document",
        "Delete this document log entry?",
    )?;
    insert(&mut page, dialog.render());

    let mut copy = CopyToClipboardPanel::new("copy-voucher");
    copy.populate(i18n, locale, "voucher-code")?;
    insert(&mut page, copy.render());

    let mut export = ExportButtonsPanel::new("report-export");
    export.populate(i18n, locale)?;
    insert(&mut page, export.render());

    Ok(Value::Object(page))
}

fn insert(page: &mut Map<String, Value>, rendered: Value) {
    // Null fragments (hidden sections) are dropped.
    let name = match rendered.get("fragment").and_then(Value::as_str) {
        Some(name) => name.to_string(),
        None => return,
    };
    page.insert(name, rendered);
}
