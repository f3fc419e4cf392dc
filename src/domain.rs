// Domain value types consumed by the panels
//
// The binding layer does not own these concepts - documents and account
// transactions come from the persistence collaborator, and the enumerated
// tables (export formats, fonts, licenses) are fixed, ordered sets the
// host application defines. Everything here is plain immutable data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message severity for styled panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// One document log entry: a processed print job and the account
/// transactions it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocLog {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Transactions charged against user accounts for this document.
    /// Ordered; may be empty, never absent on a present record.
    pub transactions: Vec<AccountTrx>,
}

/// One account transaction attached to a document log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTrx {
    pub trx_type: TrxType,
    /// Signed amount in cents; negative for charges.
    pub amount_cents: i64,
    pub currency: String,
    pub date: DateTime<Utc>,
}

/// Account transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrxType {
    Adjust,
    Deposit,
    PrintOut,
    Transfer,
    Voucher,
}

impl TrxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrxType::Adjust => "ADJUST",
            TrxType::Deposit => "DEPOSIT",
            TrxType::PrintOut => "PRINT_OUT",
            TrxType::Transfer => "TRANSFER",
            TrxType::Voucher => "VOUCHER",
        }
    }
}

/// A report export file format.
#[derive(Debug, Clone, Copy)]
pub struct ExportFormat {
    pub key: &'static str,
    pub label: &'static str,
    pub extension: &'static str,
    pub icon: &'static str,
}

/// Export formats offered by the report button group, in display order.
pub const EXPORT_FORMATS: &[ExportFormat] = &[
    ExportFormat {
        key: "pdf",
        label: "PDF",
        extension: ".pdf",
        icon: "famfamfam-silk/page_white_acrobat.png",
    },
    ExportFormat {
        key: "csv",
        label: "CSV",
        extension: ".csv",
        icon: "famfamfam-silk/page_excel.png",
    },
    ExportFormat {
        key: "xml",
        label: "XML",
        extension: ".xml",
        icon: "famfamfam-silk/page_white_code.png",
    },
];

/// An internal report font family.
#[derive(Debug, Clone, Copy)]
pub struct FontFamily {
    pub key: &'static str,
    pub label: &'static str,
}

/// Report font families, in display order.
pub const FONT_FAMILIES: &[FontFamily] = &[
    FontFamily { key: "A", label: "Arial" },
    FontFamily { key: "C", label: "Courier" },
    FontFamily { key: "T", label: "Times" },
    FontFamily { key: "V", label: "Verdana" },
];

/// A third-party license identifier shown on the about panel.
#[derive(Debug, Clone, Copy)]
pub struct License {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub spdx_id: &'static str,
}

/// Licenses of bundled third-party assets, in display order.
pub const LICENSES: &[License] = &[
    License {
        key: "agpl3",
        name: "GNU Affero General Public License v3.0",
        url: "https://www.gnu.org/licenses/agpl-3.0.html",
        spdx_id: "AGPL-3.0-or-later",
    },
    License {
        key: "cc-by",
        name: "Creative Commons Attribution 3.0",
        url: "https://creativecommons.org/licenses/by/3.0/",
        spdx_id: "CC-BY-3.0",
    },
    License {
        key: "silk",
        name: "famfamfam Silk Icons",
        url: "http://www.famfamfam.com/lab/icons/silk/",
        spdx_id: "CC-BY-2.5",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_export_format_keys_are_unique() {
        let keys: BTreeSet<_> = EXPORT_FORMATS.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), EXPORT_FORMATS.len());
    }

    #[test]
    fn test_font_family_keys_are_unique() {
        let keys: BTreeSet<_> = FONT_FAMILIES.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), FONT_FAMILIES.len());
    }

    #[test]
    fn test_trx_type_labels() {
        assert_eq!(TrxType::PrintOut.as_str(), "PRINT_OUT");
        assert_eq!(TrxType::Adjust.as_str(), "ADJUST");
    }
}
