// Panels module - the reusable admin UI fragments
//
// Each panel is constructed for one response render, populated once with
// caller-supplied domain values, and serialized. No panel keeps state
// between requests, and collaborators (persistence, localization) are
// passed into populate instead of looked up ambiently.

pub mod disclosure;
pub mod message;
pub mod options;
pub mod popups;
pub mod related;
pub mod transactions;

pub use disclosure::{disclose, DisclosureSlots};
pub use message::MessagePanel;
pub use options::{OptionEntry, OptionListPanel};
pub use popups::{ConfirmDialogPanel, CopyToClipboardPanel, ExportButtonsPanel};
pub use related::RelatedItemsPanel;
pub use transactions::AccountTrxPanel;
