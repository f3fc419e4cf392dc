// Markup module - the slot tree and the attribute binder
//
// Panels never touch markup text. They bind values onto named slots of a
// Fragment, and the fragment serializes to the tree the host rendering
// engine consumes: slot name -> {attributes, text, items}, with detached
// slots and fragments absent from the output.

mod fragment;
mod node;

pub use fragment::{BindMode, Fragment};
pub use node::Slot;
