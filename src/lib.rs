// presspanel - server-rendered admin panel bindings for a print
// management system
//
// Reusable UI fragments (count badges, option lists, message boxes,
// popups, export buttons) that bind typed domain values onto named
// template slots. Panels decide per slot whether to render, hide or
// substitute attributes, then serialize deterministically into the tree
// the host rendering engine consumes.
//
// Architecture:
// - markup: slot tree + attribute binder (Replace/Append, detach)
// - theme: severity-to-style-token resolution, TOML overrides
// - panels: the fragment binders, one instance per response render
// - services: persistence and localization seams, injected per call
// - domain: value types and the fixed enumeration tables

pub mod cli;
pub mod demo;
pub mod domain;
pub mod error;
pub mod markup;
pub mod panels;
pub mod services;
pub mod theme;

pub use error::BindError;
pub use markup::{BindMode, Fragment, Slot};
pub use theme::Theme;
