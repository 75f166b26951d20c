//! # Attrkit Architecture
//!
//! Attrkit derives **pre-escaped HTML attribute markup** from a component's
//! configuration. It does not parse or emit HTML structure; it produces
//! `name="value"` fragments that a template interpolates verbatim.
//!
//! ## The Pipeline
//!
//! Every helper takes a [`ConfigStore`] by value and returns the extended
//! store, so calls chain with `?`:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Caller builds a ConfigStore once per render                 │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  set_attributes / set_data_attributes                        │
//! │  set_prefixed_attributes / set_phx_attributes (discovery)    │
//! │  extend_class (class merging)                                │
//! │  validate_required                                           │
//! │  - each writes SafeFragments at raw_<name> keys              │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Rendering boundary (safe-markup)                            │
//! │  - Safe entries verbatim, everything else HTML-escaped       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use attrkit::{extend_class, render, set_phx_attributes, ClassOptions, ConfigStore, Options};
//!
//! # fn main() -> attrkit::Result<()> {
//! let store = ConfigStore::new()
//!     .with("phx_submit", "save")
//!     .with("class", "mt-2");
//!
//! let store = set_phx_attributes(store, &Options::new().required(["phx_submit"]))?;
//! let store = extend_class(store, "bg-white mt-8", &ClassOptions::default())?;
//!
//! let html = render("<form {{ raw_class }} {{ raw_phx_attributes }}>", &store)?;
//! assert_eq!(html, r#"<form class="bg-white mt-2" phx-submit="save">"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Invariants
//!
//! - Everything this crate writes into a store is a [`SafeFragment`]
//! - Entries already in the store are never removed
//! - Absent or null values yield the empty fragment, never an error
//! - A failing call returns an error and no store at all
//!
//! ## Module Overview
//!
//! - [`store`]: The ordered key/value store and derived-key convention
//! - [`naming`]: Naming transforms (plain, data, prefixed) and descriptors
//! - [`options`]: Option records for attribute sets and class merging
//! - [`attribute`]: Single-fragment construction
//! - [`attribute_set`]: Multi-key derivation with `init`, `into` and `required`
//! - [`discovery`]: Prefix-based key discovery
//! - [`required`]: Required-key validation
//! - [`class_list`]: Default/caller class merging
//! - [`render`]: Store rendering through the escaping boundary
//! - [`error`]: Error types

pub mod attribute;
pub mod attribute_set;
pub mod class_list;
pub mod discovery;
pub mod error;
pub mod naming;
pub mod options;
pub mod render;
pub mod required;
pub mod store;

pub use attribute::build_attribute;
pub use attribute_set::{set_attributes, set_attributes_with, set_data_attributes, set_descriptors};
pub use class_list::{extend_class, merge_class_tokens};
pub use discovery::{discover_prefixed, set_phx_attributes, set_prefixed_attributes};
pub use error::{AttrError, Result};
pub use naming::{AttributeDescriptor, NamingTransform};
pub use options::{ClassOptions, Options};
pub use render::render;
pub use required::validate_required;
pub use safe_markup::{escape_attribute, SafeFragment};
pub use store::{ConfigStore, StoreValue};
