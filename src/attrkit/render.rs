//! Rendering a store through the auto-escaping template boundary.
//!
//! Safe entries print verbatim, raw entries are HTML-escaped, and null entries
//! print as nothing.

use safe_markup::Context;

use crate::error::Result;
use crate::store::{ConfigStore, StoreValue};

/// Builds a template context from a store.
pub fn to_context(store: &ConfigStore) -> Context {
    store
        .iter()
        .fold(Context::new(), |ctx, (key, value)| match value {
            StoreValue::Safe(fragment) => ctx.insert_safe(key, fragment.clone()),
            StoreValue::Raw(raw) if raw.is_null() => ctx,
            StoreValue::Raw(raw) => ctx.insert_raw(key, raw),
        })
}

/// Renders a template string against a store.
///
/// # Example
///
/// ```
/// use attrkit::{render, set_attributes, ConfigStore, Options};
///
/// let store = ConfigStore::new().with("phx_click", "save").with("label", "<Save>");
/// let store = set_attributes(store, &["phx_click"], &Options::new()).unwrap();
/// let html = render("<button {{ raw_phx_click }}>{{ label }}</button>", &store).unwrap();
/// assert_eq!(html, "<button phx-click=\"save\">&lt;Save&gt;</button>");
/// ```
pub fn render(template: &str, store: &ConfigStore) -> Result<String> {
    Ok(safe_markup::render(template, &to_context(store))?)
}
