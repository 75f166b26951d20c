//! # Class List Merging
//!
//! Merges a component's default utility classes with the classes a caller
//! passes in. A default token is dropped when any caller token belongs to the
//! same property group, the part before the first hyphen: a caller `mt-2`
//! replaces the default `mt-8` but leaves `bg-blue-500` alone.
//!
//! Surviving defaults are prepended one at a time, so they come out in reverse
//! order, ahead of the caller's tokens:
//!
//! ```text
//! defaults "bg-blue-500 mt-8", caller ""      -> "mt-8 bg-blue-500"
//! defaults "bg-blue-500 mt-8", caller "mt-2"  -> "bg-blue-500 mt-2"
//! ```

use std::collections::VecDeque;

use safe_markup::{escape_attribute, SafeFragment};

use crate::attribute::markup_text;
use crate::error::Result;
use crate::options::ClassOptions;
use crate::store::{derived_key, ConfigStore};

/// Rendered attribute name, whichever store key the classes came from.
const CLASS_ATTRIBUTE: &str = "class";

/// Property group of a class token: text before the first hyphen, or the whole token.
pub fn property_group(token: &str) -> &str {
    token.split_once('-').map_or(token, |(group, _)| group)
}

/// Merges token lists; see the module docs for ordering.
pub fn merge_class_tokens<'a>(defaults: &'a str, user: &'a str) -> Vec<&'a str> {
    let user_tokens: Vec<&str> = user.split_whitespace().collect();
    let mut merged: VecDeque<&str> = user_tokens.iter().copied().collect();

    for token in defaults.split_whitespace() {
        let group_prefix = format!("{}-", property_group(token));
        if user_tokens.iter().any(|user| user.starts_with(&group_prefix)) {
            tracing::trace!(token, "default class overridden");
            continue;
        }
        merged.push_front(token);
    }

    merged.into_iter().collect()
}

/// Merges `defaults` into the classes stored at the target key and writes
/// `class="..."` to its storage key (`raw_class` by default).
///
/// Raw classes and defaults are escaped; a caller value that is already a
/// [`SafeFragment`] is merged verbatim.
///
/// # Example
///
/// ```
/// use attrkit::{extend_class, ClassOptions, ConfigStore};
///
/// let store = ConfigStore::new().with("class", "mt-2");
/// let store = extend_class(store, "bg-blue-500 mt-8", &ClassOptions::default()).unwrap();
/// assert_eq!(store.get_safe("raw_class").unwrap().as_str(), "class=\"bg-blue-500 mt-2\"");
/// ```
pub fn extend_class(
    mut store: ConfigStore,
    defaults: &str,
    options: &ClassOptions,
) -> Result<ConfigStore> {
    let user = store
        .get(&options.attribute)
        .map(markup_text)
        .unwrap_or_default();
    let defaults = escape_attribute(defaults);

    let merged = merge_class_tokens(&defaults, &user).join(" ");
    let storage_key = derived_key(&options.attribute);
    tracing::debug!(storage_key = %storage_key, classes = %merged, "extended class list");

    let fragment = SafeFragment::from_trusted(format!("{}=\"{}\"", CLASS_ATTRIBUTE, merged));
    store.insert(storage_key, fragment);
    Ok(store)
}
