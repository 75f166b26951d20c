//! # Attribute Sets
//!
//! Derives fragments for a list of keys in one call and writes them back into
//! the store:
//!
//! 1. Each key gets a fragment at its storage key (`foo` → `raw_foo`),
//!    overwriting whatever was there. Absent keys give empty fragments.
//! 2. Each `init` name whose storage key is still vacant gets an empty
//!    fragment. A name that was also requested resolves through its
//!    descriptor; any other name drops a leading `@` (`@click` → `raw_click`).
//! 3. With `into`, the non-empty fragments of this call are joined with single
//!    spaces, in request order, and stored at `raw_<into>`.
//! 4. `required` keys are checked against the store as it was passed in.
//!
//! Nothing is written when any step fails; the caller never sees a partial
//! store.

use indexmap::IndexMap;
use safe_markup::SafeFragment;

use crate::attribute::build_attribute;
use crate::error::Result;
use crate::naming::{AttributeDescriptor, NamingTransform};
use crate::options::Options;
use crate::required::check_required;
use crate::store::{derived_key, ConfigStore};

/// Derives fragments for `keys` using `transform` and stores them.
///
/// # Example
///
/// ```
/// use attrkit::{set_attributes_with, ConfigStore, NamingTransform, Options};
///
/// let store = ConfigStore::new().with("foo", "foo").with("bar", "bar");
/// let store = set_attributes_with(store, &["foo"], NamingTransform::Plain, &Options::new()).unwrap();
/// assert_eq!(store.get_safe("raw_foo").unwrap().as_str(), "foo=\"foo\"");
/// assert!(store.get("raw_bar").is_none());
/// ```
///
/// # Errors
///
/// - [`AttrError::Serialization`](crate::error::AttrError::Serialization) when
///   `json` is set and a value cannot be encoded
/// - [`AttrError::MissingAttribute`](crate::error::AttrError::MissingAttribute)
///   when a `required` key is absent from the input store
pub fn set_attributes_with<S: AsRef<str>>(
    store: ConfigStore,
    keys: &[S],
    transform: NamingTransform,
    options: &Options,
) -> Result<ConfigStore> {
    let descriptors: Vec<AttributeDescriptor> = keys
        .iter()
        .map(|key| AttributeDescriptor::new(AsRef::<str>::as_ref(key), transform))
        .collect();
    set_descriptors(store, &descriptors, options)
}

/// Plain attributes: `phx_change` renders as `phx-change`.
pub fn set_attributes<S: AsRef<str>>(
    store: ConfigStore,
    keys: &[S],
    options: &Options,
) -> Result<ConfigStore> {
    set_attributes_with(store, keys, NamingTransform::Plain, options)
}

/// Data attributes: `user_id` renders as `data-user-id`.
pub fn set_data_attributes<S: AsRef<str>>(
    store: ConfigStore,
    keys: &[S],
    options: &Options,
) -> Result<ConfigStore> {
    set_attributes_with(store, keys, NamingTransform::Data, options)
}

/// Core of every attribute-set call; descriptors may mix transforms.
pub fn set_descriptors(
    mut store: ConfigStore,
    descriptors: &[AttributeDescriptor],
    options: &Options,
) -> Result<ConfigStore> {
    // Storage key -> fragment, first position kept, last value wins.
    let mut derived: IndexMap<String, SafeFragment> = IndexMap::new();
    for descriptor in descriptors {
        let fragment = build_attribute(descriptor, store.get(&descriptor.key), options.json)?;
        let storage_key = descriptor.storage_key();
        tracing::debug!(
            key = %descriptor.key,
            storage_key = %storage_key,
            empty = fragment.is_empty(),
            "derived attribute"
        );
        derived.insert(storage_key, fragment);
    }

    check_required(&store, options.required.as_slice())?;

    let combined = options
        .into
        .as_deref()
        .map(|name| (derived_key(name), SafeFragment::join(derived.values(), " ")));

    for (storage_key, fragment) in derived {
        store.insert(storage_key, fragment);
    }

    for name in &options.init {
        let storage_key = init_storage_key(descriptors, name);
        if store.insert_if_absent(storage_key.as_str(), SafeFragment::empty()) {
            tracing::debug!(storage_key = %storage_key, "initialized empty attribute");
        }
    }

    if let Some((storage_key, fragment)) = combined {
        tracing::debug!(storage_key = %storage_key, fragment = %fragment, "combined attributes");
        store.insert(storage_key, fragment);
    }

    Ok(store)
}

/// Storage key an `init` name backfills, matching where its fragment would land.
fn init_storage_key(descriptors: &[AttributeDescriptor], name: &str) -> String {
    descriptors
        .iter()
        .find(|descriptor| descriptor.key == name)
        .map_or_else(
            || NamingTransform::Prefixed.storage_key(name),
            AttributeDescriptor::storage_key,
        )
}
