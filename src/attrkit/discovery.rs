//! Prefix discovery.
//!
//! Finds store keys by prefix so callers can forward whole families of
//! attributes (`phx_*`, `@*`, `x-bind:*`) without listing each one.

use crate::attribute_set::set_attributes_with;
use crate::error::Result;
use crate::naming::NamingTransform;
use crate::options::Options;
use crate::store::ConfigStore;

/// Prefix matched by [`set_phx_attributes`].
pub const PHX_PREFIX: &str = "phx_";

/// Name of the combined fragment written by [`set_phx_attributes`].
pub const PHX_ATTRIBUTES: &str = "phx_attributes";

/// Keys starting with any of `prefixes`, without duplicates.
///
/// Ordered by prefix first, then by store order within a prefix.
///
/// # Example
///
/// ```
/// use attrkit::{discover_prefixed, ConfigStore};
///
/// let store = ConfigStore::new()
///     .with("@click", "open = true")
///     .with("x-bind:class", "open")
///     .with("foo", "bar");
/// assert_eq!(discover_prefixed(&store, &["@click", "x-bind:"]), vec!["@click", "x-bind:class"]);
/// ```
pub fn discover_prefixed<S: AsRef<str>>(store: &ConfigStore, prefixes: &[S]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for prefix in prefixes {
        let prefix: &str = prefix.as_ref();
        for key in store.keys().filter(|key| key.starts_with(prefix)) {
            if !found.iter().any(|seen| seen == key) {
                found.push(key.to_string());
            }
        }
    }
    tracing::trace!(?found, "discovered prefixed keys");
    found
}

/// Derives fragments for every key matching `prefixes`.
///
/// Rendered names keep any leading marker (`@click`); storage keys drop it
/// (`raw_click`).
pub fn set_prefixed_attributes<S: AsRef<str>>(
    store: ConfigStore,
    prefixes: &[S],
    options: &Options,
) -> Result<ConfigStore> {
    let keys = discover_prefixed(&store, prefixes);
    set_attributes_with(store, keys.as_slice(), NamingTransform::Prefixed, options)
}

/// Forwards every `phx_*` key and collects them under `raw_phx_attributes`.
///
/// `into` and `init` default to `phx_attributes` when the caller leaves them
/// unset, so the combined slot always exists.
pub fn set_phx_attributes(store: ConfigStore, options: &Options) -> Result<ConfigStore> {
    let mut options = options.clone();
    if options.into.is_none() {
        options.into = Some(PHX_ATTRIBUTES.to_string());
    }
    if options.init.is_empty() {
        options.init = vec![PHX_ATTRIBUTES.to_string()];
    }
    set_prefixed_attributes(store, &[PHX_PREFIX], &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttrError;

    fn alpine_store() -> ConfigStore {
        ConfigStore::new()
            .with("@click", "open = !open")
            .with("x-bind:class", "{ 'active': open }")
            .with("foo", "bar")
    }

    #[test]
    fn test_discovers_in_prefix_order() {
        let found = discover_prefixed(&alpine_store(), &["@click", "x-bind:"]);
        assert_eq!(found, vec!["@click", "x-bind:class"]);

        let found = discover_prefixed(&alpine_store(), &["x-bind:", "@"]);
        assert_eq!(found, vec!["x-bind:class", "@click"]);
    }

    #[test]
    fn test_overlapping_prefixes_do_not_duplicate() {
        let store = ConfigStore::new().with("phx_click", "a").with("phx_change", "b");
        let found = discover_prefixed(&store, &["phx_c", "phx_", "phx_ch"]);
        assert_eq!(found, vec!["phx_click", "phx_change"]);
    }

    #[test]
    fn test_store_order_within_prefix() {
        let store = ConfigStore::new()
            .with("phx_submit", "s")
            .with("other", "o")
            .with("phx_change", "c");
        assert_eq!(
            discover_prefixed(&store, &["phx_"]),
            vec!["phx_submit", "phx_change"]
        );
    }

    #[test]
    fn test_no_prefixes_finds_nothing() {
        assert!(discover_prefixed::<&str>(&alpine_store(), &[]).is_empty());
        assert!(discover_prefixed(&alpine_store(), &["zzz"]).is_empty());
    }

    #[test]
    fn test_prefixed_attributes_strip_marker_from_storage_key() {
        let result =
            set_prefixed_attributes(alpine_store(), &["@click", "x-bind:"], &Options::new()).unwrap();

        assert_eq!(
            result.get_safe("raw_click").unwrap().as_str(),
            "@click=\"open = !open\""
        );
        assert_eq!(
            result.get_safe("raw_x-bind:class").unwrap().as_str(),
            "x-bind:class=\"{ &#39;active&#39;: open }\""
        );
        assert!(result.get("raw_foo").is_none());
        assert!(result.get("raw_@click").is_none());
    }

    #[test]
    fn test_prefixed_init_backfills_marker_free_slot() {
        let options = Options::new().init(["@click", "@submit"]);
        let result = set_prefixed_attributes(alpine_store(), &["@"], &options).unwrap();

        // derived entry is kept, the absent one is backfilled without the marker
        assert_eq!(
            result.get_safe("raw_click").unwrap().as_str(),
            "@click=\"open = !open\""
        );
        assert_eq!(result.get_safe("raw_submit").unwrap().as_str(), "");
        assert!(result.get("raw_@click").is_none());
        assert!(result.get("raw_@submit").is_none());
    }

    #[test]
    fn test_prefixed_attributes_with_into() {
        let options = Options::new().collect_into("alpine");
        let result = set_prefixed_attributes(alpine_store(), &["@", "x-"], &options).unwrap();
        assert_eq!(
            result.get_safe("raw_alpine").unwrap().as_str(),
            "@click=\"open = !open\" x-bind:class=\"{ &#39;active&#39;: open }\""
        );
    }

    #[test]
    fn test_prefixed_attributes_required() {
        let options = Options::new().required(["label"]);
        let err = set_prefixed_attributes(alpine_store(), &["@"], &options).unwrap_err();
        assert!(matches!(err, AttrError::MissingAttribute { .. }));
    }

    #[test]
    fn test_phx_attributes_are_collected() {
        let store = ConfigStore::new()
            .with("phx_change", "validate")
            .with("phx_submit", "save")
            .with("id", "form");
        let result = set_phx_attributes(store, &Options::new()).unwrap();

        assert_eq!(
            result.get_safe("raw_phx_change").unwrap().as_str(),
            "phx-change=\"validate\""
        );
        assert_eq!(
            result.get_safe("raw_phx_attributes").unwrap().as_str(),
            "phx-change=\"validate\" phx-submit=\"save\""
        );
        assert!(result.get("raw_id").is_none());
    }

    #[test]
    fn test_phx_attributes_slot_exists_without_phx_keys() {
        let result = set_phx_attributes(ConfigStore::new().with("id", "x"), &Options::new()).unwrap();
        assert_eq!(result.get_safe("raw_phx_attributes").unwrap().as_str(), "");
    }

    #[test]
    fn test_phx_attributes_respects_explicit_into() {
        let store = ConfigStore::new().with("phx_click", "go");
        let options = Options::new().collect_into("events");
        let result = set_phx_attributes(store, &options).unwrap();

        assert_eq!(result.get_safe("raw_events").unwrap().as_str(), "phx-click=\"go\"");
        // init still defaults, so the conventional slot is there but empty
        assert_eq!(result.get_safe("raw_phx_attributes").unwrap().as_str(), "");
    }
}
