//! Required-attribute validation.

use crate::error::{AttrError, Result};
use crate::store::ConfigStore;

/// Fails if any of `required` is not a key of `store`.
///
/// Presence is all that counts: `false`, `""` and null satisfy the check. On
/// success the store is handed back untouched, so the call can sit in a chain.
///
/// # Example
///
/// ```
/// use attrkit::{validate_required, ConfigStore};
///
/// let store = ConfigStore::new().with("id", "main").with("hidden", false);
/// let store = validate_required(store, &["id", "hidden"]).unwrap();
/// assert!(validate_required(store, &["label"]).is_err());
/// ```
pub fn validate_required<S: AsRef<str>>(store: ConfigStore, required: &[S]) -> Result<ConfigStore> {
    check_required(&store, required)?;
    Ok(store)
}

pub(crate) fn check_required<S: AsRef<str>>(store: &ConfigStore, required: &[S]) -> Result<()> {
    for key in required {
        let key: &str = key.as_ref();
        if !store.contains_key(key) {
            tracing::debug!(key, "required attribute missing");
            return Err(AttrError::MissingAttribute {
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
