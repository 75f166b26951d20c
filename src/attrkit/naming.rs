//! Naming transforms and attribute descriptors.
//!
//! A store key maps to two names: the attribute name rendered into markup and
//! the derived key the fragment is stored under.
//!
//! | Transform | Key | Rendered | Stored at |
//! |-----------|-----|----------|-----------|
//! | `Plain` | `phx_change` | `phx-change` | `raw_phx_change` |
//! | `Data` | `user_id` | `data-user-id` | `raw_user_id` |
//! | `Prefixed` | `@click` | `@click` | `raw_click` |

use crate::store::derived_key;

/// Leading character stripped from prefixed keys when deriving storage keys.
pub const MARKER: char = '@';

/// How a store key becomes an attribute name and a storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingTransform {
    /// Underscores become hyphens.
    #[default]
    Plain,
    /// Plain, behind a `data-` prefix.
    Data,
    /// Plain rendering; one leading [`MARKER`] is dropped from the storage key only.
    Prefixed,
}

impl NamingTransform {
    /// The attribute name written into markup.
    pub fn rendered_name(self, key: &str) -> String {
        let plain = key.replace('_', "-");
        match self {
            NamingTransform::Plain | NamingTransform::Prefixed => plain,
            NamingTransform::Data => format!("data-{}", plain),
        }
    }

    /// The store key the produced fragment is written to.
    pub fn storage_key(self, key: &str) -> String {
        match self {
            NamingTransform::Plain | NamingTransform::Data => derived_key(key),
            NamingTransform::Prefixed => derived_key(key.strip_prefix(MARKER).unwrap_or(key)),
        }
    }
}

/// A requested key plus the transform naming it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub key: String,
    pub transform: NamingTransform,
}

impl AttributeDescriptor {
    pub fn new(key: impl Into<String>, transform: NamingTransform) -> Self {
        Self {
            key: key.into(),
            transform,
        }
    }

    pub fn rendered_name(&self) -> String {
        self.transform.rendered_name(&self.key)
    }

    pub fn storage_key(&self) -> String {
        self.transform.storage_key(&self.key)
    }
}
