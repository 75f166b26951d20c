//! Options records for the helpers.
//!
//! Both records deserialize with per-field defaults, so they can come from a
//! JSON config as readily as from the builder methods.

use serde::{Deserialize, Serialize};

const DEFAULT_CLASS_ATTRIBUTE: &str = "class";

/// Options for one attribute-set call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Keys that must be present in the input store.
    #[serde(default)]
    pub required: Vec<String>,

    /// Serialize values as JSON before escaping.
    #[serde(default)]
    pub json: bool,

    /// Keys backfilled with an empty fragment when nothing was derived for them.
    #[serde(default)]
    pub init: Vec<String>,

    /// Name under which the combined fragment of this call is stored.
    #[serde(default)]
    pub into: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    pub fn init<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.init = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn collect_into(mut self, name: impl Into<String>) -> Self {
        self.into = Some(name.into());
        self
    }
}

/// Options for class merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOptions {
    /// Store key holding the caller's classes; the merged fragment goes to `raw_<attribute>`.
    #[serde(default = "default_class_attribute")]
    pub attribute: String,
}

fn default_class_attribute() -> String {
    DEFAULT_CLASS_ATTRIBUTE.to_string()
}

impl Default for ClassOptions {
    fn default() -> Self {
        Self {
            attribute: default_class_attribute(),
        }
    }
}

impl ClassOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = name.into();
        self
    }
}
