//! Single attribute fragments.
//!
//! Turns one store value into `name="value"` markup. Absent and null values
//! produce the empty fragment so templates can interpolate optional attributes
//! unconditionally.

use safe_markup::{escape_attribute, SafeFragment};
use serde_json::Value;

use crate::error::Result;
use crate::naming::AttributeDescriptor;
use crate::store::StoreValue;

/// Builds the fragment for one descriptor.
///
/// With `json` set the value is serialized to JSON text first; either way the
/// text is escaped and quoted. A value that is already a [`SafeFragment`] is
/// used as-is when `json` is off.
///
/// # Errors
///
/// Returns [`AttrError::Serialization`](crate::error::AttrError::Serialization)
/// if JSON encoding fails.
pub fn build_attribute(
    descriptor: &AttributeDescriptor,
    value: Option<&StoreValue>,
    json: bool,
) -> Result<SafeFragment> {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return Ok(SafeFragment::empty());
    };

    let name = descriptor.rendered_name();
    let fragment = match value {
        StoreValue::Safe(fragment) if json => {
            SafeFragment::attribute(&name, &serde_json::to_string(fragment.as_str())?)
        }
        StoreValue::Safe(fragment) => {
            SafeFragment::from_trusted(format!("{}=\"{}\"", name, fragment))
        }
        StoreValue::Raw(raw) if json => SafeFragment::attribute(&name, &serde_json::to_string(raw)?),
        StoreValue::Raw(raw) => SafeFragment::attribute(&name, &text_form(raw)),
    };
    Ok(fragment)
}

/// Textual form of a raw value for attribute output.
///
/// Strings are used as-is, scalars in display form, arrays as the space-joined
/// forms of their non-null items, objects as compact JSON.
pub fn text_form(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(text_form)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(_) => value.to_string(),
    }
}

/// Attribute-ready text of any store value: raw values escaped, safe
/// fragments verbatim.
pub(crate) fn markup_text(value: &StoreValue) -> String {
    match value {
        StoreValue::Raw(raw) => escape_attribute(&text_form(raw)),
        StoreValue::Safe(fragment) => fragment.as_str().to_string(),
    }
}
