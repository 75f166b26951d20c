//! # Safe Markup - Attribute Fragments and an Escaping Boundary
//!
//! A small crate that keeps "text that is already safe inside an HTML attribute
//! context" apart from everything else, and renders templates that respect the
//! difference.
//!
//! ## The Problem
//!
//! Component helpers build attribute text such as `phx-change="validate"` long
//! before a template interpolates it. Once built, that text must be printed
//! verbatim, while any other value reaching the template must still be escaped:
//! - Escaping a built fragment twice mangles its quotes (`&quot;`)
//! - Printing a raw user value verbatim opens the door to attribute injection
//! - Plain `String` cannot tell the two apart
//!
//! ## The Solution
//!
//! - [`SafeFragment`] is the only way to carry pre-escaped attribute text
//! - [`escape_attribute`] is the single escaping primitive used to build one
//! - [`render`] runs a template with HTML auto-escaping on, where entries
//!   inserted through [`Context::insert_safe`] are interpolated as-is
//!
//! ## Quick Example
//!
//! ```rust
//! use safe_markup::{render, Context, SafeFragment};
//!
//! let ctx = Context::new()
//!     .insert_safe("raw_id", SafeFragment::attribute("id", "main"))
//!     .insert_raw("title", &"<b>");
//!
//! let output = render(r#"<div {{ raw_id }}>{{ title }}</div>"#, &ctx).unwrap();
//! assert_eq!(output, r#"<div id="main">&lt;b&gt;</div>"#);
//! ```

use minijinja::{AutoEscape, Environment, Error, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Escapes text for embedding inside a double-quoted HTML attribute.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms; everything else
/// passes through untouched.
///
/// # Example
///
/// ```rust
/// use safe_markup::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; &lt;c&gt;");
/// assert_eq!(escape_attribute("it's"), "it&#39;s");
/// ```
pub fn escape_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Text verified safe for interpolation in an attribute context.
///
/// Fragments are produced by [`SafeFragment::attribute`], [`SafeFragment::empty`]
/// and [`SafeFragment::join`]; their text is never escaped again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SafeFragment(String);

impl SafeFragment {
    /// The empty fragment. Interpolating it prints nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds `name="<escaped value>"`.
    ///
    /// The name is taken as-is; only the value is escaped.
    pub fn attribute(name: &str, value: &str) -> Self {
        Self(format!("{}=\"{}\"", name, escape_attribute(value)))
    }

    /// Wraps text the caller has already made safe.
    ///
    /// Nothing is checked here. Use it only for markup produced by another
    /// escaping layer.
    pub fn from_trusted(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Joins fragments with `separator`, skipping empty ones.
    pub fn join<'a, I>(fragments: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = &'a SafeFragment>,
    {
        let parts: Vec<&str> = fragments
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .map(SafeFragment::as_str)
            .collect();
        Self(parts.join(separator))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeFragment> for Value {
    fn from(fragment: SafeFragment) -> Self {
        Value::from_safe_string(fragment.0)
    }
}

/// Template context that remembers which entries are safe.
///
/// Raw entries go through the environment's HTML auto-escaping when printed;
/// safe entries are printed verbatim.
#[derive(Debug, Clone, Default)]
pub struct Context {
    entries: BTreeMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw, serializable value. Replaces any entry with the same name.
    pub fn insert_raw<T: Serialize + ?Sized>(mut self, name: &str, value: &T) -> Self {
        self.entries
            .insert(name.to_string(), Value::from_serialize(value));
        self
    }

    /// Adds a safe fragment. Replaces any entry with the same name.
    pub fn insert_safe(mut self, name: &str, fragment: SafeFragment) -> Self {
        self.entries.insert(name.to_string(), fragment.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn to_value(&self) -> Value {
        Value::from_iter(
            self.entries
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        )
    }
}

static HTML_ENV: Lazy<Environment<'static>> = Lazy::new(html_environment);

/// Renders a template string against a context with HTML auto-escaping.
///
/// # Example
///
/// ```rust
/// use safe_markup::{render, Context};
///
/// let ctx = Context::new().insert_raw("name", &"Tom & Jerry");
/// let output = render("{{ name }}", &ctx).unwrap();
/// assert_eq!(output, "Tom &amp; Jerry");
/// ```
pub fn render(template: &str, ctx: &Context) -> Result<String, Error> {
    HTML_ENV.render_str(template, ctx.to_value())
}

fn html_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_name| AutoEscape::Html);
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_escape_attribute_special_chars() {
        assert_eq!(escape_attribute("<>&\"'"), "&lt;&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn test_escape_attribute_plain_text_unchanged() {
        assert_eq!(escape_attribute("validate"), "validate");
        assert_eq!(escape_attribute(""), "");
    }

    #[test]
    fn test_escape_attribute_keeps_unicode() {
        assert_eq!(escape_attribute("café → <ok>"), "café → &lt;ok&gt;");
    }

    #[test]
    fn test_attribute_fragment() {
        let fragment = SafeFragment::attribute("phx-change", "validate");
        assert_eq!(fragment.as_str(), "phx-change=\"validate\"");
    }

    #[test]
    fn test_attribute_fragment_escapes_value_only() {
        let fragment = SafeFragment::attribute("title", "say \"hi\"");
        assert_eq!(fragment.as_str(), "title=\"say &quot;hi&quot;\"");
    }

    #[test]
    fn test_empty_fragment() {
        assert!(SafeFragment::empty().is_empty());
        assert_eq!(SafeFragment::empty().to_string(), "");
    }

    #[test]
    fn test_join_skips_empty_fragments() {
        let fragments = [
            SafeFragment::attribute("a", "1"),
            SafeFragment::empty(),
            SafeFragment::attribute("b", "2"),
        ];
        let joined = SafeFragment::join(&fragments, " ");
        assert_eq!(joined.as_str(), "a=\"1\" b=\"2\"");
    }

    #[test]
    fn test_join_of_nothing_is_empty() {
        let joined = SafeFragment::join(&[SafeFragment::empty()], " ");
        assert!(joined.is_empty());
    }

    #[test]
    fn test_fragment_serializes_as_plain_string() {
        let fragment = SafeFragment::attribute("id", "x");
        let json = serde_json::to_string(&fragment).unwrap();
        assert_eq!(json, r#""id=\"x\"""#);
    }

    #[test]
    fn test_render_safe_fragment_verbatim() {
        let ctx = Context::new().insert_safe("raw_foo", SafeFragment::attribute("foo", "a&b"));
        let output = render("<p {{ raw_foo }}>", &ctx).unwrap();
        assert_eq!(output, "<p foo=\"a&amp;b\">");
    }

    #[test]
    fn test_render_escapes_raw_values() {
        let ctx = Context::new().insert_raw("foo", &"\"quoted\"");
        let output = render("{{ foo }}", &ctx).unwrap();
        assert_eq!(output, "&quot;quoted&quot;");
    }

    #[test]
    fn test_render_structured_raw_values() {
        #[derive(Serialize)]
        struct Item {
            name: String,
        }

        let ctx = Context::new().insert_raw(
            "items",
            &vec![Item { name: "one".into() }, Item { name: "two".into() }],
        );
        let output = render("{% for i in items %}{{ i.name }};{% endfor %}", &ctx).unwrap();
        assert_eq!(output, "one;two;");
    }

    #[test]
    fn test_render_missing_entry_is_empty() {
        let output = render("[{{ nothing }}]", &Context::new()).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_context_replaces_entries() {
        let ctx = Context::new()
            .insert_raw("a", &1)
            .insert_safe("a", SafeFragment::attribute("a", "2"));
        assert_eq!(ctx.len(), 1);
        assert_eq!(render("{{ a }}", &ctx).unwrap(), "a=\"2\"");
    }

    #[test]
    fn test_render_syntax_error() {
        let result = render("{{ unclosed", &Context::new());
        assert!(result.is_err());
    }
}
