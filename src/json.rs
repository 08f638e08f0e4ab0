use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use perhaps_value::{Map, Value};

use crate::{Maybe, Result};

// Indentation is capped at ten columns.
const MAX_INDENT: usize = 10;

type ReplaceFn = dyn Fn(&str, &Value) -> Option<Value> + Send + Sync;

/// Rewrites or filters values before they are written as JSON.
#[derive(Clone)]
pub enum Replacer {
    /// Called for the root value (with an empty key) and then for every map
    /// member and list element, with the member name or the element index as key.
    /// Children are visited after their parent has been replaced.
    ///
    /// Returning `None` leaves a map member out and turns a list element into `null`.
    Function(Arc<ReplaceFn>),
    /// Only map members with one of these names are written, at any depth.
    Keys(Vec<String>),
}

impl Replacer {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    pub fn keys<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    fn replace(&self, key: &str, value: Value) -> Option<Value> {
        let value = match self {
            Replacer::Function(f) => f(key, &value)?,
            Replacer::Keys(_) => value,
        };
        Some(self.descend(value))
    }

    fn descend(&self, value: Value) -> Value {
        match value {
            Value::List(list) => list
                .into_iter()
                .enumerate()
                .map(|(index, el)| self.replace(&index.to_string(), el).unwrap_or_default())
                .collect(),
            Value::Map(map) => Value::Map(self.descend_map(map)),
            value => value,
        }
    }

    fn descend_map(&self, map: Map) -> Map {
        map.into_iter()
            .filter(|(key, _)| match self {
                Replacer::Keys(keys) => keys.contains(key),
                Replacer::Function(_) => true,
            })
            .filter_map(|(key, value)| {
                let value = self.replace(&key, value)?;
                Some((key, value))
            })
            .collect()
    }
}

impl Debug for Replacer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Replacer::Function(_) => write!(f, "Replacer::Function(<fun>)"),
            Replacer::Keys(keys) => f.debug_tuple("Replacer::Keys").field(keys).finish(),
        }
    }
}

/// Indentation of JSON output.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Space {
    #[default]
    Compact,
    /// Indent with this many spaces (at most ten). Zero is compact.
    Indent(usize),
    /// Indent with this string (its first ten characters). Empty is compact.
    Str(String),
}

impl Space {
    fn indent(&self) -> Option<String> {
        let indent = match self {
            Space::Compact => return None,
            Space::Indent(width) => " ".repeat((*width).min(MAX_INDENT)),
            Space::Str(indent) => indent.chars().take(MAX_INDENT).collect(),
        };
        (!indent.is_empty()).then_some(indent)
    }
}

impl From<usize> for Space {
    fn from(value: usize) -> Self {
        Space::Indent(value)
    }
}

impl From<&str> for Space {
    fn from(value: &str) -> Self {
        Space::Str(value.into())
    }
}

impl From<String> for Space {
    fn from(value: String) -> Self {
        Space::Str(value)
    }
}

/// Options for [`Maybe::to_json_string_with`].
///
/// ```
/// # use perhaps::prelude::*;
/// let options = JsonOptions::new()
///     .with_default(Map::empty().with("bar", "foo"))
///     .space(Space::Indent(2));
/// let json = Maybe::empty().to_json_string_with(options).unwrap();
/// assert_eq!(json, "{\n  \"bar\": \"foo\"\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonOptions {
    default: Option<Value>,
    replacer: Option<Replacer>,
    space: Space,
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Written instead of nothing, in preference to the stored default.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn replacer(mut self, replacer: Replacer) -> Self {
        self.replacer = Some(replacer);
        self
    }

    pub fn space(mut self, space: impl Into<Space>) -> Self {
        self.space = space.into();
        self
    }
}

impl Maybe {
    /// The JSON text of the value, the stored default, or `{}`.
    ///
    /// ```
    /// # use perhaps::prelude::*;
    /// assert_eq!(Maybe::empty().to_json_string().unwrap(), "{}");
    /// ```
    pub fn to_json_string(&self) -> Result<String> {
        self.to_json_string_with(JsonOptions::new())
    }

    /// The JSON text of the value, the first truthy of the default in `options`
    /// and the stored default, or `{}`.
    ///
    /// A replacer that leaves out the root value, or a root value that is a
    /// method, is written as `null`.
    pub fn to_json_string_with(&self, options: JsonOptions) -> Result<String> {
        let value = self.coerce(options.default, Value::Map(Map::empty()));

        let value = match &options.replacer {
            Some(replacer) => replacer.replace("", value).unwrap_or_default(),
            None => value,
        };

        let indent = options.space.indent();
        Ok(value.to_json_string(indent.as_deref())?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn space_from_width() {
        assert_eq!(Space::Indent(2).indent().as_deref(), Some("  "));
        assert_eq!(Space::Indent(0).indent(), None);
        assert_eq!(Space::Indent(40).indent().map(|s| s.len()), Some(MAX_INDENT));
    }

    #[test]
    fn space_from_str() {
        assert_eq!(Space::from("\t").indent().as_deref(), Some("\t"));
        assert_eq!(Space::from("").indent(), None);
        assert_eq!(Space::from("abcdefghijklmnop").indent().as_deref(), Some("abcdefghij"));
    }

    #[test]
    fn keys_filter_nested_members() {
        let inner = Map::empty().with("a", 1).with("b", 2);
        let value = Value::from(Map::empty().with("a", inner).with("c", 3));
        let replaced = Replacer::keys(["a"]).replace("", value).unwrap();
        assert_eq!(replaced.to_json_string(None).unwrap(), r#"{"a":{"a":1}}"#);
    }

    #[test]
    fn function_sees_keys_and_indices() {
        let replacer = Replacer::function(|key, value| match key {
            "drop" => None,
            "1" => Some(Value::from("second")),
            _ => Some(value.clone()),
        });
        let value = Value::from(Map::empty().with("list", [1, 2, 3]).with("drop", true));
        let replaced = replacer.replace("", value).unwrap();
        assert_eq!(replaced.to_json_string(None).unwrap(), r#"{"list":[1,"second",3]}"#);
    }

    #[test]
    fn omitted_list_element_is_null() {
        let replacer = Replacer::function(|key, value| (key != "0").then(|| value.clone()));
        let replaced = replacer.replace("", Value::from([1, 2])).unwrap();
        assert_eq!(replaced.to_json_string(None).unwrap(), "[null,2]");
    }
}
