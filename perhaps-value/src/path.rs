use std::fmt::{self, Display, Formatter};

use tracing::trace;

use crate::Value;

/// A deep-path selector.
///
/// Built from a dot-delimited string (`"foo.bar.baz"`) or from a sequence of
/// keys that are used verbatim. The empty string and the empty sequence are
/// both the empty path, which selects the base value itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn empty() -> Self {
        Self { segments: vec![] }
    }

    pub fn parse(selector: &str) -> Self {
        if selector.is_empty() {
            return Self::empty();
        }
        let segments = selector.split('.').map(String::from).collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Split off the last segment: `a.b.c` becomes (`a.b`, `c`).
    pub fn split_last(&self) -> Option<(Path, &str)> {
        let (last, parent) = self.segments.split_last()?;
        let parent = Path {
            segments: parent.to_vec(),
        };
        Some((parent, last))
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<()> for Path {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&String> for Path {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<Option<&str>> for Path {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

impl From<&Path> for Path {
    fn from(value: &Path) -> Self {
        value.clone()
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<Vec<&str>> for Path {
    fn from(value: Vec<&str>) -> Self {
        value.as_slice().into()
    }
}

impl From<&[&str]> for Path {
    fn from(value: &[&str]) -> Self {
        let segments = value.iter().map(|s| s.to_string()).collect();
        Self { segments }
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(value: [&str; N]) -> Self {
        value.as_slice().into()
    }
}

/// Safely read a value out of `base` by following `path`.
///
/// Any missing segment along the way, or a null base, results in
/// [`Value::Null`] rather than an error. The path itself is never consumed.
///
/// Only own properties are followed (see [`Value::get`]). Built-in methods are
/// never returned, so a missing key named `len` or `keys` is still null.
///
/// ```
/// # use perhaps_value::{safe_read, Map, Path, Value};
/// let baz = Map::empty().with("baz", "foobarbaz");
/// let obj = Value::from(Map::empty().with("foo", Map::empty().with("bar", baz)));
/// assert_eq!(safe_read(&obj, &Path::from("foo.bar.baz")), Value::from("foobarbaz"));
/// assert!(safe_read(&obj, &Path::from("foo.not-there.baz")).is_null());
/// ```
pub fn safe_read(base: &Value, path: &Path) -> Value {
    read(base, path.segments())
}

fn read(base: &Value, segments: &[String]) -> Value {
    if base.is_null() {
        return Value::Null;
    }

    let Some((key, rest)) = segments.split_first() else { return base.clone() };

    match base.get(key) {
        Some(next) => read(next, rest),
        None => {
            trace!(segment = key.as_str(), "selector ran into a missing segment");
            Value::Null
        }
    }
}
