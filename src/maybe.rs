use std::fmt::{self, Display, Formatter};

use perhaps_value::{Map, Method, Outcome, Path, Value, safe_read};
use tracing::trace;

/// What a [`Maybe`] is built from.
///
/// Building a `Maybe` from a `Maybe` never wraps it twice: the existing instance
/// is returned as is.
#[derive(Debug, Clone)]
pub enum Source {
    Wrapped(Maybe),
    Raw(Value),
}

impl From<Maybe> for Source {
    fn from(value: Maybe) -> Self {
        Source::Wrapped(value)
    }
}

/// An optional value that can be safely read into and transformed.
///
/// A `Maybe` is either something (it holds a non-null [`Value`]) or nothing.
/// Only null makes a `Maybe` nothing: `0`, `""` and `false` are all something.
///
/// ```
/// # use perhaps::prelude::*;
/// let doc = Value::from_json_str(r#"{ "foo": { "bar": { "baz": "foobarbaz" } } }"#).unwrap();
///
/// let x = Maybe::with(&doc, "foo.bar.baz", ());
/// let y = maybe(&doc).get("foo.nosuchthing.baz");
///
/// assert_eq!(x.value(), Value::from("foobarbaz"));
/// assert!(y.value().is_null());
/// ```
///
/// # Ownership
///
/// * [`Maybe::set_default_value`] mutates the instance in place and returns it
/// * [`Maybe::bind`], [`Maybe::nothing`] and [`Maybe::invoke`] consume the instance and
///   hand back either that same instance (when nothing changed) or a new one
/// * [`Maybe::get`] always builds a new instance
///
/// Every new instance carries the default of the one it came from.
///
/// # Threads
///
/// A `Maybe` is `Send` and `Sync`. The resolved value never changes after
/// construction; changing the default needs a `&mut` and therefore a single owner.
#[derive(Debug, Clone, Default)]
pub struct Maybe {
    resolved: Option<Value>,
    default: Option<Value>,
}

/// Build a [`Maybe`] without a selector or a default. Same as [`Maybe::new`].
pub fn maybe(source: impl Into<Source>) -> Maybe {
    Maybe::new(source)
}

fn something(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        value => Some(value),
    }
}

impl Maybe {
    /// A `Maybe` that is nothing and has no default.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(source: impl Into<Source>) -> Self {
        Self::with(source, Path::empty(), Value::Null)
    }

    /// Build a `Maybe` by reading `selector` out of `source`, falling back on
    /// `default` when the read comes up empty.
    ///
    /// If `source` is already a `Maybe` it is returned unchanged and both the
    /// selector and the default are ignored.
    pub fn with(source: impl Into<Source>, selector: impl Into<Path>, default: impl Into<Value>) -> Self {
        let raw = match source.into() {
            Source::Wrapped(maybe) => return maybe,
            Source::Raw(raw) => raw,
        };

        let selector = selector.into();
        let resolved = match selector.is_empty() {
            true => raw,
            false => safe_read(&raw, &selector),
        };

        let mut maybe = Self {
            resolved: something(resolved),
            default: None,
        };
        maybe.set_default_value(default);
        maybe
    }

    /// Parse JSON text into a `Maybe`. A JSON `null` document is nothing.
    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        let value = Value::from_json_str(text)?;
        Ok(Self::new(value))
    }

    /// Read `selector` out of `base`. See [`perhaps_value::safe_read`].
    pub fn safe_read(base: &Value, selector: impl Into<Path>) -> Value {
        safe_read(base, &selector.into())
    }

    pub fn is_nothing(&self) -> bool {
        self.resolved.is_none()
    }

    pub fn is_something(&self) -> bool {
        self.resolved.is_some()
    }

    /// Set the value returned from [`Maybe::value`] when this is nothing.
    /// A null default clears the default.
    ///
    /// ```
    /// # use perhaps::prelude::*;
    /// let mut subject = Maybe::empty();
    /// let value = subject.set_default_value("foobar").value();
    /// assert_eq!(value, Value::from("foobar"));
    /// ```
    pub fn set_default_value(&mut self, default: impl Into<Value>) -> &mut Self {
        self.default = something(default.into());
        self
    }

    /// Owned version of [`Maybe::set_default_value`].
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.set_default_value(default);
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The resolved value, without falling back on any default.
    pub fn as_value(&self) -> Option<&Value> {
        self.resolved.as_ref()
    }

    /// The resolved value, or the default if this is nothing, or null.
    pub fn value(&self) -> Value {
        self.resolve(None)
    }

    /// Like [`Maybe::value`] but `default` takes precedence over the stored
    /// default (unless `default` is null).
    pub fn value_or(&self, default: impl Into<Value>) -> Value {
        self.resolve(something(default.into()))
    }

    pub fn into_value(self) -> Value {
        match self.resolved {
            Some(value) => value,
            None => self.default.unwrap_or_default(),
        }
    }

    fn resolve(&self, default: Option<Value>) -> Value {
        match &self.resolved {
            Some(value) => value.clone(),
            None => default.or_else(|| self.default.clone()).unwrap_or_default(),
        }
    }

    /// Transform the value unless this is nothing, in which case `f` is not called.
    ///
    /// What `f` returns decides what happens next (see [`Chain`]):
    /// * `()` keeps this `Maybe` as it is
    /// * `None` or null makes it nothing
    /// * a `Maybe` replaces this one, default and all
    /// * any other value becomes the new value
    ///
    /// ```
    /// # use perhaps::prelude::*;
    /// let value = maybe("foo")
    ///     .bind(|v| format!("{v}bar"))
    ///     .bind(|v| println!("{v}"))
    ///     .bind(|v| format!("{v}baz"))
    ///     .value();
    /// assert_eq!(value, Value::from("foobarbaz"));
    ///
    /// let value = maybe("foo")
    ///     .bind(|_| Value::Null)
    ///     .bind(|v| format!("{v}baz"))
    ///     .value();
    /// assert!(value.is_null());
    /// ```
    pub fn bind<F, R>(self, f: F) -> Self
    where
        F: FnOnce(&Value) -> R,
        R: Chain,
    {
        let Some(value) = &self.resolved else {
            trace!("bind skipped, value is nothing");
            return self;
        };
        let next = f(value);
        next.chain(self)
    }

    /// Recover from nothing: `f` is only called when this is nothing, and what it
    /// returns is treated the same way as in [`Maybe::bind`].
    ///
    /// ```
    /// # use perhaps::prelude::*;
    /// let value = Maybe::empty()
    ///     .bind(|v| format!("{v}foo"))
    ///     .nothing(|| "bar")
    ///     .bind(|v| format!("{v}foo"))
    ///     .value();
    /// assert_eq!(value, Value::from("barfoo"));
    /// ```
    pub fn nothing<F, R>(self, f: F) -> Self
    where
        F: FnOnce() -> R,
        R: Chain,
    {
        if self.is_something() {
            return self;
        }
        f().chain(self)
    }

    /// Read `selector` out of the current value.
    /// Reading from nothing is nothing.
    pub fn get(&self, selector: impl Into<Path>) -> Self {
        let resolved = match &self.resolved {
            Some(value) => safe_read(value, &selector.into()),
            None => Value::Null,
        };

        Self {
            resolved: something(resolved),
            default: self.default.clone(),
        }
    }

    /// Call a method on the current value, unless this is nothing.
    ///
    /// `name` is a selector: everything up to the last segment is read as with
    /// [`Maybe::get`], and the method is looked up on that value with
    /// [`Value::method`]. It is called with the value holding it as the receiver
    /// (the current value itself for a plain name). Built-in methods are found
    /// when the holder has no own member of that name.
    ///
    /// If there is no method by that name the result is nothing, and no error is
    /// raised. The method's return value is treated as in [`Maybe::bind`].
    ///
    /// ```
    /// # use perhaps::prelude::*;
    /// let value = maybe(["foo", "bar", "baz"])
    ///     .invoke("join", &[Value::from(", ")])
    ///     .value();
    /// assert_eq!(value, Value::from("foo, bar, baz"));
    /// ```
    pub fn invoke(self, name: impl Into<Path>, args: &[Value]) -> Self {
        let Some(value) = &self.resolved else {
            trace!("invoke skipped, value is nothing");
            return self;
        };

        let path = name.into();
        let target = match path.split_last() {
            Some((parent, name)) => {
                let receiver = safe_read(value, &parent);
                receiver.method(name).map(|method| (receiver, method))
            }
            None => value.as_method().map(|method| (value.clone(), method.clone())),
        };

        let Some((receiver, method)) = target else {
            trace!(method = %path, "no method to invoke");
            return Self {
                resolved: None,
                default: self.default,
            };
        };

        let outcome = method.call(&receiver, args);
        self.apply(outcome)
    }

    fn apply(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Unchanged => self,
            Outcome::Nothing => Self {
                resolved: None,
                default: self.default,
            },
            Outcome::Value(value) => Self {
                resolved: something(value),
                default: self.default,
            },
        }
    }

    /// Compare with anything that can be turned into a `Maybe`.
    ///
    /// Two nothings are always equal, whatever their defaults. Otherwise the
    /// resolved values are compared without coercion (see [`Value::value_eq`]).
    pub fn is_equal(&self, other: impl Into<Maybe>) -> bool {
        self.state_eq(&other.into())
    }

    fn state_eq(&self, other: &Maybe) -> bool {
        match (&self.resolved, &other.resolved) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs.value_eq(rhs),
            _ => false,
        }
    }

    /// The text of the value, the first truthy of `default` and the stored
    /// default, or an empty string.
    pub fn to_string_or(&self, default: impl Into<Value>) -> String {
        self.coerce(Some(default.into()), Value::from("")).to_string()
    }

    // A falsy override or stored default is skipped in favour of `empty`.
    pub(crate) fn coerce(&self, default: Option<Value>, empty: Value) -> Value {
        if let Some(value) = &self.resolved {
            return value.clone();
        }

        default
            .filter(Value::truthiness)
            .or_else(|| self.default.clone().filter(Value::truthiness))
            .unwrap_or(empty)
    }
}

/// The result of a callback given to [`Maybe::bind`] or [`Maybe::nothing`].
///
/// Anything that converts into an [`Outcome`] is applied to the current `Maybe`,
/// which keeps its default. A returned `Maybe` is used as is, the same way
/// building a `Maybe` from a `Maybe` returns it unchanged.
pub trait Chain {
    fn chain(self, current: Maybe) -> Maybe;
}

impl<T> Chain for T
where
    T: Into<Outcome>,
{
    fn chain(self, current: Maybe) -> Maybe {
        current.apply(self.into())
    }
}

impl Chain for Maybe {
    fn chain(self, _: Maybe) -> Maybe {
        self
    }
}

impl Display for Maybe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coerce(None, Value::from("")))
    }
}

impl PartialEq for Maybe {
    fn eq(&self, other: &Self) -> bool {
        self.state_eq(other)
    }
}

impl From<&Maybe> for Maybe {
    fn from(value: &Maybe) -> Self {
        value.clone()
    }
}

// -----------------------------------------------------------------------------
//   - From impls -
// -----------------------------------------------------------------------------
macro_rules! from_raw {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Source {
                fn from(value: $t) -> Self {
                    Source::Raw(value.into())
                }
            }

            impl From<$t> for Maybe {
                fn from(value: $t) -> Self {
                    Maybe::new(value)
                }
            }
        )*
    };
}

from_raw!(
    Value,
    &Value,
    serde_json::Value,
    Map,
    Method,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    char,
    &str,
    String,
    &String,
);

impl<T> From<Option<T>> for Source
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        Source::Raw(value.into())
    }
}

impl<T> From<Option<T>> for Maybe
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        Maybe::new(value)
    }
}

impl<T> From<Vec<T>> for Source
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Source::Raw(value.into())
    }
}

impl<T> From<Vec<T>> for Maybe
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Maybe::new(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Source
where
    T: Into<Value>,
{
    fn from(value: [T; N]) -> Self {
        Source::Raw(value.into())
    }
}

impl<T, const N: usize> From<[T; N]> for Maybe
where
    T: Into<Value>,
{
    fn from(value: [T; N]) -> Self {
        Maybe::new(value)
    }
}
