use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::{Map, Value};

/// The result of a user supplied function or method.
///
/// Returning nothing at all (`()`) is different from returning null:
/// * `()` becomes [`Outcome::Unchanged`] and leaves the current value as is
/// * `None` / [`Value::Null`] becomes [`Outcome::Nothing`]
/// * anything else becomes [`Outcome::Value`]
#[derive(Debug, Clone, Default)]
pub enum Outcome {
    #[default]
    Unchanged,
    Nothing,
    Value(Value),
}

impl Outcome {
    /// The new value, if there is one.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Unchanged | Outcome::Nothing => None,
        }
    }
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Outcome::Unchanged
    }
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Outcome::Nothing,
            value => Outcome::Value(value),
        }
    }
}

impl<T> From<Option<T>> for Outcome
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::from(Into::<Value>::into(value)),
            None => Outcome::Nothing,
        }
    }
}

impl<T> From<Vec<T>> for Outcome
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Outcome::Value(value.into())
    }
}

macro_rules! outcome_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Outcome {
                fn from(value: $t) -> Self {
                    Value::from(value).into()
                }
            }
        )*
    };
}

outcome_from!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char, &str, String, &String, &Value, Map, Method,
);

/// A callable value.
///
/// The first argument is the receiver (the value the method was looked up on),
/// followed by the call arguments. Methods compare by identity.
#[derive(Clone)]
pub struct Method {
    inner: Arc<dyn Fn(&Value, &[Value]) -> Outcome + Send + Sync>,
}

impl Method {
    pub fn call(&self, this: &Value, args: &[Value]) -> Outcome {
        (self.inner)(this, args)
    }

    pub fn ptr_eq(&self, other: &Method) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl Debug for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<method>")
    }
}

impl<F, R> From<F> for Method
where
    F: Fn(&Value, &[Value]) -> R + Send + Sync + 'static,
    R: Into<Outcome>,
{
    fn from(f: F) -> Self {
        Self {
            inner: Arc::new(move |this, args| f(this, args).into()),
        }
    }
}
