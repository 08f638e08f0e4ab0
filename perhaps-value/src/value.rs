use std::fmt::{self, Display, Formatter};

use crate::{Map, Method};

/// The kind of a [`Value`].
/// Built-in methods are registered per kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    Method,
}

impl Type {
    pub const ALL: [Type; 8] = [
        Type::Null,
        Type::Bool,
        Type::Int,
        Type::Float,
        Type::String,
        Type::List,
        Type::Map,
        Type::Method,
    ];
}

/// A dynamic, loosely-structured value.
///
/// `Null` is the only absent representation: there is no distinction between
/// "null" and "undefined". Falsy values such as `0`, `""` and `false` are
/// present values.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Map),
    Method(Method),
}

impl Value {
    pub fn type_info(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Str(_) => Type::String,
            Value::List(_) => Type::List,
            Value::Map(_) => Type::Map,
            Value::Method(_) => Type::Method,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        let Value::Int(i) = self else { return None };
        Some(*i)
    }

    pub fn as_float(&self) -> Option<f64> {
        let Value::Float(f) = self else { return None };
        Some(*f)
    }

    /// Either an int or a float, as a float.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        let Value::Bool(b) = self else { return None };
        Some(*b)
    }

    pub fn as_str(&self) -> Option<&str> {
        let Value::Str(s) = self else { return None };
        Some(s)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        let Value::List(list) = self else { return None };
        Some(list)
    }

    pub fn as_map(&self) -> Option<&Map> {
        let Value::Map(map) = self else { return None };
        Some(map)
    }

    pub fn as_method(&self) -> Option<&Method> {
        let Value::Method(method) = self else { return None };
        Some(method)
    }

    /// Look up an own property.
    ///
    /// Maps are indexed by key and lists by a canonical decimal index (`"0"`, `"12"`,
    /// but not `"01"` or `"+1"`). Nothing else has own properties.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            Value::List(list) => list.get(list_index(key)?),
            _ => None,
        }
    }

    pub fn truthiness(&self) -> bool {
        // null         = false
        // false        = false
        // 0 / 0.0 / NaN = false
        // ""           = false
        // _            = true
        match self {
            Value::Null | Value::Bool(false) | Value::Int(0) => false,
            Value::Float(f) => !(*f == 0.0 || f.is_nan()),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Non-coercive equality: strings never equal numbers, but an int and a float
    /// holding the same number are equal. Maps compare regardless of key order and
    /// methods compare by identity.
    pub fn value_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
            (Value::Int(lhs), Value::Int(rhs)) => lhs == rhs,
            (Value::Str(lhs), Value::Str(rhs)) => lhs == rhs,
            (Value::List(lhs), Value::List(rhs)) => {
                lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(lhs, rhs)| lhs.value_eq(rhs))
            }
            (Value::Map(lhs), Value::Map(rhs)) => {
                lhs.len() == rhs.len()
                    && lhs.iter().all(|(key, lhs)| rhs.get(key).is_some_and(|rhs| lhs.value_eq(rhs)))
            }
            (Value::Method(lhs), Value::Method(rhs)) => lhs.ptr_eq(rhs),
            (lhs, rhs) => match lhs.as_number().zip(rhs.as_number()) {
                Some((lhs, rhs)) => lhs == rhs,
                None => false,
            },
        }
    }
}

fn list_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) && (key == "0" || !key.starts_with('0'));
    match canonical {
        true => key.parse().ok(),
        false => None,
    }
}

/// An integral float below `1e21` as the integer written with its shortest
/// round-trip digits: `2^60` is `1152921504606847000`, not `1152921504606846976`.
pub(crate) fn integral_digits(n: f64) -> Option<i128> {
    if !n.is_finite() || n.fract() != 0.0 || n.abs() >= 1e21 {
        return None;
    }

    let text = format!("{:e}", n.abs());
    let (mantissa, exponent) = text.split_once('e')?;
    let exponent: u32 = exponent.parse().ok()?;
    let digits = mantissa.replace('.', "");
    let zeros = exponent.checked_sub(digits.len() as u32 - 1)?;
    let abs = digits.parse::<i128>().ok()? * 10i128.pow(zeros);

    Some(if n < 0.0 { -abs } else { abs })
}

// Finite floats only.
fn float_text(n: f64) -> String {
    if let Some(i) = integral_digits(n) {
        return i.to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let text = format!("{n:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => text,
        };
    }

    n.to_string()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(n) if n.is_nan() => write!(f, "NaN"),
            Value::Float(n) if n.is_infinite() && n.is_sign_positive() => write!(f, "Infinity"),
            Value::Float(n) if n.is_infinite() => write!(f, "-Infinity"),
            Value::Float(n) => write!(f, "{}", float_text(*n)),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(list) => {
                for (i, el) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Null elements render as nothing at all
                    if !el.is_null() {
                        write!(f, "{el}")?;
                    }
                }
                Ok(())
            }
            Value::Map(map) => {
                let json = serde_json::to_string(map).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            Value::Method(_) => write!(f, "[method]"),
        }
    }
}

// -----------------------------------------------------------------------------
//   - From impls -
// -----------------------------------------------------------------------------
macro_rules! from_int {
    ($int:ty) => {
        impl From<$int> for Value {
            // Integers outside the range of an i64 lose precision rather than wrap
            fn from(value: $int) -> Self {
                match i64::try_from(value) {
                    Ok(i) => Value::Int(i),
                    Err(_) => Value::Float(value as f64),
                }
            }
        }
    };
}

from_int!(i64);
from_int!(i32);
from_int!(i16);
from_int!(i8);
from_int!(isize);
from_int!(u64);
from_int!(u32);
from_int!(u16);
from_int!(u8);
from_int!(usize);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Method> for Value {
    fn from(value: Method) -> Self {
        Value::Method(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map(T::into).unwrap_or_default()
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(T::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Value
where
    T: Into<Value>,
{
    fn from(value: [T; N]) -> Self {
        Value::List(value.into_iter().map(T::into).collect())
    }
}

impl<T> FromIterator<T> for Value
where
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(T::into).collect())
    }
}

// -----------------------------------------------------------------------------
//   - Try From -
// -----------------------------------------------------------------------------
macro_rules! try_from_value {
    ($t:ty, $kind:ident) => {
        impl TryFrom<&Value> for $t {
            type Error = ();

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$kind(val) => Ok(*val),
                    _ => Err(()),
                }
            }
        }
    };
}

try_from_value!(i64, Int);
try_from_value!(f64, Float);
try_from_value!(bool, Bool);

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ();

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_str().ok_or(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn falsy_values_are_not_null() {
        assert!(!Value::from(0).is_null());
        assert!(!Value::from("").is_null());
        assert!(!Value::from(false).is_null());
        assert!(Value::from(None::<i64>).is_null());
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Null.truthiness());
        assert!(!Value::from(0).truthiness());
        assert!(!Value::from(0.0).truthiness());
        assert!(!Value::from(f64::NAN).truthiness());
        assert!(!Value::from("").truthiness());
        assert!(!Value::from(false).truthiness());
        assert!(Value::from("a").truthiness());
        assert!(Value::List(vec![]).truthiness());
        assert!(Value::Map(Map::empty()).truthiness());
    }

    #[test]
    fn int_and_float_are_equal() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[test]
    fn map_equality_ignores_order() {
        let lhs = Map::empty().with("a", 1).with("b", 2);
        let rhs = Map::empty().with("b", 2).with("a", 1);
        assert_eq!(Value::from(lhs), Value::from(rhs));
    }

    #[test]
    fn methods_compare_by_identity() {
        let method = Method::from(|_: &Value, _: &[Value]| Value::Null);
        let other = Method::from(|_: &Value, _: &[Value]| Value::Null);
        assert_eq!(Value::from(method.clone()), Value::from(method.clone()));
        assert_ne!(Value::from(method), Value::from(other));
    }

    #[test]
    fn list_own_properties() {
        let list = Value::from(["a", "b"]);
        assert_eq!(list.get("1"), Some(&Value::from("b")));
        assert_eq!(list.get("2"), None);
        assert_eq!(list.get("01"), None);
        assert_eq!(list.get("+1"), None);
        assert_eq!(list.get(""), None);
    }

    #[test]
    fn scalars_have_no_properties() {
        assert!(Value::from("abc").get("0").is_none());
        assert!(Value::from(1).get("x").is_none());
    }

    #[test]
    fn display_list() {
        let list = Value::List(vec![1.into(), Value::Null, "x".into(), Value::from([2, 3])]);
        assert_eq!(list.to_string(), "1,,x,2,3");
    }

    #[test]
    fn display_numbers() {
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn display_number_extremes() {
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(1.5e300).to_string(), "1.5e+300");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(2f64.powi(60)).to_string(), "1152921504606847000");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
        assert_eq!(Value::from(1e-7).to_string(), "1e-7");
        assert_eq!(Value::from(-2.5e-8).to_string(), "-2.5e-8");
    }

    #[test]
    fn wide_integers_do_not_wrap() {
        assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
        assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709552000");
        assert_eq!(Value::from(i64::MAX as u64), Value::Int(i64::MAX));
        assert_eq!(Value::from(usize::MAX).as_int(), None);
        assert_eq!(Value::from(-1i8), Value::Int(-1));
    }

    #[test]
    fn display_map_as_json() {
        let map = Map::empty().with("foo", "bar").with("n", 1);
        assert_eq!(Value::from(map).to_string(), r#"{"foo":"bar","n":1}"#);
    }

    #[test]
    fn try_from() {
        let value = Value::from(3);
        assert_eq!(i64::try_from(&value), Ok(3));
        assert_eq!(bool::try_from(&value), Err(()));
        let value = Value::from("s");
        assert_eq!(<&str>::try_from(&value), Ok("s"));
    }
}
