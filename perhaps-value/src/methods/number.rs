use crate::Value;

pub(super) fn to_int(this: &Value, args: &[Value]) -> Value {
    if !args.is_empty() {
        return Value::Null;
    }

    match this {
        Value::Int(i) => Value::Int(*i),
        Value::Float(f) if f.is_finite() => Value::Int(*f as i64),
        Value::Bool(b) => Value::Int(*b as i64),
        Value::Str(s) => match s.trim().parse() {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Null,
        },
        _ => Value::Null,
    }
}

pub(super) fn to_float(this: &Value, args: &[Value]) -> Value {
    if !args.is_empty() {
        return Value::Null;
    }

    match this {
        Value::Int(i) => Value::Float(*i as f64),
        Value::Float(f) => Value::Float(*f),
        Value::Bool(b) => Value::Float(*b as u8 as f64),
        Value::Str(s) => match s.trim().parse() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::Null,
        },
        _ => Value::Null,
    }
}

pub(super) fn abs(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Int(i), []) => i.checked_abs().map(Value::Int).unwrap_or_default(),
        (Value::Float(f), []) => Value::Float(f.abs()),
        _ => Value::Null,
    }
}

/// `round()` rounds to the nearest int, `round(n)` to `n` decimals.
pub(super) fn round(this: &Value, args: &[Value]) -> Value {
    let Some(number) = this.as_number() else { return Value::Null };

    match args {
        [] if this.as_int().is_some() => this.clone(),
        [] if number.is_finite() => Value::Int(number.round() as i64),
        [] => Value::Null,
        [Value::Int(precision)] if (0..=15).contains(precision) => {
            let factor = 10f64.powi(*precision as i32);
            Value::Float((number * factor).round() / factor)
        }
        _ => Value::Null,
    }
}

#[cfg(test)]
mod test {
    use crate::Value;
    use crate::methods::test::{call, value};

    #[test]
    fn to_int_conversions() {
        assert_eq!(call(1.9, "to_int", &[]), value(1));
        assert_eq!(call(true, "to_int", &[]), value(1));
        assert_eq!(call(" 42 ", "to_int", &[]), value(42));
        assert_eq!(call("nope", "to_int", &[]), Value::Null);
        assert_eq!(call(f64::NAN, "to_int", &[]), Value::Null);
    }

    #[test]
    fn to_float_conversions() {
        assert_eq!(call(2, "to_float", &[]), value(2.0));
        assert_eq!(call("1.5", "to_float", &[]), value(1.5));
        assert_eq!(call(false, "to_float", &[]), value(0.0));
    }

    #[test]
    fn absolute() {
        assert_eq!(call(-3, "abs", &[]), value(3));
        assert_eq!(call(-1.5, "abs", &[]), value(1.5));
        assert_eq!(call(i64::MIN, "abs", &[]), Value::Null);
    }

    #[test]
    fn rounding() {
        assert_eq!(call(2.5, "round", &[]), value(3));
        assert_eq!(call(7, "round", &[]), value(7));
        assert_eq!(call(1.23456, "round", &[value(2)]), value(1.23));
        assert_eq!(call(1.5, "round", &[value("2")]), Value::Null);
    }
}
