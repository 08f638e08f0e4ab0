use crate::Value;

pub(super) fn len(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::List(list), []) => Value::from(list.len()),
        _ => Value::Null,
    }
}

/// Join the elements with a separator (`,` when none is given).
/// Null elements become empty strings.
pub(super) fn join(this: &Value, args: &[Value]) -> Value {
    let Value::List(list) = this else { return Value::Null };

    let sep = match args {
        [] => ",",
        [Value::Str(sep)] => sep.as_str(),
        _ => return Value::Null,
    };

    let mut buffer = String::new();
    for (i, el) in list.iter().enumerate() {
        if i > 0 {
            buffer.push_str(sep);
        }
        if !el.is_null() {
            buffer.push_str(&el.to_string());
        }
    }

    Value::Str(buffer)
}

pub(super) fn contains(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::List(haystack), [needle]) => Value::Bool(haystack.iter().any(|el| needle.value_eq(el))),
        _ => Value::Null,
    }
}

pub(super) fn first(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::List(list), []) => list.first().cloned().unwrap_or_default(),
        _ => Value::Null,
    }
}

pub(super) fn last(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::List(list), []) => list.last().cloned().unwrap_or_default(),
        _ => Value::Null,
    }
}

pub(super) fn reverse(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::List(list), []) => list.iter().rev().cloned().collect(),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod test {
    use crate::Value;
    use crate::methods::test::{call, value};

    #[test]
    fn list_len() {
        assert_eq!(call([1, 2, 3], "len", &[]), value(3));
    }

    #[test]
    fn join_with_separator() {
        assert_eq!(call(["foo", "bar", "baz"], "join", &[value(", ")]), value("foo, bar, baz"));
    }

    #[test]
    fn join_defaults_to_comma() {
        let list = Value::List(vec![value(1), Value::Null, value("x")]);
        assert_eq!(call(list, "join", &[]), value("1,,x"));
    }

    #[test]
    fn join_rejects_non_string_separator() {
        assert_eq!(call([1, 2], "join", &[value(1)]), Value::Null);
    }

    #[test]
    fn list_contains_int() {
        assert_eq!(call([1, 2], "contains", &[value(2)]), value(true));
        assert_eq!(call([1, 2], "contains", &[value(2.0)]), value(true));
        assert_eq!(call([1, 2], "contains", &[value("2")]), value(false));
    }

    #[test]
    fn list_contains_list() {
        let haystack = value([value([1, 2]), value([4, 8])]);
        assert_eq!(call(haystack, "contains", &[value([4, 8])]), value(true));
    }

    #[test]
    fn first_and_last() {
        assert_eq!(call(["a", "b"], "first", &[]), value("a"));
        assert_eq!(call(["a", "b"], "last", &[]), value("b"));
        assert_eq!(call(Value::List(vec![]), "first", &[]), Value::Null);
    }

    #[test]
    fn reversed() {
        assert_eq!(call([1, 2, 3], "reverse", &[]), value([3, 2, 1]));
    }
}
