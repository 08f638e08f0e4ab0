use crate::Value;

pub(super) fn len(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(s), []) => Value::from(s.chars().count()),
        _ => Value::Null,
    }
}

pub(super) fn to_upper(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(s), []) => Value::Str(s.to_uppercase()),
        _ => Value::Null,
    }
}

pub(super) fn to_lower(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(s), []) => Value::Str(s.to_lowercase()),
        _ => Value::Null,
    }
}

pub(super) fn trim(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(s), []) => Value::from(s.trim()),
        _ => Value::Null,
    }
}

pub(super) fn contains(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(haystack), [Value::Str(needle)]) => Value::Bool(haystack.contains(needle.as_str())),
        (Value::Str(_), [_]) => Value::Bool(false),
        _ => Value::Null,
    }
}

pub(super) fn starts_with(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(s), [Value::Str(prefix)]) => Value::Bool(s.starts_with(prefix.as_str())),
        _ => Value::Null,
    }
}

pub(super) fn ends_with(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(s), [Value::Str(suffix)]) => Value::Bool(s.ends_with(suffix.as_str())),
        _ => Value::Null,
    }
}

pub(super) fn split(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Str(s), [Value::Str(sep)]) if sep.is_empty() => s.chars().map(Value::from).collect(),
        (Value::Str(s), [Value::Str(sep)]) => s.split(sep.as_str()).map(Value::from).collect(),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod test {
    use crate::Value;
    use crate::methods::test::{call, value};

    #[test]
    fn string_len_counts_chars() {
        assert_eq!(call("héllo", "len", &[]), value(5));
        assert_eq!(call("", "len", &[]), value(0));
    }

    #[test]
    fn string_to_upper() {
        assert_eq!(call("hello", "to_upper", &[]), value("HELLO"));
    }

    #[test]
    fn string_to_lower() {
        assert_eq!(call("HELLO", "to_lower", &[]), value("hello"));
    }

    #[test]
    fn string_trim() {
        assert_eq!(call("  x ", "trim", &[]), value("x"));
    }

    #[test]
    fn static_string_contains() {
        let haystack = "like looking for a needle in a";
        assert_eq!(call(haystack, "contains", &[value("needle")]), value(true));
        assert_eq!(call(haystack, "contains", &[value("pin")]), value(false));
        assert_eq!(call(haystack, "contains", &[value(1)]), value(false));
        assert_eq!(call(haystack, "contains", &[]), Value::Null);
    }

    #[test]
    fn prefix_and_suffix() {
        assert_eq!(call("foobar", "starts_with", &[value("foo")]), value(true));
        assert_eq!(call("foobar", "ends_with", &[value("foo")]), value(false));
    }

    #[test]
    fn split_on_separator() {
        assert_eq!(call("a,b,c", "split", &[value(",")]), value(["a", "b", "c"]));
        assert_eq!(call("ab", "split", &[value("")]), value(["a", "b"]));
        assert_eq!(call("ab", "split", &[]), Value::Null);
    }
}
