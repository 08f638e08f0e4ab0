use crate::Value;

pub(super) fn len(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Map(map), []) => Value::from(map.len()),
        _ => Value::Null,
    }
}

pub(super) fn keys(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Map(map), []) => map.keys().collect(),
        _ => Value::Null,
    }
}

pub(super) fn values(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Map(map), []) => map.values().collect(),
        _ => Value::Null,
    }
}

pub(super) fn contains_key(this: &Value, args: &[Value]) -> Value {
    match (this, args) {
        (Value::Map(map), [Value::Str(key)]) => Value::Bool(map.contains_key(key)),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod test {
    use crate::methods::test::{call, value};
    use crate::{Map, Value};

    fn map() -> Map {
        Map::empty().with("b", 1).with("a", 2)
    }

    #[test]
    fn map_len() {
        assert_eq!(call(map(), "len", &[]), value(2));
    }

    #[test]
    fn keys_in_insertion_order() {
        assert_eq!(call(map(), "keys", &[]), value(["b", "a"]));
        assert_eq!(call(map(), "values", &[]), value([1, 2]));
    }

    #[test]
    fn map_contains_key() {
        assert_eq!(call(map(), "contains_key", &[value("a")]), value(true));
        assert_eq!(call(map(), "contains_key", &[value("c")]), value(false));
        assert_eq!(call(map(), "contains_key", &[]), Value::Null);
    }
}
