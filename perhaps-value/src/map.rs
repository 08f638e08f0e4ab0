use hashlink::LinkedHashMap;

use crate::Value;

/// A map of values with strings as keys.
///
/// Entries keep their insertion order, which is the order they are written out
/// as JSON.
/// ```
/// # use perhaps_value::Map;
/// let map = Map::empty().with("key", 123);
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Map {
    inner: LinkedHashMap<String, Value>,
}

impl Map {
    pub fn empty() -> Self {
        Self {
            inner: LinkedHashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.inner.get_mut(key)
    }

    /// Insert a value into the `Map`.
    /// Replacing an existing key keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.replace(key.into(), value.into())
    }

    /// Insert and return the map, for building maps inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a value from the map.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.inner.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.inner.values()
    }
}

impl IntoIterator for Map {
    type IntoIter = hashlink::linked_hash_map::IntoIter<String, Value>;
    type Item = (String, Value);

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::empty();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert() {
        let mut map = Map::empty();
        map.insert("a", 1);
        map.insert("b", 2);

        assert_eq!(map.get("a"), Some(&Value::Int(1)));
        assert_eq!(map.get("b"), Some(&Value::Int(2)));
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn replace_keeps_position() {
        let mut map = Map::empty().with("a", 1).with("b", 2);
        let old = map.insert("a", 3);

        assert_eq!(old, Some(Value::Int(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn remove() {
        let mut map = Map::empty().with("a", 1);
        assert_eq!(map.remove("a"), Some(Value::Int(1)));
        assert!(map.is_empty());
    }

    #[test]
    fn collect() {
        let map: Map = [("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("y"));
    }
}
