use perhaps_value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Maybe;

/// Serialized as [`Maybe::value`]: the value, the default, or `null`.
impl Serialize for Maybe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// `null` deserializes to nothing.
impl<'de> Deserialize<'de> for Maybe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Maybe::new)
    }
}

#[cfg(test)]
mod test {
    use perhaps_value::Map;

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Response {
        user: Maybe,
        #[serde(default)]
        token: Maybe,
    }

    #[test]
    fn deserialize_fields() {
        let response: Response = serde_json::from_str(r#"{"user":{"name":"x"}}"#).unwrap();
        assert_eq!(response.user.get("name").value(), Value::from("x"));
        assert!(response.token.is_nothing());

        let response: Response = serde_json::from_str(r#"{"user":null,"token":"t"}"#).unwrap();
        assert!(response.user.is_nothing());
        assert_eq!(response.token, Maybe::from("t"));
    }

    #[test]
    fn serialize_with_default() {
        let response = Response {
            user: Maybe::empty().with_default(Map::empty().with("name", "guest")),
            token: Maybe::empty(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"user":{"name":"guest"},"token":null}"#);
    }
}
