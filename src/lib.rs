//! An optional value for reading deeply nested, possibly absent data and
//! chaining transformations over it, without checking for null at every step.
//!
//! ```
//! use perhaps::prelude::*;
//!
//! let response = Value::from_json_str(r#"{ "user": { "tags": ["a", "b"] } }"#).unwrap();
//!
//! let tags = maybe(&response)
//!     .get("user.tags")
//!     .invoke("join", &[Value::from("|")])
//!     .to_string();
//! assert_eq!(tags, "a|b");
//!
//! let missing = maybe(&response)
//!     .get("user.address.city")
//!     .bind(|city| format!("city: {city}"))
//!     .value_or("unknown");
//! assert_eq!(missing, Value::from("unknown"));
//! ```
pub use perhaps_value as value;

pub use crate::error::{Error, Result};
pub use crate::json::{JsonOptions, Replacer, Space};
pub use crate::maybe::{maybe, Chain, Maybe, Source};

mod error;
mod json;
mod maybe;
#[cfg(feature = "serde")]
mod serialize;

pub mod prelude {
    pub use crate::json::{JsonOptions, Replacer, Space};
    pub use crate::maybe::{maybe, Maybe};
    pub use crate::value::{Map, Method, Outcome, Path, Value};
}
