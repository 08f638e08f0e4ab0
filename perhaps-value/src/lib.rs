pub use crate::map::Map;
pub use crate::method::{Method, Outcome};
pub use crate::methods::{builtins, MethodTable};
pub use crate::path::{safe_read, Path};
pub use crate::value::{Type, Value};

mod json;
mod map;
mod method;
mod methods;
mod path;
mod value;
