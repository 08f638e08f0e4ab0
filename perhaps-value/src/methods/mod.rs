use std::collections::HashMap;
use std::sync::OnceLock;

use crate::value::Type;
use crate::{Method, Value};

mod list;
mod map;
mod number;
mod string;

/// Methods that every value has, looked up by the kind of the receiver.
///
/// A method given the wrong number or kind of arguments returns null.
pub struct MethodTable {
    inner: HashMap<Type, HashMap<String, Method>>,
}

impl MethodTable {
    pub fn empty() -> Self {
        Self { inner: HashMap::new() }
    }

    /// A table containing the built-in methods.
    pub fn new() -> Self {
        let mut table = Self::empty();

        for ty in Type::ALL {
            table.insert(ty, "to_str", to_str);
        }

        table.insert(Type::String, "len", string::len);
        table.insert(Type::String, "to_upper", string::to_upper);
        table.insert(Type::String, "to_lower", string::to_lower);
        table.insert(Type::String, "trim", string::trim);
        table.insert(Type::String, "contains", string::contains);
        table.insert(Type::String, "starts_with", string::starts_with);
        table.insert(Type::String, "ends_with", string::ends_with);
        table.insert(Type::String, "split", string::split);

        table.insert(Type::List, "len", list::len);
        table.insert(Type::List, "join", list::join);
        table.insert(Type::List, "contains", list::contains);
        table.insert(Type::List, "first", list::first);
        table.insert(Type::List, "last", list::last);
        table.insert(Type::List, "reverse", list::reverse);

        table.insert(Type::Map, "len", map::len);
        table.insert(Type::Map, "keys", map::keys);
        table.insert(Type::Map, "values", map::values);
        table.insert(Type::Map, "contains_key", map::contains_key);

        for ty in [Type::Int, Type::Float, Type::String, Type::Bool] {
            table.insert(ty, "to_int", number::to_int);
            table.insert(ty, "to_float", number::to_float);
        }

        for ty in [Type::Int, Type::Float] {
            table.insert(ty, "abs", number::abs);
            table.insert(ty, "round", number::round);
        }

        table
    }

    pub fn insert(&mut self, ty: Type, ident: impl Into<String>, method: impl Into<Method>) {
        self.inner.entry(ty).or_default().insert(ident.into(), method.into());
    }

    pub fn lookup(&self, ty: Type, ident: &str) -> Option<&Method> {
        self.inner.get(&ty)?.get(ident)
    }
}

impl Value {
    /// Find the method `name` to call on this value.
    ///
    /// An own member wins, but only if it is a method. Without an own member the
    /// built-in method for the value's kind is used. Null has no methods.
    pub fn method(&self, name: &str) -> Option<Method> {
        if self.is_null() {
            return None;
        }

        match self.get(name) {
            Some(Value::Method(method)) => Some(method.clone()),
            Some(_) => None,
            None => builtins().lookup(self.type_info(), name).cloned(),
        }
    }
}

/// The shared table of built-in methods.
pub fn builtins() -> &'static MethodTable {
    static BUILTINS: OnceLock<MethodTable> = OnceLock::new();
    BUILTINS.get_or_init(MethodTable::new)
}

fn to_str(this: &Value, args: &[Value]) -> Value {
    if !args.is_empty() {
        return Value::Null;
    }
    Value::Str(this.to_string())
}
