//! Fixture scheme over an in-memory JSON document
//!
//! [`JsonScheme`] resolves dotted keys by walking nested objects in a
//! `serde_json::Value`, demonstrating that key syntax lives entirely on the
//! source side of the capability boundary: the engine hands over
//! `"monster.stats.health"` opaquely and this scheme decides it means
//! object traversal.

use recast_core::ScalarScheme;
use serde_json::Value;

use crate::SchemeError;

/// Scheme answering lookups from a JSON document, with dotted-key
/// object traversal.
#[derive(Debug, Clone)]
pub struct JsonScheme {
    root: Value,
}

impl JsonScheme {
    /// Wraps a JSON document. The root should be an object for any lookup
    /// to succeed.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut current = &self.root;
        for part in key.split('.') {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    fn require(&self, key: &str) -> Result<&Value, SchemeError> {
        self.lookup(key).ok_or_else(|| SchemeError::missing(key))
    }

    fn elements(&self, key: &str) -> Result<&[Value], SchemeError> {
        match self.require(key)? {
            Value::Array(values) => Ok(values),
            other => Err(SchemeError::mismatch(key, "array", json_kind(other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ScalarScheme for JsonScheme {
    type Bool = bool;
    type Int = i64;
    type Float = f64;
    type Str = String;
    type Error = SchemeError;

    fn size(&self, key: &str) -> usize {
        match self.lookup(key) {
            Some(Value::Array(values)) => values.len(),
            Some(Value::Null) | None => 0,
            Some(_) => 1,
        }
    }

    fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn as_bool(&self, key: &str) -> Result<bool, SchemeError> {
        let value = self.require(key)?;
        value
            .as_bool()
            .ok_or_else(|| SchemeError::mismatch(key, "bool", json_kind(value)))
    }

    fn as_int(&self, key: &str) -> Result<i64, SchemeError> {
        let value = self.require(key)?;
        value
            .as_i64()
            .ok_or_else(|| SchemeError::mismatch(key, "integer", json_kind(value)))
    }

    fn as_float(&self, key: &str) -> Result<f64, SchemeError> {
        let value = self.require(key)?;
        value
            .as_f64()
            .ok_or_else(|| SchemeError::mismatch(key, "number", json_kind(value)))
    }

    fn as_string(&self, key: &str) -> Result<String, SchemeError> {
        let value = self.require(key)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| SchemeError::mismatch(key, "string", json_kind(value)))
    }

    fn as_bool_sequence<V: FnMut(bool)>(&self, key: &str, mut visit: V) -> Result<(), SchemeError> {
        for element in self.elements(key)? {
            let value = element
                .as_bool()
                .ok_or_else(|| SchemeError::mismatch(key, "bool element", json_kind(element)))?;
            visit(value);
        }
        Ok(())
    }

    fn as_int_sequence<V: FnMut(i64)>(&self, key: &str, mut visit: V) -> Result<(), SchemeError> {
        for element in self.elements(key)? {
            let value = element
                .as_i64()
                .ok_or_else(|| SchemeError::mismatch(key, "integer element", json_kind(element)))?;
            visit(value);
        }
        Ok(())
    }

    fn as_float_sequence<V: FnMut(f64)>(&self, key: &str, mut visit: V) -> Result<(), SchemeError> {
        for element in self.elements(key)? {
            let value = element
                .as_f64()
                .ok_or_else(|| SchemeError::mismatch(key, "number element", json_kind(element)))?;
            visit(value);
        }
        Ok(())
    }

    fn as_string_sequence<V: FnMut(String)>(
        &self,
        key: &str,
        mut visit: V,
    ) -> Result<(), SchemeError> {
        for element in self.elements(key)? {
            let value = element
                .as_str()
                .ok_or_else(|| SchemeError::mismatch(key, "string element", json_kind(element)))?;
            visit(value.to_owned());
        }
        Ok(())
    }
}
