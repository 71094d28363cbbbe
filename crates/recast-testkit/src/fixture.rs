//! Stateless in-memory fixture scheme
//!
//! [`FixtureScheme`] answers lookups from a plain key-to-value map. It is
//! the workhorse fixture: chainable `with_*` builders declare exactly which
//! keys exist and under which kind, so tests control the present/absent and
//! matched/mismatched axes precisely.

use std::collections::HashMap;

use recast_core::ScalarScheme;

use crate::SchemeError;

/// A value held by a [`FixtureScheme`], tagged with its kind category.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    BoolSequence(Vec<bool>),
    IntSequence(Vec<i64>),
    FloatSequence(Vec<f64>),
    StringSequence(Vec<String>),
}

impl FixtureValue {
    /// Kind label used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            FixtureValue::Bool(_) => "bool",
            FixtureValue::Int(_) => "int",
            FixtureValue::Float(_) => "float",
            FixtureValue::String(_) => "string",
            FixtureValue::BoolSequence(_) => "bool sequence",
            FixtureValue::IntSequence(_) => "int sequence",
            FixtureValue::FloatSequence(_) => "float sequence",
            FixtureValue::StringSequence(_) => "string sequence",
        }
    }

    /// Number of elements: 1 for scalars, the length for sequences.
    pub fn element_count(&self) -> usize {
        match self {
            FixtureValue::Bool(_)
            | FixtureValue::Int(_)
            | FixtureValue::Float(_)
            | FixtureValue::String(_) => 1,
            FixtureValue::BoolSequence(values) => values.len(),
            FixtureValue::IntSequence(values) => values.len(),
            FixtureValue::FloatSequence(values) => values.len(),
            FixtureValue::StringSequence(values) => values.len(),
        }
    }
}

/// Stateless scheme over an in-memory key-to-value map.
#[derive(Debug, Clone, Default)]
pub struct FixtureScheme {
    entries: HashMap<String, FixtureValue>,
}

impl FixtureScheme {
    /// Creates a scheme holding no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to `value`, overwriting any earlier binding. Chainable.
    pub fn with(mut self, key: impl Into<String>, value: FixtureValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Binds `key` to a scalar boolean.
    pub fn with_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.with(key, FixtureValue::Bool(value))
    }

    /// Binds `key` to a scalar integer.
    pub fn with_int(self, key: impl Into<String>, value: i64) -> Self {
        self.with(key, FixtureValue::Int(value))
    }

    /// Binds `key` to a scalar float.
    pub fn with_float(self, key: impl Into<String>, value: f64) -> Self {
        self.with(key, FixtureValue::Float(value))
    }

    /// Binds `key` to a scalar string.
    pub fn with_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, FixtureValue::String(value.into()))
    }

    /// Binds `key` to a boolean sequence.
    pub fn with_bool_sequence(
        self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = bool>,
    ) -> Self {
        self.with(key, FixtureValue::BoolSequence(values.into_iter().collect()))
    }

    /// Binds `key` to an integer sequence.
    pub fn with_int_sequence(
        self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = i64>,
    ) -> Self {
        self.with(key, FixtureValue::IntSequence(values.into_iter().collect()))
    }

    /// Binds `key` to a float sequence.
    pub fn with_float_sequence(
        self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.with(
            key,
            FixtureValue::FloatSequence(values.into_iter().collect()),
        )
    }

    /// Binds `key` to a string sequence.
    pub fn with_string_sequence<It, V>(self, key: impl Into<String>, values: It) -> Self
    where
        It: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.with(
            key,
            FixtureValue::StringSequence(values.into_iter().map(Into::into).collect()),
        )
    }

    fn value(&self, key: &str) -> Result<&FixtureValue, SchemeError> {
        self.entries.get(key).ok_or_else(|| SchemeError::missing(key))
    }
}

impl ScalarScheme for FixtureScheme {
    type Bool = bool;
    type Int = i64;
    type Float = f64;
    type Str = String;
    type Error = SchemeError;

    fn size(&self, key: &str) -> usize {
        self.entries
            .get(key)
            .map_or(0, FixtureValue::element_count)
    }

    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn as_bool(&self, key: &str) -> Result<bool, SchemeError> {
        match self.value(key)? {
            FixtureValue::Bool(value) => Ok(*value),
            other => Err(SchemeError::mismatch(key, "bool", other.kind())),
        }
    }

    fn as_int(&self, key: &str) -> Result<i64, SchemeError> {
        match self.value(key)? {
            FixtureValue::Int(value) => Ok(*value),
            other => Err(SchemeError::mismatch(key, "int", other.kind())),
        }
    }

    fn as_float(&self, key: &str) -> Result<f64, SchemeError> {
        match self.value(key)? {
            FixtureValue::Float(value) => Ok(*value),
            other => Err(SchemeError::mismatch(key, "float", other.kind())),
        }
    }

    fn as_string(&self, key: &str) -> Result<String, SchemeError> {
        match self.value(key)? {
            FixtureValue::String(value) => Ok(value.clone()),
            other => Err(SchemeError::mismatch(key, "string", other.kind())),
        }
    }

    fn as_bool_sequence<V: FnMut(bool)>(&self, key: &str, mut visit: V) -> Result<(), SchemeError> {
        match self.value(key)? {
            FixtureValue::BoolSequence(values) => {
                for value in values {
                    visit(*value);
                }
                Ok(())
            }
            other => Err(SchemeError::mismatch(key, "bool sequence", other.kind())),
        }
    }

    fn as_int_sequence<V: FnMut(i64)>(&self, key: &str, mut visit: V) -> Result<(), SchemeError> {
        match self.value(key)? {
            FixtureValue::IntSequence(values) => {
                for value in values {
                    visit(*value);
                }
                Ok(())
            }
            other => Err(SchemeError::mismatch(key, "int sequence", other.kind())),
        }
    }

    fn as_float_sequence<V: FnMut(f64)>(&self, key: &str, mut visit: V) -> Result<(), SchemeError> {
        match self.value(key)? {
            FixtureValue::FloatSequence(values) => {
                for value in values {
                    visit(*value);
                }
                Ok(())
            }
            other => Err(SchemeError::mismatch(key, "float sequence", other.kind())),
        }
    }

    fn as_string_sequence<V: FnMut(String)>(
        &self,
        key: &str,
        mut visit: V,
    ) -> Result<(), SchemeError> {
        match self.value(key)? {
            FixtureValue::StringSequence(values) => {
                for value in values {
                    visit(value.clone());
                }
                Ok(())
            }
            other => Err(SchemeError::mismatch(key, "string sequence", other.kind())),
        }
    }
}
