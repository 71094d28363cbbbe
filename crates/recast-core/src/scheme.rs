//! Capability traits for pluggable data sources
//!
//! A data source ("translation scheme") is any object that can answer typed
//! lookups by opaque string key. The engine never interprets key syntax:
//! dotted paths, section prefixes, or anything else are resolved entirely by
//! the scheme. Two capability levels exist: [`ScalarScheme`] is enough for
//! single-record translation, and [`SequenceScheme`] adds record advancement
//! for multi-record extraction.
//!
//! Copyright (c) 2025 Recast Team
//! Licensed under the Apache-2.0 license

/// Scalar lookup capability required by every translation operation.
///
/// The four associated representation types decouple the engine from the
/// host's notion of a boolean, integer, float, or string: a scheme bridging
/// a foreign ABI may answer with, say, a platform-specific boolean type, and
/// a [`DataTranslator`](crate::DataTranslator) parameterized with the same
/// types will consume it without conversion glue.
///
/// # Failure contract
///
/// A missing key is not a failure: the engine probes with [`has`] and skips
/// absent keys without calling a getter. The getters themselves are fallible
/// so that a scheme's own conversion errors (a string where an integer was
/// expected, a malformed entry, an I/O hiccup in a lazy source) surface
/// through the engine unchanged. The engine never intercepts, inspects, or
/// wraps `Self::Error`.
///
/// [`has`]: ScalarScheme::has
pub trait ScalarScheme {
    /// Representation of boolean values.
    type Bool;
    /// Representation of integral values.
    type Int;
    /// Representation of floating-point values.
    type Float;
    /// Representation of string values.
    type Str;
    /// Failure type surfaced by lookups and conversions.
    type Error;

    /// Number of elements available under `key`.
    ///
    /// The meaning for scalar entries is source-defined; the engine only
    /// uses this to pre-reserve capacity before appending sequence elements.
    fn size(&self, key: &str) -> usize;

    /// Whether any value exists under `key`.
    fn has(&self, key: &str) -> bool;

    /// Fetches the boolean value bound to `key`.
    fn as_bool(&self, key: &str) -> Result<Self::Bool, Self::Error>;

    /// Fetches the integral value bound to `key`.
    fn as_int(&self, key: &str) -> Result<Self::Int, Self::Error>;

    /// Fetches the floating-point value bound to `key`.
    fn as_float(&self, key: &str) -> Result<Self::Float, Self::Error>;

    /// Fetches the string value bound to `key`.
    fn as_string(&self, key: &str) -> Result<Self::Str, Self::Error>;

    /// Invokes `visit` once per boolean element under `key`, in the source's
    /// emission order.
    fn as_bool_sequence<V>(&self, key: &str, visit: V) -> Result<(), Self::Error>
    where
        V: FnMut(Self::Bool);

    /// Invokes `visit` once per integral element under `key`, in the source's
    /// emission order.
    fn as_int_sequence<V>(&self, key: &str, visit: V) -> Result<(), Self::Error>
    where
        V: FnMut(Self::Int);

    /// Invokes `visit` once per floating-point element under `key`, in the
    /// source's emission order.
    fn as_float_sequence<V>(&self, key: &str, visit: V) -> Result<(), Self::Error>
    where
        V: FnMut(Self::Float);

    /// Invokes `visit` once per string element under `key`, in the source's
    /// emission order.
    fn as_string_sequence<V>(&self, key: &str, visit: V) -> Result<(), Self::Error>
    where
        V: FnMut(Self::Str);
}

/// Multi-record capability: a scheme whose lookups are positioned on a
/// current record, with a cursor that can advance to the next one.
///
/// A sequence scheme starts positioned *before* its first record;
/// [`translate_sequence`](crate::DataTranslator::translate_sequence) calls
/// [`next`](SequenceScheme::next) before producing each record, so a scheme
/// whose first `next` returns `false` contributes nothing.
pub trait SequenceScheme: ScalarScheme {
    /// Advances the cursor to the next record. Returns `false` once the
    /// source is exhausted; further calls must keep returning `false`.
    fn next(&mut self) -> bool;
}
