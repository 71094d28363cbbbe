//! Fixture translation schemes for exercising the recast translation engine
//!
//! This crate provides in-memory data sources implementing the
//! [`ScalarScheme`](recast_core::ScalarScheme) and
//! [`SequenceScheme`](recast_core::SequenceScheme) capability traits, so
//! tests can drive the engine through every path (present and absent keys,
//! kind mismatches, multi-record extraction) without touching real parsers
//! or files.

pub mod deck;
pub mod fixture;
pub mod json;

use thiserror::Error;

pub use deck::Deck;
pub use fixture::{FixtureScheme, FixtureValue};
pub use json::JsonScheme;

/// Failures surfaced by the fixture schemes.
///
/// The engine never inspects these. Integration tests rely on that,
/// asserting that a scheme failure comes back out of a translation call
/// exactly as constructed here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// A getter was called for a key the scheme does not hold.
    #[error("no value bound for key `{0}`")]
    Missing(String),

    /// A getter was called for a key bound under a different kind.
    #[error("key `{key}`: expected {expected}, found {found}")]
    KindMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl SchemeError {
    pub(crate) fn missing(key: &str) -> Self {
        SchemeError::Missing(key.to_string())
    }

    pub(crate) fn mismatch(key: &str, expected: &'static str, found: &'static str) -> Self {
        SchemeError::KindMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }
}
