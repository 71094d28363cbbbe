//! Recast Core - keyed field-translation engine
//!
//! This crate populates typed records from pluggable data sources. A
//! [`DataTranslator`] holds named bindings from opaque string keys to fields
//! of one record type; translation resolves each bound key against a data
//! source and writes the fetched value into the located field. What fields
//! exist and what keys they map to is declared once; where the data comes
//! from (a parsed config tree, a binary blob reader, a test fixture) is
//! whatever implements the scheme traits.
//!
//! # Main Components
//!
//! - **Field Locators**: [`Member`] handles and the [`MemberRef`] kind tag
//! - **Binding Registry + Translation Engine**: [`DataTranslator`] with its
//!   three translation modes (single record, uniform slice, record sequence)
//! - **Capability Traits**: [`ScalarScheme`] and [`SequenceScheme`], the
//!   contract a data source implements
//!
//! # Example
//!
//! ```
//! use recast_core::DataTranslator;
//! use recast_testkit::FixtureScheme;
//!
//! #[derive(Default)]
//! struct Monster {
//!     name: String,
//!     health: i64,
//!     speed: f64,
//!     hostile: bool,
//!     drops: Vec<String>,
//! }
//!
//! fn main() -> Result<(), recast_testkit::SchemeError> {
//!     let translator = DataTranslator::<Monster>::new()
//!         .add_string_member("monster.name", |m| &mut m.name)
//!         .add_int_member("monster.health", |m| &mut m.health)
//!         .add_float_member("monster.speed", |m| &mut m.speed)
//!         .add_bool_member("monster.hostile", |m| &mut m.hostile)
//!         .add_string_sequence_member("monster.drops", |m| &mut m.drops);
//!
//!     let scheme = FixtureScheme::new()
//!         .with_string("monster.name", "gloom shrike")
//!         .with_int("monster.health", 240)
//!         .with_float("monster.speed", 1.25)
//!         .with_bool("monster.hostile", true)
//!         .with_string_sequence("monster.drops", ["feather", "talon"]);
//!
//!     let mut monster = Monster::default();
//!     let written = translator.translate(&mut monster, &scheme)?;
//!
//!     assert_eq!(written, 5);
//!     assert_eq!(monster.name, "gloom shrike");
//!     assert!(monster.hostile);
//!     assert_eq!(monster.drops, ["feather", "talon"]);
//!     Ok(())
//! }
//! ```

pub mod member;
pub mod scheme;
pub mod translator;

// Re-export the whole public surface for convenience
pub use member::{Member, MemberRef};
pub use scheme::{ScalarScheme, SequenceScheme};
pub use translator::DataTranslator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
