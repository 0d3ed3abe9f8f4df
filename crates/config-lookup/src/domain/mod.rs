//! Domain types for config lookups.
//!
//! Nothing in this module touches the file system.  It defines what a lookup
//! can produce ([`value::ConfigValue`]) and how it can fail
//! ([`error::LookupError`]); the infrastructure and application layers depend
//! on these types, never the other way round.

/// Lookup failure taxonomy.
pub mod error;

/// The tagged lookup result.
pub mod value;
