//! Infrastructure layer: where the config text comes from.
//!
//! **Dependency rule**: this layer may depend on `domain`, but MUST NOT be
//! imported by the domain layer.

pub mod store;
