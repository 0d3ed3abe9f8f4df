//! Application layer: the lookup use case.
//!
//! Depends on `domain` for the result and error types and on the
//! `infrastructure::store::ConfigStore` trait for the document text.

pub mod lookup;
