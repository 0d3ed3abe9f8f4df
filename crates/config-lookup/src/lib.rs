//! # config-lookup
//!
//! Reads `config.json` from the current working directory and returns the
//! value stored under a requested top-level key.
//!
//! # Architecture overview (for beginners)
//!
//! The whole crate is one operation: *read, parse, look up, or fail*.  It is
//! still split into the same three layers used elsewhere in this workspace so
//! that the file system can be swapped out in tests:
//!
//! - **`domain`** – Pure types with no I/O.  [`ConfigValue`] is the tagged
//!   result of a lookup (including the `Absent` signal) and [`LookupError`]
//!   names every way a lookup can fail.
//!
//! - **`infrastructure`** – Where the JSON text comes from.  The
//!   [`ConfigStore`] trait has a working-directory implementation (the
//!   default), an explicit-path implementation, and a mock for tests.
//!
//! - **`application`** – [`ConfigLookup`], which parses the text and picks
//!   out the key.  `resolve` returns a structured error; `lookup` logs the
//!   error and returns `Absent` instead.
//!
//! Failure diagnostics are `tracing` events.  The crate never installs a
//! subscriber, so a host that wants to see them must set one up (the
//! `config-lookup` binary writes them to stderr).
//!
//! # Example
//!
//! ```rust,no_run
//! use config_lookup::{lookup, ConfigValue};
//!
//! match lookup("API_KEY") {
//!     ConfigValue::String(key) => println!("api key is {key}"),
//!     ConfigValue::Absent => println!("no api key configured"),
//!     other => println!("unexpected api key type: {}", other.type_name()),
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the most-used types at the crate root so callers can write
// `config_lookup::ConfigValue` instead of `config_lookup::domain::value::ConfigValue`.
pub use application::lookup::{lookup, ConfigLookup};
pub use domain::error::LookupError;
pub use domain::value::ConfigValue;
pub use infrastructure::store::{
    ConfigDocument, ConfigStore, FileStore, WorkingDirStore, CONFIG_FILE_NAME,
};
