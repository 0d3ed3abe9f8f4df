//! Config lookup use case.
//!
//! # Two entry points
//!
//! - [`ConfigLookup::resolve`] returns `Result<ConfigValue, LookupError>`.
//!   `Ok(ConfigValue::Absent)` means the file was fine but has no such key;
//!   `Err(_)` means the file could not be used at all.  Use this when the two
//!   cases need different handling.
//!
//! - [`ConfigLookup::lookup`] (and the free function [`lookup`]) never fails.
//!   File and parse failures are logged once at `ERROR` level and collapse to
//!   `ConfigValue::Absent`, exactly like a missing key.  A missing key logs
//!   nothing.
//!
//! # Flow
//!
//! ```text
//! store.load()          read <dir>/config.json as UTF-8
//!   └─ serde_json       parse one JSON document
//!        └─ object?     take the top-level field named by `key`
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::error;

use crate::domain::error::LookupError;
use crate::domain::value::{json_type_name, ConfigValue};
use crate::infrastructure::store::{ConfigStore, FileStore, WorkingDirStore};

/// Looks up top-level keys in a JSON config document.
///
/// Stateless apart from the store: every call re-reads and re-parses the
/// document, so edits to the file are visible on the next call.
#[derive(Debug, Clone, Default)]
pub struct ConfigLookup<S = WorkingDirStore> {
    store: S,
}

impl ConfigLookup<WorkingDirStore> {
    /// Reads `config.json` from the current working directory at call time.
    pub fn in_working_dir() -> Self {
        Self::new(WorkingDirStore)
    }
}

impl ConfigLookup<FileStore> {
    /// Reads `config.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(FileStore::in_dir(dir))
    }

    /// Reads the file at exactly `path`.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(path))
    }
}

impl<S: ConfigStore> ConfigLookup<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Path the next lookup will read from.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::WorkingDir`] if the working directory cannot be
    /// determined.
    pub fn config_path(&self) -> Result<PathBuf, LookupError> {
        self.store.location()
    }

    /// Reads, parses and returns the value stored under `key`.
    ///
    /// A key that is not present yields `Ok(ConfigValue::Absent)`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotFound`] / [`LookupError::Unreadable`] /
    ///   [`LookupError::WorkingDir`] when the file cannot be read.
    /// - [`LookupError::Malformed`] when the text is not valid JSON.
    /// - [`LookupError::NotAnObject`] when the root is not a JSON object.
    pub fn resolve(&self, key: &str) -> Result<ConfigValue, LookupError> {
        let doc = self.store.load()?;

        let root: Value = match serde_json::from_str(&doc.text) {
            Ok(root) => root,
            Err(source) => {
                return Err(LookupError::Malformed {
                    path: doc.path,
                    source,
                })
            }
        };

        match root {
            Value::Object(mut fields) => Ok(ConfigValue::from(fields.remove(key))),
            other => Err(LookupError::NotAnObject {
                path: doc.path,
                found: json_type_name(&other),
            }),
        }
    }

    /// Returns the value stored under `key`, or [`ConfigValue::Absent`].
    ///
    /// Never fails.  When the file cannot be used, one `ERROR` event
    /// describing the failure is emitted through `tracing`; it only reaches
    /// stderr or a log file if the host process has installed a subscriber.
    pub fn lookup(&self, key: &str) -> ConfigValue {
        match self.resolve(key) {
            Ok(value) => value,
            Err(e) => {
                error!(key, "Error reading config.json: {e}");
                ConfigValue::Absent
            }
        }
    }
}

/// Returns the value for `key` from `./config.json`, or [`ConfigValue::Absent`].
///
/// Shorthand for `ConfigLookup::in_working_dir().lookup(key)`.
pub fn lookup(key: &str) -> ConfigValue {
    ConfigLookup::in_working_dir().lookup(key)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
