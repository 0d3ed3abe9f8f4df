//! Config document sources.
//!
//! A [`ConfigStore`] answers two questions: *where is the config file right
//! now?* and *what text does it contain?*  The lookup logic in the
//! application layer only sees the trait, so it can be pointed at the process
//! working directory, at an explicit path, or at an in-memory mock.
//!
//! # Implementations
//!
//! | Store               | Location                                          |
//! |---------------------|---------------------------------------------------|
//! | [`WorkingDirStore`] | `<current dir>/config.json`, resolved on each read |
//! | [`FileStore`]       | a fixed path chosen at construction time          |
//! | [`mock::MockStore`] | nothing on disk; canned text or I/O error kinds    |
//!
//! # Resource handling
//!
//! Every read opens the file, reads it to the end and closes it again before
//! returning, on success and failure alike.  Stores hold no file handles and
//! no cached content between calls.

use std::path::{Path, PathBuf};

use crate::domain::error::LookupError;

pub mod mock;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// The raw text of a config file together with the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Path the text was read from; used in diagnostics.
    pub path: PathBuf,
    /// Entire file content, decoded as UTF-8.
    pub text: String,
}

/// Trait abstracting where config text is read from.
///
/// The production implementations read the file system; tests use
/// [`mock::MockStore`].
pub trait ConfigStore {
    /// Resolves the path the next [`ConfigStore::load`] call will read.
    fn location(&self) -> Result<PathBuf, LookupError>;

    /// Reads the whole document synchronously.
    fn load(&self) -> Result<ConfigDocument, LookupError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn location(&self) -> Result<PathBuf, LookupError> {
        (**self).location()
    }

    fn load(&self) -> Result<ConfigDocument, LookupError> {
        (**self).load()
    }
}

// ── Working directory ─────────────────────────────────────────────────────────

/// Reads `config.json` from the process's current working directory.
///
/// The working directory is queried on every call, so a process that changes
/// directory between lookups reads the file in its new location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingDirStore;

impl ConfigStore for WorkingDirStore {
    fn location(&self) -> Result<PathBuf, LookupError> {
        let cwd = std::env::current_dir().map_err(LookupError::WorkingDir)?;
        Ok(cwd.join(CONFIG_FILE_NAME))
    }

    fn load(&self) -> Result<ConfigDocument, LookupError> {
        read_document(self.location()?)
    }
}

// ── Explicit path ─────────────────────────────────────────────────────────────

/// Reads a config file from a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store that reads exactly `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store that reads `config.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn location(&self) -> Result<PathBuf, LookupError> {
        Ok(self.path.clone())
    }

    fn load(&self) -> Result<ConfigDocument, LookupError> {
        read_document(self.path.clone())
    }
}

/// Reads `path` to a string, classifying any I/O failure.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD instead of failing the
/// read, so one bad byte does not hide every other key in the file.
/// `std::fs::read` opens, reads and drops the handle inside the call, so
/// nothing stays open once this returns.
fn read_document(path: PathBuf) -> Result<ConfigDocument, LookupError> {
    match std::fs::read(&path) {
        Ok(bytes) => Ok(ConfigDocument {
            path,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        }),
        Err(source) => Err(LookupError::from_io(path, source)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
