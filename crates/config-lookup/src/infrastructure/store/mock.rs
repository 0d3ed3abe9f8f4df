//! Mock config store for unit testing.
//!
//! Lets tests hand the lookup logic canned JSON text, or make every read fail
//! with a chosen [`io::ErrorKind`], without touching the file system.  The
//! store also counts reads so tests can confirm nothing is cached.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ConfigDocument, ConfigStore, CONFIG_FILE_NAME};
use crate::domain::error::LookupError;

/// A mock implementation of [`ConfigStore`].
#[derive(Debug)]
pub struct MockStore {
    path: PathBuf,
    content: Mutex<Result<String, io::ErrorKind>>,
    reads: AtomicUsize,
}

impl MockStore {
    /// Creates a store whose document is `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE_NAME),
            content: Mutex::new(Ok(text.into())),
            reads: AtomicUsize::new(0),
        }
    }

    /// Creates a store whose reads fail with an I/O error of `kind`.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE_NAME),
            content: Mutex::new(Err(kind)),
            reads: AtomicUsize::new(0),
        }
    }

    /// Replaces the document text, as if another process rewrote the file.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.content.lock().expect("lock poisoned") = Ok(text.into());
    }

    /// Makes subsequent reads fail with `kind`.
    pub fn set_failure(&self, kind: io::ErrorKind) {
        *self.content.lock().expect("lock poisoned") = Err(kind);
    }

    /// Returns the number of times [`ConfigStore::load`] was called.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ConfigStore for MockStore {
    fn location(&self) -> Result<PathBuf, LookupError> {
        Ok(self.path.clone())
    }

    fn load(&self) -> Result<ConfigDocument, LookupError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &*self.content.lock().expect("lock poisoned") {
            Ok(text) => Ok(ConfigDocument {
                path: self.path.clone(),
                text: text.clone(),
            }),
            Err(kind) => Err(LookupError::from_io(
                self.path.clone(),
                io::Error::new(*kind, format!("mock {kind:?}")),
            )),
        }
    }
}
