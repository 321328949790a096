use crate::error::{ReaderError, Result};
use std::{collections::HashMap, fmt, path::PathBuf, sync::Arc};

/// Read-only view of a storage location holding log files.
///
/// Readers only ever ask two things of a storage: whether a named file is
/// there, and where it lives on the local filesystem so it can be streamed.
pub trait Storage: Send + Sync {
    fn exists(&self, name: &str) -> bool;

    /// absolute path of `name` inside this storage
    fn path(&self, name: &str) -> PathBuf;
}

/// named storages a reader can select with `from_disk`
#[derive(Clone, Default)]
pub struct Disks {
    disks: HashMap<String, Arc<dyn Storage>>,
}

impl Disks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, storage: Arc<dyn Storage>) {
        self.disks.insert(name.into(), storage);
    }

    pub fn with_disk(mut self, name: impl Into<String>, storage: Arc<dyn Storage>) -> Self {
        self.insert(name, storage);
        self
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Storage>> {
        self.disks
            .get(name)
            .cloned()
            .ok_or_else(|| ReaderError::UnknownDisk(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.disks.keys().map(String::as_str)
    }
}

impl fmt::Debug for Disks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
