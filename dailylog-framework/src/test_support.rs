// shared fixtures for the unit tests in this crate

use crate::{
    parser::RecordParser,
    reader::ReaderDesc,
    record::{Field, FieldMap},
    storage::Storage,
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tempfile::TempDir;

/// parses `date|time|env|level|message|context|extra`
pub struct PipeParser;

impl RecordParser for PipeParser {
    fn parse(&self, line: &str) -> Option<FieldMap> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != Field::ALL.len() {
            return None;
        }
        Some(
            Field::ALL
                .into_iter()
                .zip(parts)
                .map(|(field, value)| (field, value.to_string()))
                .collect(),
        )
    }
}

pub struct DirStorage {
    root: PathBuf,
}

impl Storage for DirStorage {
    fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// a temp directory registered as disk "logs"
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.root().join(name), contents).unwrap();
    }

    pub fn desc(&self) -> ReaderDesc {
        let storage = DirStorage {
            root: self.root().to_path_buf(),
        };
        ReaderDesc::new(Arc::new(PipeParser)).with_disk("logs", Arc::new(storage))
    }
}
