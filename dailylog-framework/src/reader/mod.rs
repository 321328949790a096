//! Reader flavors and the binding gate they share.
//!
//! Each flavor is a consuming builder: select a disk, bind a file, then read.
//! Binding runs every check up front (disk selected, naming convention where
//! the flavor wants it, file present) so reads only deal with I/O.
//!
//! | flavor            | binding            | name check | reads                         |
//! |-------------------|--------------------|------------|-------------------------------|
//! | [`RecordReader`]  | `info_about`       | yes        | `get`, `paginate`             |
//! | [`LogReader`]     | `full_info_about`  | no         | `get`, `paginate`, `daily_summary` |
//! | [`SummaryReader`] | `info_about`       | no         | `get`, `summary`              |
//!
//! A reader holds one bound file and is not meant to be shared between
//! concurrent requests; build one per request.

mod log_reader;
mod record_reader;
mod summary_reader;

pub use log_reader::LogReader;
pub use record_reader::RecordReader;
pub use summary_reader::SummaryReader;

use crate::{
    error::{ReaderError, Result},
    file_name::{DAILY_LOG_FILE_RE, is_daily_log},
    page::PageWindow,
    parser::RecordParser,
    record::{LogRecord, Projection},
    storage::{Disks, Storage},
    stream::RecordStreamReader,
    summary::{Summary, summarize},
};
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Configuration shared by every reader flavor.
///
/// ```rust
/// # use dailylog_framework::{FieldMap, RecordParser, ReaderDesc, Storage};
/// # use std::{path::PathBuf, sync::Arc};
/// # struct MyParser;
/// # impl RecordParser for MyParser {
/// #     fn parse(&self, _: &str) -> Option<FieldMap> { None }
/// # }
/// # struct MyDisk;
/// # impl Storage for MyDisk {
/// #     fn exists(&self, _: &str) -> bool { false }
/// #     fn path(&self, name: &str) -> PathBuf { PathBuf::from(name) }
/// # }
/// let desc = ReaderDesc::new(Arc::new(MyParser)).with_disk("logs", Arc::new(MyDisk));
/// ```
#[derive(Clone)]
pub struct ReaderDesc {
    pub parser: Arc<dyn RecordParser>,
    /// naming rule enforced by [`RecordReader::info_about`]
    pub log_file_pattern: Regex,
    pub disks: Disks,
}

impl ReaderDesc {
    pub fn new(parser: Arc<dyn RecordParser>) -> Self {
        Self {
            parser,
            log_file_pattern: DAILY_LOG_FILE_RE.clone(),
            disks: Disks::new(),
        }
    }

    pub fn with_disk(mut self, name: impl Into<String>, storage: Arc<dyn Storage>) -> Self {
        self.disks.insert(name, storage);
        self
    }

    pub fn with_log_file_pattern(mut self, pattern: Regex) -> Self {
        self.log_file_pattern = pattern;
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameCheck {
    DailyLog,
    AsIs,
}

struct SelectedDisk {
    name: String,
    storage: Arc<dyn Storage>,
}

struct BoundFile {
    name: String,
    path: PathBuf,
}

pub(crate) struct ReaderState {
    desc: ReaderDesc,
    disk: Option<SelectedDisk>,
    log_file: Option<BoundFile>,
}

impl ReaderState {
    pub(crate) fn new(desc: ReaderDesc) -> Self {
        Self {
            desc,
            disk: None,
            log_file: None,
        }
    }

    pub(crate) fn select_disk(&mut self, name: &str) -> Result<()> {
        let storage = self.desc.disks.get(name)?;
        log::debug!("Reader: using disk '{}'", name);

        self.disk = Some(SelectedDisk {
            name: name.to_string(),
            storage,
        });
        // a file bound on another disk no longer applies
        self.log_file = None;
        Ok(())
    }

    /// run the binding checks for `log_file` and return its full path
    pub(crate) fn locate(&self, log_file: &str, check: NameCheck) -> Result<PathBuf> {
        let disk = self.disk.as_ref().ok_or(ReaderError::StorageNotConfigured)?;

        if check == NameCheck::DailyLog && !is_daily_log(&self.desc.log_file_pattern, log_file) {
            return Err(ReaderError::InvalidLogFilename(log_file.to_string()));
        }
        if !disk.storage.exists(log_file) {
            return Err(ReaderError::FileNotFound(log_file.to_string()));
        }

        Ok(disk.storage.path(log_file))
    }

    pub(crate) fn bind(&mut self, log_file: &str, check: NameCheck) -> Result<()> {
        let path = self.locate(log_file, check)?;
        log::debug!(
            "Reader: bound '{}' on disk '{}' ({})",
            log_file,
            self.disk.as_ref().map_or("", |disk| disk.name.as_str()),
            path.display()
        );

        self.log_file = Some(BoundFile {
            name: log_file.to_string(),
            path,
        });
        Ok(())
    }

    pub(crate) fn bound_file(&self) -> Option<&str> {
        self.log_file.as_ref().map(|file| file.name.as_str())
    }

    fn bound_path(&self) -> Result<&Path> {
        if self.disk.is_none() {
            return Err(ReaderError::StorageNotConfigured);
        }
        self.log_file
            .as_ref()
            .map(|file| file.path.as_path())
            .ok_or(ReaderError::FileNotBound)
    }

    fn records(&self, projection: Projection) -> RecordStreamReader {
        RecordStreamReader::new(self.desc.parser.clone(), projection)
    }

    pub(crate) fn read_all(&self, projection: Projection) -> Result<Vec<LogRecord>> {
        self.records(projection).read_all(self.bound_path()?)
    }

    pub(crate) fn read_page(
        &self,
        projection: Projection,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<LogRecord>> {
        let window = PageWindow::for_page(page, per_page)?;
        self.records(projection)
            .read_window(self.bound_path()?, window)
    }

    pub(crate) fn summarize_bound(&self) -> Result<Summary> {
        summarize_path(&self.records(Projection::SUMMARY), self.bound_path()?)
    }

    pub(crate) fn summarize_file(&self, log_file: &str) -> Result<Summary> {
        let path = self.locate(log_file, NameCheck::AsIs)?;
        summarize_path(&self.records(Projection::SUMMARY), &path)
    }
}

fn summarize_path(records: &RecordStreamReader, path: &Path) -> Result<Summary> {
    let stream = records.stream(path, None)?;
    let summary = itertools::process_results(stream, |items| summarize(items))?;

    log::debug!(
        "Reader: summarized {} records of {}",
        summary.total(),
        path.display()
    );
    Ok(summary)
}
