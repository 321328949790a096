use super::{NameCheck, ReaderDesc, ReaderState};
use crate::{
    error::Result,
    record::{LogRecord, Projection},
    summary::Summary,
};

/// General purpose reader: full records and per-file summaries.
///
/// Unlike [`super::RecordReader`] it trusts the caller's file name and only
/// checks that the file exists.
pub struct LogReader {
    state: ReaderState,
}

impl LogReader {
    pub fn new(desc: ReaderDesc) -> Self {
        Self {
            state: ReaderState::new(desc),
        }
    }

    pub fn from_disk(mut self, disk: &str) -> Result<Self> {
        self.state.select_disk(disk)?;
        Ok(self)
    }

    pub fn full_info_about(mut self, log_file: &str) -> Result<Self> {
        self.state.bind(log_file, NameCheck::AsIs)?;
        Ok(self)
    }

    pub fn log_file(&self) -> Option<&str> {
        self.state.bound_file()
    }

    pub fn get(&self) -> Result<Vec<LogRecord>> {
        self.state.read_all(Projection::DETAIL)
    }

    pub fn paginate(&self, page: usize, per_page: usize) -> Result<Vec<LogRecord>> {
        self.state.read_page(Projection::DETAIL, page, per_page)
    }

    /// summary of `log_file` on the selected disk; the bound file is untouched
    pub fn daily_summary(&self, log_file: &str) -> Result<Summary> {
        self.state.summarize_file(log_file)
    }
}
