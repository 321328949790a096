use super::{NameCheck, ReaderDesc, ReaderState};
use crate::{error::Result, summary::Summary};

/// Per-file summary: record count by level and the date of the log.
///
/// The file is folded record by record, so summarizing never holds the
/// whole log in memory.
pub struct SummaryReader {
    state: ReaderState,
}

impl SummaryReader {
    pub fn new(desc: ReaderDesc) -> Self {
        Self {
            state: ReaderState::new(desc),
        }
    }

    pub fn from_disk(mut self, disk: &str) -> Result<Self> {
        self.state.select_disk(disk)?;
        Ok(self)
    }

    pub fn info_about(mut self, log_file: &str) -> Result<Self> {
        self.state.bind(log_file, NameCheck::AsIs)?;
        Ok(self)
    }

    pub fn log_file(&self) -> Option<&str> {
        self.state.bound_file()
    }

    pub fn get(&self) -> Result<Summary> {
        self.state.summarize_bound()
    }

    /// bind `log_file` and summarize it in one go
    pub fn summary(mut self, log_file: &str) -> Result<Summary> {
        self.state.bind(log_file, NameCheck::AsIs)?;
        self.get()
    }
}
