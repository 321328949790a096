use super::{NameCheck, ReaderDesc, ReaderState};
use crate::{
    error::Result,
    record::{LogRecord, Projection},
};

/// Full records of one daily log file.
///
/// Every record carries date, time, env, level, message, context and extra.
/// Only files following the daily naming convention can be bound.
///
/// ```rust,no_run
/// # use dailylog_framework::{RecordReader, ReaderDesc};
/// # fn run(desc: ReaderDesc) -> dailylog_framework::Result<()> {
/// let reader = RecordReader::new(desc)
///     .from_disk("logs")?
///     .info_about("laravel-2020-12-30.log")?;
///
/// let first_page = reader.paginate(1, 25)?;
/// let everything = reader.get()?;
/// # Ok(())
/// # }
/// ```
pub struct RecordReader {
    state: ReaderState,
}

impl RecordReader {
    pub fn new(desc: ReaderDesc) -> Self {
        Self {
            state: ReaderState::new(desc),
        }
    }

    pub fn from_disk(mut self, disk: &str) -> Result<Self> {
        self.state.select_disk(disk)?;
        Ok(self)
    }

    /// bind `log_file`, which must be a daily log present on the disk
    pub fn info_about(mut self, log_file: &str) -> Result<Self> {
        self.state.bind(log_file, NameCheck::DailyLog)?;
        Ok(self)
    }

    pub fn log_file(&self) -> Option<&str> {
        self.state.bound_file()
    }

    pub fn get(&self) -> Result<Vec<LogRecord>> {
        self.state.read_all(Projection::DETAIL)
    }

    /// records found on lines `(page - 1) * per_page .. page * per_page`
    ///
    /// a page past the end of the file is empty rather than an error
    pub fn paginate(&self, page: usize, per_page: usize) -> Result<Vec<LogRecord>> {
        self.state.read_page(Projection::DETAIL, page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ReaderError, test_support::Fixture};

    const LOG: &str = "\
2020-12-30|08:00:00|production|info|booted|{}|[]
2020-12-30|08:00:01|production|error|failed|{\"id\":1}|[]
2020-12-30|08:00:02|production|info|retried|{}|[]
";

    fn bound(fixture: &Fixture) -> RecordReader {
        fixture.write("laravel-2020-12-30.log", LOG);
        RecordReader::new(fixture.desc())
            .from_disk("logs")
            .unwrap()
            .info_about("laravel-2020-12-30.log")
            .unwrap()
    }

    #[test]
    fn test_get_returns_full_records() {
        let fixture = Fixture::new();
        let records = bound(&fixture).get().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].level(), Some("error"));
        assert_eq!(records[1].context(), Some("{\"id\":1}"));
        assert_eq!(records[1].fields().count(), 7);
    }

    #[test]
    fn test_paginate() {
        let fixture = Fixture::new();
        let reader = bound(&fixture);

        let page: Vec<_> = reader.paginate(2, 2).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].message(), Some("retried"));
        assert!(reader.paginate(3, 2).unwrap().is_empty());
    }

    #[test]
    fn test_paginate_rejects_bad_arguments() {
        let fixture = Fixture::new();
        let reader = bound(&fixture);
        assert!(matches!(reader.paginate(0, 5), Err(ReaderError::InvalidArgument(_))));
        assert!(matches!(reader.paginate(3, 0), Err(ReaderError::InvalidArgument(_))));
    }

    #[test]
    fn test_paginate_validates_before_binding_checks() {
        let fixture = Fixture::new();
        let reader = RecordReader::new(fixture.desc());
        assert!(matches!(reader.paginate(0, 5), Err(ReaderError::InvalidArgument(_))));
    }

    #[test]
    fn test_info_about_rejects_non_daily_names() {
        let fixture = Fixture::new();
        fixture.write("notes.txt", LOG);
        let result = RecordReader::new(fixture.desc())
            .from_disk("logs")
            .unwrap()
            .info_about("notes.txt");
        assert!(matches!(result, Err(ReaderError::InvalidLogFilename(_))));
    }

    #[test]
    fn test_info_about_missing_file() {
        let fixture = Fixture::new();
        let result = RecordReader::new(fixture.desc())
            .from_disk("logs")
            .unwrap()
            .info_about("laravel-2020-12-30.log");
        assert!(matches!(result, Err(ReaderError::FileNotFound(_))));
    }

    #[test]
    fn test_info_about_without_disk() {
        let fixture = Fixture::new();
        let result = RecordReader::new(fixture.desc()).info_about("laravel-2020-12-30.log");
        assert!(matches!(result, Err(ReaderError::StorageNotConfigured)));
    }

    #[test]
    fn test_get_before_binding() {
        let fixture = Fixture::new();
        let reader = RecordReader::new(fixture.desc()).from_disk("logs").unwrap();
        assert!(matches!(reader.get(), Err(ReaderError::FileNotBound)));
        assert_eq!(reader.log_file(), None);
    }
}
