use crate::{
    error::Result,
    page::PageWindow,
    parser::RecordParser,
    record::{LogRecord, Projection},
    source::{LineSource, Windowed},
};
use std::{io, path::Path, sync::Arc};

/// the lines of one opened file, whole or windowed
pub enum FileLines {
    Full(LineSource),
    Windowed(Windowed<LineSource>),
}

impl FileLines {
    pub fn open(path: &Path, window: Option<PageWindow>) -> io::Result<Self> {
        let source = LineSource::open(path)?;
        Ok(match window {
            Some(PageWindow { offset, limit }) => Self::Windowed(source.window(offset, limit)),
            None => Self::Full(source),
        })
    }
}

impl Iterator for FileLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Full(lines) => lines.next(),
            Self::Windowed(lines) => lines.next(),
        }
    }
}

/// lazy sequence of projected records, in line order
///
/// lines the parser does not recognize are skipped; the first I/O error ends
/// the stream
pub struct RecordStream<'p, I> {
    lines: I,
    parser: &'p dyn RecordParser,
    projection: Projection,
    lines_seen: usize,
    skipped: usize,
    failed: bool,
}

impl<'p, I> RecordStream<'p, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I, parser: &'p dyn RecordParser, projection: Projection) -> Self {
        Self {
            lines,
            parser,
            projection,
            lines_seen: 0,
            skipped: 0,
            failed: false,
        }
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// lines that did not match the record pattern
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<I> Iterator for RecordStream<'_, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            };
            self.lines_seen += 1;

            match self.parser.parse(&line) {
                Some(fields) => return Some(Ok(self.projection.project(fields))),
                None => {
                    log::trace!("RecordStream: skipping line {}", self.lines_seen);
                    self.skipped += 1;
                }
            }
        }
    }
}

/// The traversal shared by every reader flavor.
///
/// Opens the file, optionally narrows it to a window, then runs each line
/// through the parser and the projection. Every call reopens the file from
/// the start; nothing is cached between calls.
#[derive(Clone)]
pub struct RecordStreamReader {
    parser: Arc<dyn RecordParser>,
    projection: Projection,
}

impl RecordStreamReader {
    pub fn new(parser: Arc<dyn RecordParser>, projection: Projection) -> Self {
        Self { parser, projection }
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn stream(
        &self,
        path: &Path,
        window: Option<PageWindow>,
    ) -> Result<RecordStream<'_, FileLines>> {
        let lines = FileLines::open(path, window)?;
        Ok(RecordStream::new(lines, self.parser.as_ref(), self.projection))
    }

    pub fn read_all(&self, path: &Path) -> Result<Vec<LogRecord>> {
        self.collect(path, None)
    }

    pub fn read_window(&self, path: &Path, window: PageWindow) -> Result<Vec<LogRecord>> {
        self.collect(path, Some(window))
    }

    fn collect(&self, path: &Path, window: Option<PageWindow>) -> Result<Vec<LogRecord>> {
        let mut stream = self.stream(path, window)?;
        let records = stream.by_ref().collect::<Result<Vec<_>>>()?;

        log::debug!(
            "RecordStreamReader: {} records from {} lines of {} ({} skipped)",
            records.len(),
            stream.lines_seen(),
            path.display(),
            stream.skipped()
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ReaderError, test_support::PipeParser};

    fn reader(projection: Projection) -> RecordStreamReader {
        RecordStreamReader::new(Arc::new(PipeParser), projection)
    }

    fn write_log(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("app-2020-12-30.log");
        std::fs::write(&path, contents).unwrap();
        path
    }

    const MIXED: &str = "\
2020-12-30|10:00:00|production|info|one||
   #0 continuation of one
2020-12-30|10:00:01|production|error|two||

2020-12-30|10:00:02|production|info|three||
";

    #[test]
    fn test_read_all_skips_unmatched_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, MIXED);

        let records = reader(Projection::DETAIL).read_all(&path).unwrap();
        let messages: Vec<_> = records.iter().filter_map(|r| r.message()).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_window_counts_physical_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, MIXED);

        // lines 1..3 are the continuation, "two" and the blank line
        let records = reader(Projection::DETAIL)
            .read_window(&path, PageWindow::new(1, 3))
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message(), Some("two"));
    }

    #[test]
    fn test_summary_projection_drops_detail_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, MIXED);

        let records = reader(Projection::SUMMARY).read_all(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.message().is_none()));
        assert_eq!(records[1].level(), Some("error"));
    }

    #[test]
    fn test_stream_reports_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, MIXED);

        let reader = reader(Projection::DETAIL);
        let mut stream = reader.stream(&path, None).unwrap();
        let produced = stream.by_ref().count();
        assert_eq!(produced, 3);
        assert_eq!(stream.lines_seen(), 5);
        assert_eq!(stream.skipped(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = reader(Projection::DETAIL)
            .read_all(&dir.path().join("gone.log"))
            .unwrap_err();
        assert!(matches!(err, ReaderError::Io(_)));
    }

    #[test]
    fn test_io_error_ends_stream() {
        let lines = vec![
            Ok("2020-12-30|10:00:00|production|info|one||".to_string()),
            Err(io::Error::other("boom")),
            Ok("2020-12-30|10:00:02|production|info|two||".to_string()),
        ];
        let mut stream = RecordStream::new(lines.into_iter(), &PipeParser, Projection::DETAIL);
        assert!(matches!(stream.next(), Some(Ok(_))));
        assert!(matches!(stream.next(), Some(Err(ReaderError::Io(_)))));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_rereading_yields_identical_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, MIXED);

        let reader = reader(Projection::DETAIL);
        assert_eq!(reader.read_all(&path).unwrap(), reader.read_all(&path).unwrap());
    }
}
