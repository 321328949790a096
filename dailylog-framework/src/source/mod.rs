//! Forward-only line sources over log files.
//!
//! A [`LineSource`] yields one physical line per item, with the terminator
//! stripped, pulling from a buffered reader so a file is never held in memory
//! as a whole. Wrap one with [`window`] to restrict it to a contiguous range of
//! lines for pagination.
//!
//! ```text
//! File ──BufReader──> LineSource ──window(offset, limit)──> Windowed
//! ```
//!
//! Sources are single-pass: open a new one for every read. The underlying
//! file is closed when the source is dropped, including when a read stops
//! early on an error.

mod window;

pub use window::{Windowed, window};

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// lazy sequence of raw text lines
pub struct LineSource<R = BufReader<File>> {
    reader: R,
    buf: Vec<u8>,
    lines_read: usize,
    finished: bool,
}

impl LineSource<BufReader<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        log::debug!("LineSource: opened {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            lines_read: 0,
            finished: false,
        }
    }

    /// number of physical lines handed out so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// restrict this source to `limit` lines after skipping `offset`
    pub fn window(self, offset: usize, limit: usize) -> Windowed<Self> {
        window(self, offset, limit)
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                strip_line_ending(&mut self.buf);
                self.lines_read += 1;
                // a stray invalid byte should not abort the whole read
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

// the last line of a file may end in a bare `\r`
fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn lines(input: &[u8]) -> Vec<String> {
        LineSource::new(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_strips_terminators() {
        assert_eq!(lines(b"one\ntwo\r\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_strips_carriage_return_on_unterminated_last_line() {
        assert_eq!(lines(b"a\r\nb\r"), vec!["a", "b"]);
    }

    #[test]
    fn test_keeps_blank_lines() {
        assert_eq!(lines(b"a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let decoded = lines(b"bad \xff byte\n");
        assert_eq!(decoded, vec!["bad \u{fffd} byte"]);
    }

    #[test]
    fn test_counts_lines_read() {
        let mut source = LineSource::new(Cursor::new(b"a\nb\nc\n".to_vec()));
        source.next();
        source.next();
        assert_eq!(source.lines_read(), 2);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn test_read_error_is_reported_once() {
        let mut source = LineSource::new(BufReader::new(FailingReader));
        assert!(matches!(source.next(), Some(Err(_))));
        assert!(source.next().is_none());
    }

    #[test]
    fn test_open_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        let read: Vec<String> = LineSource::open(&path)
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(read, vec!["first", "second"]);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = LineSource::open(&dir.path().join("nope.log")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
