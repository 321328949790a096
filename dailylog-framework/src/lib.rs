//! # dailylog-framework
//!
//! Streaming record extraction for daily application log files, such as the
//! `laravel-2020-12-30.log` files a Laravel application writes through
//! Monolog.
//!
//! ## Overview
//!
//! A log file is read one physical line at a time and never loaded whole.
//! Every line goes through a [`RecordParser`]; lines it recognizes become
//! [`LogRecord`]s, everything else (blank lines, stack-trace continuations)
//! is skipped. Three views are built on that single traversal:
//!
//! - all records of a file
//! - one page of a file, for UI pagination
//! - a [`Summary`]: record count per level plus the date of the log
//!
//! ## Pipeline
//!
//! ```text
//! file name ──Storage──> path ──LineSource──> [window] ──RecordParser──> Projection ──> records
//!                                                                                     └──> summarize
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dailylog_framework::{
//!     Field, FieldMap, ReaderDesc, RecordParser, RecordReader, Storage, SummaryReader,
//! };
//! use std::{path::PathBuf, sync::Arc};
//!
//! // 1. a storage that knows where log files live
//! struct LogDir(PathBuf);
//!
//! impl Storage for LogDir {
//!     fn exists(&self, name: &str) -> bool {
//!         self.path(name).is_file()
//!     }
//!
//!     fn path(&self, name: &str) -> PathBuf {
//!         self.0.join(name)
//!     }
//! }
//!
//! // 2. a parser for your line format (dailylog-parser ships a regex one)
//! struct LevelFirst;
//!
//! impl RecordParser for LevelFirst {
//!     fn parse(&self, line: &str) -> Option<FieldMap> {
//!         let (level, message) = line.split_once(' ')?;
//!         let mut fields = FieldMap::new();
//!         fields.insert(Field::Level, level.to_string());
//!         fields.insert(Field::Message, message.to_string());
//!         Some(fields)
//!     }
//! }
//!
//! // 3. read
//! fn main() -> dailylog_framework::Result<()> {
//!     let desc = ReaderDesc::new(Arc::new(LevelFirst))
//!         .with_disk("logs", Arc::new(LogDir(PathBuf::from("storage/logs"))));
//!
//!     let page = RecordReader::new(desc.clone())
//!         .from_disk("logs")?
//!         .info_about("laravel-2020-12-30.log")?
//!         .paginate(1, 50)?;
//!
//!     let summary = SummaryReader::new(desc)
//!         .from_disk("logs")?
//!         .summary("laravel-2020-12-30.log")?;
//!
//!     println!("{} records on page 1, {} in total", page.len(), summary.total());
//!     Ok(())
//! }
//! ```
//!
//! ## Multi-line entries
//!
//! Lines are matched one at a time. Continuation lines of a multi-line entry
//! do not match and are dropped, so `message`, `context` and `extra` hold the
//! first physical line of such an entry only.

pub mod error;
pub mod file_name;
pub mod page;
pub mod parser;
pub mod reader;
pub mod record;
pub mod source;
pub mod storage;
pub mod stream;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;

// re-export commonly used types
pub use error::{ReaderError, Result};
pub use page::PageWindow;
pub use parser::RecordParser;
pub use reader::{LogReader, ReaderDesc, RecordReader, SummaryReader};
pub use record::{Field, FieldMap, LogRecord, Projection};
pub use source::{LineSource, Windowed, window};
pub use storage::{Disks, Storage};
pub use stream::{RecordStream, RecordStreamReader};
pub use summary::{Summary, summarize};
