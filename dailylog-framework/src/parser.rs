use crate::record::FieldMap;

/// Recognizes one physical line as the start of a log record.
///
/// Implementations apply a single extraction pattern and return the named
/// captures for a matching line. A line that does not look like a record,
/// such as a blank line or a stack-trace continuation, yields `None` and is
/// skipped by the stream without raising an error.
///
/// # Examples
///
/// ```rust
/// use dailylog_framework::{Field, FieldMap, RecordParser};
///
/// struct PipeParser;
///
/// impl RecordParser for PipeParser {
///     fn parse(&self, line: &str) -> Option<FieldMap> {
///         let (level, message) = line.split_once('|')?;
///         let mut fields = FieldMap::new();
///         fields.insert(Field::Level, level.to_string());
///         fields.insert(Field::Message, message.to_string());
///         Some(fields)
///     }
/// }
///
/// assert!(PipeParser.parse("info|ready").is_some());
/// assert!(PipeParser.parse("   at Foo->bar()").is_none());
/// ```
pub trait RecordParser: Send + Sync {
    fn parse(&self, line: &str) -> Option<FieldMap>;
}
