use dailylog_framework::{Field, FieldMap, ReaderError, RecordParser, Result};
use lazy_static::lazy_static;
use regex::Regex;

// shared `[date time] env.level: ` prefix of every Laravel record line
macro_rules! laravel_header {
    () => {
        r"(?x)
        ^\[
          (?P<date>\d{4}-\d{2}-\d{2})
          [T\x20]
          (?P<time>\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:[+-]\d{2}:?\d{2}|Z)?)
        \]\s+
        (?P<env>[^\s.]+)\.(?P<level>[A-Za-z]+):\s?"
    };
}

/// Monolog's line format as written by Laravel's daily channel:
/// `[2020-12-30 13:45:12] production.ERROR: message {"context"} {"extra"}`
///
/// Tried in order, first match wins. The message is greedy, so brackets and
/// braces inside it stay in the message as long as the payloads that follow
/// still reach the end of the line.
pub const LARAVEL_RECORD_PATTERNS: [&str; 3] = [
    // message {context} {extra}
    concat!(
        laravel_header!(),
        r"
        (?P<message>.*)
        \s(?P<context>\{.*?\}|\[.*?\])
        \s(?P<extra>\{.*?\}|\[.*?\])
        \s*$"
    ),
    // message {context}
    concat!(
        laravel_header!(),
        r"
        (?P<message>.*)
        \s(?P<context>\{.*\}|\[.*\])
        \s*$"
    ),
    // bare message
    concat!(
        laravel_header!(),
        r"
        (?P<message>.*?)
        \s*$"
    ),
];

lazy_static! {
    static ref LARAVEL_RECORD_RES: Vec<Regex> = LARAVEL_RECORD_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect();
}

// groups every pattern of a parser has to declare on its own
const HEADER_FIELDS: [Field; 5] = [
    Field::Date,
    Field::Time,
    Field::Env,
    Field::Level,
    Field::Message,
];

fn declares(re: &Regex, field: Field) -> bool {
    re.capture_names().flatten().any(|group| group == field.name())
}

/// Regex-backed [`RecordParser`].
///
/// The patterns are the single source of truth for the record shape. They are
/// tried in order and the first one that matches a line wins. Each pattern
/// must declare the named groups `date`, `time`, `env`, `level` and
/// `message`; `context` and `extra` must be declared by at least one of them.
/// Groups that do not take part in a match are left out of the field map.
#[derive(Debug, Clone)]
pub struct PatternParser {
    res: Vec<Regex>,
}

impl PatternParser {
    /// single pattern declaring all seven named groups
    pub fn new(pattern: &str) -> Result<Self> {
        Self::from_patterns(&[pattern])
    }

    pub fn from_patterns(patterns: &[&str]) -> Result<Self> {
        let res = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ReaderError::InvalidPattern(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_regexes(res)
    }

    pub fn from_regex(re: Regex) -> Result<Self> {
        Self::from_regexes(vec![re])
    }

    pub fn from_regexes(res: Vec<Regex>) -> Result<Self> {
        if res.is_empty() {
            return Err(ReaderError::InvalidPattern("no record pattern given".to_string()));
        }

        let missing: Vec<&str> = Field::ALL
            .into_iter()
            .filter(|field| {
                if HEADER_FIELDS.contains(field) {
                    !res.iter().all(|re| declares(re, *field))
                } else {
                    !res.iter().any(|re| declares(re, *field))
                }
            })
            .map(Field::name)
            .collect();

        if !missing.is_empty() {
            return Err(ReaderError::InvalidPattern(format!(
                "missing named groups: {}",
                missing.join(", ")
            )));
        }

        for re in &res {
            log::debug!("PatternParser: using pattern {}", re.as_str());
        }
        Ok(Self { res })
    }

    /// parser for the default Laravel daily log format
    pub fn laravel() -> Self {
        Self {
            res: LARAVEL_RECORD_RES.clone(),
        }
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.res.iter().map(Regex::as_str)
    }
}

impl Default for PatternParser {
    fn default() -> Self {
        Self::laravel()
    }
}

impl RecordParser for PatternParser {
    fn parse(&self, line: &str) -> Option<FieldMap> {
        let caps = self.res.iter().find_map(|re| re.captures(line))?;

        Some(
            Field::ALL
                .into_iter()
                .filter_map(|field| {
                    caps.name(field.name())
                        .map(|m| (field, m.as_str().to_string()))
                })
                .collect(),
        )
    }
}
