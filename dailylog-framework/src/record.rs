use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// the named fields a record pattern captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Time,
    Env,
    Level,
    Message,
    Context,
    Extra,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Date,
        Field::Time,
        Field::Env,
        Field::Level,
        Field::Message,
        Field::Context,
        Field::Extra,
    ];

    /// capture group name used for this field in record patterns
    pub fn name(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::Env => "env",
            Field::Level => "level",
            Field::Message => "message",
            Field::Context => "context",
            Field::Extra => "extra",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// raw captures of one matched line, keyed by field
pub type FieldMap = BTreeMap<Field, String>;

/// one parsed log entry
///
/// a record only carries the fields its projection kept; the rest stay `None`
/// and are left out when serialized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra: Option<String>,
}

impl LogRecord {
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Env => &self.env,
            Field::Level => &self.level,
            Field::Message => &self.message,
            Field::Context => &self.context,
            Field::Extra => &self.extra,
        };
        slot.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.get(Field::Date)
    }

    pub fn time(&self) -> Option<&str> {
        self.get(Field::Time)
    }

    pub fn env(&self) -> Option<&str> {
        self.get(Field::Env)
    }

    pub fn level(&self) -> Option<&str> {
        self.get(Field::Level)
    }

    pub fn message(&self) -> Option<&str> {
        self.get(Field::Message)
    }

    pub fn context(&self) -> Option<&str> {
        self.get(Field::Context)
    }

    pub fn extra(&self) -> Option<&str> {
        self.get(Field::Extra)
    }

    /// fields present on this record, in canonical order
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Env => &mut self.env,
            Field::Level => &mut self.level,
            Field::Message => &mut self.message,
            Field::Context => &mut self.context,
            Field::Extra => &mut self.extra,
        }
    }
}

/// the set of fields a view keeps from each parsed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection(&'static [Field]);

impl Projection {
    /// every field, for record listings
    pub const DETAIL: Projection = Projection(&Field::ALL);

    /// just enough to count levels and date the log
    pub const SUMMARY: Projection = Projection(&[Field::Date, Field::Level]);

    pub fn fields(&self) -> &'static [Field] {
        self.0
    }

    pub fn keeps(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    /// keep only the projected fields; missing keys stay absent
    pub fn project(&self, fields: FieldMap) -> LogRecord {
        fields
            .into_iter()
            .filter(|(field, _)| self.keeps(*field))
            .fold(LogRecord::default(), |record, (field, value)| {
                record.with_field(field, value)
            })
    }
}
