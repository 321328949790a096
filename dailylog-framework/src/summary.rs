use crate::record::LogRecord;
use itertools::Itertools;
use serde::Serialize;
use std::{borrow::Borrow, collections::BTreeMap};

/// record counts per level plus the date of the log
///
/// serializes as one flat object, e.g. `{"date": "2020-12-30", "error": 2, "info": 3}`;
/// `date` is `null` when the log held no records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub date: Option<String>,
    #[serde(flatten)]
    pub levels: BTreeMap<String, usize>,
}

impl Summary {
    pub fn count(&self, level: &str) -> usize {
        self.levels.get(level).copied().unwrap_or(0)
    }

    /// number of records that carried a level
    pub fn total(&self) -> usize {
        self.levels.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Reduce a record sequence to a [`Summary`].
///
/// Levels are grouped by exact token, without case folding. The date comes
/// from the first record; an empty sequence gives a summary with no date
/// rather than an error.
pub fn summarize<R>(records: impl IntoIterator<Item = R>) -> Summary
where
    R: Borrow<LogRecord>,
{
    let mut date = None;
    let mut first = true;

    let levels = records
        .into_iter()
        .filter_map(|record| {
            let record = record.borrow();
            if first {
                first = false;
                date = record.date().map(str::to_owned);
            }
            record.level().map(str::to_owned)
        })
        .counts()
        .into_iter()
        .collect();

    Summary { date, levels }
}
