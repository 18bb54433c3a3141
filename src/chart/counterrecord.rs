use chrono::{
    DateTime,
    Datelike,
    Utc
};
use serde::{
    Deserialize,
    Serialize
};

/// Counts reported for one interval, ending at `ending` (seconds since the
/// Unix epoch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    pub ending: f64,
    pub entries: f64,
    pub exits: f64,
}

impl IntervalRecord {
    pub fn new(ending: f64, entries: f64, exits: f64) -> IntervalRecord {
        IntervalRecord { ending, entries, exits }
    }
}

/// Running totals up to and including the interval ending at `ending`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub ending: f64,
    pub entries: f64,
    pub exits: f64,
}

impl CounterRecord {
    pub fn new(ending: f64, entries: f64, exits: f64) -> CounterRecord {
        CounterRecord { ending, entries, exits }
    }
}

/// Calendar bucket (UTC) at which cumulative records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Keep every record.
    #[default]
    #[serde(rename = "", alias = "none")]
    None,
    Day,
    Week,
    Month,
    Year
}

impl Grouping {
    fn bucket(&self, ending: f64) -> Option<(i32, u32)> {
        let date = DateTime::<Utc>::from_timestamp(ending.floor() as i64, 0)?.date_naive();
        match self {
            Grouping::None => None,
            Grouping::Day => Some((date.year(), date.ordinal())),
            Grouping::Week => {
                let week = date.iso_week();
                Some((week.year(), week.week()))
            }
            Grouping::Month => Some((date.year(), date.month())),
            Grouping::Year => Some((date.year(), 0))
        }
    }
}

/// Turns per-interval counts into running totals.
///
/// With a calendar grouping only the first record of each new bucket is kept,
/// so each kept total closes the previous bucket. Records must be in
/// chronological order.
pub fn accumulate(records: &[IntervalRecord], grouping: Grouping) -> Vec<CounterRecord> {
    let mut entries = 0.0;
    let mut exits = 0.0;
    let mut prev_bucket: Option<(i32, u32)> = None;
    let mut ret = Vec::with_capacity(records.len());

    for record in records {
        entries += record.entries;
        exits += record.exits;
        let total = CounterRecord::new(record.ending, entries, exits);
        if grouping == Grouping::None {
            ret.push(total);
            continue;
        }
        let bucket = grouping.bucket(record.ending);
        if prev_bucket.is_some() && bucket != prev_bucket {
            ret.push(total);
        }
        prev_bucket = bucket;
    }
    ret
}
