use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    NaiveTime
};

use crate::chart::charterror::ChartError;
use crate::chart::counterrecord::IntervalRecord;

/// Supplier of per-interval counts for a station.
///
/// Implementations return every record of the calendar months spanned by
/// `start..=end`, in chronological order, so that running totals always
/// start from the same point for a given month.
pub trait CounterSource {
    fn fetch(&self, station: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<IntervalRecord>, ChartError>;
}

fn month_start_seconds(year: i32, month: u32) -> Option<f64> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64)
}

fn next_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    }
}

/// Records held in memory, keyed by station id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    stations: HashMap<String, Vec<IntervalRecord>>,
}

impl MemorySource {
    pub fn new() -> MemorySource {
        MemorySource::default()
    }

    pub fn insert(&mut self, station: &str, mut records: Vec<IntervalRecord>) {
        records.sort_by(|a, b| a.ending.total_cmp(&b.ending));
        self.stations.insert(station.to_owned(), records);
    }
}

impl CounterSource for MemorySource {
    fn fetch(&self, station: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<IntervalRecord>, ChartError> {
        let records = self
            .stations
            .get(station)
            .ok_or_else(|| ChartError::StationNotFound(station.to_owned()))?;
        let (end_year, end_month) = next_month(end);
        let lower = month_start_seconds(start.year(), start.month()).unwrap_or(f64::NEG_INFINITY);
        let upper = month_start_seconds(end_year, end_month).unwrap_or(f64::INFINITY);
        Ok(records
            .iter()
            .filter(|r| r.ending >= lower && r.ending < upper)
            .copied()
            .collect())
    }
}
