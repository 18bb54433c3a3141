use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{
    NaiveDate,
    NaiveTime
};
use serde::{
    Deserialize,
    Serialize
};

use crate::chart::charterror::ChartError;
use crate::chart::counterrecord::Grouping;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FilterKind {
    /// Step interpolation, each value held until the next sample.
    None,
    Linear,
    /// Monotone cubic Hermite.
    Monotone,
    /// Forward-backward first-order low-pass.
    FirstOrder,
    /// Ideal low-pass.
    Sinc
}

impl FilterKind {
    pub fn from_name(name: &str) -> Option<FilterKind> {
        match name {
            "none" => Some(FilterKind::None),
            "linear" => Some(FilterKind::Linear),
            "monotone" => Some(FilterKind::Monotone),
            "firstorder" => Some(FilterKind::FirstOrder),
            "sinc" => Some(FilterKind::Sinc),
            _ => None
        }
    }

    /// Whether the kernel itself is shaped by the filter period.
    pub fn uses_period(&self) -> bool {
        matches!(self, FilterKind::FirstOrder | FilterKind::Sinc)
    }
}

fn default_true() -> bool {
    true
}

fn default_filter() -> String {
    "sinc".to_owned()
}

fn default_period() -> String {
    "1 hour".to_owned()
}

/// What to draw: the window, the reconstruction and which series.
///
/// `filter` is kept as text so an unknown name can fall back to drawing
/// nothing instead of failing the whole configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub group: Grouping,
    #[serde(default = "default_true")]
    pub cumulative: bool,
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default = "default_true")]
    pub entries: bool,
    #[serde(default = "default_true")]
    pub exits: bool,
}

impl ChartOptions {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ChartOptions {
        ChartOptions {
            start,
            end,
            group: Grouping::None,
            cumulative: true,
            filter: default_filter(),
            period: default_period(),
            entries: true,
            exits: true,
        }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<ChartOptions, ChartError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let options = serde_json::from_reader(reader)?;
        Ok(options)
    }

    pub fn filter_kind(&self) -> Option<FilterKind> {
        FilterKind::from_name(&self.filter)
    }

    /// Midnight UTC of `start`, in seconds.
    pub fn start_seconds(&self) -> f64 {
        self.start.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
    }

    /// Midnight UTC of `end`, in seconds.
    pub fn end_seconds(&self) -> f64 {
        self.end.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
    }
}
