use thiserror::Error;

use crate::math::curve::curve::CurveError;
use crate::math::reconstruction::interpolatefilter::ReconstructionError;
use crate::time::duration::ParseDurationError;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("filter period: {0}")]
    PeriodParseError(#[from] ParseDurationError),
    #[error(transparent)]
    ReconstructionError(#[from] ReconstructionError),
    #[error(transparent)]
    CurveError(#[from] CurveError),
    #[error("filter period must be positive and finite, got {0} s")]
    InvalidPeriod(f64),
    #[error("station '{0}' not found")]
    StationNotFound(String),
    #[error("chart window is empty: start {start} is not before end {end}")]
    EmptyWindow { start: f64, end: f64 },
}
