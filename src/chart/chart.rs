use log::{
    debug,
    warn
};
use serde::Serialize;

use crate::chart::charterror::ChartError;
use crate::chart::chartoptions::{
    ChartOptions,
    FilterKind
};
use crate::chart::counterrecord::{
    accumulate,
    CounterRecord
};
use crate::chart::countersource::CounterSource;
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::{
    PiecewisePolynomial,
    PolynomialType
};
use crate::math::differentiator::derivative::Derivative;
use crate::math::kernel::brickwall::Brickwall;
use crate::math::kernel::firstorder::FirstOrder;
use crate::math::kernel::forwardbackward::ForwardBackward;
use crate::math::reconstruction::interpolatefilter::InterpolatedFilter;
use crate::time::duration::duration;

/// Points per series across the visible window.
pub const GRID_POINTS: usize = 250;

/// Rates are reported per hour.
const RATE_SCALE: f64 = 3600.0;
const RATE_MIN_STEP: f64 = 60.0;

/// Records this many filter periods outside the window still shape it.
const MARGIN_PERIODS: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Reconstruction
// ─────────────────────────────────────────────────────────────────────────────

/// Continuous signal rebuilt from cumulative samples by one of the
/// supported filters.
#[derive(Debug, Clone)]
pub enum Reconstruction {
    Piecewise(PiecewisePolynomial),
    FirstOrder(InterpolatedFilter<ForwardBackward<FirstOrder>>),
    Sinc(InterpolatedFilter<Brickwall>),
}

fn piecewise(polynomial_type: PolynomialType, timestamps: &[f64], values: &[f64]) -> Result<Reconstruction, ChartError> {
    let points = Point2D::zip(timestamps, values);
    Ok(Reconstruction::Piecewise(PiecewisePolynomial::new(polynomial_type, points)?))
}

impl Reconstruction {
    pub fn new(
        kind: FilterKind,
        period: f64,
        timestamps: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Reconstruction, ChartError> {
        match kind {
            FilterKind::None => piecewise(PolynomialType::ForwardFlat, &timestamps, &values),
            FilterKind::Linear => piecewise(PolynomialType::Linear, &timestamps, &values),
            FilterKind::Monotone => piecewise(PolynomialType::PiecewiseCubicHermite, &timestamps, &values),
            FilterKind::FirstOrder => {
                let kernel = ForwardBackward::new(FirstOrder::normalized(period));
                Ok(Reconstruction::FirstOrder(InterpolatedFilter::new(timestamps, values, kernel)?))
            }
            FilterKind::Sinc => {
                let kernel = Brickwall::new(period);
                Ok(Reconstruction::Sinc(InterpolatedFilter::new(timestamps, values, kernel)?))
            }
        }
    }
}

impl Curve for Reconstruction {
    fn value(&self, x: f64) -> f64 {
        match self {
            Reconstruction::Piecewise(curve) => curve.value(x),
            Reconstruction::FirstOrder(curve) => curve.value(x),
            Reconstruction::Sinc(curve) => curve.value(x),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chart
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Everything a plotting surface needs; x values are seconds since the epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub y_axis_label: String,
    pub series: Vec<Series>,
}

/// Records whose influence reaches `[start, end]`: everything up to `margin`
/// outside it, plus the last record before that.
fn visible_records(records: &[CounterRecord], start: f64, end: f64, margin: f64) -> &[CounterRecord] {
    let first = records
        .iter()
        .position(|r| r.ending > start - margin)
        .map_or(0, |i| i.saturating_sub(1));
    let last = records
        .iter()
        .position(|r| r.ending > end + margin)
        .unwrap_or(records.len());
    &records[first..last.max(first)]
}

/// `GRID_POINTS` evenly spaced instants from `start`, stopping one step short
/// of `end`.
fn grid(start: f64, end: f64) -> Vec<f64> {
    let step = (end - start) / GRID_POINTS as f64;
    (0..GRID_POINTS).map(|i| start + i as f64 * step).collect()
}

/// Margin-only use of the period: anything unusable shrinks the margin to 0.
fn margin_period(options: &ChartOptions) -> f64 {
    match duration(&options.period) {
        Ok(period) if period.is_finite() && period > 0.0 => period,
        Ok(period) => {
            warn!("period '{}' is {} s, keeping no margin around the window", options.period, period);
            0.0
        }
        Err(e) => {
            warn!("period '{}' not understood ({}), keeping no margin around the window", options.period, e);
            0.0
        }
    }
}

fn sample_series<C: Curve>(label: &str, curve: &C, grid: &[f64]) -> Series {
    Series {
        label: label.to_owned(),
        points: grid.iter().map(|&t| (t, curve.value(t))).collect(),
    }
}

fn series_curve(reconstruction: Reconstruction, cumulative: bool) -> Box<dyn Curve> {
    if cumulative {
        Box::new(reconstruction)
    } else {
        Box::new(Derivative::new(reconstruction, RATE_SCALE).with_min_step(RATE_MIN_STEP))
    }
}

/// Samples the configured reconstruction of `records` on a uniform grid over
/// the options' window.
///
/// An unknown filter name or fewer than two records near the window give a
/// chart without series. Filters that smooth over `period` need it positive
/// and finite; the others only use it to widen the window.
pub fn build_chart(records: &[CounterRecord], options: &ChartOptions) -> Result<Chart, ChartError> {
    let start = options.start_seconds();
    let end = options.end_seconds();
    if start >= end {
        return Err(ChartError::EmptyWindow { start, end });
    }

    let y_axis_label = if options.cumulative { "Riders" } else { "Riders per hour" }.to_owned();
    let mut chart = Chart { y_axis_label, series: Vec::new() };

    let Some(kind) = options.filter_kind() else {
        warn!("unknown filter '{}', nothing to draw", options.filter);
        return Ok(chart);
    };

    let period = if kind.uses_period() {
        let period = duration(&options.period)?;
        if !(period.is_finite() && period > 0.0) {
            return Err(ChartError::InvalidPeriod(period));
        }
        period
    } else {
        margin_period(options)
    };

    let visible = visible_records(records, start, end, MARGIN_PERIODS * period);
    debug!(
        "{} of {} records visible for [{}, {}] with period {} s",
        visible.len(), records.len(), start, end, period
    );
    if visible.len() < 2 {
        warn!("{} records in the window, at least 2 are needed", visible.len());
        return Ok(chart);
    }

    let timestamps: Vec<f64> = visible.iter().map(|r| r.ending).collect();
    let instants = grid(start, end);

    let mut wanted: Vec<(&str, Vec<f64>)> = Vec::new();
    if options.entries {
        wanted.push(("entries", visible.iter().map(|r| r.entries).collect()));
    }
    if options.exits {
        wanted.push(("exits", visible.iter().map(|r| r.exits).collect()));
    }

    for (label, values) in wanted {
        let reconstruction = Reconstruction::new(kind, period, timestamps.clone(), values)?;
        let curve = series_curve(reconstruction, options.cumulative);
        chart.series.push(sample_series(label, &curve, &instants));
    }
    Ok(chart)
}

/// Fetches, accumulates and draws one station.
pub fn draw_station<S>(source: &S, station: &str, options: &ChartOptions) -> Result<Chart, ChartError> where
    S: CounterSource + ?Sized {
    let intervals = source.fetch(station, options.start, options.end)?;
    let records = accumulate(&intervals, options.group);
    build_chart(&records, options)
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::{
        assert_abs_diff_eq,
        assert_relative_eq
    };
    use chrono::NaiveDate;

    use crate::chart::counterrecord::IntervalRecord;
    use crate::chart::countersource::MemorySource;

    const HOUR: f64 = 3600.0;

    fn epoch_day_options(filter: &str) -> ChartOptions {
        let mut options = ChartOptions::new(
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(1970, 1, 2).unwrap(),
        );
        options.filter = filter.to_owned();
        options
    }

    /// 60 riders per hour all day, reported every 15 minutes.
    fn steady_records() -> Vec<CounterRecord> {
        (0..=96)
            .map(|i| {
                let t = i as f64 * 900.0;
                CounterRecord::new(t, t / 60.0, t / 120.0)
            })
            .collect()
    }

    #[test]
    fn grid_and_labels() {
        let chart = build_chart(&steady_records(), &epoch_day_options("linear")).unwrap();
        assert_eq!(chart.y_axis_label, "Riders");
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label, "entries");
        assert_eq!(chart.series[1].label, "exits");
        assert_eq!(chart.series[0].points.len(), GRID_POINTS);
        assert_eq!(chart.series[0].points[0].0, 0.0);
        assert_abs_diff_eq!(chart.series[0].points[1].0, 86400.0 / 250.0, epsilon = 1e-9);
    }

    #[test]
    fn every_filter_tracks_a_steady_count() {
        for filter in ["none", "linear", "monotone", "firstorder", "sinc"] {
            let chart = build_chart(&steady_records(), &epoch_day_options(filter)).unwrap();
            let (t, y) = chart.series[0].points[125];
            assert_abs_diff_eq!(y, t / 60.0, epsilon = 16.0);
        }
    }

    #[test]
    fn rate_mode_reports_per_hour() {
        // the sinc tails still feel the end of the ramp half a day away
        for (filter, tolerance) in [("linear", 0.1), ("firstorder", 0.1), ("sinc", 0.05)] {
            let mut options = epoch_day_options(filter);
            options.cumulative = false;
            let chart = build_chart(&steady_records(), &options).unwrap();
            assert_eq!(chart.y_axis_label, "Riders per hour");
            let (_, entries_rate) = chart.series[0].points[125];
            let (_, exits_rate) = chart.series[1].points[125];
            assert_relative_eq!(entries_rate, 60.0, max_relative = tolerance);
            assert_relative_eq!(exits_rate, 30.0, max_relative = tolerance);
        }
    }

    #[test]
    fn unity_end_to_end() {
        let records = vec![
            CounterRecord::new(0.0, 0.0, 0.0),
            CounterRecord::new(HOUR, 10.0, 0.0),
            CounterRecord::new(2.0 * HOUR, 25.0, 0.0),
            CounterRecord::new(3.0 * HOUR, 25.0, 0.0),
        ];
        let r = Reconstruction::new(
            FilterKind::None,
            HOUR,
            records.iter().map(|r| r.ending).collect(),
            records.iter().map(|r| r.entries).collect(),
        ).unwrap();
        assert_eq!(r.value(5000.0), 10.0);
    }

    #[test]
    fn unknown_filter_draws_nothing() {
        let chart = build_chart(&steady_records(), &epoch_day_options("gaussian")).unwrap();
        assert!(chart.series.is_empty());
    }

    #[test]
    fn too_few_records_draw_nothing() {
        let records = vec![CounterRecord::new(0.0, 1.0, 1.0)];
        let chart = build_chart(&records, &epoch_day_options("sinc")).unwrap();
        assert!(chart.series.is_empty());
    }

    #[test]
    fn window_keeps_margin_and_one_earlier_record() {
        let records: Vec<CounterRecord> = (0..100)
            .map(|i| CounterRecord::new(i as f64 * HOUR, i as f64, 0.0))
            .collect();
        let visible = visible_records(&records, 50.0 * HOUR, 60.0 * HOUR, 2.0 * HOUR);
        assert_eq!(visible.first().unwrap().ending, 48.0 * HOUR);
        assert_eq!(visible.last().unwrap().ending, 62.0 * HOUR);

        let all = visible_records(&records, -1e6, 1e6, 0.0);
        assert_eq!(all.len(), 100);
    }

    #[test]
    fn selected_series_only() {
        let mut options = epoch_day_options("sinc");
        options.exits = false;
        let chart = build_chart(&steady_records(), &options).unwrap();
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].label, "entries");
    }

    #[test]
    fn bad_period_is_an_error() {
        let mut options = epoch_day_options("sinc");
        options.period = "soon".to_owned();
        assert!(matches!(
            build_chart(&steady_records(), &options),
            Err(ChartError::PeriodParseError(_))
        ));
    }

    #[test]
    fn real_date_windows_have_exactly_the_grid_size() {
        let windows = [((2017, 12, 11), (2017, 12, 12)), ((2018, 1, 1), (2018, 2, 1))];
        for ((y0, m0, d0), (y1, m1, d1)) in windows {
            let options = ChartOptions::new(
                NaiveDate::from_ymd_opt(y0, m0, d0).unwrap(),
                NaiveDate::from_ymd_opt(y1, m1, d1).unwrap(),
            );
            let (start, end) = (options.start_seconds(), options.end_seconds());
            let instants = grid(start, end);
            assert_eq!(instants.len(), GRID_POINTS);
            assert_eq!(instants[0], start);
            assert_abs_diff_eq!(instants[GRID_POINTS - 1], end - (end - start) / 250.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn chart_on_a_real_day() {
        let mut options = epoch_day_options("linear");
        options.start = NaiveDate::from_ymd_opt(2017, 12, 11).unwrap();
        options.end = NaiveDate::from_ymd_opt(2017, 12, 12).unwrap();
        let offset = options.start_seconds();
        let records: Vec<CounterRecord> = steady_records()
            .into_iter()
            .map(|r| CounterRecord::new(r.ending + offset, r.entries, r.exits))
            .collect();

        let chart = build_chart(&records, &options).unwrap();
        assert_eq!(chart.series[0].points.len(), GRID_POINTS);
        let (t, y) = chart.series[0].points[125];
        assert_abs_diff_eq!(y, (t - offset) / 60.0, epsilon = 1e-6);
    }

    #[test]
    fn smoothing_filters_reject_unusable_periods() {
        for filter in ["firstorder", "sinc"] {
            for period in ["0 hours", "-1 hour", "NaN hours", "inf hours"] {
                let mut options = epoch_day_options(filter);
                options.period = period.to_owned();
                assert!(
                    matches!(build_chart(&steady_records(), &options), Err(ChartError::InvalidPeriod(_))),
                    "{} accepted period '{}'", filter, period
                );
            }
        }
    }

    #[test]
    fn interpolating_filters_ignore_an_unusable_period() {
        for period in ["soon", "1hour", "0 hours", "-1 hour", "NaN hours"] {
            let mut options = epoch_day_options("linear");
            options.period = period.to_owned();
            let chart = build_chart(&steady_records(), &options).unwrap();
            assert_eq!(chart.series.len(), 2);
            assert_eq!(chart.series[0].points.len(), GRID_POINTS);
        }
    }

    #[test]
    fn empty_window_is_an_error() {
        let mut options = epoch_day_options("sinc");
        options.end = options.start;
        assert!(matches!(
            build_chart(&steady_records(), &options),
            Err(ChartError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn draw_from_source() {
        let mut source = MemorySource::new();
        source.insert("R01", (1..=96).map(|i| IntervalRecord::new(i as f64 * 900.0, 15.0, 5.0)).collect());
        let mut options = epoch_day_options("monotone");
        options.cumulative = false;
        let chart = draw_station(&source, "R01", &options).unwrap();
        assert_abs_diff_eq!(chart.series[0].points[125].1, 60.0, epsilon = 1.0);
        assert_abs_diff_eq!(chart.series[1].points[125].1, 20.0, epsilon = 1.0);
    }
}
