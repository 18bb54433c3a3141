use std::fmt;
use std::num::ParseFloatError;

use log::warn;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries
}

impl TimeUnit {
    /// Singular and plural English names; anything else is `None`.
    pub fn from_name(name: &str) -> Option<TimeUnit> {
        match name {
            "second" | "seconds" => Some(TimeUnit::Seconds),
            "minute" | "minutes" => Some(TimeUnit::Minutes),
            "hour" | "hours" => Some(TimeUnit::Hours),
            "day" | "days" => Some(TimeUnit::Days),
            "week" | "weeks" => Some(TimeUnit::Weeks),
            "month" | "months" => Some(TimeUnit::Months),
            "year" | "years" => Some(TimeUnit::Years),
            "decade" | "decades" => Some(TimeUnit::Decades),
            "century" | "centuries" => Some(TimeUnit::Centuries),
            _ => None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
            TimeUnit::Decades => "decades",
            TimeUnit::Centuries => "centuries"
        }
    }

    /// A month is 52/12 weeks, so twelve of them make a 364-day year.
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 60.0 * TimeUnit::Minutes.seconds(),
            TimeUnit::Days => 24.0 * TimeUnit::Hours.seconds(),
            TimeUnit::Weeks => 7.0 * TimeUnit::Days.seconds(),
            TimeUnit::Months => 52.0 / 12.0 * TimeUnit::Weeks.seconds(),
            TimeUnit::Years => 12.0 * TimeUnit::Months.seconds(),
            TimeUnit::Decades => 10.0 * TimeUnit::Years.seconds(),
            TimeUnit::Centuries => 10.0 * TimeUnit::Decades.seconds()
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseDurationError {
    #[error("empty duration")]
    Empty,
    #[error("invalid duration amount: {0}")]
    Number(#[from] ParseFloatError),
}

/// Human-readable length of time such as `"2 hours"` or `"1.5 day"`.
///
/// An unknown or missing unit leaves the amount as plain seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Duration {
    number: f64,
    unit: TimeUnit
}

impl Duration {
    pub fn new(number: f64, unit: TimeUnit) -> Duration {
        Duration { number, unit }
    }

    pub fn parse(duration_str: &str) -> Result<Duration, ParseDurationError> {
        let mut tokens = duration_str.split_whitespace();
        let number = tokens
            .next()
            .ok_or(ParseDurationError::Empty)?
            .parse::<f64>()?;
        let unit = match tokens.next() {
            Some(name) => TimeUnit::from_name(name).unwrap_or_else(|| {
                warn!("unknown time unit '{}' in duration '{}', reading it as seconds", name, duration_str);
                TimeUnit::Seconds
            }),
            None => TimeUnit::Seconds
        };
        Ok(Duration::new(number, unit))
    }

    pub fn number(&self) -> f64 {
        self.number
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn seconds(&self) -> f64 {
        self.unit.seconds() * self.number
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.number, self.unit.name())
    }
}

/// Seconds in a duration string, see [`Duration::parse`].
pub fn duration(duration_str: &str) -> Result<f64, ParseDurationError> {
    Duration::parse(duration_str).map(|d| d.seconds())
}
