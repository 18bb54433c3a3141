use thiserror::Error;

use crate::math::differentiator::derivative::{
    central_difference,
    DEFAULT_MIN_STEP
};

/// Scalar function of time.
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    /// Numerical by default; override when a closed form exists.
    fn derivative(&self, x: f64) -> f64 {
        central_difference(|t| self.value(t), x, DEFAULT_MIN_STEP)
    }
}

impl<C> Curve for &C where
    C: Curve + ?Sized {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

impl<C> Curve for Box<C> where
    C: Curve + ?Sized {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("at least {required} points are required, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },
    #[error("points must be sorted by x; x[{index}] = {x} is smaller than its predecessor")]
    UnsortedPoints { index: usize, x: f64 },
}
