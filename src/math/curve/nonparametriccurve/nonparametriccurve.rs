use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Zero across a zero-width segment instead of ±∞/NaN.
    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        let dx = rhs_pt.x - lhs_pt.x;
        if dx == 0.0 {
            0.0
        } else {
            (rhs_pt.y - lhs_pt.y) / dx
        }
    }

    pub fn zip(xs: &[f64], ys: &[f64]) -> Vec<Point2D> {
        xs.iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }
}

/// Curve defined by (and passing through) a finite set of knots.
pub trait NonparametricCurve {
    fn points(&self) -> Vec<Point2D>;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;
}
