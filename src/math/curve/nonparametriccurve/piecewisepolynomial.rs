use crate::math::curve::curve::{
    Curve,
    CurveError
};
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};

// ─────────────────────────────────────────────
// Subpolynomial
// ─────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Subpolynomial {
    /// Horner 形式，最高次在前
    coefs: Vec<f64>,
    deriv_coefs: Vec<f64>,
    lhs_x: f64,
}

impl Subpolynomial {
    fn new(coefs: Vec<f64>, lhs_x: f64) -> Subpolynomial {
        let deriv_coefs = Self::compute_deriv_coefs(&coefs);
        Subpolynomial { coefs, deriv_coefs, lhs_x }
    }

    fn compute_deriv_coefs(coefs: &[f64]) -> Vec<f64> {
        let order = coefs.len() - 1;
        if order == 0 {
            vec![0.0]
        } else {
            (0..order)
                .map(|i| (order - i) as f64 * coefs[i])
                .collect()
        }
    }

    fn value(&self, x: f64) -> f64 {
        self.evaluate(&self.coefs, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.evaluate(&self.deriv_coefs, x)
    }

    fn evaluate(&self, coefs: &[f64], x: f64) -> f64 {
        let x_diff = x - self.lhs_x;
        coefs[1..]
            .iter()
            .fold(coefs[0], |acc, &beta| f64::mul_add(acc, x_diff, beta))
    }
}

// ─────────────────────────────────────────────
// Step / Linear
// ─────────────────────────────────────────────

fn generate_forward_flat_coef_list(points: &[Point2D]) -> Vec<Vec<f64>> {
    points[..(points.len() - 1)]
        .iter()
        .map(|pt| vec![pt.y()])
        .collect()
}

fn generate_linear_coef_list(points: &[Point2D]) -> Vec<Vec<f64>> {
    points
        .windows(2)
        .map(|pair| vec![Point2D::slope(&pair[0], &pair[1]), pair[0].y()])
        .collect()
}

// ─────────────────────────────────────────────
// PCHIP（Piecewise Cubic Hermite Interpolating Polynomial）
// ─────────────────────────────────────────────
//
// Fritsch-Carlson 方法，保單調性：累計計數永遠不會在內插後倒退。
//
// 內部節點斜率：加權調和平均
//   若 s[i-1]*s[i] <= 0：t[i] = 0（局部極值點或平台）
//   否則：t[i] = (w1+w2) / (w1/s[i-1] + w2/s[i])
//           where w1 = 2*h[i] + h[i-1]，w2 = h[i] + 2*h[i-1]
//
// 端點斜率：單側三點差分，符號與 s 相反時歸零，過大時截為 3*s。
//
// 寬度為 0 的區間（重複時間戳）斜率視為 0，係數退化為常數。

/// 從各節點的一階導數 t[0..=n] 計算各區間的三次多項式係數 [d, c, b, a]：
///   S_i(x) = a + b*(x-x_i) + c*(x-x_i)^2 + d*(x-x_i)^3
fn cubic_coefs_from_hermite(points: &[Point2D], h: &[f64], t: &[f64]) -> Vec<Vec<f64>> {
    (0..h.len())
        .map(|i| {
            let a = points[i].y();
            if h[i] == 0.0 {
                return vec![0.0, 0.0, 0.0, a];
            }
            let dy = points[i + 1].y() - a;
            let b = t[i];
            let c = (3.0 * dy / h[i] - 2.0 * t[i] - t[i + 1]) / h[i];
            let d = (-2.0 * dy / h[i] + t[i] + t[i + 1]) / (h[i] * h[i]);
            vec![d, c, b, a]
        })
        .collect()
}

fn pchip_end_slope(h0: f64, h1: f64, s0: f64, s1: f64) -> f64 {
    if h0 + h1 == 0.0 {
        return s0;
    }
    let raw = ((2.0 * h0 + h1) * s0 - h0 * s1) / (h0 + h1);
    if raw.signum() != s0.signum() || s0 == 0.0 {
        0.0
    } else if s0.signum() != s1.signum() && raw.abs() > 3.0 * s0.abs() {
        3.0 * s0
    } else {
        raw
    }
}

fn generate_pchip_coef_list(points: &[Point2D]) -> Vec<Vec<f64>> {
    let n = points.len() - 1;
    let h: Vec<f64> = points.windows(2).map(|pair| pair[1].x() - pair[0].x()).collect();
    let s: Vec<f64> = points.windows(2).map(|pair| Point2D::slope(&pair[0], &pair[1])).collect();

    let mut t = vec![0.0_f64; n + 1];

    // 只有一個區間：退化為線性
    if n == 1 {
        t[0] = s[0];
        t[1] = s[0];
        return cubic_coefs_from_hermite(points, &h, &t);
    }

    for i in 1..n {
        if s[i - 1] * s[i] <= 0.0 {
            t[i] = 0.0;
        } else {
            let w1 = 2.0 * h[i] + h[i - 1];
            let w2 = h[i] + 2.0 * h[i - 1];
            t[i] = (w1 + w2) / (w1 / s[i - 1] + w2 / s[i]);
        }
    }

    t[0] = pchip_end_slope(h[0], h[1], s[0], s[1]);
    t[n] = pchip_end_slope(h[n - 1], h[n - 2], s[n - 1], s[n - 2]);

    cubic_coefs_from_hermite(points, &h, &t)
}

// ─────────────────────────────────────────────
// PolynomialType
// ─────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PolynomialType {
    /// 每個樣本值維持到下一個時間戳（zero-order hold）
    ForwardFlat,
    Linear,
    /// 保單調三次 Hermite（PCHIP）
    PiecewiseCubicHermite,
}

const NECESSARY_POINTS: usize = 2;

// ─────────────────────────────────────────────
// PiecewisePolynomial
// ─────────────────────────────────────────────

/// Piecewise polynomial through `points`, held flat beyond both ends.
#[derive(Debug, Clone)]
pub struct PiecewisePolynomial {
    polynomial_type: PolynomialType,
    subpolynomial_list: Vec<Subpolynomial>,
    first_point: Point2D,
    last_point: Point2D,
}

impl PiecewisePolynomial {
    pub fn new(
        polynomial_type: PolynomialType,
        points: Vec<Point2D>,
    ) -> Result<PiecewisePolynomial, CurveError> {
        if points.len() < NECESSARY_POINTS {
            return Err(CurveError::InsufficientPoints {
                required: NECESSARY_POINTS,
                actual: points.len(),
            });
        }
        if let Some(index) = (1..points.len()).find(|&i| points[i].x() < points[i - 1].x()) {
            return Err(CurveError::UnsortedPoints { index, x: points[index].x() });
        }

        let coef_list = match polynomial_type {
            PolynomialType::ForwardFlat           => generate_forward_flat_coef_list(&points),
            PolynomialType::Linear                => generate_linear_coef_list(&points),
            PolynomialType::PiecewiseCubicHermite => generate_pchip_coef_list(&points),
        };

        let subpolynomial_list = coef_list
            .into_iter()
            .zip(points.iter())
            .map(|(coefs, pt)| Subpolynomial::new(coefs, pt.x()))
            .collect();

        Ok(PiecewisePolynomial {
            polynomial_type,
            subpolynomial_list,
            first_point: points[0],
            last_point: points[points.len() - 1],
        })
    }

    pub fn polynomial_type(&self) -> PolynomialType {
        self.polynomial_type
    }

    /// Segment whose `[lhs_x, next lhs_x)` contains `x`; `x` must lie in
    /// `[min_x, max_x)`.
    fn find_segment(&self, x: f64) -> usize {
        self.subpolynomial_list
            .partition_point(|s| s.lhs_x <= x)
            .saturating_sub(1)
    }
}

// ─────────────────────────────────────────────
// Trait 實作
// ─────────────────────────────────────────────

impl NonparametricCurve for PiecewisePolynomial {
    fn points(&self) -> Vec<Point2D> {
        let mut pts: Vec<Point2D> = self
            .subpolynomial_list
            .iter()
            .map(|s| Point2D::new(s.lhs_x, s.value(s.lhs_x)))
            .collect();
        pts.push(self.last_point);
        pts
    }

    fn min_x(&self) -> f64 {
        self.first_point.x()
    }

    fn max_x(&self) -> f64 {
        self.last_point.x()
    }
}

impl Curve for PiecewisePolynomial {
    fn value(&self, x: f64) -> f64 {
        if x < self.min_x() {
            self.first_point.y()
        } else if x >= self.max_x() {
            self.last_point.y()
        } else {
            self.subpolynomial_list[self.find_segment(x)].value(x)
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        if x < self.min_x() || x >= self.max_x() {
            0.0
        } else {
            self.subpolynomial_list[self.find_segment(x)].derivative(x)
        }
    }
}
