use thiserror::Error;

use crate::math::curve::curve::Curve;
use crate::math::kernel::impulseresponse::{
    ImpulseResponse,
    UNBOUNDED
};

#[derive(Debug, Error, PartialEq)]
pub enum ReconstructionError {
    #[error("at least 2 samples are required, got {0}")]
    InsufficientSamples(usize),
    #[error("{timestamps} timestamps but {values} values")]
    LengthMismatch { timestamps: usize, values: usize },
}

// ─────────────────────────────────────────────────────────────────────────────
// InterpolatedFilter
// ─────────────────────────────────────────────────────────────────────────────
//
// 把樣本視為 zero-order hold 訊號：v_i 維持在 t_i 與 t_{i+1} 之間，
// 第一個樣本向左延伸到 -∞，最後一個向右延伸到 +∞。
// 與 kernel 的摺積可以逐段用 kernel 的解析積分求得：
//
//   x(t) = v_1 · K(t - t_2, +∞)
//        + Σ_{i=2}^{n-1} v_i · K(t - t_{i+1}, t - t_i)
//        + v_n · K(-∞, t - t_n)
//
// 其中 K(a, b) = kernel.integral(a, b)，±∞ 以 UNBOUNDED 代替。
// 每次求值 O(n)，不做快取。

/// Zero-order-hold signal through `timestamps`/`values`, convolved with
/// `kernel`.
#[derive(Debug, Clone)]
pub struct InterpolatedFilter<K> {
    timestamps: Vec<f64>,
    values: Vec<f64>,
    kernel: K,
}

impl<K> InterpolatedFilter<K> where
    K: ImpulseResponse {
    /// `timestamps` must be non-decreasing; this is not checked.
    pub fn new(timestamps: Vec<f64>, values: Vec<f64>, kernel: K) -> Result<InterpolatedFilter<K>, ReconstructionError> {
        if timestamps.len() != values.len() {
            return Err(ReconstructionError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        if timestamps.len() < 2 {
            return Err(ReconstructionError::InsufficientSamples(timestamps.len()));
        }
        Ok(InterpolatedFilter { timestamps, values, kernel })
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl<K> Curve for InterpolatedFilter<K> where
    K: ImpulseResponse {
    fn value(&self, t: f64) -> f64 {
        let ts = &self.timestamps;
        let vs = &self.values;
        let n = ts.len();

        let head = self.kernel.integral(t - ts[1], UNBOUNDED) * vs[0];
        let body: f64 = (1..(n - 1))
            .map(|i| self.kernel.integral(t - ts[i + 1], t - ts[i]) * vs[i])
            .sum();
        let tail = self.kernel.integral(-UNBOUNDED, t - ts[n - 1]) * vs[n - 1];

        head + body + tail
    }
}

pub fn interpolate_filter<K>(timestamps: &[f64], values: &[f64], kernel: K) -> Result<InterpolatedFilter<K>, ReconstructionError> where
    K: ImpulseResponse {
    InterpolatedFilter::new(timestamps.to_vec(), values.to_vec(), kernel)
}
