/// Linear interpolation between `(t0, x0)` and `(t1, x1)`, with `t` clamped
/// into `[t0, t1]`.
#[inline]
pub fn lerp(x0: f64, x1: f64, t0: f64, t1: f64, t: f64) -> f64 {
    if t <= t0 {
        x0
    } else if t >= t1 {
        x1
    } else {
        x0 + (t - t0) * (x1 - x0) / (t1 - t0)
    }
}


/// Arithmetic progression `first, first + step, ...` strictly below `last`.
///
/// # Panics
/// `step` must be positive and finite.
pub fn range(first: f64, last: f64, step: f64) -> Vec<f64> {
    assert!(step > 0.0 && step.is_finite(), "range step must be positive, got {}", step);
    let mut ret = Vec::new();
    let mut t = first;
    while t < last {
        ret.push(t);
        t += step;
    }
    ret
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_outside_interval() {
        assert_eq!(lerp(0.0, 10.0, 0.0, 1.0, -5.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.0, 1.0, 5.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.0, 1.0, 0.5), 5.0);
    }

    #[test]
    fn lerp_handles_decreasing_values() {
        let y = lerp(10.0, 0.0, 2.0, 4.0, 3.0);
        assert_eq!(y, 5.0);
    }

    #[test]
    fn lerp_degenerate_interval_does_not_divide_by_zero() {
        assert_eq!(lerp(1.0, 2.0, 3.0, 3.0, 3.0), 1.0);
        assert_eq!(lerp(1.0, 2.0, 3.0, 3.0, 3.5), 2.0);
    }

    #[test]
    fn range_is_half_open() {
        assert!(range(0.0, 0.0, 1.0).is_empty());
        assert!(range(5.0, 1.0, 1.0).is_empty());
        assert_eq!(range(0.0, 3.0, 1.0), vec![0.0, 1.0, 2.0]);
        assert_eq!(range(0.0, 1.0, 0.25).len(), 4);
    }

    #[test]
    #[should_panic]
    fn range_rejects_non_positive_step() {
        let _ = range(0.0, 1.0, 0.0);
    }
}
