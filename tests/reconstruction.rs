use approx::assert_abs_diff_eq;

use ridership::math::curve::curve::Curve;
use ridership::math::differentiator::derivative::derivative;
use ridership::math::kernel::brickwall::Brickwall;
use ridership::math::kernel::firstorder::FirstOrder;
use ridership::math::kernel::forwardbackward::ForwardBackward;
use ridership::math::kernel::impulseresponse::{
    ImpulseResponse,
    UNBOUNDED
};
use ridership::math::kernel::unity::Unity;
use ridership::math::reconstruction::interpolatefilter::interpolate_filter;
use ridership::math::utility::{
    lerp,
    range
};
use ridership::time::duration::duration;

const HOUR: f64 = 3600.0;

struct Square;

impl Curve for Square {
    fn value(&self, x: f64) -> f64 {
        x * x
    }
}

#[test]
fn step_hold_between_samples() {
    let timestamps = [0.0, HOUR, 2.0 * HOUR, 3.0 * HOUR];
    let values = [0.0, 10.0, 25.0, 25.0];
    let curve = interpolate_filter(&timestamps, &values, Unity::new()).unwrap();
    assert_eq!(curve.value(5000.0), 10.0);
    assert_eq!(curve.value(9000.0), 25.0);
    assert_eq!(curve.value(-HOUR), 0.0);
    assert_eq!(curve.value(10.0 * HOUR), 25.0);
}

#[test]
fn rate_of_a_smoothed_count() {
    // 30 riders every quarter hour for two days
    let timestamps: Vec<f64> = (0..=192).map(|i| i as f64 * 900.0).collect();
    let values: Vec<f64> = (0..=192).map(|i| i as f64 * 30.0).collect();
    let kernel = ForwardBackward::new(FirstOrder::normalized(HOUR));
    let curve = interpolate_filter(&timestamps, &values, kernel).unwrap();

    let rate = derivative(&curve, HOUR, 60.0);
    assert_abs_diff_eq!(rate.value(24.0 * HOUR), 120.0, epsilon = 1.0);
}

#[test]
fn numeric_derivative_of_square() {
    assert_abs_diff_eq!(derivative(Square, 1.0, 1e-3).value(5.0), 10.0, epsilon = 1e-2);
}

#[test]
fn kernels_have_expected_area() {
    assert_abs_diff_eq!(Brickwall::new(HOUR).integral(-UNBOUNDED, UNBOUNDED), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(FirstOrder::new(HOUR).integral(0.0, UNBOUNDED), HOUR, epsilon = HOUR * 1e-6);
    assert_abs_diff_eq!(Unity::new().integral(-UNBOUNDED, UNBOUNDED), 1.0);
}

#[test]
fn duration_strings() {
    assert_eq!(duration("2 hours").unwrap(), 7200.0);
    assert_eq!(duration("1 day").unwrap(), 86400.0);
    assert_eq!(duration("1 week").unwrap(), 604800.0);
    assert!(duration("").is_err());
}

#[test]
fn utilities() {
    assert_eq!(lerp(0.0, 10.0, 0.0, 1.0, -5.0), 0.0);
    assert_eq!(lerp(0.0, 10.0, 0.0, 1.0, 5.0), 10.0);
    assert_eq!(lerp(0.0, 10.0, 0.0, 1.0, 0.5), 5.0);
    assert!(range(0.0, 0.0, 1.0).is_empty());
    assert_eq!(range(0.0, 3.0, 1.0), vec![0.0, 1.0, 2.0]);
}
