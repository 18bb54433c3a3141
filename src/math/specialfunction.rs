use std::f64::consts::FRAC_PI_2;

use crate::math::utility::lerp;

// ─────────────────────────────────────────────
// Sine integral
// ─────────────────────────────────────────────
//
//   Si(x) = ∫_0^x sin(t)/t dt
//
// 近端（|x| ≤ 3.75）：冪級數，取奇數項 n = 1, 3, ..., 11
//   Si(x) ≈ Σ (-1)^((n-1)/2) · x^n / (n · n!)
//
// 遠端（|x| ≥ 3.86）：漸近展開
//   Si(x) ≈ π/2 + cos(x)·(-1/x + 2/x³) + sin(x)·(-1/x²)
//
// 兩者在交界處並不相等，中間以線性內插銜接以消除跳躍。

const SERIES_LIMIT: f64 = 3.75;
const ASYMPTOTIC_LIMIT: f64 = 3.86;
const BLEND_START: f64 = 3.74;
const SERIES_MAX_ORDER: u32 = 11;

pub fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

fn si_series(x: f64) -> f64 {
    (1..=SERIES_MAX_ORDER)
        .step_by(2)
        .map(|n| {
            let sign = if n & 2 == 0 { 1.0 } else { -1.0 };
            sign * x.powi(n as i32) / (n as f64 * factorial(n))
        })
        .sum()
}

fn si_asymptotic(x: f64) -> f64 {
    let x2 = x * x;
    FRAC_PI_2 + x.cos() * (-1.0 / x + 2.0 / (x2 * x)) + x.sin() * (-1.0 / x2)
}

/// Sine integral. Odd, with `si(±∞) = ±π/2`.
pub fn si(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x < 0.0 {
        return -si(-x);
    }
    if x == 0.0 {
        0.0
    } else if x.is_infinite() {
        FRAC_PI_2
    } else if x >= ASYMPTOTIC_LIMIT {
        si_asymptotic(x)
    } else if x > SERIES_LIMIT {
        lerp(
            si_series(BLEND_START),
            si_asymptotic(ASYMPTOTIC_LIMIT),
            BLEND_START,
            ASYMPTOTIC_LIMIT,
            x,
        )
    } else {
        si_series(x)
    }
}

/// Unnormalized sinc, `sin(x) / x`.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { x.sin() / x }
}
