/// Finite stand-in for ±∞ as an integration bound.
///
/// Offsets between real timestamps stay far below this, so every kernel
/// has decayed (or settled) by the time it is reached.
pub const UNBOUNDED: f64 = 1e9;

/// Impulse response of a linear time-invariant filter.
///
/// Implementations must keep `integral` segment-additive:
/// `integral(a, b) + integral(b, c) == integral(a, c)` for any `a`, `b`, `c`,
/// and `value` is the derivative of `t ↦ integral(0, t)`.
///
/// # 多執行緒安全
/// `Send + Sync` 是 supertrait，kernel 皆為不可變的值。
pub trait ImpulseResponse: Send + Sync {
    fn value(&self, t: f64) -> f64;

    /// ∫_a^b value(t) dt
    fn integral(&self, a: f64, b: f64) -> f64;
}

impl<K> ImpulseResponse for &K where
    K: ImpulseResponse + ?Sized {
    fn value(&self, t: f64) -> f64 {
        (**self).value(t)
    }

    fn integral(&self, a: f64, b: f64) -> f64 {
        (**self).integral(a, b)
    }
}
