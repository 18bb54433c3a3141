use crate::math::kernel::impulseresponse::ImpulseResponse;

/// `kernel` delayed by `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeShift<K> {
    kernel: K,
    delta: f64,
}

impl<K> TimeShift<K> where
    K: ImpulseResponse {
    pub fn new(kernel: K, delta: f64) -> TimeShift<K> {
        TimeShift { kernel, delta }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl<K> ImpulseResponse for TimeShift<K> where
    K: ImpulseResponse {
    fn value(&self, t: f64) -> f64 {
        self.kernel.value(t - self.delta)
    }

    fn integral(&self, a: f64, b: f64) -> f64 {
        self.kernel.integral(a - self.delta, b - self.delta)
    }
}
