use crate::math::kernel::impulseresponse::ImpulseResponse;

/// Unit mass at the origin; convolving with it leaves a signal untouched.
///
/// Only meaningful through `integral`, which is a unit step at 0: a window
/// `(a, b]` either contains the mass or it does not.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Unity;

impl Unity {
    pub fn new() -> Unity {
        Unity
    }
}

impl ImpulseResponse for Unity {
    fn value(&self, _t: f64) -> f64 {
        0.0
    }

    fn integral(&self, a: f64, b: f64) -> f64 {
        if a <= 0.0 && b > 0.0 {
            1.0
        } else if a > 0.0 && b <= 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}
