//! Easing curve for animations

use std::f32::consts::PI;

/// Swing easing, the default curve of jQuery's `animate`
#[inline]
pub fn swing(t: f32) -> f32 {
    0.5 - (t * PI).cos() / 2.0
}
