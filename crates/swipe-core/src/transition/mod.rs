//! Track and scroll animation
//!
//! A [`Tween`] interpolates a single pixel value between two points over a
//! fixed duration. Time is passed in by the caller (ms), so a tween can be
//! sampled from `requestAnimationFrame` in the browser or from a fake clock
//! in tests.
//!
//! Tweens are fire-and-forget: starting a new one does not cancel an older
//! one still running on the same property.

pub mod easing;

/// Duration of the track slide between pages in milliseconds
pub const TRACK_ANIMATION_DURATION_MS: f32 = 300.0;

/// Duration of the window scroll after a vertical flick in milliseconds
pub const SCROLL_ANIMATION_DURATION_MS: f32 = 200.0;

/// Delay before focusing an item on a page that is still sliding in
pub const FOCUS_DELAY_MS: i32 = 300;

/// Interpolation of one value over time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// Start time (ms)
    pub start_time: f64,
    /// Duration in ms
    pub duration_ms: f32,
}

impl Tween {
    /// Create a tween eased with the swing curve
    pub fn new(from: f64, to: f64, now: f64, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            start_time: now,
            duration_ms,
        }
    }

    /// Slide of the track between two offsets
    pub fn track(from: f64, to: f64, now: f64) -> Self {
        Self::new(from, to, now, TRACK_ANIMATION_DURATION_MS)
    }

    /// Window scroll between two positions
    pub fn scroll(from: f64, to: f64, now: f64) -> Self {
        Self::new(from, to, now, SCROLL_ANIMATION_DURATION_MS)
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.start_time) as f32;
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if the tween is complete
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Get the interpolated value at `now`
    pub fn value_at(&self, now: f64) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        let t = easing::swing(progress) as f64;
        self.from + (self.to - self.from) * t
    }
}
