//! Touch gesture classification
//!
//! A [`TouchSession`] is created on touch-start and consumed on touch-end,
//! producing a [`Gesture`]. Tap, swipe and scroll are checked independently,
//! so one touch can classify as more than one of them.

use crate::config::TouchThresholds;

/// Extra distance (px) added to the scroll target of a vertical flick
pub const SCROLL_NUDGE_PX: f64 = 20.0;

/// A position in page coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal direction of a swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// String ID used in event payloads
    pub fn id(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// A touch in progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSession {
    pub start: Point,
    /// Start time (ms)
    pub start_time: f64,
}

impl TouchSession {
    pub fn begin(start: Point, now: f64) -> Self {
        Self {
            start,
            start_time: now,
        }
    }

    /// Finish the touch and classify it.
    ///
    /// `scroll_y` is the window's vertical scroll position at touch-end.
    pub fn finish(self, end: Point, now: f64, scroll_y: f64, limits: &TouchThresholds) -> Gesture {
        let dist_x = end.x - self.start.x;
        let dist_y = end.y - self.start.y;
        let elapsed = now - self.start_time;
        Gesture::classify(dist_x, dist_y, elapsed, scroll_y, limits)
    }
}

/// Outcome of a finished touch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub dist_x: f64,
    pub dist_y: f64,
    /// Duration (ms)
    pub elapsed: f64,
    pub tap: bool,
    pub swipe: Option<SwipeDirection>,
    /// Window scroll target when the touch was a vertical flick
    pub scroll_to: Option<f64>,
}

impl Gesture {
    pub fn classify(
        dist_x: f64,
        dist_y: f64,
        elapsed: f64,
        scroll_y: f64,
        limits: &TouchThresholds,
    ) -> Self {
        let abs_x = dist_x.abs();
        let abs_y = dist_y.abs();

        let tap = abs_x <= limits.tap_threshold && abs_y <= limits.tap_threshold;

        let mut swipe = None;
        let mut scroll_to = None;
        if elapsed <= limits.allowed_time {
            if abs_x >= limits.threshold && abs_y <= limits.restraint {
                swipe = Some(if dist_x < 0.0 {
                    SwipeDirection::Left
                } else {
                    SwipeDirection::Right
                });
            }
            if abs_y >= limits.threshold && abs_x <= limits.restraint {
                // Finger moving up scrolls the page down
                scroll_to = Some(scroll_y - dist_y + SCROLL_NUDGE_PX);
            }
        }

        tracing::trace!(dist_x, dist_y, elapsed, tap, ?swipe, ?scroll_to, "touch classified");

        Self {
            dist_x,
            dist_y,
            elapsed,
            tap,
            swipe,
            scroll_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> TouchThresholds {
        TouchThresholds::default()
    }

    #[test]
    fn test_small_move_is_tap() {
        let g = Gesture::classify(5.0, 5.0, 50.0, 0.0, &limits());
        assert!(g.tap);
        assert_eq!(g.swipe, None);
        assert_eq!(g.scroll_to, None);
    }

    #[test]
    fn test_tap_ignores_elapsed_time() {
        let g = Gesture::classify(-6.0, 6.0, 5_000.0, 0.0, &limits());
        assert!(g.tap);
    }

    #[test]
    fn test_swipe_left_and_right() {
        let g = Gesture::classify(-150.0, 10.0, 200.0, 0.0, &limits());
        assert_eq!(g.swipe, Some(SwipeDirection::Left));
        assert!(!g.tap);

        let g = Gesture::classify(150.0, 10.0, 200.0, 0.0, &limits());
        assert_eq!(g.swipe, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_slow_swipe_is_ignored() {
        let g = Gesture::classify(-150.0, 10.0, 301.0, 0.0, &limits());
        assert_eq!(g.swipe, None);
        assert_eq!(g.scroll_to, None);
    }

    #[test]
    fn test_swipe_exceeding_restraint_is_ignored() {
        let g = Gesture::classify(-150.0, 101.0, 100.0, 0.0, &limits());
        assert_eq!(g.swipe, None);
        // Vertical travel passes threshold but horizontal breaks restraint
        assert_eq!(g.scroll_to, None);
    }

    #[test]
    fn test_scroll_target() {
        // Finger moved up 120px: page scrolls down by 120 plus nudge
        let g = Gesture::classify(0.0, -120.0, 100.0, 400.0, &limits());
        assert_eq!(g.scroll_to, Some(540.0));

        // Finger moved down 120px: page scrolls up
        let g = Gesture::classify(0.0, 120.0, 100.0, 400.0, &limits());
        assert_eq!(g.scroll_to, Some(300.0));
    }

    #[test]
    fn test_diagonal_can_be_swipe_and_scroll() {
        let g = Gesture::classify(-100.0, 100.0, 100.0, 0.0, &limits());
        assert_eq!(g.swipe, Some(SwipeDirection::Left));
        assert!(g.scroll_to.is_some());
    }

    #[test]
    fn test_session_finish() {
        let session = TouchSession::begin(Point::new(300.0, 200.0), 1_000.0);
        let g = session.finish(Point::new(140.0, 205.0), 1_150.0, 0.0, &limits());
        assert_eq!(g.dist_x, -160.0);
        assert_eq!(g.dist_y, 5.0);
        assert_eq!(g.elapsed, 150.0);
        assert_eq!(g.swipe, Some(SwipeDirection::Left));
    }

    #[test]
    fn test_direction_id() {
        assert_eq!(SwipeDirection::Left.id(), "left");
        assert_eq!(SwipeDirection::Right.id(), "right");
    }
}
