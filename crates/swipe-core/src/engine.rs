//! Carousel engine
//!
//! [`CarouselEngine`] owns the view state of one carousel and decides what
//! every input does. It never touches the DOM: each call returns a value
//! (a [`LayoutChange`], a [`PageMove`], a [`TabAction`]) that the browser
//! shell applies.

use serde::Serialize;

use crate::config::CarouselConfig;
use crate::error::{CarouselError, CarouselResult};
use crate::gesture::{Gesture, Point, SwipeDirection, TouchSession};
use crate::keyboard::{tab_action, TabAction};
use crate::layout::{page_count, Layout, LayoutChange, LayoutTier};
use crate::pager::Pager;
use crate::transition::Tween;

/// Measurements read from the DOM before a layout pass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    pub item_count: usize,
    /// Width (px) of the first item
    pub item_width: f64,
    pub viewport_width: f64,
    /// Indicators already present in the markup
    pub existing_indicators: usize,
}

/// A page change to animate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMove {
    /// Page being moved to
    pub page: usize,
    pub from_offset: f64,
    pub to_offset: f64,
    /// Item whose focusable control gets focus when the slide ends
    pub focus_item: usize,
    pub tween: Tween,
}

impl PageMove {
    /// CSS `left` value (px) the track ends at
    pub fn target_left(&self) -> f64 {
        -self.to_offset
    }
}

/// Everything a finished touch caused
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchOutcome {
    pub gesture: Gesture,
    /// Page change triggered by a swipe, if any
    pub page_move: Option<PageMove>,
}

/// Observable state, exported to JavaScript
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot {
    pub current_page: usize,
    pub items_per_page: usize,
    pub page_count: usize,
    pub last_offset: f64,
    pub viewport_width: f64,
    pub active: bool,
}

impl CarouselSnapshot {
    pub fn to_json(&self) -> CarouselResult<String> {
        serde_json::to_string(self).map_err(|e| CarouselError::Serialization(e.to_string()))
    }
}

/// View state of one carousel
#[derive(Clone, Debug)]
pub struct CarouselEngine {
    config: CarouselConfig,
    layout: Layout,
    pager: Pager,
    /// Indicators rendered by the last layout pass
    indicator_count: usize,
    /// Offset (px) of the last page move that was started
    last_offset: f64,
    viewport_width: f64,
    active: bool,
}

impl CarouselEngine {
    /// Create an engine and run the first layout pass.
    pub fn new(config: CarouselConfig, metrics: Metrics) -> (Self, LayoutChange) {
        let mut engine = Self {
            config,
            // Four per page until the first pass says otherwise
            layout: Layout::new(LayoutTier::Four, metrics.item_width, metrics.item_count),
            pager: Pager::default(),
            indicator_count: metrics.existing_indicators,
            last_offset: 0.0,
            viewport_width: metrics.viewport_width,
            active: true,
        };
        let change = engine.apply_viewport();
        (engine, change)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn current_page(&self) -> usize {
        self.pager.current()
    }

    pub fn items_per_page(&self) -> usize {
        self.layout.items_per_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    pub fn indicator_count(&self) -> usize {
        self.indicator_count
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_page: self.current_page(),
            items_per_page: self.items_per_page(),
            page_count: self.page_count(),
            last_offset: self.last_offset,
            viewport_width: self.viewport_width,
            active: self.active,
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Pick the tier for the cached viewport width and reset the view.
    ///
    /// The page count always follows the tier. The indicator count is
    /// recounted too, except in the wide tier, which keeps the count of the
    /// previous pass.
    fn apply_viewport(&mut self) -> LayoutChange {
        match LayoutTier::for_viewport(self.viewport_width, self.layout.item_width) {
            Some(tier) => {
                self.layout.tier = tier;
                if tier.recounts_indicators() {
                    self.indicator_count = page_count(self.layout.item_count, tier.items_per_page());
                }
            }
            None => {
                tracing::warn!(
                    viewport_width = self.viewport_width,
                    item_width = self.layout.item_width,
                    "viewport narrower than one item, keeping previous layout"
                );
            }
        }

        let pages = page_count(self.layout.item_count, self.layout.items_per_page());
        self.pager.reset(pages);
        self.last_offset = 0.0;

        let change = LayoutChange {
            items_per_page: self.layout.items_per_page(),
            page_count: pages,
            indicator_count: self.indicator_count,
            frame_width: self.layout.frame_width(),
            track_width: self.layout.track_width(),
            controls_visible: pages > 1,
        };
        tracing::debug!(?change, "layout applied");
        change
    }

    /// React to a viewport resize.
    ///
    /// Returns `None` when the width did not change.
    pub fn resize(&mut self, viewport_width: f64, item_width: f64) -> Option<LayoutChange> {
        if viewport_width == self.viewport_width {
            return None;
        }
        self.viewport_width = viewport_width;
        self.layout.item_width = item_width;
        Some(self.apply_viewport())
    }

    /// Reset the view state and lay out again from fresh measurements.
    pub fn activate(&mut self, viewport_width: f64, item_width: f64) -> LayoutChange {
        self.active = true;
        self.viewport_width = viewport_width;
        self.layout.item_width = item_width;
        self.apply_viewport()
    }

    /// Mark the carousel inactive; inputs are ignored until reactivated.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move one page back. No-op on the first page.
    pub fn move_prev(&mut self, now: f64) -> Option<PageMove> {
        let page = self.pager.prev_index()?;
        self.move_to(page, now)
    }

    /// Move one page forward. No-op on the last page.
    pub fn move_next(&mut self, now: f64) -> Option<PageMove> {
        let page = self.pager.next_index()?;
        self.move_to(page, now)
    }

    /// Move to `page`.
    ///
    /// Returns `None` when `page` is past the last page (an indicator left
    /// over from the wide tier) or when the target offset equals the last
    /// one applied.
    pub fn move_to(&mut self, page: usize, now: f64) -> Option<PageMove> {
        if !self.active || page >= self.pager.page_count() {
            return None;
        }
        self.pager.set_current(page);

        let offset = self.layout.page_offset(page);
        if offset == self.last_offset {
            return None;
        }

        let from = self.last_offset;
        self.last_offset = offset;
        tracing::debug!(page, from, to = offset, "page move");

        Some(PageMove {
            page,
            from_offset: from,
            to_offset: offset,
            focus_item: self.layout.first_item_of(page),
            tween: Tween::track(-from, -offset, now),
        })
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Start tracking a touch.
    pub fn touch_start(&self, at: Point, now: f64) -> TouchSession {
        TouchSession::begin(at, now)
    }

    /// Finish a touch, turning the page on a horizontal swipe.
    pub fn touch_end(&mut self, session: TouchSession, at: Point, now: f64, scroll_y: f64) -> TouchOutcome {
        let gesture = session.finish(at, now, scroll_y, &self.config.touch);

        let page_move = match gesture.swipe {
            Some(SwipeDirection::Left) if !self.pager.is_last() => self.move_next(now),
            Some(SwipeDirection::Right) if !self.pager.is_first() => self.move_prev(now),
            _ => None,
        };

        TouchOutcome { gesture, page_move }
    }

    /// Resolve Tab/Shift-Tab pressed on item `index`.
    pub fn tab(&self, index: usize, backward: bool) -> TabAction {
        tab_action(index, self.layout.item_count, self.items_per_page(), backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(viewport_width: f64) -> Metrics {
        Metrics {
            item_count: 10,
            item_width: 300.0,
            viewport_width,
            existing_indicators: 0,
        }
    }

    #[test]
    fn test_initial_layout() {
        let (engine, change) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        assert_eq!(change.items_per_page, 3);
        assert_eq!(change.page_count, 4);
        assert_eq!(change.frame_width, 900.0);
        assert_eq!(change.track_width, 3000.0);
        assert!(change.controls_visible);
        assert_eq!(engine.current_page(), 0);
        assert!(engine.pager().prev_disabled());
        assert!(!engine.pager().next_disabled());
    }

    #[test]
    fn test_wide_tier_keeps_markup_indicator_count() {
        let m = Metrics {
            existing_indicators: 2,
            ..metrics(1400.0)
        };
        let (engine, change) = CarouselEngine::new(CarouselConfig::default(), m);
        assert_eq!(change.items_per_page, 4);
        assert_eq!(change.indicator_count, 2);
        // Paging still covers every item
        assert_eq!(change.page_count, 3);
        assert_eq!(engine.page_count(), 3);
    }

    #[test]
    fn test_wide_tier_without_markup_indicators_still_pages() {
        let m = Metrics {
            item_count: 12,
            ..metrics(1400.0)
        };
        let (mut engine, change) = CarouselEngine::new(CarouselConfig::default(), m);
        assert_eq!(change.items_per_page, 4);
        assert_eq!(change.indicator_count, 0);
        assert_eq!(change.page_count, 3);
        assert!(change.controls_visible);
        assert!(!engine.pager().next_disabled());

        let mv = engine.move_next(0.0).unwrap();
        assert_eq!(mv.page, 1);
        assert_eq!(mv.to_offset, 1200.0);
        assert_eq!(engine.tab(3, false), TabAction::NextPageThenFocus(4));
    }

    #[test]
    fn test_resize_to_wide_tier_stays_inside_track() {
        let m = Metrics {
            item_count: 10,
            ..metrics(400.0)
        };
        let (mut engine, narrow) = CarouselEngine::new(CarouselConfig::default(), m);
        assert_eq!(narrow.page_count, 10);

        let wide = engine.resize(1300.0, 300.0).unwrap();
        assert_eq!(wide.indicator_count, 10);
        assert_eq!(wide.page_count, 3);

        let mut last = None;
        while let Some(mv) = engine.move_next(0.0) {
            last = Some(mv);
        }
        let last = last.unwrap();
        assert_eq!(last.page, 2);
        assert!(last.to_offset < wide.track_width);
    }

    #[test]
    fn test_move_to_past_last_page_is_ignored() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        assert_eq!(engine.move_to(4, 0.0), None);
        assert_eq!(engine.current_page(), 0);
        assert_eq!(engine.last_offset(), 0.0);
    }

    #[test]
    fn test_move_to_same_page_is_noop() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        let first = engine.move_to(2, 0.0);
        assert!(first.is_some());
        assert_eq!(engine.move_to(2, 10.0), None);
        assert_eq!(engine.last_offset(), 1800.0);
    }

    #[test]
    fn test_page_move_values() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        let mv = engine.move_next(100.0).unwrap();
        assert_eq!(mv.page, 1);
        assert_eq!(mv.from_offset, 0.0);
        assert_eq!(mv.to_offset, 900.0);
        assert_eq!(mv.target_left(), -900.0);
        assert_eq!(mv.focus_item, 3);
        assert_eq!(mv.tween.from, 0.0);
        assert_eq!(mv.tween.to, -900.0);
        assert_eq!(mv.tween.start_time, 100.0);
    }

    #[test]
    fn test_prev_next_respect_bounds() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        assert_eq!(engine.move_prev(0.0), None);
        assert_eq!(engine.current_page(), 0);

        engine.move_to(3, 0.0);
        assert!(engine.pager().next_disabled());
        assert_eq!(engine.move_next(0.0), None);
        assert_eq!(engine.current_page(), 3);
    }

    #[test]
    fn test_resize_same_width_is_noop() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        engine.move_next(0.0);
        assert_eq!(engine.resize(1000.0, 300.0), None);
        assert_eq!(engine.current_page(), 1);
    }

    #[test]
    fn test_resize_across_tier_resets() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        engine.move_next(0.0);
        let change = engine.resize(700.0, 300.0).unwrap();
        assert_eq!(change.items_per_page, 2);
        assert_eq!(change.page_count, 5);
        assert_eq!(engine.current_page(), 0);
        assert_eq!(engine.last_offset(), 0.0);
        assert_eq!(engine.viewport_width(), 700.0);
    }

    #[test]
    fn test_narrow_viewport_keeps_previous_layout() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(700.0));
        let change = engine.resize(200.0, 300.0).unwrap();
        assert_eq!(change.items_per_page, 2);
        assert_eq!(change.page_count, 5);
    }

    #[test]
    fn test_swipe_left_moves_next() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        let session = engine.touch_start(Point::new(500.0, 100.0), 0.0);
        let outcome = engine.touch_end(session, Point::new(350.0, 110.0), 120.0, 0.0);
        assert_eq!(outcome.gesture.swipe, Some(SwipeDirection::Left));
        assert_eq!(outcome.page_move.map(|m| m.page), Some(1));
    }

    #[test]
    fn test_swipe_left_on_last_page_does_not_move() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        engine.move_to(3, 0.0);
        let session = engine.touch_start(Point::new(500.0, 100.0), 1_000.0);
        let outcome = engine.touch_end(session, Point::new(350.0, 110.0), 1_100.0, 0.0);
        assert_eq!(outcome.gesture.swipe, Some(SwipeDirection::Left));
        assert_eq!(outcome.page_move, None);
    }

    #[test]
    fn test_swipe_right_on_first_page_does_not_move() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        let session = engine.touch_start(Point::new(100.0, 100.0), 0.0);
        let outcome = engine.touch_end(session, Point::new(300.0, 100.0), 100.0, 0.0);
        assert_eq!(outcome.gesture.swipe, Some(SwipeDirection::Right));
        assert_eq!(outcome.page_move, None);
    }

    #[test]
    fn test_inactive_engine_ignores_moves() {
        let (mut engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        engine.deactivate();
        assert_eq!(engine.move_next(0.0), None);
        assert!(!engine.snapshot().active);
    }

    #[test]
    fn test_snapshot_json() {
        let (engine, _) = CarouselEngine::new(CarouselConfig::default(), metrics(1000.0));
        let json = engine.snapshot().to_json().unwrap();
        assert!(json.contains("\"currentPage\":0"));
        assert!(json.contains("\"itemsPerPage\":3"));
        assert!(json.contains("\"pageCount\":4"));
    }
}
