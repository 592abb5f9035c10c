//! Swipe Carousel Core
//!
//! This crate provides the browser-independent half of the swipe carousel:
//! - Configuration (class-name hooks, gesture thresholds)
//! - Responsive layout (items per page from viewport width)
//! - Page bookkeeping and prev/next enabled state
//! - Touch gesture classification (tap, swipe, scroll)
//! - Tab traversal across items and pages
//! - Tweens for the track slide and window scroll
//!
//! ## Architecture
//!
//! - [`config`]: Option object parsed from JavaScript
//! - [`layout`]: Tier table and frame/track geometry
//! - [`pager`]: Current page and boundary checks
//! - [`gesture`]: Touch sessions and their classification
//! - [`keyboard`]: Tab/Shift-Tab resolution
//! - [`transition`]: Tweens and the swing easing curve
//! - [`engine`]: [`CarouselEngine`], which combines all of the above
//!
//! ## Example
//!
//! ```rust
//! use swipe_core::{CarouselConfig, CarouselEngine, Metrics};
//!
//! let metrics = Metrics {
//!     item_count: 10,
//!     item_width: 300.0,
//!     viewport_width: 1000.0,
//!     existing_indicators: 0,
//! };
//! let (mut engine, layout) = CarouselEngine::new(CarouselConfig::default(), metrics);
//! assert_eq!(layout.items_per_page, 3);
//!
//! let page_move = engine.move_next(0.0).unwrap();
//! assert_eq!(page_move.target_left(), -900.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **No DOM here**: every decision returns a value the browser shell applies
//! 2. **Time Abstraction**: callers pass `now` in milliseconds, so tests use a fake clock

pub mod config;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod keyboard;
pub mod layout;
pub mod pager;
pub mod transition;

pub use config::{CarouselConfig, TouchThresholds};
pub use engine::{CarouselEngine, CarouselSnapshot, Metrics, PageMove, TouchOutcome};
pub use error::{CarouselError, CarouselResult};
pub use gesture::{Gesture, Point, SwipeDirection, TouchSession, SCROLL_NUDGE_PX};
pub use keyboard::{tab_action, TabAction};
pub use layout::{page_count, Layout, LayoutChange, LayoutTier, WIDE_VIEWPORT_WIDTH};
pub use pager::Pager;
pub use transition::{Tween, FOCUS_DELAY_MS, SCROLL_ANIMATION_DURATION_MS};

/// Duration of the track slide in milliseconds
pub use transition::TRACK_ANIMATION_DURATION_MS;
