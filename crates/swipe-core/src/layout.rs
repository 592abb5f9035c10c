//! Responsive layout
//!
//! Maps a viewport width to a number of items per page and derives the frame
//! and track widths from it.

/// Viewport width (px) at and above which four items are shown per page
pub const WIDE_VIEWPORT_WIDTH: f64 = 1280.0;

/// How many items one page shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutTier {
    One,
    Two,
    Three,
    Four,
}

impl LayoutTier {
    /// Pick the tier for a viewport.
    ///
    /// Returns `None` when the viewport is narrower than a single item; the
    /// caller keeps whatever tier it had.
    pub fn for_viewport(viewport_width: f64, item_width: f64) -> Option<Self> {
        if viewport_width >= WIDE_VIEWPORT_WIDTH {
            Some(LayoutTier::Four)
        } else if viewport_width >= item_width * 3.0 {
            Some(LayoutTier::Three)
        } else if viewport_width >= item_width * 2.0 {
            Some(LayoutTier::Two)
        } else if viewport_width >= item_width {
            Some(LayoutTier::One)
        } else {
            None
        }
    }

    /// Items shown per page
    pub fn items_per_page(&self) -> usize {
        match self {
            LayoutTier::One => 1,
            LayoutTier::Two => 2,
            LayoutTier::Three => 3,
            LayoutTier::Four => 4,
        }
    }

    /// Whether entering this tier recounts the indicators.
    ///
    /// The wide tier reuses the previous indicator count.
    pub fn recounts_indicators(&self) -> bool {
        !matches!(self, LayoutTier::Four)
    }
}

/// Number of pages needed for `item_count` items
pub fn page_count(item_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    item_count.div_ceil(items_per_page)
}

/// Geometry of the frame and track for one tier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub tier: LayoutTier,
    /// Width (px) of a single item
    pub item_width: f64,
    pub item_count: usize,
}

impl Layout {
    pub fn new(tier: LayoutTier, item_width: f64, item_count: usize) -> Self {
        Self {
            tier,
            item_width,
            item_count,
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.tier.items_per_page()
    }

    /// Width of the clipping frame: one page of items
    pub fn frame_width(&self) -> f64 {
        self.item_width * self.items_per_page() as f64
    }

    /// Width of the track: every item side by side
    pub fn track_width(&self) -> f64 {
        self.item_width * self.item_count as f64
    }

    /// Horizontal offset (px) that reveals `page`
    pub fn page_offset(&self, page: usize) -> f64 {
        self.frame_width() * page as f64
    }

    /// Index of the first item on `page`
    pub fn first_item_of(&self, page: usize) -> usize {
        page * self.items_per_page()
    }
}

/// Result of a layout pass, applied to the DOM by the browser shell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutChange {
    pub items_per_page: usize,
    /// Pages needed to show every item
    pub page_count: usize,
    /// Number of indicators to render
    pub indicator_count: usize,
    pub frame_width: f64,
    pub track_width: f64,
    /// Prev/next and indicators are hidden when there is a single page
    pub controls_visible: bool,
}
