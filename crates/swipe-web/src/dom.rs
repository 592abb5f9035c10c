//! DOM skeleton lookup and style mutation
//!
//! Missing pieces of the skeleton are tolerated: every lookup yields an
//! empty list or `None` and later operations on it do nothing.

use swipe_core::{CarouselConfig, CarouselError, CarouselResult, LayoutChange};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement};

use crate::console::describe;

/// Attribute carrying an item's position in the track
pub(crate) const ITEM_INDEX_ATTR: &str = "data-index";

/// Attribute carrying an indicator's page
pub(crate) const PAGE_INDEX_ATTR: &str = "data-page-index";

/// Class added to the root once the carousel is attached
pub(crate) const INITIALIZED_CLASS: &str = "swipe-initialized";

/// Elements a carousel controls
pub(crate) struct CarouselDom {
    pub root: HtmlElement,
    /// Clipping element, first `div` inside the root
    pub frame: Option<HtmlElement>,
    /// Moving element, first `div` inside the frame
    pub track: Option<HtmlElement>,
    pub items: Vec<HtmlElement>,
    pub prev: Vec<HtmlElement>,
    pub next: Vec<HtmlElement>,
    pub dot_wrap: Option<HtmlElement>,
    pub dots: Vec<HtmlElement>,
}

impl CarouselDom {
    /// Locate the skeleton under `root` using the configured class hooks.
    pub(crate) fn discover(root: HtmlElement, config: &CarouselConfig) -> Self {
        let frame = first_div(&root);
        let track = frame.as_ref().and_then(|f| first_div(f));

        Self {
            items: by_class(&root, &config.item_class),
            prev: by_class(&root, &config.prev_class),
            next: by_class(&root, &config.next_class),
            dot_wrap: by_class(&root, &config.dot_page_wrap_class).into_iter().next(),
            dots: by_class(&root, &config.dot_page_class),
            frame,
            track,
            root,
        }
    }

    /// Write each item's position into `data-index`
    pub(crate) fn tag_items(&self) {
        for (index, item) in self.items.iter().enumerate() {
            let _ = item.set_attribute(ITEM_INDEX_ATTR, &index.to_string());
        }
    }

    /// Content-box width of the first item, 0 when there are no items
    pub(crate) fn item_width(&self) -> f64 {
        self.items.first().map(content_width).unwrap_or(0.0)
    }

    /// Size the frame to one page and the track to all items, track at rest.
    pub(crate) fn apply_layout(&self, change: &LayoutChange) -> CarouselResult<()> {
        let frame = self.frame.as_ref().ok_or_else(|| CarouselError::missing("frame"))?;
        set_style(frame, "width", &px(change.frame_width))?;
        set_style(frame, "margin", "0 auto")?;

        let track = self.track.as_ref().ok_or_else(|| CarouselError::missing("track"))?;
        set_style(track, "width", &px(change.track_width))?;
        set_style(track, "margin", "0")?;
        set_style(track, "left", "0")?;
        Ok(())
    }

    /// Strip every inline style from the frame and track
    pub(crate) fn remove_styles(&self) {
        for el in self.frame.iter().chain(self.track.iter()) {
            let _ = el.remove_attribute("style");
        }
    }

    /// The control inside item `index` that should receive focus
    pub(crate) fn focus_target(&self, index: usize, selector: &str) -> Option<HtmlElement> {
        let item = self.items.get(index)?;
        item.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    pub(crate) fn set_pager_disabled(&self, prev_disabled: bool, next_disabled: bool) {
        set_disabled(&self.prev, prev_disabled);
        set_disabled(&self.next, next_disabled);
    }

    /// Show or hide prev/next and the indicators
    pub(crate) fn set_controls_visible(&self, visible: bool) {
        for el in self.prev.iter().chain(&self.next).chain(&self.dots) {
            set_visible(el, visible);
        }
    }
}

/// All descendants of `root` with `class`, as a snapshot
pub(crate) fn by_class(root: &Element, class: &str) -> Vec<HtmlElement> {
    if class.is_empty() {
        return Vec::new();
    }
    let collection = root.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn first_div(parent: &Element) -> Option<HtmlElement> {
    parent
        .query_selector("div")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Rendered width of `el` less its horizontal padding and borders
fn content_width(el: &HtmlElement) -> f64 {
    let outer = el.get_bounding_client_rect().width();
    let Some(style) = web_sys::window().and_then(|w| w.get_computed_style(el).ok().flatten()) else {
        return outer;
    };
    let edges: f64 = [
        "padding-left",
        "padding-right",
        "border-left-width",
        "border-right-width",
    ]
    .iter()
    .map(|property| css_px(&style, property))
    .sum();
    (outer - edges).max(0.0)
}

/// Computed length in px, 0 when unset or not a px value
fn css_px(style: &CssStyleDeclaration, property: &str) -> f64 {
    style
        .get_property_value(property)
        .ok()
        .and_then(|value| value.trim().trim_end_matches("px").parse().ok())
        .unwrap_or(0.0)
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) -> CarouselResult<()> {
    el.style()
        .set_property(property, value)
        .map_err(|e| CarouselError::dom(format!("set {}: {}", property, describe(&e))))
}

/// Place the track at `left` pixels
pub(crate) fn set_left(el: &HtmlElement, left: f64) {
    let _ = el.style().set_property("left", &px(left));
}

fn set_disabled(elements: &[HtmlElement], disabled: bool) {
    for el in elements {
        if disabled {
            let _ = el.set_attribute("disabled", "disabled");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }
}

fn set_visible(el: &HtmlElement, visible: bool) {
    if visible {
        let _ = el.style().remove_property("display");
    } else {
        let _ = el.style().set_property("display", "none");
    }
}

/// Integer stored in `attr` on `el`
pub(crate) fn index_attr(el: &Element, attr: &str) -> Option<usize> {
    el.get_attribute(attr)?.trim().parse().ok()
}

/// Index attribute read from the element a listener is bound to
pub(crate) fn current_target_index(event: &web_sys::Event, attr: &str) -> Option<usize> {
    let target = event.current_target()?.dyn_into::<Element>().ok()?;
    index_attr(&target, attr)
}

/// Viewport width: `innerWidth`, then the root element, then the body
pub(crate) fn viewport_width() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    if let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) {
        if width > 0.0 {
            return width;
        }
    }
    let Some(document) = window.document() else {
        return 0.0;
    };
    if let Some(root) = document.document_element() {
        if root.client_width() > 0 {
            return root.client_width() as f64;
        }
    }
    document.body().map(|b| b.client_width() as f64).unwrap_or(0.0)
}

/// Vertical window scroll position
pub(crate) fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Drop focus from whatever element holds it
pub(crate) fn blur_active() {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(el) = active {
        let _ = el.blur();
    }
}

pub(crate) fn focus(el: &HtmlElement) {
    let _ = el.focus();
}
