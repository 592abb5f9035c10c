//! The `SwipeCarousel` handle exported to JavaScript
//!
//! State lives in an `Rc<RefCell<Inner>>` owned by the handle. Event
//! closures hold `Weak` references, so freeing the handle from JavaScript
//! detaches every listener. Borrows are released before user callbacks,
//! DOM event dispatch and focus changes, so those may call back into the
//! handle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipe_core::{
    CarouselConfig, CarouselEngine, CarouselResult, Gesture, LayoutChange, Metrics, PageMove,
    Point, TabAction, TouchSession, Tween, FOCUS_DELAY_MS,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Event, HtmlElement, KeyboardEvent, TouchEvent};

use crate::animate;
use crate::console::{describe, log, warn};
use crate::dom::{self, CarouselDom, INITIALIZED_CLASS, ITEM_INDEX_ATTR, PAGE_INDEX_ATTR};
use crate::indicators;
use crate::listeners::ListenerSet;

/// Event name dispatched on the root for a tap
const TAP_EVENT: &str = "tap";

/// Event name dispatched on the root for a swipe
const SWIPE_EVENT: &str = "swipe";

/// Optional functions from the option object
#[derive(Default)]
struct Callbacks {
    tap: Option<js_sys::Function>,
    swipe: Option<js_sys::Function>,
}

impl Callbacks {
    fn from_options(options: &JsValue) -> Self {
        let get = |key: &str| {
            if !options.is_object() {
                return None;
            }
            js_sys::Reflect::get(options, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        };
        Self {
            tap: get("tap"),
            swipe: get("swipe"),
        }
    }
}

struct Inner {
    engine: CarouselEngine,
    dom: CarouselDom,
    /// Prev/next, items, touch and resize listeners
    listeners: ListenerSet,
    /// Indicator listeners, replaced whenever the indicators are rebuilt
    dot_listeners: ListenerSet,
    /// Touch between touch-start and touch-end
    touch: Option<TouchSession>,
    callbacks: Callbacks,
}

type Shared = Rc<RefCell<Inner>>;

enum Nav {
    Prev,
    Next,
    To(usize),
}

/// Carousel attached to one root element
#[wasm_bindgen]
pub struct SwipeCarousel {
    /// `None` for a handle created on an already-attached root
    inner: Option<Shared>,
}

#[wasm_bindgen]
impl SwipeCarousel {
    /// Attach to `root`.
    ///
    /// On a root that already carries a carousel this returns an inert
    /// handle and leaves the page untouched.
    #[wasm_bindgen(constructor)]
    pub fn new(root: HtmlElement, options: JsValue) -> SwipeCarousel {
        if root.class_list().contains(INITIALIZED_CLASS) {
            warn("root already has a carousel, returning an inert handle");
            return SwipeCarousel { inner: None };
        }
        SwipeCarousel {
            inner: Some(build(root, &options)),
        }
    }

    /// Attach to `root`, or return `undefined` if it already has a carousel.
    pub fn attach(root: HtmlElement, options: JsValue) -> Option<SwipeCarousel> {
        if root.class_list().contains(INITIALIZED_CLASS) {
            return None;
        }
        Some(SwipeCarousel {
            inner: Some(build(root, &options)),
        })
    }

    /// Go back one page. Returns false when nothing moved.
    #[wasm_bindgen(js_name = movePrev)]
    pub fn move_prev(&self) -> bool {
        self.inner
            .as_ref()
            .map(|this| navigate(this, Nav::Prev))
            .unwrap_or(false)
    }

    /// Go forward one page. Returns false when nothing moved.
    #[wasm_bindgen(js_name = moveNext)]
    pub fn move_next(&self) -> bool {
        self.inner
            .as_ref()
            .map(|this| navigate(this, Nav::Next))
            .unwrap_or(false)
    }

    /// Reset the view, lay out again and reattach every listener.
    pub fn activate(&self) {
        if let Some(this) = &self.inner {
            activate(this);
        }
    }

    /// Remove inline styles and detach every listener.
    pub fn deactivate(&self) {
        if let Some(this) = &self.inner {
            deactivate(this);
        }
    }

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> usize {
        self.read(|inner| inner.engine.current_page())
    }

    #[wasm_bindgen(getter, js_name = itemsPerPage)]
    pub fn items_per_page(&self) -> usize {
        self.read(|inner| inner.engine.items_per_page())
    }

    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.read(|inner| inner.engine.page_count())
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner
            .as_ref()
            .map(|this| this.borrow().engine.is_active())
            .unwrap_or(false)
    }

    /// Plain object describing the current view state
    pub fn state(&self) -> JsValue {
        let Some(this) = &self.inner else {
            return JsValue::NULL;
        };
        let snapshot = this.borrow().engine.snapshot();
        match snapshot.to_json() {
            Ok(json) => js_sys::JSON::parse(&json).unwrap_or(JsValue::NULL),
            Err(e) => {
                warn(&e.to_string());
                JsValue::NULL
            }
        }
    }
}

impl SwipeCarousel {
    fn read(&self, f: impl FnOnce(&Inner) -> usize) -> usize {
        self.inner.as_ref().map(|this| f(&this.borrow())).unwrap_or(0)
    }
}

// =============================================================================
// Setup and teardown
// =============================================================================

fn parse_config(options: &JsValue) -> CarouselConfig {
    if options.is_undefined() || options.is_null() {
        return CarouselConfig::default();
    }
    let json = match js_sys::JSON::stringify(options) {
        Ok(json) => json.as_string(),
        Err(e) => {
            warn(&format!("options not serializable, using defaults: {}", describe(&e)));
            return CarouselConfig::default();
        }
    };
    // `JSON.stringify` yields `undefined` for functions and symbols
    let Some(json) = json else {
        warn("options are not an object, using defaults");
        return CarouselConfig::default();
    };
    CarouselConfig::from_json(&json).unwrap_or_else(|e| {
        warn(&format!("{}, using defaults", e));
        CarouselConfig::default()
    })
}

fn build(root: HtmlElement, options: &JsValue) -> Shared {
    let config = parse_config(options);
    let dom = CarouselDom::discover(root, &config);
    prepare_dom(&dom);

    let metrics = Metrics {
        item_count: dom.items.len(),
        item_width: dom.item_width(),
        viewport_width: dom::viewport_width(),
        existing_indicators: dom.dots.len(),
    };
    let (engine, change) = CarouselEngine::new(config, metrics);

    let this = Rc::new(RefCell::new(Inner {
        engine,
        dom,
        listeners: ListenerSet::default(),
        dot_listeners: ListenerSet::default(),
        touch: None,
        callbacks: Callbacks::from_options(options),
    }));

    render_layout(&this, change);
    if let Err(e) = attach_listeners(&this) {
        warn(&format!("attaching listeners failed: {}", e));
    }

    let inner = this.borrow();
    log(&format!(
        "attached: {} items, {} per page, {} listeners",
        inner.dom.items.len(),
        inner.engine.items_per_page(),
        inner.listeners.len()
    ));
    drop(inner);
    this
}

/// Tag items, mark the root and set the initial pager state
fn prepare_dom(dom: &CarouselDom) {
    let _ = dom.root.class_list().add_1(INITIALIZED_CLASS);
    dom.tag_items();
    dom.set_pager_disabled(true, false);
}

fn activate(this: &Shared) {
    let change = {
        let mut inner = this.borrow_mut();
        inner.listeners.clear();
        inner.dot_listeners.clear();
        inner.touch = None;
        prepare_dom(&inner.dom);
        let viewport = dom::viewport_width();
        let item_width = inner.dom.item_width();
        inner.engine.activate(viewport, item_width)
    };

    render_layout(this, change);
    if let Err(e) = attach_listeners(this) {
        warn(&format!("attaching listeners failed: {}", e));
    }
    dom::blur_active();
}

fn deactivate(this: &Shared) {
    {
        let mut inner = this.borrow_mut();
        inner.dom.remove_styles();
        inner.listeners.clear();
        inner.dot_listeners.clear();
        inner.touch = None;
        inner.engine.deactivate();
    }
    dom::blur_active();
}

/// Apply a layout pass: frame/track styles, indicators, pager state
fn render_layout(this: &Shared, change: LayoutChange) {
    {
        let mut inner = this.borrow_mut();
        let Inner { engine, dom, .. } = &mut *inner;

        if let Err(e) = dom.apply_layout(&change) {
            warn(&e.to_string());
        }
        if let Err(e) = indicators::rebuild(dom, engine.config(), change.indicator_count) {
            warn(&format!("building indicators failed: {}", e));
        }
        dom.set_controls_visible(change.controls_visible);
        render_pager(&inner);
    }

    if let Err(e) = attach_dot_listeners(this) {
        warn(&format!("attaching indicator listeners failed: {}", e));
    }
}

/// Sync the active indicator and prev/next disabled state with the engine
fn render_pager(inner: &Inner) {
    let pager = inner.engine.pager();
    indicators::set_active(&inner.dom, inner.engine.config(), pager.current());
    inner
        .dom
        .set_pager_disabled(pager.prev_disabled(), pager.next_disabled());
}

// =============================================================================
// Listeners
// =============================================================================

/// Wrap `f` so it runs only while the carousel is still alive
fn bind(weak: &Weak<RefCell<Inner>>, f: fn(&Shared, &Event)) -> impl FnMut(Event) + 'static {
    let weak = weak.clone();
    move |event: Event| {
        if let Some(this) = weak.upgrade() {
            f(&this, &event);
        }
    }
}

fn attach_listeners(this: &Shared) -> CarouselResult<()> {
    let weak = Rc::downgrade(this);
    let mut set = ListenerSet::default();
    {
        let inner = this.borrow();
        let dom = &inner.dom;

        for prev in &dom.prev {
            set.add(prev, "click", bind(&weak, |this, _| {
                navigate(this, Nav::Prev);
            }))?;
        }
        for next in &dom.next {
            set.add(next, "click", bind(&weak, |this, _| {
                navigate(this, Nav::Next);
            }))?;
        }
        for item in &dom.items {
            set.add_active(item, "keydown", bind(&weak, on_keydown))?;
        }
        if let Some(frame) = &dom.frame {
            set.add_active(frame, "touchstart", bind(&weak, on_touch_start))?;
            set.add_active(frame, "touchend", bind(&weak, on_touch_end))?;
        }
        if let Some(window) = web_sys::window() {
            set.add(&window, "resize", bind(&weak, |this, _| on_resize(this)))?;
        }
    }
    this.borrow_mut().listeners = set;
    Ok(())
}

fn attach_dot_listeners(this: &Shared) -> CarouselResult<()> {
    let weak = Rc::downgrade(this);
    let mut set = ListenerSet::default();
    {
        let inner = this.borrow();
        for dot in &inner.dom.dots {
            set.add(dot, "click", bind(&weak, on_dot_click))?;
        }
    }
    this.borrow_mut().dot_listeners = set;
    Ok(())
}

// =============================================================================
// Navigation
// =============================================================================

/// Ask the engine for a page move and start the slide.
fn navigate(this: &Shared, nav: Nav) -> bool {
    let now = animate::now_ms();
    let slide = {
        let mut inner = this.borrow_mut();
        let page_move = match nav {
            Nav::Prev => inner.engine.move_prev(now),
            Nav::Next => inner.engine.move_next(now),
            Nav::To(page) => inner.engine.move_to(page, now),
        };
        let Some(page_move) = page_move else {
            return false;
        };
        render_pager(&inner);
        prepare_slide(&inner, page_move)
    };
    slide.start();
    true
}

/// A track slide ready to run once the state borrow is released
struct Slide {
    track: Option<HtmlElement>,
    tween: Tween,
    focus: Option<HtmlElement>,
}

fn prepare_slide(inner: &Inner, page_move: PageMove) -> Slide {
    let selector = &inner.engine.config().focusable_selector;
    Slide {
        track: inner.dom.track.clone(),
        tween: page_move.tween,
        focus: inner.dom.focus_target(page_move.focus_item, selector),
    }
}

impl Slide {
    fn start(self) {
        let Some(track) = self.track else {
            return;
        };
        let _ = dom::set_style(&track, "position", "relative");

        let focus = self.focus;
        animate::run(
            self.tween,
            move |left| dom::set_left(&track, left),
            move || {
                // May land on a page a newer move has already left
                if let Some(el) = focus {
                    dom::focus(&el);
                }
            },
        );
    }
}

fn on_dot_click(this: &Shared, event: &Event) {
    if let Some(page) = dom::current_target_index(event, PAGE_INDEX_ATTR) {
        navigate(this, Nav::To(page));
    }
}

fn on_resize(this: &Shared) {
    let change = {
        let mut inner = this.borrow_mut();
        let viewport = dom::viewport_width();
        let item_width = inner.dom.item_width();
        inner.engine.resize(viewport, item_width)
    };
    if let Some(change) = change {
        dom::blur_active();
        render_layout(this, change);
    }
}

// =============================================================================
// Keyboard
// =============================================================================

fn on_keydown(this: &Shared, event: &Event) {
    let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    if key.key() != "Tab" {
        return;
    }
    let Some(index) = dom::current_target_index(event, ITEM_INDEX_ATTR) else {
        return;
    };

    event.prevent_default();
    event.stop_propagation();

    let action = this.borrow().engine.tab(index, key.shift_key());
    match action {
        TabAction::ExitBefore => {
            let before = this
                .borrow()
                .dom
                .root
                .previous_element_sibling()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(el) = before {
                let _ = el.set_attribute("tabindex", "0");
                dom::focus(&el);
            }
        }
        TabAction::FocusFirstIndicator => {
            let first = this.borrow().dom.dots.first().cloned();
            if let Some(el) = first {
                dom::focus(&el);
            }
        }
        TabAction::FocusItem(target) => {
            if let Some(el) = focus_target(this, target) {
                dom::focus(&el);
            }
        }
        TabAction::PrevPageThenFocus(target) => {
            navigate(this, Nav::Prev);
            focus_later(focus_target(this, target));
        }
        TabAction::NextPageThenFocus(target) => {
            navigate(this, Nav::Next);
            focus_later(focus_target(this, target));
        }
    }
}

fn focus_target(this: &Shared, index: usize) -> Option<HtmlElement> {
    let inner = this.borrow();
    inner
        .dom
        .focus_target(index, &inner.engine.config().focusable_selector)
}

fn focus_later(target: Option<HtmlElement>) {
    if let Some(el) = target {
        animate::after(FOCUS_DELAY_MS, move || dom::focus(&el));
    }
}

// =============================================================================
// Touch
// =============================================================================

fn first_changed_touch(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(Point::new(touch.page_x() as f64, touch.page_y() as f64))
}

fn on_touch_start(this: &Shared, event: &Event) {
    event.prevent_default();
    let Some(at) = first_changed_touch(event) else {
        return;
    };
    let mut inner = this.borrow_mut();
    let session = inner.engine.touch_start(at, animate::now_ms());
    inner.touch = Some(session);
}

/// What a finished touch needs done after the state borrow is released
struct TouchEffects {
    gesture: Gesture,
    slide: Option<Slide>,
    root: HtmlElement,
    frame: JsValue,
    tap: Option<js_sys::Function>,
    swipe: Option<js_sys::Function>,
}

fn on_touch_end(this: &Shared, event: &Event) {
    event.prevent_default();
    let Some(at) = first_changed_touch(event) else {
        return;
    };

    let effects = {
        let mut inner = this.borrow_mut();
        let Some(session) = inner.touch.take() else {
            return;
        };
        let outcome = inner
            .engine
            .touch_end(session, at, animate::now_ms(), dom::scroll_y());

        let slide = outcome.page_move.map(|page_move| {
            render_pager(&inner);
            prepare_slide(&inner, page_move)
        });

        TouchEffects {
            gesture: outcome.gesture,
            slide,
            root: inner.dom.root.clone(),
            frame: inner
                .dom
                .frame
                .as_ref()
                .map(|f| JsValue::from(f.clone()))
                .unwrap_or(JsValue::UNDEFINED),
            tap: inner.callbacks.tap.clone(),
            swipe: inner.callbacks.swipe.clone(),
        }
    };

    let gesture = effects.gesture;

    if gesture.tap {
        emit(&effects.root, TAP_EVENT, None);
        if let Some(tap) = &effects.tap {
            if let Err(e) = tap.call1(&effects.frame, event) {
                warn(&format!("tap callback threw: {}", describe(&e)));
            }
        }
    }

    if let Some(slide) = effects.slide {
        slide.start();
    }

    if let Some(direction) = gesture.swipe {
        let detail = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("direction"),
            &JsValue::from_str(direction.id()),
        );
        emit(&effects.root, SWIPE_EVENT, Some(detail.into()));

        if let Some(swipe) = &effects.swipe {
            if let Err(e) = swipe.call2(&effects.frame, event, &JsValue::from_str(direction.id())) {
                warn(&format!("swipe callback threw: {}", describe(&e)));
            }
        }
    }

    if let Some(target) = gesture.scroll_to {
        scroll_window_to(target);
    }
}

fn scroll_window_to(target: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let x = window.scroll_x().unwrap_or(0.0);
    let tween = Tween::scroll(dom::scroll_y(), target, animate::now_ms());
    animate::run(tween, move |y| window.scroll_to_with_x_and_y(x, y), || {});
}

/// Dispatch a bubbling custom event on `root`
fn emit(root: &HtmlElement, name: &str, detail: Option<JsValue>) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    if let Some(detail) = detail {
        init.set_detail(&detail);
    }
    match CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => {
            let _ = root.dispatch_event(&event);
        }
        Err(e) => warn(&format!("creating {} event failed: {}", name, describe(&e))),
    }
}
