//! Page indicator buttons
//!
//! One `<button>` per page inside the indicator wrapper. The active one
//! carries the active class and an `<em>` marker for screen readers.

use swipe_core::{CarouselConfig, CarouselError, CarouselResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::console::describe;
use crate::dom::{CarouselDom, PAGE_INDEX_ATTR};

/// Text of the screen-reader marker on the active indicator
const ACTIVE_MARKER: &str = "active";

/// Replace the indicators with `count` fresh buttons, the first one active.
pub(crate) fn rebuild(dom: &mut CarouselDom, config: &CarouselConfig, count: usize) -> CarouselResult<()> {
    for dot in dom.dots.drain(..) {
        dot.remove();
    }

    let Some(wrap) = dom.dot_wrap.as_ref() else {
        return Ok(());
    };
    let document = wrap
        .owner_document()
        .ok_or_else(|| CarouselError::missing("document"))?;

    for page in 0..count {
        let button = create(&document, "button")?;
        button
            .set_attribute("type", "button")
            .and_then(|_| button.set_attribute(PAGE_INDEX_ATTR, &page.to_string()))
            .map_err(|e| CarouselError::dom(describe(&e)))?;
        button.set_class_name(&config.dot_page_class);

        let label = create(&document, "span")?;
        label.set_text_content(Some(&config.indicator_text(page, count)));
        button
            .append_child(&label)
            .map_err(|e| CarouselError::dom(describe(&e)))?;

        wrap.append_child(&button)
            .map_err(|e| CarouselError::dom(describe(&e)))?;
        dom.dots.push(button);
    }

    set_active(dom, config, 0);
    Ok(())
}

/// Mark indicator `page` active and clear the others.
pub(crate) fn set_active(dom: &CarouselDom, config: &CarouselConfig, page: usize) {
    for dot in &dom.dots {
        let _ = dot.class_list().remove_1(&config.active_class);
        if let Ok(markers) = dot.query_selector_all("span em") {
            for i in 0..markers.length() {
                if let Some(node) = markers.item(i) {
                    if let Some(parent) = node.parent_node() {
                        let _ = parent.remove_child(&node);
                    }
                }
            }
        }
    }

    let Some(dot) = dom.dots.get(page) else {
        return;
    };
    let _ = dot.class_list().add_1(&config.active_class);

    let label = dot.query_selector("span").ok().flatten();
    let document = dot.owner_document();
    if let (Some(label), Some(document)) = (label, document) {
        if let Ok(marker) = document.create_element("em") {
            marker.set_text_content(Some(ACTIVE_MARKER));
            let _ = label.append_child(&marker);
        }
    }
}

fn create(document: &Document, tag: &str) -> CarouselResult<HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| CarouselError::dom(describe(&e)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CarouselError::dom(format!("<{}> is not an HTML element", tag)))
}
