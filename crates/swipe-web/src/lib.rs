//! Swipe Carousel for the browser
//!
//! `wasm-bindgen` shell around [`swipe_core`]. It finds the carousel
//! skeleton in the page, applies layout as inline styles, renders the page
//! indicators and turns clicks, keys, touches and resizes into engine calls.
//!
//! ## DOM contract
//!
//! ```text
//! <div class="carousel">                 root
//!   <div>                                frame (first div)
//!     <div>                              track (first div in frame)
//!       <div class="swipe-items">…</div> items
//!     </div>
//!   </div>
//!   <button class="swipe-prev">          prev
//!   <button class="swipe-next">          next
//!   <div class="swipe-page-wrap"></div>  indicators go here
//! </div>
//! ```
//!
//! ## JavaScript usage
//!
//! ```js
//! const carousel = new SwipeCarousel(root, {
//!   touchObject: { threshold: 80 },
//!   swipe(event, direction) { console.log(direction); },
//! });
//! root.addEventListener("tap", () => carousel.moveNext());
//! ```

use wasm_bindgen::prelude::*;

mod animate;
mod carousel;
mod console;
mod dom;
mod indicators;
mod listeners;

pub use carousel::SwipeCarousel;

/// Module start hook: routes panics to the browser console
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
