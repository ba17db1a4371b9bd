use crate::constants::{PARALLAX_SPEED, SEL_PARALLAX};
use crate::dom;
use web_sys as web;

#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_SPEED
}

/// Drifts the hero content at a fraction of the scroll speed.
pub fn wire_parallax(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let win = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let scrolled = win.scroll_y().unwrap_or(0.0);
        let transform = format!("translateY({}px)", parallax_offset(scrolled));
        for el in dom::query_all(&doc, SEL_PARALLAX) {
            dom::set_style(&el, "transform", &transform);
        }
    });
}
