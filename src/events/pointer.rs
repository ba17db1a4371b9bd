use crate::constants::SEL_HOVER_CARDS;
use crate::core::PerformanceTier;
use crate::dom;
use crate::emitters;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Heart burst wherever the page is touched or clicked. `pointerdown` fires
/// once per press on both mouse and touch.
pub fn wire_heart_burst(document: &web::Document, tier: &PerformanceTier) {
    let count = tier.heart_burst_count;
    let doc = document.clone();
    dom::listen(document, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let origin = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        emitters::heart_burst(&doc, origin, count);
    });
}

/// Rainbow sparkles on every hover-enabled card.
pub fn wire_card_hover(document: &web::Document) {
    let cards = dom::query_all(document, SEL_HOVER_CARDS);
    log::debug!("[fx] hover sparkles on {} cards", cards.len());
    for card in cards {
        let doc = document.clone();
        let target = card.clone();
        dom::listen(&card, "mouseenter", move |_| {
            emitters::hover_sparkles(&doc, &target);
        });
    }
}
