use crate::constants::*;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fades cards in as they scroll into view.
pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, SEL_REVEAL_CARDS);
    if cards.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                dom::set_style(&target, "opacity", "1");
                dom::set_style(&target, "transform", "translateY(0)");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for card in &cards {
        for (property, value) in REVEAL_HIDDEN_STYLE {
            dom::set_style(card, property, value);
        }
        observer.observe(card);
    }
    log::info!("[reveal] observing {} cards", cards.len());
    Ok(())
}
