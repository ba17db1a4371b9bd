#![cfg(target_arch = "wasm32")]
use crate::audio::{SharedHandoff, Tracks};
use crate::constants::*;
use crate::core::{AudioHandoff, HandoffConfig, PerformanceTier};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod emitters;
mod events;
mod frame;
mod overlay;
mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bloom-web starting");

    if let Err(e) = when_dom_ready() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn when_dom_ready() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() != "loading" {
        return init();
    }
    let on_ready = Closure::once(move || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    on_ready.forget();
    Ok(())
}

/// Welcome screen: star field, roses, heart formation and the start button.
fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let tier = PerformanceTier::detect(width, &user_agent);
    log::info!(
        "[tier] {:?} (width {:.0}): {} welcome stars, {} meteors",
        tier.class,
        width,
        tier.welcome_stars,
        tier.meteor_count
    );

    dom::inject_style(&document, KEYFRAMES_CSS);
    frame::welcome_stars(&document, &tier);
    emitters::welcome_roses(&document);
    frame::heart_formation(&document);
    wire_start_button(&document, tier);
    Ok(())
}

fn wire_start_button(document: &web::Document, tier: PerformanceTier) {
    let handoff: SharedHandoff = Rc::new(RefCell::new(AudioHandoff::new(HandoffConfig::default())));
    let tracks = Tracks::find(document);
    let doc = document.clone();

    dom::add_click_listener(document, ID_START_BUTTON, move || {
        if !audio::unlock(&tracks, &handoff) {
            return;
        }
        overlay::fade_out(&doc);

        let reveal_delay = handoff.borrow().config().reveal_delay;
        let doc = doc.clone();
        let tracks = tracks.clone();
        let handoff = handoff.clone();
        dom::set_timeout(reveal_delay, move || {
            overlay::reveal_main(&doc);
            start_main_content(&doc, &tier, &tracks, &handoff);
        });
    });
}

/// Everything behind the start screen, started once the fade completes.
fn start_main_content(
    document: &web::Document,
    tier: &PerformanceTier,
    tracks: &Tracks,
    handoff: &SharedHandoff,
) {
    log::info!("[main] revealing content");
    frame::night_sky(document, tier);
    emitters::falling_roses(document, tier);
    emitters::floating_hearts(document, tier);
    emitters::hero_sparkles(document, tier);
    emitters::fireworks(document, tier);

    let counter_delay = handoff.borrow().config().counter_delay;
    frame::counters(document, counter_delay);
    if let Err(e) = reveal::wire_scroll_reveal(document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }

    audio::wire_scroll_handoff(document, tracks, handoff);
    events::wire_card_hover(document);
    events::wire_parallax(document);
    events::wire_heart_burst(document, tier);
}
