//! Media-element side of the opening → finale handoff.
//!
//! All decisions come from [`AudioHandoff`]; this module loads, plays, primes
//! and rewinds the `<audio>` elements and wires the listeners it asks for.

use crate::constants::*;
use crate::core::{AudioHandoff, FinaleRejection, ScrollDecision};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type SharedHandoff = Rc<RefCell<AudioHandoff>>;

#[derive(Clone)]
pub struct Tracks {
    pub opening: Option<web::HtmlAudioElement>,
    pub finale: Option<web::HtmlAudioElement>,
    pub ambient: Option<web::HtmlAudioElement>,
}

fn audio_by_id(document: &web::Document, id: &str) -> Option<web::HtmlAudioElement> {
    dom::by_id(document, id).and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
}

impl Tracks {
    pub fn find(document: &web::Document) -> Self {
        Self {
            opening: audio_by_id(document, ID_TRACK_OPENING),
            finale: audio_by_id(document, ID_TRACK_FINALE),
            ambient: audio_by_id(document, ID_TRACK_AMBIENT),
        }
    }
}

/// Requests playback and waits for the platform's verdict.
async fn play(media: &web::HtmlMediaElement) -> Result<(), JsValue> {
    let promise = media.play()?;
    JsFuture::from(promise).await.map(|_| ())
}

fn restore_level(media: &web::HtmlMediaElement) {
    media.set_muted(false);
    media.set_volume(1.0);
}

/// Start gesture: loads both tracks, starts the opening one, primes the
/// finale so a later unmuted play needs no fresh gesture, and starts the
/// optional ambient track. Only the first call has any effect and returns
/// true.
pub fn unlock(tracks: &Tracks, handoff: &SharedHandoff) -> bool {
    if !handoff.borrow_mut().begin() {
        log::debug!("[audio] already unlocked");
        return false;
    }
    if let Some(a) = &tracks.opening {
        a.load();
    }
    if let Some(b) = &tracks.finale {
        b.load();
    }

    if let Some(a) = tracks.opening.clone() {
        spawn_local(play_opening(a, handoff.clone()));
    }
    match tracks.finale.clone() {
        Some(b) => spawn_local(prime_finale(b, handoff.clone())),
        None => handoff.borrow_mut().primed(),
    }
    if let Some(bg) = tracks.ambient.clone() {
        spawn_local(async move {
            if let Err(e) = play(&bg).await {
                log::info!("[audio] ambient track prevented: {:?}", e);
            }
        });
    }
    true
}

async fn play_opening(track: web::HtmlAudioElement, handoff: SharedHandoff) {
    track.set_current_time(0.0);
    restore_level(&track);
    loop {
        match play(&track).await {
            Ok(()) => {
                log::info!("[audio] opening track playing");
                return;
            }
            Err(e) => {
                let retry = handoff.borrow_mut().opening_rejected();
                match retry {
                    Some(delay) => {
                        log::warn!("[audio] opening track prevented, retrying: {:?}", e);
                        dom::sleep(delay).await;
                    }
                    None => {
                        log::warn!("[audio] opening track retry failed: {:?}", e);
                        return;
                    }
                }
            }
        }
    }
}

async fn prime_finale(track: web::HtmlAudioElement, handoff: SharedHandoff) {
    track.set_muted(true);
    track.set_volume(0.0);
    let settle = handoff.borrow().config().prime_settle;
    match play(&track).await {
        Ok(()) => {
            dom::sleep(settle).await;
            // A handoff during the settle owns the element now.
            if !handoff.borrow().has_switched() {
                _ = track.pause();
                track.set_current_time(0.0);
                restore_level(&track);
                log::info!("[audio] finale primed");
            }
        }
        Err(e) => {
            log::info!("[audio] finale priming failed, continuing unprimed: {:?}", e);
            restore_level(&track);
        }
    }
    handoff.borrow_mut().primed();
}

/// Everything the scroll check and the switch need, cheap to clone.
#[derive(Clone)]
struct HandoffWiring {
    handoff: SharedHandoff,
    anchor: web::Element,
    opening: web::HtmlAudioElement,
    finale: web::HtmlAudioElement,
    document: web::Document,
    scroll_listener: Rc<RefCell<Option<js_sys::Function>>>,
}

/// Watches the finale anchor on scroll/touch-move and hands off once.
pub fn wire_scroll_handoff(document: &web::Document, tracks: &Tracks, handoff: &SharedHandoff) {
    let anchor = dom::by_id(document, ID_FINALE_ANCHOR);
    let (Some(anchor), Some(opening), Some(finale)) =
        (anchor, tracks.opening.clone(), tracks.finale.clone())
    else {
        log::info!("[audio] handoff elements not found");
        return;
    };
    finale.set_loop(true);

    if !handoff.borrow_mut().arm_scroll() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let w = HandoffWiring {
        handoff: handoff.clone(),
        anchor,
        opening,
        finale,
        document: document.clone(),
        scroll_listener: Rc::new(RefCell::new(None)),
    };

    let w_scroll = w.clone();
    let callback = dom::listen(&window, "scroll", move |_| check(&w_scroll));
    for ev in HANDOFF_SCROLL_EVENTS {
        dom::listen_with(document, ev, &callback);
    }
    *w.scroll_listener.borrow_mut() = Some(callback);

    let delay = handoff.borrow().config().initial_check_delay;
    dom::set_timeout(delay, move || check(&w));
}

fn check(w: &HandoffWiring) {
    let top = w.anchor.get_bounding_client_rect().top();
    let viewport_height = dom::viewport().height as f64;
    let decision = w.handoff.borrow_mut().on_scroll(top, viewport_height);
    if decision == ScrollDecision::Switch {
        detach_scroll(w);
        switch_to_finale(w.clone());
    }
}

fn detach_scroll(w: &HandoffWiring) {
    let Some(callback) = w.scroll_listener.borrow_mut().take() else {
        return;
    };
    if let Some(window) = web::window() {
        dom::unlisten(&window, "scroll", &callback);
    }
    for ev in HANDOFF_SCROLL_EVENTS {
        dom::unlisten(&w.document, ev, &callback);
    }
}

fn switch_to_finale(w: HandoffWiring) {
    log::info!("[audio] switching to finale");
    _ = w.opening.pause();
    w.opening.set_current_time(0.0);

    w.finale.set_current_time(0.0);
    restore_level(&w.finale);
    spawn_local(async move {
        match play(&w.finale).await {
            Ok(()) => {
                w.handoff.borrow_mut().finale_playing();
                log::info!("[audio] finale playing");
            }
            Err(e) => {
                log::warn!("[audio] finale prevented, waiting for a gesture: {:?}", e);
                let rejection = w.handoff.borrow_mut().finale_rejected();
                if rejection == FinaleRejection::ArmFallback {
                    arm_gesture_fallback(w);
                }
            }
        }
    });
}

/// Retries the finale on the next touch/click anywhere; detaches itself once
/// playback succeeds.
fn arm_gesture_fallback(w: HandoffWiring) {
    let document = w.document.clone();
    let slot: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let slot_cb = slot.clone();
    let callback = dom::listen(&document, FALLBACK_GESTURE_EVENTS[0], move |_| {
        let w = w.clone();
        let slot = slot_cb.clone();
        spawn_local(async move {
            match play(&w.finale).await {
                Ok(()) => {
                    if w.handoff.borrow_mut().finale_playing() {
                        if let Some(f) = slot.borrow_mut().take() {
                            for ev in FALLBACK_GESTURE_EVENTS {
                                dom::unlisten(&w.document, ev, &f);
                            }
                        }
                        log::info!("[audio] finale playing after gesture");
                    }
                }
                Err(e) => {
                    w.handoff.borrow_mut().finale_rejected();
                    log::info!("[audio] finale still needs interaction: {:?}", e);
                }
            }
        });
    });
    for ev in &FALLBACK_GESTURE_EVENTS[1..] {
        dom::listen_with(&document, ev, &callback);
    }
    *slot.borrow_mut() = Some(callback);
    log::info!("[audio] tap anywhere to start the finale");
}
