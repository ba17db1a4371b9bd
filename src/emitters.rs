//! Interval-driven and burst particle emitters.
//!
//! Emitters hold no per-element state: each spawn renders a
//! [`ParticleInstance`] into its container, registers it in the page ledger,
//! and schedules the single removal. Intervals live as long as the page.

use crate::constants::*;
use crate::core::constants::{
    FIREWORK_SPARK_PX, FIREWORK_STEP_MS, WELCOME_ROSE_INTERVAL_MS, WELCOME_ROSE_PRELUDE,
    WELCOME_ROSE_PRELUDE_STAGGER_MS,
};
use crate::core::{
    self, Coord, EffectKind, ParticleInstance, ParticleLedger, PerformanceTier, SeededRandom,
    SparkState,
};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

thread_local! {
    static RNG: RefCell<SeededRandom> = RefCell::new(SeededRandom::from_entropy());
    static LEDGER: RefCell<ParticleLedger> = RefCell::new(ParticleLedger::new());
}

/// Runs `f` with the page-wide random source.
pub fn with_rng<R>(f: impl FnOnce(&mut SeededRandom) -> R) -> R {
    RNG.with(|r| f(&mut r.borrow_mut()))
}

#[inline]
pub fn live_particles() -> usize {
    LEDGER.with(|l| l.borrow().live_count())
}

#[inline]
fn css(c: Coord) -> String {
    match c {
        Coord::Percent(v) => format!("{v}%"),
        Coord::Pixels(v) => format!("{v}px"),
    }
}

fn secs(ms: u32) -> f32 {
    ms as f32 / 1000.0
}

/// Class and inline style for one particle.
fn presentation(p: &ParticleInstance) -> (Option<&'static str>, String) {
    let mut s = format!("left:{};", css(p.left));
    if let Some(top) = p.top {
        s.push_str(&format!("top:{};", css(top)));
    }
    if p.size_px > 0.0 {
        s.push_str(&format!("font-size:{}px;", p.size_px));
    }
    if let Some(o) = p.opacity {
        s.push_str(&format!("opacity:{o};"));
    }
    if let Some(c) = p.color {
        s.push_str(&format!("color:{c};"));
    }
    let class = match p.kind {
        EffectKind::WelcomeRose => {
            s.push_str(&format!(
                "position:absolute;pointer-events:none;filter:{ROSE_GLOW};\
                 animation:fallRose {}s linear forwards;",
                secs(p.animation_ms)
            ));
            None
        }
        EffectKind::FallingRose | EffectKind::FloatingHeart => {
            s.push_str(&format!(
                "animation-duration:{}s;animation-delay:{}s;",
                secs(p.animation_ms),
                secs(p.delay_ms)
            ));
            Some(if p.kind == EffectKind::FallingRose {
                CLASS_ROSE
            } else {
                CLASS_FLOATING_HEART
            })
        }
        EffectKind::HeroSparkle => {
            s.push_str(&format!(
                "position:absolute;pointer-events:none;\
                 animation:sparkleFloat {}s ease-out forwards;",
                secs(p.animation_ms)
            ));
            None
        }
        EffectKind::HoverSparkle => {
            s.push_str(&format!(
                "position:fixed;pointer-events:none;z-index:10000;\
                 filter:drop-shadow(0 0 10px currentColor);\
                 animation:sparkleFloat {}s ease-out forwards;",
                secs(p.animation_ms)
            ));
            None
        }
        EffectKind::HeartBurst => {
            s.push_str(&format!(
                "--tx:{}px;--ty:{}px;--rot:{}deg;",
                p.offset.x, p.offset.y, p.rotation_deg
            ));
            Some(CLASS_BURST_HEART)
        }
        EffectKind::FireworkSpark => None,
    };
    (class, s)
}

/// Renders `p` into `container` and schedules its single removal.
pub fn spawn(document: &web::Document, container: &web::Element, p: &ParticleInstance) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    let (class, style) = presentation(p);
    if let Some(c) = class {
        el.set_class_name(c);
    }
    el.set_text_content(Some(p.glyph));
    _ = el.set_attribute("style", &style);
    if container.append_child(&el).is_err() {
        return;
    }
    retire_after(el, p.kind, p.ttl_ms);
}

fn retire_after(el: web::Element, kind: EffectKind, ttl_ms: u32) {
    let id = LEDGER.with(|l| l.borrow_mut().admit(kind, instant::now(), ttl_ms));
    dom::set_timeout(Duration::from_millis(ttl_ms as u64), move || {
        retire(&el, id);
    });
}

fn retire(el: &web::Element, id: core::ParticleId) {
    match LEDGER.with(|l| l.borrow_mut().release(id)) {
        Some(_) => el.remove(),
        None => log::warn!("[fx] particle {} already retired", id),
    }
}

/// Repeats `spawn_one` every `period` while the container exists.
fn every(
    period: Duration,
    container: web::Element,
    spawn_one: fn(&mut SeededRandom) -> ParticleInstance,
) {
    let Some(document) = dom::window_document() else {
        return;
    };
    dom::set_interval(period, move || {
        let p = with_rng(spawn_one);
        spawn(&document, &container, &p);
    });
}

#[inline]
fn ms(v: u32) -> Duration {
    Duration::from_millis(v as u64)
}

/// Start-screen roses: a short staggered prelude, then a steady stream.
pub fn welcome_roses(document: &web::Document) {
    let Some(container) = dom::by_id(document, ID_WELCOME_ROSES) else {
        return;
    };
    for i in 0..WELCOME_ROSE_PRELUDE {
        let doc = document.clone();
        let c = container.clone();
        dom::set_timeout(ms(i as u32 * WELCOME_ROSE_PRELUDE_STAGGER_MS), move || {
            let p = with_rng(|r| core::welcome_rose(r));
            spawn(&doc, &c, &p);
        });
    }
    every(ms(WELCOME_ROSE_INTERVAL_MS), container, |r| core::welcome_rose(r));
}

pub fn falling_roses(document: &web::Document, tier: &PerformanceTier) {
    if let Some(container) = dom::by_id(document, ID_FALLING_ROSES) {
        every(ms(tier.rose_interval_ms), container, |r| core::falling_rose(r));
    }
}

pub fn floating_hearts(document: &web::Document, tier: &PerformanceTier) {
    if let Some(container) = dom::by_id(document, ID_FLOATING_HEARTS) {
        every(ms(tier.heart_interval_ms), container, |r| core::floating_heart(r));
    }
}

pub fn hero_sparkles(document: &web::Document, tier: &PerformanceTier) {
    if let Some(container) = dom::query(document, SEL_HERO_SPARKLES) {
        every(ms(tier.sparkle_interval_ms), container, |r| core::hero_sparkle(r));
    }
}

/// Hearts thrown out from a viewport point into `document.body`.
pub fn heart_burst(document: &web::Document, origin: Vec2, count: usize) {
    let Some(body) = document.body() else {
        return;
    };
    let burst = with_rng(|r| core::heart_burst(origin, count, r));
    for p in &burst {
        spawn(document, &body, p);
    }
}

/// Rainbow sparkles over the card under the pointer.
pub fn hover_sparkles(document: &web::Document, card: &web::Element) {
    let Some(body) = document.body() else {
        return;
    };
    let r = card.get_bounding_client_rect();
    let rect = core::Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    };
    let sparkles = with_rng(|rng| core::hover_sparkles(rect, rng));
    for p in &sparkles {
        spawn(document, &body, p);
    }
}

/// Periodic explosions; each spark fades on its own 16 ms decay timer.
pub fn fireworks(document: &web::Document, tier: &PerformanceTier) {
    let Some(container) = dom::query(document, SEL_FIREWORKS) else {
        return;
    };
    let doc = document.clone();
    let sparks_per_burst = tier.firework_particles;
    dom::set_interval(ms(tier.firework_interval_ms), move || {
        let (origin, sparks) = with_rng(|r| {
            let origin = core::firework_origin(r);
            (origin, core::firework(sparks_per_burst, r))
        });
        log::debug!(
            "[fx] firework at ({:.0}%, {:.0}%), {} particles live",
            origin.x,
            origin.y,
            live_particles()
        );
        for spark in sparks {
            launch_spark(&doc, &container, origin, spark);
        }
    });
}

fn launch_spark(
    document: &web::Document,
    container: &web::Element,
    origin_pct: Vec2,
    spark: core::FireworkSpark,
) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    _ = el.set_attribute(
        "style",
        &format!(
            "position:absolute;left:{}%;top:{}%;width:{FIREWORK_SPARK_PX}px;\
             height:{FIREWORK_SPARK_PX}px;border-radius:50%;background-color:{};\
             pointer-events:none;",
            origin_pct.x, origin_pct.y, spark.color
        ),
    );
    if container.append_child(&el).is_err() {
        return;
    }
    let id = LEDGER.with(|l| {
        l.borrow_mut()
            .admit(EffectKind::FireworkSpark, instant::now(), 0)
    });
    let spark = Rc::new(RefCell::new(spark));
    let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let handle_tick = handle.clone();
    let h = dom::set_interval(ms(FIREWORK_STEP_MS), move || {
        let state = spark.borrow_mut().step();
        match state {
            SparkState::Burning { offset, opacity } => {
                let transform = format!("translate({}px, {}px)", offset.x, offset.y);
                dom::set_style(&el, "transform", &transform);
                dom::set_style(&el, "opacity", &opacity.to_string());
            }
            SparkState::BurnedOut => {
                if let Some(h) = handle_tick.borrow_mut().take() {
                    dom::clear_interval(h);
                }
                retire(&el, id);
            }
            SparkState::Spent => {}
        }
    });
    *handle.borrow_mut() = h;
}
