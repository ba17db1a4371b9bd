use crate::constants::*;
use crate::core::constants::FORMATION_GLYPHS;
use crate::core::{
    CounterAnimation, HeartFormation, MeteorShower, PerformanceTier, StarField, Viewport,
    WelcomeStars,
};
use crate::dom;
use crate::emitters::with_rng;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Something redrawn once per display refresh.
pub trait Animator {
    fn frame(&mut self, now_ms: f64) -> LoopControl;
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &FrameSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Self-rearming requestAnimationFrame loop. Runs until the animator stops
/// it, which the page-lifetime animators never do.
pub fn start_loop(animator: impl Animator + 'static) {
    let mut animator = animator;
    let tick: FrameSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if animator.frame(instant::now()) == LoopControl::Stop {
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn create_child(
    document: &web::Document,
    container: &web::Element,
    class: &str,
    text: Option<&str>,
    style: &str,
) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    if text.is_some() {
        el.set_text_content(text);
    }
    _ = el.set_attribute("style", style);
    container.append_child(&el).ok()?;
    Some(el)
}

// ---------------- Welcome stars ----------------

struct WelcomeSky {
    field: WelcomeStars,
    elements: Vec<web::Element>,
}

impl Animator for WelcomeSky {
    fn frame(&mut self, _now_ms: f64) -> LoopControl {
        with_rng(|r| self.field.tick(r));
        for (star, el) in self.field.stars.iter().zip(&self.elements) {
            dom::set_style(el, "top", &format!("{}%", star.position.y));
            dom::set_style(el, "left", &format!("{}%", star.position.x));
        }
        LoopControl::Continue
    }
}

pub fn welcome_stars(document: &web::Document, tier: &PerformanceTier) {
    let Some(container) = dom::by_id(document, ID_WELCOME_STARS) else {
        return;
    };
    let field = with_rng(|r| WelcomeStars::new(tier.welcome_stars, r));
    let elements = field
        .stars
        .iter()
        .zip(&field.twinkle_sec)
        .filter_map(|(s, twinkle)| {
            let style = format!(
                "position:absolute;left:{}%;top:{}%;font-size:{}px;color:white;opacity:{};\
                 text-shadow:{STAR_GLOW};animation:twinkle {}s ease infinite;pointer-events:none;",
                s.position.x, s.position.y, s.size_px, s.opacity, twinkle
            );
            create_child(document, &container, CLASS_WELCOME_STAR, Some(s.glyph), &style)
        })
        .collect::<Vec<_>>();
    if elements.len() != field.stars.len() {
        log::warn!("[stars] welcome layer incomplete, not animating");
        return;
    }
    log::info!("[stars] welcome field: {} stars", elements.len());
    start_loop(WelcomeSky { field, elements });
}

// ---------------- Night sky: stars + meteors ----------------

struct NightSky {
    stars: StarField,
    star_elements: Vec<web::Element>,
    meteors: MeteorShower,
    meteor_elements: Vec<web::Element>,
}

impl Animator for NightSky {
    fn frame(&mut self, _now_ms: f64) -> LoopControl {
        let launched = with_rng(|r| {
            self.stars.tick(r);
            self.meteors.tick(r)
        });
        for (star, el) in self.stars.stars.iter().zip(&self.star_elements) {
            dom::set_style(el, "top", &format!("{}px", star.position.y));
            dom::set_style(el, "left", &format!("{}px", star.position.x));
            if star.recycled {
                dom::set_style(el, "font-size", &format!("{}px", star.size_px));
                dom::set_style(el, "opacity", &star.opacity.to_string());
            }
        }
        if let Some(i) = launched {
            log::debug!("[meteor] launch #{}", i);
        }
        for (m, el) in self.meteors.meteors.iter().zip(&self.meteor_elements) {
            dom::set_style(el, "top", &format!("{}px", m.position.y));
            dom::set_style(el, "left", &format!("{}px", m.position.x));
            dom::set_style(el, "opacity", &m.opacity().to_string());
            dom::set_style(el, "transform", &format!("rotate({}deg)", m.angle_deg));
        }
        LoopControl::Continue
    }
}

pub fn night_sky(document: &web::Document, tier: &PerformanceTier) {
    let Some(container) = dom::by_id(document, ID_STARS_LAYER) else {
        return;
    };
    let viewport: Viewport = dom::viewport();
    let (stars, meteors) = with_rng(|r| {
        (
            StarField::new(tier.main_stars, viewport, r),
            MeteorShower::new(tier.meteor_count, viewport, r),
        )
    });
    let star_elements = stars
        .stars
        .iter()
        .filter_map(|s| {
            let style = format!(
                "left:{}px;top:{}px;font-size:{}px;opacity:{};",
                s.position.x, s.position.y, s.size_px, s.opacity
            );
            create_child(document, &container, CLASS_SKY_STAR, Some(s.glyph), &style)
        })
        .collect::<Vec<_>>();
    let meteor_elements = meteors
        .meteors
        .iter()
        .filter_map(|m| {
            let style = format!(
                "left:{}px;top:{}px;opacity:0;transform:rotate({}deg);",
                m.position.x, m.position.y, m.angle_deg
            );
            create_child(document, &container, CLASS_METEOR, None, &style)
        })
        .collect::<Vec<_>>();
    if star_elements.len() != stars.stars.len() || meteor_elements.len() != meteors.meteors.len() {
        log::warn!("[stars] night sky incomplete, not animating");
        return;
    }
    log::info!(
        "[stars] night sky: {} stars, {} meteors ({:.0}x{:.0})",
        star_elements.len(),
        meteor_elements.len(),
        viewport.width,
        viewport.height
    );
    start_loop(NightSky {
        stars,
        star_elements,
        meteors,
        meteor_elements,
    });
}

// ---------------- Heart-curve formation ----------------

struct HeartRing {
    formation: HeartFormation,
    container: web::HtmlElement,
    elements: Vec<web::Element>,
}

impl Animator for HeartRing {
    fn frame(&mut self, now_ms: f64) -> LoopControl {
        let time_sec = now_ms / 1000.0;
        let center = DVec2::new(
            self.container.offset_width() as f64 / 2.0,
            self.container.offset_height() as f64 / 2.0,
        );
        for (pose, el) in self.formation.poses(time_sec, center).zip(&self.elements) {
            dom::set_style(
                el,
                "transform",
                &format!(
                    "translate({}px, {}px) translate(-50%, -50%) rotate({}deg)",
                    pose.position.x, pose.position.y, pose.rotation_deg
                ),
            );
        }
        LoopControl::Continue
    }
}

pub fn heart_formation(document: &web::Document) {
    let Some(anchor) = dom::by_id(document, ID_HEART_FORMATION) else {
        return;
    };
    let Ok(container) = anchor.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let elements = FORMATION_GLYPHS
        .iter()
        .filter_map(|g| create_child(document, &container, CLASS_FORMATION_HEART, Some(*g), ""))
        .collect::<Vec<_>>();
    let formation = HeartFormation::new(elements.len());
    start_loop(HeartRing {
        formation,
        container,
        elements,
    });
}

// ---------------- Counters ----------------

struct CounterRun {
    animation: CounterAnimation,
    element: web::Element,
    shown: Option<i64>,
}

impl Animator for CounterRun {
    fn frame(&mut self, now_ms: f64) -> LoopControl {
        let value = self.animation.value_at(now_ms);
        if self.shown != Some(value) {
            self.element.set_text_content(Some(&value.to_string()));
            self.shown = Some(value);
        }
        if self.animation.is_finished(now_ms) {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }
}

/// Counts every `.counter-number` up to its `data-count` after `delay`.
pub fn counters(document: &web::Document, delay: Duration) {
    for element in dom::query_all(document, SEL_COUNTERS) {
        let raw = element.get_attribute(ATTR_COUNT).unwrap_or_default();
        dom::set_timeout(delay, move || {
            match CounterAnimation::from_attr(&raw, instant::now()) {
                Some(animation) => start_loop(CounterRun {
                    animation,
                    element,
                    shown: None,
                }),
                None => log::debug!("[counter] '{}' left static", raw),
            }
        });
    }
}
