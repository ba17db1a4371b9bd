//! Ephemeral particles: randomized spawn descriptions for every emitter, the
//! radial burst layout, firework spark decay, and the ledger that guarantees
//! each spawned element is removed exactly once.

use super::constants::*;
use super::rng::RandomSource;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    WelcomeRose,
    FallingRose,
    FloatingHeart,
    HeroSparkle,
    HoverSparkle,
    HeartBurst,
    FireworkSpark,
}

/// A single CSS coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coord {
    Percent(f32),
    Pixels(f32),
}

/// Everything needed to render one decorative element and retire it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleInstance {
    pub kind: EffectKind,
    pub glyph: &'static str,
    pub color: Option<&'static str>,
    pub left: Coord,
    /// `None` leaves vertical placement to the stylesheet.
    pub top: Option<Coord>,
    pub size_px: f32,
    pub opacity: Option<f32>,
    /// Burst displacement, exposed to CSS as `--tx`/`--ty`.
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub animation_ms: u32,
    pub delay_ms: u32,
    pub ttl_ms: u32,
}

impl ParticleInstance {
    /// Time from insertion until the CSS animation has fully played.
    #[inline]
    pub fn animation_end_ms(&self) -> u32 {
        self.animation_ms + self.delay_ms
    }
}

#[inline]
fn sample(rng: &mut impl RandomSource, (min, max): (f32, f32)) -> f32 {
    rng.range_f32(min, max)
}

#[inline]
fn ms(v: f32) -> u32 {
    v.max(0.0).round() as u32
}

fn blank(kind: EffectKind, glyph: &'static str) -> ParticleInstance {
    ParticleInstance {
        kind,
        glyph,
        color: None,
        left: Coord::Percent(0.0),
        top: None,
        size_px: 0.0,
        opacity: None,
        offset: Vec2::ZERO,
        rotation_deg: 0.0,
        animation_ms: 0,
        delay_ms: 0,
        ttl_ms: 0,
    }
}

pub fn welcome_rose(rng: &mut impl RandomSource) -> ParticleInstance {
    let mut p = blank(EffectKind::WelcomeRose, *rng.pick(&ROSE_GLYPHS));
    p.left = Coord::Percent(sample(rng, (0.0, 100.0)));
    p.top = Some(Coord::Pixels(WELCOME_ROSE_TOP_PX));
    p.size_px = sample(rng, WELCOME_ROSE_SIZE_PX);
    p.opacity = Some(WELCOME_ROSE_OPACITY);
    p.animation_ms = ms(sample(rng, WELCOME_ROSE_FALL_MS));
    p.ttl_ms = WELCOME_ROSE_TTL_MS;
    p
}

pub fn falling_rose(rng: &mut impl RandomSource) -> ParticleInstance {
    let mut p = blank(EffectKind::FallingRose, *rng.pick(&ROSE_GLYPHS));
    p.left = Coord::Percent(sample(rng, (0.0, 100.0)));
    p.animation_ms = ms(sample(rng, FALLING_ROSE_FALL_MS));
    p.delay_ms = ms(sample(rng, FALLING_ROSE_DELAY_MS));
    p.ttl_ms = FALLING_ROSE_TTL_MS;
    p
}

pub fn floating_heart(rng: &mut impl RandomSource) -> ParticleInstance {
    let mut p = blank(EffectKind::FloatingHeart, *rng.pick(&FLOATING_HEART_GLYPHS));
    p.left = Coord::Percent(sample(rng, (0.0, 100.0)));
    p.size_px = sample(rng, FLOATING_HEART_SIZE_PX);
    p.animation_ms = ms(sample(rng, FLOATING_HEART_FLOAT_MS));
    p.delay_ms = ms(sample(rng, FLOATING_HEART_DELAY_MS));
    p.ttl_ms = p.animation_ms + FLOATING_HEART_TTL_SLACK_MS;
    p
}

pub fn hero_sparkle(rng: &mut impl RandomSource) -> ParticleInstance {
    let mut p = blank(EffectKind::HeroSparkle, *rng.pick(&SPARKLE_GLYPHS));
    p.left = Coord::Percent(sample(rng, (0.0, 100.0)));
    p.top = Some(Coord::Percent(sample(rng, (0.0, 100.0))));
    p.size_px = sample(rng, HERO_SPARKLE_SIZE_PX);
    p.animation_ms = HERO_SPARKLE_MS;
    p.ttl_ms = HERO_SPARKLE_MS;
    p
}

/// Axis-aligned box in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Eight coloured sparkles scattered inside a hovered card.
pub fn hover_sparkles(
    card: Rect,
    rng: &mut impl RandomSource,
) -> SmallVec<[ParticleInstance; HOVER_SPARKLE_COUNT]> {
    (0..HOVER_SPARKLE_COUNT)
        .map(|_| {
            let mut p = blank(EffectKind::HoverSparkle, *rng.pick(&SPARKLE_GLYPHS));
            p.left = Coord::Pixels(card.left + rng.range_f32(0.0, card.width));
            p.top = Some(Coord::Pixels(card.top + rng.range_f32(0.0, card.height)));
            p.size_px = sample(rng, HOVER_SPARKLE_SIZE_PX);
            p.color = Some(*rng.pick(&RAINBOW_COLORS));
            p.animation_ms = HOVER_SPARKLE_MS;
            p.ttl_ms = HOVER_SPARKLE_MS;
            p
        })
        .collect()
}

/// Radial layout shared by the burst-style emitters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstShape {
    /// Symmetric random jitter added to each member's angle.
    pub jitter_rad: f32,
    pub radius: (f32, f32),
    /// Added to the downward (positive y) component.
    pub gravity_bias: f32,
}

pub const HEART_BURST_SHAPE: BurstShape = BurstShape {
    jitter_rad: BURST_JITTER_RAD,
    radius: BURST_RADIUS_PX,
    gravity_bias: BURST_GRAVITY_PX,
};

pub const FIREWORK_SHAPE: BurstShape = BurstShape {
    jitter_rad: 0.0,
    radius: (FIREWORK_SPEED_PX_PER_SEC, FIREWORK_SPEED_PX_PER_SEC),
    gravity_bias: 0.0,
};

/// Displacement of burst member `index` out of `count`.
pub fn radial_offset(
    index: usize,
    count: usize,
    shape: &BurstShape,
    rng: &mut impl RandomSource,
) -> Vec2 {
    let base = TAU * index as f32 / count.max(1) as f32;
    let jitter = if shape.jitter_rad > 0.0 {
        rng.range_f32(-shape.jitter_rad, shape.jitter_rad)
    } else {
        0.0
    };
    let angle = base + jitter;
    let radius = if shape.radius.0 < shape.radius.1 {
        sample(rng, shape.radius)
    } else {
        shape.radius.0
    };
    Vec2::new(angle.cos() * radius, angle.sin() * radius + shape.gravity_bias)
}

pub type Burst = SmallVec<[ParticleInstance; 12]>;

/// Hearts thrown out from a pointer-down at `origin` (viewport pixels).
pub fn heart_burst(origin: Vec2, count: usize, rng: &mut impl RandomSource) -> Burst {
    (0..count)
        .map(|i| {
            let mut p = blank(EffectKind::HeartBurst, *rng.pick(&BURST_HEART_GLYPHS));
            p.left = Coord::Pixels(origin.x);
            p.top = Some(Coord::Pixels(origin.y));
            p.size_px = sample(rng, BURST_SIZE_PX);
            p.offset = radial_offset(i, count, &HEART_BURST_SHAPE, rng);
            p.rotation_deg = rng.range_f32(0.0, 360.0);
            p.animation_ms = BURST_MS;
            p.ttl_ms = BURST_MS;
            p
        })
        .collect()
}

/// Explosion centre in percent of the fireworks region.
pub fn firework_origin(rng: &mut impl RandomSource) -> Vec2 {
    Vec2::new(
        sample(rng, FIREWORK_ORIGIN_X_PCT),
        sample(rng, FIREWORK_ORIGIN_Y_PCT),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SparkState {
    Burning { offset: Vec2, opacity: f32 },
    /// Reported exactly once; the element must be removed now.
    BurnedOut,
    /// Already removed; further steps are inert.
    Spent,
}

/// One firework particle, advanced by a fixed-period decay loop rather than a
/// CSS animation.
#[derive(Clone, Debug, PartialEq)]
pub struct FireworkSpark {
    pub color: &'static str,
    pub velocity: Vec2,
    pub offset: Vec2,
    pub opacity: f32,
    spent: bool,
}

impl FireworkSpark {
    pub fn step(&mut self) -> SparkState {
        if self.spent {
            return SparkState::Spent;
        }
        self.offset += self.velocity * FIREWORK_STEP_SEC;
        self.opacity -= FIREWORK_FADE_PER_STEP;
        if self.opacity <= 0.0 {
            self.spent = true;
            SparkState::BurnedOut
        } else {
            SparkState::Burning {
                offset: self.offset,
                opacity: self.opacity,
            }
        }
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.spent
    }
}

pub fn firework(count: usize, rng: &mut impl RandomSource) -> SmallVec<[FireworkSpark; 12]> {
    (0..count)
        .map(|i| FireworkSpark {
            color: *rng.pick(&FIREWORK_COLORS),
            velocity: radial_offset(i, count, &FIREWORK_SHAPE, rng),
            offset: Vec2::ZERO,
            opacity: 1.0,
            spent: false,
        })
        .collect()
}

pub type ParticleId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveParticle {
    pub kind: EffectKind,
    pub spawned_ms: f64,
    pub ttl_ms: u32,
}

/// Tracks every element currently on the page so removal happens once.
#[derive(Default, Debug)]
pub struct ParticleLedger {
    next_id: ParticleId,
    live: FnvHashMap<ParticleId, LiveParticle>,
}

impl ParticleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, kind: EffectKind, now_ms: f64, ttl_ms: u32) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(
            id,
            LiveParticle {
                kind,
                spawned_ms: now_ms,
                ttl_ms,
            },
        );
        id
    }

    /// Returns the record the first time an id is released and `None` on any
    /// repeat, so callers only detach the element when this is `Some`.
    pub fn release(&mut self, id: ParticleId) -> Option<LiveParticle> {
        self.live.remove(&id)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_of(&self, kind: EffectKind) -> usize {
        self.live.values().filter(|p| p.kind == kind).count()
    }
}
