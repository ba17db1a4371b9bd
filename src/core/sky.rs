//! Pooled per-frame animators: star fields and meteors.
//!
//! Pools are sized once and elements are reset in place, never reallocated.
//! Every `tick` is one display refresh; velocities are per-frame deltas.

use super::constants::*;
use super::rng::RandomSource;
use glam::Vec2;

/// Size of the animated area. Welcome stars use a 100x100 percent space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const PERCENT: Viewport = Viewport {
        width: 100.0,
        height: 100.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub glyph: &'static str,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size_px: f32,
    pub opacity: f32,
    /// Set by the frame that recycled this star.
    pub recycled: bool,
}

#[inline]
fn sample(rng: &mut impl RandomSource, (min, max): (f32, f32)) -> f32 {
    rng.range_f32(min, max)
}

/// Welcome-screen stars. Percent coordinates: stars that fall past the
/// bottom re-enter at the top and the horizontal axis wraps around.
pub struct WelcomeStars {
    pub stars: Vec<Star>,
    /// Per-star twinkle period, fixed at creation.
    pub twinkle_sec: Vec<f32>,
}

impl WelcomeStars {
    pub fn new(count: usize, rng: &mut impl RandomSource) -> Self {
        let mut stars = Vec::with_capacity(count);
        let mut twinkle_sec = Vec::with_capacity(count);
        for _ in 0..count {
            stars.push(Star {
                glyph: *rng.pick(&WELCOME_STAR_GLYPHS),
                position: Vec2::new(sample(rng, (0.0, 100.0)), sample(rng, (0.0, 100.0))),
                size_px: sample(rng, WELCOME_STAR_SIZE_PX),
                opacity: sample(rng, WELCOME_STAR_OPACITY),
                velocity: Vec2::new(
                    sample(rng, WELCOME_STAR_SPEED_X),
                    sample(rng, WELCOME_STAR_SPEED_Y),
                ),
                recycled: false,
            });
            twinkle_sec.push(sample(rng, WELCOME_STAR_TWINKLE_SEC));
        }
        Self { stars, twinkle_sec }
    }

    pub fn tick(&mut self, rng: &mut impl RandomSource) {
        let bounds = Viewport::PERCENT;
        for star in &mut self.stars {
            let mut p = star.position + star.velocity;
            star.recycled = false;
            if p.y > bounds.height {
                p.y = WELCOME_STAR_RESET_Y;
                p.x = sample(rng, (0.0, bounds.width));
                star.recycled = true;
            }
            if p.x < 0.0 {
                p.x = bounds.width;
            }
            if p.x > bounds.width {
                p.x = 0.0;
            }
            star.position = p;
        }
    }
}

/// Main-content stars in CSS pixels. A star leaving the viewport is
/// recycled above the top edge with fresh parameters.
pub struct StarField {
    pub viewport: Viewport,
    pub stars: Vec<Star>,
}

impl StarField {
    pub fn new(count: usize, viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let stars = (0..count)
            .map(|_| {
                let mut star = Star {
                    glyph: *rng.pick(&SKY_STAR_GLYPHS),
                    position: Vec2::ZERO,
                    velocity: Vec2::ZERO,
                    size_px: 0.0,
                    opacity: 0.0,
                    recycled: false,
                };
                respawn(&mut star, viewport, true, rng);
                star
            })
            .collect();
        Self { viewport, stars }
    }

    #[inline]
    pub fn is_off_screen(&self, p: Vec2) -> bool {
        p.y > self.viewport.height
            || p.x < -SKY_STAR_SIDE_MARGIN_PX
            || p.x > self.viewport.width + SKY_STAR_SIDE_MARGIN_PX
    }

    pub fn tick(&mut self, rng: &mut impl RandomSource) {
        let viewport = self.viewport;
        for i in 0..self.stars.len() {
            let next = self.stars[i].position + self.stars[i].velocity;
            let off = self.is_off_screen(next);
            let star = &mut self.stars[i];
            if off {
                respawn(star, viewport, false, rng);
                star.recycled = true;
            } else {
                star.position = next;
                star.recycled = false;
            }
        }
    }
}

fn respawn(star: &mut Star, viewport: Viewport, initial: bool, rng: &mut impl RandomSource) {
    star.size_px = sample(rng, SKY_STAR_SIZE_PX);
    let x = sample(rng, (0.0, viewport.width));
    let y = if initial {
        sample(rng, (0.0, viewport.height))
    } else {
        sample(rng, SKY_STAR_RESET_Y)
    };
    star.position = Vec2::new(x, y);
    star.velocity = Vec2::new(
        sample(rng, SKY_STAR_SPEED_X),
        sample(rng, SKY_STAR_SPEED_Y),
    );
    star.opacity = sample(rng, SKY_STAR_OPACITY);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Meteor {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle_deg: f32,
    pub active: bool,
}

impl Meteor {
    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.active {
            1.0
        } else {
            0.0
        }
    }
}

/// Fixed pool of meteors; one inactive meteor launches per interval.
pub struct MeteorShower {
    pub viewport: Viewport,
    pub meteors: Vec<Meteor>,
    pub interval_ms: f32,
    timer_ms: f32,
}

impl MeteorShower {
    pub fn new(count: usize, viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let meteors = (0..count)
            .map(|_| {
                let mut m = Meteor {
                    position: Vec2::ZERO,
                    velocity: Vec2::ZERO,
                    angle_deg: 0.0,
                    active: false,
                };
                park(&mut m, viewport, rng);
                m
            })
            .collect();
        Self {
            viewport,
            meteors,
            interval_ms: METEOR_INTERVAL_MS,
            timer_ms: 0.0,
        }
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.meteors.iter().filter(|m| m.active).count()
    }

    /// Advances one frame. Returns the index of a meteor launched this frame.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> Option<usize> {
        let viewport = self.viewport;
        let mut launched = None;

        self.timer_ms += METEOR_ASSUMED_FRAME_MS;
        if self.timer_ms > self.interval_ms {
            self.timer_ms = 0.0;
            if let Some((i, m)) = self.meteors.iter_mut().enumerate().find(|(_, m)| !m.active) {
                m.active = true;
                m.position = Vec2::new(
                    sample(rng, METEOR_ENTRY_X),
                    sample(rng, (0.0, viewport.height / 3.0)),
                );
                launched = Some(i);
            }
        }

        for m in &mut self.meteors {
            if !m.active {
                continue;
            }
            m.position += m.velocity;
            if m.position.y > viewport.height
                || m.position.x > viewport.width + METEOR_EXIT_MARGIN_PX
            {
                park(m, viewport, rng);
            }
        }
        launched
    }
}

/// Deactivates a meteor and rolls the parameters for its next flight.
fn park(m: &mut Meteor, viewport: Viewport, rng: &mut impl RandomSource) {
    m.active = false;
    m.position = Vec2::new(
        sample(rng, METEOR_ENTRY_X),
        sample(rng, (0.0, viewport.height / 2.0)),
    );
    m.velocity = Vec2::new(sample(rng, METEOR_SPEED_X), sample(rng, METEOR_SPEED_Y));
    m.angle_deg = sample(rng, METEOR_ANGLE_DEG);
}
