// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

fn ordered((min, max): (f32, f32)) -> bool {
    min <= max
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    for range in [
        WELCOME_ROSE_SIZE_PX,
        WELCOME_ROSE_FALL_MS,
        FALLING_ROSE_FALL_MS,
        FALLING_ROSE_DELAY_MS,
        FLOATING_HEART_SIZE_PX,
        FLOATING_HEART_FLOAT_MS,
        FLOATING_HEART_DELAY_MS,
        HERO_SPARKLE_SIZE_PX,
        HOVER_SPARKLE_SIZE_PX,
        BURST_SIZE_PX,
        BURST_RADIUS_PX,
        FIREWORK_ORIGIN_X_PCT,
        FIREWORK_ORIGIN_Y_PCT,
        WELCOME_STAR_SIZE_PX,
        WELCOME_STAR_OPACITY,
        WELCOME_STAR_TWINKLE_SEC,
        WELCOME_STAR_SPEED_X,
        WELCOME_STAR_SPEED_Y,
        SKY_STAR_SIZE_PX,
        SKY_STAR_OPACITY,
        SKY_STAR_SPEED_X,
        SKY_STAR_SPEED_Y,
        SKY_STAR_RESET_Y,
        METEOR_ENTRY_X,
        METEOR_SPEED_X,
        METEOR_SPEED_Y,
        METEOR_ANGLE_DEG,
    ] {
        assert!(ordered(range), "{range:?}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifetimes_cover_the_longest_animation() {
    assert!(WELCOME_ROSE_TTL_MS as f32 >= WELCOME_ROSE_FALL_MS.1);
    assert!(FALLING_ROSE_TTL_MS as f32 >= FALLING_ROSE_FALL_MS.1 + FALLING_ROSE_DELAY_MS.1);
    assert!(FLOATING_HEART_TTL_SLACK_MS as f32 >= FLOATING_HEART_DELAY_MS.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stars_fall_downward_and_respawn_above() {
    assert!(WELCOME_STAR_SPEED_Y.0 > 0.0);
    assert!(SKY_STAR_SPEED_Y.0 > 0.0);
    assert!(WELCOME_STAR_RESET_Y < 0.0);
    assert!(SKY_STAR_RESET_Y.1 < 0.0);
    assert!(METEOR_ENTRY_X.1 < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn firework_decay_is_consistent() {
    assert_eq!(FIREWORK_STEP_MS as f32 / 1000.0, FIREWORK_STEP_SEC);
    assert!(FIREWORK_FADE_PER_STEP > 0.0 && FIREWORK_FADE_PER_STEP < 1.0);
    // A spark lasts roughly one second.
    let steps = (1.0 / FIREWORK_FADE_PER_STEP).ceil() as u32;
    assert!((800..=1200).contains(&(steps * FIREWORK_STEP_MS)));
}

#[test]
fn glyph_sets_are_distinct() {
    for set in [
        &WELCOME_STAR_GLYPHS[..],
        &SKY_STAR_GLYPHS[..],
        &ROSE_GLYPHS[..],
        &FLOATING_HEART_GLYPHS[..],
        &BURST_HEART_GLYPHS[..],
        &SPARKLE_GLYPHS[..],
    ] {
        assert!(!set.is_empty());
        for (i, a) in set.iter().enumerate() {
            assert!(set[i + 1..].iter().all(|b| a != b), "duplicate {a}");
        }
    }
    assert_eq!(FORMATION_GLYPHS.len(), 20);
    assert!(FIREWORK_COLORS.iter().all(|c| c.starts_with('#')));
}
