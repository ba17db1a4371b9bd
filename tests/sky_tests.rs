// Host-side tests for the pooled star fields and the meteor shower.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::*;
use crate::core::*;

#[test]
fn welcome_stars_stay_in_percent_space() {
    let mut rng = SeededRandom::from_seed(7);
    let mut sky = WelcomeStars::new(50, &mut rng);
    assert_eq!(sky.twinkle_sec.len(), 50);
    let mut recycled = 0;
    for _ in 0..1000 {
        sky.tick(&mut rng);
        for s in &sky.stars {
            assert!((0.0..=100.0).contains(&s.position.x));
            assert!((WELCOME_STAR_RESET_Y..=100.0).contains(&s.position.y));
            if s.recycled {
                recycled += 1;
                assert_eq!(s.position.y, WELCOME_STAR_RESET_Y);
            }
        }
    }
    assert!(recycled > 0);
    assert_eq!(sky.stars.len(), 50);
}

#[test]
fn welcome_star_wraps_horizontally() {
    let mut rng = SequenceRandom::constant(0.5);
    let mut sky = WelcomeStars::new(1, &mut rng);
    sky.stars[0].position = glam::Vec2::new(0.1, 50.0);
    sky.stars[0].velocity = glam::Vec2::new(-0.2, 0.5);
    sky.tick(&mut rng);
    assert_eq!(sky.stars[0].position.x, 100.0);

    sky.stars[0].position = glam::Vec2::new(99.9, 50.0);
    sky.stars[0].velocity = glam::Vec2::new(0.2, 0.5);
    sky.tick(&mut rng);
    assert_eq!(sky.stars[0].position.x, 0.0);
}

#[test]
fn sky_stars_start_inside_the_viewport() {
    let vp = Viewport::new(1280.0, 720.0);
    let mut rng = SeededRandom::from_seed(11);
    let field = StarField::new(60, vp, &mut rng);
    for s in &field.stars {
        assert!((0.0..=vp.width).contains(&s.position.x));
        assert!((0.0..=vp.height).contains(&s.position.y));
        assert!(!s.recycled);
    }
}

#[test]
fn sky_stars_move_monotonically_then_recycle_above_the_top() {
    let vp = Viewport::new(375.0, 667.0);
    let mut rng = SeededRandom::from_seed(42);
    let mut field = StarField::new(30, vp, &mut rng);
    let mut recycled = 0;
    for _ in 0..3000 {
        let before: Vec<_> = field.stars.iter().map(|s| (s.position, s.velocity)).collect();
        field.tick(&mut rng);
        for (s, (pos, vel)) in field.stars.iter().zip(before) {
            if s.recycled {
                recycled += 1;
                assert!((0.0..=vp.width).contains(&s.position.x));
                assert!((-150.0..=-30.0).contains(&s.position.y));
                assert!(field.is_off_screen(pos + vel));
            } else {
                assert_eq!(s.position, pos + vel);
                assert!(s.position.y > pos.y);
            }
        }
    }
    assert!(recycled > 0);
    assert_eq!(field.stars.len(), 30);
}

#[test]
fn off_screen_edges() {
    let mut rng = SequenceRandom::constant(0.5);
    let field = StarField::new(0, Viewport::new(100.0, 100.0), &mut rng);
    assert!(!field.is_off_screen(glam::Vec2::new(-30.0, 100.0)));
    assert!(field.is_off_screen(glam::Vec2::new(50.0, 100.1)));
    assert!(field.is_off_screen(glam::Vec2::new(-30.1, 50.0)));
    assert!(field.is_off_screen(glam::Vec2::new(130.1, 50.0)));
}

#[test]
fn first_meteor_launches_after_one_interval() {
    let mut rng = SeededRandom::from_seed(3);
    let mut shower = MeteorShower::new(4, Viewport::new(1920.0, 1080.0), &mut rng);
    assert_eq!(shower.active_count(), 0);
    for _ in 0..240 {
        assert_eq!(shower.tick(&mut rng), None);
    }
    assert_eq!(shower.tick(&mut rng), Some(0));
    assert_eq!(shower.active_count(), 1);
}

#[test]
fn meteor_pool_never_overflows() {
    let vp = Viewport::new(1920.0, 1080.0);
    let mut rng = SeededRandom::from_seed(5);
    let mut shower = MeteorShower::new(2, vp, &mut rng);
    let mut launches = 0;
    for _ in 0..5000 {
        if shower.tick(&mut rng).is_some() {
            launches += 1;
        }
        assert!(shower.active_count() <= shower.meteors.len());
        for m in &shower.meteors {
            if !m.active {
                assert_eq!(m.opacity(), 0.0);
                assert!((-150.0..=-50.0).contains(&m.position.x));
                assert!((0.0..=vp.height / 2.0).contains(&m.position.y));
            }
        }
    }
    assert_eq!(launches, 5000 / 241);
    assert_eq!(shower.meteors.len(), 2);
}

#[test]
fn launch_is_skipped_when_pool_is_busy() {
    let mut rng = SequenceRandom::constant(0.0);
    // A tall viewport keeps the single meteor in flight across intervals.
    let mut shower = MeteorShower::new(1, Viewport::new(100_000.0, 100_000.0), &mut rng);
    let launches = (0..241 * 3).filter(|_| shower.tick(&mut rng).is_some()).count();
    assert_eq!(launches, 1);
    assert_eq!(shower.active_count(), 1);
}
