// Host-side tests for particle spawning, burst layout and lifecycle.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::*;
use crate::core::*;
use glam::Vec2;
use std::f32::consts::TAU;

#[test]
fn every_particle_outlives_its_animation() {
    let mut rng = SeededRandom::from_seed(2024);
    let card = Rect {
        left: 10.0,
        top: 20.0,
        width: 300.0,
        height: 200.0,
    };
    for _ in 0..500 {
        let mut all = vec![
            welcome_rose(&mut rng),
            falling_rose(&mut rng),
            floating_heart(&mut rng),
            hero_sparkle(&mut rng),
        ];
        all.extend(hover_sparkles(card, &mut rng));
        all.extend(heart_burst(Vec2::new(50.0, 50.0), 8, &mut rng));
        for p in &all {
            assert!(
                p.ttl_ms >= p.animation_end_ms(),
                "{:?}: ttl {} < {}",
                p.kind,
                p.ttl_ms,
                p.animation_end_ms()
            );
        }
    }
}

#[test]
fn extremes_of_random_ranges_still_fit_ttl() {
    for sample in [0.0, 1.0] {
        let mut rng = SequenceRandom::constant(sample);
        for p in [
            welcome_rose(&mut rng),
            falling_rose(&mut rng),
            floating_heart(&mut rng),
        ] {
            assert!(p.ttl_ms >= p.animation_end_ms());
        }
    }
}

#[test]
fn welcome_rose_enters_above_the_screen() {
    let mut rng = SequenceRandom::constant(0.5);
    let p = welcome_rose(&mut rng);
    assert_eq!(p.kind, EffectKind::WelcomeRose);
    assert_eq!(p.top, Some(Coord::Pixels(-50.0)));
    assert_eq!(p.left, Coord::Percent(50.0));
    assert_eq!(p.opacity, Some(0.9));
    assert_eq!(p.animation_ms, 10000);
}

#[test]
fn hover_sparkles_land_inside_the_card() {
    let mut rng = SeededRandom::from_seed(9);
    let card = Rect {
        left: 100.0,
        top: 400.0,
        width: 250.0,
        height: 120.0,
    };
    let sparkles = hover_sparkles(card, &mut rng);
    assert_eq!(sparkles.len(), HOVER_SPARKLE_COUNT);
    for p in &sparkles {
        let (Coord::Pixels(x), Some(Coord::Pixels(y))) = (p.left, p.top) else {
            panic!("hover sparkles use pixel coordinates");
        };
        assert!((100.0..=350.0).contains(&x));
        assert!((400.0..=520.0).contains(&y));
        assert!(p.color.is_some_and(|c| RAINBOW_COLORS.contains(&c)));
    }
}

#[test]
fn heart_burst_spreads_radially_with_downward_bias() {
    // 0.5 means zero jitter and the mid radius.
    let mut rng = SequenceRandom::constant(0.5);
    let origin = Vec2::new(200.0, 300.0);
    let burst = heart_burst(origin, 8, &mut rng);
    assert_eq!(burst.len(), 8);

    let mut mean = Vec2::ZERO;
    for (i, p) in burst.iter().enumerate() {
        let angle = TAU * i as f32 / 8.0;
        let expected = Vec2::new(angle.cos() * 90.0, angle.sin() * 90.0 + 40.0);
        assert!((p.offset - expected).length() < 1e-3, "member {i}");
        assert_eq!(p.left, Coord::Pixels(200.0));
        assert_eq!(p.top, Some(Coord::Pixels(300.0)));
        mean += p.offset;
    }
    mean /= 8.0;
    assert!(mean.x.abs() < 1e-3);
    assert!((mean.y - 40.0).abs() < 1e-3);
}

#[test]
fn burst_radius_respects_bounds() {
    let mut rng = SeededRandom::from_seed(77);
    for _ in 0..200 {
        for i in 0..5 {
            let v = radial_offset(i, 5, &HEART_BURST_SHAPE, &mut rng);
            let r = (v - Vec2::new(0.0, 40.0)).length();
            assert!((60.0 - 1e-3..=120.0 + 1e-3).contains(&r));
        }
    }
}

#[test]
fn firework_sparks_fly_at_constant_speed() {
    let mut rng = SeededRandom::from_seed(1);
    let sparks = firework(12, &mut rng);
    assert_eq!(sparks.len(), 12);
    for s in &sparks {
        assert!((s.velocity.length() - 100.0).abs() < 1e-3);
        assert_eq!(s.opacity, 1.0);
        assert!(FIREWORK_COLORS.contains(&s.color));
    }
}

#[test]
fn firework_spark_burns_out_exactly_once() {
    let mut rng = SequenceRandom::constant(0.0);
    let mut spark = firework(1, &mut rng).remove(0);
    let mut burning = 0;
    let mut burned_out = 0;
    let mut last_opacity = 1.0;
    for _ in 0..200 {
        match spark.step() {
            SparkState::Burning { opacity, offset } => {
                assert_eq!(burned_out, 0);
                assert!(opacity < last_opacity);
                assert!(offset.x > 0.0);
                last_opacity = opacity;
                burning += 1;
            }
            SparkState::BurnedOut => burned_out += 1,
            SparkState::Spent => assert_eq!(burned_out, 1),
        }
    }
    assert_eq!(burned_out, 1);
    assert!((65..=67).contains(&burning));
    assert!(spark.is_spent());
}

#[test]
fn firework_origin_stays_in_upper_region() {
    let mut rng = SeededRandom::from_seed(8);
    for _ in 0..100 {
        let o = firework_origin(&mut rng);
        assert!((0.0..=100.0).contains(&o.x));
        assert!((0.0..=60.0).contains(&o.y));
    }
}

#[test]
fn ledger_releases_each_particle_once() {
    let mut ledger = ParticleLedger::new();
    let a = ledger.admit(EffectKind::FallingRose, 0.0, 16000);
    let b = ledger.admit(EffectKind::HeartBurst, 10.0, 2000);
    let c = ledger.admit(EffectKind::HeartBurst, 20.0, 2000);
    assert_ne!(a, b);
    assert_eq!(ledger.live_count(), 3);
    assert_eq!(ledger.live_of(EffectKind::HeartBurst), 2);

    let released = ledger.release(b).expect("first release");
    assert_eq!(released.kind, EffectKind::HeartBurst);
    assert_eq!(released.ttl_ms, 2000);
    assert!(ledger.release(b).is_none());
    assert_eq!(ledger.live_count(), 2);

    assert!(ledger.release(a).is_some());
    assert!(ledger.release(c).is_some());
    assert_eq!(ledger.live_count(), 0);
}

#[test]
fn sequence_random_clamps_and_cycles() {
    let mut rng = SequenceRandom::new(vec![1.0, 0.25]);
    assert_eq!(*rng.pick(&["a", "b", "c", "d"]), "d");
    assert_eq!(*rng.pick(&["a", "b", "c", "d"]), "b");
    assert_eq!(*rng.pick(&["a", "b", "c", "d"]), "d");
    let mut empty = SequenceRandom::new(Vec::new());
    assert_eq!(empty.next_unit(), 0.0);
}
