// Host-side tests for device-class detection and the performance tiers.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;

const DESKTOP_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0";
const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";

#[test]
fn narrow_phone_width_selects_reduced_counts() {
    let tier = PerformanceTier::detect(375.0, DESKTOP_UA);
    assert_eq!(tier.class, DeviceClass::Compact);
    assert_eq!(tier.welcome_stars, 25);
    assert_eq!(tier.meteor_count, 2);
}

#[test]
fn desktop_width_selects_full_counts() {
    let tier = PerformanceTier::detect(1920.0, DESKTOP_UA);
    assert_eq!(tier.class, DeviceClass::Full);
    assert_eq!(tier.welcome_stars, 50);
    assert_eq!(tier.meteor_count, 4);
}

#[test]
fn compact_width_boundary_is_inclusive() {
    assert_eq!(DeviceClass::detect(768.0, DESKTOP_UA), DeviceClass::Compact);
    assert_eq!(DeviceClass::detect(769.0, DESKTOP_UA), DeviceClass::Full);
}

#[test]
fn mobile_user_agent_forces_compact_on_wide_screens() {
    assert_eq!(DeviceClass::detect(1024.0, IPAD_UA), DeviceClass::Compact);
    assert_eq!(DeviceClass::detect(1280.0, ANDROID_UA), DeviceClass::Compact);
    assert_eq!(DeviceClass::detect(1280.0, "SOMETHING IPHONE"), DeviceClass::Compact);
}

#[test]
fn compact_tier_never_exceeds_full_tier() {
    let c = PerformanceTier::compact();
    let f = PerformanceTier::full();
    assert!(c.welcome_stars <= f.welcome_stars);
    assert!(c.main_stars <= f.main_stars);
    assert!(c.meteor_count <= f.meteor_count);
    assert!(c.heart_burst_count <= f.heart_burst_count);
    assert!(c.firework_particles <= f.firework_particles);
    // Slower emission on compact devices
    assert!(c.rose_interval_ms >= f.rose_interval_ms);
    assert!(c.heart_interval_ms >= f.heart_interval_ms);
    assert!(c.sparkle_interval_ms >= f.sparkle_interval_ms);
    assert!(c.firework_interval_ms >= f.firework_interval_ms);
}
