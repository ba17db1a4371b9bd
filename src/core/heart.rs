use super::constants::{
    FORMATION_SCALE, FORMATION_SPIN_DEG_PER_SEC, FORMATION_SPIN_STAGGER_DEG,
};
use glam::DVec2;
use std::f64::consts::TAU;

/// Classic parametric heart, y flipped for screen space and scaled.
#[inline]
pub fn heart_curve(t: f64, scale: f64) -> DVec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    DVec2::new(x * scale, -y * scale)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPose {
    /// Centre of the glyph in container pixels.
    pub position: DVec2,
    pub rotation_deg: f64,
}

/// A ring of glyphs travelling around the heart curve.
///
/// Poses are a closed-form function of wall-clock time, so re-evaluating the
/// same instant always yields the same layout and nothing drifts.
#[derive(Clone, Debug)]
pub struct HeartFormation {
    pub count: usize,
    pub scale: f64,
}

impl HeartFormation {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            scale: FORMATION_SCALE,
        }
    }

    #[inline]
    pub fn base_angle(&self, index: usize) -> f64 {
        TAU * index as f64 / self.count.max(1) as f64
    }

    pub fn pose(&self, index: usize, time_sec: f64, center: DVec2) -> HeartPose {
        let t = (self.base_angle(index) + time_sec).rem_euclid(TAU);
        let rotation_deg = (time_sec * FORMATION_SPIN_DEG_PER_SEC
            + index as f64 * FORMATION_SPIN_STAGGER_DEG)
            .rem_euclid(360.0);
        HeartPose {
            position: center + heart_curve(t, self.scale),
            rotation_deg,
        }
    }

    pub fn poses(&self, time_sec: f64, center: DVec2) -> impl Iterator<Item = HeartPose> + '_ {
        (0..self.count).map(move |i| self.pose(i, time_sec, center))
    }
}
