/// Device classes the effect budget is chosen from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Touch devices and narrow viewports.
    Compact,
    Full,
}

/// Viewports at or below this width (CSS px) are treated as compact.
pub const COMPACT_MAX_WIDTH: f64 = 768.0;

const MOBILE_AGENT_TOKENS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

impl DeviceClass {
    pub fn detect(viewport_width: f64, user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let mobile_agent = MOBILE_AGENT_TOKENS.iter().any(|t| ua.contains(t));
        if mobile_agent || viewport_width <= COMPACT_MAX_WIDTH {
            DeviceClass::Compact
        } else {
            DeviceClass::Full
        }
    }
}

/// Emitter counts and periods, fixed for the page's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerformanceTier {
    pub class: DeviceClass,
    pub welcome_stars: usize,
    pub main_stars: usize,
    pub meteor_count: usize,
    pub rose_interval_ms: u32,
    pub heart_interval_ms: u32,
    pub sparkle_interval_ms: u32,
    pub heart_burst_count: usize,
    pub firework_particles: usize,
    pub firework_interval_ms: u32,
}

impl PerformanceTier {
    pub const fn compact() -> Self {
        Self {
            class: DeviceClass::Compact,
            welcome_stars: 25,
            main_stars: 30,
            meteor_count: 2,
            rose_interval_ms: 1200,
            heart_interval_ms: 1000,
            sparkle_interval_ms: 600,
            heart_burst_count: 5,
            firework_particles: 8,
            firework_interval_ms: 3000,
        }
    }

    pub const fn full() -> Self {
        Self {
            class: DeviceClass::Full,
            welcome_stars: 50,
            main_stars: 60,
            meteor_count: 4,
            rose_interval_ms: 600,
            heart_interval_ms: 600,
            sparkle_interval_ms: 400,
            heart_burst_count: 8,
            firework_particles: 12,
            firework_interval_ms: 2000,
        }
    }

    pub const fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Compact => Self::compact(),
            DeviceClass::Full => Self::full(),
        }
    }

    #[inline]
    pub fn detect(viewport_width: f64, user_agent: &str) -> Self {
        Self::for_class(DeviceClass::detect(viewport_width, user_agent))
    }
}
