// Effect tuning shared by the pure core and the web frontend.
// Ranges are (min, max); durations are milliseconds unless suffixed otherwise.

// Glyph sets
pub const WELCOME_STAR_GLYPHS: [&str; 6] = ["★", "✦", "✧", "✩", "⭐", "✨"];
pub const SKY_STAR_GLYPHS: [&str; 10] = ["★", "✦", "✧", "✩", "✪", "✫", "✬", "✮", "✯", "⭐"];
pub const ROSE_GLYPHS: [&str; 6] = ["🌹", "🌸", "🌺", "💐", "🌷", "🏵️"];
pub const FLOATING_HEART_GLYPHS: [&str; 8] = ["💕", "💖", "💗", "💝", "❤️", "💓", "💞", "💘"];
pub const BURST_HEART_GLYPHS: [&str; 10] =
    ["💕", "💖", "💗", "💝", "❤️", "💓", "💞", "💘", "💟", "❣️"];
pub const SPARKLE_GLYPHS: [&str; 4] = ["✨", "⭐", "💫", "🌟"];
pub const FORMATION_GLYPHS: [&str; 20] = [
    "❤️", "💖", "💕", "💘", "💝", "💗", "💓", "💞", "💟", "❣️", //
    "❤️", "💖", "💕", "💘", "💝", "💗", "💓", "💞", "💟", "❣️",
];

// Palettes
pub const FIREWORK_COLORS: [&str; 6] = [
    "#ff006e", "#ffd700", "#00f0ff", "#ff6b35", "#8b5cf6", "#b4ff00",
];
pub const RAINBOW_COLORS: [&str; 5] = ["#ff006e", "#ffd700", "#00f0ff", "#ff6b35", "#8b5cf6"];

// Welcome roses (start screen)
pub const WELCOME_ROSE_INTERVAL_MS: u32 = 600;
pub const WELCOME_ROSE_PRELUDE: usize = 5; // roses spawned right away
pub const WELCOME_ROSE_PRELUDE_STAGGER_MS: u32 = 200;
pub const WELCOME_ROSE_TOP_PX: f32 = -50.0;
pub const WELCOME_ROSE_SIZE_PX: (f32, f32) = (20.0, 35.0);
pub const WELCOME_ROSE_OPACITY: f32 = 0.9;
pub const WELCOME_ROSE_FALL_MS: (f32, f32) = (8000.0, 12000.0);
pub const WELCOME_ROSE_TTL_MS: u32 = 12000;

// Falling roses (main content)
pub const FALLING_ROSE_FALL_MS: (f32, f32) = (10000.0, 14000.0);
pub const FALLING_ROSE_DELAY_MS: (f32, f32) = (0.0, 2000.0);
pub const FALLING_ROSE_TTL_MS: u32 = 16000;

// Floating hearts; TTL is the float duration plus slack
pub const FLOATING_HEART_SIZE_PX: (f32, f32) = (20.0, 35.0);
pub const FLOATING_HEART_FLOAT_MS: (f32, f32) = (8000.0, 12000.0);
pub const FLOATING_HEART_DELAY_MS: (f32, f32) = (0.0, 2000.0);
pub const FLOATING_HEART_TTL_SLACK_MS: u32 = 2000;

// Hero sparkles
pub const HERO_SPARKLE_SIZE_PX: (f32, f32) = (20.0, 40.0);
pub const HERO_SPARKLE_MS: u32 = 3000;

// Hover sparkles around a card
pub const HOVER_SPARKLE_COUNT: usize = 8;
pub const HOVER_SPARKLE_SIZE_PX: (f32, f32) = (20.0, 35.0);
pub const HOVER_SPARKLE_MS: u32 = 1500;

// Pointer heart burst
pub const BURST_SIZE_PX: (f32, f32) = (15.0, 30.0);
pub const BURST_JITTER_RAD: f32 = 0.25;
pub const BURST_RADIUS_PX: (f32, f32) = (60.0, 120.0);
pub const BURST_GRAVITY_PX: f32 = 40.0;
pub const BURST_MS: u32 = 2000;

// Fireworks
pub const FIREWORK_ORIGIN_X_PCT: (f32, f32) = (0.0, 100.0);
pub const FIREWORK_ORIGIN_Y_PCT: (f32, f32) = (0.0, 60.0);
pub const FIREWORK_SPEED_PX_PER_SEC: f32 = 100.0;
pub const FIREWORK_STEP_MS: u32 = 16;
pub const FIREWORK_STEP_SEC: f32 = 0.016;
pub const FIREWORK_FADE_PER_STEP: f32 = 0.015;
pub const FIREWORK_SPARK_PX: f32 = 8.0;

// Welcome star field, in percent of the container
pub const WELCOME_STAR_SIZE_PX: (f32, f32) = (10.0, 20.0);
pub const WELCOME_STAR_OPACITY: (f32, f32) = (0.4, 1.0);
pub const WELCOME_STAR_TWINKLE_SEC: (f32, f32) = (2.0, 4.0);
pub const WELCOME_STAR_SPEED_X: (f32, f32) = (-0.2, 0.2);
pub const WELCOME_STAR_SPEED_Y: (f32, f32) = (0.3, 0.8);
pub const WELCOME_STAR_RESET_Y: f32 = -5.0;

// Main sky stars, in CSS pixels
pub const SKY_STAR_SIZE_PX: (f32, f32) = (12.0, 22.0);
pub const SKY_STAR_OPACITY: (f32, f32) = (0.5, 1.0);
pub const SKY_STAR_SPEED_X: (f32, f32) = (-0.3, 0.3);
pub const SKY_STAR_SPEED_Y: (f32, f32) = (0.5, 1.2);
pub const SKY_STAR_RESET_Y: (f32, f32) = (-150.0, -30.0);
pub const SKY_STAR_SIDE_MARGIN_PX: f32 = 30.0;

// Meteors
pub const METEOR_INTERVAL_MS: f32 = 4000.0;
pub const METEOR_ASSUMED_FRAME_MS: f32 = 16.6;
pub const METEOR_ENTRY_X: (f32, f32) = (-150.0, -50.0);
pub const METEOR_SPEED_X: (f32, f32) = (10.0, 18.0);
pub const METEOR_SPEED_Y: (f32, f32) = (8.0, 14.0);
pub const METEOR_ANGLE_DEG: (f32, f32) = (25.0, 45.0);
pub const METEOR_EXIT_MARGIN_PX: f32 = 200.0;

// Heart-curve formation
pub const FORMATION_SCALE: f64 = 8.0;
pub const FORMATION_SPIN_DEG_PER_SEC: f64 = 180.0;
pub const FORMATION_SPIN_STAGGER_DEG: f64 = 36.0;

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_INFINITY_SENTINEL: &str = "∞";
