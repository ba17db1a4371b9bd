// DOM anchors and presentation tuning for the web frontend.
// Every anchor is optional; a missing one disables only its component.

// Start screen
pub const ID_WELCOME_STARS: &str = "welcomeStars";
pub const ID_WELCOME_ROSES: &str = "welcomeRoses";
pub const ID_HEART_FORMATION: &str = "heartAnimationContainer";
pub const ID_START_BUTTON: &str = "startBtn";
pub const ID_START_SCREEN: &str = "startScreen";
pub const ID_MAIN_CONTENT: &str = "mainContent";

// Audio
pub const ID_TRACK_OPENING: &str = "scrollAudio1";
pub const ID_TRACK_FINALE: &str = "scrollAudio2";
pub const ID_TRACK_AMBIENT: &str = "bgMusic";
pub const ID_FINALE_ANCHOR: &str = "foreverYoursCard";

// Main content layers
pub const ID_STARS_LAYER: &str = "starsLayer";
pub const ID_FALLING_ROSES: &str = "fallingRoses";
pub const ID_FLOATING_HEARTS: &str = "floatingHearts";
pub const SEL_HERO_SPARKLES: &str = ".hero-sparkles";
pub const SEL_FIREWORKS: &str = ".fireworks-container";
pub const SEL_PARALLAX: &str = ".hero-content";
pub const SEL_COUNTERS: &str = ".counter-number";
pub const ATTR_COUNT: &str = "data-count";

pub const SEL_REVEAL_CARDS: &str =
    ".photo-card, .message-card, .advice-card, .wish-card, .quote-card, .counter-card";
pub const SEL_HOVER_CARDS: &str = ".message-card, .advice-card, .photo-card, .quote-card";

// Element classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_WELCOME_STAR: &str = "welcome-star";
pub const CLASS_SKY_STAR: &str = "star";
pub const CLASS_METEOR: &str = "meteor";
pub const CLASS_FORMATION_HEART: &str = "heart-emoji";
pub const CLASS_ROSE: &str = "rose";
pub const CLASS_FLOATING_HEART: &str = "floating-heart";
pub const CLASS_BURST_HEART: &str = "burst-heart";

// Start screen fade
pub const START_FADE_TRANSITION: &str = "opacity 1s ease";

// Scroll effects
pub const PARALLAX_SPEED: f64 = 0.3;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.8s ease, transform 0.8s ease"),
];

// Finale gesture fallback
pub const FALLBACK_GESTURE_EVENTS: [&str; 3] = ["touchstart", "touchend", "click"];
pub const HANDOFF_SCROLL_EVENTS: [&str; 2] = ["scroll", "touchmove"];

pub const STAR_GLOW: &str = "0 0 10px rgba(255,255,255,0.8), 0 0 20px rgba(255,215,0,0.5)";
pub const ROSE_GLOW: &str = "drop-shadow(0 0 5px rgba(255, 105, 180, 0.8))";

pub const KEYFRAMES_CSS: &str = r#"
    @keyframes sparkleFloat {
        0% { opacity: 1; transform: translateY(0) scale(0); }
        50% { opacity: 1; transform: translateY(-50px) scale(1); }
        100% { opacity: 0; transform: translateY(-100px) scale(0); }
    }
    @keyframes twinkle {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.3; }
    }
"#;
