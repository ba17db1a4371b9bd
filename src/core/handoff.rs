//! Scroll-gated handoff from the opening track to the looping finale.
//!
//! The coordinator owns the write-once "finale started" flag and the
//! bookkeeping of which listeners are armed; the web layer only performs the
//! side effects it is told to perform.

use std::time::Duration;

/// Timing and trigger tuning for the handoff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandoffConfig {
    /// Anchor top edge must be at or above this fraction of viewport height.
    pub trigger_fraction: f64,
    /// Delay before the single retry of a rejected opening play.
    pub retry_delay: Duration,
    /// Pause between confirmed priming playback and the rewind.
    pub prime_settle: Duration,
    /// One extra check after start, for pages that load already scrolled.
    pub initial_check_delay: Duration,
    /// Start-screen fade before the main content is revealed.
    pub reveal_delay: Duration,
    /// Main-content counters begin after this delay.
    pub counter_delay: Duration,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            trigger_fraction: 0.7,
            retry_delay: Duration::from_millis(100),
            prime_settle: Duration::from_millis(50),
            initial_check_delay: Duration::from_millis(500),
            reveal_delay: Duration::from_millis(1000),
            counter_delay: Duration::from_millis(500),
        }
    }
}

impl HandoffConfig {
    /// Inclusive: an anchor exactly on the threshold triggers.
    #[inline]
    pub fn anchor_in_zone(&self, anchor_top: f64, viewport_height: f64) -> bool {
        anchor_top <= viewport_height * self.trigger_fraction
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandoffPhase {
    Idle,
    Priming,
    PlayingA,
    /// Finale requested but refused; waiting for a user gesture.
    Blocked,
    PlayingB,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDecision {
    /// Anchor not reached yet; keep listening.
    Wait,
    /// Switch now and detach the scroll listeners.
    Switch,
    /// Already switched; nothing to do.
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinaleRejection {
    /// First refusal: arm the gesture fallback.
    ArmFallback,
    /// Fallback already armed; keep waiting for the next gesture.
    KeepWaiting,
}

#[derive(Debug)]
pub struct AudioHandoff {
    config: HandoffConfig,
    phase: HandoffPhase,
    switched: bool,
    scroll_armed: bool,
    scroll_arms: u32,
    fallback_armed: bool,
    opening_retries_left: u8,
}

impl AudioHandoff {
    pub fn new(config: HandoffConfig) -> Self {
        Self {
            config,
            phase: HandoffPhase::Idle,
            switched: false,
            scroll_armed: false,
            scroll_arms: 0,
            fallback_armed: false,
            opening_retries_left: 1,
        }
    }

    #[inline]
    pub fn config(&self) -> &HandoffConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> HandoffPhase {
        self.phase
    }

    /// Start gesture received. Only the first call moves out of `Idle`.
    pub fn begin(&mut self) -> bool {
        if self.phase != HandoffPhase::Idle {
            return false;
        }
        self.phase = HandoffPhase::Priming;
        true
    }

    /// Priming finished, successfully or not; the opening track is current.
    pub fn primed(&mut self) {
        if self.phase == HandoffPhase::Priming {
            self.phase = HandoffPhase::PlayingA;
        }
    }

    /// Opening track refused to play. Yields the retry delay once.
    pub fn opening_rejected(&mut self) -> Option<Duration> {
        if self.opening_retries_left == 0 {
            return None;
        }
        self.opening_retries_left -= 1;
        Some(self.config.retry_delay)
    }

    #[inline]
    pub fn has_switched(&self) -> bool {
        self.switched
    }

    /// Flips the terminal flag. True only for the call that flipped it.
    pub fn try_switch(&mut self) -> bool {
        if self.switched {
            return false;
        }
        self.switched = true;
        self.scroll_armed = false;
        self.phase = HandoffPhase::PlayingB;
        true
    }

    /// Whether scroll listeners should be attached. Never true twice, and
    /// never after the switch.
    pub fn arm_scroll(&mut self) -> bool {
        if self.switched || self.scroll_armed || self.scroll_arms > 0 {
            return false;
        }
        self.scroll_armed = true;
        self.scroll_arms += 1;
        true
    }

    #[inline]
    pub fn scroll_armed(&self) -> bool {
        self.scroll_armed
    }

    /// Number of times scroll listeners were attached.
    #[inline]
    pub fn scroll_arms(&self) -> u32 {
        self.scroll_arms
    }

    /// Scroll, touch-move, or delayed initial check.
    pub fn on_scroll(&mut self, anchor_top: f64, viewport_height: f64) -> ScrollDecision {
        if self.switched {
            return ScrollDecision::Ignore;
        }
        if !self.config.anchor_in_zone(anchor_top, viewport_height) {
            return ScrollDecision::Wait;
        }
        if self.try_switch() {
            ScrollDecision::Switch
        } else {
            ScrollDecision::Ignore
        }
    }

    /// The finale's play request was refused.
    pub fn finale_rejected(&mut self) -> FinaleRejection {
        self.phase = HandoffPhase::Blocked;
        if self.fallback_armed {
            FinaleRejection::KeepWaiting
        } else {
            self.fallback_armed = true;
            FinaleRejection::ArmFallback
        }
    }

    /// The finale is audible. Returns true when gesture listeners must now be
    /// detached.
    pub fn finale_playing(&mut self) -> bool {
        if !self.switched {
            return false;
        }
        self.phase = HandoffPhase::PlayingB;
        std::mem::replace(&mut self.fallback_armed, false)
    }

    #[inline]
    pub fn fallback_armed(&self) -> bool {
        self.fallback_armed
    }
}

impl Default for AudioHandoff {
    fn default() -> Self {
        Self::new(HandoffConfig::default())
    }
}
