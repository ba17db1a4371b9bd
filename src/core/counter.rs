use super::constants::{COUNTER_DURATION_MS, COUNTER_INFINITY_SENTINEL};

/// Parsed value of a counter's `data-count` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTarget {
    Finite(i64),
    /// Displayed as-is; never animated.
    Infinite,
}

impl CounterTarget {
    /// Leading-integer parse (`"42 days"` -> 42). `None` when no digits lead.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s == COUNTER_INFINITY_SENTINEL || s.eq_ignore_ascii_case("infinity") {
            return Some(CounterTarget::Infinite);
        }
        let (sign, digits) = match s.as_bytes().first() {
            Some(b'-') => (-1, &s[1..]),
            Some(b'+') => (1, &s[1..]),
            _ => (1, s),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }
        digits[..end]
            .parse::<i64>()
            .ok()
            .map(|v| CounterTarget::Finite(sign * v))
    }
}

/// Linear count-up from zero to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: i64,
    pub duration_ms: f64,
    pub start_ms: f64,
}

impl CounterAnimation {
    /// `None` for the infinity sentinel and for unparsable attributes.
    pub fn from_attr(raw: &str, start_ms: f64) -> Option<Self> {
        match CounterTarget::parse(raw)? {
            CounterTarget::Infinite => None,
            CounterTarget::Finite(target) => Some(Self {
                target,
                duration_ms: COUNTER_DURATION_MS,
                start_ms,
            }),
        }
    }

    #[inline]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value; exactly `target` once the duration has elapsed.
    pub fn value_at(&self, now_ms: f64) -> i64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            self.target
        } else {
            (p * self.target as f64).floor() as i64
        }
    }

    #[inline]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
