//! Frame-time bookkeeping.
//!
//! # Design
//!
//! The host drives every controller with a per-frame `delta_secs`.  Nothing
//! here reads a wall clock: all "suspension" in the framework is a value
//! counted down (or up) across ticks, so a run driven with the same deltas is
//! exactly reproducible.
//!
//! Accumulated `f32` deltas drift by a few ULPs over long windows, so expiry
//! is tested against [`TIME_EPSILON`] rather than exact zero.

/// Slack applied when comparing accumulated frame time against a deadline.
pub const TIME_EPSILON: f32 = 1e-5;

// ── Countdown ─────────────────────────────────────────────────────────────────

/// A timer counting down from a fixed duration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// Start a countdown of `secs` seconds.  Negative input is clamped to zero.
    #[inline]
    pub fn new(secs: f32) -> Self {
        Self { remaining: secs.max(0.0) }
    }

    /// Subtract `delta_secs` and report whether the countdown has expired.
    ///
    /// Once expired, further calls keep returning `true`.
    #[inline]
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        self.remaining = (self.remaining - delta_secs.max(0.0)).max(0.0);
        self.is_expired()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= TIME_EPSILON
    }

    /// Seconds left before expiry (never negative).
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

// ── Stopwatch ─────────────────────────────────────────────────────────────────

/// Accumulates elapsed frame time until reset.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta_secs` and return the new total.
    #[inline]
    pub fn advance(&mut self, delta_secs: f32) -> f32 {
        self.elapsed += delta_secs.max(0.0);
        self.elapsed
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// `true` once the accumulated time is strictly past `limit_secs`.
    #[inline]
    pub fn exceeds(&self, limit_secs: f32) -> bool {
        self.elapsed > limit_secs + TIME_EPSILON
    }
}
