//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to simulated wall time is held in `StillClock`:
//!
//!   elapsed_mins = tick * step_mins
//!
//! Using an integer tick as the canonical time unit keeps the loop arithmetic
//! exact (no floating-point drift in the horizon bound); fractional hours are
//! derived only where the diurnal forcing needs them.
//!
//! The default step is 10 minutes.  The thermal scheme is explicit
//! first-order, so steps beyond roughly an hour start to distort the daily
//! transient; minute-scale steps are comfortably inside the stability region.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Stored as `u64`: at one tick per second a u64 lasts ~585 billion years,
/// so overflow is not a practical concern at minute-scale steps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── StillClock ────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated time-of-day.
///
/// `StillClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StillClock {
    /// Simulated minutes one tick represents.
    pub step_mins: u32,
    /// Hour of day (0..24) at tick 0.
    pub start_hour: f64,
    /// The current tick — advanced by `StillClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl StillClock {
    /// Create a clock at tick 0 with the given resolution and start hour.
    pub fn new(step_mins: u32, start_hour: f64) -> Self {
        Self {
            step_mins,
            start_hour,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated minutes since tick 0.
    #[inline]
    pub fn elapsed_mins(&self) -> u64 {
        self.current_tick.0 * self.step_mins as u64
    }

    /// Elapsed simulated hours since tick 0, fractional.
    #[inline]
    pub fn elapsed_hours(&self) -> f64 {
        self.elapsed_mins() as f64 / 60.0
    }

    /// Current hour of day in `[0, 24)` — the diurnal phase the forcing
    /// model consumes.  Wraps across midnight on multi-day horizons.
    #[inline]
    pub fn hour_of_day(&self) -> f64 {
        (self.start_hour + self.elapsed_hours()).rem_euclid(24.0)
    }

    /// Break elapsed time into (day, hour, minute) components from sim start.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total_mins = self.elapsed_mins();
        let days = total_mins / 1_440;
        let hours = ((total_mins % 1_440) / 60) as u32;
        let minutes = (total_mins % 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for StillClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, d, h, m)
    }
}
