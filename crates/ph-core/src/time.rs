//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of simulated seconds since the
//! start of the run (`SimTime`).  The mapping to a time of day is held in
//! `SimClock`:
//!
//!   time_of_day = (start_time_of_day + now) mod 86 400
//!
//! Integer seconds keep dwell and departure arithmetic exact.  The clock is
//! advanced only by an explicit `advance(delta)` from the engine; it holds no
//! hidden timer of its own.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Seconds in one simulated day.
pub const SECS_PER_DAY: u32 = 86_400;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// Simulated seconds elapsed since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Seconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// `None` if adding `secs` would overflow the clock.
    #[inline]
    pub fn checked_add(self, secs: u64) -> Option<SimTime> {
        self.0.checked_add(secs).map(SimTime)
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}s", self.0)
    }
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Seconds since midnight, always `< 86 400`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from an hour/minute/second triple.  Returns `None` if any
    /// component is out of range.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(TimeOfDay(hours * 3_600 + minutes * 60 + seconds))
    }

    /// Wrap an arbitrary second count onto the 24-hour dial.
    #[inline]
    pub fn from_secs_wrapping(secs: u64) -> Self {
        TimeOfDay((secs % SECS_PER_DAY as u64) as u32)
    }

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    pub fn hms(self) -> (u32, u32, u32) {
        (self.0 / 3_600, (self.0 % 3_600) / 60, self.0 % 60)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Parse `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidTimeOfDay(s.to_owned());

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }
        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }
        TimeOfDay::from_hms(fields[0], fields[1], fields[2]).ok_or_else(invalid)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks simulated time and the pause flag.
///
/// `SimClock` holds no heap data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Time of day at `SimTime::ZERO`.
    pub start_time_of_day: TimeOfDay,
    /// Current simulated time.
    pub now: SimTime,
    /// While `true` the engine does not advance anything.
    pub paused: bool,
}

impl SimClock {
    /// Create a running clock at `SimTime::ZERO`.
    pub fn new(start_time_of_day: TimeOfDay) -> Self {
        Self {
            start_time_of_day,
            now: SimTime::ZERO,
            paused: false,
        }
    }

    /// Advance the clock by `delta_secs` simulated seconds.
    #[inline]
    pub fn advance(&mut self, delta_secs: u64) {
        self.now = self.now + delta_secs;
    }

    /// Current time of day.
    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        let day = SECS_PER_DAY as u64;
        TimeOfDay::from_secs_wrapping(self.start_time_of_day.secs() as u64 + self.now.0 % day)
    }

    /// Whole days elapsed since the start time of day.
    pub fn day(&self) -> u64 {
        let day = SECS_PER_DAY as u64;
        self.now.0 / day + (self.start_time_of_day.secs() as u64 + self.now.0 % day) / day
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Rewind to `SimTime::ZERO` and clear the pause flag.
    pub fn reset(&mut self) {
        self.now = SimTime::ZERO;
        self.paused = false;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {} {})", self.now, self.day(), self.time_of_day())
    }
}
