//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, TimeOfDay};

/// Distance a vehicle covers per step, in map units.
pub const DEFAULT_SPEED: f32 = 2.0;

/// Minimum simulated wait at the hub before a vehicle heads home.
pub const DEFAULT_DWELL_SECS: u64 = 30;

/// Simulated seconds per external driver tick.
pub const DEFAULT_STEP_SECS: u64 = 60;

/// Simulation configuration.
///
/// Typically loaded from a JSON file by the driver and passed to the engine
/// builder.  `SimConfig::default()` reproduces the reference constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Units a vehicle moves per step.  Must be positive and finite.
    pub speed: f32,

    /// Dwell time at the hub, in simulated seconds.
    pub dwell_secs: u64,

    /// Simulated seconds the driver advances per tick.  Not used by the
    /// engine itself; `Engine::step` takes an explicit delta.
    pub step_secs: u64,

    /// Time of day at the start of the run.
    pub start_time_of_day: TimeOfDay,

    /// Seed for random package generation.  The same seed always produces
    /// the same packages.
    pub seed: u64,

    /// Notify observers with a snapshot every N steps.  0 disables snapshots.
    pub snapshot_interval_steps: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            speed:                   DEFAULT_SPEED,
            dwell_secs:              DEFAULT_DWELL_SECS,
            step_secs:               DEFAULT_STEP_SECS,
            start_time_of_day:       TimeOfDay::MIDNIGHT,
            seed:                    42,
            snapshot_interval_steps: 1,
        }
    }
}

impl SimConfig {
    /// Reject values that would stall or break the motion rule.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(CoreError::Config(format!(
                "speed must be positive and finite, got {}",
                self.speed
            )));
        }
        if self.step_secs == 0 {
            return Err(CoreError::Config("step_secs must be at least 1".into()));
        }
        Ok(())
    }
}
