//! Simulation observer trait for progress reporting and data collection.

use ph_core::{SimClock, SimTime};
use ph_fleet::{Fleet, Transition};
use ph_network::Network;

/// Callbacks invoked by [`Engine`][crate::Engine] at key points of a step.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: transition printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_transition(&mut self, t: &Transition) {
///         println!("{}: {} -> {}", t.vehicle, t.from, t.to);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after validation and before the clock advances.
    fn on_step_start(&mut self, _step: u64, _now: SimTime) {}

    /// Called for every vehicle state change, in evaluation order.
    fn on_transition(&mut self, _transition: &Transition) {}

    /// Called once every vehicle has been evaluated.
    fn on_step_end(&mut self, _step: u64, _now: SimTime, _transitions: usize) {}

    /// Called every `config.snapshot_interval_steps` steps with read-only
    /// access to the full state, so writers can record it without the
    /// engine knowing any output format.
    fn on_snapshot(
        &mut self,
        _step:    u64,
        _clock:   &SimClock,
        _network: &Network,
        _fleet:   &Fleet,
    ) {}

    /// Called after a reset has been applied.
    fn on_reset(&mut self) {}

    /// Called once when [`Engine::run_steps`][crate::Engine::run_steps]
    /// finishes.
    fn on_run_end(&mut self, _final_step: u64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
