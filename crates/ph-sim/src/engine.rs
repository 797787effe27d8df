//! The `Engine` struct: command surface, read surface, and the step.

use tracing::{debug, info, warn};

use ph_core::{PackageId, SimClock, SimConfig, SimTime, StationId, TimeOfDay, VehicleId};
use ph_fleet::{Fleet, StepContext, Vehicle};
use ph_network::{Hub, Network, Package, Station};

use crate::{NoopObserver, SimError, SimObserver, SimResult};

/// What one call to [`Engine::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepSummary {
    /// Steps applied since start or the last reset.
    pub step: u64,
    pub now: SimTime,
    /// Vehicle state changes made during the step.
    pub transitions: usize,
    /// `true` if the engine was paused and nothing changed.
    pub paused: bool,
}

/// The simulation engine.
///
/// `Engine` owns every piece of mutable state: the clock, the network of
/// stations and the hub, and the fleet.  All mutation goes through its
/// methods, each of which validates its input before touching anything, so
/// a rejected command leaves the state unchanged.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine {
    pub(crate) config: SimConfig,
    pub(crate) clock: SimClock,
    pub(crate) network: Network,
    pub(crate) fleet: Fleet,
    pub(crate) step_count: u64,
}

impl Engine {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the simulation by `delta_secs` simulated seconds.
    pub fn step(&mut self, delta_secs: u64) -> SimResult<StepSummary> {
        self.step_observed(delta_secs, &mut NoopObserver)
    }

    /// [`step`][Self::step] with observer callbacks.
    pub fn step_observed<O: SimObserver>(
        &mut self,
        delta_secs: u64,
        observer: &mut O,
    ) -> SimResult<StepSummary> {
        if delta_secs == 0 || self.clock.now.checked_add(delta_secs).is_none() {
            warn!(delta_secs, now = %self.clock.now, "rejected step delta");
            return Err(SimError::InvalidStepDelta(delta_secs));
        }
        if self.clock.paused {
            return Ok(StepSummary {
                step: self.step_count,
                now: self.clock.now,
                transitions: 0,
                paused: true,
            });
        }

        let step = self.step_count + 1;
        observer.on_step_start(step, self.clock.now);

        self.clock.advance(delta_secs);
        self.step_count = step;

        let ctx = StepContext {
            now: self.clock.now,
            time_of_day: self.clock.time_of_day(),
            speed: self.config.speed,
            dwell_secs: self.config.dwell_secs,
        };

        // Fixed order: ascending VehicleId, which is registration order.
        let mut transitions = 0;
        for index in 0..self.fleet.len() {
            let id = VehicleId(index as u16);
            if let Some(t) = self.fleet.step_vehicle(id, &ctx, &mut self.network)? {
                observer.on_transition(&t);
                transitions += 1;
            }
        }

        observer.on_step_end(step, self.clock.now, transitions);
        let interval = self.config.snapshot_interval_steps;
        if interval > 0 && step.is_multiple_of(interval) {
            observer.on_snapshot(step, &self.clock, &self.network, &self.fleet);
        }

        Ok(StepSummary {
            step,
            now: self.clock.now,
            transitions,
            paused: false,
        })
    }

    /// Call [`step_observed`][Self::step_observed] `n` times with the same
    /// delta, then notify `on_run_end`.
    pub fn run_steps<O: SimObserver>(
        &mut self,
        n: u64,
        delta_secs: u64,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(delta_secs, observer)?;
        }
        observer.on_run_end(self.step_count);
        Ok(())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Create a package at `source` bound for `destination`.
    pub fn add_outgoing_package(
        &mut self,
        source: StationId,
        destination: StationId,
    ) -> SimResult<PackageId> {
        self.network
            .create_package(source, destination)
            .inspect_err(|e| warn!(%source, %destination, error = %e, "package rejected"))
            .map_err(SimError::from)
    }

    /// Customer pickup at a destination station.
    ///
    /// Removing a package that is not (or no longer) waiting is a harmless
    /// race and returns `Ok(None)`.
    pub fn remove_incoming_package(
        &mut self,
        station: StationId,
        package: PackageId,
    ) -> SimResult<Option<Package>> {
        let removed = self.network.station_mut(station)?.remove_incoming(package);
        if removed.is_none() {
            debug!(%station, package = package.0, "pickup of absent package ignored");
        }
        Ok(removed)
    }

    /// Hold the vehicle serving `station` at home until `time` of day.
    pub fn set_departure_time(&mut self, station: StationId, time: TimeOfDay) -> SimResult<()> {
        self.network.station(station)?;
        self.fleet.set_departure_time(VehicleId::from(station), time)?;
        info!(%station, departure = %time, "departure time set");
        Ok(())
    }

    /// Gate every vehicle until `time` of day.
    pub fn set_departure_time_all(&mut self, time: TimeOfDay) {
        self.fleet.set_departure_time_all(time);
        info!(departure = %time, vehicles = self.fleet.len(), "departure time set for fleet");
    }

    /// Freeze the simulation: subsequent steps change nothing.
    pub fn pause(&mut self) {
        self.clock.pause();
        info!(now = %self.clock.now, "simulation paused");
    }

    /// Continue exactly where [`pause`][Self::pause] left off.
    pub fn resume(&mut self) {
        self.clock.resume();
        info!(now = %self.clock.now, "simulation resumed");
    }

    /// Clear every queue and counter, park every vehicle at home, and
    /// rewind the clock.  Safe from any state; the package id allocator
    /// keeps counting so ids are never reused.
    pub fn reset(&mut self) -> SimResult<()> {
        self.network.clear();
        self.fleet.reset(&self.network)?;
        self.clock.reset();
        self.step_count = 0;
        info!("simulation reset");
        Ok(())
    }

    /// [`reset`][Self::reset] with an `on_reset` notification.
    pub fn reset_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.reset()?;
        observer.on_reset();
        Ok(())
    }

    // ── Read surface ──────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now
    }

    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.clock.time_of_day()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.clock.paused
    }

    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    #[inline]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[inline]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Resolve a spoke by name.
    pub fn station_id(&self, name: &str) -> SimResult<StationId> {
        Ok(self.network.resolve(name)?)
    }

    pub fn station(&self, id: StationId) -> SimResult<&Station> {
        Ok(self.network.station(id)?)
    }

    #[inline]
    pub fn stations(&self) -> &[Station] {
        self.network.stations()
    }

    #[inline]
    pub fn hub(&self) -> &Hub {
        self.network.hub()
    }

    pub fn vehicle(&self, id: VehicleId) -> SimResult<&Vehicle> {
        Ok(self.fleet.get(id)?)
    }

    /// The vehicle dedicated to `station`.
    pub fn vehicle_serving(&self, station: StationId) -> SimResult<&Vehicle> {
        Ok(self.fleet.serving(station)?)
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        self.fleet.vehicles()
    }
}
