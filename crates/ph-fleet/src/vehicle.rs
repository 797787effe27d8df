//! One shuttle vehicle.

use ph_core::{Point, SimTime, StationId, TimeOfDay, VehicleId};
use ph_network::{Hub, Package, PackageCounts, Station};

use crate::{Transition, VehicleState};

/// Per-step inputs shared by every vehicle.
#[derive(Copy, Clone, Debug)]
pub struct StepContext {
    /// Simulated time after this step's clock advance.
    pub now:         SimTime,
    pub time_of_day: TimeOfDay,
    /// Units moved per step.
    pub speed:       f32,
    /// Minimum uncontended wait at the hub.
    pub dwell_secs:  u64,
}

/// A vehicle bound to one home spoke and the hub.
///
/// `carried` is non-empty only between collection at home and arrival at the
/// hub; the drop-off into the hub pool happens in the same step as arrival.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:       VehicleId,
    pub home:     StationId,
    pub position: Point,
    pub target:   Point,
    pub state:    VehicleState,
    carried:      Vec<Package>,
    /// One-shot departure gate, cleared once the time of day reaches it.
    departure_time: Option<TimeOfDay>,
    /// Start of the current dwell period at the hub.
    arrived_at_hub: SimTime,
}

impl Vehicle {
    /// Park a new vehicle at `home`.
    pub fn new(id: VehicleId, home: &Station) -> Self {
        Self {
            id,
            home:           home.id,
            position:       home.location,
            target:         home.location,
            state:          VehicleState::Idle,
            carried:        Vec::new(),
            departure_time: None,
            arrived_at_hub: SimTime::ZERO,
        }
    }

    #[inline]
    pub fn carried(&self) -> &[Package] {
        &self.carried
    }

    /// `true` if a package bound for `station` is on board.
    pub fn carries_for(&self, station: StationId) -> bool {
        self.carried.iter().any(|p| p.destination == station)
    }

    #[inline]
    pub fn departure_time(&self) -> Option<TimeOfDay> {
        self.departure_time
    }

    #[inline]
    pub fn arrived_at_hub(&self) -> SimTime {
        self.arrived_at_hub
    }

    /// Hold the vehicle at home until the time of day reaches `time`.
    pub fn set_departure_time(&mut self, time: TimeOfDay) {
        self.departure_time = Some(time);
    }

    /// Back to `Idle` at `home`, empty-handed and ungated.
    ///
    /// Carried packages are dropped; the caller clears the network in the
    /// same operation.
    pub fn reset(&mut self, home: &Station) {
        self.position = home.location;
        self.target = home.location;
        self.state = VehicleState::Idle;
        self.carried.clear();
        self.departure_time = None;
        self.arrived_at_hub = SimTime::ZERO;
    }

    /// Evaluate one step of the state machine.
    ///
    /// `contended` is the answer to "does another vehicle carry a package
    /// bound for my home?" and is only consulted while `WaitingAtHub`.
    pub fn step(
        &mut self,
        ctx:       &StepContext,
        home:      &mut Station,
        hub:       &mut Hub,
        contended: bool,
    ) -> Option<Transition> {
        let from = self.state;
        let packages = match self.state {
            VehicleState::Idle => {
                if let Some(departure) = self.departure_time {
                    if ctx.time_of_day < departure {
                        return None;
                    }
                    self.departure_time = None;
                }
                if home.pending_outgoing() == 0 && !hub.has_packages_for(self.home) {
                    return None;
                }
                self.carried = home.collect_outgoing();
                self.target = hub.location;
                self.state = VehicleState::MovingToHub;
                self.carried.len()
            }

            VehicleState::MovingToHub => {
                if !self.advance(ctx.speed) {
                    return None;
                }
                let count = self.carried.len();
                for package in self.carried.drain(..) {
                    hub.add_incoming(package);
                }
                self.arrived_at_hub = ctx.now;
                self.state = VehicleState::WaitingAtHub;
                count
            }

            VehicleState::WaitingAtHub => {
                if contended {
                    // Restart the dwell timer while mail for home is still on the road.
                    self.arrived_at_hub = ctx.now;
                    return None;
                }
                if ctx.now.since(self.arrived_at_hub) < ctx.dwell_secs {
                    return None;
                }
                self.target = home.location;
                self.state = VehicleState::MovingHome;
                0
            }

            VehicleState::MovingHome => {
                if !self.advance(ctx.speed) {
                    return None;
                }
                let delivered = hub.take_packages_for(self.home);
                let count = delivered.len();
                for package in delivered {
                    home.add_incoming(package);
                }
                self.state = VehicleState::Idle;
                count
            }
        };

        Some(Transition {
            vehicle: self.id,
            from,
            to: self.state,
            packages,
            at: ctx.now,
        })
    }

    /// Apply the motion rule once.  Returns `true` when the vehicle sits
    /// exactly on its target.
    fn advance(&mut self, speed: f32) -> bool {
        self.position = self.position.step_towards(self.target, speed);
        self.position == self.target
    }
}
