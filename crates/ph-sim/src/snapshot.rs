//! Full-state snapshots and package custody.

use ph_core::{PackageId, SimClock, StationId, VehicleId};
use ph_fleet::Vehicle;
use ph_network::{Hub, Station};

use crate::Engine;

/// A copy of the complete simulation state.
///
/// Two engines fed the same topology, commands, and step deltas produce
/// equal snapshots after every step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    pub step:     u64,
    pub clock:    SimClock,
    pub stations: Vec<Station>,
    pub hub:      Hub,
    pub vehicles: Vec<Vehicle>,
}

/// The single container holding a package at a step boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Custody {
    /// Waiting in its source's outgoing queue.
    Outgoing(StationId),
    /// On board a vehicle.
    Vehicle(VehicleId),
    /// In the hub's transit pool.
    Hub,
    /// Delivered, waiting in its destination's incoming queue.
    Incoming(StationId),
}

impl Engine {
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            step:     self.step_count,
            clock:    self.clock.clone(),
            stations: self.network.stations().to_vec(),
            hub:      self.network.hub().clone(),
            vehicles: self.fleet.vehicles().to_vec(),
        }
    }

    /// Every live package and where it sits, sorted by `PackageId`.
    ///
    /// With single custody every id appears exactly once; a duplicate id in
    /// the result means a package was copied.
    pub fn custody(&self) -> Vec<(PackageId, Custody)> {
        let mut out = Vec::new();
        for station in self.network.stations() {
            out.extend(station.outgoing().iter().map(|p| (p.id, Custody::Outgoing(station.id))));
            out.extend(station.incoming().iter().map(|p| (p.id, Custody::Incoming(station.id))));
        }
        for vehicle in self.fleet.vehicles() {
            out.extend(vehicle.carried().iter().map(|p| (p.id, Custody::Vehicle(vehicle.id))));
        }
        out.extend(self.network.hub().pool().iter().map(|p| (p.id, Custody::Hub)));
        out.sort_by_key(|&(id, _)| id);
        out
    }
}
