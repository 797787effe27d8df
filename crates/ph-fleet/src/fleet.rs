//! The `Fleet`: an arena of vehicles addressed by `VehicleId`.

use tracing::debug;

use ph_core::{StationId, TimeOfDay, VehicleId};
use ph_network::Network;

use crate::{FleetError, FleetResult, StepContext, Transition, Vehicle, VehicleState};

/// All vehicles, one per spoke, indexed by `VehicleId`.
///
/// Vehicle `i` serves `StationId(i)`, so registration order is also the
/// fixed evaluation order used by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Park one vehicle at every spoke of `network`.
    pub fn new(network: &Network) -> Self {
        let vehicles = network
            .stations()
            .iter()
            .map(|station| Vehicle::new(VehicleId::from(station.id), station))
            .collect();
        Self { vehicles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Iterator over all `VehicleId`s in evaluation order.
    pub fn ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.vehicles.iter().map(|v| v.id)
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: VehicleId) -> FleetResult<&Vehicle> {
        self.vehicles.get(id.index()).ok_or(FleetError::UnknownVehicle(id))
    }

    /// The vehicle dedicated to `station`.
    pub fn serving(&self, station: StationId) -> FleetResult<&Vehicle> {
        self.get(VehicleId::from(station))
    }

    /// Total packages currently on board any vehicle.
    pub fn carried_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.carried().len()).sum()
    }

    /// Contention check: does any vehicle other than `asking` carry a
    /// package bound for `station`?
    pub fn in_transit_for(&self, station: StationId, asking: VehicleId) -> bool {
        self.vehicles
            .iter()
            .any(|v| v.id != asking && v.carries_for(station))
    }

    /// Gate `id` at home until `time`.
    pub fn set_departure_time(&mut self, id: VehicleId, time: TimeOfDay) -> FleetResult<()> {
        let vehicle = self.vehicles.get_mut(id.index()).ok_or(FleetError::UnknownVehicle(id))?;
        vehicle.set_departure_time(time);
        Ok(())
    }

    /// Gate every vehicle until `time`.
    pub fn set_departure_time_all(&mut self, time: TimeOfDay) {
        for vehicle in &mut self.vehicles {
            vehicle.set_departure_time(time);
        }
    }

    /// Run one step of vehicle `id` against `network`.
    pub fn step_vehicle(
        &mut self,
        id:      VehicleId,
        ctx:     &StepContext,
        network: &mut Network,
    ) -> FleetResult<Option<Transition>> {
        let (state, home) = {
            let v = self.get(id)?;
            (v.state, v.home)
        };
        // Only the dwell decision needs the peers; read them before taking
        // the mutable borrow of this vehicle.
        let contended = state == VehicleState::WaitingAtHub && self.in_transit_for(home, id);

        let (station, hub) = network.station_and_hub_mut(home)?;
        let vehicle = &mut self.vehicles[id.index()];
        let transition = vehicle.step(ctx, station, hub, contended);

        if let Some(t) = &transition {
            debug!(
                vehicle = %t.vehicle,
                from = %t.from,
                to = %t.to,
                packages = t.packages,
                at = %t.at,
                "vehicle transition"
            );
        }
        Ok(transition)
    }

    /// Send every vehicle home, empty and ungated.
    pub fn reset(&mut self, network: &Network) -> FleetResult<()> {
        for vehicle in &mut self.vehicles {
            let home = network.station(vehicle.home)?;
            vehicle.reset(home);
        }
        Ok(())
    }
}
