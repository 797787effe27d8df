//! The `Network`: every spoke station, the hub, and the package allocator.

use std::collections::HashMap;

use tracing::debug;

use ph_core::{PackageId, StationId};

use crate::{Hub, NetworkError, NetworkResult, Package, PackageIdAllocator, Station, Topology};

/// Owns all package queues.
///
/// Spokes are stored in a `Vec` indexed by `StationId`; the hub is a
/// separate field so that a vehicle can borrow its home station and the hub
/// mutably at the same time (see [`station_and_hub_mut`][Self::station_and_hub_mut]).
#[derive(Debug, Clone)]
pub struct Network {
    stations:  Vec<Station>,
    hub:       Hub,
    names:     HashMap<String, StationId>,
    allocator: PackageIdAllocator,
}

impl Network {
    /// Instantiate empty stations for every spoke in `topology`.
    pub fn new(topology: &Topology) -> Self {
        // The builder caps the spoke count below `StationId::INVALID`.
        let stations: Vec<Station> = topology
            .spokes()
            .iter()
            .enumerate()
            .map(|(i, spec)| Station::new(StationId(i as u16), spec.name.clone(), spec.location))
            .collect();
        let names = stations.iter().map(|s| (s.name.clone(), s.id)).collect();

        Self {
            stations,
            hub: Hub::new(topology.hub().name.clone(), topology.hub().location),
            names,
            allocator: PackageIdAllocator::new(),
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Iterator over all `StationId`s in registration order.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.iter().map(|s| s.id)
    }

    #[inline]
    pub fn contains(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    pub fn station(&self, id: StationId) -> NetworkResult<&Station> {
        self.stations.get(id.index()).ok_or(NetworkError::UnknownStation(id))
    }

    pub fn station_mut(&mut self, id: StationId) -> NetworkResult<&mut Station> {
        self.stations.get_mut(id.index()).ok_or(NetworkError::UnknownStation(id))
    }

    #[inline]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[inline]
    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    #[inline]
    pub fn hub_mut(&mut self) -> &mut Hub {
        &mut self.hub
    }

    /// Disjoint mutable borrows of one spoke and the hub.
    pub fn station_and_hub_mut(&mut self, id: StationId) -> NetworkResult<(&mut Station, &mut Hub)> {
        let station = self.stations.get_mut(id.index()).ok_or(NetworkError::UnknownStation(id))?;
        Ok((station, &mut self.hub))
    }

    /// Resolve a spoke by name.
    pub fn resolve(&self, name: &str) -> NetworkResult<StationId> {
        if let Some(&id) = self.names.get(name) {
            return Ok(id);
        }
        if name == self.hub.name {
            return Err(NetworkError::HubNotASpoke(name.to_owned()));
        }
        Err(NetworkError::UnknownStationName(name.to_owned()))
    }

    #[inline]
    pub fn allocator(&self) -> &PackageIdAllocator {
        &self.allocator
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Create a package at `source` bound for `destination` and append it to
    /// the source's outgoing queue.
    ///
    /// Validation happens before the allocator is touched, so a rejected
    /// request consumes no id.
    pub fn create_package(
        &mut self,
        source:      StationId,
        destination: StationId,
    ) -> NetworkResult<PackageId> {
        if !self.contains(source) {
            return Err(NetworkError::UnknownStation(source));
        }
        if destination == source || !self.contains(destination) {
            return Err(NetworkError::InvalidDestination { origin: source, destination });
        }

        let id = self.allocator.allocate();
        self.stations[source.index()].push_outgoing(Package::new(id, source, destination));
        debug!(package = id.0, %source, %destination, "package created");
        Ok(id)
    }

    /// Empty every queue and counter.  The allocator keeps counting.
    pub fn clear(&mut self) {
        for station in &mut self.stations {
            station.clear();
        }
        self.hub.clear();
    }
}
