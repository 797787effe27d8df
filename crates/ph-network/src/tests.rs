//! Unit tests for ph-network.

use ph_core::{Point, StationId};

use crate::{Network, Topology, TopologyBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Spokes A (0,0) and B (200,0) around hub H (100,0).
fn line_topology() -> Topology {
    let mut b = TopologyBuilder::new();
    b.add_spoke("A", Point::new(0.0, 0.0));
    b.add_spoke("B", Point::new(200.0, 0.0));
    b.set_hub("H", Point::new(100.0, 0.0));
    b.build().unwrap()
}

const A: StationId = StationId(0);
const B: StationId = StationId(1);

// ── Package & allocator ───────────────────────────────────────────────────────

#[cfg(test)]
mod package {
    use super::*;
    use crate::PackageIdAllocator;
    use ph_core::PackageId;

    #[test]
    fn allocator_starts_at_one_and_increments() {
        let mut alloc = PackageIdAllocator::new();
        assert_eq!(alloc.peek(), PackageId(1));
        assert_eq!(alloc.allocate(), PackageId(1));
        assert_eq!(alloc.allocate(), PackageId(2));
        assert_eq!(alloc.peek(), PackageId(3));
    }

    #[test]
    fn created_package_is_pending_at_source() {
        let mut net = Network::new(&line_topology());
        let id = net.create_package(A, B).unwrap();
        assert_eq!(id, PackageId(1));

        let a = net.station(A).unwrap();
        assert_eq!(a.outgoing().len(), 1);
        let pkg = &a.outgoing()[0];
        assert_eq!(pkg.source, A);
        assert_eq!(pkg.destination, B);
        assert!(!pkg.is_delivered());
    }

    #[test]
    fn display_marks_delivered() {
        let mut net = Network::new(&line_topology());
        net.create_package(A, B).unwrap();
        assert_eq!(net.station(A).unwrap().outgoing()[0].to_string(), "Package #1 -> StationId(1)");

        let collected = net.station_mut(A).unwrap().collect_outgoing();
        assert_eq!(collected[0].to_string(), "Package #1 -> StationId(1) (delivered)");
    }

    #[test]
    fn same_source_and_destination_rejected() {
        let mut net = Network::new(&line_topology());
        let err = net.create_package(A, A).unwrap_err();
        assert!(matches!(err, crate::NetworkError::InvalidDestination { .. }));
        assert!(net.station(A).unwrap().outgoing().is_empty());
        // No id consumed by a rejected request.
        assert_eq!(net.allocator().peek(), PackageId(1));
    }

    #[test]
    fn unknown_stations_rejected() {
        let mut net = Network::new(&line_topology());
        assert!(matches!(
            net.create_package(StationId(9), B),
            Err(crate::NetworkError::UnknownStation(StationId(9)))
        ));
        assert!(matches!(
            net.create_package(A, StationId(9)),
            Err(crate::NetworkError::InvalidDestination { .. })
        ));
    }
}

// ── Station ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod station {
    use super::*;
    use crate::PackageCounts;

    #[test]
    fn collect_takes_pending_and_marks_delivered() {
        let mut net = Network::new(&line_topology());
        net.create_package(A, B).unwrap();
        net.create_package(A, B).unwrap();

        let a = net.station_mut(A).unwrap();
        assert_eq!(a.pending_outgoing(), 2);
        let collected = a.collect_outgoing();
        assert_eq!(collected.len(), 2);
        assert!(collected.iter().all(|p| p.is_delivered()));
        assert_eq!(a.pending_outgoing(), 0);
        assert!(a.outgoing().is_empty());
    }

    #[test]
    fn collect_twice_returns_nothing_new() {
        let mut net = Network::new(&line_topology());
        net.create_package(A, B).unwrap();
        let a = net.station_mut(A).unwrap();
        assert_eq!(a.collect_outgoing().len(), 1);
        assert!(a.collect_outgoing().is_empty());
    }

    #[test]
    fn incoming_counts_and_total() {
        let mut net = Network::new(&line_topology());
        let p1 = net.create_package(A, B).unwrap();
        let p2 = net.create_package(A, B).unwrap();
        let collected = net.station_mut(A).unwrap().collect_outgoing();

        let b = net.station_mut(B).unwrap();
        for pkg in collected {
            b.add_incoming(pkg);
        }
        assert_eq!(b.incoming_count(), 2);
        assert_eq!(b.total_received(), 2);

        // Pickup lowers the incoming count but not the running total.
        let picked = b.remove_incoming(p1).unwrap();
        assert_eq!(picked.id, p1);
        assert_eq!(b.incoming_count(), 1);
        assert_eq!(b.total_received(), 2);
        assert_eq!(b.incoming()[0].id, p2);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut net = Network::new(&line_topology());
        let b = net.station_mut(B).unwrap();
        assert!(b.remove_incoming(ph_core::PackageId(77)).is_none());
        assert!(b.remove_incoming_where(|_| true).is_empty());
    }

    #[test]
    fn remove_where_takes_matching_subset_in_order() {
        let mut net = Network::new(&line_topology());
        let ids: Vec<_> = (0..4).map(|_| net.create_package(A, B).unwrap()).collect();
        let collected = net.station_mut(A).unwrap().collect_outgoing();

        let b = net.station_mut(B).unwrap();
        for pkg in collected {
            b.add_incoming(pkg);
        }
        let taken = b.remove_incoming_where(|p| p.id == ids[0] || p.id == ids[2]);

        let taken_ids: Vec<_> = taken.iter().map(|p| p.id).collect();
        assert_eq!(taken_ids, [ids[0], ids[2]]);
        let left: Vec<_> = b.incoming().iter().map(|p| p.id).collect();
        assert_eq!(left, [ids[1], ids[3]]);
        assert_eq!(b.incoming_count(), 2);
        assert_eq!(b.total_received(), 4);
    }

    #[test]
    fn clear_resets_everything() {
        let mut net = Network::new(&line_topology());
        net.create_package(A, B).unwrap();
        let collected = net.station_mut(A).unwrap().collect_outgoing();
        net.station_mut(B).unwrap().add_incoming(collected.into_iter().next().unwrap());
        net.create_package(B, A).unwrap();

        net.clear();
        let b = net.station(B).unwrap();
        assert_eq!(b.incoming_count(), 0);
        assert_eq!(b.total_received(), 0);
        assert_eq!(b.pending_outgoing(), 0);
        assert!(b.outgoing().is_empty());
    }
}

// ── Hub ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod hub {
    use super::*;
    use crate::PackageCounts;

    #[test]
    fn pool_filters_by_destination() {
        let mut net = Network::new(&line_topology());
        net.create_package(A, B).unwrap();
        net.create_package(B, A).unwrap();
        let from_a = net.station_mut(A).unwrap().collect_outgoing();
        let from_b = net.station_mut(B).unwrap().collect_outgoing();

        let hub = net.hub_mut();
        for pkg in from_a.into_iter().chain(from_b) {
            hub.add_incoming(pkg);
        }
        assert_eq!(hub.incoming_count(), 2);
        assert_eq!(hub.pending_outgoing(), 0);
        assert!(hub.has_packages_for(A));
        assert!(hub.has_packages_for(B));

        let for_b = hub.take_packages_for(B);
        assert_eq!(for_b.len(), 1);
        assert_eq!(for_b[0].destination, B);
        assert!(!hub.has_packages_for(B));
        assert!(hub.take_packages_for(B).is_empty());
        assert_eq!(hub.incoming_count(), 1);
        assert_eq!(hub.total_received(), 2);
    }

    #[test]
    fn remove_where_keeps_pool_order() {
        let mut net = Network::new(&line_topology());
        let a1 = net.create_package(A, B).unwrap();
        let b1 = net.create_package(B, A).unwrap();
        let a2 = net.create_package(A, B).unwrap();
        let b2 = net.create_package(B, A).unwrap();
        let mut from_a = net.station_mut(A).unwrap().collect_outgoing().into_iter();
        let mut from_b = net.station_mut(B).unwrap().collect_outgoing().into_iter();

        // Interleave: a1, b1, a2, b2.
        let hub = net.hub_mut();
        for _ in 0..2 {
            hub.add_incoming(from_a.next().unwrap());
            hub.add_incoming(from_b.next().unwrap());
        }

        let taken: Vec<_> = hub.remove_incoming_where(|p| p.source == A).iter().map(|p| p.id).collect();
        assert_eq!(taken, [a1, a2]);
        let left: Vec<_> = hub.pool().iter().map(|p| p.id).collect();
        assert_eq!(left, [b1, b2]);
        assert_eq!(hub.total_received(), 4);
        assert!(hub.remove_incoming_where(|p| p.source == A).is_empty());
    }

    #[test]
    fn split_borrow_of_station_and_hub() {
        let mut net = Network::new(&line_topology());
        net.create_package(A, B).unwrap();
        let (station, hub) = net.station_and_hub_mut(A).unwrap();
        for pkg in station.collect_outgoing() {
            hub.add_incoming(pkg);
        }
        assert_eq!(net.hub().pool().len(), 1);
        assert!(net.station_and_hub_mut(StationId(5)).is_err());
    }
}

// ── Topology ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use super::*;
    use crate::{NetworkError, load_topology_reader};
    use std::io::Cursor;

    #[test]
    fn builder_assigns_ids_in_order() {
        let mut b = TopologyBuilder::new();
        assert_eq!(b.add_spoke("X", Point::new(1.0, 1.0)), StationId(0));
        assert_eq!(b.add_spoke("Y", Point::new(2.0, 2.0)), StationId(1));
        b.set_hub("H", Point::new(0.0, 0.0));
        let topo = b.build().unwrap();
        assert_eq!(topo.spokes()[1].name, "Y");
        assert_eq!(topo.hub().name, "H");
    }

    #[test]
    fn missing_hub_rejected() {
        let mut b = TopologyBuilder::new();
        b.add_spoke("X", Point::new(1.0, 1.0));
        assert!(matches!(b.build(), Err(NetworkError::Topology(_))));
    }

    #[test]
    fn two_hubs_rejected() {
        let mut b = TopologyBuilder::new();
        b.add_spoke("X", Point::new(1.0, 1.0));
        b.set_hub("H1", Point::new(0.0, 0.0)).set_hub("H2", Point::new(5.0, 0.0));
        assert!(b.build().is_err());
    }

    #[test]
    fn spoke_count_stops_below_invalid_id() {
        let mut b = TopologyBuilder::new();
        for i in 0..u16::MAX {
            b.add_spoke(format!("S{i}"), Point::new(0.0, 0.0));
        }
        b.set_hub("H", Point::new(0.0, 0.0));
        assert!(matches!(b.build(), Err(NetworkError::Topology(_))));
    }

    #[test]
    fn network_ids_follow_spoke_order() {
        let topo = line_topology();
        let net = Network::new(&topo);
        for (i, spec) in topo.spokes().iter().enumerate() {
            let id = StationId::try_from(i).unwrap();
            assert_eq!(net.station(id).unwrap().name, spec.name);
            assert_eq!(net.resolve(&spec.name).unwrap(), id);
        }
    }

    #[test]
    fn no_spokes_rejected() {
        let mut b = TopologyBuilder::new();
        b.set_hub("H", Point::new(0.0, 0.0));
        assert!(b.build().is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut b = TopologyBuilder::new();
        b.add_spoke("X", Point::new(1.0, 1.0));
        b.set_hub("X", Point::new(0.0, 0.0));
        assert!(b.build().is_err());
    }

    #[test]
    fn csv_round_trip() {
        let csv = "name,x,y,role\nH,100,0,hub\nA,0,0,spoke\nB, 200 ,0,Spoke\n";
        let topo = load_topology_reader(Cursor::new(csv)).unwrap();
        assert_eq!(topo, line_topology());
    }

    #[test]
    fn csv_bad_role() {
        let csv = "name,x,y,role\nH,100,0,hub\nA,0,0,depot\n";
        assert!(matches!(
            load_topology_reader(Cursor::new(csv)),
            Err(NetworkError::Parse(_))
        ));
    }

    #[test]
    fn csv_bad_number() {
        let csv = "name,x,y,role\nH,abc,0,hub\n";
        assert!(matches!(
            load_topology_reader(Cursor::new(csv)),
            Err(NetworkError::Parse(_))
        ));
    }

    #[test]
    fn resolve_names() {
        let net = Network::new(&line_topology());
        assert_eq!(net.resolve("B").unwrap(), B);
        assert!(matches!(net.resolve("H"), Err(NetworkError::HubNotASpoke(_))));
        assert!(matches!(net.resolve("Z"), Err(NetworkError::UnknownStationName(_))));
    }
}
