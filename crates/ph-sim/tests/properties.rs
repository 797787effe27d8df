//! Property-based tests for the engine.
//!
//! Random command and step sequences are applied to small networks, then
//! the package-custody and determinism invariants are checked after every
//! operation.

use std::collections::BTreeSet;

use ph_core::{PackageId, Point, SimConfig, StationId, TimeOfDay};
use ph_network::{PackageCounts, TopologyBuilder};
use ph_sim::{Custody, Engine, EngineBuilder};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

const SPOKES: u16 = 4;

/// Four spokes around a hub at the origin, at uneven distances so vehicles
/// arrive on different steps.
fn build_engine(speed: f32, dwell_secs: u64) -> Engine {
    let mut b = TopologyBuilder::new();
    b.add_spoke("N", Point::new(0.0, 40.0));
    b.add_spoke("E", Point::new(75.5, 0.0));
    b.add_spoke("S", Point::new(0.0, -23.0));
    b.add_spoke("W", Point::new(-61.0, 12.0));
    b.set_hub("HUB", Point::new(0.0, 0.0));
    let cfg = SimConfig { speed, dwell_secs, ..SimConfig::default() };
    EngineBuilder::new(b.build().unwrap()).config(cfg).build().unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Add(u16, u16),
    /// Pick up the n-th waiting package at a station, if any.
    Pickup(u16, usize),
    Step(u64),
    Pause,
    Resume,
    Gate(u16, u32),
    Reset,
}

fn arb_ops(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            4 => (0..SPOKES + 1, 0..SPOKES + 1).prop_map(|(s, d)| Op::Add(s, d)),
            2 => (0..SPOKES, 0..4usize).prop_map(|(s, n)| Op::Pickup(s, n)),
            8 => (1..120u64).prop_map(Op::Step),
            1 => Just(Op::Pause),
            1 => Just(Op::Resume),
            1 => (0..SPOKES, 0..7200u32).prop_map(|(s, t)| Op::Gate(s, t)),
            1 => Just(Op::Reset),
        ],
        1..=max_ops,
    )
}

/// Apply `op`, keeping `live` equal to the set of ids the engine should hold.
fn apply(engine: &mut Engine, op: &Op, live: &mut BTreeSet<PackageId>) {
    match *op {
        Op::Add(s, d) => {
            if let Ok(id) = engine.add_outgoing_package(StationId(s), StationId(d)) {
                live.insert(id);
            }
        }
        Op::Pickup(s, n) => {
            let station = StationId(s);
            let waiting = engine.station(station).unwrap().incoming().get(n).map(|p| p.id);
            if let Some(id) = waiting {
                let removed = engine.remove_incoming_package(station, id).unwrap();
                assert_eq!(removed.map(|p| p.id), Some(id));
                live.remove(&id);
            }
        }
        Op::Step(delta) => {
            engine.step(delta).unwrap();
        }
        Op::Pause => engine.pause(),
        Op::Resume => engine.resume(),
        Op::Gate(s, secs) => {
            let time = TimeOfDay::from_secs_wrapping(u64::from(secs));
            engine.set_departure_time(StationId(s), time).unwrap();
        }
        Op::Reset => {
            engine.reset().unwrap();
            live.clear();
        }
    }
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every live package sits in exactly one container, and nothing else does.
    #[test]
    fn single_custody(ops in arb_ops(120)) {
        let mut engine = build_engine(2.0, 30);
        let mut live = BTreeSet::new();
        for op in &ops {
            apply(&mut engine, op, &mut live);
            let ids: Vec<PackageId> = engine.custody().into_iter().map(|(id, _)| id).collect();
            let expected: Vec<PackageId> = live.iter().copied().collect();
            prop_assert_eq!(ids, expected);
        }
    }

    /// A package's delivered flag matches where it is: unmarked only while
    /// waiting at its source, marked everywhere after collection.
    #[test]
    fn delivered_flag_matches_custody(ops in arb_ops(120)) {
        let mut engine = build_engine(3.5, 45);
        let mut live = BTreeSet::new();
        for op in &ops {
            apply(&mut engine, op, &mut live);
            for station in engine.stations() {
                prop_assert!(station.outgoing().iter().all(|p| !p.is_delivered()));
                prop_assert!(station.outgoing().iter().all(|p| p.source == station.id));
                prop_assert!(station.incoming().iter().all(|p| p.is_delivered()));
                prop_assert!(station.incoming().iter().all(|p| p.destination == station.id));
                prop_assert_eq!(station.pending_outgoing(), station.outgoing().len());
            }
            for vehicle in engine.vehicles() {
                prop_assert!(vehicle.carried().iter().all(|p| p.is_delivered()));
                prop_assert!(vehicle.carried().iter().all(|p| p.source == vehicle.home));
            }
            prop_assert!(engine.hub().pool().iter().all(|p| p.is_delivered()));
        }
    }

    /// Received counters never run backwards between resets.
    #[test]
    fn received_counters_are_monotonic(ops in arb_ops(120)) {
        let mut engine = build_engine(2.0, 30);
        let mut live = BTreeSet::new();
        let mut last: Vec<u64> = vec![0; SPOKES as usize];
        for op in &ops {
            apply(&mut engine, op, &mut live);
            if matches!(op, Op::Reset) {
                last.iter_mut().for_each(|c| *c = 0);
            }
            for (i, station) in engine.stations().iter().enumerate() {
                prop_assert!(station.total_received() >= last[i]);
                prop_assert!(station.total_received() >= station.incoming_count() as u64);
                last[i] = station.total_received();
            }
        }
    }

    /// Two engines fed the same operations stay identical.
    #[test]
    fn deterministic_replay(ops in arb_ops(150)) {
        let mut a = build_engine(2.0, 30);
        let mut b = build_engine(2.0, 30);
        let (mut live_a, mut live_b) = (BTreeSet::new(), BTreeSet::new());
        for op in &ops {
            apply(&mut a, op, &mut live_a);
            apply(&mut b, op, &mut live_b);
            prop_assert_eq!(a.snapshot(), b.snapshot());
            prop_assert_eq!(a.custody(), b.custody());
        }
    }

    /// Without new packages or pickups, a loaded network drains completely.
    #[test]
    fn network_drains(routes in proptest::collection::vec((0..SPOKES, 1..SPOKES), 1..12)) {
        let mut engine = build_engine(2.0, 30);
        let mut count = 0;
        for &(s, offset) in &routes {
            let d = (s + offset) % SPOKES;
            engine.add_outgoing_package(StationId(s), StationId(d)).unwrap();
            count += 1;
        }
        for _ in 0..400 {
            engine.step(60).unwrap();
        }
        let custody = engine.custody();
        prop_assert_eq!(custody.len(), count);
        prop_assert!(custody.iter().all(|(_, c)| matches!(c, Custody::Incoming(_))));
        prop_assert!(engine.hub().pool().is_empty());
    }
}
