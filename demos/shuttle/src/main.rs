//! shuttle: drives the parcel_hub engine over the default nine-spoke map.
//!
//! ```text
//! shuttle [TOPOLOGY.csv] [CONFIG.json] [DEPARTURE HH:MM]
//! ```
//!
//! Fills every spoke with random packages, runs a fixed number of steps
//! while writing CSV snapshots to `output/shuttle`, and prints the final
//! station counters.  Logging is controlled with `RUST_LOG`.

mod stations;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ph_core::{SimConfig, SimRng, StationId, TimeOfDay};
use ph_fleet::{Fleet, Transition};
use ph_network::{Network, PackageCounts, load_topology_csv};
use ph_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ph_sim::{Engine, EngineBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEPS:      u64 = 24 * 60; // one simulated day at the default step
const OUTPUT_DIR: &str = "output/shuttle";

// ── Observer wrapper to count transitions ─────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:       SimOutputObserver<W>,
    transitions: usize,
    deliveries:  usize,
    snapshots:   usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, transitions: 0, deliveries: 0, snapshots: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_transition(&mut self, t: &Transition) {
        self.transitions += 1;
        if t.to == ph_fleet::VehicleState::Idle {
            self.deliveries += t.packages;
        }
    }

    fn on_snapshot(
        &mut self,
        step:    u64,
        clock:   &ph_core::SimClock,
        network: &Network,
        fleet:   &Fleet,
    ) {
        self.snapshots += 1;
        self.inner.on_snapshot(step, clock, network, fleet);
    }

    fn on_run_end(&mut self, final_step: u64) {
        self.inner.on_run_end(final_step);
    }
}

// ── Workload ──────────────────────────────────────────────────────────────────

/// Clear the engine, then give every spoke 1–5 packages bound for uniformly
/// random other spokes.
fn random_packages(engine: &mut Engine, rng: &mut SimRng) -> Result<usize> {
    engine.reset()?;
    let ids: Vec<StationId> = engine.stations().iter().map(|s| s.id).collect();
    let mut created = 0;
    for &source in &ids {
        let others: Vec<StationId> = ids.iter().copied().filter(|&d| d != source).collect();
        let count: usize = rng.gen_range(1..=5);
        for _ in 0..count {
            let Some(&destination) = rng.choose(&others) else {
                break;
            };
            engine.add_outgoing_package(source, destination)?;
            created += 1;
        }
    }
    info!(packages = created, "random packages generated");
    Ok(created)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 3 {
        bail!("usage: shuttle [TOPOLOGY.csv] [CONFIG.json] [DEPARTURE HH:MM]");
    }

    // 1. Topology.
    let topology = match args.first() {
        Some(path) => load_topology_csv(Path::new(path))
            .with_context(|| format!("loading topology from {path}"))?,
        None => stations::default_topology()?,
    };

    // 2. Config.
    let config: SimConfig = match args.get(1) {
        Some(path) => {
            let text = std::fs::read_to_string(PathBuf::from(path))
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => SimConfig::default(),
    };
    let departure: Option<TimeOfDay> = args
        .get(2)
        .map(|s| s.parse::<TimeOfDay>())
        .transpose()
        .context("parsing departure time")?;

    println!("=== shuttle | parcel_hub ===");
    println!(
        "Spokes: {}  |  Hub: {}  |  Steps: {STEPS} × {} s  |  Seed: {}",
        topology.spokes().len(),
        topology.hub().name,
        config.step_secs,
        config.seed,
    );
    println!();

    // 3. Engine and workload.
    let step_secs = config.step_secs;
    let mut rng = SimRng::new(config.seed);
    let mut engine = EngineBuilder::new(topology).config(config).build()?;
    let created = random_packages(&mut engine, &mut rng)?;
    if let Some(time) = departure {
        engine.set_departure_time_all(time);
    }
    println!("Packages created: {created}");

    // 4. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    engine.run_steps(STEPS, step_secs, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  transitions       : {}", obs.transitions);
    println!("  packages delivered: {}", obs.deliveries);
    println!("  snapshots written : {}", obs.snapshots);
    println!("  clock             : {}", engine.clock());
    println!();

    // 6. Final station table.
    println!("{:<8} {:>8} {:>8} {:>8}  {:<14}", "Station", "Pending", "Incoming", "Received", "Vehicle");
    println!("{}", "-".repeat(52));
    for station in engine.stations() {
        let vehicle = engine.vehicle_serving(station.id)?;
        println!(
            "{:<8} {:>8} {:>8} {:>8}  {:<14}",
            station.name,
            station.pending_outgoing(),
            station.incoming_count(),
            station.total_received(),
            vehicle.state.as_str(),
        );
    }
    let hub = engine.hub();
    println!(
        "{:<8} {:>8} {:>8} {:>8}",
        hub.name,
        hub.pending_outgoing(),
        hub.incoming_count(),
        hub.total_received(),
    );

    Ok(())
}
