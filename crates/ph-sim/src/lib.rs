//! `ph-sim`: the step-driven engine for the parcel_hub simulation.
//!
//! # Step
//!
//! ```text
//! Engine::step(delta):
//!   ⓪ Validate  : delta must be positive; a paused engine changes nothing.
//!   ① Clock     : advance simulated time by delta.
//!   ② Vehicles  : for each VehicleId in registration order:
//!                   gate → Idle→MovingToHub → arrive at hub →
//!                   dwell / contention → arrive home
//!                 reading and writing station and hub queues.
//!   ③ Observe   : transitions, step end, and periodic snapshots.
//! ```
//!
//! There is no hidden timer.  Callers choose their own cadence: a UI tick,
//! a test loop, or a batch runner calling [`Engine::run_steps`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ph_core::{Point, SimConfig};
//! use ph_network::TopologyBuilder;
//! use ph_sim::{EngineBuilder, NoopObserver};
//!
//! let mut topo = TopologyBuilder::new();
//! let a = topo.add_spoke("A", Point::new(0.0, 0.0));
//! let b = topo.add_spoke("B", Point::new(200.0, 0.0));
//! topo.set_hub("H", Point::new(100.0, 0.0));
//!
//! let mut engine = EngineBuilder::new(topo.build()?).config(SimConfig::default()).build()?;
//! engine.add_outgoing_package(a, b)?;
//! engine.run_steps(200, 60, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use engine::{Engine, StepSummary};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::{Custody, EngineSnapshot};
