//! Fluent builder for constructing an [`Engine`].

use ph_core::{SimClock, SimConfig, StationId, TimeOfDay};
use ph_fleet::Fleet;
use ph_network::{Network, Topology};

use crate::{Engine, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                          |
/// |--------------------------|----------------------------------|
/// | `.config(c)`             | `SimConfig::default()`           |
/// | `.departure_time(s, t)`  | No vehicle is gated              |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(topology)
///     .config(config)
///     .departure_time(prg, "06:30".parse()?)
///     .build()?;
/// ```
pub struct EngineBuilder {
    topology:   Topology,
    config:     SimConfig,
    departures: Vec<(StationId, TimeOfDay)>,
}

impl EngineBuilder {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            config:     SimConfig::default(),
            departures: Vec::new(),
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Gate the vehicle serving `station` from the first step.
    pub fn departure_time(mut self, station: StationId, time: TimeOfDay) -> Self {
        self.departures.push((station, time));
        self
    }

    /// Validate inputs, park every vehicle at home, and return a ready
    /// engine at `SimTime::ZERO`.
    pub fn build(self) -> SimResult<Engine> {
        self.config.validate()?;

        let network = Network::new(&self.topology);
        let fleet = Fleet::new(&network);

        let mut engine = Engine {
            clock: SimClock::new(self.config.start_time_of_day),
            config: self.config,
            network,
            fleet,
            step_count: 0,
        };
        for (station, time) in self.departures {
            engine.set_departure_time(station, time)?;
        }
        Ok(engine)
    }
}
