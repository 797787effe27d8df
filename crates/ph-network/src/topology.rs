//! Network topology: the fixed list of spokes and the hub.
//!
//! # CSV format
//!
//! One row per station.  Exactly one row must have role `hub`; spokes get
//! `StationId`s in row order.
//!
//! ```csv
//! name,x,y,role
//! MAIN,550,350,hub
//! PRG,415,305,spoke
//! Brno,780,545,spoke
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ph_core::{Point, StationId};

use crate::{NetworkError, NetworkResult};

/// Name and map position of one station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationSpec {
    pub name:     String,
    pub location: Point,
}

/// Validated topology: at least one spoke, exactly one hub, unique names,
/// and fewer spokes than `StationId::INVALID`.
///
/// Only [`TopologyBuilder::build`] creates one, so every `Topology` in hand
/// has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    spokes: Vec<StationSpec>,
    hub:    StationSpec,
}

impl Topology {
    /// Spokes in registration order; `spokes()[i]` becomes `StationId(i)`.
    #[inline]
    pub fn spokes(&self) -> &[StationSpec] {
        &self.spokes
    }

    #[inline]
    pub fn hub(&self) -> &StationSpec {
        &self.hub
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`Topology`].
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    spokes: Vec<StationSpec>,
    hubs:   Vec<StationSpec>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spoke and return the id it will have in the network.
    pub fn add_spoke(&mut self, name: impl Into<String>, location: Point) -> StationId {
        let id = StationId(self.spokes.len().min(u16::MAX as usize) as u16);
        self.spokes.push(StationSpec { name: name.into(), location });
        id
    }

    /// Register the hub.  Registering more than one fails at `build`.
    pub fn set_hub(&mut self, name: impl Into<String>, location: Point) -> &mut Self {
        self.hubs.push(StationSpec { name: name.into(), location });
        self
    }

    pub fn build(self) -> NetworkResult<Topology> {
        let mut hubs = self.hubs;
        if hubs.len() != 1 {
            return Err(NetworkError::Topology(format!(
                "expected exactly one hub, found {}",
                hubs.len()
            )));
        }
        if self.spokes.is_empty() {
            return Err(NetworkError::Topology("at least one spoke station is required".into()));
        }
        // StationId::INVALID is reserved.
        if self.spokes.len() >= u16::MAX as usize {
            return Err(NetworkError::Topology(format!(
                "too many spoke stations: {}",
                self.spokes.len()
            )));
        }

        let hub = hubs.remove(0);
        let mut seen = HashSet::with_capacity(self.spokes.len() + 1);
        for spec in self.spokes.iter().chain(std::iter::once(&hub)) {
            if spec.name.trim().is_empty() {
                return Err(NetworkError::Topology("station names must not be empty".into()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(NetworkError::Topology(format!(
                    "duplicate station name {:?}",
                    spec.name
                )));
            }
        }

        Ok(Topology { spokes: self.spokes, hub })
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TopologyRecord {
    name: String,
    x:    f32,
    y:    f32,
    role: String,
}

/// Load a [`Topology`] from a CSV file.
pub fn load_topology_csv(path: &Path) -> NetworkResult<Topology> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_topology_reader(file)
}

/// Like [`load_topology_csv`] but accepts any `Read` source.
pub fn load_topology_reader<R: Read>(reader: R) -> NetworkResult<Topology> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut builder = TopologyBuilder::new();

    for result in csv_reader.deserialize::<TopologyRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let location = Point::new(row.x, row.y);
        match row.role.to_ascii_lowercase().as_str() {
            "spoke" => {
                builder.add_spoke(row.name, location);
            }
            "hub" => {
                builder.set_hub(row.name, location);
            }
            other => {
                return Err(NetworkError::Parse(format!(
                    "invalid role {other:?} for station {:?}: expected \"spoke\" or \"hub\"",
                    row.name
                )));
            }
        }
    }

    builder.build()
}
