//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `station_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StationSummaryRow, VehicleSnapshotRow};

pub const VEHICLE_SNAPSHOTS_FILE: &str = "vehicle_snapshots.csv";
pub const STATION_SUMMARIES_FILE: &str = "station_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    vehicles: Writer<File>,
    stations: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut vehicles = Writer::from_path(dir.join(VEHICLE_SNAPSHOTS_FILE))?;
        vehicles.write_record(["step", "time_secs", "vehicle", "home", "state", "x", "y", "carried"])?;

        let mut stations = Writer::from_path(dir.join(STATION_SUMMARIES_FILE))?;
        stations.write_record(["step", "station", "pending_outgoing", "incoming", "total_received"])?;

        Ok(Self {
            vehicles,
            stations,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_vehicle_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.step.to_string(),
                row.time_secs.to_string(),
                row.vehicle.to_string(),
                row.home.to_string(),
                row.state.as_str().to_owned(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.carried.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_station_summaries(&mut self, rows: &[StationSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.stations.write_record(&[
                row.step.to_string(),
                row.station.to_string(),
                row.pending_outgoing.to_string(),
                row.incoming.to_string(),
                row.total_received.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.vehicles.flush()?;
        self.stations.flush()?;
        Ok(())
    }
}
