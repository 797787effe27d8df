//! `ph-output`: inspection output writers for the parcel_hub simulation.
//!
//! | Backend | Files created                                        |
//! |---------|------------------------------------------------------|
//! | CSV     | `vehicle_snapshots.csv`, `station_summaries.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ph_sim::SimObserver`.  The files
//! are a log of what happened, not a format the engine can be restored from.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ph_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! engine.run_steps(500, 60, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StationSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
