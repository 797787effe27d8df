//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, StationSummaryRow, VehicleSnapshotRow};

/// A sink for snapshot rows.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row per vehicle.
    fn write_vehicle_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write one row per station, hub included.
    fn write_station_summaries(&mut self, rows: &[StationSummaryRow]) -> OutputResult<()>;

    /// Flush all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
