//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use ph_core::{SimClock, StationId};
use ph_fleet::Fleet;
use ph_network::{Network, PackageCounts};
use ph_sim::SimObserver;

use crate::row::{StationSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes vehicle snapshots and station summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, step: u64, clock: &SimClock, network: &Network, fleet: &Fleet) {
        let vehicles: Vec<VehicleSnapshotRow> = fleet
            .vehicles()
            .iter()
            .map(|v| VehicleSnapshotRow {
                step,
                time_secs: clock.now.0,
                vehicle:   v.id.0,
                home:      v.home.0,
                state:     v.state,
                x:         v.position.x,
                y:         v.position.y,
                carried:   v.carried().len() as u32,
            })
            .collect();

        let hub = network.hub();
        let stations: Vec<StationSummaryRow> = network
            .stations()
            .iter()
            .map(|s| summary(step, s.id, s))
            .chain(std::iter::once(summary(step, StationId::INVALID, hub)))
            .collect();

        let result = self.writer.write_vehicle_snapshots(&vehicles);
        self.store_err(result);
        let result = self.writer.write_station_summaries(&stations);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_step: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

fn summary(step: u64, station: StationId, counts: &impl PackageCounts) -> StationSummaryRow {
    StationSummaryRow {
        step,
        station:          station.0,
        pending_outgoing: counts.pending_outgoing() as u32,
        incoming:         counts.incoming_count() as u32,
        total_received:   counts.total_received(),
    }
}
