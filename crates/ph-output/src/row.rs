//! Plain data row types written by output backends.

use ph_fleet::VehicleState;

/// One vehicle at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSnapshotRow {
    pub step:      u64,
    /// Simulated seconds since start.
    pub time_secs: u64,
    pub vehicle:   u16,
    pub home:      u16,
    pub state:     VehicleState,
    pub x:         f32,
    pub y:         f32,
    pub carried:   u32,
}

/// Counters of one station at a snapshot step.
///
/// The hub has no station id and is written with `station = u16::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSummaryRow {
    pub step:             u64,
    pub station:          u16,
    pub pending_outgoing: u32,
    pub incoming:         u32,
    pub total_received:   u64,
}
