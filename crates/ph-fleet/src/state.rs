//! Vehicle states and the transitions between them.

use ph_core::{SimTime, VehicleId};

/// Where a vehicle is in its home → hub → home cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleState {
    /// Parked at the home station with nothing on board.
    #[default]
    Idle,
    /// Driving to the hub with the packages collected at home.
    MovingToHub,
    /// Parked at the hub until the dwell time has passed.
    WaitingAtHub,
    /// Driving back to the home station.
    MovingHome,
}

impl VehicleState {
    /// `true` while the motion rule applies.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, VehicleState::MovingToHub | VehicleState::MovingHome)
    }

    /// Label used in CSV output and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleState::Idle         => "idle",
            VehicleState::MovingToHub  => "moving_to_hub",
            VehicleState::WaitingAtHub => "waiting_at_hub",
            VehicleState::MovingHome   => "moving_home",
        }
    }
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state change made by one vehicle during one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Transition {
    pub vehicle: VehicleId,
    pub from:    VehicleState,
    pub to:      VehicleState,
    /// Packages that changed hands: collected at home, dropped at the hub,
    /// or delivered home, depending on the edge.
    pub packages: usize,
    pub at:       SimTime,
}
