//! `ph-fleet`: shuttle vehicles and the arena that holds them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `VehicleState`, `Transition`                                      |
//! | [`vehicle`] | `Vehicle`: one shuttle, its motion, and its state machine        |
//! | [`fleet`]   | `Fleet`: vehicle arena, contention check, per-vehicle stepping   |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                                    |
//!
//! # Cycle
//!
//! ```text
//! Idle ──(pending outgoing, or hub holds mail for home)──▶ MovingToHub
//!   ▲                                                          │ arrive: drop carried into hub pool
//!   │                                                          ▼
//! MovingHome ◀──(no peer carries mail for home, dwell elapsed)── WaitingAtHub
//!   │ arrive: move hub mail for home into home's incoming queue
//!   └──▶ Idle
//! ```
//!
//! Vehicles never hold references to each other.  The contention check
//! reads the arena by `VehicleId`; see [`Fleet::in_transit_for`].

pub mod error;
pub mod fleet;
pub mod state;
pub mod vehicle;


pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use state::{Transition, VehicleState};
pub use vehicle::{StepContext, Vehicle};
