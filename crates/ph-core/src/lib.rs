//! `ph-core`: foundational types for the `parcel_hub` simulation.
//!
//! This crate is a dependency of every other `ph-*` crate.  It has no `ph-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StationId`, `VehicleId`, `PackageId`                 |
//! | [`geo`]         | `Point`, planar distance and stepping                 |
//! | [`time`]        | `SimTime`, `TimeOfDay`, `SimClock`                    |
//! | [`config`]      | `SimConfig` and the default constants                 |
//! | [`rng`]         | `SimRng` (seeded, for package generators)             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{PackageId, StationId, VehicleId};
pub use rng::SimRng;
pub use time::{SimClock, SimTime, TimeOfDay};
