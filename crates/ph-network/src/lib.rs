//! `ph-network`: packages and the stations that hold them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`package`]   | `Package`, `PackageIdAllocator`                                 |
//! | [`station`]   | `Station` (spoke), `Hub`, `IncomingQueue`, `PackageCounts`      |
//! | [`topology`]  | `Topology`, `TopologyBuilder`, CSV loader                       |
//! | [`network`]   | `Network`: every station, the hub, and the id allocator        |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                              |
//!
//! # Custody
//!
//! `Package` is deliberately not `Copy` and queues hand packages out by
//! value.  Moving a package from one queue to another is a Rust move, so a
//! package cannot be left behind in two containers at once.

pub mod error;
pub mod network;
pub mod package;
pub mod station;
pub mod topology;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::Network;
pub use package::{Package, PackageIdAllocator};
pub use station::{Hub, IncomingQueue, PackageCounts, Station};
pub use topology::{StationSpec, Topology, TopologyBuilder, load_topology_csv, load_topology_reader};
