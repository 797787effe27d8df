//! The `Package` value and its id allocator.

use std::fmt;

use ph_core::{PackageId, StationId};

/// One shipment from a source spoke to a destination spoke.
///
/// `delivered` flips to `true` exactly once, when the package is collected
/// from its source's outgoing queue, and never reverts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id:          PackageId,
    pub source:      StationId,
    pub destination: StationId,
    delivered:       bool,
}

impl Package {
    /// Only [`Network`][crate::Network] creates packages, after validating
    /// the route.
    pub(crate) fn new(id: PackageId, source: StationId, destination: StationId) -> Self {
        Self { id, source, destination, delivered: false }
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    #[inline]
    pub(crate) fn mark_delivered(&mut self) {
        self.delivered = true;
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Package #{} -> {}", self.id.0, self.destination)?;
        if self.delivered {
            f.write_str(" (delivered)")?;
        }
        Ok(())
    }
}

/// Monotonic package id source.
///
/// Owned by the [`Network`][crate::Network] and passed to every package
/// creation.  Ids start at 1 and are never reused, not even across a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageIdAllocator {
    next: u64,
}

impl Default for PackageIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> PackageId {
        let id = PackageId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`allocate`][Self::allocate] will return.
    #[inline]
    pub fn peek(&self) -> PackageId {
        PackageId(self.next)
    }
}
