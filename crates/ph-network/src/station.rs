//! Spoke stations and the hub.
//!
//! Both share the receiving side, an [`IncomingQueue`] plus a monotonic
//! received counter.  Only a spoke [`Station`] has an outgoing queue; the
//! [`Hub`] never originates packages, so the difference is carried by the
//! type rather than by a naming convention.

use ph_core::{PackageId, Point, StationId};

use crate::Package;

// ── PackageCounts ─────────────────────────────────────────────────────────────

/// Read-only counters shown for every station and the hub.
pub trait PackageCounts {
    /// Packages waiting to be collected.  Always 0 for the hub.
    fn pending_outgoing(&self) -> usize;

    /// Packages currently sitting in the incoming queue.
    fn incoming_count(&self) -> usize;

    /// Packages ever received since the last reset.
    fn total_received(&self) -> u64;
}

// ── IncomingQueue ─────────────────────────────────────────────────────────────

/// Ordered receiving queue with a running received counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncomingQueue {
    packages:       Vec<Package>,
    total_received: u64,
}

impl IncomingQueue {
    /// Append `package` and bump the received counter.
    pub fn push(&mut self, package: Package) {
        self.packages.push(package);
        self.total_received += 1;
    }

    /// Remove the package with `id`.  Returns `None` if it is not queued.
    pub fn remove(&mut self, id: PackageId) -> Option<Package> {
        let pos = self.packages.iter().position(|p| p.id == id)?;
        Some(self.packages.remove(pos))
    }

    /// Remove every package matching `pred`, preserving queue order on both
    /// sides.  Matching nothing is not an error.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<Package>
    where
        F: FnMut(&Package) -> bool,
    {
        let (taken, kept): (Vec<Package>, Vec<Package>) = std::mem::take(&mut self.packages)
            .into_iter()
            .partition(|p| pred(p));
        self.packages = kept;
        taken
    }

    /// `true` if any queued package matches `pred`.
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&Package) -> bool,
    {
        self.packages.iter().any(pred)
    }

    /// Empty the queue and reset the counter.
    pub fn clear(&mut self) {
        self.packages.clear();
        self.total_received = 0;
    }

    #[inline]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    #[inline]
    pub fn total_received(&self) -> u64 {
        self.total_received
    }
}

// ── Station ───────────────────────────────────────────────────────────────────

/// A spoke station: originates packages and receives those addressed to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:       StationId,
    pub name:     String,
    pub location: Point,
    /// Packages originated here and not yet collected by the vehicle.
    outgoing: Vec<Package>,
    /// Packages delivered here and not yet picked up by a customer.
    incoming: IncomingQueue,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, location: Point) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            outgoing: Vec::new(),
            incoming: IncomingQueue::default(),
        }
    }

    /// Append a freshly created package.  The route was validated by the
    /// [`Network`][crate::Network].
    pub(crate) fn push_outgoing(&mut self, package: Package) {
        debug_assert_eq!(package.source, self.id);
        self.outgoing.push(package);
    }

    /// Take every pending package out of the outgoing queue, marking each
    /// delivered.
    ///
    /// A package is returned by at most one call: it is marked before it
    /// leaves and the queue only hands out unmarked packages.
    pub fn collect_outgoing(&mut self) -> Vec<Package> {
        let (mut pending, kept): (Vec<Package>, Vec<Package>) =
            std::mem::take(&mut self.outgoing)
                .into_iter()
                .partition(|p| !p.is_delivered());
        self.outgoing = kept;
        for package in &mut pending {
            package.mark_delivered();
        }
        pending
    }

    /// Receive a package from a returning vehicle.
    pub fn add_incoming(&mut self, package: Package) {
        debug_assert_eq!(package.destination, self.id);
        self.incoming.push(package);
    }

    /// Customer pickup.  `None` if no such package is waiting.
    pub fn remove_incoming(&mut self, id: PackageId) -> Option<Package> {
        self.incoming.remove(id)
    }

    /// Remove every incoming package matching `pred`.
    pub fn remove_incoming_where<F>(&mut self, pred: F) -> Vec<Package>
    where
        F: FnMut(&Package) -> bool,
    {
        self.incoming.remove_where(pred)
    }

    /// Empty both queues and reset the received counter.
    pub fn clear(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }

    #[inline]
    pub fn outgoing(&self) -> &[Package] {
        &self.outgoing
    }

    #[inline]
    pub fn incoming(&self) -> &[Package] {
        self.incoming.packages()
    }
}

impl PackageCounts for Station {
    fn pending_outgoing(&self) -> usize {
        self.outgoing.iter().filter(|p| !p.is_delivered()).count()
    }

    fn incoming_count(&self) -> usize {
        self.incoming.len()
    }

    fn total_received(&self) -> u64 {
        self.incoming.total_received()
    }
}

// ── Hub ───────────────────────────────────────────────────────────────────────

/// The central relay.  Its incoming queue is a transit pool holding packages
/// from every spoke, each tagged with its final destination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hub {
    pub name:     String,
    pub location: Point,
    pool:         IncomingQueue,
}

impl Hub {
    pub fn new(name: impl Into<String>, location: Point) -> Self {
        Self {
            name: name.into(),
            location,
            pool: IncomingQueue::default(),
        }
    }

    /// Receive a package dropped off by a vehicle.
    pub fn add_incoming(&mut self, package: Package) {
        self.pool.push(package);
    }

    /// `true` if the pool holds at least one package bound for `station`.
    pub fn has_packages_for(&self, station: StationId) -> bool {
        self.pool.any(|p| p.destination == station)
    }

    /// Extract every package bound for `station`, in pool order.
    pub fn take_packages_for(&mut self, station: StationId) -> Vec<Package> {
        self.pool.remove_where(|p| p.destination == station)
    }

    /// Remove every pooled package matching `pred`.
    pub fn remove_incoming_where<F>(&mut self, pred: F) -> Vec<Package>
    where
        F: FnMut(&Package) -> bool,
    {
        self.pool.remove_where(pred)
    }

    pub fn clear(&mut self) {
        self.pool.clear();
    }

    #[inline]
    pub fn pool(&self) -> &[Package] {
        self.pool.packages()
    }
}

impl PackageCounts for Hub {
    fn pending_outgoing(&self) -> usize {
        0
    }

    fn incoming_count(&self) -> usize {
        self.pool.len()
    }

    fn total_received(&self) -> u64 {
        self.pool.total_received()
    }
}
