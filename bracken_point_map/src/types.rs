// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the point map: entry identifiers, flags, and query filters.

/// Identifier for an entry in a [`PointMap`](crate::PointMap).
///
/// A small, copyable handle. The map supports no removal, so slots are never
/// reused and an `EntryId` obtained from [`PointMap::try_insert`](crate::PointMap::try_insert)
/// stays valid for the lifetime of its map. No generation counter is needed
/// for the same reason.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntryId(pub(crate) u32);

impl EntryId {
    pub(crate) const fn new(slot: u32) -> Self {
        Self(slot)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Entry flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u8 {
        /// Entry is visible (participates in rectangle queries).
        const VISIBLE  = 0b0000_0001;
        /// Entry is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for EntryFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Filters applied during hit testing and rectangle queries.
///
/// Used by [`PointMap::hit_test`](crate::PointMap::hit_test) and
/// [`PointMap::query_rect`](crate::PointMap::query_rect).
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider entries marked [`EntryFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider entries marked [`EntryFlags::PICKABLE`] (hit-test).
    pub pickable_only: bool,
}
