// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core map implementation: entry storage, index synchronization, queries.

use alloc::vec::Vec;

use bracken_quadtree::{Aabb2D, Point2D, QuadTree};
use kurbo::{Point, Rect};

use crate::types::{EntryFlags, EntryId, QueryFilter};

#[derive(Debug)]
struct Entry<P> {
    point: Point,
    flags: EntryFlags,
    payload: P,
}

/// A kurbo-native map from points to payloads with spatial queries.
///
/// Pairs a payload store with a [`QuadTree`] keyed by entry slot: geometry
/// lives in the index, everything else on the entry. Entries carry
/// [`EntryFlags`] consulted by queries; flags never affect geometry, so
/// toggling them is cheap and touches no index state.
///
/// There is no removal (the underlying index only grows); hide an entry
/// instead by clearing its flags.
pub struct PointMap<P> {
    entries: Vec<Entry<P>>,
    index: QuadTree<f64, u32>,
}

impl<P> PointMap<P> {
    /// Create a map over the universe `bounds` with the index's default
    /// leaf capacity.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is inverted (`x1 < x0` or `y1 < y0`).
    pub fn new(bounds: Rect) -> Self {
        Self {
            entries: Vec::new(),
            index: QuadTree::new(rect_to_aabb(bounds)),
        }
    }

    /// Create a map over `bounds` with an explicit index leaf capacity.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is inverted or `capacity` is zero.
    pub fn with_capacity(bounds: Rect, capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: QuadTree::with_capacity(rect_to_aabb(bounds), capacity),
        }
    }

    /// The universe rectangle this map covers.
    pub fn bounds(&self) -> Rect {
        aabb_to_rect(self.index.bounds())
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `payload` at `point` with default flags.
    ///
    /// Returns `None` iff `point` lies outside the map's bounds.
    pub fn try_insert(&mut self, point: Point, payload: P) -> Option<EntryId> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "EntryId uses 32-bit slots by design."
        )]
        let slot = self.entries.len() as u32;
        if !self.index.try_insert(Point2D::new(point.x, point.y), slot) {
            return None;
        }
        self.entries.push(Entry {
            point,
            flags: EntryFlags::default(),
            payload,
        });
        Some(EntryId::new(slot))
    }

    /// Borrow the payload of `id`.
    pub fn get(&self, id: EntryId) -> Option<&P> {
        self.entries.get(id.idx()).map(|e| &e.payload)
    }

    /// The point `id` was inserted at.
    pub fn point_of(&self, id: EntryId) -> Option<Point> {
        self.entries.get(id.idx()).map(|e| e.point)
    }

    /// The flags of `id`.
    pub fn flags(&self, id: EntryId) -> Option<EntryFlags> {
        self.entries.get(id.idx()).map(|e| e.flags)
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: EntryId, flags: EntryFlags) {
        if let Some(e) = self.entries.get_mut(id.idx()) {
            e.flags = flags;
            // flags do not affect geometry; no index update
        }
    }

    /// Iterate entries whose point lies in `rect` (bounds inclusive).
    ///
    /// Honors [`QueryFilter::visible_only`]. Order follows the index's
    /// deterministic depth-first traversal.
    pub fn query_rect(&self, rect: Rect, filter: QueryFilter) -> impl Iterator<Item = EntryId> + '_ {
        let slots = self.index.query(rect_to_aabb(rect));
        slots.into_iter().filter_map(move |slot| {
            let e = self.entries.get(slot as usize)?;
            if filter.visible_only && !e.flags.contains(EntryFlags::VISIBLE) {
                return None;
            }
            Some(EntryId::new(slot))
        })
    }

    /// Pick the entry nearest to `point` within a `tolerance` half-extent
    /// square. Returns `None` when nothing qualifies.
    ///
    /// Honors [`QueryFilter`]. Distance ties resolve to the candidate the
    /// index yields first, which is deterministic.
    pub fn hit_test(&self, point: Point, tolerance: f64, filter: QueryFilter) -> Option<EntryId> {
        let probe = Rect::new(
            point.x - tolerance,
            point.y - tolerance,
            point.x + tolerance,
            point.y + tolerance,
        );
        let mut best: Option<(EntryId, f64)> = None;
        for slot in self.index.query(rect_to_aabb(probe)) {
            let Some(e) = self.entries.get(slot as usize) else {
                continue;
            };
            if filter.visible_only && !e.flags.contains(EntryFlags::VISIBLE) {
                continue;
            }
            if filter.pickable_only && !e.flags.contains(EntryFlags::PICKABLE) {
                continue;
            }
            let d = e.point.distance_squared(point);
            match best {
                None => best = Some((EntryId::new(slot), d)),
                Some((_, d_best)) if d < d_best => best = Some((EntryId::new(slot), d)),
                _ => {}
            }
        }
        best.map(|(id, _)| id)
    }
}

impl<P> core::fmt::Debug for PointMap<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointMap")
            .field("entries", &self.entries.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

fn rect_to_aabb(r: Rect) -> Aabb2D<f64> {
    Aabb2D::new(r.x0, r.y0, r.x1, r.y1)
}

fn aabb_to_rect(a: Aabb2D<f64>) -> Rect {
    Rect::new(a.min_x, a.min_y, a.max_x, a.max_y)
}
