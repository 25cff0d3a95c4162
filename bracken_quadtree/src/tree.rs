// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounded-capacity point quadtree.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Write as _};

use crate::types::{Aabb2D, Point2D, Scalar};

/// Number of entries a leaf holds before it subdivides, unless overridden
/// with [`QuadTree::with_capacity`].
pub const DEFAULT_CAPACITY: usize = 4;

/// Quadrants in probe order. A point on a shared boundary belongs to the
/// first quadrant in this order whose bounds contain it.
const QUADRANT_LABELS: [&str; 4] = ["NE", "NW", "SW", "SE"];

const ROOT: NodeIdx = NodeIdx::new(0);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

struct Node<T: Scalar, P: Copy + Debug> {
    bounds: Aabb2D<T>,
    entries: Vec<(Point2D<T>, P)>,
    /// `None` while a leaf; quadrants in NE, NW, SW, SE order once split.
    children: Option<[NodeIdx; 4]>,
}

impl<T: Scalar, P: Copy + Debug> Node<T, P> {
    fn leaf(bounds: Aabb2D<T>, capacity: usize) -> Self {
        Self {
            bounds,
            entries: Vec::with_capacity(capacity),
            children: None,
        }
    }

    fn is_split(&self) -> bool {
        self.children.is_some()
    }
}

/// A bounded-capacity 2D point quadtree.
///
/// Stores `(point, value)` pairs within a fixed universe rectangle and answers
/// inclusive axis-aligned range queries. Each node holds up to a fixed number
/// of entries directly; an insert into a full leaf subdivides it into four
/// quadrants (NE, NW, SW, SE) and routes further inserts into them.
///
/// Two properties of the structure are deliberate and observable:
///
/// - Entries present on a node when it splits are *not* redistributed into the
///   new quadrants. They stay on the now-internal node permanently and are
///   still scanned by queries.
/// - Quadrants share their dividing lines, and containment is inclusive on
///   all bounds, so a point exactly on a shared boundary is accepted by more
///   than one quadrant. Insertion resolves the tie by probing quadrants in
///   NE, NW, SW, SE order and taking the first that contains the point.
///
/// Nodes live in a flat arena indexed by integer handles, so teardown is a
/// single buffer drop and neither insertion nor queries recurse: degenerate
/// inputs (many coincident points) can make the tree arbitrarily deep without
/// risking stack exhaustion.
///
/// There is no removal, rebalancing, or merging of quadrants. The tree is not
/// internally synchronized; wrap it in a lock for shared use.
///
/// Floating-point coordinates are assumed to be finite (no NaNs).
pub struct QuadTree<T: Scalar, P: Copy + Debug> {
    capacity: usize,
    len: usize,
    arena: Vec<Node<T, P>>,
}

impl<T: Scalar, P: Copy + Debug> QuadTree<T, P> {
    /// Create a tree covering `bounds` with [`DEFAULT_CAPACITY`] entries per leaf.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is inverted (`max < min` on either axis).
    pub fn new(bounds: Aabb2D<T>) -> Self {
        Self::with_capacity(bounds, DEFAULT_CAPACITY)
    }

    /// Create a tree covering `bounds` that splits leaves holding `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is inverted (`max < min` on either axis) or if
    /// `capacity` is zero.
    pub fn with_capacity(bounds: Aabb2D<T>, capacity: usize) -> Self {
        assert!(!bounds.is_empty(), "tree bounds must not be inverted");
        assert!(capacity > 0, "leaf capacity must be at least 1");
        Self {
            capacity,
            len: 0,
            arena: vec![Node::leaf(bounds, capacity)],
        }
    }

    /// The universe rectangle this tree indexes.
    pub fn bounds(&self) -> Aabb2D<T> {
        self.arena[ROOT.get()].bounds
    }

    /// The per-leaf entry capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the tree, split or not. Diagnostic only.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Insert `value` at `point`.
    ///
    /// Returns `false` iff `point` lies outside the tree's bounds; the entry
    /// is stored otherwise. Capacity is never a failure: an insert into a
    /// full leaf subdivides it and continues into the matching quadrant.
    pub fn try_insert(&mut self, point: Point2D<T>, value: P) -> bool {
        if !self.arena[ROOT.get()].bounds.contains_point(point) {
            return false;
        }
        let mut cur = ROOT;
        loop {
            // Invariant: point is inside arena[cur].bounds.
            let children = match self.arena[cur.get()].children {
                Some(children) => children,
                None => {
                    let node = &mut self.arena[cur.get()];
                    if node.entries.len() < self.capacity {
                        node.entries.push((point, value));
                        self.len += 1;
                        return true;
                    }
                    self.split(cur)
                }
            };
            let found = children
                .iter()
                .find(|c| self.arena[c.get()].bounds.contains_point(point));
            let Some(&next) = found else {
                // The quadrants cover the parent inclusively, so a contained
                // point always lands in one of them. Defensive exit.
                return false;
            };
            cur = next;
        }
    }

    /// Collect the values of all entries whose point lies in `area`.
    ///
    /// Equivalent to [`query_into`](Self::query_into) with a fresh collector.
    pub fn query(&self, area: Aabb2D<T>) -> Vec<P> {
        let mut out = Vec::new();
        self.query_into(area, &mut out);
        out
    }

    /// Append the values of all entries whose point lies in `area` to `out`.
    ///
    /// Matches are appended depth-first: a node's own entries in insertion
    /// order (residual entries of split nodes included), then its quadrants
    /// in NE, NW, SW, SE order. Subtrees whose bounds do not intersect
    /// `area` are skipped; this cannot drop matches because every stored
    /// point lies within its node's bounds.
    pub fn query_into(&self, area: Aabb2D<T>, out: &mut Vec<P>) {
        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx.get()];
            for (point, value) in &node.entries {
                if area.contains_point(*point) {
                    out.push(*value);
                }
            }
            if let Some(children) = node.children {
                // Reverse push keeps the NE, NW, SW, SE visit order.
                for child in children.iter().rev() {
                    if !area.intersect(&self.arena[child.get()].bounds).is_empty() {
                        stack.push(*child);
                    }
                }
            }
        }
    }

    /// Render a depth-first dump of the tree: per node its bounds, entry
    /// count, entries, and quadrants.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    /// Write the dump produced by [`dump`](Self::dump) into `out`.
    pub fn dump_into(&self, out: &mut String) {
        let mut stack = vec![(ROOT, 0_usize, "root")];
        while let Some((idx, depth, label)) = stack.pop() {
            let node = &self.arena[idx.get()];
            for _ in 0..depth {
                out.push_str("  ");
            }
            let _ = write!(
                out,
                "{label} ({:?}, {:?})..({:?}, {:?}) len={}",
                node.bounds.min_x,
                node.bounds.min_y,
                node.bounds.max_x,
                node.bounds.max_y,
                node.entries.len()
            );
            if node.is_split() {
                out.push_str(" split");
            }
            out.push('\n');
            for (point, value) in &node.entries {
                for _ in 0..=depth {
                    out.push_str("  ");
                }
                let _ = writeln!(out, "({:?}, {:?}) => {:?}", point.x, point.y, value);
            }
            if let Some(children) = node.children {
                for (child, quad) in children.iter().zip(QUADRANT_LABELS).rev() {
                    stack.push((*child, depth + 1, quad));
                }
            }
        }
    }

    /// Subdivide the leaf at `idx` and return its new children.
    ///
    /// The leaf's entries are left in place; only future inserts route into
    /// the quadrants.
    fn split(&mut self, idx: NodeIdx) -> [NodeIdx; 4] {
        let b = self.arena[idx.get()].bounds;
        let mid_x = T::mid(b.min_x, b.max_x);
        let mid_y = T::mid(b.min_y, b.max_y);
        let quadrants = [
            Aabb2D::new(b.min_x, b.min_y, mid_x, mid_y), // NE
            Aabb2D::new(mid_x, b.min_y, b.max_x, mid_y), // NW
            Aabb2D::new(mid_x, mid_y, b.max_x, b.max_y), // SW
            Aabb2D::new(b.min_x, mid_y, mid_x, b.max_y), // SE
        ];
        let base = self.arena.len();
        for q in quadrants {
            self.arena.push(Node::leaf(q, self.capacity));
        }
        let children = [
            NodeIdx::new(base),
            NodeIdx::new(base + 1),
            NodeIdx::new(base + 2),
            NodeIdx::new(base + 3),
        ];
        self.arena[idx.get()].children = Some(children);
        children
    }
}

impl<T: Scalar, P: Copy + Debug> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds())
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("nodes", &self.arena.len())
            .finish_non_exhaustive()
    }
}
