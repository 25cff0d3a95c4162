// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_quadtree --heading-base-level=0

//! Bracken Quadtree: a bounded-capacity 2D point quadtree.
//!
//! Bracken Quadtree is a reusable building block for point-set range queries.
//!
//! - Insert point-keyed values into a fixed universe rectangle with [`QuadTree::try_insert`].
//! - Query by inclusive axis-aligned rectangle with [`QuadTree::query`] or
//!   [`QuadTree::query_into`] (caller-supplied collector).
//! - Inspect the structure with [`QuadTree::dump`].
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//! Leaves hold up to a fixed number of entries (four by default); an insert into a
//! full leaf subdivides it into four quadrants and routes further inserts into them.
//! Entries already on a node when it splits stay there; queries scan them alongside
//! the quadrants, so a split never moves data.
//!
//! There is no removal and no rebalancing: the structure only grows, which keeps
//! handles and internal slots stable for layers built on top.
//!
//! # Example
//!
//! ```rust
//! use bracken_quadtree::{Aabb2D, Point2D, QuadTree};
//!
//! // Index a 100x100 universe.
//! let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::<f64>::from_xywh(0.0, 0.0, 100.0, 100.0));
//! assert!(tree.try_insert(Point2D::new(10.0, 10.0), 1));
//! assert!(tree.try_insert(Point2D::new(80.0, 30.0), 2));
//!
//! // Points outside the universe are rejected, not stored.
//! assert!(!tree.try_insert(Point2D::new(150.0, 10.0), 3));
//!
//! // Inclusive range query.
//! let hits = tree.query(Aabb2D::<f64>::from_xywh(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(hits, [1]);
//! ```
//!
//! Leaf capacity is tunable when the workload clusters heavily:
//!
//! ```rust
//! use bracken_quadtree::{Aabb2D, Point2D, QuadTree};
//!
//! let mut tree: QuadTree<f64, u32> =
//!     QuadTree::with_capacity(Aabb2D::<f64>::from_xywh(0.0, 0.0, 1.0, 1.0), 16);
//! assert!(tree.try_insert(Point2D::new(0.5, 0.5), 7));
//! assert_eq!(tree.query(tree.bounds()), [7]);
//! ```
//!
//! ## Boundary semantics
//!
//! Containment is inclusive on all four bounds, and the four quadrants of a split
//! share their dividing lines. A point exactly on a shared line is routed to the
//! first quadrant that contains it, in NE, NW, SW, SE probe order; this tie-break
//! is part of the contract, not an implementation accident.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. A NaN coordinate is
//! contained by no rectangle, so such inserts are rejected.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::{DEFAULT_CAPACITY, QuadTree};
pub use types::{Aabb2D, Point2D, Scalar};
