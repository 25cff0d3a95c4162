// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_point_map --heading-base-level=0

//! Bracken Point Map: a Kurbo-native point picking map.
//!
//! Bracken Point Map is a reusable building block for UIs, canvas and vector
//! editors, and CAD viewers that need to pick point-like elements (markers,
//! handles, anchors, vertices) under a cursor or inside a viewport.
//!
//! - Insert [`kurbo::Point`]-keyed payloads with per-entry visibility/picking flags.
//! - Query a viewport rectangle for visible entries.
//! - Hit test a cursor position with a tolerance, nearest entry wins.
//!
//! Geometry is accelerated by [`bracken_quadtree`]: the map pairs a payload
//! store with a `QuadTree` keyed by entry slot, so payloads can be any type
//! while the index stays small and flat.
//!
//! ## Not a scene graph
//!
//! Entries have no hierarchy, transform, or z-order; they are bare points.
//! Upstream code that needs world-space transforms should apply them before
//! inserting and feed this map final coordinates.
//!
//! # Example
//!
//! ```rust
//! use bracken_point_map::{EntryFlags, PointMap, QueryFilter};
//! use kurbo::{Point, Rect};
//!
//! // Track a few markers on a 1000x1000 canvas.
//! let mut map = PointMap::new(Rect::new(0.0, 0.0, 1000.0, 1000.0));
//! let a = map.try_insert(Point::new(100.0, 100.0), "a").unwrap();
//! let b = map.try_insert(Point::new(103.0, 100.0), "b").unwrap();
//!
//! // Cursor near both: the closer marker wins.
//! let filter = QueryFilter { visible_only: true, pickable_only: true };
//! let hit = map.hit_test(Point::new(101.0, 100.0), 8.0, filter).unwrap();
//! assert_eq!(hit, a);
//!
//! // Hide `b` from rectangle queries.
//! map.set_flags(b, EntryFlags::PICKABLE);
//! let visible: Vec<_> = map
//!     .query_rect(
//!         Rect::new(0.0, 0.0, 200.0, 200.0),
//!         QueryFilter { visible_only: true, pickable_only: false },
//!     )
//!     .collect();
//! assert_eq!(visible, [a]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod map;
pub mod types;

pub use map::PointMap;
pub use types::{EntryFlags, EntryId, QueryFilter};
