// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markers on a canvas: viewport queries and cursor hit testing.

use bracken_point_map::{EntryFlags, PointMap, QueryFilter};
use kurbo::{Point, Rect};

fn main() {
    let mut map = PointMap::new(Rect::new(0.0, 0.0, 1000.0, 1000.0));

    // A small diagonal strip of markers.
    for i in 0..10_u32 {
        let p = Point::new(f64::from(i) * 100.0 + 50.0, f64::from(i) * 100.0 + 50.0);
        let id = map.try_insert(p, i).expect("marker inside canvas");
        // Hide every other marker.
        if i % 2 == 1 {
            map.set_flags(id, EntryFlags::PICKABLE);
        }
    }

    let filter = QueryFilter {
        visible_only: true,
        pickable_only: false,
    };
    let viewport = Rect::new(0.0, 0.0, 500.0, 500.0);
    let visible: Vec<_> = map
        .query_rect(viewport, filter)
        .filter_map(|id| map.get(id).copied())
        .collect();
    println!("visible in {viewport:?}: {visible:?}");

    // Cursor near marker 2 (at 250, 250).
    let cursor = Point::new(247.0, 251.0);
    let pick = QueryFilter {
        visible_only: true,
        pickable_only: true,
    };
    match map.hit_test(cursor, 10.0, pick) {
        Some(id) => println!("picked marker {:?} at {:?}", map.get(id), map.point_of(id)),
        None => println!("nothing within tolerance of {cursor:?}"),
    }
}
