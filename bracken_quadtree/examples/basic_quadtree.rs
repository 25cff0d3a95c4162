// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Bracken Quadtree: insert, range query, and a structure dump.

use bracken_quadtree::{Aabb2D, Point2D, QuadTree};

fn main() {
    let mut tree: QuadTree<f64, &str> = QuadTree::new(Aabb2D::<f64>::from_xywh(0.0, 0.0, 100.0, 100.0));

    // Four entries fit in the root leaf; the fifth forces a split.
    for (value, x, y) in [
        ("a", 10.0, 10.0),
        ("b", 20.0, 20.0),
        ("c", 30.0, 30.0),
        ("d", 40.0, 40.0),
        ("e", 50.0, 50.0),
    ] {
        let stored = tree.try_insert(Point2D::new(x, y), value);
        println!("insert {value} at ({x}, {y}): {stored}");
    }

    // Out-of-bounds points are rejected, not stored.
    println!(
        "insert beyond bounds: {}",
        tree.try_insert(Point2D::new(120.0, 10.0), "zz")
    );

    let area = Aabb2D::<f64>::from_xywh(15.0, 15.0, 40.0, 40.0);
    println!("query {area:?}: {:?}", tree.query(area));

    println!("--- structure ---");
    print!("{}", tree.dump());
}
