//! Prints the three reference intersections and a clipped segment fan.
//!
//! Run: `cargo run -p planar --example intersect_demo`

use planar::api::{clip_segment_against_convex, intersect_polygons, Edge, Point, Polygon};

fn poly(v: &[(i64, i64)]) -> Polygon {
    Polygon::new(v.iter().map(|&(x, y)| Point::new(x, y)).collect()).expect("demo polygon")
}

fn show(label: &str, p: &Polygon) {
    let pts: Vec<(i64, i64)> = p.vertices().map(|v| (v.x, v.y)).collect();
    println!("{label}: {} vertices {:?}", p.len(), pts);
}

fn main() {
    let pairs = [
        (
            "quad ∩ triangle",
            poly(&[(50, 50), (100, 200), (200, 300), (300, 100)]),
            poly(&[(100, 400), (300, 300), (150, 100)]),
        ),
        (
            "rect ∩ notched pentagon",
            poly(&[(100, 200), (100, 450), (300, 450), (300, 200)]),
            poly(&[(150, 150), (150, 400), (400, 400), (250, 300), (400, 150)]),
        ),
        (
            "disjoint triangles",
            poly(&[(50, 50), (100, 200), (200, 300)]),
            poly(&[(300, 400), (350, 300), (250, 300)]),
        ),
    ];
    for (label, a, b) in &pairs {
        let r = intersect_polygons(a, b).expect("demo inputs are simple");
        show(label, &r);
    }

    let clip = poly(&[(100, 100), (250, 350), (400, 400), (380, 320), (250, 150)]);
    for (a, b) in [((100, 200), (350, 400)), ((100, 350), (400, 20)), ((400, 200), (450, 250))] {
        let line = Edge::new(Point::new(a.0, a.1), Point::new(b.0, b.1));
        let out = clip_segment_against_convex(&line, &clip).expect("clip polygon is convex");
        if out.is_degenerate() {
            println!("{a:?} -> {b:?}: outside");
        } else {
            println!("{a:?} -> {b:?}: ({}, {}) -> ({}, {})", out.a.x, out.a.y, out.b.x, out.b.y);
        }
    }
}
