use super::*;
use crate::edge::Edge;
use crate::error::{GeomError, Role};
use crate::geometry::Point;
use crate::polygon::random::{draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken};
use crate::polygon::Polygon;
use proptest::prelude::*;

fn pts(v: &[(i64, i64)]) -> Vec<Point> {
    v.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn poly(v: &[(i64, i64)]) -> Polygon {
    Polygon::new(pts(v)).expect("valid polygon")
}

fn reversed(v: &[(i64, i64)]) -> Polygon {
    let mut p = pts(v);
    p.reverse();
    Polygon::new(p).expect("valid polygon")
}

fn seg(a: (i64, i64), b: (i64, i64)) -> Edge {
    Edge::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
}

fn vertex_set(p: &Polygon) -> Vec<(i64, i64)> {
    let mut v: Vec<_> = p.vertices().map(|q| (q.x, q.y)).collect();
    v.sort();
    v
}

fn sorted(v: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut v = v.to_vec();
    v.sort();
    v
}

/// Same cyclic vertex sequence up to the choice of start vertex.
fn same_ring(a: &Polygon, b: &Polygon) -> bool {
    let (pa, pb) = (a.to_points(), b.to_points());
    if pa.len() != pb.len() {
        return false;
    }
    if pa.is_empty() {
        return true;
    }
    (0..pb.len()).any(|s| (0..pa.len()).all(|k| pa[k] == pb[(s + k) % pb.len()]))
}

const CLIP_POLY: [(i64, i64); 5] = [(100, 100), (250, 350), (400, 400), (380, 320), (250, 150)];

const WA1_SUBJECT: [(i64, i64); 4] = [(50, 50), (100, 200), (200, 300), (300, 100)];
const WA1_CUTTER: [(i64, i64); 3] = [(100, 400), (300, 300), (150, 100)];
const WA2_SUBJECT: [(i64, i64); 4] = [(100, 200), (100, 450), (300, 450), (300, 200)];
const WA2_CUTTER: [(i64, i64); 5] = [(150, 150), (150, 400), (400, 400), (250, 300), (400, 150)];
const WA3_SUBJECT: [(i64, i64); 3] = [(50, 50), (100, 200), (200, 300)];
const WA3_CUTTER: [(i64, i64); 3] = [(300, 400), (350, 300), (250, 300)];

#[test]
fn cyrus_beck_demo_lines() {
    let cases = [
        (seg((100, 200), (350, 400)), seg((215, 292), (314, 371))),
        (seg((100, 350), (400, 20)), seg((190, 251), (265, 169))),
        (seg((200, 250), (300, 300)), seg((200, 250), (300, 300))),
        (seg((310, 310), (400, 340)), seg((310, 310), (384, 335))),
    ];
    for clip in [poly(&CLIP_POLY), reversed(&CLIP_POLY)] {
        assert!(clip.is_convex());
        for (line, expected) in &cases {
            let got = cyrus_beck(line, &clip);
            assert_eq!((got.a, got.b), (expected.a, expected.b), "clipping {:?}", line);
        }
        let outside = cyrus_beck(&seg((400, 200), (450, 250)), &clip);
        assert!(outside.is_degenerate());
        assert_eq!(outside.a, Point::new(400, 200));
    }
}

#[test]
fn cyrus_beck_square() {
    let sq = poly(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
    // parallel to two sides and above the square
    assert!(cyrus_beck(&seg((-5, 15), (15, 15)), &sq).is_degenerate());
    // fully inside: unchanged
    let inside = cyrus_beck(&seg((2, 2), (8, 8)), &sq);
    assert_eq!((inside.a, inside.b), (Point::new(2, 2), Point::new(8, 8)));
    let across = cyrus_beck(&seg((-5, 5), (15, 5)), &sq);
    assert_eq!((across.a, across.b), (Point::new(0, 5), Point::new(10, 5)));
    let up = cyrus_beck(&seg((5, 15), (5, -5)), &sq);
    assert_eq!((up.a, up.b), (Point::new(5, 10), Point::new(5, 0)));
    // along a side: kept
    let side = cyrus_beck(&seg((0, 2), (0, 8)), &sq);
    assert_eq!((side.a, side.b), (Point::new(0, 2), Point::new(0, 8)));
    // a point segment
    assert!(cyrus_beck(&seg((3, 3), (3, 3)), &sq).is_degenerate());
    assert!(cyrus_beck(&seg((30, 3), (30, 3)), &sq).is_degenerate());
}

#[test]
fn checked_clip_requires_convex() {
    let dented = poly(&[(10, 10), (10, 20), (20, 20), (13, 16)]);
    assert_eq!(
        clip_segment_against_convex(&seg((0, 0), (30, 30)), &dented),
        Err(GeomError::NotConvex)
    );
    let tri = poly(&[(10, 10), (20, 30), (30, 20)]);
    assert!(clip_segment_against_convex(&seg((0, 0), (40, 40)), &tri).is_ok());
}

#[test]
fn crossing_table_orders_along_both_rings() {
    let s = poly(&WA2_SUBJECT);
    let c = poly(&WA2_CUTTER);
    let table = CrossingTable::build(s.edges(), c.edges());
    assert_eq!(table.len(), 4);
    assert_eq!(table.along_subject(2), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(table.along_subject(3), vec![(3, 0)]);
    assert!(table.along_subject(0).is_empty());
    assert_eq!(table.along_cutter(0), vec![(3, 0)]);
    assert_eq!(table.along_cutter(2), vec![(2, 2)]);
    let mid = table.get((2, 2)).expect("crossing on the notch");
    assert_eq!(mid.point, Point::new(300, 333));
    assert!(mid.t_subject > 0.0 && mid.t_subject < 1.0);
    assert!(table.iter().all(|(_, x)| x.t_cutter > 0.0 && x.t_cutter < 1.0));
}

#[test]
fn crossing_table_skips_touching_edges() {
    let p = poly(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
    let table = CrossingTable::build(p.edges(), p.edges());
    assert!(table.is_empty());
}

#[test]
fn weiler_atherton_quad_triangle() {
    let expected = sorted(&[(200, 300), (240, 220), (150, 100), (129, 229)]);
    let r = weiler_atherton(&poly(&WA1_SUBJECT), &poly(&WA1_CUTTER));
    assert_eq!(vertex_set(&r), expected);
    let r2 = weiler_atherton(&reversed(&WA1_SUBJECT), &reversed(&WA1_CUTTER));
    assert!(same_ring(&r, &r2));
}

#[test]
fn weiler_atherton_rect_notched_pentagon() {
    let expected = sorted(&[
        (300, 200),
        (150, 200),
        (150, 400),
        (300, 400),
        (300, 333),
        (250, 300),
        (300, 250),
    ]);
    let r = weiler_atherton(&poly(&WA2_SUBJECT), &poly(&WA2_CUTTER));
    assert_eq!(vertex_set(&r), expected);
    assert!(r.is_simple());
    assert!(!r.is_convex());
    let r2 = weiler_atherton(&reversed(&WA2_SUBJECT), &reversed(&WA2_CUTTER));
    assert!(same_ring(&r, &r2));
}

#[test]
fn weiler_atherton_disjoint_is_empty() {
    let pairs: [(Vec<(i64, i64)>, Vec<(i64, i64)>); 2] = [
        (WA3_SUBJECT.to_vec(), WA3_CUTTER.to_vec()),
        (
            vec![(0, 0), (60, 0), (60, 60), (0, 60)],
            vec![(100, 100), (160, 100), (160, 160)],
        ),
    ];
    for (a, b) in &pairs {
        assert!(weiler_atherton(&poly(a), &poly(b)).is_empty());
        assert!(weiler_atherton(&reversed(a), &reversed(b)).is_empty());
        assert!(intersect_polygons(&poly(a), &poly(b)).unwrap().is_empty());
    }
}

#[test]
fn weiler_atherton_overlapping_squares() {
    let a = [(0, 0), (60, 0), (60, 60), (0, 60)];
    let b = [(30, 30), (90, 30), (90, 90), (30, 90)];
    let expected = sorted(&[(30, 30), (60, 30), (60, 60), (30, 60)]);
    let r = weiler_atherton(&poly(&a), &poly(&b));
    assert_eq!(vertex_set(&r), expected);
    let r2 = weiler_atherton(&reversed(&a), &reversed(&b));
    assert!(same_ring(&r, &r2));
    // a half-plane-like cutter over the right half
    let wide = [(50, -50), (150, -50), (150, 150), (50, 150)];
    let big = [(0, 0), (100, 0), (100, 100), (0, 100)];
    let half = weiler_atherton(&poly(&big), &poly(&wide));
    assert_eq!(
        vertex_set(&half),
        sorted(&[(50, 0), (100, 0), (100, 100), (50, 100)])
    );
}

#[test]
fn weiler_atherton_containment_without_crossings() {
    let outer = poly(&[(0, 0), (100, 0), (100, 100), (0, 100)]);
    let inner = poly(&[(20, 20), (80, 20), (80, 80), (20, 80)]);
    // subject inside cutter: the walk never leaves the subject ring
    assert!(same_ring(&weiler_atherton(&inner, &outer), &inner));
    // cutter inside subject: no subject vertex starts a walk, so nothing is found
    assert!(weiler_atherton(&outer, &inner).is_empty());
}

#[test]
fn weiler_atherton_self_intersection_is_identity() {
    for v in [
        vec![(0, 0), (10, 0), (10, 10), (0, 10)],
        vec![(10, 10), (20, 30), (30, 20)],
        CLIP_POLY.to_vec(),
    ] {
        let p = poly(&v);
        assert!(same_ring(&weiler_atherton(&p, &p), &p));
    }
}

#[test]
fn checked_intersection_rejects_non_simple() {
    let bowtie = poly(&[(10, 10), (20, 10), (10, 20), (20, 20)]);
    let sq = poly(&[(0, 0), (30, 0), (30, 30), (0, 30)]);
    assert_eq!(
        intersect_polygons(&bowtie, &sq),
        Err(GeomError::NotSimple {
            role: Role::Subject
        })
    );
    assert_eq!(
        intersect_polygons(&sq, &bowtie),
        Err(GeomError::NotSimple { role: Role::Cutter })
    );
    assert_eq!(
        intersect_polygons(&Polygon::empty(), &bowtie),
        Ok(Polygon::empty())
    );
}

#[test]
fn checked_intersection_rejects_touching_vertices() {
    let sq = poly(&[(0, 0), (100, 0), (100, 100), (0, 100)]);
    // (50, 0) sits inside the square's bottom edge
    let tri = poly(&[(50, 0), (150, 50), (150, -50)]);
    let at = |p: &Polygon| p.vertices().position(|v| v == Point::new(50, 0)).unwrap();
    assert_eq!(
        intersect_polygons(&sq, &tri),
        Err(GeomError::VertexOnEdge {
            role: Role::Cutter,
            index: at(&tri)
        })
    );
    assert_eq!(
        intersect_polygons(&tri, &sq),
        Err(GeomError::VertexOnEdge {
            role: Role::Subject,
            index: at(&tri)
        })
    );
    // corner to corner
    let corner = poly(&[(100, 100), (200, 100), (200, 200), (100, 200)]);
    assert!(matches!(
        intersect_polygons(&sq, &corner),
        Err(GeomError::VertexOnEdge {
            role: Role::Subject,
            ..
        })
    ));
    // same ring from another start vertex is still the identity
    let rotated = poly(&[(100, 100), (0, 100), (0, 0), (100, 0)]);
    assert_eq!(intersect_polygons(&sq, &rotated), Ok(sq.clone()));
}

#[test]
fn checked_intersection_area_never_exceeds_inputs() {
    let cfg = RadialCfg::default();
    let mut checked = 0;
    for seed in 0..200u64 {
        let a = draw_star_polygon(cfg, ReplayToken { seed, index: 0 });
        let b = draw_star_polygon(cfg, ReplayToken { seed, index: 1 });
        let (Some(a), Some(mut b)) = (a, b) else {
            continue;
        };
        b.translate(Point::new(seed as i64 % 60 - 30, seed as i64 % 37 - 18));
        if let Ok(r) = intersect_polygons(&a, &b) {
            checked += 1;
            assert!(
                r.area() <= a.area().min(b.area()) * 1.05,
                "seed {seed}: {} vs {} and {}",
                r.area(),
                a.area(),
                b.area()
            );
        }
    }
    assert!(checked > 0);
}

proptest! {
    #[test]
    fn convex_self_intersection_is_identity(seed in any::<u64>(), index in 0u64..16) {
        if let Some(p) = draw_convex_polygon(RadialCfg::default(), ReplayToken { seed, index }) {
            let r = intersect_polygons(&p, &p).expect("convex input is simple");
            prop_assert!(same_ring(&r, &p));
        }
    }

    #[test]
    fn reversing_inputs_keeps_the_region(seed in any::<u64>(), dx in -80i64..80, dy in -80i64..80) {
        let cfg = RadialCfg::default();
        let a = draw_convex_polygon(cfg, ReplayToken { seed, index: 0 });
        let b = draw_convex_polygon(cfg, ReplayToken { seed, index: 1 });
        if let (Some(a), Some(mut b)) = (a, b) {
            b.translate(Point::new(dx, dy));
            let mut ra = a.to_points();
            ra.reverse();
            let mut rb = b.to_points();
            rb.reverse();
            let ra = Polygon::new(ra).expect("reversal keeps validity");
            let rb = Polygon::new(rb).expect("reversal keeps validity");
            let fwd = weiler_atherton(&a, &b);
            let back = weiler_atherton(&ra, &rb);
            prop_assert!(same_ring(&fwd, &back));
        }
    }
}
