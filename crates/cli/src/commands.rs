//! Scene commands. Each returns a serializable report; `main` prints or writes it.

use anyhow::{Context, Result};
use planar::api::{
    clip_segment_against_convex, fill_polygon_with_cfg, intersect_polygons, FillRule, GeomCfg,
    Polygon,
};
use serde::Serialize;

use crate::scene::{xy, Scene, Xy};

#[derive(Debug, Serialize, PartialEq)]
pub struct PolygonInfo {
    pub index: usize,
    pub vertices: Vec<Xy>,
    pub simple: bool,
    pub convex: bool,
    pub area: f64,
    pub bbox: [i64; 4],
}

impl PolygonInfo {
    fn new(index: usize, p: &Polygon) -> Self {
        let bb = p.bbox();
        Self {
            index,
            vertices: p.vertices().map(xy).collect(),
            simple: p.is_simple(),
            convex: p.is_convex(),
            area: p.area(),
            bbox: [bb.x_min, bb.y_min, bb.x_max, bb.y_max],
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PointHit {
    pub point: Xy,
    pub inside: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ClippedSegment {
    pub segment: [Xy; 2],
    /// `None` when the segment lies outside the clip polygon.
    pub clipped: Option<[Xy; 2]>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FillCount {
    pub pixels: usize,
}

/// Normalized vertices and classification of every polygon in the scene.
pub fn classify(scene: &Scene) -> Result<Vec<PolygonInfo>> {
    (0..scene.polygons.len())
        .map(|i| Ok(PolygonInfo::new(i, &scene.polygon(i)?)))
        .collect()
}

/// Containment of every scene point in polygon 0.
pub fn contains(scene: &Scene, rule: FillRule, cfg: GeomCfg) -> Result<Vec<PointHit>> {
    let poly = scene.polygon(0)?;
    Ok(scene
        .points()
        .map(|p| PointHit {
            point: xy(p),
            inside: poly.contains_with_cfg(p, rule, cfg),
        })
        .collect())
}

/// Every scene segment clipped against polygon 0, which must be convex.
pub fn clip(scene: &Scene) -> Result<Vec<ClippedSegment>> {
    let poly = scene.polygon(0)?;
    scene
        .segments()
        .map(|s| {
            let out = clip_segment_against_convex(&s, &poly).context("clip polygon")?;
            Ok(ClippedSegment {
                segment: [xy(s.a), xy(s.b)],
                clipped: (!out.is_degenerate()).then(|| [xy(out.a), xy(out.b)]),
            })
        })
        .collect()
}

/// Polygon 0 ∩ polygon 1; `None` for an empty intersection.
pub fn intersect(scene: &Scene) -> Result<Option<PolygonInfo>> {
    let a = scene.polygon(0)?;
    let b = scene.polygon(1)?;
    let r = intersect_polygons(&a, &b).context("intersecting polygon 0 with polygon 1")?;
    Ok((!r.is_empty()).then(|| PolygonInfo::new(0, &r)))
}

/// Number of pixels of polygon 0 that `rule` fills.
pub fn fill(scene: &Scene, rule: FillRule, cfg: GeomCfg) -> Result<FillCount> {
    let poly = scene.polygon(0)?;
    let mut sink: Vec<(i64, i64, ())> = Vec::new();
    let pixels = fill_polygon_with_cfg(&poly, rule, &mut sink, (), cfg);
    Ok(FillCount { pixels })
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub planar_version: &'static str,
    pub code_rev: String,
    pub polygons: Vec<PolygonInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Vec<PointHit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Vec<ClippedSegment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersection: Option<Option<PolygonInfo>>,
}

/// Version block plus every command that applies to the scene.
///
/// Point and segment sections need polygon 0, the intersection needs two
/// polygons; sections without their inputs are omitted. Clip is skipped for a
/// non-convex polygon 0.
pub fn report(scene: &Scene, rule: FillRule, cfg: GeomCfg, code_rev: String) -> Result<Report> {
    let polygons = classify(scene)?;
    let has_clip_poly = polygons.first().is_some_and(|p| p.convex);
    Ok(Report {
        planar_version: planar::VERSION,
        code_rev,
        contains: (!polygons.is_empty() && !scene.points.is_empty())
            .then(|| contains(scene, rule, cfg))
            .transpose()?,
        clip: (has_clip_poly && !scene.segments.is_empty())
            .then(|| clip(scene))
            .transpose()?,
        intersection: (polygons.len() >= 2).then(|| intersect(scene)).transpose()?,
        polygons,
    })
}
