//! Random integer polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Reproducible polygon streams for property tests and benchmarks.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, round the vertices onto the integer grid around `center`.
//! - Sorted angles make the ring star-shaped around `center`, hence simple before
//!   rounding; rounding can still fold thin spikes, so draws that are not simple
//!   come back as `None`.
//! - A replay token `(seed, index)` keys the RNG, so any draw of a stream can
//!   be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

use super::shape::Polygon;
use super::util::convex_hull;

/// How many vertices a draw starts from; the result can lose some to
/// rounding (star draws) or to the hull (convex draws).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range; both ends are raised to 3.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw(self, rng: &mut StdRng) -> usize {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        rng.gen_range(lo..=hi.max(lo))
    }
}

/// Shape of the radial sampler; vertices land on the integer grid around `center`.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Per-vertex angle offset, as a share of the even spacing `2π/n` (0..=0.49).
    pub angle_jitter_frac: f64,
    /// Relative spread of the radius around `base_radius` (0..=0.9).
    pub radial_jitter: f64,
    /// Mean distance from `center`, in grid units (at least 1).
    pub base_radius: f64,
    pub center: Point,
    /// Rotate the whole ring by a random angle.
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 100.0,
            center: Point::new(200, 200),
            random_phase: true,
        }
    }
}

/// Address of one draw: the same `(seed, index)` always yields the same polygon,
/// and neighbouring indices give unrelated ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// ChaCha key: seed and index little-endian in the first 16 bytes.
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

fn draw_ring(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1.0);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Point::new((th.cos() * r).round() as i64, (th.sin() * r).round() as i64)
        })
        .collect()
}

/// Draw a random simple (generally non-convex) polygon.
///
/// `None` when rounding produced repeated points or a self-intersection.
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    Polygon::new(draw_ring(cfg, tok))
        .ok()
        .filter(Polygon::is_simple)
}

/// Draw a random convex polygon: the integer hull of a radial ring.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    Polygon::new(convex_hull(&draw_ring(cfg, tok))).ok()
}
