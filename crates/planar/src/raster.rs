//! Pixel sinks and polygon scan fill.
//!
//! Image buffers are outside this crate; anything that accepts
//! `set_pixel(x, y, color)` can receive a fill. A `HashMap` sink is provided
//! for lookups, a `Vec` sink keeps pixels in scan order.

use std::collections::HashMap;

use crate::geometry::Point;
use crate::polygon::{FillRule, GeomCfg, Polygon};

/// Destination of rasterized pixels.
pub trait PixelSink<C> {
    fn set_pixel(&mut self, x: i64, y: i64, color: C);
}

impl<C> PixelSink<C> for HashMap<(i64, i64), C> {
    #[inline]
    fn set_pixel(&mut self, x: i64, y: i64, color: C) {
        self.insert((x, y), color);
    }
}

impl<C> PixelSink<C> for Vec<(i64, i64, C)> {
    #[inline]
    fn set_pixel(&mut self, x: i64, y: i64, color: C) {
        self.push((x, y, color));
    }
}

/// Set every pixel of the half-open bbox `[x_min, x_max) × [y_min, y_max)` that
/// `rule` reports inside `polygon`. Returns the number of pixels set.
pub fn fill_polygon<C: Clone>(
    polygon: &Polygon,
    rule: FillRule,
    sink: &mut impl PixelSink<C>,
    color: C,
) -> usize {
    fill_polygon_with_cfg(polygon, rule, sink, color, GeomCfg::default())
}

pub fn fill_polygon_with_cfg<C: Clone>(
    polygon: &Polygon,
    rule: FillRule,
    sink: &mut impl PixelSink<C>,
    color: C,
    cfg: GeomCfg,
) -> usize {
    if polygon.is_empty() {
        return 0;
    }
    let bb = polygon.bbox();
    let mut count = 0;
    for y in bb.y_min..bb.y_max {
        for x in bb.x_min..bb.x_max {
            if polygon.contains_with_cfg(Point::new(x, y), rule, cfg) {
                sink.set_pixel(x, y, color.clone());
                count += 1;
            }
        }
    }
    tracing::trace!(count, ?rule, "fill_polygon");
    count
}
