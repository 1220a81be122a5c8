//! Sparse table of proper crossings between two edge rings.
//!
//! Every crossing is computed once, keyed by `(subject edge, cutter edge)`. Both
//! boundary walks of Weiler–Atherton read the same entry, so the spliced point is
//! bit-identical in both augmented lists.

use std::collections::BTreeMap;

use crate::edge::{proper_crossing, Edge};
use crate::geometry::Point;

/// `(subject edge index, cutter edge index)`.
pub type CrossingKey = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    /// Parameter along the subject edge, in `(0, 1)`.
    pub t_subject: f64,
    /// Parameter along the cutter edge, in `(0, 1)`.
    pub t_cutter: f64,
    /// Crossing rounded onto the integer grid.
    pub point: Point,
}

#[derive(Clone, Debug, Default)]
pub struct CrossingTable {
    by_pair: BTreeMap<CrossingKey, Crossing>,
}

impl CrossingTable {
    /// All proper crossings between `subject` and `cutter` edges. O(n·m).
    pub fn build(subject: &[Edge], cutter: &[Edge]) -> Self {
        let mut by_pair = BTreeMap::new();
        for (i, se) in subject.iter().enumerate() {
            for (j, ce) in cutter.iter().enumerate() {
                if let Some(hit) = proper_crossing(se, ce) {
                    by_pair.insert(
                        (i, j),
                        Crossing {
                            t_subject: hit.t1,
                            t_cutter: hit.t2,
                            point: se.point_at(hit.t1),
                        },
                    );
                }
            }
        }
        Self { by_pair }
    }

    #[inline]
    pub fn get(&self, key: CrossingKey) -> Option<&Crossing> {
        self.by_pair.get(&key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_pair.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CrossingKey, &Crossing)> {
        self.by_pair.iter()
    }

    /// Keys of crossings on subject edge `i`, ordered along that edge.
    pub fn along_subject(&self, i: usize) -> Vec<CrossingKey> {
        let mut keys: Vec<(CrossingKey, f64)> = self
            .by_pair
            .range((i, 0)..(i + 1, 0))
            .map(|(k, c)| (*k, c.t_subject))
            .collect();
        keys.sort_by(|a, b| a.1.total_cmp(&b.1));
        keys.into_iter().map(|(k, _)| k).collect()
    }

    /// Keys of crossings on cutter edge `j`, ordered along that edge.
    pub fn along_cutter(&self, j: usize) -> Vec<CrossingKey> {
        let mut keys: Vec<(CrossingKey, f64)> = self
            .by_pair
            .iter()
            .filter(|(k, _)| k.1 == j)
            .map(|(k, c)| (*k, c.t_cutter))
            .collect();
        keys.sort_by(|a, b| a.1.total_cmp(&b.1));
        keys.into_iter().map(|(k, _)| k).collect()
    }
}
