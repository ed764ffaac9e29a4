//! Overlap predicate and proximity-graph construction.
//!
//! Every point is inflated into a disk of the same radius `r`. Two disks
//! intersect (touching included) iff their centers are at most `2r` apart, so
//! the overlap graph has an edge `(i, j)` exactly when
//! `dist(p_i, p_j) <= 2r`.
//!
//! Two builders produce that edge set:
//!
//! - [`Strategy::BruteForce`] evaluates all `n(n-1)/2` pairs. It is the
//!   reference semantics.
//! - [`Strategy::Grid`] buckets points into square cells of side ~`2r` and
//!   only compares points in neighbouring cells. It returns exactly the same
//!   edges as brute force.
//!
//! Both emit edges as `(i, j)` with `i < j`, sorted ascending.

use std::collections::HashMap;

use log::debug;

use crate::point::Point;

/// Relative inflation of the grid cell over the disk diameter.
///
/// Cell keys are computed with a floating-point division; the slack absorbs
/// its rounding error so two overlapping points never land more than one
/// cell apart.
const CELL_SLACK: f64 = 1e-4;

/// Largest `|coordinate| / cell` for which the slack above still dominates
/// the rounding error of the key division.
const MAX_CELL_KEY: f64 = 4_294_967_296.0;

/// Whether the disks of radius `radius` around `p` and `q` intersect.
///
/// Boundary-inclusive: points exactly `2 * radius` apart overlap. Symmetric in
/// `p` and `q`. `radius` is expected to be finite and non-negative; callers
/// validate it (see [`OverlapMerge`](super::OverlapMerge)).
#[inline]
pub fn overlaps(p: &Point, q: &Point, radius: f64) -> bool {
    // `hypot` avoids the overflow and underflow of squaring extreme deltas.
    p.distance(q) <= 2.0 * radius
}

/// How the proximity graph is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Compare every pair of points.
    BruteForce,
    /// Uniform grid with cells of side ~`2r`; falls back to brute force when
    /// the grid cannot be used (zero radius, extreme coordinate ranges).
    #[default]
    Grid,
}

/// All edges `(i, j)`, `i < j`, whose points overlap at `radius`.
///
/// Single-threaded; see [`OverlapMerge::with_parallel`](super::OverlapMerge::with_parallel)
/// for the multi-threaded path, which yields the same list.
pub fn proximity_edges(points: &[Point], radius: f64, strategy: Strategy) -> Vec<(usize, usize)> {
    build_edges(points, radius, strategy, false)
}

pub(crate) fn build_edges(
    points: &[Point],
    radius: f64,
    strategy: Strategy,
    parallel: bool,
) -> Vec<(usize, usize)> {
    let edges = match strategy {
        Strategy::BruteForce => brute_force_edges(points, radius, parallel),
        Strategy::Grid => grid_edges(points, radius, parallel).unwrap_or_else(|| {
            debug!("grid index unusable at radius {radius}, comparing all pairs");
            brute_force_edges(points, radius, parallel)
        }),
    };
    debug!(
        "proximity graph: {} points, {} edges ({:?}, parallel={})",
        points.len(),
        edges.len(),
        strategy,
        parallel
    );
    edges
}

#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn brute_force_edges(points: &[Point], radius: f64, parallel: bool) -> Vec<(usize, usize)> {
    let n = points.len();
    let row = move |i: usize| {
        (i + 1..n)
            .filter(move |&j| overlaps(&points[i], &points[j], radius))
            .map(move |j| (i, j))
    };

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        // Order-preserving collect keeps rows ascending.
        return (0..n).into_par_iter().flat_map_iter(row).collect();
    }

    (0..n).flat_map(row).collect()
}

#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn grid_edges(points: &[Point], radius: f64, parallel: bool) -> Option<Vec<(usize, usize)>> {
    if points.len() < 2 {
        return None;
    }

    let cell = 2.0 * radius * (1.0 + CELL_SLACK);
    if cell <= 0.0 || cell.is_nan() {
        return None;
    }
    let max_abs = points
        .iter()
        .fold(0.0f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
    if max_abs / cell > MAX_CELL_KEY {
        return None;
    }

    let key = move |p: &Point| ((p.x / cell).floor() as i64, (p.y / cell).floor() as i64);

    let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, p) in points.iter().enumerate() {
        cells.entry(key(p)).or_default().push(i);
    }
    debug!("grid index: cell size {cell}, {} occupied cells", cells.len());

    let cells = &cells;
    let neighbours = move |i: usize| {
        let p = &points[i];
        let (kx, ky) = key(p);
        let mut found = Vec::new();
        for cx in kx - 1..=kx + 1 {
            for cy in ky - 1..=ky + 1 {
                let Some(bucket) = cells.get(&(cx, cy)) else {
                    continue;
                };
                for &j in bucket {
                    if j > i && overlaps(p, &points[j], radius) {
                        found.push((i, j));
                    }
                }
            }
        }
        found
    };

    #[cfg(feature = "parallel")]
    let mut edges: Vec<(usize, usize)> = if parallel {
        use rayon::prelude::*;
        (0..points.len()).into_par_iter().flat_map_iter(neighbours).collect()
    } else {
        (0..points.len()).flat_map(neighbours).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let mut edges: Vec<(usize, usize)> = (0..points.len()).flat_map(neighbours).collect();

    // Cells are visited in key order, not id order.
    edges.sort_unstable();
    Some(edges)
}
