//! Overlap merging: collapse points whose disks of influence intersect.
//!
//! # The Algorithm
//!
//! Inflate every point into a disk of radius `r`. Points whose disks touch or
//! intersect are linked; linking is transitive, so a chain of pairwise
//! overlaps merges into one group even when its ends are far apart.
//!
//! 1. Build the overlap graph: edge `(i, j)` iff `dist(p_i, p_j) <= 2r`.
//! 2. Union every edge into a disjoint-set forest.
//! 3. Each resulting component of size > 1 becomes its centroid; singletons
//!    pass through unchanged.
//!
//! Unlike DBSCAN there is no density threshold: a single overlapping
//! neighbour is enough to merge, and no point is ever discarded as noise.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) pair checks with [`Strategy::BruteForce`]; roughly
//!   O(n + e) with [`Strategy::Grid`] on evenly spread data, where `e` is
//!   the number of edges. Union-find adds O(e α(n)).
//! - **Space**: O(n + e).
//!
//! ## Determinism
//!
//! The partition does not depend on edge order. Output points are ordered by
//! the smallest input id of their component, and centroids are summed in
//! ascending id order, so repeated runs produce identical results with or
//! without the `parallel` feature.

use log::{debug, info};

use super::graph::{self, Strategy};
use super::reduce::{self, Aggregation};
use super::traits::Clustering;
use super::util::connected_components;
use crate::error::{Error, Result};
use crate::point::Point;

/// Overlap-merging engine.
#[derive(Debug, Clone)]
pub struct OverlapMerge {
    /// Disk radius around each point.
    radius: f64,
    /// How the proximity graph is discovered.
    strategy: Strategy,
    /// Spread edge discovery over the rayon pool.
    parallel: bool,
}

impl OverlapMerge {
    /// Create an engine for disks of the given `radius`.
    ///
    /// Two points merge when they are at most `2 * radius` apart. The radius
    /// is validated when the engine runs; it must be finite and non-negative.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            strategy: Strategy::default(),
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Set the disk radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the graph construction strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable multi-threaded edge discovery.
    ///
    /// Without the `parallel` feature this is a no-op.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disk radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Largest center distance at which two points merge (`2 * radius`).
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Configured graph construction strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Check the radius.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() {
            return Err(Error::InvalidParameter {
                name: "radius",
                message: "must be finite",
            });
        }
        if self.radius < 0.0 {
            return Err(Error::InvalidParameter {
                name: "radius",
                message: "must be non-negative",
            });
        }
        Ok(())
    }

    fn check_points(points: &[Point]) -> Result<()> {
        match points.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(Error::NonFiniteCoordinate { index }),
            None => Ok(()),
        }
    }

    /// Connected components of the overlap graph.
    ///
    /// Every input id appears in exactly one component. Components are
    /// ordered by their smallest member; members are ascending.
    pub fn components(&self, points: &[Point]) -> Result<Vec<Vec<usize>>> {
        self.validate()?;
        Self::check_points(points)?;

        let edges = graph::build_edges(points, self.radius, self.strategy, self.parallel);

        let components = connected_components(points.len(), &edges);
        debug!(
            "{} edges merged {} points into {} components",
            edges.len(),
            points.len(),
            components.len()
        );
        Ok(components)
    }

    /// Run the full pipeline and return one representative per component.
    ///
    /// Empty input is valid and yields an empty aggregation.
    pub fn aggregate(&self, points: &[Point]) -> Result<Aggregation> {
        let components = self.components(points)?;
        let representatives = reduce::reduce(points, &components);
        let aggregation = Aggregation::new(representatives, points.len());
        info!(
            "overlap merge at radius {}: {} ({} centroids)",
            self.radius,
            aggregation,
            aggregation.centroid_count()
        );
        Ok(aggregation)
    }
}

impl Default for OverlapMerge {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Clustering for OverlapMerge {
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>> {
        let components = self.components(points)?;
        let mut labels = vec![0; points.len()];
        for (label, members) in components.iter().enumerate() {
            for &i in members {
                labels[i] = label;
            }
        }
        Ok(labels)
    }

    /// The number of components is discovered, so this returns 0.
    fn n_clusters(&self) -> usize {
        0
    }
}
