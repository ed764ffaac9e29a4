//! Overlap clustering of planar points.
//!
//! Each point is treated as the center of a disk of fixed radius `r`. Points
//! whose disks intersect belong together, and so do points reachable through
//! a chain of such intersections. Every group collapses to one
//! representative: the centroid for groups of two or more, the point itself
//! otherwise.
//!
//! ## Pipeline
//!
//! ```text
//! points ─▶ proximity graph ─▶ union-find ─▶ reduce ─▶ Aggregation
//!           (graph.rs)         (util.rs)     (reduce.rs)
//! ```
//!
//! - [`overlaps`] is the pairwise predicate (`dist <= 2r`, touching counts).
//! - [`proximity_edges`] enumerates all overlapping pairs, by brute force or
//!   through a uniform grid. Both strategies return the same edge list.
//! - [`UnionFind`] partitions point ids into connected components; the
//!   partition is independent of edge order.
//! - [`reduce()`] turns components into [`Representative`]s and
//!   [`Aggregation`] reports the original and reduced counts.
//!
//! [`OverlapMerge`] runs the whole pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use coalesce::cluster::{Clustering, OverlapMerge};
//! use coalesce::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(10.0, 10.0),
//! ];
//!
//! // Disks of radius 0.6 merge points up to 1.2 apart.
//! let merge = OverlapMerge::new(0.6);
//!
//! let labels = merge.fit_predict(&points).unwrap();
//! assert_eq!(labels, vec![0, 0, 1]);
//!
//! let agg = merge.aggregate(&points).unwrap();
//! assert_eq!(agg.reduced_count(), 2);
//! assert_eq!(agg.to_string(), "reduced from 3 to 2");
//! ```

mod graph;
mod overlap;
mod reduce;
mod traits;
mod util;

pub use graph::{overlaps, proximity_edges, Strategy};
pub use overlap::OverlapMerge;
pub use reduce::{centroid, reduce, Aggregation, Representative, TaggedPoint};
pub use traits::Clustering;
pub use util::{connected_components, UnionFind};
