//! Overlap-based point aggregation.
//!
//! `coalesce` de-densifies 2D point sets: points closer than twice a chosen
//! radius are merged, transitively, into a single centroid, while isolated
//! points are left untouched.
//!
//! The primary public API is under [`cluster`], which provides:
//! - the overlap predicate and proximity-graph builders (brute force, grid)
//! - a union-find over point ids
//! - centroid reduction and the [`Aggregation`] summary
//!
//! [`io`] reads and writes the delimited text format used by the
//! `aggregate-points` binary.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod io;
pub mod point;

pub use cluster::{
    Aggregation, Clustering, OverlapMerge, Representative, Strategy, TaggedPoint, UnionFind,
};
pub use error::{Error, Result};
pub use point::Point;
