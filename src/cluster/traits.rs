use crate::error::Result;
use crate::point::Point;

/// Common interface for hard clusterings (one label per point).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g.
    /// overlap merging), this returns 0.
    fn n_clusters(&self) -> usize;
}
