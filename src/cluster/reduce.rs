//! Component reduction and result assembly.

use std::fmt;

use crate::point::Point;

/// One output point standing in for a connected component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Representative {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Id of the input point when the component was a singleton; `None` for
    /// synthetic centroids.
    pub source: Option<usize>,
}

impl Representative {
    /// Coordinates as a [`Point`].
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this is a synthetic centroid of several input points.
    pub fn is_centroid(&self) -> bool {
        self.source.is_none()
    }
}

/// An output point annotated with an opaque, caller-supplied tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedPoint<T> {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Pass-through value attached to every output point.
    pub tag: T,
}

/// Arithmetic mean of the member coordinates, taken per axis.
///
/// Returns `None` for an empty member list.
pub fn centroid(points: &[Point], members: &[usize]) -> Option<Point> {
    if members.is_empty() {
        return None;
    }
    let (sx, sy) = members
        .iter()
        .fold((0.0f64, 0.0f64), |(sx, sy), &i| (sx + points[i].x, sy + points[i].y));
    let k = members.len() as f64;
    Some(Point::new(sx / k, sy / k))
}

/// One [`Representative`] per component, in component order.
///
/// Singletons pass through with bit-identical coordinates; larger components
/// collapse to their centroid. Empty components are skipped.
pub fn reduce(points: &[Point], components: &[Vec<usize>]) -> Vec<Representative> {
    components
        .iter()
        .filter_map(|members| match members.as_slice() {
            [] => None,
            [only] => Some(Representative {
                x: points[*only].x,
                y: points[*only].y,
                source: Some(*only),
            }),
            _ => centroid(points, members).map(|c| Representative {
                x: c.x,
                y: c.y,
                source: None,
            }),
        })
        .collect()
}

/// Outcome of one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    representatives: Vec<Representative>,
    original_count: usize,
}

impl Aggregation {
    pub(crate) fn new(representatives: Vec<Representative>, original_count: usize) -> Self {
        Self {
            representatives,
            original_count,
        }
    }

    /// Output points, ordered by the smallest input id of their component.
    pub fn representatives(&self) -> &[Representative] {
        &self.representatives
    }

    /// Consume the aggregation, keeping the output points.
    pub fn into_representatives(self) -> Vec<Representative> {
        self.representatives
    }

    /// Number of input points.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Number of output points.
    pub fn reduced_count(&self) -> usize {
        self.representatives.len()
    }

    /// Number of synthetic centroids among the output points.
    pub fn centroid_count(&self) -> usize {
        self.representatives.iter().filter(|r| r.is_centroid()).count()
    }

    /// Attach the same `tag` to every output point.
    pub fn tagged<T: Clone>(&self, tag: T) -> Vec<TaggedPoint<T>> {
        self.representatives
            .iter()
            .map(|r| TaggedPoint {
                x: r.x,
                y: r.y,
                tag: tag.clone(),
            })
            .collect()
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reduced from {} to {}",
            self.original_count,
            self.reduced_count()
        )
    }
}
