//! Overlap merging on a small 2D dataset.

use coalesce::{Clustering, OverlapMerge, Point};

fn main() {
    // Two tight groups, a chain, and a lone point.
    let data = vec![
        // Group A (near origin)
        Point::new(0.0, 0.0),
        Point::new(0.3, 0.2),
        Point::new(0.1, -0.2),
        // Group B (near (5, 5))
        Point::new(5.0, 5.0),
        Point::new(5.4, 5.1),
        // Chain along y = 10: neighbours overlap, ends do not
        Point::new(0.0, 10.0),
        Point::new(0.9, 10.0),
        Point::new(1.8, 10.0),
        Point::new(2.7, 10.0),
        // Isolated
        Point::new(20.0, -3.0),
    ];

    let merge = OverlapMerge::new(0.5);

    let labels = merge.fit_predict(&data).unwrap();
    println!("=== Overlap merge (radius=0.5) ===");
    for (i, label) in labels.iter().enumerate() {
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => component {}",
            i, data[i].x, data[i].y, label
        );
    }

    let aggregation = merge.aggregate(&data).unwrap();
    println!("\n=== Representatives ===");
    for rep in aggregation.representatives() {
        let kind = match rep.source {
            Some(id) => format!("point {id}"),
            None => "centroid".to_string(),
        };
        println!("  ({:7.3}, {:7.3}) {}", rep.x, rep.y, kind);
    }
    println!("\n{aggregation}");
}
