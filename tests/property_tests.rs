use std::collections::VecDeque;

use coalesce::cluster::{
    connected_components, overlaps, proximity_edges, Clustering, OverlapMerge,
    Strategy as EdgeStrategy,
};
use coalesce::Point;
use proptest::prelude::*;

fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 0..60)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

// Integer lattice with half-integer radii puts many pairs exactly on the 2r boundary.
fn lattice_strategy() -> impl Strategy<Value = (Vec<Point>, f64)> {
    (
        prop::collection::vec((-8i32..8, -8i32..8), 0..50),
        0u32..6,
    )
        .prop_map(|(v, half)| {
            let points = v
                .into_iter()
                .map(|(x, y)| Point::new(x as f64, y as f64))
                .collect();
            (points, half as f64 * 0.5)
        })
}

fn bfs_components(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); n];
    for &(a, b) in edges {
        adj[a].push(b);
        adj[b].push(a);
    }
    let mut seen = vec![false; n];
    let mut out = Vec::new();
    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut comp = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    comp.push(v);
                    queue.push_back(v);
                }
            }
        }
        comp.sort_unstable();
        out.push(comp);
    }
    out
}

fn edge_list_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..80).prop_shuffle(),
        )
    })
}

proptest! {
    #[test]
    fn prop_grid_matches_brute_force(points in points_strategy(), radius in 0.0f64..8.0) {
        prop_assert_eq!(
            proximity_edges(&points, radius, EdgeStrategy::Grid),
            proximity_edges(&points, radius, EdgeStrategy::BruteForce)
        );
    }

    #[test]
    fn prop_grid_matches_brute_force_on_boundaries((points, radius) in lattice_strategy()) {
        prop_assert_eq!(
            proximity_edges(&points, radius, EdgeStrategy::Grid),
            proximity_edges(&points, radius, EdgeStrategy::BruteForce)
        );
    }

    #[test]
    fn prop_edges_are_exactly_overlapping_pairs(
        points in points_strategy(),
        radius in 0.0f64..8.0,
    ) {
        let edges = proximity_edges(&points, radius, EdgeStrategy::Grid);
        let mut expected = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if overlaps(&points[i], &points[j], radius) {
                    expected.push((i, j));
                }
            }
        }
        prop_assert_eq!(edges, expected);
    }

    #[test]
    fn prop_partition_matches_bfs(points in points_strategy(), radius in 0.0f64..8.0) {
        let edges = proximity_edges(&points, radius, EdgeStrategy::BruteForce);
        let components = OverlapMerge::new(radius).components(&points).unwrap();
        prop_assert_eq!(&components, &bfs_components(points.len(), &edges));

        // Partition: every id exactly once.
        let mut ids: Vec<usize> = components.concat();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..points.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_union_order_independent((n, edges) in edge_list_strategy()) {
        let forward = connected_components(n, &edges);
        let mut reversed = edges.clone();
        reversed.reverse();
        let flipped: Vec<(usize, usize)> = edges.iter().map(|&(a, b)| (b, a)).collect();

        prop_assert_eq!(&forward, &connected_components(n, &reversed));
        prop_assert_eq!(&forward, &connected_components(n, &flipped));
        prop_assert_eq!(&forward, &bfs_components(n, &edges));
    }

    #[test]
    fn prop_count_conservation(points in points_strategy(), radius in 0.0f64..8.0) {
        let agg = OverlapMerge::new(radius).aggregate(&points).unwrap();
        let has_edges = !proximity_edges(&points, radius, EdgeStrategy::BruteForce).is_empty();

        prop_assert_eq!(agg.original_count(), points.len());
        prop_assert!(agg.reduced_count() <= points.len());
        if !points.is_empty() {
            prop_assert!(agg.reduced_count() >= 1);
        }
        prop_assert_eq!(agg.reduced_count() == points.len(), !has_edges);
    }

    #[test]
    fn prop_no_overlap_identity(points in points_strategy()) {
        let mut min_dist = f64::INFINITY;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                min_dist = min_dist.min(points[i].distance(&points[j]));
            }
        }
        prop_assume!(min_dist > 1e-6);
        let radius = if min_dist.is_finite() { min_dist * 0.49 } else { 1.0 };

        let agg = OverlapMerge::new(radius).aggregate(&points).unwrap();
        prop_assert_eq!(agg.reduced_count(), points.len());
        for (rep, p) in agg.representatives().iter().zip(&points) {
            prop_assert_eq!(rep.point(), *p);
            prop_assert!(!rep.is_centroid());
        }
    }

    #[test]
    fn prop_centroids_are_means(points in points_strategy(), radius in 0.0f64..8.0) {
        let merge = OverlapMerge::new(radius);
        let components = merge.components(&points).unwrap();
        let agg = merge.aggregate(&points).unwrap();
        prop_assert_eq!(components.len(), agg.reduced_count());

        for (members, rep) in components.iter().zip(agg.representatives()) {
            let k = members.len() as f64;
            let mx = members.iter().map(|&i| points[i].x).sum::<f64>() / k;
            let my = members.iter().map(|&i| points[i].y).sum::<f64>() / k;
            prop_assert!((rep.x - mx).abs() < 1e-9);
            prop_assert!((rep.y - my).abs() < 1e-9);
            prop_assert_eq!(rep.is_centroid(), members.len() > 1);
        }
    }

    #[test]
    fn prop_deterministic(points in points_strategy(), radius in 0.0f64..8.0) {
        let base = OverlapMerge::new(radius).with_parallel(false);
        let first = base.clone().aggregate(&points).unwrap();
        prop_assert_eq!(&first, &base.clone().aggregate(&points).unwrap());
        prop_assert_eq!(&first, &base.clone().with_parallel(true).aggregate(&points).unwrap());
        prop_assert_eq!(
            &first,
            &base.with_strategy(EdgeStrategy::BruteForce).aggregate(&points).unwrap()
        );
    }

    #[test]
    fn prop_labels_follow_components(points in points_strategy(), radius in 0.0f64..8.0) {
        let merge = OverlapMerge::new(radius);
        let labels = merge.fit_predict(&points).unwrap();
        let components = merge.components(&points).unwrap();
        prop_assert_eq!(labels.len(), points.len());
        for (label, members) in components.iter().enumerate() {
            for &i in members {
                prop_assert_eq!(labels[i], label);
            }
        }
    }
}
