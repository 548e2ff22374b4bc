use crate::count::count_limited;

use convex_octree_core::{Region, MAX_REGION_PLANES};
use convex_octree_storage::PointOctree;

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Why a batched query was rejected before any traversal was scheduled.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum BatchQueryError {
    /// A region carries more planes than a query worker's inline scratch capacity.
    #[error(
        "region {region} has {num_planes} planes, above the batch maximum of {}",
        MAX_REGION_PLANES
    )]
    PlaneCountExceeded { region: usize, num_planes: usize },
}

/// Evaluate many independent regions against one read-only tree, returning one count per region
/// in input order.
///
/// Each region's traversal is [`count_limited`] with the shared `limit`, so every returned value
/// is `>= min(true_count, limit)` and exact when the true count is below `limit`; pass
/// `u64::MAX` for exact counts everywhere.
///
/// Regions are distributed over the rayon worker pool one whole region per task; work stealing
/// load-balances the batch, since traversal cost varies with how well each region prunes. The
/// `limit` is captured by value into every task. There is no cancellation beyond the per-region
/// early exit, so batch latency is bounded by the slowest region.
pub fn count_batch(
    tree: &PointOctree,
    regions: &[Region],
    limit: u64,
) -> Result<Vec<u64>, BatchQueryError> {
    // Oversized regions are rejected up front, never mid-traversal.
    for (i, region) in regions.iter().enumerate() {
        if region.num_planes() > MAX_REGION_PLANES {
            return Err(BatchQueryError::PlaneCountExceeded {
                region: i,
                num_planes: region.num_planes(),
            });
        }
    }

    debug!(
        num_regions = regions.len(),
        limit, "scheduling batched region counts"
    );

    Ok(regions
        .par_iter()
        .map(|region| count_limited(tree, region, limit))
        .collect())
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use crate::count::count;

    use convex_octree_core::{Aabb3, Plane3, Point3d};
    use utilities::data_sets::{random_convex_region, random_points_in_aabb};

    fn random_tree_and_points(num_points: usize) -> (PointOctree, Vec<Point3d>, Aabb3) {
        let bounds = Aabb3::from_corners(Point3d::fill(-30.0), Point3d::fill(30.0));
        let points = random_points_in_aabb(bounds, num_points);
        let tree = PointOctree::from_points(&points, bounds.minimum, bounds.maximum).unwrap();

        (tree, points, bounds)
    }

    #[test]
    fn unlimited_batch_equals_serial_counts() {
        let (tree, _, bounds) = random_tree_and_points(2000);
        let regions: Vec<_> = (0..64).map(|i| random_convex_region(bounds, i % 8 + 1)).collect();

        let batched = count_batch(&tree, &regions, u64::MAX).unwrap();
        let serial: Vec<_> = regions.iter().map(|r| count(&tree, r)).collect();

        assert_eq!(batched, serial);
    }

    #[test]
    fn limited_batch_respects_the_lower_bound_contract() {
        let (tree, _, bounds) = random_tree_and_points(2000);
        let regions: Vec<_> = (0..32).map(|_| random_convex_region(bounds, 3)).collect();
        let limit = 50;

        let batched = count_batch(&tree, &regions, limit).unwrap();

        for (region, &result) in regions.iter().zip(batched.iter()) {
            let true_count = count(&tree, region);
            assert!(result >= true_count.min(limit));
            if true_count < limit {
                assert_eq!(result, true_count);
            }
        }
    }

    #[test]
    fn results_preserve_input_order() {
        let (tree, _, _) = random_tree_and_points(500);
        // x >= t keeps shrinking the count as t grows.
        let regions: Vec<_> = (0..30)
            .map(|i| {
                Region::from_planes(vec![Plane3::from_coefficients(
                    1.0,
                    0.0,
                    0.0,
                    -30.0 + 2.0 * i as f64,
                )])
            })
            .collect();

        let batched = count_batch(&tree, &regions, u64::MAX).unwrap();

        for window in batched.windows(2) {
            assert!(window[0] >= window[1]);
        }
        assert_eq!(batched[0], tree.len());
    }

    #[test]
    fn oversized_regions_are_rejected_before_scheduling() {
        let (tree, _, _) = random_tree_and_points(10);
        let oversized = Region::from_planes(
            (0..MAX_REGION_PLANES + 1).map(|_| Plane3::from_coefficients(1.0, 0.0, 0.0, 0.0)),
        );
        let regions = vec![Region::whole_space(), oversized];

        assert_eq!(
            count_batch(&tree, &regions, u64::MAX),
            Err(BatchQueryError::PlaneCountExceeded {
                region: 1,
                num_planes: MAX_REGION_PLANES + 1
            })
        );
    }
}
