use convex_octree_core::{Aabb3, OctantCode, Region};
use convex_octree_storage::{NodeId, PointOctree};

/// Count the points of `tree` inside `region`.
///
/// Subtrees whose cells cannot intersect the region are pruned; subtrees whose cells lie entirely
/// inside it contribute their cached subtree count in `O(1)`. Only nodes straddling the region
/// boundary test their bucket items individually.
pub fn count(tree: &PointOctree, region: &Region) -> u64 {
    count_limited(tree, region, u64::MAX)
}

/// Same as [`count`], but returns as soon as the running total reaches `limit`.
///
/// The result is always `>= min(true_count, limit)`: exact whenever the true count is below
/// `limit`, and otherwise a certified lower bound. `limit = u64::MAX` recovers [`count`].
pub fn count_limited(tree: &PointOctree, region: &Region, limit: u64) -> u64 {
    // An explicit work stack instead of recursion: traversal depth is bounded only by the
    // insertion depth limit, which is too deep to trust the call stack with.
    let mut stack: Vec<(NodeId, Aabb3)> = vec![(tree.root_id(), tree.bounds())];
    let mut total = 0u64;

    while let Some((node_id, cell)) = stack.pop() {
        if !region.possibly_intersects(&cell) {
            continue;
        }

        let node = tree.node(node_id);
        if region.fully_contains(&cell) {
            // Exact by convexity: every point of the cell, hence of the subtree, is inside.
            total += u64::from(node.num_subtree_items());
        } else {
            total += node
                .items()
                .iter()
                .filter(|item| region.contains(item.point))
                .count() as u64;

            let midpoint = node.midpoint();
            // Reversed so children pop in ascending octant order.
            for code in OctantCode::all().rev() {
                if let Some(child) = node.child(code) {
                    stack.push((child, cell.child_cell(midpoint, code)));
                }
            }
        }

        if total >= limit {
            return total;
        }
    }

    total
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

    use convex_octree_core::{Plane3, Point3d};
    use utilities::data_sets::{axis_slab_region, random_convex_region, random_points_in_aabb};
    use utilities::test::brute_force_count;

    #[test]
    fn whole_space_counts_every_inserted_point() {
        let bounds = Aabb3::from_corners(Point3d::fill(-50.0), Point3d::fill(50.0));
        let points = random_points_in_aabb(bounds, 1000);
        let tree = PointOctree::from_points(&points, bounds.minimum, bounds.maximum).unwrap();

        assert_eq!(count(&tree, &Region::whole_space()), 1000);
    }

    #[test]
    fn half_space_count_in_concrete_scenario() {
        let mut tree = PointOctree::new(Point3d::ZERO, Point3d::fill(10.0));
        tree.insert(Point3d::fill(1.0)).unwrap();
        tree.insert(Point3d::fill(9.0)).unwrap();
        tree.insert(Point3d::fill(5.0)).unwrap();

        // x >= 5
        let region = Region::from_planes(vec![Plane3::from_coefficients(1.0, 0.0, 0.0, 5.0)]);

        assert_eq!(count(&tree, &region), 2);
    }

    #[test]
    fn count_matches_brute_force_on_random_regions() {
        let bounds = Aabb3::from_corners(Point3d::fill(-20.0), Point3d::fill(20.0));
        let points = random_points_in_aabb(bounds, 3000);
        let tree = PointOctree::from_points(&points, bounds.minimum, bounds.maximum).unwrap();

        for num_planes in [1, 2, 4, 8] {
            for _ in 0..20 {
                let region = random_convex_region(bounds, num_planes);

                assert_eq!(count(&tree, &region), brute_force_count(&points, &region));
            }
        }
    }

    #[test]
    fn slab_counts_match_brute_force_on_every_axis() {
        let bounds = Aabb3::from_corners(Point3d::fill(-20.0), Point3d::fill(20.0));
        let points = random_points_in_aabb(bounds, 3000);
        let tree = PointOctree::from_points(&points, bounds.minimum, bounds.maximum).unwrap();

        for axis in 0..3 {
            let region = axis_slab_region(axis, -5.0, 12.5);

            assert_eq!(count(&tree, &region), brute_force_count(&points, &region));
        }
    }

    #[test]
    fn limited_count_is_a_certified_lower_bound() {
        let bounds = Aabb3::from_corners(Point3d::ZERO, Point3d::fill(100.0));
        let points = random_points_in_aabb(bounds, 2000);
        let tree = PointOctree::from_points(&points, bounds.minimum, bounds.maximum).unwrap();
        let region = Region::whole_space();

        for limit in [0, 1, 17, 1999, 2000, 5000, u64::MAX] {
            let result = count_limited(&tree, &region, limit);

            assert!(result >= limit.min(2000));
            if 2000 < limit {
                // Below the limit the result is exact.
                assert_eq!(result, 2000);
            }
        }
    }
}
