//! Generators for the point sets and regions used by tests and benchmarks.

use convex_octree_core::{Aabb3, Plane3, Point3d, Region};

use rand::Rng;

pub fn random_point_in_aabb(rng: &mut impl Rng, aabb: Aabb3) -> Point3d {
    Point3d::new(
        rng.gen_range(aabb.minimum.x()..=aabb.maximum.x()),
        rng.gen_range(aabb.minimum.y()..=aabb.maximum.y()),
        rng.gen_range(aabb.minimum.z()..=aabb.maximum.z()),
    )
}

pub fn random_points_in_aabb(aabb: Aabb3, num_points: usize) -> Vec<Point3d> {
    let mut rng = rand::thread_rng();

    (0..num_points)
        .map(|_| random_point_in_aabb(&mut rng, aabb))
        .collect()
}

/// A random convex region whose boundary planes all pass through points inside `aabb`, so it
/// usually cuts the box nontrivially. More planes make a tighter (possibly empty) region.
pub fn random_convex_region(aabb: Aabb3, num_planes: usize) -> Region {
    let mut rng = rand::thread_rng();

    Region::from_planes((0..num_planes).map(|_| {
        let normal = Point3d::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let anchor = random_point_in_aabb(&mut rng, aabb);

        Plane3::new(normal, normal.dot(anchor))
    }))
}

/// The slab `min <= p[axis] <= max` as a two-plane region.
pub fn axis_slab_region(axis: usize, min: f64, max: f64) -> Region {
    let mut low = [0.0; 3];
    low[axis] = 1.0;
    let mut high = [0.0; 3];
    high[axis] = -1.0;

    Region::from_planes(vec![
        Plane3::new(Point3d(low), min),
        Plane3::new(Point3d(high), -max),
    ])
}
