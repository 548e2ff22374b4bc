use crate::{Aabb3, Plane3, Point3d};

use smallvec::SmallVec;

/// The most planes a region may carry while staying eligible for batched queries.
///
/// Regions at or under this size keep their planes inline, so a query worker never allocates for
/// the region it is evaluating.
pub const MAX_REGION_PLANES: usize = 32;

/// A convex region of space: the intersection of half-space [`Plane3`] constraints.
///
/// A point is inside iff it satisfies *every* plane, so the empty region is the whole space.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    planes: SmallVec<[Plane3; MAX_REGION_PLANES]>,
}

impl Region {
    /// The region with no constraints, containing every point.
    #[inline]
    pub fn whole_space() -> Self {
        Self {
            planes: SmallVec::new(),
        }
    }

    pub fn from_planes(planes: impl IntoIterator<Item = Plane3>) -> Self {
        Self {
            planes: planes.into_iter().collect(),
        }
    }

    /// Build a region from the `(a, b, c, d)` wire format, each row meaning `a*x+b*y+c*z >= d`.
    pub fn from_coefficients(rows: &[[f64; 4]]) -> Self {
        Self::from_planes(
            rows.iter()
                .map(|&[a, b, c, d]| Plane3::from_coefficients(a, b, c, d)),
        )
    }

    #[inline]
    pub fn planes(&self) -> &[Plane3] {
        &self.planes
    }

    #[inline]
    pub fn num_planes(&self) -> usize {
        self.planes.len()
    }

    /// `true` iff `point` satisfies every plane. `O(planes)`.
    #[inline]
    pub fn contains(&self, point: Point3d) -> bool {
        self.planes.iter().all(|plane| plane.admits(point))
    }

    /// Conservative test for whether any part of `aabb` can be inside the region.
    ///
    /// A plane excludes the box only if all 8 corners fail it; the box is excluded if any plane
    /// excludes it. This can return `true` for a box the region misses (the exact answer is a
    /// linear program), but it never returns `false` for a box containing a satisfying point, so
    /// traversals that prune on `false` cannot drop results. `O(8 * planes)`.
    pub fn possibly_intersects(&self, aabb: &Aabb3) -> bool {
        let corners = aabb.corners();

        self.planes
            .iter()
            .all(|plane| corners.iter().any(|&corner| plane.admits(corner)))
    }

    /// `true` iff every point of `aabb` is inside the region.
    ///
    /// Checking the 8 corners suffices: the region is an intersection of half-spaces, hence
    /// convex, and the box is the convex hull of its corners. `O(8 * planes)`.
    pub fn fully_contains(&self, aabb: &Aabb3) -> bool {
        aabb.corners()
            .iter()
            .all(|&corner| self.contains(corner))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
