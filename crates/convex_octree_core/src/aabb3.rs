use crate::{OctantCode, Point3d};

use bytemuck::{Pod, Zeroable};

/// A closed axis-aligned box, `minimum <= p <= maximum` componentwise.
///
/// Every octree node's cell is an `Aabb3`; a child's cell is exactly half of its parent's cell
/// along every axis.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Aabb3 {
    pub minimum: Point3d,
    pub maximum: Point3d,
}

impl Aabb3 {
    /// Construct from two opposite corners, swapping coordinates per axis as needed so that
    /// `minimum <= maximum` holds. Out-of-order corners are not an error.
    #[inline]
    pub fn from_corners(a: Point3d, b: Point3d) -> Self {
        let mut minimum = a;
        let mut maximum = b;
        for axis in 0..3 {
            if maximum[axis] < minimum[axis] {
                core::mem::swap(&mut minimum[axis], &mut maximum[axis]);
            }
        }

        Self { minimum, maximum }
    }

    /// The tight bounding box of `points`, or `None` if `points` is empty.
    pub fn bounding(points: &[Point3d]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;

        let mut minimum = first;
        let mut maximum = first;
        for p in rest {
            for axis in 0..3 {
                minimum[axis] = minimum[axis].min(p[axis]);
                maximum[axis] = maximum[axis].max(p[axis]);
            }
        }

        Some(Self { minimum, maximum })
    }

    /// Expand the box by `fraction` of its extent on each side of each axis. `padded(0.1)` is the
    /// recommended margin for tree bounds, avoiding rejections of points on the data's hull.
    #[inline]
    pub fn padded(self, fraction: f64) -> Self {
        Self {
            minimum: self.minimum * (1.0 + fraction) - self.maximum * fraction,
            maximum: self.maximum * (1.0 + fraction) - self.minimum * fraction,
        }
    }

    #[inline]
    pub fn midpoint(self) -> Point3d {
        Point3d::midpoint(self.minimum, self.maximum)
    }

    /// `true` iff `point` is inside the closed box. Points exactly on a face are inside.
    #[inline]
    pub fn contains(self, point: Point3d) -> bool {
        for axis in 0..3 {
            if point[axis] < self.minimum[axis] || point[axis] > self.maximum[axis] {
                return false;
            }
        }

        true
    }

    /// All 8 corners; corner `i` takes the maximum on axis `a` iff bit `a` of `i` is set.
    #[inline]
    pub fn corners(self) -> [Point3d; 8] {
        let mut corners = [self.minimum; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            for axis in 0..3 {
                if i & (1 << axis) != 0 {
                    corner[axis] = self.maximum[axis];
                }
            }
        }

        corners
    }

    /// The half-cell of the child at `code`, given this cell's subdividing `midpoint`. For each
    /// axis, the high half is taken iff the code's bit for that axis is set.
    #[inline]
    pub fn child_cell(self, midpoint: Point3d, code: OctantCode) -> Self {
        let mut child = self;
        for axis in 0..3 {
            if code.is_high(axis) {
                child.minimum[axis] = midpoint[axis];
            } else {
                child.maximum[axis] = midpoint[axis];
            }
        }

        child
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
