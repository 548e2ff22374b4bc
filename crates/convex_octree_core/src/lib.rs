//! The core geometric types for point octrees and convex region queries:
//! - `Point3d`: a 3-dimensional `f64` point
//! - `Aabb3`: a closed axis-aligned box, the cell of one octree node
//! - `OctantCode`: the 3-bit child selector used for octree descent
//! - `Plane3` and `Region`: half-spaces and their conjunctions

pub mod aabb3;
pub mod octant;
pub mod plane;
pub mod point3;
pub mod region;

pub use aabb3::Aabb3;
pub use octant::OctantCode;
pub use plane::Plane3;
pub use point3::Point3d;
pub use region::{Region, MAX_REGION_PLANES};

pub mod prelude {
    pub use super::{Aabb3, OctantCode, Plane3, Point3d, Region, MAX_REGION_PLANES};
}
