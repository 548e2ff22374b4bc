//! Bucketed octrees over 3D point sets with convex half-space region queries.
//!
//! This library is organized into several crates:
//! - **core**: points, axis-aligned boxes, half-space planes, and convex regions
//! - **storage**: the arena-backed [`PointOctree`](crate::prelude::PointOctree) and the
//!   validated handle registry
//! - **search**: counting, id-enumeration, and parallel batched counting queries
//!
//! # Example
//!
//! ```
//! use convex_octree::prelude::*;
//!
//! let points = [
//!     Point3d::new(1.0, 1.0, 1.0),
//!     Point3d::new(9.0, 9.0, 9.0),
//!     Point3d::new(5.0, 5.0, 5.0),
//! ];
//! let tree = PointOctree::from_points(&points, Point3d::ZERO, Point3d::fill(10.0)).unwrap();
//!
//! // Count the points in the half-space x >= 5.
//! let region = Region::from_coefficients(&[[1.0, 0.0, 0.0, 5.0]]);
//! assert_eq!(count(&tree, &region), 2);
//!
//! // The same points by insertion id.
//! let mut ids = indices(&tree, &region);
//! ids.sort_unstable();
//! assert_eq!(ids, vec![2, 3]);
//!
//! // Many regions at once, in parallel, stopping each traversal at 100 matches.
//! let counts = count_batch(&tree, &[region, Region::whole_space()], 100).unwrap();
//! assert_eq!(counts, vec![2, 3]);
//! ```

pub use convex_octree_core as core;
pub use convex_octree_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;

    #[cfg(feature = "search")]
    pub use super::search::prelude::*;
}

#[cfg(feature = "search")]
pub use convex_octree_search as search;
