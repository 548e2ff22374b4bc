//! Convex region queries over point octrees.
//!
//! A query is a pair of a read-only [`PointOctree`](convex_octree_storage::PointOctree) and a
//! [`Region`](convex_octree_core::Region), the intersection of half-space constraints. All
//! queries share one traversal scheme: prune subtrees whose cells cannot intersect the region,
//! take the cached subtree count (or a bulk id copy) for cells entirely inside it, and only test
//! individual points in cells straddling the boundary.
//!
//! - [`count`] / [`count_limited`]: how many points are inside, optionally with early exit
//! - [`indices`]: which points are inside, by insertion id
//! - [`count_batch`]: many regions against one tree, in parallel, with a shared early-exit limit

pub mod batch;
pub mod count;
pub mod indices;

pub use batch::{count_batch, BatchQueryError};
pub use count::{count, count_limited};
pub use indices::indices;

pub mod prelude {
    pub use super::{count, count_batch, count_limited, indices, BatchQueryError};
}
