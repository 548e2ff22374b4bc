//! Arena-backed bucketed octrees over 3D point sets.
//!
//! The central type is the [`PointOctree`]: a static spatial index created once with explicit
//! bounds, grown only through insertion, and torn down in a single bulk release. Nodes live in a
//! [`NodeArena`](crate::arena::NodeArena) of 256-byte aligned, zero-initialized slots and refer
//! to each other through stable [`NodeId`](crate::node::NodeId) indices, never raw pointers.
//!
//! Query algorithms live in the `convex_octree_search` crate; this crate only exposes the node
//! accessors they traverse with. For callers that can only hold numeric handles (e.g. a foreign
//! marshalling layer), the [`TreeRegistry`] owns trees behind validated opaque handles.

pub mod arena;
pub mod node;
pub mod registry;
pub mod tree;

pub use arena::{NodeArena, BLOCK_LEN};
pub use node::{Item, NodeId, OctNode, BUCKET_CAPACITY};
pub use registry::{InvalidHandle, TreeHandle, TreeRegistry};
pub use tree::{InsertError, PointOctree, MAX_DEPTH};

pub mod prelude {
    pub use super::{
        InsertError, InvalidHandle, Item, NodeId, OctNode, PointOctree, TreeHandle, TreeRegistry,
    };
}
