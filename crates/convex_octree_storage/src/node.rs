use convex_octree_core::{OctantCode, Point3d};

use bytemuck::{Pod, Zeroable};
use core::num::NonZeroU32;

/// How many items a node holds inline before it branches.
pub const BUCKET_CAPACITY: usize = 5;

/// One point stored in a node's bucket: an insertion-order id and its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Item {
    pub id: u64,
    pub point: Point3d,
}

/// A stable arena index referring to one [`OctNode`].
///
/// Ids are 1-based so that `Option<NodeId>` is 4 bytes and an all-zero child table decodes as
/// 8 absent children.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

unsafe impl bytemuck::ZeroableInOption for NodeId {}

impl NodeId {
    #[inline]
    pub(crate) fn from_index(index: u32) -> Self {
        // The arena never issues index u32::MAX, so the add cannot wrap.
        match NonZeroU32::new(index + 1) {
            Some(id) => Self(id),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// One octree node. Exactly 256 bytes, aligned to a 256-byte boundary so that a node never
/// straddles a cache-line (or page) boundary:
///
/// ```text
/// num_bucket_items   4 bytes
/// num_subtree_items  4 bytes
/// midpoint          24 bytes
/// bucket           160 bytes (5 * 32)
/// children          32 bytes (8 * 4)
/// padding           32 bytes
/// ```
///
/// A node starts as a leaf, buffering items in its bucket. Once the bucket reaches
/// [`BUCKET_CAPACITY`] it is frozen and the node branches, creating children on demand; a node
/// never reverts to a leaf.
#[derive(Clone, Copy, Zeroable)]
#[repr(C, align(256))]
pub struct OctNode {
    pub(crate) num_bucket_items: u32,
    pub(crate) num_subtree_items: u32,
    pub(crate) midpoint: Point3d,
    pub(crate) bucket: [Item; BUCKET_CAPACITY],
    pub(crate) children: [Option<NodeId>; 8],
}

impl OctNode {
    /// The midpoint of this node's cell, against which descending points are classified.
    #[inline]
    pub fn midpoint(&self) -> Point3d {
        self.midpoint
    }

    /// The exact number of items in this node's subtree, itself included. Maintained
    /// incrementally on every insertion passing through this node.
    #[inline]
    pub fn num_subtree_items(&self) -> u32 {
        self.num_subtree_items
    }

    /// The items held inline by this node.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.bucket[..self.num_bucket_items as usize]
    }

    /// The child in the given octant, if it has been created.
    #[inline]
    pub fn child(&self, code: OctantCode) -> Option<NodeId> {
        self.children[code.index()]
    }

    /// `true` once the bucket is frozen and items route to children.
    #[inline]
    pub fn is_branch(&self) -> bool {
        self.num_bucket_items as usize == BUCKET_CAPACITY
    }

    #[inline]
    pub(crate) fn push_item(&mut self, item: Item) {
        debug_assert!(!self.is_branch());
        self.bucket[self.num_bucket_items as usize] = item;
        self.num_bucket_items += 1;
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
