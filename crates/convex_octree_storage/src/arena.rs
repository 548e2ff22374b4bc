use crate::node::{NodeId, OctNode};

use convex_octree_core::Point3d;

use tracing::trace;

/// Nodes per block. Blocks are never reallocated or moved once issued, so every `NodeId` stays
/// valid for the arena's whole lifetime.
pub const BLOCK_LEN: usize = 1 << 10;

/// Issues zero-filled, 256-byte-aligned [`OctNode`] slots in amortized `O(1)`.
///
/// Storage grows in fixed-capacity blocks of [`BLOCK_LEN`] nodes; the block-index table grows
/// geometrically (`cap * 3/2 + 4`). Block base addresses inherit `OctNode`'s 256-byte alignment
/// from the global allocator, so no node straddles an alignment boundary.
///
/// There is no per-node free. Dropping the arena is the single bulk release: every block and the
/// index table are freed together, and ownership guarantees this happens exactly once, after all
/// outstanding borrows (i.e. queries) have ended. Allocation failure is fatal and aborts the
/// operation with no partial-state repair.
pub struct NodeArena {
    blocks: Vec<Box<[OctNode]>>,
    num_allocated: u32,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            num_allocated: 0,
        }
    }

    /// Returns a fresh node with the given `midpoint`, all other fields zeroed.
    pub fn allocate(&mut self, midpoint: Point3d) -> NodeId {
        assert!(self.num_allocated < u32::MAX, "node arena exhausted");

        let index = self.num_allocated;
        let slot = index as usize % BLOCK_LEN;
        if slot == 0 {
            self.push_block();
        }
        self.num_allocated += 1;

        let node = &mut self.blocks[index as usize / BLOCK_LEN][slot];
        node.midpoint = midpoint;

        NodeId::from_index(index)
    }

    fn push_block(&mut self) {
        if self.blocks.len() == self.blocks.capacity() {
            let grown = (self.blocks.capacity() * 3) / 2 + 4;
            self.blocks.reserve_exact(grown - self.blocks.len());
        }
        trace!(num_blocks = self.blocks.len() + 1, "growing node arena");

        self.blocks.push(bytemuck::zeroed_slice_box(BLOCK_LEN));
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &OctNode {
        let index = id.index();

        &self.blocks[index / BLOCK_LEN][index % BLOCK_LEN]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut OctNode {
        let index = id.index();

        &mut self.blocks[index / BLOCK_LEN][index % BLOCK_LEN]
    }

    /// How many nodes have been allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_allocated as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_allocated == 0
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
