use crate::tree::PointOctree;

use slab::Slab;
use thiserror::Error;

/// Use of a handle that was never issued by this registry or whose tree was already destroyed.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("invalid or destroyed tree handle")]
pub struct InvalidHandle;

/// An opaque, copyable handle to a tree owned by a [`TreeRegistry`].
///
/// The embedded generation makes handles unforgeable across slot reuse: a destroyed tree's slot
/// can be recycled, but the stale handle keeps failing validation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeHandle {
    slot: usize,
    generation: u64,
}

/// Owns trees on behalf of a marshalling collaborator that can only hold numeric handles.
///
/// Every access is validated, which turns "use of a destroyed or foreign handle" from undefined
/// behavior (the raw-pointer design this replaces) into a reportable [`InvalidHandle`].
#[derive(Default)]
pub struct TreeRegistry {
    slots: Slab<(u64, PointOctree)>,
    next_generation: u64,
}

impl TreeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `tree` and issue a handle for it.
    pub fn insert(&mut self, tree: PointOctree) -> TreeHandle {
        self.next_generation += 1;
        let generation = self.next_generation;
        let slot = self.slots.insert((generation, tree));

        TreeHandle { slot, generation }
    }

    /// Resolve a handle for querying.
    pub fn get(&self, handle: TreeHandle) -> Result<&PointOctree, InvalidHandle> {
        match self.slots.get(handle.slot) {
            Some((generation, tree)) if *generation == handle.generation => Ok(tree),
            _ => Err(InvalidHandle),
        }
    }

    /// Destroy the tree behind `handle`, releasing all of its node storage in one bulk
    /// operation. The handle (and any copy of it) is invalid afterwards; destroying twice is an
    /// error, not undefined behavior.
    pub fn destroy(&mut self, handle: TreeHandle) -> Result<(), InvalidHandle> {
        let _ = self.get(handle)?;
        let _ = self.slots.remove(handle.slot);

        Ok(())
    }

    /// How many trees are currently alive.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
