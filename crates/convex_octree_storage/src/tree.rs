use crate::arena::NodeArena;
use crate::node::{Item, NodeId, OctNode};

use convex_octree_core::{Aabb3, OctantCode, Point3d};

use thiserror::Error;
use tracing::debug;

/// The deepest node an insertion may land in.
///
/// Midpoint bisection cannot separate coincident points, so without a bound the descent for
/// duplicate-heavy input would only stop once successive midpoints become indistinguishable in
/// floating point. 64 halvings is already past `f64` distinguishability for any reasonable
/// bounds, so only pathological input hits this limit.
pub const MAX_DEPTH: usize = 64;

/// Why a point was not inserted. Both cases are recoverable and leave the tree untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InsertError {
    /// The point has a coordinate outside the tree bounds.
    #[error("point {0:?} lies outside the tree bounds")]
    OutOfBounds(Point3d),
    /// The point would land below [`MAX_DEPTH`], which only happens when many points share
    /// (nearly) identical coordinates.
    #[error("insertion would exceed the maximum tree depth of {}", MAX_DEPTH)]
    MaxDepthExceeded,
}

/// A bucketed, lazily-branching octree over 3D points.
///
/// The tree is created once with explicit bounds, grows only through insertion, and releases all
/// node storage in one bulk operation when dropped. Inserted points get unique 1-based ids in
/// call order. Insertion needs `&mut self` while queries borrow `&self`, so the borrow checker
/// serializes construction against querying; a finished tree is `Send + Sync` and can be shared
/// freely by concurrent readers.
pub struct PointOctree {
    bounds: Aabb3,
    root: NodeId,
    assigned_ids: u64,
    arena: NodeArena,
}

impl PointOctree {
    /// Make an empty tree spanning the box with corners `a` and `b`. Coordinates are swapped per
    /// axis as needed; the bounds never change afterwards.
    pub fn new(a: Point3d, b: Point3d) -> Self {
        let bounds = Aabb3::from_corners(a, b);
        let mut arena = NodeArena::new();
        let root = arena.allocate(bounds.midpoint());

        Self {
            bounds,
            root,
            assigned_ids: 0,
            arena,
        }
    }

    /// Bulk constructor: inserts `points` in order into a tree spanning `a` and `b`. Points
    /// outside the bounds are silently dropped (they still consume an id); a depth overflow
    /// aborts construction.
    pub fn from_points(points: &[Point3d], a: Point3d, b: Point3d) -> Result<Self, InsertError> {
        let mut tree = Self::new(a, b);

        let mut num_dropped = 0u64;
        for &point in points {
            match tree.insert(point) {
                Ok(_) => (),
                Err(InsertError::OutOfBounds(_)) => num_dropped += 1,
                Err(e) => return Err(e),
            }
        }
        debug!(
            num_points = points.len(),
            num_dropped,
            num_nodes = tree.arena.len(),
            "built point octree"
        );

        Ok(tree)
    }

    /// Insert one point, returning its id.
    ///
    /// The id counter advances even for rejected points, so ids always reflect insertion call
    /// order. A rejected insertion does not mutate the tree in any other way.
    pub fn insert(&mut self, point: Point3d) -> Result<u64, InsertError> {
        self.assigned_ids += 1;
        let id = self.assigned_ids;

        if !self.bounds.contains(point) {
            return Err(InsertError::OutOfBounds(point));
        }
        // Probe the descent read-only first; failing *before* the committed descent below means
        // no subtree count needs rolling back.
        if self.landing_depth(point) > MAX_DEPTH {
            return Err(InsertError::MaxDepthExceeded);
        }

        let item = Item { id, point };
        let mut cell = self.bounds;
        let mut node_id = self.root;
        loop {
            let node = self.arena.get_mut(node_id);
            // Increment first, unconditionally: every node on the path gains this item.
            node.num_subtree_items += 1;
            if !node.is_branch() {
                node.push_item(item);
                return Ok(id);
            }

            let midpoint = node.midpoint;
            let code = OctantCode::for_point(point, midpoint);
            let existing = node.child(code);
            cell = cell.child_cell(midpoint, code);
            node_id = match existing {
                Some(child) => child,
                None => {
                    let child = self.arena.allocate(cell.midpoint());
                    self.arena.get_mut(node_id).children[code.index()] = Some(child);

                    child
                }
            };
        }
    }

    /// The depth of the node `point` would be appended to, without mutating anything.
    fn landing_depth(&self, point: Point3d) -> usize {
        let mut node = self.arena.get(self.root);
        let mut depth = 0;
        while node.is_branch() {
            let code = OctantCode::for_point(point, node.midpoint());
            match node.child(code) {
                Some(child) => {
                    node = self.arena.get(child);
                    depth += 1;
                }
                // The item would land in a freshly created child.
                None => return depth + 1,
            }
        }

        depth
    }

    /// The box spanned by the tree.
    #[inline]
    pub fn bounds(&self) -> Aabb3 {
        self.bounds
    }

    /// The root node's id. The root always exists, even in an empty tree.
    #[inline]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Resolve a node id issued by this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &OctNode {
        self.arena.get(id)
    }

    /// The number of successfully inserted points.
    #[inline]
    pub fn len(&self) -> u64 {
        u64::from(self.node(self.root).num_subtree_items())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many ids have been handed out, including ids burned by rejected insertions.
    #[inline]
    pub fn assigned_ids(&self) -> u64 {
        self.assigned_ids
    }

    /// How many nodes back the tree.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use crate::node::BUCKET_CAPACITY;

    use pretty_assertions::assert_eq;
    use utilities::data_sets::random_points_in_aabb;

    #[test]
    fn ids_are_assigned_in_call_order() {
        let mut tree = PointOctree::new(Point3d::ZERO, Point3d::fill(10.0));

        assert_eq!(tree.insert(Point3d::fill(1.0)), Ok(1));
        assert_eq!(tree.insert(Point3d::fill(9.0)), Ok(2));
        assert_eq!(tree.insert(Point3d::fill(5.0)), Ok(3));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn rejected_points_consume_an_id_but_do_not_mutate() {
        let mut tree = PointOctree::new(Point3d::ZERO, Point3d::fill(10.0));

        let rejected = tree.insert(Point3d::new(5.0, 11.0, 5.0));
        assert_eq!(
            rejected,
            Err(InsertError::OutOfBounds(Point3d::new(5.0, 11.0, 5.0)))
        );
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.assigned_ids(), 1);

        // The burned id is not reused.
        assert_eq!(tree.insert(Point3d::fill(5.0)), Ok(2));
    }

    #[test]
    fn bounds_are_normalized_and_closed() {
        let mut tree = PointOctree::new(Point3d::fill(10.0), Point3d::ZERO);

        assert_eq!(tree.bounds().minimum, Point3d::ZERO);
        assert_eq!(tree.bounds().maximum, Point3d::fill(10.0));
        // Boundary points are inside.
        assert!(tree.insert(Point3d::ZERO).is_ok());
        assert!(tree.insert(Point3d::fill(10.0)).is_ok());
    }

    #[test]
    fn branching_is_lazy_and_one_way() {
        let mut tree = PointOctree::new(Point3d::ZERO, Point3d::fill(8.0));

        for i in 0..BUCKET_CAPACITY {
            tree.insert(Point3d::fill(0.5 + i as f64)).unwrap();
            let root = tree.node(tree.root_id());
            assert!(OctantCode::all().all(|code| root.child(code).is_none()));
        }

        // The sixth item freezes the bucket and descends into octant 7.
        tree.insert(Point3d::fill(7.0)).unwrap();
        let root = tree.node(tree.root_id());
        assert!(root.is_branch());
        assert_eq!(root.items().len(), BUCKET_CAPACITY);

        let high = root.child(OctantCode::for_point(Point3d::fill(7.0), root.midpoint()));
        let child = tree.node(high.unwrap());
        // The child's midpoint is the midpoint of the high half-cell (4..8 per axis).
        assert_eq!(child.midpoint(), Point3d::fill(6.0));
        assert_eq!(child.items(), &[Item { id: 6, point: Point3d::fill(7.0) }]);
    }

    #[test]
    fn subtree_counts_stay_consistent_under_random_inserts() {
        let bounds = Aabb3::from_corners(Point3d::fill(-100.0), Point3d::fill(100.0));
        let mut tree = PointOctree::new(bounds.minimum, bounds.maximum);

        for point in random_points_in_aabb(bounds, 2000) {
            tree.insert(point).unwrap();
        }

        assert_eq!(tree.len(), 2000);
        tree.assert_subtree_counts_consistent();
    }

    #[test]
    fn coincident_points_are_rejected_past_the_depth_bound() {
        let mut tree = PointOctree::new(Point3d::ZERO, Point3d::fill(10.0));
        let duplicate = tree.bounds().midpoint();

        let mut num_inserted = 0;
        let mut saw_depth_error = false;
        for _ in 0..400 {
            match tree.insert(duplicate) {
                Ok(_) => {
                    assert!(!saw_depth_error);
                    num_inserted += 1;
                }
                Err(InsertError::MaxDepthExceeded) => saw_depth_error = true,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        // One bucket per level, from depth 0 through MAX_DEPTH.
        assert!(saw_depth_error);
        assert_eq!(num_inserted, (BUCKET_CAPACITY * (MAX_DEPTH + 1)) as u64);
        assert_eq!(tree.len(), num_inserted);
        tree.assert_subtree_counts_consistent();

        // The tree still accepts points that land elsewhere.
        assert!(tree.insert(Point3d::fill(9.5)).is_ok());
    }

    #[test]
    fn from_points_drops_out_of_bounds_points_silently() {
        let points = [
            Point3d::fill(1.0),
            Point3d::fill(-1.0), // outside
            Point3d::fill(9.0),
        ];
        let tree = PointOctree::from_points(&points, Point3d::ZERO, Point3d::fill(10.0)).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.assigned_ids(), 3);
    }

    impl PointOctree {
        fn assert_subtree_counts_consistent(&self) {
            self.assert_subtree_count(self.root_id());
        }

        fn assert_subtree_count(&self, id: NodeId) -> u64 {
            let node = self.node(id);

            if !node.is_branch() {
                // Children may only exist once the bucket is frozen.
                assert!(OctantCode::all().all(|code| node.child(code).is_none()));
            }

            let mut sum = node.items().len() as u64;
            for code in OctantCode::all() {
                if let Some(child) = node.child(code) {
                    sum += self.assert_subtree_count(child);
                }
            }
            assert_eq!(u64::from(node.num_subtree_items()), sum);

            sum
        }
    }
}
