use convex_octree_core::{Aabb3, OctantCode, Region};
use convex_octree_storage::{NodeId, PointOctree};

/// Collect the ids of every point of `tree` inside `region`.
///
/// Same traversal and pruning as [`count`](crate::count), except that a cell entirely inside the
/// region switches to a bulk copy of all descendant ids with no per-point re-testing (valid by
/// the same convexity argument that makes the counting shortcut exact).
///
/// Ids appear in traversal order: a node's bucket first, then its children in ascending octant
/// order. This is neither insertion order nor any coordinate order. The returned buffer is
/// trimmed to its exact size.
pub fn indices(tree: &PointOctree, region: &Region) -> Vec<u64> {
    let mut out = Vec::new();
    let mut stack: Vec<(NodeId, Aabb3)> = vec![(tree.root_id(), tree.bounds())];

    while let Some((node_id, cell)) = stack.pop() {
        if !region.possibly_intersects(&cell) {
            continue;
        }

        let node = tree.node(node_id);
        if region.fully_contains(&cell) {
            collect_subtree(tree, node_id, &mut out);
            continue;
        }

        for item in node.items() {
            if region.contains(item.point) {
                reserve_amortized(&mut out, 1);
                out.push(item.id);
            }
        }

        let midpoint = node.midpoint();
        for code in OctantCode::all().rev() {
            if let Some(child) = node.child(code) {
                stack.push((child, cell.child_cell(midpoint, code)));
            }
        }
    }

    out.shrink_to_fit();

    out
}

/// Append every id under `subtree` without testing any point.
fn collect_subtree(tree: &PointOctree, subtree: NodeId, out: &mut Vec<u64>) {
    reserve_amortized(out, tree.node(subtree).num_subtree_items() as usize);

    let mut stack = vec![subtree];
    while let Some(node_id) = stack.pop() {
        let node = tree.node(node_id);
        out.extend(node.items().iter().map(|item| item.id));

        for code in OctantCode::all().rev() {
            if let Some(child) = node.child(code) {
                stack.push(child);
            }
        }
    }
}

/// Make room for `additional` ids, growing capacity by the same `cap * 3/2 + 4` policy the node
/// arena uses for its block-index table.
fn reserve_amortized(out: &mut Vec<u64>, additional: usize) {
    let needed = out.len() + additional;
    if needed <= out.capacity() {
        return;
    }

    let mut target = out.capacity();
    while target < needed {
        target = (target * 3) / 2 + 4;
    }
    out.reserve_exact(target - out.len());
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
