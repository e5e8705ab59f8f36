//! Iterative depth-first traversal with per-pass context.

use super::types::{NodeId, SectionTree};

/// Per-pass traversal context. A fresh `Walk` is produced by every
/// `walk` call, so passes are reentrant and nodes carry no transient
/// state.
#[derive(Clone, Debug)]
pub struct Walk {
    /// Parent assignment for this pass: `None` for the root (and for
    /// nodes unreachable from it).
    pub parent: Vec<Option<NodeId>>,
}

impl Walk {
    #[inline]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parent[id.0]
    }
}

/// Depth-first walk from `root`, assigning parents and invoking
/// `visit(node, parent)` exactly once per reachable node.
///
/// Uses an explicit LIFO frontier rather than recursion; long open
/// sections would otherwise risk the call-stack limit. The root is
/// visited first, and a node's parent is always visited strictly before
/// the node itself is popped — the sectorial pass relies on this.
/// Sibling order is LIFO-derived, so per-edge accumulation over a walk
/// must be commutative (sums).
pub fn walk<F>(tree: &SectionTree, root: NodeId, mut visit: F) -> Walk
where
    F: FnMut(NodeId, Option<NodeId>),
{
    let n = tree.len();
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = vec![root];

    while let Some(cur) = frontier.pop() {
        for &nb in &tree.adj[cur.0] {
            if !visited[nb.0] {
                parent[nb.0] = Some(cur);
                frontier.push(nb);
            }
        }
        visit(cur, parent[cur.0]);
        visited[cur.0] = true;
    }

    Walk { parent }
}
