//! Data types for the centerline spanning tree.
//!
//! Kept small and explicit to make `build` and `walk` easy to read.

use nalgebra::Vector2;

/// One centerline sample of the section wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub pos: Vector2<f64>,
    /// Local wall thickness, strictly positive.
    pub thickness: f64,
}

impl Sample {
    #[inline]
    pub fn new(x: f64, y: f64, thickness: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            thickness,
        }
    }
}

/// Identifier type for clarity: index into the node arena, which keeps
/// the caller's input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Node data: position plus local wall thickness. Immutable after
/// construction; traversal scratch state lives in `Walk`, not here.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub pos: Vector2<f64>,
    pub thickness: f64,
}

/// Spanning tree over the samples.
///
/// Invariants: exactly N−1 undirected edges, connected, acyclic;
/// adjacency is symmetric with no self-loops or duplicates.
#[derive(Clone, Debug)]
pub struct SectionTree {
    pub nodes: Vec<Node>,
    /// Neighbor ids per node, in attach order.
    pub adj: Vec<Vec<NodeId>>,
    /// Attach order of the build; `order[0]` is the seed (the last
    /// input sample).
    pub order: Vec<NodeId>,
}

impl SectionTree {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges (N−1 for a tree).
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// The build seed, used as the default traversal root.
    #[inline]
    pub fn seed(&self) -> NodeId {
        self.order[0]
    }
}
