//! Centerline spanning tree: construction and traversal.
//!
//! Purpose
//! - Infer the open section's topology from an unordered sample list as
//!   a Euclidean minimum spanning tree (`build_tree`), and walk the
//!   resulting tree with a caller-supplied visitor (`walk`).
//!
//! Why this design
//! - Nodes live in a flat arena addressed by `NodeId`; adjacency is a
//!   list of indices. This avoids the ownership cycles an object graph
//!   with back-pointers would create.
//! - Traversal state (parents, visited set) is produced fresh per pass
//!   in a `Walk` context instead of being stored on the nodes, so passes
//!   are reentrant and cheap to compose.

mod build;
mod types;
mod walk;

pub use build::build_tree;
pub use types::{Node, NodeId, Sample, SectionTree};
pub use walk::{walk, Walk};

#[cfg(test)]
mod tests;
