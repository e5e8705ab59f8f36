//! Spanning-tree construction over unordered centerline samples.

use crate::error::SectionError;
use crate::geom::{dist, GeomCfg};

use super::types::{Node, NodeId, Sample, SectionTree};

/// Build a Euclidean minimum spanning tree over `samples`.
///
/// Prim-style with an exhaustive global-minimum scan each round: the
/// connected set starts from the seed (the **last** sample); every round
/// scans all (connected, disconnected) pairs — connected in attach
/// order outer, disconnected in residual input order inner — and the
/// strictly smallest distance wins, so the first-found pair takes exact
/// ties. The selected pair is linked symmetrically and the new node is
/// appended to the attach order.
///
/// O(n³) over the rounds; section discretizations are small enough that
/// the simple scan beats bookkeeping, and the scan order is part of the
/// determinism contract.
pub fn build_tree(samples: &[Sample], cfg: GeomCfg) -> Result<SectionTree, SectionError> {
    if samples.len() < 2 {
        return Err(SectionError::TooFewSamples(samples.len()));
    }
    for (index, s) in samples.iter().enumerate() {
        if !s.pos.x.is_finite() || !s.pos.y.is_finite() || !s.thickness.is_finite() {
            return Err(SectionError::NonFiniteSample { index });
        }
        if s.thickness <= 0.0 {
            return Err(SectionError::NonPositiveThickness {
                index,
                thickness: s.thickness,
            });
        }
    }

    let nodes: Vec<Node> = samples
        .iter()
        .map(|s| Node {
            pos: s.pos,
            thickness: s.thickness,
        })
        .collect();
    let mut adj: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];

    let seed = NodeId(nodes.len() - 1);
    let mut disconnected: Vec<NodeId> = (0..nodes.len() - 1).map(NodeId).collect();
    let mut order: Vec<NodeId> = Vec::with_capacity(nodes.len());
    order.push(seed);

    while !disconnected.is_empty() {
        let mut best = f64::INFINITY;
        let mut pair: Option<(NodeId, usize)> = None;
        for &c in &order {
            for (k, &d) in disconnected.iter().enumerate() {
                let dd = dist(nodes[d.0].pos, nodes[c.0].pos);
                if dd < best {
                    best = dd;
                    pair = Some((c, k));
                }
            }
        }
        // Coordinates are finite, so every pair has a finite distance.
        let Some((c, k)) = pair else {
            unreachable!("non-empty disconnected set yields a closest pair")
        };
        let d = disconnected.remove(k);
        if best <= cfg.eps_len {
            return Err(SectionError::DegenerateGeometry { a: c.0, b: d.0 });
        }
        adj[c.0].push(d);
        adj[d.0].push(c);
        order.push(d);
    }

    Ok(SectionTree { nodes, adj, order })
}
