//! Unit tests for spanning-tree construction and traversal.

use super::*;
use crate::error::SectionError;
use crate::geom::{dist, GeomCfg};

fn samples(coords: &[(f64, f64)]) -> Vec<Sample> {
    coords.iter().map(|&(x, y)| Sample::new(x, y, 1.0)).collect()
}

fn build(coords: &[(f64, f64)]) -> SectionTree {
    build_tree(&samples(coords), GeomCfg::default()).unwrap()
}

/// Independent reference MST weight: Kruskal over all pairs with a
/// union-find.
fn kruskal_weight(coords: &[(f64, f64)]) -> f64 {
    let n = coords.len();
    let mut edges: Vec<(f64, usize, usize)> = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = coords[j].0 - coords[i].0;
            let dy = coords[j].1 - coords[i].1;
            edges.push(((dx * dx + dy * dy).sqrt(), i, j));
        }
    }
    edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    let mut root: Vec<usize> = (0..n).collect();
    fn find(root: &mut Vec<usize>, mut i: usize) -> usize {
        while root[i] != i {
            root[i] = root[root[i]];
            i = root[i];
        }
        i
    }
    let mut total = 0.0;
    let mut used = 0;
    for (w, i, j) in edges {
        let (ri, rj) = (find(&mut root, i), find(&mut root, j));
        if ri != rj {
            root[ri] = rj;
            total += w;
            used += 1;
            if used == n - 1 {
                break;
            }
        }
    }
    total
}

// Irregular point set with distinct pairwise distances.
const SCATTER: [(f64, f64); 7] = [
    (0.0, 0.0),
    (3.1, 0.7),
    (5.9, -1.3),
    (2.2, 4.8),
    (7.4, 3.3),
    (-1.8, 2.6),
    (4.4, 7.1),
];

#[test]
fn mst_is_a_tree_matching_reference_weight() {
    let tree = build(&SCATTER);
    let n = tree.len();
    assert_eq!(tree.edge_count(), n - 1);

    // Adjacency is symmetric, no self-loops, no duplicates.
    for (i, nbs) in tree.adj.iter().enumerate() {
        for &nb in nbs {
            assert_ne!(nb.0, i);
            assert_eq!(nbs.iter().filter(|&&x| x == nb).count(), 1);
            assert!(tree.adj[nb.0].contains(&NodeId(i)));
        }
    }

    // Connected: a walk from the seed reaches every node. With N-1
    // edges that also rules out cycles.
    let mut visits = 0;
    walk(&tree, tree.seed(), |_, _| visits += 1);
    assert_eq!(visits, n);

    // Total edge weight equals the Kruskal reference (distances are
    // pairwise distinct, so the MST is unique).
    let total: f64 = tree
        .adj
        .iter()
        .enumerate()
        .flat_map(|(i, nbs)| {
            let nodes = &tree.nodes;
            nbs.iter()
                .map(move |&nb| dist(nodes[i].pos, nodes[nb.0].pos))
        })
        .sum::<f64>()
        / 2.0;
    assert!((total - kruskal_weight(&SCATTER)).abs() < 1e-9);
}

#[test]
fn seed_is_last_sample() {
    let tree = build(&SCATTER);
    assert_eq!(tree.seed(), NodeId(SCATTER.len() - 1));
    assert_eq!(tree.order.len(), tree.len());
}

#[test]
fn too_few_samples_rejected() {
    let cfg = GeomCfg::default();
    assert_eq!(
        build_tree(&[], cfg).unwrap_err(),
        SectionError::TooFewSamples(0)
    );
    assert_eq!(
        build_tree(&samples(&[(0.0, 0.0)]), cfg).unwrap_err(),
        SectionError::TooFewSamples(1)
    );
}

#[test]
fn non_positive_thickness_rejected() {
    let cfg = GeomCfg::default();
    let s = vec![Sample::new(0.0, 0.0, 1.0), Sample::new(1.0, 0.0, 0.0)];
    assert_eq!(
        build_tree(&s, cfg).unwrap_err(),
        SectionError::NonPositiveThickness {
            index: 1,
            thickness: 0.0
        }
    );
}

#[test]
fn non_finite_sample_rejected() {
    let cfg = GeomCfg::default();
    let s = vec![Sample::new(0.0, 0.0, 1.0), Sample::new(f64::NAN, 0.0, 1.0)];
    assert_eq!(
        build_tree(&s, cfg).unwrap_err(),
        SectionError::NonFiniteSample { index: 1 }
    );
}

#[test]
fn coincident_samples_rejected() {
    let cfg = GeomCfg::default();
    let s = samples(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    assert!(matches!(
        build_tree(&s, cfg).unwrap_err(),
        SectionError::DegenerateGeometry { .. }
    ));
}

#[test]
fn walk_visits_once_root_first_parent_before_child() {
    // A chain; walking from one end must enumerate it in order.
    let tree = build(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
    let root = NodeId(0);
    let mut seen: Vec<NodeId> = Vec::new();
    let w = walk(&tree, root, |node, parent| {
        if let Some(p) = parent {
            // Parent was visited strictly before this node was popped.
            assert!(seen.contains(&p), "parent {p:?} visited before {node:?}");
        } else {
            assert_eq!(node, root);
        }
        seen.push(node);
    });
    assert_eq!(seen.len(), tree.len());
    assert_eq!(seen[0], root);
    for id in 0..tree.len() {
        assert_eq!(seen.iter().filter(|&&x| x == NodeId(id)).count(), 1);
    }
    assert_eq!(w.parent_of(root), None);
    // Exactly one root in the parent assignment.
    let roots = w.parent.iter().filter(|p| p.is_none()).count();
    assert_eq!(roots, 1);
}

#[test]
fn walk_contexts_are_independent_per_pass() {
    let tree = build(&SCATTER);
    let a = walk(&tree, NodeId(0), |_, _| {});
    let b = walk(&tree, tree.seed(), |_, _| {});
    assert_eq!(a.parent_of(NodeId(0)), None);
    assert_eq!(b.parent_of(tree.seed()), None);
    // Re-rooting flips the parent direction along the path between the
    // two roots; the first context must be unaffected.
    assert!(a.parent_of(tree.seed()).is_some());
    assert!(b.parent_of(NodeId(0)).is_some());
}
