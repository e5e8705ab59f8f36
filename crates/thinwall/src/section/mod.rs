//! Cross-section property calculator.
//!
//! Purpose
//! - Own the spanning tree over the sample centerline and derive the
//!   section properties as trapezoidal sums over tree edges: area,
//!   centroid, centroidal and polar inertia moments here, and the
//!   sectorial chain (ω, Sω, Sωx/Sωy, rigidity center, Iω) in
//!   `sectorial`.
//!
//! Caching
//! - Each derived quantity is memoized in an `Option` once computed; a
//!   legitimately zero value is cached like any other. Every getter
//!   takes a `reuse` flag: `true` returns the memoized value when
//!   present, `false` recomputes and re-memoizes. Getters resolve their
//!   prerequisites with `reuse = true`, which encodes the dependency
//!   chain area → centroid → inertia → rigidity center → sectorial
//!   inertia.

mod sectorial;


use nalgebra::Vector2;

use crate::error::SectionError;
use crate::geom::{dist, GeomCfg};
use crate::tree::{build_tree, walk, NodeId, Sample, SectionTree};

/// Memoized derived quantities; `None` means "not yet computed".
#[derive(Clone, Copy, Debug, Default)]
struct PropertyCache {
    section_area: Option<f64>,
    gravity_center: Option<Vector2<f64>>,
    inertia_moment: Option<Vector2<f64>>,
    rigidity_center: Option<Vector2<f64>>,
    sectorial_inertia_moment: Option<f64>,
}

/// An open thin-walled cross-section, discretized as centerline samples
/// with local wall thickness.
///
/// Construction infers the topology (minimum spanning tree over the
/// samples); the getters walk that tree, re-rooting as each quantity
/// requires.
#[derive(Clone, Debug)]
pub struct CrossSection {
    tree: SectionTree,
    cache: PropertyCache,
}

/// Trapezoidal edge weight: mean thickness and edge length.
#[inline]
fn edge_weight(tree: &SectionTree, node: NodeId, parent: NodeId) -> (f64, f64) {
    let a = &tree.nodes[node.0];
    let b = &tree.nodes[parent.0];
    (0.5 * (a.thickness + b.thickness), dist(a.pos, b.pos))
}

impl CrossSection {
    /// Build a cross-section from centerline samples. Input validation
    /// and topology inference happen here, so every downstream getter
    /// works on a connected, cycle-free tree with positive thicknesses
    /// and strictly positive edge lengths.
    pub fn new(samples: &[Sample]) -> Result<Self, SectionError> {
        Self::with_cfg(samples, GeomCfg::default())
    }

    pub fn with_cfg(samples: &[Sample], cfg: GeomCfg) -> Result<Self, SectionError> {
        let tree = build_tree(samples, cfg)?;
        Ok(Self {
            tree,
            cache: PropertyCache::default(),
        })
    }

    #[inline]
    pub fn tree(&self) -> &SectionTree {
        &self.tree
    }

    /// Default traversal root: the spanning-tree seed (last input
    /// sample).
    #[inline]
    pub fn root(&self) -> NodeId {
        self.tree.seed()
    }

    /// Section area F = Σ t·ds over the tree edges. Root-independent.
    pub fn section_area(&mut self, reuse: bool) -> f64 {
        if reuse {
            if let Some(v) = self.cache.section_area {
                return v;
            }
        }
        let tree = &self.tree;
        let mut area = 0.0;
        walk(tree, tree.seed(), |node, parent| {
            let Some(p) = parent else { return };
            let (t, ds) = edge_weight(tree, node, p);
            area += t * ds;
        });
        self.cache.section_area = Some(area);
        area
    }

    /// Center of gravity (x̄, ȳ).
    pub fn gravity_center(&mut self, reuse: bool) -> Vector2<f64> {
        if reuse {
            if let Some(v) = self.cache.gravity_center {
                return v;
            }
        }
        // F > 0: construction rejects zero-length edges and
        // non-positive thicknesses.
        let f = self.section_area(true);
        let tree = &self.tree;
        let mut gc = Vector2::zeros();
        walk(tree, tree.seed(), |node, parent| {
            let Some(p) = parent else { return };
            let (t, ds) = edge_weight(tree, node, p);
            gc += (tree.nodes[node.0].pos + tree.nodes[p.0].pos) * 0.5 * t * ds;
        });
        gc /= f;
        self.cache.gravity_center = Some(gc);
        gc
    }

    /// Centroidal inertia moments packed as (Ix, Iy): raw moments about
    /// the origin, then the parallel-axis shift to the centroid.
    pub fn inertia_moment(&mut self, reuse: bool) -> Vector2<f64> {
        if reuse {
            if let Some(v) = self.cache.inertia_moment {
                return v;
            }
        }
        let tree = &self.tree;
        let mut im = Vector2::zeros();
        walk(tree, tree.seed(), |node, parent| {
            let Some(p) = parent else { return };
            let (t, ds) = edge_weight(tree, node, p);
            let a = tree.nodes[node.0].pos;
            let b = tree.nodes[p.0].pos;
            im.x += 0.5 * (a.y * a.y + b.y * b.y) * t * ds;
            im.y += 0.5 * (a.x * a.x + b.x * b.x) * t * ds;
        });
        let f = self.section_area(true);
        let gc = self.gravity_center(true);
        im.x -= f * gc.y * gc.y;
        im.y -= f * gc.x * gc.x;
        self.cache.inertia_moment = Some(im);
        im
    }

    /// Polar inertia moment Ip = Ix + Iy.
    pub fn polar_inertia_moment(&mut self, reuse: bool) -> f64 {
        let im = self.inertia_moment(reuse);
        im.x + im.y
    }
}
