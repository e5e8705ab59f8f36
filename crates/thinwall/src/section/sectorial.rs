//! Sectorial (warping) properties: ω passes, sectorial moments, the
//! rigidity center, and the sectorial inertia moment.
//!
//! All quantities here depend on a (root, pole) pair. ω is recomputed
//! from scratch for every consumer as a fresh per-pass array, so there
//! is no stale scratch state to invalidate between passes.

use nalgebra::Vector2;

use crate::error::SectionError;
use crate::geom::{triangle_area, turn_sign};
use crate::tree::{walk, NodeId};

use super::{edge_weight, CrossSection};

impl CrossSection {
    /// Sectorial area ω per node relative to `(root, pole)`, with
    /// ω(root) = 0, indexed by `NodeId`.
    ///
    /// Per edge, with u = parent − pole and v = node − pole, the
    /// increment is the doubled triangle area (u, v, origin) signed by
    /// the polar-angle sweep from u to v. The parent's ω is always
    /// assigned before the child is popped, so the prefix sum is
    /// well-defined in a single walk.
    pub fn sectorial_areas(&self, root: NodeId, pole: Vector2<f64>) -> Vec<f64> {
        let tree = &self.tree;
        let mut omega = vec![0.0; tree.len()];
        walk(tree, root, |node, parent| {
            let Some(p) = parent else { return };
            let u = tree.nodes[p.0].pos - pole;
            let v = tree.nodes[node.0].pos - pole;
            let inc = turn_sign(u, v) * 2.0 * triangle_area(u, v, Vector2::zeros());
            omega[node.0] = omega[p.0] + inc;
        });
        omega
    }

    /// Sectorial static moment Sω = Σ ½(ω + ωp)·t·ds for the given
    /// root and pole.
    pub fn sectorial_static_moment(&self, root: NodeId, pole: Vector2<f64>) -> f64 {
        let omega = self.sectorial_areas(root, pole);
        let tree = &self.tree;
        let mut sw = 0.0;
        walk(tree, root, |node, parent| {
            let Some(p) = parent else { return };
            let (t, ds) = edge_weight(tree, node, p);
            sw += 0.5 * (omega[node.0] + omega[p.0]) * t * ds;
        });
        sw
    }

    /// Sectorial linear static moments (Sωx, Sωy) for the given root
    /// and pole. Positions are measured from the **centroid**, not the
    /// pole; the x-component integrates y·ω and the y-component x·ω
    /// (the torsion-theory axis convention).
    pub fn sectorial_linear_static_moment(
        &mut self,
        root: NodeId,
        pole: Vector2<f64>,
    ) -> Vector2<f64> {
        let gc = self.gravity_center(true);
        let omega = self.sectorial_areas(root, pole);
        let tree = &self.tree;
        let mut sl = Vector2::zeros();
        walk(tree, root, |node, parent| {
            let Some(p) = parent else { return };
            let (t, ds) = edge_weight(tree, node, p);
            let a = tree.nodes[node.0].pos - gc;
            let b = tree.nodes[p.0].pos - gc;
            sl.x += 0.5 * (a.y * omega[node.0] + b.y * omega[p.0]) * t * ds;
            sl.y += 0.5 * (a.x * omega[node.0] + b.x * omega[p.0]) * t * ds;
        });
        sl
    }

    /// Rigidity (shear) center: the point through which transverse
    /// shear produces no twist. Evaluated with the pole at the origin
    /// and the root at the seed:
    /// `R = pole + (Sωx / Ix, −Sωy / Iy)`.
    pub fn rigidity_center(&mut self, reuse: bool) -> Result<Vector2<f64>, SectionError> {
        if reuse {
            if let Some(v) = self.cache.rigidity_center {
                return Ok(v);
            }
        }
        let pole = Vector2::zeros();
        let im = self.inertia_moment(true);
        if im.x == 0.0 {
            return Err(SectionError::SingularSection { axis: "Ix" });
        }
        if im.y == 0.0 {
            return Err(SectionError::SingularSection { axis: "Iy" });
        }
        let root = self.root();
        let sl = self.sectorial_linear_static_moment(root, pole);
        let rc = Vector2::new(pole.x + sl.x / im.x, pole.y - sl.y / im.y);
        self.cache.rigidity_center = Some(rc);
        Ok(rc)
    }

    /// Sectorial inertia moment Iω = Σ ½(ω² + ωp²)·t·ds, with the pole
    /// at the rigidity center.
    ///
    /// The root is found by an exact O(n) scan: every node is tried as
    /// a candidate and the one minimizing |Sω| + |Sωx| + |Sωy| wins,
    /// strict `<` so the first candidate in attach order takes ties.
    /// Each candidate re-runs an O(n) ω pass, so the search is O(n²).
    pub fn sectorial_inertia_moment(&mut self, reuse: bool) -> Result<f64, SectionError> {
        if reuse {
            if let Some(v) = self.cache.sectorial_inertia_moment {
                return Ok(v);
            }
        }
        let pole = self.rigidity_center(true)?;

        let candidates = self.tree.order.clone();
        let mut best = f64::INFINITY;
        let mut best_root = self.root();
        for root in candidates {
            let sw = self.sectorial_static_moment(root, pole);
            let sl = self.sectorial_linear_static_moment(root, pole);
            let score = sw.abs() + sl.x.abs() + sl.y.abs();
            if score < best {
                best = score;
                best_root = root;
            }
        }

        let omega = self.sectorial_areas(best_root, pole);
        let tree = &self.tree;
        let mut iw = 0.0;
        walk(tree, best_root, |node, parent| {
            let Some(p) = parent else { return };
            let (t, ds) = edge_weight(tree, node, p);
            iw += 0.5 * (omega[node.0] * omega[node.0] + omega[p.0] * omega[p.0]) * t * ds;
        });
        self.cache.sectorial_inertia_moment = Some(iw);
        Ok(iw)
    }
}
