//! Sectorial properties of open thin-walled cross-sections.
//!
//! The section centerline arrives as unordered `(position, thickness)`
//! samples. Topology is inferred as a Euclidean minimum spanning tree
//! over the samples (`tree::build_tree`), and every property is a
//! trapezoidal sum accumulated while walking that tree (`tree::walk`):
//! area, centroid, principal and polar moments of inertia, and the
//! sectorial chain up to the rigidity (shear) center and the sectorial
//! moment of inertia.
//!
//! The core is pure and synchronous; callers that need formatted
//! reports or file input live in the `cli` crate.

pub mod error;
pub mod geom;
pub mod section;
pub mod tree;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export to keep caller signatures short.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::SectionError;
    pub use crate::geom::GeomCfg;
    pub use crate::section::CrossSection;
    pub use crate::tree::{build_tree, walk, Node, NodeId, Sample, SectionTree, Walk};
    pub use nalgebra::Vector2 as Vec2;
}
