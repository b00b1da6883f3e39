//! Polyline graphs: structural queries, coalescing, connectivity, and routing
//! between arbitrary points along edges.
//!
//! Layout
//! - `geom2`: polyline length and distance → location interpolation (pure functions).
//! - `graph`: immutable node/edge registries plus the transformations built on them
//!   (coalescing, connected components, shortest paths, path advancing).
//! - `error`: the crate-wide error taxonomy.
//!
//! API Policy
//! - Graphs are immutable once built; every transformation returns a fresh value.
//! - Lookups that may legitimately miss (`Graph::node`, `Graph::edge`) return `Option`;
//!   lookups that require existence return `Result` with a [`GraphError`].

pub mod api;
pub mod error;
pub mod geom2;
pub mod graph;

pub use error::{GraphError, IdKind, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GraphError, IdKind, Result};
    pub use crate::geom2::Location;
    pub use crate::graph::{
        Edge, EdgeInput, EdgePoint, Graph, Id, Node, NodeInput, OrientedEdge, Path, SearchCfg,
    };
}

/// Convenience constructor for a [`geom2::Location`].
#[inline]
pub fn loc(x: f64, y: f64) -> geom2::Location {
    geom2::Location::new(x, y)
}
