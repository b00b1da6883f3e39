//! Curated flat API.
//!
//! - Single import surface for callers that do not care about the module layout.
//! - Mirrors `prelude` plus the generator and geometry helpers.

// Geometry
pub use crate::geom2::{
    clamp_distance, edge_polyline, point_at_distance, polyline_length, Location,
};
// Graph store and transformations
pub use crate::graph::{
    Edge, EdgeInput, EdgePoint, Graph, Id, Node, NodeInput, OrientedEdge, Path, SearchCfg,
};
// Random networks
pub use crate::graph::rand::{draw_edge_points, draw_grid_network, GridCfg, ReplayToken};
// Errors
pub use crate::error::{GraphError, IdKind, Result};
