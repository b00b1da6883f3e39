//! 2D polyline geometry.
//!
//! Purpose
//! - Arc length of polylines and the inverse query: the point lying a given arc
//!   length along a polyline.
//! - Stateless; the graph store calls in here once per edge at construction and
//!   once per `Graph::location` query.
//!
//! Numerics
//! - Endpoint queries must return the literal endpoint, never a value recomputed
//!   from accumulated segment lengths. See `point_at_distance`.

mod polyline;
mod types;

pub use polyline::{clamp_distance, edge_polyline, point_at_distance, polyline_length};
pub use types::{Location, Segment2};
