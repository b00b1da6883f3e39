//! Polyline graph: construction, queries, coalescing, components, routing.
//!
//! Purpose
//! - Hold nodes and polyline edges in id-keyed registries; adjacency is by id
//!   (`Node::edge_ids`, `Edge::{start,end}_node_id`), never by reference.
//! - Provide pure transformations: `coalesced`, `connected_components`,
//!   `shortest_path`, and `Path::advanced`. None of them mutates its input.
//!
//! Layout
//! - `types.rs` (records), `build.rs` (validation and assembly), `query.rs`
//!   (accessors), `coalesce.rs`, `components.rs`, `route.rs` (Dijkstra over the
//!   augmented graph), `advance.rs`, and `rand.rs` (seeded test networks).

mod advance;
mod build;
mod coalesce;
mod components;
mod query;
pub mod rand;
mod route;
mod types;

pub use types::{
    Edge, EdgeInput, EdgePoint, Graph, Id, Node, NodeInput, OrientedEdge, Path, SearchCfg,
};
