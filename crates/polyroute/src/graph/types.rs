//! Data types for the polyline graph, routing inputs, and paths.
//!
//! Kept small and explicit to make `build`, `coalesce` and `route` easy to read.
//! All records are plain values compared by content.

use std::collections::HashMap;
use std::fmt;

use crate::geom2::Location;

/// Node or edge identifier: integer or text.
///
/// Ordering puts every `Int` before every `Text`; only used for deterministic
/// tie-breaking, never for semantics.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}
impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Int(i64::from(n))
    }
}
impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_owned())
    }
}
impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

/// Node descriptor accepted by `Graph::create`.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeInput {
    pub id: Id,
    pub location: Location,
}

impl NodeInput {
    pub fn new(id: impl Into<Id>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            location: Location::new(x, y),
        }
    }
}

/// Edge descriptor accepted by `Graph::create`.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeInput {
    pub id: Id,
    pub start_node_id: Id,
    pub end_node_id: Id,
    pub inner_locations: Vec<Location>,
}

impl EdgeInput {
    pub fn new(id: impl Into<Id>, start: impl Into<Id>, end: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            start_node_id: start.into(),
            end_node_id: end.into(),
            inner_locations: Vec::new(),
        }
    }

    pub fn with_inner(mut self, inner: Vec<Location>) -> Self {
        self.inner_locations = inner;
        self
    }
}

/// A located point with its incident edges, in the order they were added.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: Id,
    pub location: Location,
    pub edge_ids: Vec<Id>,
}

/// Polyline `[start, inner_locations.., end]` with its cached arc length.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: Id,
    pub start_node_id: Id,
    pub end_node_id: Id,
    pub inner_locations: Vec<Location>,
    pub length: f64,
}

impl Edge {
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.start_node_id == self.end_node_id
    }
}

/// Position `distance` arc-length units from the start of `edge_id`.
/// Out-of-range distances are clamped on use.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgePoint {
    pub edge_id: Id,
    pub distance: f64,
}

impl EdgePoint {
    pub fn new(edge_id: impl Into<Id>, distance: f64) -> Self {
        Self {
            edge_id: edge_id.into(),
            distance,
        }
    }
}

/// An edge tagged with its traversal direction (`is_forward`: start → end).
#[derive(Clone, Debug, PartialEq)]
pub struct OrientedEdge {
    pub edge: Edge,
    pub is_forward: bool,
}

/// Route between two edge points.
///
/// `oriented_edges` holds the partially traversed first and last edges and every
/// full edge in between; `nodes` are the real nodes crossed, so
/// `nodes.len() + 1 == oriented_edges.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub start: EdgePoint,
    pub end: EdgePoint,
    pub oriented_edges: Vec<OrientedEdge>,
    pub nodes: Vec<Node>,
    pub length: f64,
}

/// Immutable node and edge registries with id → position indexes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) node_index: HashMap<Id, usize>,
    pub(crate) edge_index: HashMap<Id, usize>,
}

/// Router configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchCfg {
    /// Search radius in arc-length units. Nodes farther than this from the start
    /// point are not expanded and longer routes are reported as `NoRoute`.
    pub max_length: f64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            max_length: f64::INFINITY,
        }
    }
}
