//! Graph construction: eager validation, then assembly of registries and adjacency.

use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, IdKind, Result};
use crate::geom2::{edge_polyline, polyline_length};

use super::types::{Edge, EdgeInput, Graph, Node, NodeInput};

impl Graph {
    /// Build a graph from node and edge descriptors.
    ///
    /// Fails on the first duplicate node id, edge referencing a missing node, or
    /// duplicate edge id, in input order. Nothing is built unless all input is valid.
    pub fn create(nodes: Vec<NodeInput>, edges: Vec<EdgeInput>) -> Result<Self> {
        validate(&nodes, &edges)?;
        let graph = Self::assemble(nodes, edges);
        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "graph created"
        );
        Ok(graph)
    }

    /// Assemble registries from descriptors already known to be consistent
    /// (unique ids, every endpoint present).
    ///
    /// Each edge id is appended to its start node's and its end node's `edge_ids`;
    /// a self-loop is recorded once.
    pub(crate) fn assemble(nodes: Vec<NodeInput>, edges: Vec<EdgeInput>) -> Self {
        let mut node_index = HashMap::with_capacity(nodes.len());
        let mut out_nodes: Vec<Node> = Vec::with_capacity(nodes.len());
        for (i, n) in nodes.into_iter().enumerate() {
            node_index.insert(n.id.clone(), i);
            out_nodes.push(Node {
                id: n.id,
                location: n.location,
                edge_ids: Vec::new(),
            });
        }

        let mut edge_index = HashMap::with_capacity(edges.len());
        let mut out_edges: Vec<Edge> = Vec::with_capacity(edges.len());
        for (i, e) in edges.into_iter().enumerate() {
            let s = node_index[&e.start_node_id];
            let t = node_index[&e.end_node_id];
            let pts = edge_polyline(
                out_nodes[s].location,
                &e.inner_locations,
                out_nodes[t].location,
            );
            let length = polyline_length(&pts);
            out_nodes[s].edge_ids.push(e.id.clone());
            if t != s {
                out_nodes[t].edge_ids.push(e.id.clone());
            }
            edge_index.insert(e.id.clone(), i);
            out_edges.push(Edge {
                id: e.id,
                start_node_id: e.start_node_id,
                end_node_id: e.end_node_id,
                inner_locations: e.inner_locations,
                length,
            });
        }

        Self {
            nodes: out_nodes,
            edges: out_edges,
            node_index,
            edge_index,
        }
    }

    /// Descriptors reproducing this graph's nodes (`edge_ids` are derived on assembly).
    pub(crate) fn node_input(node: &Node) -> NodeInput {
        NodeInput {
            id: node.id.clone(),
            location: node.location,
        }
    }

    pub(crate) fn edge_input(edge: &Edge) -> EdgeInput {
        EdgeInput {
            id: edge.id.clone(),
            start_node_id: edge.start_node_id.clone(),
            end_node_id: edge.end_node_id.clone(),
            inner_locations: edge.inner_locations.clone(),
        }
    }
}

fn validate(nodes: &[NodeInput], edges: &[EdgeInput]) -> Result<()> {
    let mut node_ids = HashSet::with_capacity(nodes.len());
    for n in nodes {
        if !node_ids.insert(&n.id) {
            return Err(GraphError::DuplicateId {
                kind: IdKind::Node,
                id: n.id.clone(),
            });
        }
    }
    let mut edge_ids = HashSet::with_capacity(edges.len());
    for e in edges {
        for endpoint in [&e.start_node_id, &e.end_node_id] {
            if !node_ids.contains(endpoint) {
                return Err(GraphError::DanglingReference {
                    edge: e.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
        if !edge_ids.insert(&e.id) {
            return Err(GraphError::DuplicateId {
                kind: IdKind::Edge,
                id: e.id.clone(),
            });
        }
    }
    Ok(())
}
