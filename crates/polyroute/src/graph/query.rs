//! Identity and adjacency queries.

use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::geom2::{edge_polyline, point_at_distance, Location};

use super::types::{Edge, EdgePoint, Graph, Id, Node};

impl Graph {
    /// All nodes in insertion order.
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &Id) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn edge(&self, id: &Id) -> Option<&Edge> {
        self.edge_index.get(id).map(|&i| &self.edges[i])
    }

    /// Edges incident to a node, in the node's `edge_ids` order.
    pub fn edges_of_node(&self, id: &Id) -> Result<Vec<&Edge>> {
        let node = &self.nodes[self.node_idx(id)?];
        Ok(node
            .edge_ids
            .iter()
            .map(|eid| &self.edges[self.edge_index[eid]])
            .collect())
    }

    /// `(start, end)` nodes of an edge.
    pub fn endpoints_of_edge(&self, id: &Id) -> Result<(&Node, &Node)> {
        let e = &self.edges[self.edge_idx(id)?];
        Ok((
            &self.nodes[self.node_index[&e.start_node_id]],
            &self.nodes[self.node_index[&e.end_node_id]],
        ))
    }

    /// The endpoint of `edge_id` opposite to `node_id`. A self-loop returns its own node.
    pub fn other_endpoint(&self, edge_id: &Id, node_id: &Id) -> Result<&Node> {
        let e = &self.edges[self.edge_idx(edge_id)?];
        let other = if &e.start_node_id == node_id {
            &e.end_node_id
        } else if &e.end_node_id == node_id {
            &e.start_node_id
        } else {
            return Err(GraphError::InvalidEndpoint {
                edge: edge_id.clone(),
                node: node_id.clone(),
            });
        };
        Ok(&self.nodes[self.node_index[other]])
    }

    /// Distinct nodes one edge away, in first-encounter order. A node with a
    /// self-loop is its own neighbour.
    pub fn neighbors(&self, id: &Id) -> Result<Vec<&Node>> {
        let u = self.node_idx(id)?;
        let mut seen: HashSet<usize> = HashSet::new();
        Ok(self
            .adjacent(u)
            .filter(|&v| seen.insert(v))
            .map(|v| &self.nodes[v])
            .collect())
    }

    /// Graph-theoretic degree: a self-loop counts twice.
    pub fn degree(&self, id: &Id) -> Result<usize> {
        Ok(self.degree_at(self.node_idx(id)?))
    }

    /// Location of an edge point; the distance is clamped to `[0, edge.length]`.
    pub fn location(&self, point: &EdgePoint) -> Result<Location> {
        let e = &self.edges[self.edge_idx(&point.edge_id)?];
        let pts = edge_polyline(
            self.nodes[self.node_index[&e.start_node_id]].location,
            &e.inner_locations,
            self.nodes[self.node_index[&e.end_node_id]].location,
        );
        Ok(point_at_distance(&pts, e.length, point.distance))
    }

    // ---- index-level helpers shared by the transformations ----

    pub(crate) fn node_idx(&self, id: &Id) -> Result<usize> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    pub(crate) fn edge_idx(&self, id: &Id) -> Result<usize> {
        self.edge_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::edge_not_found(id))
    }

    /// Node indices of an edge: `(start, end)`.
    pub(crate) fn ends_of(&self, edge: usize) -> (usize, usize) {
        let e = &self.edges[edge];
        (
            self.node_index[&e.start_node_id],
            self.node_index[&e.end_node_id],
        )
    }

    /// Edge indices incident to node `u`.
    pub(crate) fn incident(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes[u]
            .edge_ids
            .iter()
            .map(move |eid| self.edge_index[eid])
    }

    /// Node indices across each incident edge of `u` (with repeats).
    pub(crate) fn adjacent(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident(u).map(move |e| {
            let (s, t) = self.ends_of(e);
            if s == u {
                t
            } else {
                s
            }
        })
    }

    pub(crate) fn degree_at(&self, u: usize) -> usize {
        self.incident(u)
            .map(|e| if self.edges[e].is_self_loop() { 2 } else { 1 })
            .sum()
    }
}
