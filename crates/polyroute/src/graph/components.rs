//! Connected components under undirected reachability.

use std::collections::VecDeque;

use crate::error::Result;

use super::types::{EdgeInput, Graph, Id, NodeInput};

impl Graph {
    /// One graph per connected component, ordered by each component's first node.
    /// Nodes and edges keep their source order; an isolated node is its own component.
    pub fn connected_components(&self) -> Vec<Graph> {
        let n = self.nodes.len();
        let mut label: Vec<Option<usize>> = vec![None; n];
        let mut count = 0usize;
        for seed in 0..n {
            if label[seed].is_none() {
                self.flood(seed, count, &mut label);
                count += 1;
            }
        }
        tracing::debug!(components = count, "connected components");

        let mut buckets: Vec<(Vec<NodeInput>, Vec<EdgeInput>)> =
            (0..count).map(|_| (Vec::new(), Vec::new())).collect();
        for (u, node) in self.nodes.iter().enumerate() {
            if let Some(c) = label[u] {
                buckets[c].0.push(Graph::node_input(node));
            }
        }
        for (e, edge) in self.edges.iter().enumerate() {
            if let Some(c) = label[self.ends_of(e).0] {
                buckets[c].1.push(Graph::edge_input(edge));
            }
        }
        buckets
            .into_iter()
            .map(|(nodes, edges)| Graph::assemble(nodes, edges))
            .collect()
    }

    /// The component containing node `id`, found with a single traversal.
    pub fn connected_component_of_node(&self, id: &Id) -> Result<Graph> {
        let seed = self.node_idx(id)?;
        let mut label: Vec<Option<usize>> = vec![None; self.nodes.len()];
        self.flood(seed, 0, &mut label);
        Ok(self.subgraph(|u| label[u].is_some()))
    }

    /// Breadth-first search from `seed`, writing `tag` into every reached slot.
    fn flood(&self, seed: usize, tag: usize, label: &mut [Option<usize>]) {
        let mut queue = VecDeque::from([seed]);
        label[seed] = Some(tag);
        while let Some(u) = queue.pop_front() {
            for v in self.adjacent(u) {
                if label[v].is_none() {
                    label[v] = Some(tag);
                    queue.push_back(v);
                }
            }
        }
    }

    /// Nodes selected by `keep` and every edge whose start node is selected. Only
    /// valid for a closed node set (one component), where both endpoints agree.
    fn subgraph(&self, keep: impl Fn(usize) -> bool) -> Graph {
        let nodes = (0..self.nodes.len())
            .filter(|&u| keep(u))
            .map(|u| Graph::node_input(&self.nodes[u]))
            .collect();
        let edges = (0..self.edges.len())
            .filter(|&e| keep(self.ends_of(e).0))
            .map(|e| Graph::edge_input(&self.edges[e]))
            .collect();
        Graph::assemble(nodes, edges)
    }
}
