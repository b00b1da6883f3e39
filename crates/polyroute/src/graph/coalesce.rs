//! Chain coalescing: remove pass-through nodes by merging their two edges.
//!
//! Rules
//! - A pass-through node has degree exactly 2 and no self-loop. Every other node
//!   is an anchor and survives.
//! - Anchors are processed in node order; each unconsumed incident edge is walked
//!   outward through pass-through nodes until the next anchor (possibly itself).
//! - Components made only of pass-through nodes are cycles: their first node (in
//!   node order) is promoted to anchor and the cycle becomes one self-loop.
//! - The merged edge takes the id and the direction of the first edge walked.
//!   Output edges are ordered by the original position of that edge.

use crate::geom2::Location;

use super::types::{EdgeInput, Graph};

/// One output edge: a walk from `start` to `end` beginning with `first_edge`.
struct Chain {
    first_edge: usize,
    start: usize,
    end: usize,
    inner: Vec<Location>,
}

impl Graph {
    /// New graph with every pass-through node removed (cycle anchors excepted).
    /// `self` is left untouched.
    pub fn coalesced(&self) -> Graph {
        let n = self.nodes.len();
        let pass: Vec<bool> = (0..n).map(|u| self.is_pass_through(u)).collect();
        let mut consumed = vec![false; self.edges.len()];
        let mut keep: Vec<bool> = pass.iter().map(|&p| !p).collect();
        let mut chains: Vec<Chain> = Vec::with_capacity(self.edges.len());

        for u in (0..n).filter(|&u| !pass[u]) {
            for e in self.incident(u) {
                if !consumed[e] {
                    chains.push(self.walk_chain(u, e, &pass, &mut consumed));
                }
            }
        }
        let mut cycles = 0usize;
        for u in (0..n).filter(|&u| pass[u]) {
            if let Some(e) = self.incident(u).find(|&e| !consumed[e]) {
                keep[u] = true;
                chains.push(self.walk_chain(u, e, &pass, &mut consumed));
                cycles += 1;
            }
        }
        chains.sort_by_key(|c| c.first_edge);

        let nodes = self
            .nodes
            .iter()
            .zip(&keep)
            .filter(|(_, k)| **k)
            .map(|(node, _)| Graph::node_input(node))
            .collect();
        let edges = chains
            .into_iter()
            .map(|c| EdgeInput {
                id: self.edges[c.first_edge].id.clone(),
                start_node_id: self.nodes[c.start].id.clone(),
                end_node_id: self.nodes[c.end].id.clone(),
                inner_locations: c.inner,
            })
            .collect();
        let out = Graph::assemble(nodes, edges);
        tracing::debug!(
            edges_before = self.edges.len(),
            edges_after = out.edges.len(),
            cycles,
            "coalesced"
        );
        out
    }

    fn is_pass_through(&self, u: usize) -> bool {
        self.degree_at(u) == 2 && self.incident(u).all(|e| !self.edges[e].is_self_loop())
    }

    /// Walk from `anchor` along `first` until reaching a non-pass-through node or
    /// `anchor` again, marking every traversed edge consumed.
    fn walk_chain(
        &self,
        anchor: usize,
        first: usize,
        pass: &[bool],
        consumed: &mut [bool],
    ) -> Chain {
        let first_forward = self.ends_of(first).0 == anchor;
        let mut inner: Vec<Location> = Vec::new();
        let mut cur = anchor;
        let mut e = first;
        let end = loop {
            consumed[e] = true;
            let (s, t) = self.ends_of(e);
            let forward = s == cur;
            let locs = &self.edges[e].inner_locations;
            if forward {
                inner.extend(locs.iter().copied());
            } else {
                inner.extend(locs.iter().rev().copied());
            }
            let next = if forward { t } else { s };
            if next == anchor || !pass[next] {
                break next;
            }
            inner.push(self.nodes[next].location);
            let Some(f) = self.incident(next).find(|&f| f != e) else {
                break next;
            };
            cur = next;
            e = f;
        };

        if first_forward {
            Chain {
                first_edge: first,
                start: anchor,
                end,
                inner,
            }
        } else {
            inner.reverse();
            Chain {
                first_edge: first,
                start: end,
                end: anchor,
                inner,
            }
        }
    }
}
