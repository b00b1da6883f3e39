//! Shortest paths between edge points.
//!
//! Model
//! - The start point acts as a virtual node joined to both endpoints of its edge
//!   by the partial distances to them; likewise the end point.
//! - Dijkstra runs over real nodes from those two seeds and stops once both
//!   endpoints of the end edge are settled.
//! - When both points lie on the same edge, the direct partial segment is a
//!   candidate too; a detour only wins if it is strictly shorter.
//!
//! Determinism
//! - Heap entries are `(distance, node index)`, so equal distances settle in node
//!   order; relaxation is strict. Exit ties prefer the direct segment, then
//!   entering the end edge at its start node, then at its end node.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::error::{GraphError, Result};
use crate::geom2::clamp_distance;

use super::types::{EdgePoint, Graph, OrientedEdge, Path, SearchCfg};

/// How a node was first reached on its best route.
#[derive(Clone, Copy, Debug)]
enum Step {
    /// Straight from the start point along the start edge.
    Seed { forward: bool },
    /// From node `from` over the full edge `edge`.
    Via {
        from: usize,
        edge: usize,
        forward: bool,
    },
}

/// How the route reaches the end point.
#[derive(Clone, Copy, Debug)]
enum Exit {
    /// Along the shared edge without leaving it.
    Direct { forward: bool },
    /// From real node `node` onto the end edge.
    Node { node: usize, forward: bool },
}

/// Distances and predecessor steps from the start point.
struct Search {
    dist: Vec<f64>,
    prev: Vec<Option<Step>>,
    settled: usize,
}

impl Graph {
    /// Shortest path with default search settings (unbounded radius).
    pub fn shortest_path(&self, start: &EdgePoint, end: &EdgePoint) -> Result<Path> {
        self.shortest_path_with(start, end, SearchCfg::default())
    }

    /// Minimum arc-length route from `start` to `end`.
    ///
    /// Distances are clamped to their edges; the returned path carries the clamped
    /// points. Fails with `NotFound` for an unknown edge and `NoRoute` when `end`
    /// is unreachable within `cfg.max_length`.
    pub fn shortest_path_with(
        &self,
        start: &EdgePoint,
        end: &EdgePoint,
        cfg: SearchCfg,
    ) -> Result<Path> {
        let se = self.edge_idx(&start.edge_id)?;
        let ee = self.edge_idx(&end.edge_id)?;
        let sd = clamp_distance(start.distance, self.edges[se].length);
        let ed = clamp_distance(end.distance, self.edges[ee].length);

        let search = self.search_from(se, sd, ee, cfg.max_length);

        let mut best: Option<(f64, Exit)> = None;
        let mut consider = |len: f64, exit: Exit| {
            if len.is_finite() && len <= cfg.max_length && best.map_or(true, |(b, _)| len < b) {
                best = Some((len, exit));
            }
        };
        if se == ee {
            consider((ed - sd).abs(), Exit::Direct { forward: ed >= sd });
        }
        let (es, et) = self.ends_of(ee);
        consider(
            search.dist[es] + ed,
            Exit::Node {
                node: es,
                forward: true,
            },
        );
        consider(
            search.dist[et] + (self.edges[ee].length - ed),
            Exit::Node {
                node: et,
                forward: false,
            },
        );

        let no_route = || GraphError::NoRoute {
            from: start.edge_id.clone(),
            to: end.edge_id.clone(),
        };
        let Some((length, exit)) = best else {
            tracing::debug!(settled = search.settled, "no route");
            return Err(no_route());
        };

        let (oriented_edges, crossed) = match exit {
            Exit::Direct { forward } => (
                vec![OrientedEdge {
                    edge: self.edges[se].clone(),
                    is_forward: forward,
                }],
                Vec::new(),
            ),
            Exit::Node { node, forward } => {
                let (seed_forward, full, crossed) =
                    self.unwind(&search.prev, node).ok_or_else(no_route)?;
                let mut oriented = Vec::with_capacity(full.len() + 2);
                oriented.push(OrientedEdge {
                    edge: self.edges[se].clone(),
                    is_forward: seed_forward,
                });
                oriented.extend(full);
                oriented.push(OrientedEdge {
                    edge: self.edges[ee].clone(),
                    is_forward: forward,
                });
                (oriented, crossed)
            }
        };
        tracing::debug!(
            settled = search.settled,
            length,
            edges = oriented_edges.len(),
            "shortest path"
        );

        Ok(Path {
            start: EdgePoint {
                edge_id: start.edge_id.clone(),
                distance: sd,
            },
            end: EdgePoint {
                edge_id: end.edge_id.clone(),
                distance: ed,
            },
            oriented_edges,
            nodes: crossed.into_iter().map(|u| self.nodes[u].clone()).collect(),
            length,
        })
    }

    /// Dijkstra from the point `sd` along edge `se`, stopping once both endpoints
    /// of `ee` are settled or the frontier passes `max_length`.
    fn search_from(&self, se: usize, sd: f64, ee: usize, max_length: f64) -> Search {
        let n = self.nodes.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<Step>> = vec![None; n];
        let mut done = vec![false; n];
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();

        let (s, t) = self.ends_of(se);
        let seeds = [
            (t, self.edges[se].length - sd, true),
            (s, sd, false),
        ];
        for (v, d, forward) in seeds {
            if d <= max_length && d < dist[v] {
                dist[v] = d;
                prev[v] = Some(Step::Seed { forward });
                heap.push(Reverse((OrderedFloat(d), v)));
            }
        }

        let (es, et) = self.ends_of(ee);
        let mut targets_left = if es == et { 1 } else { 2 };
        let mut settled = 0usize;
        while let Some(Reverse((OrderedFloat(d), u))) = heap.pop() {
            if done[u] {
                continue;
            }
            done[u] = true;
            settled += 1;
            if u == es || u == et {
                targets_left -= 1;
                if targets_left == 0 {
                    break;
                }
            }
            for e in self.incident(u) {
                let edge = &self.edges[e];
                if edge.is_self_loop() {
                    continue;
                }
                let (a, b) = self.ends_of(e);
                let (v, forward) = if a == u { (b, true) } else { (a, false) };
                let nd = d + edge.length;
                if nd <= max_length && nd < dist[v] {
                    dist[v] = nd;
                    prev[v] = Some(Step::Via {
                        from: u,
                        edge: e,
                        forward,
                    });
                    heap.push(Reverse((OrderedFloat(nd), v)));
                }
            }
        }

        Search {
            dist,
            prev,
            settled,
        }
    }

    /// Follow predecessor steps from `last` back to a seed. Returns the seed
    /// direction on the start edge, the full edges in travel order, and the nodes
    /// crossed in travel order.
    fn unwind(
        &self,
        prev: &[Option<Step>],
        last: usize,
    ) -> Option<(bool, Vec<OrientedEdge>, Vec<usize>)> {
        let mut full = Vec::new();
        let mut crossed = vec![last];
        let mut cur = last;
        let seed_forward = loop {
            match prev[cur]? {
                Step::Seed { forward } => break forward,
                Step::Via {
                    from,
                    edge,
                    forward,
                } => {
                    full.push(OrientedEdge {
                        edge: self.edges[edge].clone(),
                        is_forward: forward,
                    });
                    crossed.push(from);
                    cur = from;
                }
            }
        };
        full.reverse();
        crossed.reverse();
        Some((seed_forward, full, crossed))
    }
}

