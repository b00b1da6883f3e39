//! Random road-like networks (jittered grids + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic source of realistic graphs for property tests,
//!   benches and demos: mostly-connected, with bent polylines, chains of
//!   pass-through nodes, and the occasional isolated piece.
//!
//! Model
//! - Lay out `cols × rows` junctions on a square lattice, jitter each one, and join
//!   lattice neighbours. Each link is dropped with probability `drop_frac`.
//! - Every kept link is split into `subdivisions + 1` edges by inserting degree-2
//!   nodes; every edge gets one bent inner vertex when `jitter > 0`.
//! - Junction ids are `0..cols*rows` (row-major); subdivision node ids and edge ids
//!   are allocated sequentially after them.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Location;

use super::types::{EdgeInput, EdgePoint, Graph, Id, NodeInput};

/// Jittered-grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub cols: usize,
    pub rows: usize,
    /// Lattice spacing between junctions.
    pub spacing: f64,
    /// Jitter amplitude as a fraction of `spacing`. Clamped to [0, 0.45].
    pub jitter: f64,
    /// Probability of dropping each lattice link. Clamped to [0, 1].
    pub drop_frac: f64,
    /// Pass-through nodes inserted along every kept link.
    pub subdivisions: usize,
}
impl Default for GridCfg {
    fn default() -> Self {
        Self {
            cols: 8,
            rows: 8,
            spacing: 10.0,
            jitter: 0.2,
            drop_frac: 0.15,
            subdivisions: 1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random jittered-grid network.
pub fn draw_grid_network(cfg: GridCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let (nodes, edges) = grid_inputs(cfg, &mut rng);
    Graph::assemble(nodes, edges)
}

/// Draw `count` edge points spread uniformly over the edges of `graph`
/// (uniform edge choice, then uniform offset along it). Empty for an edgeless graph.
pub fn draw_edge_points(graph: &Graph, count: usize, tok: ReplayToken) -> Vec<EdgePoint> {
    let edges = graph.all_edges();
    if edges.is_empty() {
        return Vec::new();
    }
    let mut rng = tok.to_std_rng();
    (0..count)
        .map(|_| {
            let e = &edges[rng.gen_range(0..edges.len())];
            EdgePoint {
                edge_id: e.id.clone(),
                distance: rng.gen::<f64>() * e.length,
            }
        })
        .collect()
}

fn grid_inputs<R: Rng>(cfg: GridCfg, rng: &mut R) -> (Vec<NodeInput>, Vec<EdgeInput>) {
    let cols = cfg.cols.max(1);
    let rows = cfg.rows.max(1);
    let h = cfg.spacing.abs().max(1e-9);
    let amp = cfg.jitter.clamp(0.0, 0.45) * h;
    let drop = cfg.drop_frac.clamp(0.0, 1.0);

    let mut nodes: Vec<NodeInput> = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            let x = c as f64 * h + shake(rng, amp);
            let y = r as f64 * h + shake(rng, amp);
            nodes.push(NodeInput {
                id: Id::Int((r * cols + c) as i64),
                location: Location::new(x, y),
            });
        }
    }

    let mut links: Vec<(usize, usize)> = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let u = r * cols + c;
            if c + 1 < cols {
                links.push((u, u + 1));
            }
            if r + 1 < rows {
                links.push((u, u + cols));
            }
        }
    }

    let mut next_node = (cols * rows) as i64;
    let mut next_edge = 0i64;
    let mut edges: Vec<EdgeInput> = Vec::new();
    for (a, b) in links {
        if rng.gen::<f64>() < drop {
            continue;
        }
        let pa = nodes[a].location;
        let pb = nodes[b].location;
        let pieces = cfg.subdivisions + 1;
        let mut prev_id = nodes[a].id.clone();
        let mut prev_loc = pa;
        for k in 1..=pieces {
            let (id, here) = if k == pieces {
                (nodes[b].id.clone(), pb)
            } else {
                let f = k as f64 / pieces as f64;
                let id = Id::Int(next_node);
                next_node += 1;
                let p = pa + (pb - pa) * f;
                nodes.push(NodeInput {
                    id: id.clone(),
                    location: p,
                });
                (id, p)
            };
            let mut inner = Vec::new();
            if amp > 0.0 {
                let mid = (prev_loc + here) * 0.5;
                let dx = shake(rng, amp) * 0.5;
                let dy = shake(rng, amp) * 0.5;
                inner.push(Location::new(mid.x + dx, mid.y + dy));
            }
            edges.push(EdgeInput {
                id: Id::Int(next_edge),
                start_node_id: prev_id,
                end_node_id: id.clone(),
                inner_locations: inner,
            });
            next_edge += 1;
            prev_id = id;
            prev_loc = here;
        }
    }
    (nodes, edges)
}

/// Uniform offset in `[-amp, amp)`.
#[inline]
fn shake<R: Rng>(rng: &mut R, amp: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * amp
}
