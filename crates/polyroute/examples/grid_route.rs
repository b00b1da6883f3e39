//! Route across a generated street grid.
//!
//! Purpose
//! - Show the end-to-end flow on a realistic network: draw a jittered grid with
//!   subdivided streets, coalesce it, pick the largest component, route between
//!   two points and walk the route forward.
//! - Library debug events (construction, coalescing, routing) are printed by the
//!   fmt subscriber.

use anyhow::{Context, Result};
use polyroute::graph::rand::{draw_edge_points, draw_grid_network, GridCfg, ReplayToken};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = GridCfg {
        cols: 12,
        rows: 9,
        subdivisions: 2,
        ..GridCfg::default()
    };
    let tok = ReplayToken { seed: 2024, index: 0 };
    let raw = draw_grid_network(cfg, tok);
    let graph = raw
        .coalesced()
        .connected_components()
        .into_iter()
        .max_by_key(|c| c.num_edges())
        .context("generated network is empty")?;
    tracing::info!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        raw_edges = raw.num_edges(),
        "largest component"
    );

    let pts = draw_edge_points(&graph, 2, tok);
    let [start, end] = pts.as_slice() else {
        anyhow::bail!("largest component has no edges");
    };
    let path = graph.shortest_path(start, end)?;
    let from = graph.location(&path.start)?;
    let to = graph.location(&path.end)?;
    tracing::info!(
        from = %format!("({:.2}, {:.2})", from.x, from.y),
        to = %format!("({:.2}, {:.2})", to.x, to.y),
        length = path.length,
        crossed = path.nodes.len(),
        "route"
    );

    let step = path.length / 4.0;
    let mut walk = path;
    while walk.length > 0.0 {
        walk = walk.advanced(step);
        let here = graph.location(&walk.start)?;
        tracing::info!(
            edge = %walk.start.edge_id,
            at = %format!("({:.2}, {:.2})", here.x, here.y),
            remaining = walk.length,
            "advanced"
        );
    }
    Ok(())
}
