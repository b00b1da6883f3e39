//! Moving a path's start point forward along its fixed route.

use super::types::{EdgePoint, Path};

impl Path {
    /// Path whose start lies `distance` further along the same route.
    ///
    /// - `distance <= 0` returns an equal path.
    /// - `distance >= length` collapses to a zero-length path at `end`, keeping
    ///   only the last oriented edge.
    /// - Otherwise fully consumed edges and passed nodes are dropped and
    ///   `length` shrinks by `distance`. Landing exactly on a node moves onto the
    ///   next edge at offset 0 of its traversal.
    ///
    /// `end` is never changed and no graph is consulted.
    pub fn advanced(&self, distance: f64) -> Path {
        if !(distance > 0.0) || self.oriented_edges.is_empty() {
            return self.clone();
        }
        let last = self.oriented_edges.len() - 1;
        if distance >= self.length {
            return Path {
                start: self.end.clone(),
                end: self.end.clone(),
                oriented_edges: vec![self.oriented_edges[last].clone()],
                nodes: Vec::new(),
                length: 0.0,
            };
        }

        let mut remaining = distance;
        for (i, oe) in self.oriented_edges.iter().enumerate() {
            let len = oe.edge.length;
            let entry = if i == 0 {
                self.start.distance
            } else if oe.is_forward {
                0.0
            } else {
                len
            };
            let exit = if i == last {
                self.end.distance
            } else if oe.is_forward {
                len
            } else {
                0.0
            };
            let available = if oe.is_forward {
                exit - entry
            } else {
                entry - exit
            }
            .max(0.0);

            if remaining < available || i == last {
                let at = if oe.is_forward {
                    entry + remaining
                } else {
                    entry - remaining
                };
                return Path {
                    start: EdgePoint {
                        edge_id: oe.edge.id.clone(),
                        distance: at.clamp(0.0, len),
                    },
                    end: self.end.clone(),
                    oriented_edges: self.oriented_edges[i..].to_vec(),
                    nodes: self.nodes.get(i..).map(<[_]>::to_vec).unwrap_or_default(),
                    length: self.length - distance,
                };
            }
            remaining -= available;
        }
        self.clone()
    }
}
