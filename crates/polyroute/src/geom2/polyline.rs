//! Polyline arc length and interpolation.

use super::types::{Location, Segment2};

/// Full polyline of an edge: `[start, inner.., end]`.
pub fn edge_polyline(start: Location, inner: &[Location], end: Location) -> Vec<Location> {
    let mut pts = Vec::with_capacity(inner.len() + 2);
    pts.push(start);
    pts.extend_from_slice(inner);
    pts.push(end);
    pts
}

/// Sum of Euclidean distances between consecutive points. Empty or single-point
/// input has length 0.
pub fn polyline_length(points: &[Location]) -> f64 {
    points
        .windows(2)
        .map(|w| Segment2::new(w[0], w[1]).length())
        .sum()
}

/// Point `distance` arc-length units along `points`, where `total` is the
/// precomputed `polyline_length(points)`.
///
/// - `distance <= 0` (or NaN) returns the first point and `distance >= total` the
///   last point, both as the literal stored values.
/// - The remaining distance is reduced by a segment only when it covers the whole
///   segment, so it stays non-negative and zero-length segments are skipped.
/// - If float drift carries the walk past the final segment, the last point is
///   returned.
///
/// Panics if `points` is empty.
pub fn point_at_distance(points: &[Location], total: f64, distance: f64) -> Location {
    let first = points[0];
    let last = points[points.len() - 1];
    let distance = clamp_distance(distance, total);
    if distance <= 0.0 {
        return first;
    }
    if distance >= total {
        return last;
    }
    let mut remaining = distance;
    for w in points.windows(2) {
        let seg = Segment2::new(w[0], w[1]);
        let seg_len = seg.length();
        if remaining < seg_len {
            return seg.lerp(remaining / seg_len);
        }
        remaining -= seg_len;
    }
    last
}

/// Clamp `distance` into `[0, total]`; NaN maps to 0.
#[inline]
pub fn clamp_distance(distance: f64, total: f64) -> f64 {
    if distance > 0.0 {
        distance.min(total)
    } else {
        0.0
    }
}
