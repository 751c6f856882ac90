//! Straight-line estimate used by informed search.
//!
//! The estimate is admissible only when every edge's base weight is at least
//! the pixel distance between its endpoints.  The editor defaults weights to
//! that distance, and multipliers ≥ 1 only raise true costs, but nothing here
//! checks the precondition: a smaller hand-entered weight can make informed
//! search return a suboptimal path.

use pt_core::Point;

/// Euclidean distance between `from` and `goal`, or `0.0` if either
/// position is unknown.
#[inline]
pub fn straight_line(from: Option<Point>, goal: Option<Point>) -> f64 {
    match (from, goal) {
        (Some(a), Some(b)) => a.distance(b),
        _ => 0.0,
    }
}
