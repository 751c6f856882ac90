//! `pt-search`: the step-trace pathfinding engine.
//!
//! Given a static graph snapshot and a start/goal pair, [`trace_search`]
//! computes a shortest path and records every observable state transition as
//! an immutable [`Step`].  The resulting [`StepSequence`] is fully materialised
//! before it is returned; playback and rendering belong to the caller.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`queue`]     | `FrontierQueue` (stable ties, lazy deletion)              |
//! | [`adjacency`] | `Adjacency`, `Neighbor`: undirected effective-cost lists |
//! | [`heuristic`] | straight-line estimate for informed mode                  |
//! | [`search`]    | `SearchMode`, `SearchRequest`, `trace_search`             |
//! | [`path`]      | `reconstruct_path`                                        |
//! | [`step`]      | `Step`, `StepKind`, `StepSequence`, `Outcome`, `NodeStatus` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on steps and sequences.                  |

pub mod adjacency;
pub mod heuristic;
pub mod path;
pub mod queue;
pub mod search;
pub mod step;

#[cfg(test)]
mod tests;

pub use adjacency::{Adjacency, Neighbor};
pub use heuristic::straight_line;
pub use path::reconstruct_path;
pub use queue::FrontierQueue;
pub use search::{SearchMode, SearchRequest, trace_search};
pub use step::{NodeStatus, Outcome, Step, StepKind, StepSequence};
