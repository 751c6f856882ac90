//! `pt-core`: foundational types for the `pathtrace` step-trace engine.
//!
//! This crate is a dependency of every other `pt-*` crate.  It has no `pt-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `NodeId`, `EdgeId`                                    |
//! | [`geo`]       | `Point` (canvas pixels), Euclidean distance           |
//! | [`graph`]     | `Node`, `Edge`, `NodeCategory`                        |
//! | [`road`]      | `RoadType`, `CostMultipliers`, `DEFAULT_ROAD_WEIGHT`  |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod graph;
pub mod ids;
pub mod road;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use graph::{Edge, Node, NodeCategory};
pub use ids::{EdgeId, NodeId};
pub use road::{CostMultipliers, DEFAULT_ROAD_WEIGHT, RoadType};
