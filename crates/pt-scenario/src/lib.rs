//! `pt-scenario`: graph inputs for the step-trace engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`scenario`] | `Scenario`, JSON load/save                                  |
//! | [`presets`]  | built-in `city-grid` and `complex` scenarios                |
//! | [`editor`]   | `GraphDraft`: editor graph operations without the UI       |
//! | [`generate`] | `GeneratorConfig`, `random_scenario` (seeded, k-nearest)    |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                        |
//!
//! # JSON format
//!
//! ```json
//! {
//!   "name": "two-stops",
//!   "nodes": [
//!     { "id": 1, "x": 0.0,  "y": 0.0, "category": "House", "label": "Start" },
//!     { "id": 2, "x": 10.0, "y": 0.0, "category": "Hotel", "label": "End" }
//!   ],
//!   "edges": [
//!     { "id": 1, "source": 1, "target": 2, "weight": 10.0, "road": "City" }
//!   ],
//!   "start": 1,
//!   "goal": 2,
//!   "multipliers": { "Highway": 1.0, "City": 1.5, "Dirt": 2.5 }
//! }
//! ```
//!
//! `start`, `goal`, `multipliers`, `category`, `label`, and `road` are
//! optional.

pub mod editor;
pub mod error;
pub mod generate;
pub mod presets;
pub mod scenario;


pub use editor::GraphDraft;
pub use error::{ScenarioError, ScenarioResult};
pub use generate::{GeneratorConfig, random_scenario};
pub use presets::{preset, preset_names};
pub use scenario::{Scenario, load_scenario_json, load_scenario_reader, save_scenario_json, write_scenario};
