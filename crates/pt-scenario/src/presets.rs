//! Built-in demonstration scenarios.
//!
//! | Name        | Shape                                                        |
//! |-------------|--------------------------------------------------------------|
//! | `city-grid` | 3 × 3 grid of City roads, 200 px apart, corner to corner     |
//! | `complex`   | short Dirt route through the middle versus longer Highway    |
//! |             | (top) and City (bottom) detours                              |
//!
//! The `complex` weights are the rounded pixel lengths, so a few of them sit
//! a fraction of a pixel under the straight-line distance.

use pt_core::{CostMultipliers, Edge, EdgeId, Node, NodeCategory, NodeId, Point, RoadType};

use crate::{Scenario, ScenarioError, ScenarioResult};

const PRESETS: [&str; 2] = ["city-grid", "complex"];

/// Names accepted by [`preset`].
pub fn preset_names() -> &'static [&'static str] {
    &PRESETS
}

/// Build the named preset.
pub fn preset(name: &str) -> ScenarioResult<Scenario> {
    match name {
        "city-grid" => Ok(city_grid()),
        "complex" => Ok(complex()),
        other => Err(ScenarioError::UnknownPreset(other.to_owned())),
    }
}

fn node(id: u32, x: f64, y: f64, category: NodeCategory, label: &str) -> Node {
    Node::new(NodeId(id), Point::new(x, y), category, label)
}

fn road(id: u32, a: u32, b: u32, weight: f64, road: RoadType) -> Edge {
    Edge::new(EdgeId(id), NodeId(a), NodeId(b), weight, road)
}

fn city_grid() -> Scenario {
    use NodeCategory::*;

    let nodes = vec![
        node(1, 200.0, 200.0, House, "Start"),
        node(2, 400.0, 200.0, School, "S1"),
        node(3, 600.0, 200.0, Shop, "Sh1"),
        node(4, 200.0, 400.0, Park, "P1"),
        node(5, 400.0, 400.0, Police, "Pol1"),
        node(6, 600.0, 400.0, House, "H2"),
        node(7, 200.0, 600.0, Factory, "F1"),
        node(8, 400.0, 600.0, Hotel, "Hot1"),
        node(9, 600.0, 600.0, Hospital, "End"),
    ];
    let pairs = [
        (1, 2), (2, 3), (1, 4), (2, 5), (3, 6), (4, 5),
        (5, 6), (4, 7), (5, 8), (6, 9), (7, 8), (8, 9),
    ];
    let edges = pairs
        .iter()
        .zip(1..)
        .map(|(&(a, b), id)| road(id, a, b, 200.0, RoadType::City))
        .collect();

    Scenario {
        name: "city-grid".to_owned(),
        nodes,
        edges,
        start: Some(NodeId(1)),
        goal: Some(NodeId(9)),
        multipliers: CostMultipliers::default(),
    }
}

fn complex() -> Scenario {
    use NodeCategory::*;
    use RoadType::*;

    let nodes = vec![
        node(1, 100.0, 400.0, House, "Start"),
        node(2, 400.0, 400.0, Park, "Mud"),
        node(3, 400.0, 150.0, Airport, "Fly"),
        node(4, 400.0, 650.0, Factory, "Ind"),
        node(5, 800.0, 400.0, Hotel, "End"),
        node(6, 250.0, 250.0, Shop, "Stop1"),
        node(7, 650.0, 250.0, Shop, "Stop2"),
        node(8, 250.0, 550.0, FireStation, "Fire"),
        node(9, 650.0, 550.0, Hospital, "Hosp"),
    ];
    let edges = vec![
        // Direct: short, but Dirt.
        road(1, 1, 2, 300.0, Dirt),
        road(2, 2, 5, 400.0, Dirt),
        // Top: longer, Highway.
        road(3, 1, 6, 212.0, Highway),
        road(4, 6, 3, 180.0, Highway),
        road(5, 3, 7, 269.0, Highway),
        road(6, 7, 5, 212.0, Highway),
        // Bottom: City.
        road(7, 1, 8, 212.0, City),
        road(8, 8, 4, 180.0, City),
        road(9, 4, 9, 269.0, City),
        road(10, 9, 5, 212.0, City),
        // Cross links into the mud.
        road(11, 6, 2, 212.0, Dirt),
        road(12, 8, 2, 212.0, Dirt),
    ];

    Scenario {
        name: "complex".to_owned(),
        nodes,
        edges,
        start: Some(NodeId(1)),
        goal: Some(NodeId(5)),
        multipliers: CostMultipliers::default(),
    }
}
