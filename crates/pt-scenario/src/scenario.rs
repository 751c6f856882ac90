//! Scenario documents: a graph, an optional start/goal selection, and the
//! multiplier table to run it with.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use pt_core::{CostMultipliers, Edge, Node, NodeId};

use crate::{ScenarioError, ScenarioResult};

/// A complete search input as the editor would hand it over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<NodeId>,
    #[serde(default)]
    pub multipliers: CostMultipliers,
}

impl Scenario {
    pub fn new(name: impl Into<String>, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            name: name.into(),
            nodes,
            edges,
            start: None,
            goal: None,
            multipliers: CostMultipliers::default(),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First node whose label matches `label` exactly.
    pub fn find_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// The selected start and goal, or an error naming the missing one.
    pub fn endpoints(&self) -> ScenarioResult<(NodeId, NodeId)> {
        let start = self.start.ok_or(ScenarioError::MissingEndpoint("start"))?;
        let goal = self.goal.ok_or(ScenarioError::MissingEndpoint("goal"))?;
        Ok((start, goal))
    }

    /// Configuration checks applied on load.
    ///
    /// Only the multiplier table is checked; graph shape is left alone since
    /// the engine tolerates dangling edges and absent ids.
    pub fn validate(&self) -> ScenarioResult<()> {
        self.multipliers.validate()?;
        Ok(())
    }
}

// ── JSON I/O ──────────────────────────────────────────────────────────────────

/// Load and validate a scenario from a JSON file.
pub fn load_scenario_json(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    let scenario = load_scenario_reader(std::io::BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        nodes = scenario.nodes.len(),
        edges = scenario.edges.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Like [`load_scenario_json`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R) -> ScenarioResult<Scenario> {
    let scenario: Scenario = serde_json::from_reader(reader)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Write `scenario` as pretty-printed JSON to `path`.
pub fn save_scenario_json(scenario: &Scenario, path: &Path) -> ScenarioResult<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_scenario(scenario, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `scenario` as pretty-printed JSON to any sink.
pub fn write_scenario<W: Write>(scenario: &Scenario, writer: W) -> ScenarioResult<()> {
    serde_json::to_writer_pretty(writer, scenario)?;
    Ok(())
}
