//! `GraphDraft`: the editor's graph operations, minus the canvas.
//!
//! Node ids are handed out sequentially.  Labels default to the category name
//! followed by a per-category counter (`House1`, `House2`, `Park1`, ...).
//! Connecting two nodes is a two-phase affair, as in the editor: [`connect`]
//! checks the pair and proposes a weight, [`add_edge`] commits it with the
//! weight and road type the user settled on.
//!
//! [`connect`]: GraphDraft::connect
//! [`add_edge`]: GraphDraft::add_edge

use std::collections::HashMap;

use pt_core::{
    CoreError, CostMultipliers, DEFAULT_ROAD_WEIGHT, Edge, EdgeId, Node, NodeCategory, NodeId,
    Point, RoadType,
};

use crate::{Scenario, ScenarioError, ScenarioResult};

/// Mutable graph under construction.
#[derive(Clone, Debug, Default)]
pub struct GraphDraft {
    nodes:           Vec<Node>,
    edges:           Vec<Edge>,
    start:           Option<NodeId>,
    goal:            Option<NodeId>,
    multipliers:     CostMultipliers,
    next_node:       u32,
    next_edge:       u32,
    category_counts: HashMap<NodeCategory, u32>,
}

impl GraphDraft {
    pub fn new() -> Self {
        Self { next_node: 1, next_edge: 1, ..Self::default() }
    }

    /// Continue editing an existing scenario.  New ids start above the
    /// largest ones already present.
    pub fn from_scenario(scenario: Scenario) -> Self {
        let next_node = scenario.nodes.iter().map(|n| n.id.0).max().map_or(1, |m| m + 1);
        let next_edge = scenario.edges.iter().map(|e| e.id.0).max().map_or(1, |m| m + 1);
        Self {
            nodes: scenario.nodes,
            edges: scenario.edges,
            start: scenario.start,
            goal: scenario.goal,
            multipliers: scenario.multipliers,
            next_node,
            next_edge,
            category_counts: HashMap::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.goal
    }

    pub fn multipliers(&self) -> &CostMultipliers {
        &self.multipliers
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// `true` if an edge already joins `a` and `b` in either direction.
    pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Place a new node and return its id.
    pub fn add_node(&mut self, category: NodeCategory, pos: Point) -> NodeId {
        let count = self.category_counts.entry(category).or_insert(0);
        *count += 1;
        let label = format!("{category}{count}");

        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.push(Node::new(id, pos, category, label));
        id
    }

    pub fn move_node(&mut self, id: NodeId, pos: Point) -> ScenarioResult<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(CoreError::NodeNotFound(id))?;
        node.pos = pos;
        Ok(())
    }

    pub fn rename_node(&mut self, id: NodeId, label: impl Into<String>) -> ScenarioResult<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(CoreError::NodeNotFound(id))?;
        node.label = label.into();
        Ok(())
    }

    /// Delete a node together with every edge touching it.  Clears the start
    /// or goal selection if it pointed at this node.
    pub fn remove_node(&mut self, id: NodeId) -> ScenarioResult<Node> {
        let idx = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or(CoreError::NodeNotFound(id))?;
        let node = self.nodes.remove(idx);
        self.edges.retain(|e| !e.touches(id));
        if self.start == Some(id) {
            self.start = None;
        }
        if self.goal == Some(id) {
            self.goal = None;
        }
        Ok(node)
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Default weight for a new edge: the rounded pixel distance between the
    /// endpoints, or [`DEFAULT_ROAD_WEIGHT`] if either is unknown.
    pub fn suggested_weight(&self, a: NodeId, b: NodeId) -> f64 {
        match (self.node(a), self.node(b)) {
            (Some(na), Some(nb)) => na.pos.distance(nb.pos).round(),
            _ => DEFAULT_ROAD_WEIGHT,
        }
    }

    /// Check that `a` and `b` may be joined and return the suggested weight.
    pub fn connect(&self, a: NodeId, b: NodeId) -> ScenarioResult<f64> {
        if a == b {
            return Err(ScenarioError::SelfLoop(a));
        }
        for id in [a, b] {
            if self.node(id).is_none() {
                return Err(CoreError::NodeNotFound(id).into());
            }
        }
        if self.is_connected(a, b) {
            return Err(ScenarioError::DuplicateEdge(a, b));
        }
        Ok(self.suggested_weight(a, b))
    }

    /// Commit a new undirected edge.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64, road: RoadType) -> ScenarioResult<EdgeId> {
        self.connect(a, b)?;
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.push(Edge::new(id, a, b, weight, road));
        Ok(id)
    }

    /// Change the weight and road type of an existing edge.
    pub fn update_edge(&mut self, id: EdgeId, weight: f64, road: RoadType) -> ScenarioResult<()> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CoreError::EdgeNotFound(id))?;
        edge.weight = weight;
        edge.road = road;
        Ok(())
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> ScenarioResult<Edge> {
        let idx = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or(CoreError::EdgeNotFound(id))?;
        Ok(self.edges.remove(idx))
    }

    // ── Selection & settings ──────────────────────────────────────────────

    pub fn set_start(&mut self, id: Option<NodeId>) -> ScenarioResult<()> {
        self.start = self.checked(id)?;
        Ok(())
    }

    pub fn set_goal(&mut self, id: Option<NodeId>) -> ScenarioResult<()> {
        self.goal = self.checked(id)?;
        Ok(())
    }

    /// Set one road type's multiplier.  Rejects non-positive values.
    pub fn set_multiplier(&mut self, road: RoadType, value: f64) -> ScenarioResult<()> {
        let updated = self.multipliers.with(road, value);
        updated.validate()?;
        self.multipliers = updated;
        Ok(())
    }

    fn checked(&self, id: Option<NodeId>) -> ScenarioResult<Option<NodeId>> {
        match id {
            Some(id) if self.node(id).is_none() => Err(CoreError::NodeNotFound(id).into()),
            other => Ok(other),
        }
    }

    /// Snapshot the draft as a scenario document.
    pub fn to_scenario(&self, name: impl Into<String>) -> Scenario {
        Scenario {
            name: name.into(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            start: self.start,
            goal: self.goal,
            multipliers: self.multipliers,
        }
    }
}
