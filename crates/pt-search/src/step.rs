//! Snapshot records emitted by the search loop.
//!
//! A [`Step`] is a plain value: every collection in it is an owned copy taken
//! at the moment of emission, so later engine mutations can never reach back
//! into an earlier snapshot.  A [`StepSequence`] is the complete, ordered
//! record of one run.

use std::collections::BTreeMap;

use pt_core::NodeId;

// ── StepKind ──────────────────────────────────────────────────────────────────

/// Which state transition a snapshot records.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Ready state, before the first dequeue.
    Initial,
    /// A candidate was dequeued; it is not yet settled.
    Visiting,
    /// The candidate's neighbours have been relaxed.
    Relaxed,
    /// Terminal: the goal was settled.
    Found,
    /// Terminal: the frontier ran dry without reaching the goal.
    Exhausted,
}

impl StepKind {
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Found | StepKind::Exhausted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Initial   => "initial",
            StepKind::Visiting  => "visiting",
            StepKind::Relaxed   => "relaxed",
            StepKind::Found     => "found",
            StepKind::Exhausted => "exhausted",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NodeStatus ────────────────────────────────────────────────────────────────

/// How a node should be drawn for a given step.
///
/// When several apply, the first in declaration order wins.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeStatus {
    Path,
    Current,
    Visited,
    Frontier,
    Unvisited,
}

impl NodeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Path      => "path",
            NodeStatus::Current   => "current",
            NodeStatus::Visited   => "visited",
            NodeStatus::Frontier  => "frontier",
            NodeStatus::Unvisited => "unvisited",
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// One observable moment of a search run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    pub kind: StepKind,
    /// Settled nodes, in the order they were settled.
    pub visited: Vec<NodeId>,
    /// Best known cost from the start; `f64::INFINITY` when unreached.
    pub distances: BTreeMap<NodeId, f64>,
    pub previous: BTreeMap<NodeId, Option<NodeId>>,
    pub current: Option<NodeId>,
    /// Queue contents in dequeue order, stale entries included.
    pub frontier: Vec<NodeId>,
    /// Set only on the terminal step; empty when the goal is unreachable.
    pub path: Option<Vec<NodeId>>,
}

impl Step {
    /// Best known cost to `node` at this step.
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distances.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.previous.get(&node).copied().flatten()
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    pub fn in_frontier(&self, node: NodeId) -> bool {
        self.frontier.contains(&node)
    }

    pub fn on_path(&self, node: NodeId) -> bool {
        self.path.as_ref().is_some_and(|p| p.contains(&node))
    }

    /// `true` if `a` and `b` are consecutive on the final path, in either
    /// order.  Always `false` before the terminal step.
    pub fn edge_on_path(&self, a: NodeId, b: NodeId) -> bool {
        self.path.as_ref().is_some_and(|p| {
            p.windows(2)
                .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
        })
    }

    /// Display classification of `node` at this step.
    pub fn status_of(&self, node: NodeId) -> NodeStatus {
        if self.on_path(node) {
            NodeStatus::Path
        } else if self.current == Some(node) {
            NodeStatus::Current
        } else if self.is_visited(node) {
            NodeStatus::Visited
        } else if self.in_frontier(node) {
            NodeStatus::Frontier
        } else {
            NodeStatus::Unvisited
        }
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Final result of a run, read from its terminal step.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Found { path: Vec<NodeId>, cost: f64 },
    Unreachable,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    /// Path cost, `f64::INFINITY` when unreachable.
    pub fn cost(&self) -> f64 {
        match self {
            Outcome::Found { cost, .. } => *cost,
            Outcome::Unreachable => f64::INFINITY,
        }
    }
}

// ── StepSequence ──────────────────────────────────────────────────────────────

/// The ordered steps of one run.  Always ends with a terminal step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The terminal step.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Final path, or an empty slice when the goal was not reached.
    pub fn path(&self) -> &[NodeId] {
        self.last()
            .and_then(|s| s.path.as_deref())
            .unwrap_or(&[])
    }

    pub fn outcome(&self) -> Outcome {
        match self.last() {
            Some(step) if step.kind == StepKind::Found => {
                let path = step.path.clone().unwrap_or_default();
                let cost = path.last().map_or(f64::INFINITY, |&goal| step.distance(goal));
                Outcome::Found { path, cost }
            }
            _ => Outcome::Unreachable,
        }
    }

    /// Number of nodes settled by the end of the run.
    pub fn settled_count(&self) -> usize {
        self.last().map_or(0, |s| s.visited.len())
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for StepSequence {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
