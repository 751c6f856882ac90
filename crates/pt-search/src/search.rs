//! The label-setting search loop and its snapshot trail.
//!
//! # Modes
//!
//! One loop serves both modes; they differ only in the priority a candidate
//! is queued with:
//!
//! | Mode         | Priority        | Start priority     |
//! |--------------|-----------------|--------------------|
//! | `Uninformed` | `g`             | `0`                |
//! | `Informed`   | `g + h(n, goal)`| `h(start, goal)`   |
//!
//! where `h` is the straight-line distance (see [`crate::heuristic`]).
//!
//! # Snapshot points
//!
//! ```text
//! Initial ─▶ ( Visiting ─▶ Relaxed )* ─▶ Visiting ─▶ Found
//!                                    └─▶ Exhausted
//! ```
//!
//! Stale queue entries (nodes already settled) are dropped silently and
//! produce no snapshot.
//!
//! # Concurrency
//!
//! [`trace_search`] borrows its input immutably and owns every piece of
//! mutable state it touches, so independent runs can execute on different
//! threads at the same time.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use pt_core::{CostMultipliers, Edge, Node, NodeId, Point};

use crate::adjacency::Adjacency;
use crate::heuristic::straight_line;
use crate::path::reconstruct_path;
use crate::queue::FrontierQueue;
use crate::step::{Step, StepKind, StepSequence};

// ── SearchMode ────────────────────────────────────────────────────────────────

/// Priority rule for the frontier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Dijkstra: priority is the accumulated cost.
    #[default]
    Uninformed,
    /// A*: accumulated cost plus the straight-line estimate to the goal.
    Informed,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Uninformed => "dijkstra",
            SearchMode::Informed   => "astar",
        }
    }

    /// Remaining-cost estimate from `from` to `goal` under this mode.
    #[inline]
    pub fn estimate(self, from: Option<Point>, goal: Option<Point>) -> f64 {
        match self {
            SearchMode::Uninformed => 0.0,
            SearchMode::Informed   => straight_line(from, goal),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SearchRequest ─────────────────────────────────────────────────────────────

/// Everything one run needs.  Borrowed, never modified.
#[derive(Copy, Clone, Debug)]
pub struct SearchRequest<'a> {
    pub nodes:       &'a [Node],
    pub edges:       &'a [Edge],
    pub start:       NodeId,
    pub goal:        NodeId,
    pub mode:        SearchMode,
    pub multipliers: &'a CostMultipliers,
}

// ── Search state ──────────────────────────────────────────────────────────────

/// Mutable state of a single run.  Never shared between runs.
struct SearchState {
    distances: BTreeMap<NodeId, f64>,
    previous:  BTreeMap<NodeId, Option<NodeId>>,
    settled:   FxHashSet<NodeId>,
    /// Settle order, mirrored into every snapshot.
    visited:   Vec<NodeId>,
    frontier:  FrontierQueue<NodeId>,
}

impl SearchState {
    fn new(nodes: &[Node], start: NodeId) -> Self {
        let mut distances: BTreeMap<NodeId, f64> =
            nodes.iter().map(|n| (n.id, f64::INFINITY)).collect();
        let mut previous: BTreeMap<NodeId, Option<NodeId>> =
            nodes.iter().map(|n| (n.id, None)).collect();
        distances.insert(start, 0.0);
        previous.entry(start).or_insert(None);

        Self {
            distances,
            previous,
            settled: FxHashSet::default(),
            visited: Vec::new(),
            frontier: FrontierQueue::new(),
        }
    }

    #[inline]
    fn distance(&self, node: NodeId) -> f64 {
        self.distances.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    fn settle(&mut self, node: NodeId) {
        if self.settled.insert(node) {
            self.visited.push(node);
        }
    }

    fn snapshot(&self, kind: StepKind, current: Option<NodeId>) -> Step {
        Step {
            kind,
            visited:   self.visited.clone(),
            distances: self.distances.clone(),
            previous:  self.previous.clone(),
            current,
            frontier:  self.frontier.peek_all(),
            path:      None,
        }
    }

    fn terminal(&self, kind: StepKind, path: Vec<NodeId>) -> Step {
        Step {
            kind,
            visited:   self.visited.clone(),
            distances: self.distances.clone(),
            previous:  self.previous.clone(),
            current:   None,
            frontier:  Vec::new(),
            path:      Some(path),
        }
    }
}

// ── trace_search ──────────────────────────────────────────────────────────────

/// Run a shortest-path search and return every snapshot it produced.
///
/// Never fails.  An unreachable goal, an empty graph, or ids missing from the
/// node list all end in a [`StepKind::Exhausted`] step with an empty path.
/// Negative effective costs are not supported and give unspecified results.
pub fn trace_search(req: &SearchRequest<'_>) -> StepSequence {
    let _span = tracing::debug_span!("trace_search", mode = %req.mode).entered();

    let adjacency = Adjacency::build(req.nodes, req.edges, req.multipliers);
    let positions: FxHashMap<NodeId, Point> = req.nodes.iter().map(|n| (n.id, n.pos)).collect();
    let goal_pos = positions.get(&req.goal).copied();
    let estimate = |node: NodeId| req.mode.estimate(positions.get(&node).copied(), goal_pos);

    tracing::debug!(
        nodes = adjacency.node_count(),
        edges = adjacency.edge_count(),
        start = %req.start,
        goal = %req.goal,
        "search started"
    );

    for (role, id) in [("start", req.start), ("goal", req.goal)] {
        if !adjacency.contains(id) {
            tracing::debug!(role, node = %id, "endpoint is not in the node list");
        }
    }

    let mut state = SearchState::new(req.nodes, req.start);
    let mut steps = Vec::new();

    state.frontier.enqueue(req.start, estimate(req.start));
    steps.push(state.snapshot(StepKind::Initial, None));

    while let Some(priority) = state.frontier.peek_priority() {
        let Some(current) = state.frontier.dequeue() else {
            break;
        };
        if state.settled.contains(&current) {
            tracing::trace!(node = %current, priority, "stale entry skipped");
            continue;
        }

        steps.push(state.snapshot(StepKind::Visiting, Some(current)));

        if current == req.goal {
            state.settle(current);
            let path = reconstruct_path(&state.previous, req.goal);
            tracing::debug!(
                steps = steps.len() + 1,
                settled = state.visited.len(),
                cost = state.distance(current),
                hops = path.len().saturating_sub(1),
                "goal reached"
            );
            steps.push(state.terminal(StepKind::Found, path));
            return StepSequence::new(steps);
        }

        state.settle(current);
        tracing::trace!(node = %current, g = state.distance(current), "settled");

        let g = state.distance(current);
        for neighbor in adjacency.neighbors(current) {
            let tentative = g + neighbor.cost;
            if tentative < state.distance(neighbor.node) {
                state.distances.insert(neighbor.node, tentative);
                state.previous.insert(neighbor.node, Some(current));
                let priority = tentative + estimate(neighbor.node);
                tracing::trace!(node = %neighbor.node, g = tentative, priority, "relaxed");
                state.frontier.enqueue(neighbor.node, priority);
            }
        }

        steps.push(state.snapshot(StepKind::Relaxed, Some(current)));
    }

    tracing::debug!(
        steps = steps.len() + 1,
        settled = state.visited.len(),
        "frontier exhausted, goal unreachable"
    );
    steps.push(state.terminal(StepKind::Exhausted, Vec::new()));
    StepSequence::new(steps)
}
