//! Flat per-node rows derived from a step.

use pt_core::NodeId;
use pt_search::{NodeStatus, Step, StepKind};

/// The state of one node at one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepNodeRow {
    pub step:     usize,
    pub kind:     StepKind,
    pub node:     NodeId,
    pub status:   NodeStatus,
    /// `f64::INFINITY` when the node has not been reached.
    pub distance: f64,
    pub previous: Option<NodeId>,
}

impl StepNodeRow {
    /// One row per node in the step's distance map, in id order.
    pub fn from_step(index: usize, step: &Step) -> Vec<StepNodeRow> {
        step.distances
            .iter()
            .map(|(&node, &distance)| StepNodeRow {
                step: index,
                kind: step.kind,
                node,
                status: step.status_of(node),
                distance,
                previous: step.predecessor(node),
            })
            .collect()
    }
}
