//! Predecessor-chain walk from goal back to start.

use std::collections::BTreeMap;

use pt_core::NodeId;

/// Rebuild the start → `goal` path from a predecessor map.
///
/// Follows `previous` links from `goal` until a node with no predecessor,
/// then reverses.  The result always contains `goal`; for the start node
/// itself it is `[start]`.
///
/// Predecessors only ever point at settled nodes, so the chain is a tree
/// walk.  The walk is capped at `previous.len() + 1` hops because negative
/// edge costs can close a cycle.
pub fn reconstruct_path(previous: &BTreeMap<NodeId, Option<NodeId>>, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&Some(prev)) = previous.get(&cur) {
        if path.len() > previous.len() {
            break;
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
