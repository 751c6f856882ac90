//! Undirected adjacency lists with effective edge costs.
//!
//! # Construction
//!
//! [`Adjacency::build`] walks the edge list once.  Each edge whose two
//! endpoints are both known nodes contributes one entry to each endpoint's
//! list, carrying the same effective cost (`weight × multiplier[road]`), so
//! the structure is symmetric by construction.  Neighbour lists preserve edge
//! list order, which fixes the relaxation order and makes runs reproducible.
//!
//! Edges that reference an unknown node are dropped without error: a
//! malformed graph degrades to a sparser one.

use rustc_hash::FxHashMap;

use pt_core::{CostMultipliers, Edge, Node, NodeId};

/// One outgoing entry of a node's adjacency list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    /// Effective cost: base weight times the road-type multiplier.
    pub cost: f64,
}

/// Node id → neighbours, built fresh for every search run.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    lists: FxHashMap<NodeId, Vec<Neighbor>>,
    edge_count: usize,
}

impl Adjacency {
    /// Build the adjacency map for `nodes` and `edges` under `multipliers`.
    pub fn build(nodes: &[Node], edges: &[Edge], multipliers: &CostMultipliers) -> Self {
        let mut lists: FxHashMap<NodeId, Vec<Neighbor>> =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for node in nodes {
            lists.entry(node.id).or_default();
        }

        let mut edge_count = 0;
        for edge in edges {
            if !lists.contains_key(&edge.source) || !lists.contains_key(&edge.target) {
                tracing::trace!(edge = %edge.id, "skipping edge with dangling endpoint");
                continue;
            }
            let cost = multipliers.cost(edge.weight, edge.road);
            if let Some(list) = lists.get_mut(&edge.source) {
                list.push(Neighbor { node: edge.target, cost });
            }
            if let Some(list) = lists.get_mut(&edge.target) {
                list.push(Neighbor { node: edge.source, cost });
            }
            edge_count += 1;
        }

        Self { lists, edge_count }
    }

    /// Neighbours of `node`; empty for unknown ids.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        self.lists.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.lists.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of undirected edges that were accepted.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Cheapest effective cost of a direct edge between `a` and `b`.
    pub fn cost_between(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.neighbors(a)
            .iter()
            .filter(|n| n.node == b)
            .map(|n| n.cost)
            .min_by(f64::total_cmp)
    }

    /// Sum of edge costs along `path`, or `None` if two consecutive ids are
    /// not directly connected.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f64> {
        path.windows(2)
            .map(|pair| self.cost_between(pair[0], pair[1]))
            .sum()
    }
}
