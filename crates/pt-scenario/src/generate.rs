//! Seeded random scenarios.
//!
//! Nodes are scattered uniformly over a canvas; each one is then joined to
//! its `neighbors` nearest nodes, found through an `rstar` R-tree.  Weights
//! are the pixel distance rounded *up*, so the straight-line estimate stays
//! admissible and informed search remains optimal on generated graphs.
//!
//! The same [`GeneratorConfig`] always yields the same scenario.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use pt_core::{NodeCategory, NodeId, Point, RoadType};

use crate::{GraphDraft, Scenario};

/// Keeps nodes off the canvas border.
const MARGIN: f64 = 40.0;

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Parameters for [`random_scenario`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub node_count: usize,
    /// Edges attempted per node (to its nearest neighbours).
    pub neighbors: usize,
    pub width: f64,
    pub height: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: 42, node_count: 24, neighbors: 3, width: 1000.0, height: 800.0 }
    }
}

// ── random_scenario ───────────────────────────────────────────────────────────

/// Generate a connected-looking random city.
///
/// The start is the first node placed and the goal is the node farthest from
/// it.  Nearest-neighbour graphs are usually but not always connected; an
/// unreachable goal is a legitimate input for the engine.
pub fn random_scenario(config: &GeneratorConfig) -> Scenario {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut draft = GraphDraft::new();

    let x_max = (config.width - MARGIN).max(MARGIN + 1.0);
    let y_max = (config.height - MARGIN).max(MARGIN + 1.0);
    for _ in 0..config.node_count {
        let category = NodeCategory::ALL[rng.gen_range(0..NodeCategory::ALL.len())];
        let pos = Point::new(rng.gen_range(MARGIN..x_max), rng.gen_range(MARGIN..y_max));
        draft.add_node(category, pos);
    }

    let entries: Vec<NodeEntry> = draft
        .nodes()
        .iter()
        .map(|n| NodeEntry { point: [n.pos.x, n.pos.y], id: n.id })
        .collect();
    let tree = RTree::bulk_load(entries);

    let anchors: Vec<(NodeId, Point)> = draft.nodes().iter().map(|n| (n.id, n.pos)).collect();
    for &(id, pos) in &anchors {
        let nearest: Vec<NodeId> = tree
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .filter(|e| e.id != id)
            .take(config.neighbors)
            .map(|e| e.id)
            .collect();
        for other in nearest {
            if draft.is_connected(id, other) {
                continue;
            }
            let weight = draft
                .node(other)
                .map_or(1.0, |n| pos.distance(n.pos).ceil().max(1.0));
            let road = RoadType::ALL[rng.gen_range(0..RoadType::ALL.len())];
            if let Err(e) = draft.add_edge(id, other, weight, road) {
                tracing::warn!(error = %e, "generator skipped edge");
            }
        }
    }

    let start = anchors.first().map(|&(id, _)| id);
    let goal = anchors.first().and_then(|&(_, origin)| {
        anchors
            .iter()
            .max_by(|a, b| origin.distance(a.1).total_cmp(&origin.distance(b.1)))
            .map(|&(id, _)| id)
    });

    let mut scenario = draft.to_scenario(format!("random-{}", config.seed));
    scenario.start = start;
    scenario.goal = goal;

    tracing::debug!(
        seed = config.seed,
        nodes = scenario.nodes.len(),
        edges = scenario.edges.len(),
        "generated random scenario"
    );
    scenario
}
