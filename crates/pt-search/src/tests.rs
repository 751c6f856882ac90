//! Unit tests for pt-search.
//!
//! All graphs are hand-built so the expected step trails can be written out
//! in full.

#[cfg(test)]
mod helpers {
    use pt_core::{CostMultipliers, Edge, EdgeId, Node, NodeCategory, NodeId, Point, RoadType};

    use crate::{SearchMode, SearchRequest, StepSequence, trace_search};

    pub fn node(id: u32, x: f64, y: f64) -> Node {
        Node::new(NodeId(id), Point::new(x, y), NodeCategory::House, format!("N{id}"))
    }

    pub fn edge(id: u32, a: u32, b: u32, weight: f64, road: RoadType) -> Edge {
        Edge::new(EdgeId(id), NodeId(a), NodeId(b), weight, road)
    }

    pub fn run(
        nodes: &[Node],
        edges: &[Edge],
        start: u32,
        goal: u32,
        mode: SearchMode,
        multipliers: &CostMultipliers,
    ) -> StepSequence {
        trace_search(&SearchRequest {
            nodes,
            edges,
            start: NodeId(start),
            goal: NodeId(goal),
            mode,
            multipliers,
        })
    }

    /// A-B-C in a line (weights 5, 5) plus a direct A-C edge of 20.
    pub fn line_with_shortcut() -> (Vec<Node>, Vec<Edge>) {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 5.0, 0.0), node(3, 10.0, 0.0)];
        let edges = vec![
            edge(1, 1, 2, 5.0, RoadType::City),
            edge(2, 2, 3, 5.0, RoadType::City),
            edge(3, 1, 3, 20.0, RoadType::City),
        ];
        (nodes, edges)
    }

    /// Nine places with three competing routes from 1 to 5:
    ///
    /// - direct over Dirt via 2 (700 × 2.5),
    /// - top over Highway via 6, 3, 7 (877 × 1.0),
    /// - bottom over City via 8, 4, 9 (877 × 1.5),
    ///
    /// plus two Dirt cross links into 2.  Every weight is at least the pixel
    /// distance between its endpoints.
    pub fn three_routes() -> (Vec<Node>, Vec<Edge>) {
        let nodes = vec![
            node(1, 100.0, 400.0),
            node(2, 400.0, 400.0),
            node(3, 400.0, 150.0),
            node(4, 400.0, 650.0),
            node(5, 800.0, 400.0),
            node(6, 250.0, 250.0),
            node(7, 650.0, 250.0),
            node(8, 250.0, 550.0),
            node(9, 650.0, 550.0),
        ];
        let edges = vec![
            edge(1, 1, 2, 300.0, RoadType::Dirt),
            edge(2, 2, 5, 400.0, RoadType::Dirt),
            edge(3, 1, 6, 213.0, RoadType::Highway),
            edge(4, 6, 3, 181.0, RoadType::Highway),
            edge(5, 3, 7, 270.0, RoadType::Highway),
            edge(6, 7, 5, 213.0, RoadType::Highway),
            edge(7, 1, 8, 213.0, RoadType::City),
            edge(8, 8, 4, 181.0, RoadType::City),
            edge(9, 4, 9, 270.0, RoadType::City),
            edge(10, 9, 5, 213.0, RoadType::City),
            edge(11, 6, 2, 213.0, RoadType::Dirt),
            edge(12, 8, 2, 213.0, RoadType::Dirt),
        ];
        (nodes, edges)
    }

    /// Reference shortest distance by repeated relaxation over every edge.
    pub fn reference_distance(
        nodes: &[Node],
        edges: &[Edge],
        start: u32,
        goal: u32,
        multipliers: &CostMultipliers,
    ) -> f64 {
        use std::collections::HashMap;

        let mut dist: HashMap<NodeId, f64> = nodes.iter().map(|n| (n.id, f64::INFINITY)).collect();
        dist.insert(NodeId(start), 0.0);
        for _ in 0..nodes.len() {
            for e in edges {
                let cost = multipliers.cost(e.weight, e.road);
                let (ds, dt) = (dist[&e.source], dist[&e.target]);
                if ds + cost < dt {
                    dist.insert(e.target, ds + cost);
                }
                if dt + cost < ds {
                    dist.insert(e.source, dt + cost);
                }
            }
        }
        dist[&NodeId(goal)]
    }
}

// ── FrontierQueue ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use crate::FrontierQueue;

    #[test]
    fn empty_queue() {
        let mut q: FrontierQueue<u32> = FrontierQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek_priority(), None);
    }

    #[test]
    fn dequeues_in_ascending_priority() {
        let mut q = FrontierQueue::new();
        q.enqueue('c', 30.0);
        q.enqueue('a', 10.0);
        q.enqueue('b', 20.0);
        assert_eq!(q.peek_priority(), Some(10.0));
        assert_eq!(q.dequeue(), Some('a'));
        assert_eq!(q.dequeue(), Some('b'));
        assert_eq!(q.dequeue(), Some('c'));
        assert!(q.is_empty());
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut q = FrontierQueue::new();
        q.enqueue("first", 5.0);
        q.enqueue("low", 1.0);
        q.enqueue("second", 5.0);
        q.enqueue("third", 5.0);
        assert_eq!(q.peek_all(), ["low", "first", "second", "third"]);
    }

    #[test]
    fn reinsertion_keeps_both_entries() {
        let mut q = FrontierQueue::new();
        q.enqueue(7, 20.0);
        q.enqueue(7, 10.0);
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue(), Some(7));
        assert_eq!(q.dequeue(), Some(7));
        // Already-dequeued elements may come back.
        q.enqueue(7, 1.0);
        assert_eq!(q.dequeue(), Some(7));
    }

    #[test]
    fn peek_all_does_not_mutate() {
        let mut q = FrontierQueue::new();
        q.enqueue(2, 2.0);
        q.enqueue(1, 1.0);
        let before = q.peek_all();
        let again = q.peek_all();
        assert_eq!(before, again);
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue(), Some(1));
    }

    #[test]
    fn infinite_priority_sorts_last() {
        let mut q = FrontierQueue::new();
        q.enqueue('z', f64::INFINITY);
        q.enqueue('a', 1e12);
        assert_eq!(q.dequeue(), Some('a'));
        assert_eq!(q.dequeue(), Some('z'));
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use pt_core::{CostMultipliers, NodeId, RoadType};

    use super::helpers::{edge, line_with_shortcut, node};
    use crate::{Adjacency, Neighbor};

    #[test]
    fn empty_graph() {
        let adj = Adjacency::build(&[], &[], &CostMultipliers::default());
        assert_eq!(adj.node_count(), 0);
        assert_eq!(adj.edge_count(), 0);
        assert!(adj.neighbors(NodeId(1)).is_empty());
    }

    #[test]
    fn isolated_nodes_have_empty_lists() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 1.0, 0.0)];
        let adj = Adjacency::build(&nodes, &[], &CostMultipliers::default());
        assert_eq!(adj.node_count(), 2);
        assert!(adj.contains(NodeId(2)));
        assert!(adj.neighbors(NodeId(2)).is_empty());
    }

    #[test]
    fn undirected_and_symmetric() {
        let (nodes, edges) = line_with_shortcut();
        let adj = Adjacency::build(&nodes, &edges, &CostMultipliers::UNIT);
        assert_eq!(adj.edge_count(), 3);
        for n in &nodes {
            for nb in adj.neighbors(n.id) {
                let back = adj.neighbors(nb.node).iter().any(|r| r.node == n.id && r.cost == nb.cost);
                assert!(back, "missing reverse entry for {} -> {}", n.id, nb.node);
            }
        }
    }

    #[test]
    fn neighbor_lists_follow_edge_order() {
        let (nodes, edges) = line_with_shortcut();
        let adj = Adjacency::build(&nodes, &edges, &CostMultipliers::UNIT);
        assert_eq!(
            adj.neighbors(NodeId(1)),
            [Neighbor { node: NodeId(2), cost: 5.0 }, Neighbor { node: NodeId(3), cost: 20.0 }]
        );
    }

    #[test]
    fn multiplier_applied_per_road_type() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 1.0, 0.0), node(3, 2.0, 0.0)];
        let edges = vec![
            edge(1, 1, 2, 100.0, RoadType::Dirt),
            edge(2, 2, 3, 100.0, RoadType::Highway),
        ];
        let adj = Adjacency::build(&nodes, &edges, &CostMultipliers::default());
        assert_eq!(adj.cost_between(NodeId(1), NodeId(2)), Some(250.0));
        assert_eq!(adj.cost_between(NodeId(2), NodeId(3)), Some(100.0));
        assert_eq!(adj.cost_between(NodeId(1), NodeId(3)), None);
    }

    #[test]
    fn dangling_edges_are_ignored() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 1.0, 0.0)];
        let edges = vec![
            edge(1, 1, 42, 10.0, RoadType::City),
            edge(2, 43, 2, 10.0, RoadType::City),
            edge(3, 1, 2, 10.0, RoadType::City),
        ];
        let adj = Adjacency::build(&nodes, &edges, &CostMultipliers::UNIT);
        assert_eq!(adj.edge_count(), 1);
        assert_eq!(adj.neighbors(NodeId(1)).len(), 1);
        assert!(!adj.contains(NodeId(42)));
    }

    #[test]
    fn parallel_edges_price_at_cheapest() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 1.0, 0.0)];
        let edges = vec![
            edge(1, 1, 2, 10.0, RoadType::Dirt),
            edge(2, 2, 1, 10.0, RoadType::Highway),
        ];
        let adj = Adjacency::build(&nodes, &edges, &CostMultipliers::default());
        assert_eq!(adj.cost_between(NodeId(1), NodeId(2)), Some(10.0));
    }

    #[test]
    fn path_cost_sums_hops() {
        let (nodes, edges) = line_with_shortcut();
        let adj = Adjacency::build(&nodes, &edges, &CostMultipliers::UNIT);
        assert_eq!(adj.path_cost(&[NodeId(1), NodeId(2), NodeId(3)]), Some(10.0));
        assert_eq!(adj.path_cost(&[NodeId(1)]), Some(0.0));
        assert_eq!(adj.path_cost(&[NodeId(1), NodeId(9)]), None);
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use std::collections::BTreeMap;

    use pt_core::NodeId;

    use crate::reconstruct_path;

    #[test]
    fn walks_chain_back_to_root() {
        let previous: BTreeMap<_, _> = [
            (NodeId(1), None),
            (NodeId(2), Some(NodeId(1))),
            (NodeId(3), Some(NodeId(2))),
            (NodeId(4), None),
        ]
        .into_iter()
        .collect();
        assert_eq!(reconstruct_path(&previous, NodeId(3)), [NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn root_alone() {
        let previous: BTreeMap<_, _> = [(NodeId(1), None)].into_iter().collect();
        assert_eq!(reconstruct_path(&previous, NodeId(1)), [NodeId(1)]);
    }

    #[test]
    fn cycle_terminates() {
        let previous: BTreeMap<_, _> =
            [(NodeId(1), Some(NodeId(2))), (NodeId(2), Some(NodeId(1)))].into_iter().collect();
        let path = reconstruct_path(&previous, NodeId(1));
        assert!(path.len() <= 3);
    }
}

// ── Search loop ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use pt_core::{CostMultipliers, NodeId, RoadType};

    use super::helpers::{edge, line_with_shortcut, node, reference_distance, run, three_routes};
    use crate::{Adjacency, Outcome, SearchMode, StepKind};

    const MODES: [SearchMode; 2] = [SearchMode::Uninformed, SearchMode::Informed];

    #[test]
    fn two_nodes_single_edge() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 10.0, 0.0)];
        let edges = vec![edge(1, 1, 2, 10.0, RoadType::City)];
        let multipliers = CostMultipliers::default().with(RoadType::City, 1.0);
        for mode in MODES {
            let seq = run(&nodes, &edges, 1, 2, mode, &multipliers);
            assert_eq!(
                seq.outcome(),
                Outcome::Found { path: vec![NodeId(1), NodeId(2)], cost: 10.0 },
                "mode {mode}"
            );
        }
    }

    #[test]
    fn chain_beats_expensive_direct_edge() {
        let (nodes, edges) = line_with_shortcut();
        for mode in MODES {
            let seq = run(&nodes, &edges, 1, 3, mode, &CostMultipliers::UNIT);
            assert_eq!(seq.path(), [NodeId(1), NodeId(2), NodeId(3)], "mode {mode}");
            assert_eq!(seq.outcome().cost(), 10.0);
        }
    }

    #[test]
    fn chain_trace_step_by_step() {
        let (nodes, edges) = line_with_shortcut();
        let seq = run(&nodes, &edges, 1, 3, SearchMode::Uninformed, &CostMultipliers::UNIT);

        let kinds: Vec<_> = seq.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                StepKind::Initial,
                StepKind::Visiting,
                StepKind::Relaxed,
                StepKind::Visiting,
                StepKind::Relaxed,
                StepKind::Visiting,
                StepKind::Found,
            ]
        );

        let initial = &seq.steps()[0];
        assert_eq!(initial.current, None);
        assert_eq!(initial.frontier, [NodeId(1)]);
        assert!(initial.visited.is_empty());

        // Visiting A: A has been dequeued but not settled yet.
        let visiting_a = &seq.steps()[1];
        assert_eq!(visiting_a.current, Some(NodeId(1)));
        assert!(visiting_a.visited.is_empty());
        assert!(visiting_a.frontier.is_empty());

        let relaxed_a = &seq.steps()[2];
        assert_eq!(relaxed_a.visited, [NodeId(1)]);
        assert_eq!(relaxed_a.distance(NodeId(2)), 5.0);
        assert_eq!(relaxed_a.distance(NodeId(3)), 20.0);
        assert_eq!(relaxed_a.frontier, [NodeId(2), NodeId(3)]);

        // B improves C to 10; the stale 20 entry stays queued.
        let relaxed_b = &seq.steps()[4];
        assert_eq!(relaxed_b.current, Some(NodeId(2)));
        assert_eq!(relaxed_b.distance(NodeId(3)), 10.0);
        assert_eq!(relaxed_b.predecessor(NodeId(3)), Some(NodeId(2)));
        assert_eq!(relaxed_b.frontier, [NodeId(3), NodeId(3)]);

        let found = seq.last().unwrap();
        assert_eq!(found.current, None);
        assert!(found.frontier.is_empty());
        assert_eq!(found.visited, [NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(found.path.as_deref(), Some(&[NodeId(1), NodeId(2), NodeId(3)][..]));
    }

    #[test]
    fn start_equals_goal() {
        let (nodes, edges) = line_with_shortcut();
        for mode in MODES {
            let seq = run(&nodes, &edges, 2, 2, mode, &CostMultipliers::UNIT);
            assert_eq!(seq.len(), 3);
            assert_eq!(seq.outcome(), Outcome::Found { path: vec![NodeId(2)], cost: 0.0 });
            assert_eq!(seq.last().unwrap().visited, [NodeId(2)]);
        }
    }

    #[test]
    fn unreachable_goal() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 10.0, 0.0), node(3, 50.0, 50.0)];
        let edges = vec![edge(1, 1, 2, 10.0, RoadType::City)];
        for mode in MODES {
            let seq = run(&nodes, &edges, 1, 3, mode, &CostMultipliers::default());
            assert_eq!(seq.len(), 6);
            let last = seq.last().unwrap();
            assert_eq!(last.kind, StepKind::Exhausted);
            assert_eq!(last.current, None);
            assert!(last.frontier.is_empty());
            assert_eq!(last.path.as_deref(), Some(&[][..]));
            assert_eq!(last.distance(NodeId(3)), f64::INFINITY);
            assert_eq!(seq.outcome(), Outcome::Unreachable);
            assert!(seq.path().is_empty());
        }
    }

    #[test]
    fn cheaper_road_type_wins_on_equal_distance() {
        // Two mirror-image detours of identical length; Dirt listed first.
        let nodes = vec![
            node(1, 0.0, 0.0),
            node(2, 200.0, 0.0),
            node(3, 100.0, -50.0),
            node(4, 100.0, 50.0),
        ];
        let edges = vec![
            edge(1, 1, 4, 112.0, RoadType::Dirt),
            edge(2, 4, 2, 112.0, RoadType::Dirt),
            edge(3, 1, 3, 112.0, RoadType::Highway),
            edge(4, 3, 2, 112.0, RoadType::Highway),
        ];
        for mode in MODES {
            let seq = run(&nodes, &edges, 1, 2, mode, &CostMultipliers::default());
            assert_eq!(
                seq.outcome(),
                Outcome::Found { path: vec![NodeId(1), NodeId(3), NodeId(2)], cost: 224.0 },
                "mode {mode}"
            );
        }
    }

    #[test]
    fn multipliers_change_the_route() {
        let (nodes, edges) = three_routes();
        let seq = run(&nodes, &edges, 1, 5, SearchMode::Uninformed, &CostMultipliers::UNIT);
        // With every road at ×1 the short Dirt route wins.
        assert_eq!(seq.path(), [NodeId(1), NodeId(2), NodeId(5)]);

        let seq = run(&nodes, &edges, 1, 5, SearchMode::Uninformed, &CostMultipliers::default());
        assert_eq!(seq.path(), [NodeId(1), NodeId(6), NodeId(3), NodeId(7), NodeId(5)]);
        assert_eq!(seq.outcome().cost(), 877.0);
    }

    #[test]
    fn path_is_connected_and_optimal() {
        let (nodes, edges) = three_routes();
        let multipliers = CostMultipliers::default();
        let adj = Adjacency::build(&nodes, &edges, &multipliers);
        for mode in MODES {
            for goal in 2..=9 {
                let seq = run(&nodes, &edges, 1, goal, mode, &multipliers);
                let path = seq.path();
                assert_eq!(path.first(), Some(&NodeId(1)));
                assert_eq!(path.last(), Some(&NodeId(goal)));

                let walked = adj.path_cost(path).expect("consecutive path nodes share an edge");
                let last = seq.last().unwrap();
                assert_eq!(walked, last.distance(NodeId(goal)));
                let best = reference_distance(&nodes, &edges, 1, goal, &multipliers);
                assert!((walked - best).abs() < 1e-9, "mode {mode} goal {goal}: {walked} vs {best}");
            }
        }
    }

    #[test]
    fn informed_settles_fewer_nodes_when_goal_is_one_sided() {
        // L-S-G on a line; the goal lies to the right of the start.
        let nodes = vec![node(1, 0.0, 0.0), node(2, 100.0, 0.0), node(3, 200.0, 0.0)];
        let edges = vec![
            edge(1, 1, 2, 100.0, RoadType::City),
            edge(2, 2, 3, 100.0, RoadType::City),
        ];
        let dijkstra = run(&nodes, &edges, 2, 3, SearchMode::Uninformed, &CostMultipliers::UNIT);
        let astar = run(&nodes, &edges, 2, 3, SearchMode::Informed, &CostMultipliers::UNIT);

        assert_eq!(dijkstra.settled_count(), 3);
        assert_eq!(astar.settled_count(), 2);
        assert_eq!(dijkstra.outcome(), astar.outcome());
    }

    #[test]
    fn informed_frontier_orders_by_estimate() {
        // Goal 4 lies to the right.  Node 2 is cheaper to reach but points
        // away from the goal; node 3 costs more but points towards it.
        let nodes = vec![
            node(1, 0.0, 0.0),
            node(2, -5.0, 0.0),
            node(3, 5.0, 0.0),
            node(4, 10.0, 0.0),
        ];
        let edges = vec![
            edge(1, 1, 2, 5.0, RoadType::City),
            edge(2, 1, 3, 6.0, RoadType::City),
            edge(3, 3, 4, 5.0, RoadType::City),
        ];

        let plain = run(&nodes, &edges, 1, 4, SearchMode::Uninformed, &CostMultipliers::UNIT);
        let informed = run(&nodes, &edges, 1, 4, SearchMode::Informed, &CostMultipliers::UNIT);

        assert_eq!(informed.steps()[0].frontier, [NodeId(1)]);

        // steps[2] is the Relaxed snapshot after expanding the start.
        assert_eq!(plain.steps()[2].kind, StepKind::Relaxed);
        assert_eq!(informed.steps()[2].kind, StepKind::Relaxed);
        // g only: 2 (5) before 3 (6).
        assert_eq!(plain.steps()[2].frontier, [NodeId(2), NodeId(3)]);
        // g + h: 3 (6 + 5) before 2 (5 + 15).
        assert_eq!(informed.steps()[2].frontier, [NodeId(3), NodeId(2)]);

        assert!(informed.settled_count() < plain.settled_count());
        assert_eq!(informed.outcome().cost(), 11.0);
        assert_eq!(plain.outcome().cost(), 11.0);
    }

    #[test]
    fn equal_cost_routes_keep_first_discovery() {
        // Diamond: 1-2-4 and 1-3-4, every edge 10, edge 1-2 listed first.
        let nodes = vec![
            node(1, 0.0, 0.0),
            node(2, 5.0, 5.0),
            node(3, 5.0, -5.0),
            node(4, 10.0, 0.0),
        ];
        let edges = vec![
            edge(1, 1, 2, 10.0, RoadType::City),
            edge(2, 1, 3, 10.0, RoadType::City),
            edge(3, 2, 4, 10.0, RoadType::City),
            edge(4, 3, 4, 10.0, RoadType::City),
        ];
        for mode in MODES {
            let seq = run(&nodes, &edges, 1, 4, mode, &CostMultipliers::UNIT);

            // Initial, V1, R1, V2, R2, V3, R3, V4, Found.
            assert_eq!(seq.len(), 9, "{mode}");
            let after_3 = &seq.steps()[6];
            assert_eq!(after_3.kind, StepKind::Relaxed, "{mode}");
            assert_eq!(after_3.current, Some(NodeId(3)), "{mode}");
            assert_eq!(after_3.distance(NodeId(4)), 20.0, "{mode}");
            assert_eq!(after_3.predecessor(NodeId(4)), Some(NodeId(2)), "{mode}");
            // The equal-cost offer from 3 does not re-queue 4.
            assert_eq!(after_3.frontier, [NodeId(4)], "{mode}");

            assert_eq!(seq.path(), [NodeId(1), NodeId(2), NodeId(4)], "{mode}");
        }
    }

    #[test]
    fn start_distance_zero_everywhere() {
        let (nodes, edges) = three_routes();
        for mode in MODES {
            let seq = run(&nodes, &edges, 1, 5, mode, &CostMultipliers::default());
            assert!(seq.iter().all(|s| s.distance(NodeId(1)) == 0.0));
        }
    }

    #[test]
    fn visited_is_monotonic() {
        let (nodes, edges) = three_routes();
        for mode in MODES {
            let seq = run(&nodes, &edges, 1, 5, mode, &CostMultipliers::default());
            for pair in seq.steps().windows(2) {
                for id in &pair[0].visited {
                    assert!(pair[1].visited.contains(id), "{id} dropped out of visited");
                }
            }
        }
    }

    #[test]
    fn unreached_nodes_stay_infinite() {
        let (nodes, edges) = three_routes();
        let seq = run(&nodes, &edges, 1, 5, SearchMode::Informed, &CostMultipliers::default());
        let last = seq.last().unwrap();
        for n in &nodes {
            if last.predecessor(n.id).is_none() && n.id != NodeId(1) {
                assert_eq!(last.distance(n.id), f64::INFINITY);
            }
        }
    }

    #[test]
    fn stale_entries_emit_no_snapshot() {
        let (nodes, edges) = line_with_shortcut();
        // An absent goal drains the queue, including the stale 20 entry for 3.
        let seq = run(&nodes, &edges, 1, 99, SearchMode::Uninformed, &CostMultipliers::UNIT);
        let visiting = seq.iter().filter(|s| s.kind == StepKind::Visiting).count();
        assert_eq!(visiting, 3, "one visiting snapshot per settled node");
        assert_eq!(seq.settled_count(), 3);
    }

    #[test]
    fn runs_are_deterministic() {
        let (nodes, edges) = three_routes();
        for mode in MODES {
            let a = run(&nodes, &edges, 1, 5, mode, &CostMultipliers::default());
            let b = run(&nodes, &edges, 1, 5, mode, &CostMultipliers::default());
            assert_eq!(a, b);
            assert_eq!(format!("{a:?}"), format!("{b:?}"));
        }
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let (nodes, edges) = line_with_shortcut();
        let seq = run(&nodes, &edges, 1, 3, SearchMode::Uninformed, &CostMultipliers::UNIT);
        // Later relaxations must not leak into earlier snapshots.
        assert_eq!(seq.steps()[0].distance(NodeId(3)), f64::INFINITY);
        assert_eq!(seq.steps()[2].distance(NodeId(3)), 20.0);
        assert_eq!(seq.steps()[4].distance(NodeId(3)), 10.0);
    }

    #[test]
    fn absent_start_exhausts() {
        let (nodes, edges) = line_with_shortcut();
        let seq = run(&nodes, &edges, 99, 3, SearchMode::Informed, &CostMultipliers::UNIT);
        let kinds: Vec<_> = seq.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [StepKind::Initial, StepKind::Visiting, StepKind::Relaxed, StepKind::Exhausted]
        );
        assert_eq!(seq.steps()[0].distance(NodeId(99)), 0.0);
    }

    #[test]
    fn absent_goal_exhausts() {
        let (nodes, edges) = line_with_shortcut();
        let seq = run(&nodes, &edges, 1, 99, SearchMode::Informed, &CostMultipliers::UNIT);
        assert_eq!(seq.outcome(), Outcome::Unreachable);
        assert_eq!(seq.settled_count(), 3);
    }

    #[test]
    fn empty_graph_exhausts() {
        let seq = run(&[], &[], 1, 2, SearchMode::Uninformed, &CostMultipliers::default());
        assert_eq!(seq.last().map(|s| s.kind), Some(StepKind::Exhausted));
    }
}

// ── Step queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use pt_core::{CostMultipliers, NodeId, RoadType};

    use super::helpers::{edge, line_with_shortcut, node, run};
    use crate::{NodeStatus, SearchMode, StepKind};

    #[test]
    fn status_precedence() {
        let (nodes, edges) = line_with_shortcut();
        let seq = run(&nodes, &edges, 1, 3, SearchMode::Uninformed, &CostMultipliers::UNIT);

        let relaxed_a = &seq.steps()[2];
        assert_eq!(relaxed_a.status_of(NodeId(1)), NodeStatus::Current);
        assert_eq!(relaxed_a.status_of(NodeId(2)), NodeStatus::Frontier);

        let visiting_b = &seq.steps()[3];
        assert_eq!(visiting_b.status_of(NodeId(1)), NodeStatus::Visited);
        assert_eq!(visiting_b.status_of(NodeId(2)), NodeStatus::Current);

        let found = seq.last().unwrap();
        assert_eq!(found.status_of(NodeId(2)), NodeStatus::Path);
        assert_eq!(found.status_of(NodeId(7)), NodeStatus::Unvisited);
    }

    #[test]
    fn edge_on_path_only_for_consecutive_hops() {
        let (nodes, edges) = line_with_shortcut();
        let seq = run(&nodes, &edges, 1, 3, SearchMode::Uninformed, &CostMultipliers::UNIT);

        let found = seq.last().unwrap();
        assert!(found.edge_on_path(NodeId(1), NodeId(2)));
        assert!(found.edge_on_path(NodeId(3), NodeId(2)));
        // The 1-3 shortcut joins two path nodes but is not walked.
        assert!(!found.edge_on_path(NodeId(1), NodeId(3)));
        assert!(!found.edge_on_path(NodeId(2), NodeId(2)));

        assert!(!seq.steps()[2].edge_on_path(NodeId(1), NodeId(2)));
    }

    #[test]
    fn edge_on_path_false_when_unreachable() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 10.0, 0.0), node(3, 50.0, 50.0)];
        let edges = vec![edge(1, 1, 2, 10.0, RoadType::City)];
        let seq = run(&nodes, &edges, 1, 3, SearchMode::Uninformed, &CostMultipliers::UNIT);
        let last = seq.last().unwrap();
        assert_eq!(last.kind, StepKind::Exhausted);
        assert!(!last.edge_on_path(NodeId(1), NodeId(2)));
    }

    #[test]
    fn terminal_kinds() {
        assert!(StepKind::Found.is_terminal());
        assert!(StepKind::Exhausted.is_terminal());
        assert!(!StepKind::Relaxed.is_terminal());
    }

    #[test]
    fn sequence_iterates_in_order() {
        let (nodes, edges) = line_with_shortcut();
        let seq = run(&nodes, &edges, 1, 3, SearchMode::Informed, &CostMultipliers::UNIT);
        let n = seq.iter().count();
        assert_eq!(n, seq.len());
        assert_eq!((&seq).into_iter().next().map(|s| s.kind), Some(StepKind::Initial));
        assert_eq!(seq.get(n), None);
        let owned = seq.clone().into_steps();
        assert_eq!(owned.len(), n);
    }
}
