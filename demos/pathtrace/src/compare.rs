//! Batch comparison of the two search modes over random scenarios.

use anyhow::{Context, Result};
use rayon::prelude::*;

use pt_core::CostMultipliers;
use pt_scenario::{GeneratorConfig, Scenario, random_scenario};
use pt_search::{Adjacency, Outcome, SearchMode, SearchRequest, trace_search};

/// Both modes run against one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub seed:               u64,
    pub nodes:              usize,
    pub uninformed:         Outcome,
    pub informed:           Outcome,
    pub uninformed_settled: usize,
    pub informed_settled:   usize,
    /// Every found path walks over real edges to exactly its reported cost.
    pub paths_walk:         bool,
}

impl Comparison {
    /// Same reachability and the same cost up to float rounding.
    pub fn costs_agree(&self) -> bool {
        match (&self.uninformed, &self.informed) {
            (Outcome::Unreachable, Outcome::Unreachable) => true,
            (Outcome::Found { cost: a, .. }, Outcome::Found { cost: b, .. }) => {
                (a - b).abs() <= 1e-9 * a.abs().max(1.0)
            }
            _ => false,
        }
    }
}

/// Run both modes on `scenario`'s selected endpoints.
pub fn compare_scenario(scenario: &Scenario, seed: u64) -> Result<Comparison> {
    let (start, goal) = scenario
        .endpoints()
        .with_context(|| format!("scenario {:?}", scenario.name))?;

    let run = |mode| {
        trace_search(&SearchRequest {
            nodes: &scenario.nodes,
            edges: &scenario.edges,
            start,
            goal,
            mode,
            multipliers: &scenario.multipliers,
        })
    };
    let uninformed_trace = run(SearchMode::Uninformed);
    let informed_trace = run(SearchMode::Informed);
    let uninformed = uninformed_trace.outcome();
    let informed = informed_trace.outcome();
    let adjacency = Adjacency::build(&scenario.nodes, &scenario.edges, &scenario.multipliers);
    let paths_walk = [&uninformed, &informed].into_iter().all(|outcome| match outcome {
        Outcome::Found { path, cost } => adjacency
            .path_cost(path)
            .is_some_and(|walked| (walked - cost).abs() <= 1e-9 * cost.abs().max(1.0)),
        Outcome::Unreachable => true,
    });

    Ok(Comparison {
        seed,
        nodes: scenario.nodes.len(),
        uninformed_settled: uninformed_trace.settled_count(),
        informed_settled: informed_trace.settled_count(),
        uninformed,
        informed,
        paths_walk,
    })
}

/// Generate `count` scenarios from consecutive seeds and compare each one.
pub fn compare_random(
    count:       usize,
    first_seed:  u64,
    base:        &GeneratorConfig,
    multipliers: &CostMultipliers,
) -> Result<Vec<Comparison>> {
    (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let seed = first_seed.wrapping_add(i);
            let mut scenario = random_scenario(&GeneratorConfig { seed, ..*base });
            scenario.multipliers = *multipliers;
            compare_scenario(&scenario, seed)
        })
        .collect()
}
