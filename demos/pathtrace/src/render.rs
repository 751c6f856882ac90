//! Plain-text rendering of steps for the terminal.

use std::fmt::Write;

use pt_core::NodeId;
use pt_scenario::Scenario;
use pt_search::{Outcome, Step};

fn label(scenario: &Scenario, id: NodeId) -> String {
    scenario
        .node(id)
        .map(|n| n.display_name())
        .unwrap_or_else(|| id.get().to_string())
}

fn fmt_distance(d: f64) -> String {
    if d.is_finite() { format!("{d:.1}") } else { "inf".to_owned() }
}

/// One frame: a heading line followed by one row per node.
pub fn render_step(scenario: &Scenario, index: usize, step: &Step) -> String {
    let mut out = String::new();
    let current = step.current.map(|c| label(scenario, c)).unwrap_or_else(|| "-".to_owned());
    let frontier: Vec<String> = step.frontier.iter().map(|&n| label(scenario, n)).collect();
    let _ = writeln!(
        out,
        "step {index:>3}  {:<9}  current: {current:<8}  frontier: [{}]",
        step.kind.as_str(),
        frontier.join(", ")
    );
    for (&id, &distance) in &step.distances {
        let prev = step.predecessor(id).map(|p| label(scenario, p)).unwrap_or_default();
        let _ = writeln!(
            out,
            "    {:<10} {:<10} {:>9}  {}",
            label(scenario, id),
            step.status_of(id).as_str(),
            fmt_distance(distance),
            prev
        );
    }
    out
}

/// One-line summary of a finished run.
pub fn render_outcome(scenario: &Scenario, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Found { path, cost } => {
            let hops: Vec<String> = path.iter().map(|&n| label(scenario, n)).collect();
            format!("path: {}  (cost {cost:.1})", hops.join(" -> "))
        }
        Outcome::Unreachable => "no path: goal unreachable".to_owned(),
    }
}
