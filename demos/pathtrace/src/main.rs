//! `pathtrace`: run a traced shortest-path search from the terminal.
//!
//! Loads a scenario (built-in preset, JSON file, or seeded random city), runs
//! the search in Dijkstra or A* mode, and prints the outcome.  Every step can
//! be replayed frame by frame or exported to CSV / JSON.
//!
//! Run with:
//!   cargo run -p pathtrace -- --preset complex --mode astar --replay
//!   cargo run -p pathtrace -- --random 7 --csv trace.csv
//!   cargo run -p pathtrace --release -- --compare 200
//!
//! Set RUST_LOG=pt_search=trace to see every relaxation.

mod compare;
mod playback;
mod render;


use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pt_core::{CostMultipliers, NodeId, RoadType};
use pt_output::{CsvStepWriter, JsonStepWriter, write_sequence};
use pt_scenario::{GeneratorConfig, Scenario, load_scenario_json, preset, random_scenario};
use pt_search::{SearchMode, SearchRequest, StepSequence, trace_search};

use compare::compare_random;
use playback::Playback;
use render::{render_outcome, render_step};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Dijkstra,
    Astar,
}

impl From<Mode> for SearchMode {
    fn from(mode: Mode) -> SearchMode {
        match mode {
            Mode::Dijkstra => SearchMode::Uninformed,
            Mode::Astar    => SearchMode::Informed,
        }
    }
}

/// Trace a shortest-path search over a road network.
#[derive(Parser, Debug)]
#[command(name = "pathtrace")]
#[command(group(ArgGroup::new("source").args(["preset", "scenario", "random"])))]
struct Args {
    /// Built-in scenario: city-grid or complex.
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Scenario JSON file.
    #[arg(long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Generate a random scenario from this seed.
    #[arg(long, value_name = "SEED")]
    random: Option<u64>,

    /// Node count for --random and --compare.
    #[arg(long, value_name = "N", default_value_t = 24)]
    nodes: usize,

    #[arg(long, value_enum, default_value_t = Mode::Dijkstra)]
    mode: Mode,

    /// Start node, by id or label.  Overrides the scenario's selection.
    #[arg(long, value_name = "NODE")]
    start: Option<String>,

    /// Goal node, by id or label.  Overrides the scenario's selection.
    #[arg(long, value_name = "NODE")]
    goal: Option<String>,

    #[arg(long, value_name = "X")]
    highway: Option<f64>,

    #[arg(long, value_name = "X")]
    city: Option<f64>,

    #[arg(long, value_name = "X")]
    dirt: Option<f64>,

    /// Write one row per step and node to this CSV file.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Write the full step sequence to this JSON file.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Print every step, not just the outcome.
    #[arg(long)]
    replay: bool,

    /// Pause between replayed frames.
    #[arg(long, value_name = "MS", default_value_t = 0)]
    frame_delay: u64,

    /// Compare both modes on N random scenarios (seeds from --random, default 1).
    #[arg(
        long,
        value_name = "N",
        conflicts_with_all = [
            "preset", "scenario", "mode", "start", "goal", "csv", "json", "replay", "frame_delay",
        ]
    )]
    compare: Option<usize>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load(args: &Args) -> Result<Scenario> {
    if let Some(path) = &args.scenario {
        return load_scenario_json(path).with_context(|| format!("loading {}", path.display()));
    }
    if let Some(seed) = args.random {
        return Ok(random_scenario(&GeneratorConfig {
            seed,
            node_count: args.nodes,
            ..GeneratorConfig::default()
        }));
    }
    let name = args.preset.as_deref().unwrap_or("complex");
    Ok(preset(name)?)
}

/// Resolve a `--start` / `--goal` value: a numeric id, else an exact label.
fn resolve_node(scenario: &Scenario, raw: &str) -> Result<NodeId> {
    if let Ok(id) = raw.parse::<u32>() {
        return Ok(NodeId(id));
    }
    match scenario.find_by_label(raw) {
        Some(node) => Ok(node.id),
        None => bail!("no node labelled {raw:?} in scenario {:?}", scenario.name),
    }
}

/// Apply `--highway` / `--city` / `--dirt` on top of `table`.
fn with_multiplier_overrides(mut table: CostMultipliers, args: &Args) -> Result<CostMultipliers> {
    let overrides = [
        (RoadType::Highway, args.highway),
        (RoadType::City, args.city),
        (RoadType::Dirt, args.dirt),
    ];
    for (road, value) in overrides {
        if let Some(v) = value {
            table.set(road, v);
        }
    }
    table.validate().context("cost multipliers")?;
    Ok(table)
}

/// Fold command-line overrides into the scenario.
fn apply_overrides(scenario: &mut Scenario, args: &Args) -> Result<()> {
    scenario.multipliers = with_multiplier_overrides(scenario.multipliers, args)?;

    if let Some(raw) = &args.start {
        scenario.start = Some(resolve_node(scenario, raw)?);
    }
    if let Some(raw) = &args.goal {
        scenario.goal = Some(resolve_node(scenario, raw)?);
    }
    Ok(())
}

fn replay(scenario: &Scenario, steps: &StepSequence, delay: Duration) {
    let mut cursor = Playback::new(steps.len());
    let show = |i: usize| {
        if let Some(step) = steps.get(i) {
            print!("{}", render_step(scenario, i, step));
        }
    };

    show(cursor.index());
    cursor.play();
    while let Some(i) = cursor.tick() {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        show(i);
    }
}

fn export(steps: &StepSequence, args: &Args) -> Result<()> {
    if let Some(path) = &args.csv {
        let mut w = CsvStepWriter::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_sequence(&mut w, steps).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "CSV trace written");
    }
    if let Some(path) = &args.json {
        let mut w = JsonStepWriter::create(path)
            .with_context(|| format!("creating {}", path.display()))?
            .pretty();
        write_sequence(&mut w, steps).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "JSON trace written");
    }
    Ok(())
}

fn run_compare(count: usize, args: &Args) -> Result<()> {
    let base = GeneratorConfig { node_count: args.nodes, ..GeneratorConfig::default() };
    let multipliers = with_multiplier_overrides(CostMultipliers::default(), args)?;

    let t0 = Instant::now();
    let results = compare_random(count, args.random.unwrap_or(1), &base, &multipliers)?;
    let elapsed = t0.elapsed();

    let mut mismatches = 0usize;
    let (mut settled_d, mut settled_a) = (0usize, 0usize);
    for c in &results {
        settled_d += c.uninformed_settled;
        settled_a += c.informed_settled;
        if !c.costs_agree() {
            mismatches += 1;
            warn!(seed = c.seed, dijkstra = ?c.uninformed, astar = ?c.informed, "modes disagree");
        } else if !c.paths_walk {
            mismatches += 1;
            warn!(seed = c.seed, "reported cost does not match the walked path");
        }
    }

    let total_nodes: usize = results.iter().map(|c| c.nodes).sum();
    println!("scenarios:        {} ({total_nodes} nodes)", results.len());
    println!("settled dijkstra: {settled_d}");
    println!("settled astar:    {settled_a}");
    println!("cost mismatches:  {mismatches}");
    println!("elapsed:          {:.2?}", elapsed);

    if mismatches > 0 {
        bail!("{mismatches} scenario(s) failed the cost checks");
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Some(count) = args.compare {
        return run_compare(count, &args);
    }

    let mut scenario = load(&args)?;
    apply_overrides(&mut scenario, &args)?;
    let (start, goal) = scenario.endpoints()?;
    let mode = SearchMode::from(args.mode);

    info!(
        scenario = %scenario.name,
        nodes = scenario.nodes.len(),
        edges = scenario.edges.len(),
        %mode,
        "running search"
    );

    let steps = trace_search(&SearchRequest {
        nodes: &scenario.nodes,
        edges: &scenario.edges,
        start,
        goal,
        mode,
        multipliers: &scenario.multipliers,
    });

    if args.replay {
        replay(&scenario, &steps, Duration::from_millis(args.frame_delay));
    }

    info!(steps = steps.len(), settled = steps.settled_count(), "search finished");
    println!("{}", render_outcome(&scenario, &steps.outcome()));

    export(&steps, &args)
}
