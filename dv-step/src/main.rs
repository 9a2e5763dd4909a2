use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{error, info};
use simplelog::*;
use dvroute::framework::{ProtocolParams, RoutingSystem};
use dvroute::sim::Simulation;
use crate::graph_parse::{parse_edge_list, parse_yaml, GraphFile};

mod dump;
mod graph_parse;

/// Node addresses are plain integers, costs are signed so that broken inputs can be diagnosed
pub struct GraphSystem;

impl RoutingSystem for GraphSystem {
    type NodeAddress = u32;
    type Metric = i64;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs distance-vector routing to convergence, one synchronous round at a time")]
struct Args {
    /// Topology file, YAML (.yaml/.yml) or an edge list with one `a b cost` link per line
    graph: PathBuf,
    /// Node whose table is printed every round, overrides `self` from the file
    #[arg(short, long)]
    node: Option<u32>,
    /// Print every node's table instead of a single node
    #[arg(short, long)]
    all: bool,
    /// Reject graphs where a link's weight differs per direction
    #[arg(long)]
    validate: bool,
    /// Give up after this many rounds per node
    #[arg(long)]
    max_round_factor: Option<usize>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn load(path: &Path) -> anyhow::Result<GraphFile> {
    let input = fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        parse_yaml(&input)
    } else {
        parse_edge_list(&input)
    };
    parsed.with_context(|| format!("Unable to parse {}", path.display()))
}

fn run(args: Args) -> anyhow::Result<()> {
    let file = load(&args.graph)?;
    let defaults = GraphSystem::config();
    let params = ProtocolParams {
        validate_symmetry: args.validate || file.validate.unwrap_or(defaults.validate_symmetry),
        max_round_factor: args
            .max_round_factor
            .or(file.max_round_factor)
            .unwrap_or(defaults.max_round_factor),
    };

    let node = match (args.all, args.node.or(file.node)) {
        (true, _) => None,
        (false, Some(node)) => Some(node),
        (false, None) => file.graph.nodes().next().copied(),
    };
    info!("Loaded {} nodes from {}", file.graph.len(), args.graph.display());

    let mut sim = Simulation::with_params(file.graph, params)?;
    if let Some(node) = &node {
        sim.table(node)?;
    }

    let format = args.format;
    let rounds = sim.run_with(|round, store| {
        let out = match (format, &node) {
            (Format::Text, None) => dump::AllTables { round, store }.to_string(),
            (Format::Json, None) => dump::json_all(round, store).to_string() + "\n",
            (_, Some(node)) => match store.get(node) {
                Ok(table) if format == Format::Text => dump::NodeTable { round, table }.to_string(),
                Ok(table) => dump::json_node(round, table).to_string() + "\n",
                Err(err) => {
                    error!("{err}");
                    return;
                }
            },
        };
        print!("{out}");
    })?;
    info!("converged after {rounds} rounds");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    CombinedLogger::init(vec![TermLogger::new(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;
    run(args)
}
