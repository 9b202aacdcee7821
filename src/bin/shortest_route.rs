use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, ValueEnum};
use log::error;

use shortest_route::graph::{generators, loader};
use shortest_route::{DirectedGraph, FrontierStrategy, PathEngine, WeightedGraph};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Indexed,
    Lazy,
    LinearScan,
}

impl From<StrategyArg> for FrontierStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Indexed => FrontierStrategy::Indexed,
            StrategyArg::Lazy => FrontierStrategy::Lazy,
            StrategyArg::LinearScan => FrontierStrategy::LinearScan,
        }
    }
}

/// Find the lowest-cost path between two vertices of a weighted directed graph
#[derive(Debug, Parser)]
#[command(name = "shortest_route", version)]
#[command(group(ArgGroup::new("input").required(true).args(["graph", "reference"])))]
struct Cli {
    /// JSON graph document (adjacency or edge-list form)
    #[arg(long, short, env = "SHORTEST_ROUTE_GRAPH")]
    graph: Option<PathBuf>,

    /// Use the built-in 8-vertex reference graph
    #[arg(long)]
    reference: bool,

    /// Search along reversed edges
    #[arg(long)]
    reverse: bool,

    /// Start vertex
    #[arg(long, short)]
    source: usize,

    /// Target vertex
    #[arg(long, short = 't')]
    sink: usize,

    /// Frontier queue implementation
    #[arg(long, value_enum, default_value = "indexed")]
    strategy: StrategyArg,

    /// Keep searching after the sink is finalized
    #[arg(long)]
    no_early_exit: bool,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

fn load_graph(cli: &Cli) -> shortest_route::Result<DirectedGraph<i64>> {
    let graph = match &cli.graph {
        Some(path) => loader::from_path(path)?,
        // The input group leaves --reference as the only alternative
        None => generators::reference_graph(),
    };
    Ok(if cli.reverse { graph.reversed() } else { graph })
}

fn run(cli: &Cli) -> shortest_route::Result<()> {
    let graph = load_graph(cli)?;
    let engine = PathEngine::new()
        .with_strategy(cli.strategy.into())
        .with_early_exit(!cli.no_early_exit);

    let route = engine.route(&graph, cli.source, cli.sink)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    match route {
        Some(route) => {
            let hops: Vec<String> = route.path.iter().map(|v| v.to_string()).collect();
            println!("{}", hops.join(" -> "));
            println!("cost: {}", route.cost);
        }
        None => println!(
            "no path from {} to {} ({} vertices, {} edges)",
            cli.source,
            cli.sink,
            graph.vertex_count(),
            graph.edge_count()
        ),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
