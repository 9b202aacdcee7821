use colored::*;
use shortest_route::graph::generators::reference_graph;
use shortest_route::{DirectedGraph, FrontierStrategy, PathEngine, WeightedGraph};

fn print_graph(graph: &DirectedGraph<i64>) {
    println!("{}", "Reference graph".bright_cyan().bold());
    for v in 0..graph.vertex_count() {
        let heads: Vec<String> = graph
            .edges(v)
            .unwrap_or(&[])
            .iter()
            .map(|e| format!("{}({})", e.to, e.weight))
            .collect();
        println!("  {} -> {}", v.to_string().bright_white().bold(), heads.join(", "));
    }
}

fn show_route(engine: &PathEngine, graph: &DirectedGraph<i64>, source: usize, sink: usize) {
    match engine.route(graph, source, sink) {
        Ok(Some(route)) => {
            let hops: Vec<String> = route
                .path
                .iter()
                .map(|v| v.to_string().bright_yellow().bold().to_string())
                .collect();
            println!(
                "  {} {} -> {}: {}  (cost {})",
                "✅".bright_green(),
                source,
                sink,
                hops.join(" → "),
                route.cost.to_string().bright_green()
            );
        }
        Ok(None) => println!(
            "  {} {} -> {}: {}",
            "∅".bright_red(),
            source,
            sink,
            "no path".red()
        ),
        Err(err) => println!("  {} {} -> {}: {}", "✗".red().bold(), source, sink, err),
    }
}

fn main() {
    let graph = reference_graph();
    print_graph(&graph);

    for strategy in [
        FrontierStrategy::Indexed,
        FrontierStrategy::Lazy,
        FrontierStrategy::LinearScan,
    ] {
        println!("\n{} {:?}", "Frontier:".bright_magenta().bold(), strategy);
        let engine = PathEngine::new().with_strategy(strategy);
        show_route(&engine, &graph, 0, 7);
        show_route(&engine, &graph, 7, 0);
        show_route(&engine, &graph, 3, 3);
        show_route(&engine, &graph, 0, 8);
    }

    println!("\n{}", "Reversed edges".bright_cyan().bold());
    show_route(&PathEngine::new(), &graph.reversed(), 7, 0);
}
