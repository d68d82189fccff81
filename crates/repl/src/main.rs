//! Interactive route planner for the neighborhood graph
use std::time::Duration;

use anyhow::anyhow;
use log::info;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::{
    error::RouteError,
    graph::{Graph, NodeIndex},
    search::{dijkstra::Dijkstra, shortest_path::SearchResult},
    statistics,
};

mod cli;
mod render;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let mut out = format!(
        "Graph has {} neighborhoods and {} roads, average degree {:.2}",
        g.num_nodes(),
        g.num_edges(),
        statistics::average_degree(g)
    );
    if let Some((node, degree)) = statistics::max_degree(g) {
        out.push_str(&format!(
            "\nBest connected: {} ({} roads)",
            g.name(node).unwrap_or("?"),
            degree
        ));
    }
    Ok(Some(out))
}

fn list_nodes(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(render::node_list(&context.graph)))
}

fn neighbors(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let node = match resolve(g, arg(&args, "node")) {
        Ok(node) => node,
        Err(err) => return Ok(Some(format!("Error: {}", err))),
    };
    let name = g.name(node).unwrap_or("?");

    let out = match g.neighbors(name) {
        Ok(neighbors) => neighbors
            .iter()
            .map(|(neighbor, weight)| format!("{} -> {}: {} min", name, neighbor, weight))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err) => format!("Error: {}", err),
    };
    Ok(Some(out))
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let (origin, destination) = (arg(&args, "origin"), arg(&args, "destination"));

    let outcome = search(g, origin, destination);
    let (origin, destination) = display_names(g, origin, destination);
    Ok(Some(render::route_text(g, origin, destination, &outcome)))
}

fn draw(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let (origin, destination) = (arg(&args, "origin"), arg(&args, "destination"));

    let outcome = search(g, origin, destination);
    let dot = match &outcome {
        Ok(result) => render::dot(g, result.path()),
        Err(err) => return Ok(Some(format!("Error: {}", err))),
    };

    match args.get_one::<String>("output") {
        Some(file) => match std::fs::write(file, &dot) {
            Ok(()) => {
                let (origin, destination) = display_names(g, origin, destination);
                let summary = render::route_text(g, origin, destination, &outcome);
                Ok(Some(format!("{}\nWrote graph to {}", summary, file)))
            }
            Err(err) => Ok(Some(format!("Could not write {}: {}", file, err))),
        },
        None => Ok(Some(dot)),
    }
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let g = &context.graph;
    if g.num_nodes() == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let pairs: Vec<(NodeIndex, NodeIndex)> = (0..n)
        .map(|_| {
            (
                NodeIndex::new(rng.gen_range(0..g.num_nodes())),
                NodeIndex::new(rng.gen_range(0..g.num_nodes())),
            )
        })
        .collect();

    let mut res = String::new();
    let mut total = Duration::ZERO;
    let mut dijkstra = Dijkstra::new(g);
    // Run Dijkstra for each pair of nodes
    for (src, dst) in pairs {
        let found = dijkstra
            .search(src, dst)
            .map_or(false, |result| result.is_found());
        let duration = dijkstra.stats.duration.unwrap_or_default();
        total += duration;
        res.push_str(&format!(
            "{} -> {}: {:?} ({} settled{})\n",
            g.name(src).unwrap_or("?"),
            g.name(dst).unwrap_or("?"),
            duration,
            dijkstra.stats.nodes_settled,
            if found { "" } else { ", no path" }
        ));
    }
    res.push_str(&format!("Total: {:?} for {} queries", total, n));

    Ok(Some(res))
}

fn arg<'a>(args: &'a ArgMatches, id: &str) -> &'a str {
    args.get_one::<String>(id).map_or("", String::as_str)
}

/// Resolves user input to a node: exact name first, then the position shown
/// by `nodes`, then a case insensitive name match.
fn resolve(g: &Graph, input: &str) -> std::result::Result<NodeIndex, RouteError> {
    let input = input.trim();
    if let Ok(node) = g.node_index(input) {
        return Ok(node);
    }
    if let Ok(position) = input.parse::<usize>() {
        if position < g.num_nodes() {
            return Ok(NodeIndex::new(position));
        }
    }

    let lowercase = input.to_lowercase();
    let mut matches = g
        .node_names()
        .filter(|name| name.to_lowercase() == lowercase);
    match (matches.next(), matches.next()) {
        (Some(name), None) => g.node_index(name),
        _ => Err(RouteError::UnknownNode(input.to_owned())),
    }
}

fn search(
    g: &Graph,
    origin: &str,
    destination: &str,
) -> std::result::Result<SearchResult, RouteError> {
    let source = resolve(g, origin)?;
    let target = resolve(g, destination)?;
    Dijkstra::new(g).search(source, target)
}

/// Canonical names for what the user typed, falling back to the raw input.
fn display_names<'a>(g: &'a Graph, origin: &'a str, destination: &'a str) -> (&'a str, &'a str) {
    let canonical = |input: &'a str| {
        resolve(g, input)
            .ok()
            .and_then(|node| g.name(node))
            .unwrap_or(input)
    };
    (canonical(origin), canonical(destination))
}

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn endpoint(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).required(true).help(help)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    // Init Graph
    let graph = cfg.source.load()?;
    info!("{}", graph);
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Rotas")
        .with_version("v0.1.0")
        .with_description("Shortest routes between neighborhoods")
        .with_banner("Welcome to Rotas. Quote names with spaces, e.g. route \"Cabo Branco\" Torre")
        .with_history(cfg.history, cfg.history_size)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("nodes").about("List the neighborhoods with their numbers"),
            list_nodes,
        )
        .with_command(
            Command::new("neighbors")
                .arg(endpoint("node", "Name or number of the neighborhood"))
                .about("List the roads leaving a neighborhood"),
            neighbors,
        )
        .with_command(
            Command::new("route")
                .arg(endpoint("origin", "Name or number of the origin"))
                .arg(endpoint("destination", "Name or number of the destination"))
                .about("Calculate the shortest path using Dijkstra's algorithm"),
            route,
        )
        .with_command(
            Command::new("dot")
                .arg(endpoint("origin", "Name or number of the origin"))
                .arg(endpoint("destination", "Name or number of the destination"))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the DOT document to this file"),
                )
                .about("Draw the graph in Graphviz DOT with the shortest path highlighted"),
            draw,
        )
        .with_command(
            Command::new("bench")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        );

    repl.run().map_err(|err| anyhow!("REPL terminated: {}", err))
}
