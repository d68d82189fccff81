//! Text and Graphviz presentation of search results.
use std::fmt::Write;

use route_core::{
    error::RouteError,
    graph::{Graph, NodeIndex},
    search::shortest_path::{SearchResult, ShortestPath},
};
use rustc_hash::FxHashSet;

/// Renders the outcome of a query as user facing text.
pub fn route_text(
    g: &Graph,
    origin: &str,
    destination: &str,
    outcome: &Result<SearchResult, RouteError>,
) -> String {
    match outcome {
        Ok(SearchResult::Found(sp)) => {
            let mut out = format!(
                "Shortest path from {} to {}: {}\nTotal travel time: {} minutes",
                origin,
                destination,
                sp.names(g).join(" -> "),
                sp.weight
            );
            for (from, to, weight) in sp.legs() {
                let _ = write!(out, "\n  {} -> {}: {} min", name(g, from), name(g, to), weight);
            }
            out
        }
        Ok(SearchResult::Unreachable) => {
            format!("No path between {} and {}", origin, destination)
        }
        Err(err) => format!("Error: {}", err),
    }
}

/// Renders the whole graph in DOT with every edge labelled by its weight.
/// Nodes and edges of `path` are drawn red and bold.
pub fn dot(g: &Graph, path: Option<&ShortestPath>) -> String {
    let on_path: FxHashSet<(NodeIndex, NodeIndex)> = path
        .map(|sp| sp.legs().map(|(a, b, _)| ordered(a, b)).collect())
        .unwrap_or_default();
    let path_nodes: FxHashSet<NodeIndex> = path
        .map(|sp| sp.nodes.iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::from("graph neighborhoods {\n");
    out.push_str("    node [shape=ellipse, style=filled, fillcolor=lightblue];\n");

    for (i, node_name) in g.node_names().enumerate() {
        let _ = write!(out, "    {}", quote(node_name));
        if path_nodes.contains(&NodeIndex::new(i)) {
            out.push_str(" [fillcolor=salmon]");
        }
        out.push_str(";\n");
    }

    for edge in g.edges() {
        let _ = write!(
            out,
            "    {} -- {} [label=\"{}\"",
            quote(name(g, edge.source)),
            quote(name(g, edge.target)),
            edge.weight
        );
        if on_path.contains(&ordered(edge.source, edge.target)) {
            out.push_str(", color=red, penwidth=4");
        }
        out.push_str("];\n");
    }

    out.push_str("}\n");
    out
}

/// Numbered list of the selectable neighborhoods.
pub fn node_list(g: &Graph) -> String {
    g.node_names()
        .enumerate()
        .map(|(i, node_name)| format!("{:>3}  {}", i, node_name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn name(g: &Graph, node: NodeIndex) -> &str {
    g.name(node).unwrap_or("?")
}

fn ordered(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
