use crate::graph::{Graph, GraphBuilder};

/// Builds an undirected graph from `(a, b, weight)` triples.
///
/// **Panics** on an invalid weight, meant for tests and benchmarks only.
pub fn graph_from_edges(edges: &[(&str, &str, f64)]) -> Graph {
    let mut b = GraphBuilder::new();
    for (a, c, weight) in edges {
        b.add_edge(a, c, *weight)
            .unwrap_or_else(|err| panic!("invalid test edge: {err}"));
    }
    b.build()
}

/// Two components without any edge in between.
///
/// A - B - C     X - Y
///  \     /
///   --D--
pub fn generate_two_components() -> Graph {
    graph_from_edges(&[
        ("A", "B", 2.0),
        ("B", "C", 2.0),
        ("A", "D", 1.0),
        ("D", "C", 4.0),
        ("X", "Y", 3.0),
    ])
}

pub fn generate_complex_graph() -> Graph {
    graph_from_edges(&[
        ("A", "B", 3.0),
        ("A", "C", 5.0),
        ("A", "K", 3.0),
        ("B", "D", 5.0),
        ("B", "C", 3.0),
        ("C", "D", 2.0),
        ("C", "J", 2.0),
        ("D", "J", 4.0),
        ("D", "E", 7.0),
        ("E", "J", 3.0),
        ("E", "F", 6.0),
        ("F", "H", 2.0),
        ("F", "G", 4.0),
        ("G", "H", 3.0),
        ("G", "I", 5.0),
        ("H", "I", 3.0),
        ("H", "J", 2.0),
        ("I", "J", 4.0),
        ("I", "K", 6.0),
        ("J", "K", 3.0),
    ])
}
