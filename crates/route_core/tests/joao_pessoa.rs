use approx::assert_abs_diff_eq;
use route_core::prelude::*;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_graph() -> Graph {
    dataset::joao_pessoa().expect("reference dataset is valid")
}

fn route(g: &Graph, origin: &str, destination: &str) -> ShortestPath {
    search::shortest_path(g, origin, destination)
        .unwrap()
        .into_path()
        .unwrap_or_else(|| panic!("{} -> {} should be reachable", origin, destination))
}

/// Minimum weight over every simple path, found by exhaustive depth first search.
fn brute_force_weight(g: &Graph, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
    fn walk(
        g: &Graph,
        node: NodeIndex,
        target: NodeIndex,
        visited: &mut Vec<bool>,
        weight: Weight,
        best: &mut Option<Weight>,
    ) {
        if node == target {
            if best.map_or(true, |b| weight < b) {
                *best = Some(weight);
            }
            return;
        }
        for (neighbor, w) in g.adjacent(node) {
            if !visited[neighbor.index()] {
                visited[neighbor.index()] = true;
                walk(g, neighbor, target, visited, weight + w, best);
                visited[neighbor.index()] = false;
            }
        }
    }

    let mut visited = vec![false; g.num_nodes()];
    visited[source.index()] = true;
    let mut best = None;
    walk(g, source, target, &mut visited, 0.0, &mut best);
    best
}

#[test]
fn tambau_to_mangabeira() {
    init_log();
    let g = reference_graph();

    let sp = route(&g, "Tambaú", "Mangabeira");

    assert_eq!(
        sp.names(&g),
        vec![
            "Tambaú",
            "Centro",
            "Jaguaribe",
            "Cristo Redentor",
            "Bancários",
            "Mangabeira"
        ]
    );
    assert_abs_diff_eq!(sp.weight, 49.0);
    assert_eq!(sp.leg_weights, vec![12.0, 8.0, 12.0, 10.0, 7.0]);
}

#[test]
fn valentina_and_tambau_agree() {
    let g = reference_graph();

    let there = route(&g, "Valentina", "Tambaú");
    let back = route(&g, "Tambaú", "Valentina");

    assert_abs_diff_eq!(there.weight, 61.0);
    assert_abs_diff_eq!(there.weight, back.weight);
    assert_eq!(
        there.names(&g),
        vec![
            "Valentina",
            "Mangabeira",
            "Bancários",
            "Cristo Redentor",
            "Jaguaribe",
            "Centro",
            "Tambaú"
        ]
    );
}

#[test]
fn short_detours() {
    let g = reference_graph();

    let sp = route(&g, "Bessa", "Brisamar");
    assert_eq!(sp.names(&g), vec!["Bessa", "Aeroclube", "Brisamar"]);
    assert_abs_diff_eq!(sp.weight, 12.0);

    let sp = route(&g, "Tambaú", "Torre");
    assert_eq!(sp.names(&g), vec!["Tambaú", "Centro", "Torre"]);
    assert_abs_diff_eq!(sp.weight, 22.0);
}

#[test]
fn same_origin_and_destination() {
    let g = reference_graph();

    for name in g.node_names() {
        let result = search::shortest_path(&g, name, name).unwrap();
        let node = g.node_index(name).unwrap();
        assert_eq!(result, SearchResult::Found(ShortestPath::trivial(node)));
        assert_eq!(result.weight(), Some(0.0));
    }
}

#[test]
fn unknown_neighborhood() {
    let g = reference_graph();

    assert_eq!(
        search::shortest_path(&g, "Recife", "Tambaú"),
        Err(RouteError::UnknownNode("Recife".to_string()))
    );
    assert_eq!(
        search::shortest_path(&g, "Tambaú", "tambaú"),
        Err(RouteError::UnknownNode("tambaú".to_string()))
    );
    assert!(matches!(
        g.neighbors("Olinda"),
        Err(RouteError::UnknownNode(_))
    ));
}

/// Checks endpoints, leg weights, optimality and symmetry of one query.
fn check_pair(g: &Graph, a: NodeIndex, b: NodeIndex) {
    let mut dijkstra = Dijkstra::new(g);

    let ab = dijkstra.search(a, b).unwrap();
    let ba = dijkstra.search(b, a).unwrap();
    let expected = brute_force_weight(g, a, b);

    let sp_ab = match (ab.into_path(), expected) {
        (Some(sp), Some(_)) => sp,
        (None, None) => {
            assert_eq!(ba, SearchResult::Unreachable);
            return;
        }
        (found, expected) => panic!(
            "{} -> {}: search found {:?}, brute force {:?}",
            a, b, found, expected
        ),
    };

    // Endpoints
    assert_eq!(sp_ab.nodes.first(), Some(&a));
    assert_eq!(sp_ab.nodes.last(), Some(&b));

    // Weight is the sum of the edges along the path
    let mut sum = 0.0;
    for (from, to, leg) in sp_ab.legs() {
        let weight = g.edge_weight(from, to).expect("consecutive nodes are adjacent");
        assert_abs_diff_eq!(weight, leg);
        sum += weight;
    }
    assert_abs_diff_eq!(sum, sp_ab.weight, epsilon = 1e-9);

    // Optimal and symmetric
    assert_abs_diff_eq!(sp_ab.weight, expected.unwrap_or_default(), epsilon = 1e-9);
    let sp_ba = ba.into_path().expect("reverse direction is reachable");
    assert_abs_diff_eq!(sp_ab.weight, sp_ba.weight, epsilon = 1e-9);
}

#[test]
fn every_pair_is_optimal_valid_and_symmetric() {
    init_log();
    let g = reference_graph();
    let num_nodes = g.num_nodes();

    let mut checked = 0;
    for a in 0..num_nodes {
        for b in 0..num_nodes {
            check_pair(&g, node_index(a), node_index(b));
            checked += 1;
        }
    }

    assert_eq!(checked, 15 * 15);
}

#[test]
fn random_graphs_match_brute_force() {
    init_log();
    const NUM_NODES: usize = 7;

    let mut runner = proptest::test_runner::TestRunner::default();
    let edges = proptest::collection::vec((0..NUM_NODES, 0..NUM_NODES, 0u32..20), 0..14);

    runner
        .run(&edges, |edges| {
            let mut b = GraphBuilder::new();
            for i in 0..NUM_NODES {
                b.add_node(&i.to_string());
            }
            for (from, to, weight) in edges {
                b.add_edge(&from.to_string(), &to.to_string(), weight as Weight)
                    .unwrap();
            }
            let g = b.build();

            for a in 0..NUM_NODES {
                for c in 0..NUM_NODES {
                    check_pair(&g, node_index(a), node_index(c));
                }
            }
            Ok(())
        })
        .unwrap();
}
