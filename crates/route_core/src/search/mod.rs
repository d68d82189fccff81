use crate::{
    constants::Weight,
    error::RouteError,
    graph::{Graph, NodeIndex},
};

use self::{
    dijkstra::Dijkstra,
    shortest_path::{SearchResult, ShortestPath},
};

pub mod dijkstra;
pub mod shortest_path;

/// Shortest path between the nodes called `origin` and `destination`.
///
/// Fails with [`RouteError::UnknownNode`] if either name is not part of
/// `graph`; the origin is checked first.
pub fn shortest_path(
    graph: &Graph,
    origin: &str,
    destination: &str,
) -> Result<SearchResult, RouteError> {
    let source = graph.node_index(origin)?;
    let target = graph.node_index(destination)?;
    Dijkstra::new(graph).search(source, target)
}

/// Walks the predecessor links from `target` back to `source`.
///
/// Returns `None` if the chain breaks before reaching `source`.
pub(crate) fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    predecessor: &[Option<(NodeIndex, Weight)>],
    weight: Weight,
) -> Option<ShortestPath> {
    let mut path = vec![target];
    let mut leg_weights = Vec::new();

    let mut current = target;
    while current != source {
        let (prev_node, leg_weight) = (*predecessor.get(current.index())?)?;
        path.push(prev_node);
        leg_weights.push(leg_weight);
        current = prev_node;
    }

    path.reverse();
    leg_weights.reverse();
    Some(ShortestPath::new(path, leg_weights, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(result: Result<SearchResult, RouteError>) {
    assert_eq!(Ok(SearchResult::Unreachable), result);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    result: Result<SearchResult, RouteError>,
) {
    let sp = match result {
        Ok(SearchResult::Found(sp)) => sp,
        other => panic!("expected a path, got {:?}", other),
    };
    let nodes: Vec<usize> = sp.nodes.iter().map(|node| node.index()).collect();
    assert_eq!(expected_path, nodes);
    approx::assert_abs_diff_eq!(expected_weight, sp.weight, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(sp.weight, sp.leg_weights.iter().sum::<Weight>(), epsilon = 1e-9);
}
