use crate::{
    constants::Weight,
    graph::{Graph, NodeIndex},
};

/// Minimum weight path from the first to the last entry of `nodes`.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    /// Weight of each edge along the path; one entry less than `nodes`.
    pub leg_weights: Vec<Weight>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, leg_weights: Vec<Weight>, weight: Weight) -> Self {
        ShortestPath {
            nodes,
            leg_weights,
            weight,
        }
    }

    /// Zero weight path consisting only of `node`.
    pub fn trivial(node: NodeIndex) -> Self {
        ShortestPath::new(vec![node], Vec::new(), 0.0)
    }

    /// Names of the nodes along the path.
    pub fn names<'g>(&self, g: &'g Graph) -> Vec<&'g str> {
        self.nodes.iter().filter_map(|node| g.name(*node)).collect()
    }

    /// Consecutive `(from, to, weight)` steps of the path.
    pub fn legs(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, Weight)> + '_ {
        self.nodes
            .windows(2)
            .zip(self.leg_weights.iter())
            .map(|(pair, weight)| (pair[0], pair[1], *weight))
    }
}

/// Outcome of a single origin to destination query.
#[derive(Debug, PartialEq, Clone)]
pub enum SearchResult {
    Found(ShortestPath),
    Unreachable,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            SearchResult::Found(sp) => Some(sp),
            SearchResult::Unreachable => None,
        }
    }

    pub fn weight(&self) -> Option<Weight> {
        self.path().map(|sp| sp.weight)
    }

    pub fn into_path(self) -> Option<ShortestPath> {
        match self {
            SearchResult::Found(sp) => Some(sp),
            SearchResult::Unreachable => None,
        }
    }
}

impl From<Option<ShortestPath>> for SearchResult {
    fn from(sp: Option<ShortestPath>) -> Self {
        sp.map_or(SearchResult::Unreachable, SearchResult::Found)
    }
}
