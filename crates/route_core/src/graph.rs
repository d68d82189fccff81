use crate::constants::Weight;
use crate::error::RouteError;
use anyhow::{bail, Context};
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{fmt, path::Path};

/// Node identifier. Nodes are numbered in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Undirected edge. Stored once and listed in the adjacency of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint opposite to `node`.
    #[inline]
    pub fn other(&self, node: NodeIndex) -> NodeIndex {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Immutable, undirected, weighted graph of named nodes.
///
/// Construct it with [`GraphBuilder`], [`Graph::from_adjacency`] or
/// [`Graph::from_csv`]. Once built there is no way to mutate it, so a single
/// instance can be shared between any number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    name_index: FxHashMap<String, NodeIndex>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl Graph {
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Looks up the index of the node called `name`.
    pub fn node_index(&self, name: &str) -> Result<NodeIndex, RouteError> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::UnknownNode(name.to_owned()))
    }

    pub fn name(&self, node: NodeIndex) -> Option<&str> {
        self.names.get(node.index()).map(String::as_str)
    }

    /// Node names in insertion order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.adjacency.get(node.index()).map_or(0, Vec::len)
    }

    /// Weight of the edge between `a` and `b`, if they are adjacent.
    pub fn edge_weight(&self, a: NodeIndex, b: NodeIndex) -> Option<Weight> {
        self.adjacent(a)
            .find(|(neighbor, _)| *neighbor == b)
            .map(|(_, weight)| weight)
    }

    /// Neighbors of the node called `name` together with the connecting edge
    /// weight.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, Weight)>, RouteError> {
        let node = self.node_index(name)?;
        Ok(self
            .adjacent(node)
            .map(|(neighbor, weight)| (self.names[neighbor.index()].as_str(), weight))
            .collect())
    }

    /// Index based adjacency used by the search. Yields nothing for an index
    /// outside the graph.
    pub fn adjacent(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency
            .get(node.index())
            .into_iter()
            .flatten()
            .map(move |edge_idx| {
                let edge = &self.edges[edge_idx.index()];
                (edge.other(node), edge.weight)
            })
    }

    /// Builds a graph from a nested neighbor table, `node -> [(neighbor, weight)]`.
    ///
    /// Every entry has to be mirrored by its reverse with the same weight,
    /// otherwise [`RouteError::AsymmetricEdge`] is returned. Nodes are numbered
    /// in the order their rows appear.
    pub fn from_adjacency<I, A, S, T>(adjacency: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (S, A)>,
        A: IntoIterator<Item = (T, Weight)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut builder = GraphBuilder::new();
        let mut arcs: Vec<(String, String, Weight)> = Vec::new();

        for (name, neighbors) in adjacency {
            let name = name.as_ref();
            builder.add_node(name);
            for (neighbor, weight) in neighbors {
                let neighbor = neighbor.as_ref();
                check_weight(name, neighbor, weight)?;
                arcs.push((name.to_owned(), neighbor.to_owned(), weight));
            }
        }

        let directed: FxHashMap<(&str, &str), Weight> = arcs
            .iter()
            .map(|(from, to, weight)| ((from.as_str(), to.as_str()), *weight))
            .collect();

        for (from, to, weight) in &arcs {
            match directed.get(&(to.as_str(), from.as_str())) {
                Some(reverse) if reverse == weight => {}
                _ => {
                    return Err(RouteError::AsymmetricEdge {
                        from: from.clone(),
                        to: to.clone(),
                    })
                }
            }
            builder.add_edge(from, to, *weight)?;
        }

        Ok(builder.build())
    }

    /// Loads a graph from two CSV files.
    ///
    /// The node file has a `name` column, the edge file `source,target,weight`.
    /// Every edge is undirected and must reference nodes of the node file.
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        info!(
            "Loading graph from {:?} and {:?}",
            path_to_nodes, path_to_edges
        );

        let mut builder = GraphBuilder::new();

        let mut reader = csv::Reader::from_path(path_to_nodes)
            .with_context(|| format!("Could not open {:?}", path_to_nodes))?;
        for result in reader.deserialize() {
            let record: NodeRecord = result.context("Failed to parse Node")?;
            builder.add_node(record.name.trim());
        }

        let mut reader = csv::Reader::from_path(path_to_edges)
            .with_context(|| format!("Could not open {:?}", path_to_edges))?;
        for result in reader.deserialize() {
            let record: EdgeRecord = result.context("Failed to parse Edge")?;
            let (source, target) = (record.source.trim(), record.target.trim());
            for endpoint in [source, target] {
                if !builder.contains_node(endpoint) {
                    bail!(
                        "Edge {} - {} references unknown node {:?}",
                        source,
                        target,
                        endpoint
                    );
                }
            }
            builder
                .add_edge(source, target, record.weight)
                .with_context(|| format!("Invalid edge {} - {}", source, target))?;
        }

        let g = builder.build();
        info!("{}", g);
        Ok(g)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph: #Nodes: {}, #Edges: {}",
            self.num_nodes(),
            self.num_edges()
        )
    }
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: Weight,
}

fn check_weight(from: &str, to: &str, weight: Weight) -> Result<(), RouteError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(RouteError::InvalidWeight {
            from: from.to_owned(),
            to: to.to_owned(),
            weight,
        })
    }
}

/// Collects nodes and edges and freezes them into a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.graph.contains_node(name)
    }

    /// Adds a node called `name`. Adding an existing name returns its index.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(node) = self.graph.name_index.get(name) {
            return *node;
        }

        let node = NodeIndex::new(self.graph.names.len());
        self.graph.names.push(name.to_owned());
        self.graph.name_index.insert(name.to_owned(), node);
        // Create new entry in adjacency list for new node
        self.graph.adjacency.push(Vec::new());
        node
    }

    /// Adds an undirected edge, creating missing endpoints.
    ///
    /// If the two nodes are already connected only the lower weight is kept
    /// and the index of the existing edge is returned.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<EdgeIndex, RouteError> {
        check_weight(a, b, weight)?;

        let source = self.add_node(a);
        let target = self.add_node(b);

        let graph = &mut self.graph;
        let existing = graph.adjacency[source.index()]
            .iter()
            .copied()
            .find(|edge_idx| graph.edges[edge_idx.index()].connects(source, target));

        if let Some(edge_idx) = existing {
            let edge = &mut graph.edges[edge_idx.index()];
            if weight < edge.weight {
                debug!(
                    "Lowering weight of edge {} - {} from {} to {}",
                    a, b, edge.weight, weight
                );
                edge.weight = weight;
            }
            return Ok(edge_idx);
        }

        let edge_idx = EdgeIndex::new(graph.edges.len());
        graph.edges.push(Edge::new(source, target, weight));
        graph.adjacency[source.index()].push(edge_idx);
        if source != target {
            graph.adjacency[target.index()].push(edge_idx);
        }

        Ok(edge_idx)
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}
