//! Re-exports of the most commonly used items in `route_core`.
pub use crate::constants::Weight;
pub use crate::dataset;
pub use crate::error::RouteError;
pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::{SearchResult, ShortestPath};

pub use crate::graph::node_index;
pub use crate::graph::{Graph, GraphBuilder, NodeIndex};
