//! Shortest routes between neighborhoods of a city.
//!
//! A [`Graph`] is built once, from the reference dataset, a CSV export or a
//! [`GraphBuilder`], and then queried with Dijkstra's algorithm.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Reference road network, travel times in minutes
//! let g = dataset::joao_pessoa().expect("Reference dataset is valid");
//!
//! let result = search::shortest_path(&g, "Tambaú", "Mangabeira").unwrap();
//!
//! if let SearchResult::Found(sp) = result {
//!     println!("{} ({} minutes)", sp.names(&g).join(" -> "), sp.weight);
//! }
//!```
//! [`Graph`]: crate::graph::Graph
//! [`GraphBuilder`]: crate::graph::GraphBuilder
pub mod constants;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
