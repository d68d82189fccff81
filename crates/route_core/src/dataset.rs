//! Reference road network of João Pessoa neighborhoods.
//!
//! Weights are travel times in minutes. Every road is listed from both
//! sides, the way the table is maintained by hand.
use crate::{constants::Weight, error::RouteError, graph::Graph};

type Row = (&'static str, &'static [(&'static str, Weight)]);

pub const JOAO_PESSOA: &[Row] = &[
    ("Tambaú", &[("Manaíra", 5.0), ("Cabo Branco", 7.0), ("Centro", 12.0)]),
    ("Manaíra", &[("Tambaú", 5.0), ("Bessa", 10.0), ("Brisamar", 8.0)]),
    ("Bessa", &[("Manaíra", 10.0), ("Aeroclube", 7.0)]),
    ("Cabo Branco", &[("Tambaú", 7.0), ("Altiplano", 5.0)]),
    ("Altiplano", &[("Cabo Branco", 5.0), ("Miramar", 10.0)]),
    ("Miramar", &[("Altiplano", 10.0), ("Torre", 7.0)]),
    ("Torre", &[("Miramar", 7.0), ("Jaguaribe", 6.0), ("Centro", 10.0)]),
    ("Centro", &[("Tambaú", 12.0), ("Torre", 10.0), ("Jaguaribe", 8.0)]),
    ("Jaguaribe", &[("Centro", 8.0), ("Torre", 6.0), ("Cristo Redentor", 12.0)]),
    ("Cristo Redentor", &[("Jaguaribe", 12.0), ("Bancários", 10.0)]),
    ("Bancários", &[("Cristo Redentor", 10.0), ("Mangabeira", 7.0)]),
    ("Mangabeira", &[("Bancários", 7.0), ("Valentina", 12.0)]),
    ("Valentina", &[("Mangabeira", 12.0)]),
    ("Brisamar", &[("Manaíra", 8.0), ("Aeroclube", 5.0)]),
    ("Aeroclube", &[("Bessa", 7.0), ("Brisamar", 5.0)]),
];

/// Builds the João Pessoa graph from [`JOAO_PESSOA`].
pub fn joao_pessoa() -> Result<Graph, RouteError> {
    Graph::from_adjacency(
        JOAO_PESSOA
            .iter()
            .map(|&(name, roads)| (name, roads.iter().copied())),
    )
}
