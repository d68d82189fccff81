use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use route_core::{dataset, graph::Graph};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file with one `name` column listing the neighborhoods
    #[arg(long, value_name = "nodes.csv", requires = "edges")]
    nodes: Option<PathBuf>,

    /// CSV file with `source,target,weight` roads (minutes)
    #[arg(long, value_name = "edges.csv", requires = "nodes")]
    edges: Option<PathBuf>,

    /// File to keep the command history in
    #[arg(long, default_value = "history")]
    history: PathBuf,

    /// Number of history entries to keep
    #[arg(long, default_value_t = 100)]
    history_size: usize,
}

/// Where the graph is loaded from.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    /// Built-in João Pessoa table
    Reference,
    Csv { nodes: PathBuf, edges: PathBuf },
}

impl GraphSource {
    pub fn load(&self) -> anyhow::Result<Graph> {
        match self {
            GraphSource::Reference => {
                dataset::joao_pessoa().context("Reference dataset is inconsistent")
            }
            GraphSource::Csv { nodes, edges } => Graph::from_csv(nodes, edges),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub source: GraphSource,
    pub history: PathBuf,
    pub history_size: usize,
}

pub fn parse() -> Cfg {
    Cfg::from(Cli::parse())
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        let source = match (cli.nodes, cli.edges) {
            (Some(nodes), Some(edges)) => GraphSource::Csv { nodes, edges },
            _ => GraphSource::Reference,
        };

        Cfg {
            source,
            history: cli.history,
            history_size: cli.history_size,
        }
    }
}
