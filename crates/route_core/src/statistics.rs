use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::{Graph, NodeIndex};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    /// Heap entries dropped because a shorter distance was already known.
    pub stale_entries: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.stale_entries = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled ({} stale entries skipped) in {:?}",
            self.nodes_settled,
            self.stale_entries,
            self.duration.unwrap_or_default()
        )
    }
}

pub fn average_degree(g: &Graph) -> f64 {
    if g.num_nodes() == 0 {
        return 0.0;
    }
    let sum: usize = (0..g.num_nodes())
        .map(|node| g.degree(NodeIndex::new(node)))
        .sum();
    sum as f64 / g.num_nodes() as f64
}

/// Node with the most incident edges, ties resolved towards the lower index.
pub fn max_degree(g: &Graph) -> Option<(NodeIndex, usize)> {
    (0..g.num_nodes())
        .map(|node| (NodeIndex::new(node), g.degree(NodeIndex::new(node))))
        .fold(None, |best, (node, degree)| match best {
            Some((_, best_degree)) if best_degree >= degree => best,
            _ => Some((node, degree)),
        })
}
