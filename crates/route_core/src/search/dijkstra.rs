use crate::constants::Weight;
use crate::error::RouteError;
use crate::graph::{Graph, NodeIndex};
use crate::priority_queue::{HeapItem, PriorityQueue};
use crate::search::shortest_path::{SearchResult, ShortestPath};
use crate::statistics::SearchStats;
use log::{debug, info};

/// Dijkstra search on a borrowed, immutable graph.
///
/// Every call to [`Dijkstra::search`] keeps its distances, predecessors and
/// frontier local, only `stats` is overwritten.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<SearchResult, RouteError> {
        for node in [source, target] {
            if node.index() >= self.g.num_nodes() {
                return Err(RouteError::UnknownNode(node.to_string()));
            }
        }

        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(SearchResult::Found(ShortestPath::trivial(source)));
        }

        let num_nodes = self.g.num_nodes();
        let mut best_distance: Vec<Weight> = vec![Weight::INFINITY; num_nodes];
        let mut predecessor: Vec<Option<(NodeIndex, Weight)>> = vec![None; num_nodes];
        let mut queue = PriorityQueue::new();

        best_distance[source.index()] = 0.0;
        queue.push(HeapItem::new(0.0, source));

        let mut result = SearchResult::Unreachable;

        while let Some(HeapItem { distance, node }) = queue.pop() {
            // Outdated duplicate of a node that was already settled
            if distance > best_distance[node.index()] {
                self.stats.stale_entries += 1;
                continue;
            }

            self.stats.nodes_settled += 1;

            if node == target {
                result = super::reconstruct_path(
                    target,
                    source,
                    &predecessor,
                    best_distance[target.index()],
                )
                .into();
                break;
            }

            for (neighbor, weight) in self.g.adjacent(node) {
                let new_distance = distance + weight;
                if new_distance < best_distance[neighbor.index()] {
                    best_distance[neighbor.index()] = new_distance;
                    predecessor[neighbor.index()] = Some((node, weight));
                    queue.push(HeapItem::new(new_distance, neighbor));
                }
            }
        }
        self.stats.finish();

        match &result {
            SearchResult::Found(sp) => {
                debug!("Path found: {:?}", sp.names(self.g));
                info!("Path found: weight {}, {}", sp.weight, self.stats);
            }
            SearchResult::Unreachable => {
                info!("No path found: {}", self.stats);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{node_index, GraphBuilder};
    use crate::search::{assert_no_path, assert_path};

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Builds a graph on nodes named "0".."n" so indices match names.
    fn numbered_graph(num_nodes: usize, edges: &[(usize, usize, Weight)]) -> Graph {
        let mut b = GraphBuilder::new();
        for i in 0..num_nodes {
            b.add_node(&i.to_string());
        }
        for (a, c, weight) in edges {
            b.add_edge(&a.to_string(), &c.to_string(), *weight).unwrap();
        }
        b.build()
    }

    #[test]
    fn simple_path() {
        //      7 - 8 - 9
        //      |       |
        // 0 -- 5 - 6 - |
        // |        | \ |
        // 1 - 2 -- 3 - 4
        init_log();
        let g = numbered_graph(
            10,
            &[
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 20.0),
                (0, 5, 5.0),
                (5, 6, 1.0),
                (6, 4, 20.0),
                (6, 3, 20.0),
                (5, 7, 5.0),
                (7, 8, 1.0),
                (8, 9, 1.0),
                (9, 4, 1.0),
            ],
        );

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 5, 7, 8, 9, 4], 13.0, d.search(node_index(0), node_index(4)));
        assert_path(vec![4, 9, 8, 7, 5, 0], 13.0, d.search(node_index(4), node_index(0)));
        assert_path(vec![6, 5, 0, 1, 2, 3], 9.0, d.search(node_index(6), node_index(3)));
        assert_path(vec![4], 0.0, d.search(node_index(4), node_index(4)));
        assert_path(vec![1, 0, 5, 7, 8, 9, 4], 14.0, d.search(node_index(1), node_index(4)));
    }

    #[test]
    fn disconnected_graph() {
        // 0 - 1 - 2
        // 3 - 4 - 5
        init_log();
        let g = numbered_graph(
            6,
            &[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 3.0), (4, 5, 1.0)],
        );

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(node_index(0), node_index(3)));
        assert_no_path(d.search(node_index(5), node_index(2)));
        assert_path(vec![0, 1, 2], 2.0, d.search(node_index(0), node_index(2)));
        assert_path(vec![3, 4, 5], 4.0, d.search(node_index(3), node_index(5)));
    }

    #[test]
    fn isolated_node() {
        let g = numbered_graph(3, &[(0, 1, 2.0)]);

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(node_index(2), node_index(0)));
        assert_path(vec![2], 0.0, d.search(node_index(2), node_index(2)));
    }

    #[test]
    fn go_around() {
        // 0 - 1
        // |   |
        // 2 - 3
        let g = numbered_graph(4, &[(0, 1, 10.0), (0, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)]);

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 2, 3, 1], 3.0, d.search(node_index(0), node_index(1)));
    }

    #[test]
    fn zero_weight_edges() {
        let g = numbered_graph(3, &[(0, 1, 0.0), (1, 2, 0.0)]);

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 1, 2], 0.0, d.search(node_index(0), node_index(2)));
        assert_path(vec![2, 1, 0], 0.0, d.search(node_index(2), node_index(0)));
    }

    #[test]
    fn skips_stale_entries() {
        // 0 --10-- 1 --20-- 3
        //  \      /
        //   1    1
        //    \  /
        //     2
        let g = numbered_graph(4, &[(0, 1, 10.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 20.0)]);

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 2, 1, 3], 22.0, d.search(node_index(0), node_index(3)));
        // (10, 1) is still queued when 1 is settled with distance 2
        assert_eq!(d.stats.stale_entries, 1);
        assert_eq!(d.stats.nodes_settled, 4);
    }

    #[test]
    fn unknown_index() {
        let g = numbered_graph(2, &[(0, 1, 1.0)]);

        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search(node_index(0), node_index(7)),
            Err(RouteError::UnknownNode("#7".to_string()))
        );
        assert_eq!(
            d.search(node_index(9), node_index(0)),
            Err(RouteError::UnknownNode("#9".to_string()))
        );
    }
}
