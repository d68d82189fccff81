pub mod test_graphs;
