//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges are collected first and validated in [`build`](Self::build),
/// in the order they were given.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    directed: bool,
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new builder for an undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the graph directed (or not).
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Add a node.
    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.nodes.push(name.into());
        self
    }

    /// Add several nodes.
    pub fn nodes<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.nodes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an edge between two nodes.
    pub fn edge(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.edges.push((origin.into(), destination.into()));
        self
    }

    /// Add several edges.
    pub fn edges<I, A, B>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        self.edges
            .extend(pairs.into_iter().map(|(a, b)| (a.into(), b.into())));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        Graph::from_parts(self.nodes, self.edges, self.directed)
    }
}

/// The six-node undirected graph used by the demo driver.
pub fn sample_graph() -> GraphResult<Graph> {
    GraphBuilder::new()
        .nodes(["1", "2", "3", "4", "5", "6"])
        .edges([
            ("1", "6"),
            ("1", "2"),
            ("1", "5"),
            ("2", "3"),
            ("2", "5"),
            ("3", "4"),
            ("4", "5"),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphError;

    #[test]
    fn test_builder_directed() {
        let graph = GraphBuilder::new()
            .directed(true)
            .node("a")
            .node("b")
            .edge("a", "b")
            .build()
            .unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.get_node("a").unwrap().edges(), ["b"]);
        assert!(graph.get_node("b").unwrap().edges().is_empty());
    }

    #[test]
    fn test_builder_rejects_unknown_endpoint() {
        let result = GraphBuilder::new().node("a").edge("a", "ghost").build();
        assert!(matches!(result, Err(GraphError::NodeNotFound(name)) if name == "ghost"));
    }

    #[test]
    fn test_sample_graph_shape() {
        let graph = sample_graph().unwrap();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 14);
        assert_eq!(graph.get_node("1").unwrap().edges(), ["6", "2", "5"]);
    }
}
