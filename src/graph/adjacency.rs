//! Core graph structure — named nodes with adjacency lists.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphError, GraphResult};

use super::Node;

/// An in-memory graph of uniquely named nodes.
///
/// Nodes are kept in insertion order. In undirected mode every edge is stored
/// as two directed halves, and edge mutations keep the halves in sync.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, in insertion order.
    nodes: Vec<Node>,
    /// Name -> position in `nodes`.
    index: HashMap<String, usize>,
    /// Fixed at construction.
    directed: bool,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            directed,
        }
    }

    /// Build a graph from node names and `(origin, destination)` pairs.
    ///
    /// Either sequence may be empty. Fails on the first duplicate node or
    /// edge endpoint that is not in `nodes`.
    pub fn from_parts<N, E, A, B>(nodes: N, edges: E, directed: bool) -> GraphResult<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::new(directed);
        for name in nodes {
            graph.add_node(name)?;
        }
        for (origin, destination) in edges {
            graph.add_edge(origin.as_ref(), destination.as_ref())?;
        }
        Ok(graph)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed halves. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges().len()).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Add a node with no edges.
    pub fn add_node(&mut self, name: impl Into<String>) -> GraphResult<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        log::debug!("add node `{}`", name);
        self.index.insert(name.clone(), self.nodes.len());
        self.nodes.push(Node::new(name));
        Ok(())
    }

    /// Remove a node and return it.
    ///
    /// Edges on other nodes that point at the removed node are left in place.
    /// Traversals that reach such an edge fail with
    /// [`GraphError::DanglingEdge`].
    pub fn remove_node(&mut self, name: &str) -> GraphResult<Node> {
        let pos = self
            .index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))?;

        let removed = self.nodes.remove(pos);
        self.rebuild_index();
        log::debug!("remove node `{}`", name);
        Ok(removed)
    }

    /// Get a node by name.
    pub fn get_node(&self, name: &str) -> GraphResult<&Node> {
        self.index
            .get(name)
            .map(|&i| &self.nodes[i])
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    /// All node names, in insertion order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(Node::name)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The first node added that is still present.
    pub fn first_node(&self) -> Option<&str> {
        self.nodes.first().map(Node::name)
    }

    /// Add an edge. In undirected mode the reverse half is added too.
    pub fn add_edge(&mut self, origin: &str, destination: &str) -> GraphResult<()> {
        let from = self.require(origin)?;
        let to = self.require(destination)?;

        self.nodes[from].add_edge(destination);
        if !self.directed {
            self.nodes[to].add_edge(origin);
        }
        log::debug!("add edge `{}` -> `{}`", origin, destination);
        Ok(())
    }

    /// Remove an edge. In undirected mode the reverse half is removed too.
    ///
    /// Both halves are checked before either is touched, so a failed call
    /// leaves the graph unchanged.
    pub fn remove_edge(&mut self, origin: &str, destination: &str) -> GraphResult<()> {
        let from = self.require(origin)?;
        let to = self.require(destination)?;

        let needed = if !self.directed && from == to { 2 } else { 1 };
        if self.nodes[from].edge_multiplicity(destination) < needed {
            return Err(GraphError::EdgeNotFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }
        if !self.directed && !self.nodes[to].has_edge(origin) {
            return Err(GraphError::EdgeNotFound {
                origin: destination.to_string(),
                destination: origin.to_string(),
            });
        }

        self.nodes[from].remove_edge(destination)?;
        if !self.directed {
            self.nodes[to].remove_edge(origin)?;
        }
        log::debug!("remove edge `{}` -> `{}`", origin, destination);
        Ok(())
    }

    /// Position of a node in insertion order.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn require(&self, name: &str) -> GraphResult<usize> {
        self.position(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    /// Rebuild the name index from the node list.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, node) in self.nodes.iter().enumerate() {
            self.index.insert(node.name().to_string(), i);
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Graph>:")?;
        for node in &self.nodes {
            write!(f, "\n  {}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_self_loop_round_trip() {
        let mut graph = Graph::new(false);
        graph.add_node("a").unwrap();
        graph.add_edge("a", "a").unwrap();
        assert_eq!(graph.get_node("a").unwrap().edges(), ["a", "a"]);

        graph.remove_edge("a", "a").unwrap();
        assert!(graph.get_node("a").unwrap().edges().is_empty());
    }

    #[test]
    fn test_remove_node_reindexes() {
        let mut graph = Graph::from_parts(["a", "b", "c"], [("a", "c")], true).unwrap();
        graph.remove_node("a").unwrap();
        assert_eq!(graph.node_names().collect::<Vec<_>>(), ["b", "c"]);
        assert_eq!(graph.position("c"), Some(1));
        graph.add_edge("c", "b").unwrap();
        assert_eq!(graph.get_node("c").unwrap().edges(), ["b"]);
    }

    #[test]
    fn test_display_lists_nodes_in_order() {
        let graph = Graph::from_parts(["1", "2"], [("1", "2")], false).unwrap();
        assert_eq!(
            graph.to_string(),
            "<Graph>:\n  <GraphNode>: \"1\" with edges ['2']\n  <GraphNode>: \"2\" with edges ['1']"
        );
    }

    #[test]
    fn test_empty_parts() {
        let graph =
            Graph::from_parts(Vec::<String>::new(), Vec::<(String, String)>::new(), false).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.first_node(), None);
    }
}
