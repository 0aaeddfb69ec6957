//! A named vertex and its ordered outgoing-edge list.

use std::fmt;

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

/// A named vertex holding the names of its edge destinations.
///
/// Destinations are weak references: they name other nodes in the owning
/// [`Graph`](super::Graph) and are resolved through it. Insertion order is
/// kept and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    name: String,
    edges: Vec<String>,
}

impl Node {
    /// Create a node with an empty edge list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edges: Vec::new(),
        }
    }

    /// The node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edge destinations, in insertion order.
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    /// Whether an edge to `destination` is present.
    pub fn has_edge(&self, destination: &str) -> bool {
        self.edges.iter().any(|e| e == destination)
    }

    /// Number of edges to `destination` (parallel edges count separately).
    pub fn edge_multiplicity(&self, destination: &str) -> usize {
        self.edges.iter().filter(|e| *e == destination).count()
    }

    /// Append an edge. No duplicate or existence check.
    pub(crate) fn add_edge(&mut self, destination: impl Into<String>) {
        self.edges.push(destination.into());
    }

    /// Remove the first edge to `destination`.
    pub(crate) fn remove_edge(&mut self, destination: &str) -> GraphResult<()> {
        let pos = self
            .edges
            .iter()
            .position(|e| e == destination)
            .ok_or_else(|| GraphError::EdgeNotFound {
                origin: self.name.clone(),
                destination: destination.to_string(),
            })?;
        self.edges.remove(pos);
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<GraphNode>: \"{}\" with edges [", self.name)?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", edge)?;
        }
        write!(f, "]")
    }
}
