//! Per-call traversal state: node slots, BFS result, and the DFS state bundle.
//!
//! Traversal state is indexed by each node's position in the graph. A node
//! table snapshot is taken when a traversal starts so results can be queried
//! by name after the graph borrow ends.

use std::collections::HashMap;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Discovery status of a node during BFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BfsStatus {
    Undiscovered,
    Discovered,
    Processed,
}

/// Node names in graph order plus a reverse index.
#[derive(Debug, Clone)]
pub(crate) struct NodeTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl NodeTable {
    pub(crate) fn from_graph(graph: &Graph) -> Self {
        let names: Vec<String> = graph.node_names().map(str::to_string).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { names, index }
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn slot(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn name(&self, slot: usize) -> &str {
        &self.names[slot]
    }

    /// Resolve an edge destination, failing if the node was removed.
    pub(crate) fn edge_target(&self, origin: &str, destination: &str) -> GraphResult<usize> {
        self.slot(destination)
            .ok_or_else(|| GraphError::DanglingEdge {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
    }

    /// Pick the start slot: the given node, or the first node in the graph.
    pub(crate) fn start(&self, start: Option<&str>) -> GraphResult<usize> {
        match start {
            Some(name) => self
                .slot(name)
                .ok_or_else(|| GraphError::NodeNotFound(name.to_string())),
            None if self.names.is_empty() => Err(GraphError::EmptyGraph),
            None => Ok(0),
        }
    }
}

/// Serializes `name -> value` pairs in graph order.
struct Plain<'a, T> {
    names: &'a [String],
    values: &'a [T],
}

impl<T: Serialize> Serialize for Plain<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.names.iter().zip(self.values.iter()))
    }
}

/// Result of a breadth-first search.
#[derive(Debug, Clone)]
pub struct BfsResult {
    table: NodeTable,
    parents: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl BfsResult {
    pub(crate) fn new(table: NodeTable, parents: Vec<Option<usize>>, order: Vec<usize>) -> Self {
        Self {
            table,
            parents,
            order,
        }
    }

    /// The BFS-tree parent of `node`. `None` for the root, for nodes never
    /// reached, and for unknown names.
    pub fn parent(&self, node: &str) -> Option<&str> {
        let slot = self.table.slot(node)?;
        self.parents[slot].map(|p| self.table.name(p))
    }

    /// Every node with its parent, in graph order.
    pub fn parents(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .map(|(i, p)| (self.table.name(i), p.map(|p| self.table.name(p))))
    }

    /// Nodes in the order they were dequeued.
    pub fn visited_order(&self) -> Vec<&str> {
        self.order.iter().map(|&i| self.table.name(i)).collect()
    }

    /// Whether `node` was reached from the start node.
    pub fn was_visited(&self, node: &str) -> bool {
        self.table
            .slot(node)
            .is_some_and(|slot| self.order.contains(&slot))
    }
}

impl Serialize for BfsResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let parents: Vec<Option<&str>> = self.parents().map(|(_, p)| p).collect();
        let mut s = serializer.serialize_struct("BfsResult", 1)?;
        s.serialize_field(
            "parents",
            &Plain {
                names: &self.table.names,
                values: &parents,
            },
        )?;
        s.end()
    }
}

/// Shared state bundle threaded through a depth-first search.
///
/// Hooks see it read-only at every call, which is enough to classify edges.
#[derive(Debug, Clone)]
pub struct DfsState {
    table: NodeTable,
    pub(crate) time: u64,
    pub(crate) discovered: Vec<bool>,
    pub(crate) processed: Vec<bool>,
    pub(crate) parents: Vec<Option<usize>>,
    pub(crate) entry_times: Vec<Option<u64>>,
    pub(crate) exit_times: Vec<Option<u64>>,
}

impl DfsState {
    /// Fresh state: clock at zero, nothing discovered.
    pub(crate) fn new(table: NodeTable) -> Self {
        let n = table.len();
        Self {
            table,
            time: 0,
            discovered: vec![false; n],
            processed: vec![false; n],
            parents: vec![None; n],
            entry_times: vec![None; n],
            exit_times: vec![None; n],
        }
    }

    pub(crate) fn table(&self) -> &NodeTable {
        &self.table
    }

    /// The logical clock. Incremented once on entry and once on exit of
    /// every visited node.
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn is_discovered(&self, node: &str) -> bool {
        self.table.slot(node).is_some_and(|i| self.discovered[i])
    }

    pub fn is_processed(&self, node: &str) -> bool {
        self.table.slot(node).is_some_and(|i| self.processed[i])
    }

    /// The DFS-tree parent of `node`, if it has one yet.
    pub fn parent(&self, node: &str) -> Option<&str> {
        let slot = self.table.slot(node)?;
        self.parents[slot].map(|p| self.table.name(p))
    }

    /// Clock value when `node` was entered.
    pub fn entry_time(&self, node: &str) -> Option<u64> {
        self.table.slot(node).and_then(|i| self.entry_times[i])
    }

    /// Clock value when `node` was finished.
    pub fn exit_time(&self, node: &str) -> Option<u64> {
        self.table.slot(node).and_then(|i| self.exit_times[i])
    }

    /// Every node with its parent, in graph order.
    pub fn parents(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .map(|(i, p)| (self.table.name(i), p.map(|p| self.table.name(p))))
    }

    /// Nodes sorted by entry time. Unvisited nodes are left out.
    pub fn discovery_order(&self) -> Vec<&str> {
        let mut entered: Vec<(u64, usize)> = self
            .entry_times
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.map(|t| (t, i)))
            .collect();
        entered.sort_unstable();
        entered.into_iter().map(|(_, i)| self.table.name(i)).collect()
    }
}

impl Serialize for DfsState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.table.names.as_slice();
        let parents: Vec<Option<&str>> = self.parents().map(|(_, p)| p).collect();
        let mut s = serializer.serialize_struct("DfsState", 6)?;
        s.serialize_field("time", &self.time)?;
        s.serialize_field(
            "discovered",
            &Plain {
                names,
                values: &self.discovered,
            },
        )?;
        s.serialize_field(
            "processed",
            &Plain {
                names,
                values: &self.processed,
            },
        )?;
        s.serialize_field(
            "parents",
            &Plain {
                names,
                values: &parents,
            },
        )?;
        s.serialize_field(
            "entry_times",
            &Plain {
                names,
                values: &self.entry_times,
            },
        )?;
        s.serialize_field(
            "exit_times",
            &Plain {
                names,
                values: &self.exit_times,
            },
        )?;
        s.end()
    }
}
