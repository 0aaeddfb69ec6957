//! adjgraph — a small in-memory graph with hook-driven traversals.
//!
//! Nodes are named and hold ordered adjacency lists; a [`Graph`] is either
//! directed or undirected. [`bfs`] and [`dfs`] walk it and call caller-supplied
//! hooks at fixed points: when a node is first visited, for each edge, and when
//! a node is finished. DFS hooks also see the shared [`DfsState`] (parents,
//! discovery flags, entry/exit times), which is enough to classify edges.

pub mod cli;
pub mod graph;
pub mod traversal;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{sample_graph, Graph, GraphBuilder, Node};
pub use traversal::{
    bfs, bfs_hooks, classify_edge, dfs, dfs_hooks, dfs_with, BfsHooks, BfsResult, ClassifiedEdge,
    DfsHooks, DfsState, DfsStrategy, EdgeClass, EdgeClassifier, NoHooks,
};
pub use types::{GraphError, GraphResult};
