//! Hook-driven graph traversals — BFS, DFS, and DFS edge classification.

pub mod bfs;
pub mod classify;
pub mod dfs;
pub mod hooks;
pub mod state;

pub use bfs::bfs;
pub use classify::{classify_edge, ClassifiedEdge, EdgeClass, EdgeClassifier};
pub use dfs::{dfs, dfs_with, DfsStrategy};
pub use hooks::{bfs_hooks, dfs_hooks, BfsHooks, DfsHooks, FnHooks, NoHooks};
pub use state::{BfsResult, BfsStatus, DfsState};
