//! Hook contracts invoked by the traversal engines.
//!
//! A hook set is three callbacks: node-early, edge, node-late. BFS hooks see
//! only node names. DFS hooks also get the shared [`DfsState`], which is what
//! edge classification needs. Any error a hook returns stops the traversal
//! and is handed back to the caller unchanged.

use crate::types::GraphResult;

use super::DfsState;

/// Callbacks for [`bfs`](super::bfs). All default to no-ops.
pub trait BfsHooks {
    /// Called when `node` is dequeued, before its edges are scanned.
    fn node_early(&mut self, _node: &str) -> GraphResult<()> {
        Ok(())
    }

    /// Called for each scanned edge whose destination is not yet processed.
    fn edge(&mut self, _origin: &str, _destination: &str) -> GraphResult<()> {
        Ok(())
    }

    /// Called after all of `node`'s edges are scanned.
    fn node_late(&mut self, _node: &str) -> GraphResult<()> {
        Ok(())
    }
}

/// Callbacks for [`dfs`](super::dfs). All default to no-ops.
pub trait DfsHooks {
    /// Called right after `node` is entered and timestamped.
    fn node_early(&mut self, _node: &str, _state: &DfsState) -> GraphResult<()> {
        Ok(())
    }

    /// Called for tree edges before descending, and for non-tree edges that
    /// pass the engine's duplicate filter.
    fn edge(&mut self, _origin: &str, _destination: &str, _state: &DfsState) -> GraphResult<()> {
        Ok(())
    }

    /// Called after all of `node`'s edges are explored, before its exit time
    /// is recorded.
    fn node_late(&mut self, _node: &str, _state: &DfsState) -> GraphResult<()> {
        Ok(())
    }
}

/// A hook set that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl BfsHooks for NoHooks {}
impl DfsHooks for NoHooks {}

/// Three closures acting as a hook set.
///
/// Build one with [`bfs_hooks`] or [`dfs_hooks`] so the closure signatures
/// are inferred.
pub struct FnHooks<E, D, L> {
    early: E,
    edge: D,
    late: L,
}

/// Wrap three closures as [`BfsHooks`].
pub fn bfs_hooks<E, D, L>(early: E, edge: D, late: L) -> FnHooks<E, D, L>
where
    E: FnMut(&str) -> GraphResult<()>,
    D: FnMut(&str, &str) -> GraphResult<()>,
    L: FnMut(&str) -> GraphResult<()>,
{
    FnHooks { early, edge, late }
}

/// Wrap three closures as [`DfsHooks`].
pub fn dfs_hooks<E, D, L>(early: E, edge: D, late: L) -> FnHooks<E, D, L>
where
    E: FnMut(&str, &DfsState) -> GraphResult<()>,
    D: FnMut(&str, &str, &DfsState) -> GraphResult<()>,
    L: FnMut(&str, &DfsState) -> GraphResult<()>,
{
    FnHooks { early, edge, late }
}

impl<E, D, L> BfsHooks for FnHooks<E, D, L>
where
    E: FnMut(&str) -> GraphResult<()>,
    D: FnMut(&str, &str) -> GraphResult<()>,
    L: FnMut(&str) -> GraphResult<()>,
{
    fn node_early(&mut self, node: &str) -> GraphResult<()> {
        (self.early)(node)
    }

    fn edge(&mut self, origin: &str, destination: &str) -> GraphResult<()> {
        (self.edge)(origin, destination)
    }

    fn node_late(&mut self, node: &str) -> GraphResult<()> {
        (self.late)(node)
    }
}

impl<E, D, L> DfsHooks for FnHooks<E, D, L>
where
    E: FnMut(&str, &DfsState) -> GraphResult<()>,
    D: FnMut(&str, &str, &DfsState) -> GraphResult<()>,
    L: FnMut(&str, &DfsState) -> GraphResult<()>,
{
    fn node_early(&mut self, node: &str, state: &DfsState) -> GraphResult<()> {
        (self.early)(node, state)
    }

    fn edge(&mut self, origin: &str, destination: &str, state: &DfsState) -> GraphResult<()> {
        (self.edge)(origin, destination, state)
    }

    fn node_late(&mut self, node: &str, state: &DfsState) -> GraphResult<()> {
        (self.late)(node, state)
    }
}
