//! Breadth-first search driven by caller hooks.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::state::{BfsStatus, NodeTable};
use super::{BfsHooks, BfsResult};

/// Breadth-first search from `start`, or from the first node if `None`.
///
/// Nodes are dequeued in FIFO order. For each dequeued node the early hook
/// runs, then its edges are scanned in stored order: the edge hook fires when
/// the destination is not yet processed, and undiscovered destinations are
/// queued with the current node as parent. The current node is marked
/// processed at the end of each edge step, so a second self-loop on the same
/// node is not reported. The late hook runs after the scan.
///
/// Nodes unreachable from the start are never visited and keep no parent.
pub fn bfs<H>(graph: &Graph, hooks: &mut H, start: Option<&str>) -> GraphResult<BfsResult>
where
    H: BfsHooks + ?Sized,
{
    let table = NodeTable::from_graph(graph);
    let root = table.start(start)?;
    log::debug!("bfs from `{}` over {} nodes", table.name(root), table.len());

    let mut status = vec![BfsStatus::Undiscovered; table.len()];
    let mut parents: Vec<Option<usize>> = vec![None; table.len()];
    let mut order = Vec::with_capacity(table.len());
    let mut pending = VecDeque::new();

    status[root] = BfsStatus::Discovered;
    pending.push_back(root);

    while let Some(current) = pending.pop_front() {
        let node = &graph.nodes()[current];
        let origin = node.name();
        log::trace!("bfs visit `{}`", origin);
        order.push(current);
        hooks.node_early(origin)?;

        for destination in node.edges() {
            let next = table.edge_target(origin, destination)?;
            if status[next] != BfsStatus::Processed {
                hooks.edge(origin, destination)?;
            }
            if status[next] == BfsStatus::Undiscovered {
                status[next] = BfsStatus::Discovered;
                parents[next] = Some(current);
                pending.push_back(next);
            }
            status[current] = BfsStatus::Processed;
        }

        hooks.node_late(origin)?;
    }

    log::debug!("bfs reached {} of {} nodes", order.len(), table.len());
    Ok(BfsResult::new(table, parents, order))
}
