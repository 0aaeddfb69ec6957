//! Depth-first search driven by caller hooks, with entry/exit timestamps.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::state::NodeTable;
use super::{DfsHooks, DfsState};

/// Which DFS engine to run. Both produce identical state and hook order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DfsStrategy {
    /// Recurse on the call stack. Depth is bounded by the longest simple path.
    #[default]
    Recursive,
    /// Keep an explicit stack of frames. Safe for very deep graphs.
    ExplicitStack,
}

/// Depth-first search from `start`, or from the first node if `None`.
///
/// Only nodes reachable from the start are visited; the rest keep their
/// initial state. Returns the full state bundle.
pub fn dfs<H>(graph: &Graph, hooks: &mut H, start: Option<&str>) -> GraphResult<DfsState>
where
    H: DfsHooks + ?Sized,
{
    dfs_with(graph, hooks, start, DfsStrategy::Recursive)
}

/// [`dfs`] with an explicit choice of engine.
pub fn dfs_with<H>(
    graph: &Graph,
    hooks: &mut H,
    start: Option<&str>,
    strategy: DfsStrategy,
) -> GraphResult<DfsState>
where
    H: DfsHooks + ?Sized,
{
    let table = NodeTable::from_graph(graph);
    let root = table.start(start)?;
    log::debug!(
        "dfs ({:?}) from `{}` over {} nodes",
        strategy,
        table.name(root),
        table.len()
    );

    let mut state = DfsState::new(table);
    match strategy {
        DfsStrategy::Recursive => visit(graph, hooks, &mut state, root)?,
        DfsStrategy::ExplicitStack => walk(graph, hooks, &mut state, root)?,
    }

    log::debug!("dfs finished at time {}", state.time);
    Ok(state)
}

/// Stamp entry time and run the early hook.
fn enter<H>(graph: &Graph, hooks: &mut H, state: &mut DfsState, slot: usize) -> GraphResult<()>
where
    H: DfsHooks + ?Sized,
{
    let name = graph.nodes()[slot].name();
    log::trace!("dfs enter `{}`", name);
    state.time += 1;
    state.entry_times[slot] = Some(state.time);
    state.discovered[slot] = true;
    hooks.node_early(name, state)
}

/// Run the late hook, then stamp exit time.
fn leave<H>(graph: &Graph, hooks: &mut H, state: &mut DfsState, slot: usize) -> GraphResult<()>
where
    H: DfsHooks + ?Sized,
{
    let name = graph.nodes()[slot].name();
    hooks.node_late(name, state)?;
    state.time += 1;
    state.exit_times[slot] = Some(state.time);
    state.processed[slot] = true;
    log::trace!("dfs leave `{}`", name);
    Ok(())
}

/// Outcome of examining one edge.
enum Step {
    Descend(usize),
    Stay,
}

/// Examine `origin -> destination`: mark and report tree edges, report
/// non-tree edges that pass the duplicate filter.
///
/// In an undirected graph the edge back to the immediate parent is the
/// mirror of the tree edge and is skipped, as are edges to finished nodes.
/// In a directed graph every non-tree edge is reported.
fn examine<H>(
    graph: &Graph,
    hooks: &mut H,
    state: &mut DfsState,
    current: usize,
    destination: &str,
) -> GraphResult<Step>
where
    H: DfsHooks + ?Sized,
{
    let origin = graph.nodes()[current].name();
    let next = state.table().edge_target(origin, destination)?;

    if !state.discovered[next] {
        state.parents[next] = Some(current);
        hooks.edge(origin, destination, state)?;
        return Ok(Step::Descend(next));
    }

    let open = !state.processed[next] && state.parents[current] != Some(next);
    if open || graph.is_directed() {
        hooks.edge(origin, destination, state)?;
    }
    Ok(Step::Stay)
}

fn visit<H>(graph: &Graph, hooks: &mut H, state: &mut DfsState, current: usize) -> GraphResult<()>
where
    H: DfsHooks + ?Sized,
{
    enter(graph, hooks, state, current)?;
    for destination in graph.nodes()[current].edges() {
        if let Step::Descend(next) = examine(graph, hooks, state, current, destination)? {
            visit(graph, hooks, state, next)?;
        }
    }
    leave(graph, hooks, state, current)
}

struct Frame {
    slot: usize,
    cursor: usize,
}

fn walk<H>(graph: &Graph, hooks: &mut H, state: &mut DfsState, root: usize) -> GraphResult<()>
where
    H: DfsHooks + ?Sized,
{
    enter(graph, hooks, state, root)?;
    let mut stack = vec![Frame {
        slot: root,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let current = frame.slot;
        let edges = graph.nodes()[current].edges();
        let Some(destination) = edges.get(frame.cursor) else {
            stack.pop();
            leave(graph, hooks, state, current)?;
            continue;
        };
        frame.cursor += 1;

        if let Step::Descend(next) = examine(graph, hooks, state, current, destination)? {
            enter(graph, hooks, state, next)?;
            stack.push(Frame {
                slot: next,
                cursor: 0,
            });
        }
    }
    Ok(())
}
