//! CLI command implementations.

use crate::graph::{sample_graph, Graph};
use crate::traversal::{bfs, dfs_with, BfsResult, DfsState, DfsStrategy, EdgeClassifier, NoHooks};
use crate::types::GraphResult;

/// Parse an edge spec of the form `origin-destination`.
pub fn parse_edge(spec: &str) -> Option<(String, String)> {
    let (origin, destination) = spec.split_once('-')?;
    let (origin, destination) = (origin.trim(), destination.trim());
    if origin.is_empty() || destination.is_empty() {
        return None;
    }
    Some((origin.to_string(), destination.to_string()))
}

/// Build a graph from comma-separated node names and `a-b` edge specs.
pub fn build_graph(nodes: &str, edges: &[(String, String)], directed: bool) -> GraphResult<Graph> {
    let names = nodes
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty());
    Graph::from_parts(names, edges.iter().cloned(), directed)
}

/// Print the sample graph, its BFS parents, and its DFS state.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let graph = sample_graph()?;
    let bfs_result = bfs(&graph, &mut NoHooks, None)?;
    let dfs_state = dfs_with(&graph, &mut NoHooks, None, DfsStrategy::Recursive)?;

    if json {
        let out = serde_json::json!({
            "graph": graph_json(&graph),
            "bfs": bfs_result,
            "dfs": dfs_state,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", graph);
        println!("\nBFS\n-----\n");
        print_bfs(&bfs_result);
        println!("\n\nDFS\n-----\n");
        print_dfs(&dfs_state);
    }
    Ok(())
}

/// Print a graph.
pub fn cmd_show(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&graph_json(graph))?);
    } else {
        println!("{}", graph);
        println!(
            "{} nodes, {} edge entries, {}",
            graph.node_count(),
            graph.edge_count(),
            if graph.is_directed() { "directed" } else { "undirected" }
        );
    }
    Ok(())
}

/// Run BFS and print the visit order and parent map.
pub fn cmd_bfs(graph: &Graph, start: Option<&str>, json: bool) -> GraphResult<()> {
    let result = bfs(graph, &mut NoHooks, start)?;
    if json {
        let out = serde_json::json!({
            "visited": result.visited_order(),
            "parents": result,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Visited: {}", result.visited_order().join(" "));
        print_bfs(&result);
    }
    Ok(())
}

/// Run DFS and print the state bundle.
pub fn cmd_dfs(
    graph: &Graph,
    start: Option<&str>,
    strategy: DfsStrategy,
    json: bool,
) -> GraphResult<()> {
    let state = dfs_with(graph, &mut NoHooks, start, strategy)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("Discovered: {}", state.discovery_order().join(" "));
        print_dfs(&state);
    }
    Ok(())
}

/// Run DFS with the edge classifier and print each edge's class.
pub fn cmd_classify(
    graph: &Graph,
    start: Option<&str>,
    strategy: DfsStrategy,
    json: bool,
) -> GraphResult<()> {
    let mut classifier = EdgeClassifier::new();
    dfs_with(graph, &mut classifier, start, strategy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(classifier.edges())?);
    } else {
        for edge in classifier.edges() {
            println!("{:<8} {} -> {}", edge.class, edge.origin, edge.destination);
        }
    }
    Ok(())
}

fn graph_json(graph: &Graph) -> serde_json::Value {
    serde_json::json!({
        "directed": graph.is_directed(),
        "nodes": graph.nodes(),
    })
}

fn print_bfs(result: &BfsResult) {
    println!("Parents:");
    for (node, parent) in result.parents() {
        println!("  {} <- {}", node, parent.unwrap_or("-"));
    }
}

fn print_dfs(state: &DfsState) {
    println!("Time: {}", state.time());
    println!("  {:<8} {:>5} {:>5}  parent", "node", "entry", "exit");
    for (node, parent) in state.parents() {
        println!(
            "  {:<8} {:>5} {:>5}  {}",
            node,
            format_time(state.entry_time(node)),
            format_time(state.exit_time(node)),
            parent.unwrap_or("-"),
        );
    }
}

fn format_time(time: Option<u64>) -> String {
    time.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}
