//! Phase 2 tests: BFS + DFS engines.

use std::cell::RefCell;
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use adjgraph::graph::{sample_graph, Graph};
use adjgraph::traversal::{
    bfs, bfs_hooks, dfs, dfs_hooks, dfs_with, BfsHooks, DfsState, DfsStrategy, NoHooks,
};
use adjgraph::types::{GraphError, GraphResult};

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random connected undirected graph: a random spanning tree plus extras.
fn random_connected(rng: &mut StdRng, n: usize, extra: usize) -> Graph {
    let names: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
    let mut edges = Vec::new();
    for i in 1..n {
        let j = rng.gen_range(0..i);
        edges.push((names[i].clone(), names[j].clone()));
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        edges.push((names[a].clone(), names[b].clone()));
    }
    Graph::from_parts(names, edges, false).unwrap()
}

fn random_directed(rng: &mut StdRng, n: usize, m: usize) -> Graph {
    let names: Vec<String> = (0..n).map(|i| format!("d{}", i)).collect();
    let edges: Vec<(String, String)> = (0..m)
        .map(|_| {
            (
                names[rng.gen_range(0..n)].clone(),
                names[rng.gen_range(0..n)].clone(),
            )
        })
        .collect();
    Graph::from_parts(names, edges, true).unwrap()
}

/// Counts early/late visits per node.
#[derive(Default)]
struct VisitCounter {
    early: Vec<String>,
    late: Vec<String>,
    edges: usize,
}

impl BfsHooks for VisitCounter {
    fn node_early(&mut self, node: &str) -> GraphResult<()> {
        self.early.push(node.to_string());
        Ok(())
    }

    fn edge(&mut self, _origin: &str, _destination: &str) -> GraphResult<()> {
        self.edges += 1;
        Ok(())
    }

    fn node_late(&mut self, node: &str) -> GraphResult<()> {
        self.late.push(node.to_string());
        Ok(())
    }
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_sample_scenario() {
    init_logger();
    let graph = sample_graph().unwrap();
    let result = bfs(&graph, &mut NoHooks, Some("1")).unwrap();

    let parents: Vec<(&str, Option<&str>)> = result.parents().collect();
    assert_eq!(
        parents,
        [
            ("1", None),
            ("2", Some("1")),
            ("3", Some("2")),
            ("4", Some("5")),
            ("5", Some("1")),
            ("6", Some("1")),
        ]
    );
}

#[test]
fn test_bfs_default_start_is_first_node() {
    let graph = sample_graph().unwrap();
    let result = bfs(&graph, &mut NoHooks, None).unwrap();
    assert_eq!(result.visited_order()[0], "1");
    assert_eq!(result.parent("1"), None);
}

#[test]
fn test_bfs_visits_each_node_once() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let graph = random_connected(&mut rng, 40, 60);
        let mut counter = VisitCounter::default();
        let result = bfs(&graph, &mut counter, None).unwrap();

        let unique: HashSet<&String> = counter.early.iter().collect();
        assert_eq!(counter.early.len(), graph.node_count());
        assert_eq!(unique.len(), graph.node_count());
        assert_eq!(counter.early, counter.late);

        // Parent map is a spanning tree of graph edges rooted at the start.
        let root = graph.first_node().unwrap();
        for name in graph.node_names() {
            match result.parent(name) {
                None => assert_eq!(name, root),
                Some(p) => {
                    let node = graph.get_node(name).unwrap();
                    assert!(node.has_edge(p), "{} is not adjacent to parent {}", name, p);
                }
            }
        }
    }
}

#[test]
fn test_bfs_disconnected_skips_unreachable() {
    let graph = Graph::from_parts(
        ["a", "b", "c", "d"],
        [("a", "b"), ("c", "d")],
        false,
    )
    .unwrap();
    let mut counter = VisitCounter::default();
    let result = bfs(&graph, &mut counter, Some("a")).unwrap();

    assert_eq!(counter.early, ["a", "b"]);
    assert_eq!(result.parent("c"), None);
    assert_eq!(result.parent("d"), None);
    assert!(!result.was_visited("c"));
    assert!(result.was_visited("b"));
}

#[test]
fn test_bfs_edge_hook_skips_processed() {
    // Triangle: edges into already-processed nodes are not reported.
    let graph = Graph::from_parts(
        ["a", "b", "c"],
        [("a", "b"), ("b", "c"), ("c", "a")],
        false,
    )
    .unwrap();
    let seen = RefCell::new(Vec::new());
    let mut hooks = bfs_hooks(
        |_| Ok(()),
        |o, d| {
            seen.borrow_mut().push(format!("{}{}", o, d));
            Ok(())
        },
        |_| Ok(()),
    );
    bfs(&graph, &mut hooks, Some("a")).unwrap();
    assert_eq!(seen.into_inner(), ["ab", "ac", "bc"]);
}

#[test]
fn test_bfs_unknown_start() {
    let graph = sample_graph().unwrap();
    let err = bfs(&graph, &mut NoHooks, Some("42")).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound(ref n) if n == "42"));
}

#[test]
fn test_bfs_empty_graph() {
    let graph = Graph::new(true);
    assert!(matches!(
        bfs(&graph, &mut NoHooks, None),
        Err(GraphError::EmptyGraph)
    ));
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_sample_scenario() {
    let graph = sample_graph().unwrap();
    let state = dfs(&graph, &mut NoHooks, Some("1")).unwrap();

    assert_eq!(state.entry_time("1"), Some(1));
    let order = state.discovery_order();
    let entries: Vec<u64> = order
        .iter()
        .map(|n| state.entry_time(n).unwrap())
        .collect();
    assert!(entries.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(order.len(), 6);
    for name in graph.node_names() {
        assert!(state.is_processed(name));
    }
    assert_eq!(state.time(), 12);
}

fn assert_nested(graph: &Graph, state: &DfsState) {
    let visited: Vec<&str> = graph
        .node_names()
        .filter(|n| state.is_discovered(n))
        .collect();
    for u in &visited {
        for v in &visited {
            if u == v {
                continue;
            }
            let (eu, xu) = (state.entry_time(u).unwrap(), state.exit_time(u).unwrap());
            let (ev, xv) = (state.entry_time(v).unwrap(), state.exit_time(v).unwrap());
            assert!(eu < xu);
            if eu < ev {
                // v inside u, or disjoint.
                assert!(xv < xu || xu < ev, "{} [{},{}] vs {} [{},{}]", u, eu, xu, v, ev, xv);
            }
        }
    }
}

#[test]
fn test_dfs_intervals_nest() {
    let mut rng = StdRng::seed_from_u64(11);
    for round in 0..20 {
        let graph = if round % 2 == 0 {
            random_connected(&mut rng, 30, 40)
        } else {
            random_directed(&mut rng, 30, 70)
        };
        for strategy in [DfsStrategy::Recursive, DfsStrategy::ExplicitStack] {
            let state = dfs_with(&graph, &mut NoHooks, None, strategy).unwrap();
            assert_nested(&graph, &state);
        }
    }
}

#[test]
fn test_dfs_strategies_produce_same_state() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let graph = random_directed(&mut rng, 25, 60);
        let a = dfs_with(&graph, &mut NoHooks, None, DfsStrategy::Recursive).unwrap();
        let b = dfs_with(&graph, &mut NoHooks, None, DfsStrategy::ExplicitStack).unwrap();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}

#[test]
fn test_dfs_hooks_see_live_state() {
    let graph = Graph::from_parts(["a", "b"], [("a", "b")], true).unwrap();
    let notes = RefCell::new(Vec::new());
    let mut hooks = dfs_hooks(
        |n, s| {
            notes
                .borrow_mut()
                .push(format!("early {} entry={:?}", n, s.entry_time(n)));
            Ok(())
        },
        |o, d, s| {
            notes
                .borrow_mut()
                .push(format!("edge {}->{} parent={:?}", o, d, s.parent(d)));
            Ok(())
        },
        |n, s| {
            notes
                .borrow_mut()
                .push(format!("late {} processed={}", n, s.is_processed(n)));
            Ok(())
        },
    );
    dfs(&graph, &mut hooks, None).unwrap();
    assert_eq!(
        notes.into_inner(),
        [
            "early a entry=Some(1)",
            "edge a->b parent=Some(\"a\")",
            "early b entry=Some(2)",
            "late b processed=false",
            "late a processed=false",
        ]
    );
}

#[test]
fn test_dfs_hook_error_propagates() {
    let graph = sample_graph().unwrap();
    let mut hooks = dfs_hooks(
        |n, _| {
            if n == "3" {
                Err(GraphError::Classification {
                    origin: n.to_string(),
                    destination: n.to_string(),
                })
            } else {
                Ok(())
            }
        },
        |_, _, _| Ok(()),
        |_, _| Ok(()),
    );
    for strategy in [DfsStrategy::Recursive, DfsStrategy::ExplicitStack] {
        let err = dfs_with(&graph, &mut hooks, Some("1"), strategy).unwrap_err();
        assert!(matches!(err, GraphError::Classification { .. }));
    }
}

#[test]
fn test_dfs_serializes_state_bundle() {
    let graph = Graph::from_parts(["a", "b", "c"], [("a", "b")], false).unwrap();
    let state = dfs(&graph, &mut NoHooks, None).unwrap();
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "time": 4,
            "discovered": {"a": true, "b": true, "c": false},
            "processed": {"a": true, "b": true, "c": false},
            "parents": {"a": null, "b": "a", "c": null},
            "entry_times": {"a": 1, "b": 2, "c": null},
            "exit_times": {"a": 4, "b": 3, "c": null},
        })
    );
}

#[test]
fn test_dfs_dangling_edge() {
    let mut graph = sample_graph().unwrap();
    graph.remove_node("6").unwrap();
    let err = dfs(&graph, &mut NoHooks, Some("1")).unwrap_err();
    assert!(matches!(
        err,
        GraphError::DanglingEdge { ref origin, ref destination } if origin == "1" && destination == "6"
    ));
}
