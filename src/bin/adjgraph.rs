//! CLI entry point for the `adjgraph` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::traversal::DfsStrategy;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjgraph",
    about = "adjgraph CLI — build small graphs and run hook-driven BFS/DFS"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// A graph given on the command line.
#[derive(Args)]
struct GraphArgs {
    /// Comma-separated node names
    #[arg(long)]
    nodes: String,
    /// Comma-separated edges, each written origin-destination
    #[arg(long, default_value = "")]
    edges: String,
    /// Treat edges as one-way
    #[arg(long)]
    directed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run BFS and DFS over the built-in six-node sample graph
    Demo,
    /// Print a graph
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Breadth-first search
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// Start node (defaults to the first node)
        #[arg(long)]
        start: Option<String>,
    },
    /// Depth-first search with entry/exit times
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// Start node (defaults to the first node)
        #[arg(long)]
        start: Option<String>,
        /// Use the explicit-stack engine instead of recursion
        #[arg(long)]
        stack: bool,
    },
    /// Classify edges as tree, back, forward, or cross
    Classify {
        #[command(flatten)]
        graph: GraphArgs,
        /// Start node (defaults to the first node)
        #[arg(long)]
        start: Option<String>,
        /// Use the explicit-stack engine instead of recursion
        #[arg(long)]
        stack: bool,
    },
}

fn strategy(stack: bool) -> DfsStrategy {
    if stack {
        DfsStrategy::ExplicitStack
    } else {
        DfsStrategy::Recursive
    }
}

fn load(args: &GraphArgs) -> Result<adjgraph::Graph, GraphError> {
    let mut edges = Vec::new();
    for spec in args.edges.split(',').filter(|s| !s.trim().is_empty()) {
        match commands::parse_edge(spec) {
            Some(edge) => edges.push(edge),
            None => {
                eprintln!("Invalid edge: {}", spec);
                process::exit(3);
            }
        }
    }
    commands::build_graph(&args.nodes, &edges, args.directed)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Show { graph } => load(&graph).and_then(|g| commands::cmd_show(&g, json)),
        Commands::Bfs { graph, start } => {
            load(&graph).and_then(|g| commands::cmd_bfs(&g, start.as_deref(), json))
        }
        Commands::Dfs {
            graph,
            start,
            stack,
        } => load(&graph)
            .and_then(|g| commands::cmd_dfs(&g, start.as_deref(), strategy(stack), json)),
        Commands::Classify {
            graph,
            start,
            stack,
        } => load(&graph)
            .and_then(|g| commands::cmd_classify(&g, start.as_deref(), strategy(stack), json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::DuplicateNode(_)
            | GraphError::NodeNotFound(_)
            | GraphError::EdgeNotFound { .. } => 4,
            GraphError::EmptyGraph | GraphError::DanglingEdge { .. } => 2,
            _ => 5,
        };
        process::exit(code);
    }
}
