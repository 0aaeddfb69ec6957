//! In-memory graph — nodes, adjacency lists, and a fluent builder.

pub mod adjacency;
pub mod builder;
pub mod node;

pub use adjacency::Graph;
pub use builder::{sample_graph, GraphBuilder};
pub use node::Node;
