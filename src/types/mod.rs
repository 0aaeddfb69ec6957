//! Shared types for the adjgraph library.

pub mod error;

pub use error::{GraphError, GraphResult};
