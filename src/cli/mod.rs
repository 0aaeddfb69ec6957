//! Command implementations for the `adjgraph` binary.

pub mod commands;
