//! Reference edge classifier built on the DFS state bundle.

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

use super::{DfsHooks, DfsState};

/// Category of an edge relative to the DFS tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeClass {
    /// Edge that discovered its destination.
    Tree,
    /// Edge to an ancestor that is still open.
    Back,
    /// Edge to a finished descendant.
    Forward,
    /// Edge to a finished node in another subtree.
    Cross,
}

impl EdgeClass {
    /// Return a human-readable name for this class.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "TREE",
            Self::Back => "BACK",
            Self::Forward => "FORWARD",
            Self::Cross => "CROSS",
        }
    }
}

impl std::fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Classify `origin -> destination` from inside a DFS edge hook.
///
/// Checks run in order: tree, back, forward, cross. An edge that fits none
/// of them means the state is inconsistent and yields
/// [`GraphError::Classification`].
pub fn classify_edge(origin: &str, destination: &str, state: &DfsState) -> GraphResult<EdgeClass> {
    if state.parent(destination) == Some(origin) {
        return Ok(EdgeClass::Tree);
    }
    if state.is_discovered(destination) && !state.is_processed(destination) {
        return Ok(EdgeClass::Back);
    }
    if state.is_processed(destination) {
        match (state.entry_time(destination), state.entry_time(origin)) {
            (Some(d), Some(o)) if d > o => return Ok(EdgeClass::Forward),
            (Some(d), Some(o)) if d < o => return Ok(EdgeClass::Cross),
            _ => {}
        }
    }
    Err(GraphError::Classification {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })
}

/// One classified edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEdge {
    pub origin: String,
    pub destination: String,
    pub class: EdgeClass,
}

/// DFS hook set that classifies every edge it is shown.
#[derive(Debug, Default)]
pub struct EdgeClassifier {
    edges: Vec<ClassifiedEdge>,
}

impl EdgeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classified edges, in the order the engine reported them.
    pub fn edges(&self) -> &[ClassifiedEdge] {
        &self.edges
    }

    /// Edges of a given class.
    pub fn of_class(&self, class: EdgeClass) -> impl Iterator<Item = &ClassifiedEdge> + '_ {
        self.edges.iter().filter(move |e| e.class == class)
    }

    pub fn into_edges(self) -> Vec<ClassifiedEdge> {
        self.edges
    }
}

impl DfsHooks for EdgeClassifier {
    fn edge(&mut self, origin: &str, destination: &str, state: &DfsState) -> GraphResult<()> {
        let class = classify_edge(origin, destination, state)?;
        log::trace!("edge `{}` -> `{}` is {}", origin, destination, class);
        self.edges.push(ClassifiedEdge {
            origin: origin.to_string(),
            destination: destination.to_string(),
            class,
        });
        Ok(())
    }
}
