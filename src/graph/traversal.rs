//! Reachability over the layer graph.

use std::collections::HashSet;

use super::adjacency::LayerGraph;
use super::error::{Result, SearchSpaceError};

/// Layers reachable from a start layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reachable {
    /// Depth-first pre-order, start layer first.
    order: Vec<String>,
    members: HashSet<String>,
}

impl Reachable {
    pub fn contains(&self, layer: &str) -> bool {
        self.members.contains(layer)
    }

    /// Visited layers in depth-first pre-order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn into_order(self) -> Vec<String> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Depth-first search of `graph` from `start`.
///
/// Neighbors are explored in adjacency order and each layer is visited once,
/// matching a recursive pre-order walk. Targets that are not keys of the graph
/// are visited as leaves. `start` itself must be a key.
pub fn reachable_from(graph: &LayerGraph, start: &str) -> Result<Reachable> {
    if !graph.contains(start) {
        return Err(SearchSpaceError::UnknownStartLayer(start.to_string()));
    }

    let mut reachable = Reachable::default();
    let mut stack = vec![start];

    while let Some(layer) = stack.pop() {
        if !reachable.members.insert(layer.to_string()) {
            continue;
        }
        reachable.order.push(layer.to_string());

        // Reverse so the first listed neighbor is explored first.
        stack.extend(
            graph
                .neighbors(layer)
                .iter()
                .rev()
                .map(String::as_str)
                .filter(|next| !reachable.members.contains(*next)),
        );
    }

    log::debug!("Reachable from '{start}': {:?}", reachable.order);
    Ok(reachable)
}
