//! Layer and group adjacency built from ordering rules.
//!
//! Both graphs are stored in an [`Adjacency`], a map from node id to an
//! ordered target list that remembers the order in which sources were first
//! inserted. Traversal and projection iterate in that order, which keeps their
//! output deterministic for a given document.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::Ruleset;

use super::error::{Collection, Result, SearchSpaceError};
use super::groups::GroupIndex;

/// Insertion-ordered adjacency lists keyed by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    order: Vec<String>,
    targets: HashMap<String, Vec<String>>,
}

/// Layer id -> layers allowed directly after it.
pub type LayerGraph = Adjacency;

/// Group id -> groups allowed directly after it.
pub type GroupGraph = Adjacency;

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the target list of `source`, keeping its original position.
    pub fn set(&mut self, source: &str, targets: Vec<String>) {
        if !self.targets.contains_key(source) {
            self.order.push(source.to_string());
        }
        self.targets.insert(source.to_string(), targets);
    }

    /// Append `targets` to the list of `source`, creating it when absent.
    pub fn extend<I>(&mut self, source: &str, targets: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if !self.targets.contains_key(source) {
            self.order.push(source.to_string());
        }
        self.targets
            .entry(source.to_string())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
    }

    /// Targets of `source`, if it is a key.
    pub fn get(&self, source: &str) -> Option<&[String]> {
        self.targets.get(source).map(Vec::as_slice)
    }

    /// Targets of `source`, empty when it is not a key.
    pub fn neighbors(&self, source: &str) -> &[String] {
        self.get(source).unwrap_or_default()
    }

    pub fn contains(&self, source: &str) -> bool {
        self.targets.contains_key(source)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys with their target lists, in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|source| (source.as_str(), self.neighbors(source)))
    }

    /// All `(source, target)` pairs, duplicates included.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(source, targets)| targets.iter().map(move |t| (source, t.as_str())))
    }

    pub fn edge_count(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }
}

impl<K, V> FromIterator<(K, V)> for Adjacency
where
    K: AsRef<str>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut adjacency = Adjacency::new();
        for (source, targets) in iter {
            adjacency.set(source.as_ref(), targets.into_iter().map(Into::into).collect());
        }
        adjacency
    }
}

impl Serialize for Adjacency {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (source, targets) in self.iter() {
            map.serialize_entry(source, targets)?;
        }
        map.end()
    }
}

/// Build the layer graph of `ruleset`.
///
/// Layer rules are applied first, last writer winning per source layer. With
/// `group_connections`, group rules are then expanded into layer edges on top.
pub fn build_layer_graph(
    ruleset: &Ruleset,
    groups: &GroupIndex,
    group_connections: bool,
) -> Result<LayerGraph> {
    let mut graph = LayerGraph::new();

    for (index, rule) in ruleset.rule_set.iter().enumerate() {
        if rule.exclude {
            continue;
        }
        let source = rule
            .layer
            .as_deref()
            .ok_or_else(|| SearchSpaceError::missing(Collection::RuleSet, index, "layer"))?;
        let targets = rule
            .allowed_after
            .clone()
            .ok_or_else(|| SearchSpaceError::missing(Collection::RuleSet, index, "allowed_after"))?;
        graph.set(source, targets);
    }
    log::debug!("Layer graph before group connections: {graph:?}");

    if group_connections {
        expand_group_connections(&mut graph, ruleset, groups)?;
        log::debug!("Layer graph after group connections: {graph:?}");
    }

    Ok(graph)
}

/// Translate group rules into layer edges and append them to `graph`.
///
/// Every member of the source group gains every member of each allowed target
/// group. Existing edges are never replaced.
pub fn expand_group_connections(
    graph: &mut LayerGraph,
    ruleset: &Ruleset,
    groups: &GroupIndex,
) -> Result<()> {
    for (index, rule) in ruleset.rule_set_groups.iter().enumerate() {
        if rule.exclude {
            continue;
        }
        let source_group = rule
            .group
            .as_deref()
            .ok_or_else(|| SearchSpaceError::missing(Collection::RuleSetGroups, index, "group"))?;
        let source_layers = groups.members(source_group);
        if !groups.contains(source_group) {
            log::warn!("Group rule {index} references unknown source group '{source_group}'");
        }

        for target_group in &rule.allowed_after {
            if !groups.contains(target_group) {
                log::warn!("Group rule {index} references unknown target group '{target_group}'");
            }
            let target_layers = groups.members(target_group);
            for source_layer in source_layers {
                graph.extend(source_layer, target_layers.iter().cloned());
            }
        }
    }
    Ok(())
}

/// Build the group graph of `ruleset`, last writer winning per source group.
pub fn build_group_graph(ruleset: &Ruleset) -> Result<GroupGraph> {
    let mut graph = GroupGraph::new();

    for (index, rule) in ruleset.rule_set_groups.iter().enumerate() {
        if rule.exclude {
            continue;
        }
        let source = rule
            .group
            .as_deref()
            .ok_or_else(|| SearchSpaceError::missing(Collection::RuleSetGroups, index, "group"))?;
        graph.set(source, rule.allowed_after.clone());
    }

    Ok(graph)
}
