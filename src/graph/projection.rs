//! Projection of a search space into visualization elements.

use std::collections::HashSet;

use serde::Serialize;

use crate::schema::{Element, Gene, NodeData, Ruleset, layer_label};

use super::adjacency::{GroupGraph, LayerGraph};
use super::traversal::Reachable;

/// Keys of a layer node that are derived rather than copied from the gene.
const RESERVED_NODE_KEYS: [&str; 4] = ["id", "label", "parent", "layer"];

/// Elements ready for a compound graph renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Projection {
    /// Group nodes, then `Start` and layer nodes, then layer edges, then group edges.
    pub elements: Vec<Element>,
    /// Emitted group ids in first-seen order.
    pub groups: Vec<String>,
}

impl Projection {
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.elements.iter().filter_map(Element::as_node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.is_node())
    }

    /// Whether a node with `id` was emitted.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes().any(|node| node.id == id)
    }
}

/// Project reachable layers, their groups and the rule edges into elements.
///
/// `reachable` should come from the group-expanded layer graph while
/// `layer_graph` is the graph of layer rules alone, so group rules are drawn
/// once between group nodes instead of once per member pair.
pub fn project(
    ruleset: &Ruleset,
    reachable: &Reachable,
    layer_graph: &LayerGraph,
    group_graph: &GroupGraph,
) -> Projection {
    let mut group_nodes = Vec::new();
    let mut groups: Vec<String> = Vec::new();
    let mut nodes = vec![Element::start()];

    for gene in ruleset.genes() {
        let Some(layer) = gene.layer.as_deref() else {
            continue;
        };
        if !gene.is_visible() || !reachable.contains(layer) {
            continue;
        }

        let node = layer_node(gene, layer);
        if !nodes.contains(&node) {
            nodes.push(node);
        }

        if let Some(group) = gene.group_id()
            && !groups.iter().any(|g| g == group)
        {
            group_nodes.push(Element::group(group));
            groups.push(group.to_string());
        }
    }

    let mut elements = group_nodes;
    elements.append(&mut nodes);

    let mut seen = HashSet::new();
    for (source, target) in layer_graph.edges() {
        if reachable.contains(source) && seen.insert((source, target)) {
            elements.push(Element::layer_edge(source, target));
        }
    }

    let mut seen = HashSet::new();
    for (source, target) in group_graph.edges() {
        if groups.iter().any(|g| g == source) && seen.insert((source, target)) {
            elements.push(Element::group_edge(source, target));
        }
    }

    log::debug!(
        "Projected {} elements ({} groups)",
        elements.len(),
        groups.len()
    );
    Projection { elements, groups }
}

fn layer_node(gene: &Gene, layer: &str) -> Element {
    let mut extra = gene.extra.clone();
    for key in RESERVED_NODE_KEYS {
        extra.remove(key);
    }
    if let Some(exclude) = gene.exclude {
        extra.insert("exclude".to_string(), exclude.into());
    }

    Element::Node {
        data: NodeData {
            id: layer.to_string(),
            label: layer_label(layer),
            parent: gene.group_id().map(str::to_string),
            layer: Some(layer.to_string()),
            extra,
        },
    }
}
