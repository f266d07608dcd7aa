//! Visualization elements for compound graph renderers.
//!
//! Elements follow the Cytoscape layout: every record has a `data` object,
//! edges carry a `classes` string used by selector-based styling, and layer
//! nodes point at their group node through `parent`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rendering class shared by all group-to-group edges.
pub const GROUP_EDGE_CLASS: &str = "class-connect";

/// Id of the synthetic entry node.
pub const START_NODE: &str = "Start";

/// A single node or edge record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Edge { data: EdgeData, classes: String },
    Node { data: NodeData },
}

/// Node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    pub label: String,
    /// Containing group node, for compound rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Edge payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
}

impl Element {
    /// The synthetic `Start` node.
    pub fn start() -> Self {
        let mut extra = Map::new();
        extra.insert("f_name".to_string(), Value::from(START_NODE));
        Element::Node {
            data: NodeData {
                id: START_NODE.to_string(),
                label: START_NODE.to_string(),
                parent: None,
                layer: Some(START_NODE.to_string()),
                extra,
            },
        }
    }

    /// A group container node.
    pub fn group(group: &str) -> Self {
        Element::Node {
            data: NodeData {
                id: group.to_string(),
                label: group.to_string(),
                parent: None,
                layer: None,
                extra: Map::new(),
            },
        }
    }

    /// A layer-to-layer edge, classed by both endpoint ids.
    pub fn layer_edge(source: &str, target: &str) -> Self {
        Element::Edge {
            data: EdgeData {
                source: source.to_string(),
                target: target.to_string(),
            },
            classes: format!("{source} {target}"),
        }
    }

    /// A group-to-group edge.
    pub fn group_edge(source: &str, target: &str) -> Self {
        Element::Edge {
            data: EdgeData {
                source: source.to_string(),
                target: target.to_string(),
            },
            classes: GROUP_EDGE_CLASS.to_string(),
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Element::Node { .. })
    }

    pub fn as_node(&self) -> Option<&NodeData> {
        match self {
            Element::Node { data } => Some(data),
            Element::Edge { .. } => None,
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeData> {
        match self {
            Element::Edge { data, .. } => Some(data),
            Element::Node { .. } => None,
        }
    }
}

/// Human-readable label for a layer id.
pub fn layer_label(layer: &str) -> String {
    layer.replace('_', " ")
}
