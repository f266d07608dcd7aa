//! Ruleset document types for an EvoNAS search space.
//!
//! A ruleset declares the gene pool (every layer the search may place, with
//! its owning group) and two rule collections stating which layers and groups
//! may follow one another in an encoded architecture.
//!
//! Record fields are kept optional at the document level so that missing keys
//! can be reported per record by the graph builders instead of failing the
//! whole parse.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level search-space document (`search_space.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Layers available to the search, with group membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_pool: Option<Vec<Gene>>,
    /// Layer-to-layer ordering rules.
    #[serde(default)]
    pub rule_set: Vec<LayerRule>,
    /// Group-to-group ordering rules.
    #[serde(default)]
    pub rule_set_groups: Vec<GroupRule>,
}

/// A gene pool entry: one layer and the group it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Layer identifier, unique within the gene pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    /// Owning group, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Inclusion flag. Absent means the gene is not drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,
    /// Any other keys (display names, parameters) carried into visualization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Gene {
    /// Create an included gene.
    pub fn new(layer: impl Into<String>, group: Option<&str>) -> Self {
        Self {
            layer: Some(layer.into()),
            group: group.map(str::to_string),
            exclude: Some(false),
            extra: Map::new(),
        }
    }

    /// Whether this gene is drawn in the visualization.
    ///
    /// An absent `exclude` key counts as excluded here, unlike rule records.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.exclude.unwrap_or(true)
    }

    /// Owning group id; an empty group string means the gene is ungrouped.
    pub fn group_id(&self) -> Option<&str> {
        self.group.as_deref().filter(|group| !group.is_empty())
    }
}

/// A layer rule: which layers may directly follow `layer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_after: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: bool,
}

impl LayerRule {
    pub fn new<S: Into<String>>(layer: S, allowed_after: impl IntoIterator<Item = S>) -> Self {
        Self {
            layer: Some(layer.into()),
            allowed_after: Some(allowed_after.into_iter().map(Into::into).collect()),
            exclude: false,
        }
    }

    /// Mark this rule as excluded.
    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }
}

/// A group rule: which groups may directly follow `group`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub allowed_after: Vec<String>,
    #[serde(default)]
    pub exclude: bool,
}

impl GroupRule {
    pub fn new<S: Into<String>>(group: S, allowed_after: impl IntoIterator<Item = S>) -> Self {
        Self {
            group: Some(group.into()),
            allowed_after: allowed_after.into_iter().map(Into::into).collect(),
            exclude: false,
        }
    }

    /// Mark this rule as excluded.
    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }
}

impl Ruleset {
    /// Ruleset with the given gene pool and no rules.
    pub fn with_genes(genes: Vec<Gene>) -> Self {
        Self {
            gene_pool: Some(genes),
            ..Default::default()
        }
    }

    /// Genes of the pool, empty when the key is absent.
    pub fn genes(&self) -> &[Gene] {
        self.gene_pool.as_deref().unwrap_or_default()
    }
}
