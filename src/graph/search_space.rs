//! Per-run search-space operations.

use crate::schema::{ResultsConfig, Ruleset};

use super::adjacency::{GroupGraph, LayerGraph, build_group_graph, build_layer_graph};
use super::error::Result;
use super::groups::GroupIndex;
use super::loader::load_run;
use super::projection::{Projection, project};
use super::traversal::reachable_from;

/// Entry point for building the graphs of a run.
///
/// Every operation re-reads the run's ruleset document; nothing is cached
/// between calls, so a document edited on disk is picked up immediately.
#[derive(Debug, Clone, Default)]
pub struct SearchSpace {
    config: ResultsConfig,
}

impl SearchSpace {
    /// Create a search space reader.
    pub fn new(config: ResultsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResultsConfig {
        &self.config
    }

    /// Load the ruleset document of `run`.
    pub fn ruleset(&self, run: &str) -> Result<Ruleset> {
        load_run(&self.config, run)
    }

    /// Group id -> member layers.
    pub fn groups(&self, run: &str) -> Result<GroupIndex> {
        GroupIndex::build(&self.ruleset(run)?)
    }

    /// Layer graph, optionally expanded with group rules.
    pub fn layer_graph(&self, run: &str, group_connections: bool) -> Result<LayerGraph> {
        let ruleset = self.ruleset(run)?;
        let groups = if group_connections {
            GroupIndex::build(&ruleset)?
        } else {
            GroupIndex::default()
        };
        build_layer_graph(&ruleset, &groups, group_connections)
    }

    /// Group id -> groups allowed after it.
    pub fn group_graph(&self, run: &str) -> Result<GroupGraph> {
        build_group_graph(&self.ruleset(run)?)
    }

    /// Layers reachable from `start_layer`, in depth-first order.
    pub fn connected_layers(&self, run: &str, start_layer: &str) -> Result<Vec<String>> {
        let graph = self.layer_graph(run, true)?;
        Ok(reachable_from(&graph, start_layer)?.into_order())
    }

    /// Visualization elements for the layers reachable from the configured start layer.
    pub fn elements(&self, run: &str) -> Result<Projection> {
        project_ruleset(&self.ruleset(run)?, &self.config.start_layer)
    }
}

/// Build every graph of an already loaded ruleset and project it.
pub fn project_ruleset(ruleset: &Ruleset, start_layer: &str) -> Result<Projection> {
    let groups = GroupIndex::build(ruleset)?;
    let expanded = build_layer_graph(ruleset, &groups, true)?;
    let reachable = reachable_from(&expanded, start_layer)?;
    let layer_graph = build_layer_graph(ruleset, &groups, false)?;
    let group_graph = build_group_graph(ruleset)?;
    Ok(project(ruleset, &reachable, &layer_graph, &group_graph))
}
