//! EvoNAS search space - rule-based layer graphs for architecture search runs.
//!
//! An evolutionary NAS run describes its search space declaratively: a gene
//! pool of layers grouped into categories, plus rules stating which layers
//! and groups may follow one another. This crate turns that ruleset into
//! graphs and into node/edge elements for a dashboard's graph view.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Ruleset documents, results configuration and element types
//! - `graph`: Loading, group indexing, graph construction, reachability and projection
//!
//! # Example
//!
//! ```rust
//! use search_space::{
//!     graph::project_ruleset,
//!     schema::{Gene, LayerRule, Ruleset},
//! };
//!
//! let ruleset = Ruleset {
//!     gene_pool: Some(vec![
//!         Gene::new("STFT_2D", Some("Preprocessing 2D")),
//!         Gene::new("MAG_2D", Some("Preprocessing 2D")),
//!     ]),
//!     rule_set: vec![
//!         LayerRule::new("Start", ["STFT_2D"]),
//!         LayerRule::new("STFT_2D", ["MAG_2D"]),
//!     ],
//!     rule_set_groups: vec![],
//! };
//!
//! let projection = project_ruleset(&ruleset, "Start").unwrap();
//! assert_eq!(projection.groups, ["Preprocessing 2D"]);
//! assert!(projection.has_node("MAG_2D"));
//! ```

pub mod graph;
pub mod schema;

// Re-export commonly used types
pub use graph::{Projection, SearchSpace, SearchSpaceError};
pub use schema::{Element, ResultsConfig, Ruleset};
