//! Graph construction over a search-space ruleset.
//!
//! The pipeline for one run is:
//!
//! 1. **Loading** (`loader`): read `<results_dir>/<run>/search_space.json`
//! 2. **Group index** (`groups`): group id -> member layers from the gene pool
//! 3. **Adjacency** (`adjacency`): layer graph from layer rules, optionally
//!    expanded with group rules, and the group graph
//! 4. **Traversal** (`traversal`): layers reachable from `Start`
//! 5. **Projection** (`projection`): nodes and edges for a compound graph view
//!
//! [`SearchSpace`] runs these steps per call, re-reading the document each
//! time.
//!
//! # Example
//!
//! ```rust,no_run
//! use search_space::{ResultsConfig, SearchSpace};
//!
//! let space = SearchSpace::new(ResultsConfig::new("data"));
//! let layers = space.connected_layers("example_run", "Start")?;
//! println!("{} reachable layers", layers.len());
//!
//! let projection = space.elements("example_run")?;
//! println!("{}", serde_json::to_string_pretty(&projection.elements)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod adjacency;
mod error;
mod groups;
mod loader;
mod projection;
mod search_space;
mod traversal;

pub use adjacency::{
    Adjacency, GroupGraph, LayerGraph, build_group_graph, build_layer_graph,
    expand_group_connections,
};
pub use error::{Collection, Result, SearchSpaceError};
pub use groups::GroupIndex;
pub use loader::{load_path, load_run, parse_ruleset};
pub use projection::{Projection, project};
pub use search_space::{SearchSpace, project_ruleset};
pub use traversal::{Reachable, reachable_from};
