//! Schema module - Ruleset documents, configuration and visualization element types.

mod config;
mod elements;
mod ruleset;

pub use config::*;
pub use elements::*;
pub use ruleset::*;
