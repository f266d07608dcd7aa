//! Errors raised while loading a ruleset or building its graphs.

use std::io;
use std::path::PathBuf;

use crate::schema::ConfigError;

/// Rule collection a record belongs to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    GenePool,
    RuleSet,
    RuleSetGroups,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Collection::GenePool => "gene_pool",
            Collection::RuleSet => "rule_set",
            Collection::RuleSetGroups => "rule_set_groups",
        })
    }
}

/// Search-space construction errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchSpaceError {
    #[error("Ruleset not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Error reading ruleset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error decoding ruleset {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{collection}[{index}] is missing required key '{field}'")]
    SchemaError {
        collection: Collection,
        index: usize,
        field: &'static str,
    },
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Start layer '{0}' is not found in the layer graph")]
    UnknownStartLayer(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SearchSpaceError {
    pub(crate) fn missing(collection: Collection, index: usize, field: &'static str) -> Self {
        SearchSpaceError::SchemaError {
            collection,
            index,
            field,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchSpaceError>;
