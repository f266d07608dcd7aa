//! Ruleset loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::schema::{ResultsConfig, Ruleset};

use super::error::{Result, SearchSpaceError};

/// Load the ruleset of `run` below the configured results directory.
pub fn load_run(config: &ResultsConfig, run: &str) -> Result<Ruleset> {
    let path = config.ruleset_path(run)?;
    load_path(path)
}

/// Load a ruleset document from `path`.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Ruleset> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SearchSpaceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SearchSpaceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let ruleset = parse_ruleset(&content, path)?;
    log::info!(
        "Loaded ruleset {}: {} genes, {} layer rules, {} group rules",
        path.display(),
        ruleset.genes().len(),
        ruleset.rule_set.len(),
        ruleset.rule_set_groups.len()
    );
    Ok(ruleset)
}

/// Parse a ruleset document; `origin` is only used for error reporting.
pub fn parse_ruleset(content: &str, origin: impl Into<PathBuf>) -> Result<Ruleset> {
    serde_json::from_str(content).map_err(|source| SearchSpaceError::ParseError {
        path: origin.into(),
        source,
    })
}
