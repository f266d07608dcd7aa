//! Configuration for locating run results on disk.

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming the run results directory.
pub const RESULTS_PATH_ENV: &str = "RUN_RESULTS_PATH";

fn default_results_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_file_name() -> String {
    "search_space.json".to_string()
}

fn default_start_layer() -> String {
    "Start".to_string()
}

/// Where run results live and how the search space is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Directory containing one subdirectory per run.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Ruleset document name inside a run directory.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Layer that reachability starts from.
    #[serde(default = "default_start_layer")]
    pub start_layer: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            file_name: default_file_name(),
            start_layer: default_start_layer(),
        }
    }
}

impl ResultsConfig {
    /// Configuration rooted at `results_dir`.
    pub fn new<P: AsRef<Path>>(results_dir: P) -> Self {
        Self {
            results_dir: results_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// Layers apply in order: the config file (or defaults), the
    /// `RUN_RESULTS_PATH` value, then explicit overrides. The result is
    /// validated.
    pub fn resolve(
        config_file: Option<&Path>,
        results_env: Option<OsString>,
        results_dir: Option<PathBuf>,
        start_layer: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        }
        .with_results_env(results_env);

        if let Some(dir) = results_dir {
            config.results_dir = dir;
        }
        if let Some(start) = start_layer {
            config.start_layer = start;
        }
        config.validate()?;
        Ok(config)
    }

    /// Override the results directory with a `RUN_RESULTS_PATH` value.
    /// Unset and empty values leave it unchanged.
    pub fn with_results_env(mut self, value: Option<OsString>) -> Self {
        if let Some(dir) = value.filter(|v| !v.is_empty()) {
            self.results_dir = PathBuf::from(dir);
        }
        self
    }

    /// Path of the ruleset document for `run`.
    pub fn ruleset_path(&self, run: &str) -> Result<PathBuf, ConfigError> {
        validate_run_id(run)?;
        Ok(self.results_dir.join(run).join(&self.file_name))
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::EmptyFileName);
        }
        if self.start_layer.is_empty() {
            return Err(ConfigError::EmptyStartLayer);
        }
        Ok(())
    }
}

/// A run id must name exactly one directory below the results root.
fn validate_run_id(run: &str) -> Result<(), ConfigError> {
    let mut components = Path::new(run).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ConfigError::InvalidRunId(run.to_string())),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Ruleset file name must be non-empty")]
    EmptyFileName,
    #[error("Start layer must be non-empty")]
    EmptyStartLayer,
    #[error("Invalid run id {0:?}: must be a single directory name")]
    InvalidRunId(String),
    #[error("Error reading config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_valid() {
        let config = ResultsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_layer, "Start");
    }

    #[test]
    fn test_ruleset_path() {
        let config = ResultsConfig::new("/runs");
        let path = config.ruleset_path("ga_20240108-231402").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/runs/ga_20240108-231402/search_space.json")
        );
    }

    #[test]
    fn test_invalid_run_ids() {
        let config = ResultsConfig::default();
        for run in ["", "..", "a/b", "/abs", "."] {
            assert!(
                matches!(config.ruleset_path(run), Err(ConfigError::InvalidRunId(_))),
                "run id {run:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"results_dir": "/tmp/runs"}"#).unwrap();

        let config = ResultsConfig::from_file(&path).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/tmp/runs"));
        assert_eq!(config.file_name, "search_space.json");
    }

    #[test]
    fn test_from_file_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"file_name": " "}"#).unwrap();

        assert!(matches!(
            ResultsConfig::from_file(&path),
            Err(ConfigError::EmptyFileName)
        ));
    }

    #[test]
    fn test_results_env_override() {
        let config = ResultsConfig::default().with_results_env(Some("/env/runs".into()));
        assert_eq!(config.results_dir, PathBuf::from("/env/runs"));

        // Empty and unset values keep the current directory.
        let config = ResultsConfig::new("/runs").with_results_env(Some(OsString::new()));
        assert_eq!(config.results_dir, PathBuf::from("/runs"));
        let config = ResultsConfig::new("/runs").with_results_env(None);
        assert_eq!(config.results_dir, PathBuf::from("/runs"));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = ResultsConfig::resolve(None, None, None, None).unwrap();
        assert_eq!(config, ResultsConfig::default());
        assert_eq!(config.results_dir, PathBuf::from("data"));

        let config = ResultsConfig::resolve(None, Some(OsString::new()), None, None).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_resolve_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"results_dir": "/file/runs", "start_layer": "Input"}"#).unwrap();

        let config = ResultsConfig::resolve(Some(path.as_path()), None, None, None).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/file/runs"));
        assert_eq!(config.start_layer, "Input");

        let env = Some(OsString::from("/env/runs"));
        let config = ResultsConfig::resolve(Some(path.as_path()), env.clone(), None, None).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/env/runs"));
        assert_eq!(config.start_layer, "Input");

        let config = ResultsConfig::resolve(
            Some(path.as_path()),
            env,
            Some(PathBuf::from("/flag/runs")),
            Some("Start".to_string()),
        )
        .unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/flag/runs"));
        assert_eq!(config.start_layer, "Start");
    }

    #[test]
    fn test_resolve_rejects_empty_start() {
        assert!(matches!(
            ResultsConfig::resolve(None, None, None, Some(String::new())),
            Err(ConfigError::EmptyStartLayer)
        ));
    }

    #[test]
    fn test_serialization() {
        let config = ResultsConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ResultsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
