//! `${DATA_PATH}` path templating.
//!
//! Checkpoint and reference-feature paths in config files are templated
//! against a data root supplied at runtime. Resolution happens once at load
//! time; a templated path with no root available is fatal.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable supplying the data root.
pub const DATA_PATH_ENV: &str = "DATA_PATH";

/// Placeholder form used inside config paths.
const PLACEHOLDER: &str = "${DATA_PATH}";

/// Resolves `${DATA_PATH}`-templated path strings against a data root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: Option<PathBuf>,
}

impl PathResolver {
    /// Resolver with an explicit data root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Resolver backed by the `DATA_PATH` environment variable. An unset
    /// variable is not an error here; it only becomes one when a templated
    /// path is actually resolved.
    pub fn from_env() -> Self {
        Self {
            root: env::var_os(DATA_PATH_ENV).map(PathBuf::from),
        }
    }

    /// Substitutes every placeholder occurrence in `path`. Untemplated paths
    /// pass through untouched.
    pub fn substitute(&self, path: &str) -> Result<String, ConfigError> {
        if !path.contains(PLACEHOLDER) {
            return Ok(path.to_string());
        }
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnv(DATA_PATH_ENV.to_string()))?;
        Ok(path.replace(PLACEHOLDER, &root.to_string_lossy()))
    }

    /// Substitutes and converts to a filesystem path.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, ConfigError> {
        self.substitute(path).map(PathBuf::from)
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_data_root() {
        let resolver = PathResolver::new("/data");
        let resolved = resolver
            .resolve("${DATA_PATH}/metric_factory/model_weights/gearnet_ca.pth")
            .unwrap();
        assert_eq!(
            resolved,
            PathBuf::from("/data/metric_factory/model_weights/gearnet_ca.pth")
        );
    }

    #[test]
    fn untemplated_path_passes_through() {
        let resolver = PathResolver { root: None };
        assert_eq!(
            resolver.substitute("/abs/weights.pth").unwrap(),
            "/abs/weights.pth"
        );
    }

    #[test]
    fn templated_path_without_root_errors() {
        let resolver = PathResolver { root: None };
        let err = resolver.substitute("${DATA_PATH}/weights.pth").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(var) if var == DATA_PATH_ENV));
    }
}
