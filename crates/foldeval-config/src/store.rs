//! Layered config loading.
//!
//! Config files live in a directory as `<name>.yaml`. A file may name a base
//! via `extends`; the chain is followed until a file with no `extends`, which
//! must parse as a complete record. Patches are then applied innermost-base
//! first, and the merged record is validated. Any failure along the way is
//! fatal; there is no partial-config fallback.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::schema::{EvalConfig, EvalConfigPatch};

/// Cap on the `extends` chain; anything deeper is treated as non-terminating.
const MAX_EXTENDS_DEPTH: usize = 8;

/// A directory of named evaluation configs.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads the named config, resolving its `extends` chain, and validates
    /// the merged record.
    pub fn load(&self, name: &str) -> Result<EvalConfig, ConfigError> {
        let mut chain: Vec<String> = Vec::new();
        let mut patches: Vec<EvalConfigPatch> = Vec::new();
        let mut current = name.to_string();

        let config = loop {
            if chain.contains(&current) || chain.len() >= MAX_EXTENDS_DEPTH {
                chain.push(current);
                return Err(ConfigError::ExtendsCycle(chain.join(" -> ")));
            }
            chain.push(current.clone());

            let text = self.read_named(&current)?;
            let patch: EvalConfigPatch = serde_yaml::from_str(&text)?;
            match patch.extends.clone() {
                Some(base) => {
                    patches.push(patch);
                    current = base;
                }
                None => {
                    // Root of the chain: must be a complete record.
                    break serde_yaml::from_str::<EvalConfig>(&text)?;
                }
            }
        };
        debug!(config = name, layers = chain.len(), "resolved extends chain");

        // Apply base-most first so the requested config's fields win.
        let merged = patches
            .into_iter()
            .rev()
            .fold(config, |acc, patch| patch.apply(acc));
        merged.validate()?;
        Ok(merged)
    }

    /// Loads a single standalone file. The file must not use `extends` and
    /// must be a complete record.
    pub fn load_file(path: &Path) -> Result<EvalConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        let patch: EvalConfigPatch = serde_yaml::from_str(&text)?;
        if let Some(base) = patch.extends {
            return Err(ConfigError::Invalid(format!(
                "config extends {base} but no config directory was given"
            )));
        }
        let config: EvalConfig = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    fn read_named(&self, name: &str) -> Result<String, ConfigError> {
        let path = self.dir.join(format!("{name}.yaml"));
        if !path.is_file() {
            return Err(ConfigError::UnknownBase(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }
}
