pub mod plan;
pub mod show;
pub mod validate;

use anyhow::Context;
use foldeval_config::{ConfigStore, EvalConfig};
use std::path::{Path, PathBuf};

/// Loads `config` through the store so its `extends` chain resolves against
/// `config_dir` (falling back to the file's own directory).
pub fn load_config(config: &Path, config_dir: Option<&Path>) -> anyhow::Result<EvalConfig> {
    let name = config
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("config path has no usable file name: {}", config.display()))?;
    let dir = match config_dir {
        Some(dir) => dir.to_path_buf(),
        None => match config.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };
    ConfigStore::new(dir)
        .load(name)
        .with_context(|| format!("failed to load {}", config.display()))
}
