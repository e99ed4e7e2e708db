use foldeval_config::PathResolver;
use std::path::Path;

pub fn execute(
    config: &Path,
    config_dir: Option<&Path>,
    resolve: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut record = super::load_config(config, config_dir)?;
    if resolve {
        record.resolve_paths(&PathResolver::from_env())?;
    }
    let rendered = if json {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_yaml::to_string(&record)?
    };
    println!("{rendered}");
    Ok(())
}
