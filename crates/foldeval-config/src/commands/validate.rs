use std::path::Path;
use tracing::warn;

pub fn execute(config: &Path, config_dir: Option<&Path>) -> anyhow::Result<()> {
    let record = super::load_config(config, config_dir)?;
    if record.max_nsamples > record.nsamples_per_len {
        // Allowed, but a batch larger than the per-length request is
        // almost always a typo.
        warn!(
            max_nsamples = record.max_nsamples,
            nsamples_per_len = record.nsamples_per_len,
            "max_nsamples exceeds nsamples_per_len"
        );
    }
    println!(
        "{} ok: {} metric entries, {} active",
        config.display(),
        record.metric_factory.len(),
        record.active_metric_entries().len()
    );
    Ok(())
}
