use foldeval_config::{LengthSchedule, SamplePlan};
use itertools::Itertools;
use std::path::Path;

pub fn execute(config: &Path, config_dir: Option<&Path>) -> anyhow::Result<()> {
    let record = super::load_config(config, config_dir)?;
    let schedule = LengthSchedule::for_config(&record)?;
    let plan = SamplePlan::for_config(&record)?;

    println!(
        "lengths ({}): {}",
        schedule.len(),
        schedule.lengths().iter().join(", ")
    );
    println!("plan: {plan}");
    println!("total samples: {}", plan.total_samples());
    let keys = record.metric_output_keys();
    if keys.is_empty() {
        println!("metrics: none active");
    } else {
        println!("metrics: {}", keys.iter().join(", "));
    }
    if record.compute_designability {
        println!("designability: enabled");
    }
    Ok(())
}
