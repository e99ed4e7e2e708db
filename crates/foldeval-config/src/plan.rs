//! Derived sampling plan.
//!
//! The config subsystem turns the sample-volume controls into a concrete
//! batch schedule for the external sampler to execute. Nothing here runs
//! sampling; these are read-only views of the record.

use std::fmt;

use itertools::Itertools;

use crate::error::ConfigError;
use crate::lengths::LengthSchedule;
use crate::schema::EvalConfig;

/// One generation batch: `nsamples` structures at length `nres`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleJob {
    pub nres: usize,
    pub nsamples: usize,
}

/// The full batch schedule for a run, in length order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePlan {
    jobs: Vec<SampleJob>,
}

impl SamplePlan {
    /// Splits `nsamples_per_len` at every scheduled length into batches of
    /// at most `max_nsamples`; the final batch carries the remainder.
    pub fn for_config(config: &EvalConfig) -> Result<Self, ConfigError> {
        if config.max_nsamples == 0 {
            return Err(ConfigError::Invalid("max_nsamples must be > 0".to_string()));
        }
        let schedule = LengthSchedule::for_config(config)?;
        let mut jobs = Vec::new();
        for nres in schedule {
            let mut remaining = config.nsamples_per_len;
            while remaining > 0 {
                let nsamples = remaining.min(config.max_nsamples);
                jobs.push(SampleJob { nres, nsamples });
                remaining -= nsamples;
            }
        }
        Ok(Self { jobs })
    }

    pub fn jobs(&self) -> &[SampleJob] {
        &self.jobs
    }

    /// Total number of samples across all batches.
    pub fn total_samples(&self) -> usize {
        self.jobs.iter().map(|job| job.nsamples).sum()
    }

    /// Batches scheduled at one length.
    pub fn batches_at(&self, nres: usize) -> impl Iterator<Item = &SampleJob> {
        self.jobs.iter().filter(move |job| job.nres == nres)
    }
}

impl fmt::Display for SamplePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self
            .jobs
            .iter()
            .chunk_by(|job| job.nres)
            .into_iter()
            .map(|(nres, group)| format!("len {nres} x{}", group.count()))
            .join(", ");
        write!(f, "{} batches ({summary})", self.jobs.len())
    }
}
