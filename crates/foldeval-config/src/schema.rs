//! Typed evaluation config record and its override layer.
//!
//! An evaluation run is configured by a single [`EvalConfig`] record: which
//! protein lengths to sample, how many samples per length, and which metric
//! factory entries to build. Config files on disk may layer over a named base
//! via `extends`; the override layer is the statically-typed
//! [`EvalConfigPatch`] with every field optional, applied field-by-field over
//! the base record. List-valued fields replace wholesale.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::metrics::MetricKind;
use crate::paths::PathResolver;

/// Evaluation pipeline configuration. Constructed once at load time and held
/// immutably for the duration of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    /// Explicit target lengths. Empty means derive the schedule from the
    /// `min_len`/`max_len`/`step_len` triple.
    #[serde(default)]
    pub nres_lens: Vec<usize>,
    /// Smallest sampled length, inclusive.
    pub min_len: usize,
    /// Largest sampled length, inclusive when the stride lands on it.
    pub max_len: usize,
    /// Stride between sampled lengths.
    pub step_len: usize,
    /// Samples requested per length.
    pub nsamples_per_len: usize,
    /// Maximum samples grouped into one processing batch.
    pub max_nsamples: usize,
    /// Whether the designability score is computed.
    #[serde(default)]
    pub compute_designability: bool,
    /// Whether distributional-distance metrics are computed. Gates the whole
    /// `metric_factory` list.
    #[serde(default)]
    pub compute_fid: bool,
    /// Metric factory entries, one per scoring-model / reference-set pairing.
    #[serde(default)]
    pub metric_factory: Vec<MetricFactoryEntry>,
}

/// One metric factory entry: a scoring-model checkpoint, an optional
/// precomputed reference feature set, and the metrics to compute with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricFactoryEntry {
    /// Metrics this entry computes, drawn from the fixed vocabulary.
    pub metrics: Vec<MetricKind>,
    /// Pretrained scoring-model checkpoint. May contain `${DATA_PATH}`.
    pub ckpt_path: String,
    /// Precomputed reference features. Required when any requested metric
    /// compares against a reference set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_features_path: Option<String>,
    /// Restrict structural input to alpha-carbon atoms.
    #[serde(default)]
    pub ca_only: bool,
    /// Output-key prefix disambiguating entries with overlapping metrics.
    #[serde(default)]
    pub prefix: String,
}

impl MetricFactoryEntry {
    /// Prefix-qualified output keys for this entry, in metric order.
    pub fn output_keys(&self) -> Vec<String> {
        self.metrics
            .iter()
            .map(|m| m.output_key(&self.prefix))
            .collect()
    }

    fn validate(&self, idx: usize) -> Result<(), ConfigError> {
        if self.metrics.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "metric_factory[{idx}]: metrics must be non-empty"
            )));
        }
        for (i, metric) in self.metrics.iter().enumerate() {
            if self.metrics[..i].contains(metric) {
                return Err(ConfigError::Invalid(format!(
                    "metric_factory[{idx}]: duplicate metric {metric}"
                )));
            }
        }
        if self.ckpt_path.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "metric_factory[{idx}]: ckpt_path must be non-empty"
            )));
        }
        if self.real_features_path.is_none() {
            if let Some(metric) = self.metrics.iter().find(|m| m.needs_reference()) {
                return Err(ConfigError::Invalid(format!(
                    "metric_factory[{idx}]: {metric} requires real_features_path"
                )));
            }
        }
        Ok(())
    }
}

impl EvalConfig {
    /// Validates the record's invariants. Called by the loaders after
    /// merging; fails fast on the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_len == 0 {
            return Err(ConfigError::Invalid("step_len must be > 0".to_string()));
        }
        if self.min_len > self.max_len {
            return Err(ConfigError::Invalid(format!(
                "min_len ({}) must be <= max_len ({})",
                self.min_len, self.max_len
            )));
        }
        if self.nres_lens.iter().any(|&len| len == 0) {
            return Err(ConfigError::Invalid(
                "nres_lens entries must be non-zero".to_string(),
            ));
        }
        if self.nsamples_per_len == 0 {
            return Err(ConfigError::Invalid(
                "nsamples_per_len must be > 0".to_string(),
            ));
        }
        if self.max_nsamples == 0 {
            return Err(ConfigError::Invalid("max_nsamples must be > 0".to_string()));
        }
        for (idx, entry) in self.metric_factory.iter().enumerate() {
            entry.validate(idx)?;
        }
        self.validate_output_keys()
    }

    /// Two entries producing the same prefix-qualified key would write the
    /// same metric output slot; the prefix field exists to prevent exactly
    /// that.
    fn validate_output_keys(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<String> = Vec::new();
        for entry in &self.metric_factory {
            for key in entry.output_keys() {
                if seen.contains(&key) {
                    return Err(ConfigError::Invalid(format!(
                        "metric output key collision: {key} (disambiguate with prefix)"
                    )));
                }
                seen.push(key);
            }
        }
        Ok(())
    }

    /// Metric factory entries that actually run, gated by `compute_fid`.
    /// `compute_designability` is an independent switch with no factory
    /// entries behind it.
    pub fn active_metric_entries(&self) -> &[MetricFactoryEntry] {
        if self.compute_fid {
            &self.metric_factory
        } else {
            &[]
        }
    }

    /// Ordered output keys over the active entries.
    pub fn metric_output_keys(&self) -> Vec<String> {
        self.active_metric_entries()
            .iter()
            .flat_map(MetricFactoryEntry::output_keys)
            .collect()
    }

    /// Substitutes `${DATA_PATH}` in every checkpoint and reference-feature
    /// path. Errors if a templated path is present but no data root is
    /// available.
    pub fn resolve_paths(&mut self, resolver: &PathResolver) -> Result<(), ConfigError> {
        for entry in &mut self.metric_factory {
            entry.ckpt_path = resolver.substitute(&entry.ckpt_path)?;
            if let Some(path) = entry.real_features_path.take() {
                entry.real_features_path = Some(resolver.substitute(&path)?);
            }
        }
        Ok(())
    }
}

/// Override layer for a base config: every field optional, applied over the
/// base record. The `extends` directive names the base; override fields
/// always win (the source system's `_self_`-last composition order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfigPatch {
    /// Name of the base config this layer applies over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nres_lens: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsamples_per_len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nsamples: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_designability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_fid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_factory: Option<Vec<MetricFactoryEntry>>,
}

impl EvalConfigPatch {
    /// Applies this layer over `base`, producing the merged record.
    /// List-valued fields replace the base's list wholesale.
    pub fn apply(self, base: EvalConfig) -> EvalConfig {
        EvalConfig {
            nres_lens: self.nres_lens.unwrap_or(base.nres_lens),
            min_len: self.min_len.unwrap_or(base.min_len),
            max_len: self.max_len.unwrap_or(base.max_len),
            step_len: self.step_len.unwrap_or(base.step_len),
            nsamples_per_len: self.nsamples_per_len.unwrap_or(base.nsamples_per_len),
            max_nsamples: self.max_nsamples.unwrap_or(base.max_nsamples),
            compute_designability: self
                .compute_designability
                .unwrap_or(base.compute_designability),
            compute_fid: self.compute_fid.unwrap_or(base.compute_fid),
            metric_factory: self.metric_factory.unwrap_or(base.metric_factory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> EvalConfig {
        EvalConfig {
            nres_lens: vec![],
            min_len: 60,
            max_len: 255,
            step_len: 5,
            nsamples_per_len: 125,
            max_nsamples: 8,
            compute_designability: true,
            compute_fid: true,
            metric_factory: vec![],
        }
    }

    fn fid_entry(prefix: &str) -> MetricFactoryEntry {
        MetricFactoryEntry {
            metrics: vec![MetricKind::Fid],
            ckpt_path: "${DATA_PATH}/metric_factory/model_weights/gearnet_ca.pth".to_string(),
            real_features_path: Some("${DATA_PATH}/metric_factory/real_features/pdb.pth".to_string()),
            ca_only: true,
            prefix: prefix.to_string(),
        }
    }

    #[test]
    fn valid_config_passes() {
        let mut config = minimal_config();
        config.metric_factory = vec![fid_entry(""), fid_entry("afdb_")];
        config.validate().unwrap();
    }

    #[test]
    fn inverted_length_range_rejected() {
        let mut config = minimal_config();
        config.min_len = 300;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_step_rejected() {
        let mut config = minimal_config();
        config.step_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn reference_metric_without_features_rejected() {
        let mut config = minimal_config();
        let mut entry = fid_entry("");
        entry.real_features_path = None;
        config.metric_factory = vec![entry];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("real_features_path"));
    }

    #[test]
    fn score_metrics_need_no_features() {
        let mut config = minimal_config();
        config.metric_factory = vec![MetricFactoryEntry {
            metrics: vec![MetricKind::FsClass, MetricKind::FsArch, MetricKind::FsTopo],
            ckpt_path: "weights.pth".to_string(),
            real_features_path: None,
            ca_only: true,
            prefix: String::new(),
        }];
        config.validate().unwrap();
    }

    #[test]
    fn colliding_output_keys_rejected() {
        let mut config = minimal_config();
        config.metric_factory = vec![fid_entry(""), fid_entry("")];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("collision"));
    }

    #[test]
    fn compute_fid_gates_factory_entries() {
        let mut config = minimal_config();
        config.metric_factory = vec![fid_entry("")];
        assert_eq!(config.metric_output_keys(), vec!["FID"]);
        config.compute_fid = false;
        assert!(config.active_metric_entries().is_empty());
        assert!(config.metric_output_keys().is_empty());
    }

    #[test]
    fn patch_fields_override_base() {
        let base = minimal_config();
        let patch = EvalConfigPatch {
            nsamples_per_len: Some(10),
            compute_fid: Some(false),
            ..Default::default()
        };
        let merged = patch.apply(base.clone());
        assert_eq!(merged.nsamples_per_len, 10);
        assert!(!merged.compute_fid);
        assert_eq!(merged.min_len, base.min_len);
    }

    #[test]
    fn patch_list_replaces_wholesale() {
        let mut base = minimal_config();
        base.metric_factory = vec![fid_entry(""), fid_entry("afdb_")];
        let patch = EvalConfigPatch {
            metric_factory: Some(vec![]),
            ..Default::default()
        };
        assert!(patch.apply(base).metric_factory.is_empty());
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let parse: Result<EvalConfigPatch, _> = serde_yaml::from_str("min_len: 60\nnot_a_field: 1\n");
        assert!(parse.is_err());
    }
}
