//! Metric vocabulary for the evaluation pipeline.
//!
//! Distributional metrics (FID, the fJSD family) compare learned structural
//! embeddings of generated samples against a precomputed reference feature
//! set. The fS family scores generated structures alone. The C/A/T suffixes
//! are the CATH classification levels the per-category variants split on.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A metric the metric factory can be asked to compute.
///
/// Serialized names are the exact strings the config artifact uses; an
/// unrecognized name is a parse error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum MetricKind {
    /// Frechet distance between embedding distributions.
    #[serde(rename = "FID")]
    #[strum(serialize = "FID")]
    Fid,
    /// Jensen-Shannon divergence over class-level category assignments.
    #[serde(rename = "fJSD_C")]
    #[strum(serialize = "fJSD_C")]
    FjsdClass,
    /// Jensen-Shannon divergence over architecture-level assignments.
    #[serde(rename = "fJSD_A")]
    #[strum(serialize = "fJSD_A")]
    FjsdArch,
    /// Jensen-Shannon divergence over topology-level assignments.
    #[serde(rename = "fJSD_T")]
    #[strum(serialize = "fJSD_T")]
    FjsdTopo,
    /// Class-level similarity score of the generated set alone.
    #[serde(rename = "fS_C")]
    #[strum(serialize = "fS_C")]
    FsClass,
    /// Architecture-level similarity score of the generated set alone.
    #[serde(rename = "fS_A")]
    #[strum(serialize = "fS_A")]
    FsArch,
    /// Topology-level similarity score of the generated set alone.
    #[serde(rename = "fS_T")]
    #[strum(serialize = "fS_T")]
    FsTopo,
}

impl MetricKind {
    /// Whether computing this metric requires a precomputed reference
    /// feature set. FID and the fJSD family compare against references;
    /// the fS family does not.
    pub fn needs_reference(&self) -> bool {
        matches!(
            self,
            Self::Fid | Self::FjsdClass | Self::FjsdArch | Self::FjsdTopo
        )
    }

    /// Output key for this metric under the given entry prefix. An empty
    /// prefix yields the bare metric name.
    pub fn output_key(&self, prefix: &str) -> String {
        format!("{prefix}{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn serialized_names_match_vocabulary() {
        let yaml = "[FID, fJSD_C, fJSD_A, fJSD_T, fS_C, fS_A, fS_T]";
        let parsed: Vec<MetricKind> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.len(), MetricKind::iter().count());
        for (kind, name) in parsed.iter().zip(["FID", "fJSD_C", "fJSD_A", "fJSD_T", "fS_C", "fS_A", "fS_T"]) {
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn unknown_metric_is_a_parse_error() {
        let parsed: Result<Vec<MetricKind>, _> = serde_yaml::from_str("[FID, fID_typo]");
        assert!(parsed.is_err());
    }

    #[test]
    fn reference_requirements() {
        assert!(MetricKind::Fid.needs_reference());
        assert!(MetricKind::FjsdTopo.needs_reference());
        assert!(!MetricKind::FsClass.needs_reference());
        assert!(!MetricKind::FsTopo.needs_reference());
    }

    #[test]
    fn output_keys_carry_prefix() {
        assert_eq!(MetricKind::Fid.output_key(""), "FID");
        assert_eq!(MetricKind::Fid.output_key("afdb_"), "afdb_FID");
    }
}
