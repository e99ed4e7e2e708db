//! Length schedule expansion.

use crate::error::ConfigError;
use crate::schema::EvalConfig;

/// The ordered set of protein lengths an evaluation run samples at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSchedule {
    lengths: Vec<usize>,
}

impl LengthSchedule {
    /// Builds the schedule for a config: explicit `nres_lens` verbatim when
    /// present, otherwise the expanded range.
    pub fn for_config(config: &EvalConfig) -> Result<Self, ConfigError> {
        if !config.nres_lens.is_empty() {
            return Ok(Self {
                lengths: config.nres_lens.clone(),
            });
        }
        Self::expand(config.min_len, config.max_len, config.step_len)
    }

    /// Expands `min..=max` with stride `step`. The upper bound is included
    /// when the stride lands on it (`arange(min, max + 1, step)`); otherwise
    /// the last value is the largest `min + k*step <= max`.
    pub fn expand(min_len: usize, max_len: usize, step_len: usize) -> Result<Self, ConfigError> {
        if step_len == 0 {
            return Err(ConfigError::Invalid("step_len must be > 0".to_string()));
        }
        if min_len > max_len {
            return Err(ConfigError::Invalid(format!(
                "min_len ({min_len}) must be <= max_len ({max_len})"
            )));
        }
        Ok(Self {
            lengths: (min_len..=max_len).step_by(step_len).collect(),
        })
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl IntoIterator for LengthSchedule {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.lengths.into_iter()
    }
}
