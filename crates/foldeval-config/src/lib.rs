//! foldeval-config
//!
//! - typed schema for protein generative-model evaluation configs
//!   (length schedules, sample volumes, metric-factory entries).
//! - layered `extends` merging, `${DATA_PATH}` resolution, validation.
//! - derived read-only views (length schedule, batch plan, metric keys).
//! - CLI to handle the above.
//!
mod error;
mod lengths;
mod metrics;
mod paths;
mod plan;
mod schema;
mod store;

pub use error::ConfigError;
pub use lengths::LengthSchedule;
pub use metrics::MetricKind;
pub use paths::{PathResolver, DATA_PATH_ENV};
pub use plan::{SampleJob, SamplePlan};
pub use schema::{EvalConfig, EvalConfigPatch, MetricFactoryEntry};
pub use store::ConfigStore;
