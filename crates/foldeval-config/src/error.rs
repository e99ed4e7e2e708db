use thiserror::Error;

/// Errors raised while loading, merging, resolving, or validating an
/// evaluation config. Any of these is fatal to the run; there is no
/// partial-config fallback.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem error while reading a config file.
    #[error("io error reading config: {0}")]
    Io(String),

    /// The file is not valid YAML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// A templated path referenced an environment variable that is unset.
    #[error("environment variable {0} is not set but is referenced by a config path")]
    MissingEnv(String),

    /// An `extends` directive named a config that does not exist in the
    /// config directory.
    #[error("unknown base config: {0}")]
    UnknownBase(String),

    /// The `extends` chain loops back on itself or exceeds the depth cap.
    #[error("extends chain does not terminate: {0}")]
    ExtendsCycle(String),

    /// A field-level invariant does not hold.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
