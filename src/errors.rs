use thiserror::Error;

/// Errors raised by the containers.
///
/// Every error is local to the failing call: the container is left exactly as it was before.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("type mismatch: {found} != {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0} is not comparable")]
    NotComparable(String),

    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: isize, len: usize },

    #[error("{0} from empty collection")]
    EmptyCollection(&'static str),

    #[error("value already present: {0}")]
    Duplicate(String),

    #[error("value not present: {0}")]
    NotFound(String),
}

pub type ContainerResult<T> = Result<T, ContainerError>;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
