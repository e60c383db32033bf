use thiserror::Error;

/// Errors of the strict accessors.
///
/// The regular point operations treat absence as a normal outcome and never produce these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("missing key: {key:?}")]
    MissingKey { key: String },
    #[error("value is not stored under key: {key:?}")]
    MissingValue { key: String },
}

impl MapError {
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn missing_value(key: impl Into<String>) -> Self {
        Self::MissingValue { key: key.into() }
    }

    /// The key the failed operation was called with.
    pub fn key(&self) -> &str {
        match self {
            MapError::MissingKey { key } | MapError::MissingValue { key } => key,
        }
    }
}

pub type Result<T, E = MapError> = std::result::Result<T, E>;
