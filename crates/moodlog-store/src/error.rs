use std::error::Error as StdError;
use std::io;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Storage failures. The store never folds these into an empty result;
/// callers decide whether an empty view is acceptable.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed data under {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub(crate) fn read(key: &str, source: io::Error) -> Self {
        Self::Read {
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn write(key: &str, source: io::Error) -> Self {
        Self::Write {
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn serialization(key: &str, source: impl Into<BoxError>) -> Self {
        Self::Serialization {
            key: key.to_string(),
            source: source.into(),
        }
    }

    /// Storage key the failure happened on.
    pub fn key(&self) -> &str {
        match self {
            Self::Read { key, .. } | Self::Write { key, .. } | Self::Serialization { key, .. } => {
                key
            }
        }
    }
}
