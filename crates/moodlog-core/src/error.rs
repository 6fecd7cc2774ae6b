/// Caller-side validation failures. Nothing is classified or written when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("input text is empty")]
    Empty,
    #[error("unknown emotion label: {0}")]
    UnknownLabel(String),
    #[error("unknown config key: {0}")]
    UnknownConfigKey(String),
    #[error("invalid value for {key}: {value}")]
    InvalidConfigValue { key: String, value: String },
    #[error("malformed sentiment analysis: {0}")]
    MalformedAnalysis(String),
}
