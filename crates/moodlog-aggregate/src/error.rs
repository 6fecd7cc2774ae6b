use moodlog_core::InputError;
use moodlog_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown yoga pose: {0}")]
    UnknownPose(String),
}
