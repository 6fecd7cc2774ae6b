pub mod actions;
pub mod error;
pub mod stats;
pub mod streak;

pub use actions::{Detection, JournalOutcome, Wellness};
pub use error::ActionError;
pub use stats::{compute_stats, emotion_breakdown, top_emotion, LabelCount};
pub use streak::{current_streak, record_qualifying_action};
