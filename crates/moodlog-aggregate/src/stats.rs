use moodlog_core::{DashboardStats, EmotionRecord, Label};
use moodlog_store::{HistoryStore, KvBackend, Namespace, StoreError};
use serde::Serialize;

/// Label reported when no emotion has been recorded yet.
pub const EMPTY_TOP_EMOTION: Label = Label::Neutral;

/// Occurrences of one label across the emotion history.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LabelCount {
    pub label: Label,
    pub count: usize,
}

/// Count records per label, one row per label in [`Label::ALL`] order.
pub fn emotion_breakdown(records: &[EmotionRecord]) -> Vec<LabelCount> {
    let mut counts = [0usize; Label::ALL.len()];
    for r in records {
        counts[r.emotion.index()] += 1;
    }
    Label::ALL
        .into_iter()
        .map(|label| LabelCount {
            label,
            count: counts[label.index()],
        })
        .collect()
}

/// Most frequent label. Ties go to the label earliest in [`Label::ALL`];
/// an empty history yields [`EMPTY_TOP_EMOTION`].
pub fn top_emotion(records: &[EmotionRecord]) -> Label {
    let mut best: Option<LabelCount> = None;
    for row in emotion_breakdown(records) {
        if row.count > best.map_or(0, |b| b.count) {
            best = Some(row);
        }
    }
    best.map_or(EMPTY_TOP_EMOTION, |b| b.label)
}

/// Recompute dashboard numbers from the store. Reads only.
pub fn compute_stats<B: KvBackend>(store: &HistoryStore<B>) -> Result<DashboardStats, StoreError> {
    let emotions = store.emotions().all()?;
    let stats = DashboardStats {
        total_emotions: emotions.len(),
        total_yoga_sessions: store.count(Namespace::YogaHistory)?,
        total_stickers: store.count(Namespace::StickerHistory)?,
        streak: store.streak()?,
        top_emotion: top_emotion(&emotions),
    };
    tracing::debug!(?stats, "dashboard stats computed");
    Ok(stats)
}
