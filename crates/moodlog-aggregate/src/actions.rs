//! User-facing wellness actions: each one validates input, consults the
//! classifier or tables, and records the result through the history store.

use moodlog_core::lexicon::{DETECTION, JOURNAL};
use moodlog_core::tables::{self, CopingStrategy, YogaPose, STICKER_FALLBACK_POSE};
use moodlog_core::{
    new_emotion_record, new_journal_entry, new_sticker, new_yoga_session, validate_input,
    Classification, Classifier, DashboardStats, EmotionRecord, JournalEntry, Label,
    MoodlogConfig, Sticker, YogaSession,
};
use moodlog_store::{HistoryStore, KvBackend};

use crate::error::ActionError;
use crate::{stats, streak};

/// Outcome of [`Wellness::detect_emotion`].
#[derive(Debug, Clone)]
pub struct Detection {
    pub classification: Classification,
    pub record: EmotionRecord,
    pub streak: u64,
}

/// Outcome of [`Wellness::save_journal_entry`].
#[derive(Debug, Clone)]
pub struct JournalOutcome {
    pub entry: JournalEntry,
    pub strategies: &'static [CopingStrategy],
}

/// Action layer bound to one store and one configuration.
pub struct Wellness<'a, B: KvBackend> {
    store: &'a HistoryStore<B>,
    config: MoodlogConfig,
}

impl<'a, B: KvBackend> Wellness<'a, B> {
    pub fn new(store: &'a HistoryStore<B>, config: MoodlogConfig) -> Self {
        Self { store, config }
    }

    fn detection_classifier(&self) -> Classifier {
        Classifier::new(DETECTION, self.config.detect_fallback)
            .with_saturation(self.config.confidence_saturation)
    }

    fn journal_classifier(&self) -> Classifier {
        Classifier::new(JOURNAL, self.config.journal_fallback)
            .with_saturation(self.config.confidence_saturation)
    }

    // ── Emotion detection ──

    /// Classify `text`, advance the streak and append the record to the
    /// emotion history.
    ///
    /// The streak is written first: a failed detection never leaves a
    /// record behind, at worst one extra streak point.
    pub fn detect_emotion(&self, text: &str) -> Result<Detection, ActionError> {
        let text = validate_input(text)?;
        let classification = self.detection_classifier().classify(text);
        let record = new_emotion_record(text, &classification);
        let streak = streak::record_qualifying_action(self.store)?;
        self.store.emotions().append(&record)?;
        tracing::info!(
            emotion = %classification.label,
            matches = classification.matches,
            "emotion detected"
        );
        Ok(Detection {
            classification,
            record,
            streak,
        })
    }

    pub fn emotion_history(&self) -> Result<Vec<EmotionRecord>, ActionError> {
        Ok(self.store.emotions().all()?)
    }

    pub fn clear_emotion_history(&self) -> Result<(), ActionError> {
        self.store.emotions().clear()?;
        tracing::info!("emotion history cleared");
        Ok(())
    }

    // ── Journal ──

    /// Save a journal entry tagged with its detected emotion and return the
    /// coping strategies for that emotion.
    pub fn save_journal_entry(&self, text: &str) -> Result<JournalOutcome, ActionError> {
        let text = validate_input(text)?;
        let emotion = self.journal_classifier().classify(text).label;
        let entry = new_journal_entry(text, emotion);
        self.store.journal().append(&entry)?;
        tracing::info!(id = %entry.id, %emotion, "journal entry saved");
        Ok(JournalOutcome {
            entry,
            strategies: tables::coping_strategies(emotion),
        })
    }

    /// Journal entries, newest first.
    pub fn journal_entries(&self) -> Result<Vec<JournalEntry>, ActionError> {
        let mut entries = self.store.journal().all()?;
        entries.reverse();
        Ok(entries)
    }

    /// Delete a journal entry. Returns whether it existed.
    pub fn delete_journal_entry(&self, id: &str) -> Result<bool, ActionError> {
        let removed = self.store.journal().remove_by_id(id)?;
        if removed {
            tracing::info!(id, "journal entry deleted");
        } else {
            tracing::warn!(id, "journal entry not found");
        }
        Ok(removed)
    }

    // ── Yoga ──

    /// Poses for `mood`; moods without their own list get the `calm` poses.
    pub fn recommend_poses(&self, mood: Label) -> &'static [YogaPose] {
        tables::yoga_poses(mood)
    }

    /// Record a completed practice of `pose_name`.
    pub fn complete_yoga_session(&self, pose_name: &str) -> Result<YogaSession, ActionError> {
        let pose = tables::find_pose(pose_name.trim())
            .ok_or_else(|| ActionError::UnknownPose(pose_name.to_string()))?;
        let session = new_yoga_session(pose);
        self.store.yoga().append(&session)?;
        tracing::info!(pose = pose.name, duration = pose.duration, "yoga session completed");
        Ok(session)
    }

    pub fn yoga_history(&self) -> Result<Vec<YogaSession>, ActionError> {
        Ok(self.store.yoga().all()?)
    }

    // ── Stickers ──

    /// Create a sticker for `pose_name` (default: Sun Salutation). The
    /// template is copied into the record; unknown poses keep their name but
    /// get the default template.
    pub fn generate_sticker(&self, pose_name: Option<&str>) -> Result<Sticker, ActionError> {
        let pose_name = pose_name
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(STICKER_FALLBACK_POSE);
        if !tables::has_sticker_template(pose_name) {
            tracing::warn!(pose = pose_name, "no sticker template for pose, using default");
        }
        let sticker = new_sticker(pose_name, tables::sticker_template(pose_name));
        self.store.stickers().append(&sticker)?;
        tracing::info!(id = %sticker.id, pose = pose_name, "sticker generated");
        Ok(sticker)
    }

    pub fn stickers(&self) -> Result<Vec<Sticker>, ActionError> {
        Ok(self.store.stickers().all()?)
    }

    // ── Dashboard ──

    pub fn dashboard(&self) -> Result<DashboardStats, ActionError> {
        Ok(stats::compute_stats(self.store)?)
    }

    /// Logout: drop the session fields, keep all history.
    pub fn logout(&self) -> Result<(), ActionError> {
        self.store.clear_session()?;
        tracing::info!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlog_core::InputError;
    use moodlog_store::{MemoryKv, Namespace, StoreError, SESSION_KEYS};

    /// Memory backend whose streak key cannot be written.
    struct StuckStreak(MemoryKv);

    impl KvBackend for StuckStreak {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == Namespace::Streak.key() {
                return Err(StoreError::Write {
                    key: key.to_string(),
                    source: std::io::Error::other("read-only"),
                });
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    fn wellness(store: &HistoryStore<MemoryKv>) -> Wellness<'_, MemoryKv> {
        Wellness::new(store, MoodlogConfig::default())
    }

    #[test]
    fn detect_records_and_advances_streak() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        let d = w.detect_emotion("I feel so happy and full of joy today").unwrap();
        assert_eq!(d.classification.label, Label::Happy);
        assert_eq!(d.record.emotion, Label::Happy);
        assert_eq!(d.record.source_text, "I feel so happy and full of joy today");
        assert_eq!(d.streak, 1);

        let d = w.detect_emotion("quiet afternoon").unwrap();
        assert_eq!(d.record.emotion, Label::Neutral);
        assert_eq!(d.record.confidence, 0.0);
        assert_eq!(d.streak, 2);

        assert_eq!(w.emotion_history().unwrap().len(), 2);
    }

    #[test]
    fn failed_streak_write_leaves_no_emotion_record() {
        let store = HistoryStore::new(StuckStreak(MemoryKv::new()));
        let w = Wellness::new(&store, MoodlogConfig::default());
        let err = w.detect_emotion("so happy").unwrap_err();
        assert!(matches!(err, ActionError::Store(StoreError::Write { .. })));
        assert!(store.emotions().is_empty().unwrap());
    }

    #[test]
    fn blank_text_has_no_side_effects() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        let err = w.detect_emotion("   ").unwrap_err();
        assert!(matches!(err, ActionError::Input(InputError::Empty)));
        assert!(w.save_journal_entry("").is_err());
        assert_eq!(store.streak().unwrap(), 0);
        assert!(store.emotions().is_empty().unwrap());
        assert!(store.journal().is_empty().unwrap());
    }

    #[test]
    fn call_sites_use_their_own_fallback() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        let d = w.detect_emotion("went to the market").unwrap();
        assert_eq!(d.record.emotion, Label::Neutral);
        let j = w.save_journal_entry("went to the market").unwrap();
        assert_eq!(j.entry.emotion, Label::Calm);
        assert_eq!(j.strategies[0].title, "Maintain Balance");
    }

    #[test]
    fn configured_fallbacks_are_honoured() {
        let store = HistoryStore::in_memory();
        let config = MoodlogConfig {
            detect_fallback: Label::Calm,
            journal_fallback: Label::Neutral,
            confidence_saturation: 1,
        };
        let w = Wellness::new(&store, config);
        assert_eq!(w.detect_emotion("plain words").unwrap().record.emotion, Label::Calm);
        let j = w.save_journal_entry("plain words").unwrap();
        assert_eq!(j.entry.emotion, Label::Neutral);
        // Neutral has no coping list of its own.
        assert_eq!(j.strategies, tables::coping_strategies(Label::Calm));
        assert_eq!(w.detect_emotion("so lonely").unwrap().record.confidence, 1.0);
    }

    #[test]
    fn journal_save_list_delete() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        let a = w.save_journal_entry("I panic before exams").unwrap();
        assert_eq!(a.entry.emotion, Label::Anxious);
        assert_eq!(a.strategies[0].title, "Breathing Exercise");
        let b = w.save_journal_entry("Feeling blessed").unwrap();
        assert_eq!(b.entry.emotion, Label::Happy);

        let listed = w.journal_entries().unwrap();
        assert_eq!(listed[0].id, b.entry.id);
        assert_eq!(listed[1].id, a.entry.id);

        assert!(w.delete_journal_entry(&a.entry.id).unwrap());
        assert!(!w.delete_journal_entry(&a.entry.id).unwrap());
        assert_eq!(w.journal_entries().unwrap(), vec![b.entry]);
        // Journaling is not a streak action.
        assert_eq!(store.streak().unwrap(), 0);
    }

    #[test]
    fn yoga_session_copies_duration() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        assert_eq!(w.recommend_poses(Label::Sad)[0].name, "Child Pose");
        assert_eq!(w.recommend_poses(Label::Neutral), tables::yoga_poses(Label::Calm));

        let s = w.complete_yoga_session("Legs Up Wall").unwrap();
        assert_eq!(s.duration, "10 min");
        assert_eq!(w.yoga_history().unwrap(), vec![s]);

        let err = w.complete_yoga_session("Headstand").unwrap_err();
        assert!(matches!(err, ActionError::UnknownPose(_)));
        assert_eq!(store.count(Namespace::YogaHistory).unwrap(), 1);
    }

    #[test]
    fn sticker_template_is_frozen_at_creation() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        let s = w.generate_sticker(Some("Warrior Pose")).unwrap();
        assert_eq!(s.visual_template.caption, "Warrior Strong");

        let d = w.generate_sticker(None).unwrap();
        assert_eq!(d.pose_name, "Sun Salutation");

        let u = w.generate_sticker(Some("Crow Pose")).unwrap();
        assert_eq!(u.pose_name, "Crow Pose");
        assert_eq!(u.visual_template.caption, "Sun Salutation Master");

        // Stored copies are read back verbatim, not re-derived.
        let mut stored = w.stickers().unwrap();
        assert_eq!(stored.len(), 3);
        stored[0].visual_template.caption = "edited".into();
        store.stickers().clear().unwrap();
        store.stickers().append(&stored[0]).unwrap();
        assert_eq!(w.stickers().unwrap()[0].visual_template.caption, "edited");
    }

    #[test]
    fn dashboard_reflects_actions() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        w.detect_emotion("so sad and lonely").unwrap();
        w.detect_emotion("feeling down").unwrap();
        w.detect_emotion("happy day").unwrap();
        w.complete_yoga_session("Child Pose").unwrap();
        w.generate_sticker(Some("Child Pose")).unwrap();

        let stats = w.dashboard().unwrap();
        assert_eq!(stats.total_emotions, 3);
        assert_eq!(stats.total_yoga_sessions, 1);
        assert_eq!(stats.total_stickers, 1);
        assert_eq!(stats.streak, 3);
        assert_eq!(stats.top_emotion, Label::Sad);
    }

    #[test]
    fn logout_clears_only_session() {
        let store = HistoryStore::in_memory();
        let w = wellness(&store);
        w.detect_emotion("calm").unwrap();
        for key in SESSION_KEYS {
            store.backend().set(key, "x").unwrap();
        }
        w.logout().unwrap();
        assert_eq!(store.backend().get("userToken").unwrap(), None);
        assert_eq!(w.emotion_history().unwrap().len(), 1);
    }

    #[test]
    fn storage_failure_surfaces_without_streak() {
        let store = HistoryStore::in_memory();
        store.backend().set("emotionHistory", "garbage").unwrap();
        let w = wellness(&store);
        let err = w.detect_emotion("happy").unwrap_err();
        assert!(matches!(err, ActionError::Store(_)));
        assert_eq!(store.streak().unwrap(), 0);
    }
}
