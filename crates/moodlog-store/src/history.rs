use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use moodlog_core::{EmotionRecord, JournalEntry, Sticker, YogaSession};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::backend::{FileKv, KvBackend, MemoryKv};
use crate::error::StoreError;
use crate::namespace::{Namespace, SESSION_KEYS};
use crate::paths::StorePaths;

/// Namespaced append-only logs over a [`KvBackend`].
///
/// Each namespace holds one JSON array (or, for [`Namespace::Streak`], one
/// decimal counter). Every read-modify-write runs under that namespace's
/// mutex and the backend's key lock, so there is at most one writer per
/// namespace. Reads take no lock.
pub struct HistoryStore<B = FileKv> {
    backend: B,
    writers: [Mutex<()>; Namespace::COUNT],
}

impl HistoryStore<FileKv> {
    /// Open a file-backed store at `root`, creating its layout if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let backend = FileKv::open(StorePaths::discover(root))?;
        Ok(Self::new(backend))
    }

    pub fn paths(&self) -> &StorePaths {
        self.backend.paths()
    }
}

impl HistoryStore<MemoryKv> {
    pub fn in_memory() -> Self {
        Self::new(MemoryKv::new())
    }
}

impl<B: KvBackend> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            writers: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Records of `ns` in append order; empty if never written.
    pub fn get_all<T: DeserializeOwned>(&self, ns: Namespace) -> Result<Vec<T>, StoreError> {
        match self.backend.get(ns.key())? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::serialization(ns.key(), e)),
        }
    }

    /// Number of records in `ns`.
    pub fn count(&self, ns: Namespace) -> Result<usize, StoreError> {
        Ok(self.get_all::<Value>(ns)?.len())
    }

    /// Append `record` to `ns`. Returns the new length.
    ///
    /// Existing elements are carried as raw JSON, so fields this build does
    /// not know about survive the rewrite.
    pub fn append<T: Serialize>(&self, ns: Namespace, record: &T) -> Result<usize, StoreError> {
        let value = serde_json::to_value(record).map_err(|e| StoreError::serialization(ns.key(), e))?;
        self.with_writer(ns, || {
            let mut all: Vec<Value> = self.get_all(ns)?;
            all.push(value);
            self.put(ns, &all)?;
            Ok(all.len())
        })
    }

    /// Drop every record of `ns` matching `pred`, keeping the others in
    /// order. Returns how many were removed.
    ///
    /// Kept elements are written back as the raw JSON they were read as.
    /// An element that does not parse as `T` never matches and is kept.
    pub fn remove<T, F>(&self, ns: Namespace, pred: F) -> Result<usize, StoreError>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        self.with_writer(ns, || {
            let all: Vec<Value> = self.get_all(ns)?;
            let before = all.len();
            let kept: Vec<Value> = all
                .into_iter()
                .filter(|v| !serde_json::from_value::<T>(v.clone()).is_ok_and(|r| pred(&r)))
                .collect();
            let removed = before - kept.len();
            if removed > 0 {
                self.put(ns, &kept)?;
            }
            Ok(removed)
        })
    }

    /// Bulk-clear `ns`.
    pub fn clear(&self, ns: Namespace) -> Result<(), StoreError> {
        self.with_writer(ns, || {
            self.backend.remove(ns.key())?;
            tracing::debug!(key = ns.key(), "cleared");
            Ok(())
        })
    }

    /// Counter stored under `ns` as a decimal string; 0 if never written.
    pub fn get_counter(&self, ns: Namespace) -> Result<u64, StoreError> {
        match self.backend.get(ns.key())? {
            None => Ok(0),
            Some(raw) if raw.trim().is_empty() => Ok(0),
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| StoreError::serialization(ns.key(), e)),
        }
    }

    /// Add one to the counter under `ns` and return the new value.
    pub fn increment_counter(&self, ns: Namespace) -> Result<u64, StoreError> {
        self.with_writer(ns, || {
            let next = self.get_counter(ns)?.saturating_add(1);
            self.backend.set(ns.key(), &next.to_string())?;
            tracing::debug!(key = ns.key(), value = next, "counter incremented");
            Ok(next)
        })
    }

    /// Remove the login fields (logout). History is untouched.
    pub fn clear_session(&self) -> Result<(), StoreError> {
        for key in SESSION_KEYS {
            self.backend.remove(key)?;
        }
        Ok(())
    }

    // ── Typed accessors ──

    pub fn emotions(&self) -> Collection<'_, EmotionRecord, B> {
        Collection::new(self, Namespace::EmotionHistory)
    }

    pub fn journal(&self) -> Collection<'_, JournalEntry, B> {
        Collection::new(self, Namespace::JournalEntries)
    }

    pub fn yoga(&self) -> Collection<'_, YogaSession, B> {
        Collection::new(self, Namespace::YogaHistory)
    }

    pub fn stickers(&self) -> Collection<'_, Sticker, B> {
        Collection::new(self, Namespace::StickerHistory)
    }

    pub fn streak(&self) -> Result<u64, StoreError> {
        self.get_counter(Namespace::Streak)
    }

    // ── Internals ──

    fn with_writer<R>(
        &self,
        ns: Namespace,
        f: impl FnOnce() -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let _local = self.writers[ns.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let _key = self.backend.lock_key(ns.key())?;
        f()
    }

    fn put<T: Serialize>(&self, ns: Namespace, all: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string(all).map_err(|e| StoreError::serialization(ns.key(), e))?;
        self.backend.set(ns.key(), &json)?;
        tracing::debug!(key = ns.key(), len = all.len(), "collection written");
        Ok(())
    }
}

/// Typed view of one namespace.
pub struct Collection<'a, T, B = FileKv> {
    store: &'a HistoryStore<B>,
    ns: Namespace,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T, B> Collection<'a, T, B>
where
    T: Serialize + DeserializeOwned,
    B: KvBackend,
{
    fn new(store: &'a HistoryStore<B>, ns: Namespace) -> Self {
        Self {
            store,
            ns,
            _record: PhantomData,
        }
    }

    pub fn all(&self) -> Result<Vec<T>, StoreError> {
        self.store.get_all(self.ns)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        self.store.count(self.ns)
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    pub fn append(&self, record: &T) -> Result<usize, StoreError> {
        self.store.append(self.ns, record)
    }

    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) -> Result<usize, StoreError> {
        self.store.remove(self.ns, pred)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.clear(self.ns)
    }
}

impl<B: KvBackend> Collection<'_, JournalEntry, B> {
    /// Delete the entry with `id`. Returns whether one was removed.
    pub fn remove_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.remove_where(|e: &JournalEntry| e.id == id)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlog_core::{new_journal_entry, Label};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Rec {
        id: u32,
        note: String,
    }

    fn rec(id: u32) -> Rec {
        Rec {
            id,
            note: format!("note {id}"),
        }
    }

    fn emotion(label: Label) -> EmotionRecord {
        EmotionRecord {
            emotion: label,
            confidence: 0.5,
            source_text: "x".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn missing_namespace_reads_empty() {
        let store = HistoryStore::in_memory();
        let all: Vec<Rec> = store.get_all(Namespace::YogaHistory).unwrap();
        assert!(all.is_empty());
        assert_eq!(store.get_counter(Namespace::Streak).unwrap(), 0);
    }

    #[test]
    fn append_then_get_all_round_trips() {
        let store = HistoryStore::in_memory();
        for i in 0..4 {
            let before: Vec<Rec> = store.get_all(Namespace::YogaHistory).unwrap();
            let len = store.append(Namespace::YogaHistory, &rec(i)).unwrap();
            let after: Vec<Rec> = store.get_all(Namespace::YogaHistory).unwrap();
            assert_eq!(len, before.len() + 1);
            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(after.last(), Some(&rec(i)));
        }
    }

    #[test]
    fn remove_keeps_others_in_order() {
        let store = HistoryStore::in_memory();
        for i in 0..5 {
            store.append(Namespace::JournalEntries, &rec(i)).unwrap();
        }
        let removed = store
            .remove(Namespace::JournalEntries, |r: &Rec| r.id == 2)
            .unwrap();
        assert_eq!(removed, 1);
        let all: Vec<Rec> = store.get_all(Namespace::JournalEntries).unwrap();
        assert_eq!(all, vec![rec(0), rec(1), rec(3), rec(4)]);

        let removed = store
            .remove(Namespace::JournalEntries, |r: &Rec| r.id == 42)
            .unwrap();
        assert_eq!(removed, 0);
    }

    #[test]
    fn clear_empties_only_that_namespace() {
        let store = HistoryStore::in_memory();
        store.emotions().append(&emotion(Label::Sad)).unwrap();
        store.yoga().append(&YogaSession {
            pose_name: "Tree Pose".into(),
            duration: "3 min".into(),
            completed_at: "2026-01-01T00:00:00Z".into(),
        })
        .unwrap();
        store.emotions().clear().unwrap();
        assert!(store.emotions().is_empty().unwrap());
        assert_eq!(store.yoga().len().unwrap(), 1);
    }

    #[test]
    fn counter_increments_from_zero() {
        let store = HistoryStore::in_memory();
        assert_eq!(store.increment_counter(Namespace::Streak).unwrap(), 1);
        assert_eq!(store.increment_counter(Namespace::Streak).unwrap(), 2);
        assert_eq!(store.streak().unwrap(), 2);
        assert_eq!(store.backend().get("streak").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let store = HistoryStore::in_memory();
        store.backend().set("emotionHistory", "{not json").unwrap();
        let err = store.emotions().all().unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
        assert_eq!(err.key(), "emotionHistory");
        // Append must not overwrite what it could not parse.
        assert!(store.emotions().append(&emotion(Label::Happy)).is_err());
        assert_eq!(
            store.backend().get("emotionHistory").unwrap().as_deref(),
            Some("{not json")
        );

        store.backend().set("streak", "many").unwrap();
        assert!(matches!(
            store.streak(),
            Err(StoreError::Serialization { .. })
        ));
    }

    #[test]
    fn append_preserves_unknown_fields() {
        let store = HistoryStore::in_memory();
        store
            .backend()
            .set(
                "yogaHistory",
                r#"[{"poseName":"Savasana","duration":"10 min","completedAt":"t","mood":"calm"}]"#,
            )
            .unwrap();
        store.yoga().append(&YogaSession {
            pose_name: "Tree Pose".into(),
            duration: "3 min".into(),
            completed_at: "t2".into(),
        })
        .unwrap();
        let raw: Vec<Value> = store.get_all(Namespace::YogaHistory).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0]["mood"], "calm");
    }

    #[test]
    fn remove_keeps_unknown_fields_on_survivors() {
        let store = HistoryStore::in_memory();
        let a = new_journal_entry("first", Label::Calm);
        let b = new_journal_entry("second", Label::Sad);
        store.journal().append(&a).unwrap();
        let mut raw: Vec<Value> = store.get_all(Namespace::JournalEntries).unwrap();
        raw[0]["mood"] = Value::from("extra");
        store
            .backend()
            .set("journalEntries", &serde_json::to_string(&raw).unwrap())
            .unwrap();
        store.journal().append(&b).unwrap();

        assert!(store.journal().remove_by_id(&b.id).unwrap());
        let raw: Vec<Value> = store.get_all(Namespace::JournalEntries).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0]["mood"], "extra");
        assert_eq!(raw[0]["id"], a.id.as_str());
    }

    #[test]
    fn remove_skips_records_of_another_shape() {
        let store = HistoryStore::in_memory();
        store
            .backend()
            .set("journalEntries", r#"[{"legacy":true}]"#)
            .unwrap();
        let entry = new_journal_entry("kept", Label::Happy);
        store.journal().append(&entry).unwrap();
        assert!(store.journal().remove_by_id(&entry.id).unwrap());
        assert_eq!(
            store.backend().get("journalEntries").unwrap().as_deref(),
            Some(r#"[{"legacy":true}]"#)
        );
    }

    #[test]
    fn counter_accepts_integer_strings() {
        let store = HistoryStore::in_memory();
        store.backend().set("streak", "05").unwrap();
        assert_eq!(store.streak().unwrap(), 5);
        store.backend().set("streak", " +3\n").unwrap();
        assert_eq!(store.increment_counter(Namespace::Streak).unwrap(), 4);
        store.backend().set("streak", "-1").unwrap();
        assert!(matches!(store.streak(), Err(StoreError::Serialization { .. })));
    }

    #[test]
    fn journal_remove_by_id() {
        let store = HistoryStore::in_memory();
        let a = new_journal_entry("first", Label::Calm);
        let b = new_journal_entry("second", Label::Sad);
        store.journal().append(&a).unwrap();
        store.journal().append(&b).unwrap();
        assert!(store.journal().remove_by_id(&a.id).unwrap());
        assert!(!store.journal().remove_by_id(&a.id).unwrap());
        assert_eq!(store.journal().all().unwrap(), vec![b]);
    }

    #[test]
    fn clear_session_leaves_history() {
        let store = HistoryStore::in_memory();
        for key in SESSION_KEYS {
            store.backend().set(key, "v").unwrap();
        }
        store.increment_counter(Namespace::Streak).unwrap();
        store.clear_session().unwrap();
        for key in SESSION_KEYS {
            assert_eq!(store.backend().get(key).unwrap(), None);
        }
        assert_eq!(store.streak().unwrap(), 1);
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let store = HistoryStore::in_memory();
        std::thread::scope(|s| {
            for t in 0..8u32 {
                let store = &store;
                s.spawn(move || {
                    for i in 0..25u32 {
                        store.append(Namespace::EmotionHistory, &rec(t * 100 + i)).unwrap();
                    }
                });
            }
        });
        let all: Vec<Rec> = store.get_all(Namespace::EmotionHistory).unwrap();
        assert_eq!(all.len(), 200);
    }

    #[test]
    fn concurrent_increments_sum_exactly_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(tmp.path()).unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                let store = &store;
                s.spawn(move || {
                    for _ in 0..20 {
                        store.increment_counter(Namespace::Streak).unwrap();
                    }
                });
            }
        });
        assert_eq!(store.streak().unwrap(), 80);
    }

    #[test]
    fn file_store_round_trips_records() {
        let tmp = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(tmp.path()).unwrap();
        store.emotions().append(&emotion(Label::Anxious)).unwrap();
        drop(store);

        let store = HistoryStore::open(tmp.path()).unwrap();
        let all = store.emotions().all().unwrap();
        assert_eq!(all, vec![emotion(Label::Anxious)]);
        assert!(store.paths().key_file("emotionHistory").is_file());
    }
}
