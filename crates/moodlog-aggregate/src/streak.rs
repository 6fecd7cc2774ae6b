use moodlog_store::{HistoryStore, KvBackend, Namespace, StoreError};

/// Bump the streak for one qualifying action and return the new value.
///
/// Increments are serialized per namespace, so concurrent calls in one
/// process never lose a count. A retried action is counted again.
pub fn record_qualifying_action<B: KvBackend>(store: &HistoryStore<B>) -> Result<u64, StoreError> {
    let streak = store.increment_counter(Namespace::Streak)?;
    tracing::info!(streak, "streak advanced");
    Ok(streak)
}

pub fn current_streak<B: KvBackend>(store: &HistoryStore<B>) -> Result<u64, StoreError> {
    store.streak()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_action_adds_one() {
        let store = HistoryStore::in_memory();
        assert_eq!(current_streak(&store).unwrap(), 0);
        assert_eq!(record_qualifying_action(&store).unwrap(), 1);
        assert_eq!(record_qualifying_action(&store).unwrap(), 2);
        assert_eq!(current_streak(&store).unwrap(), 2);
    }

    #[test]
    fn parallel_actions_all_count() {
        let store = HistoryStore::in_memory();
        std::thread::scope(|s| {
            for _ in 0..10 {
                s.spawn(|| {
                    for _ in 0..10 {
                        record_qualifying_action(&store).unwrap();
                    }
                });
            }
        });
        assert_eq!(current_streak(&store).unwrap(), 100);
    }
}
