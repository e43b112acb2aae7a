use std::collections::HashMap;
use std::sync::{Arc, Mutex as SyncMutex};

use hanzi_types::CharacterRecord;
use tokio::sync::{Mutex, MutexGuard, RwLock};

type InFlight = SyncMutex<HashMap<String, Arc<Mutex<()>>>>;

/// Process-lifetime lookup cache, write-once per character
#[derive(Default)]
pub struct RecordCache {
    records: RwLock<HashMap<String, Arc<CharacterRecord>>>,
    in_flight: InFlight,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, character: &str) -> Option<Arc<CharacterRecord>> {
        self.records.read().await.get(character).cloned()
    }

    /// Insert unless the character is already present; returns the stored record
    pub async fn insert(&self, record: CharacterRecord) -> Arc<CharacterRecord> {
        let mut records = self.records.write().await;
        records
            .entry(record.character.clone())
            .or_insert_with(|| Arc::new(record))
            .clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Per-character lock serializing misses for the same key.
    /// The map entry goes away when the last holder drops its `KeyLock`.
    pub(crate) fn key_lock(&self, character: &str) -> KeyLock<'_> {
        let lock = lock_map(&self.in_flight)
            .entry(character.to_string())
            .or_default()
            .clone();

        KeyLock {
            in_flight: &self.in_flight,
            character: character.to_string(),
            lock,
        }
    }

    #[cfg(test)]
    pub(crate) fn in_flight_len(&self) -> usize {
        lock_map(&self.in_flight).len()
    }
}

fn lock_map(in_flight: &InFlight) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Mutex<()>>>> {
    in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handle on one character's in-flight lock
pub(crate) struct KeyLock<'a> {
    in_flight: &'a InFlight,
    character: String,
    lock: Arc<Mutex<()>>,
}

impl KeyLock<'_> {
    pub(crate) async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}

impl Drop for KeyLock<'_> {
    fn drop(&mut self) {
        let mut map = lock_map(self.in_flight);
        // Clones only happen under the map lock; 2 = map entry + this handle
        let last_holder = map.get(&self.character).is_some_and(|current| {
            Arc::ptr_eq(current, &self.lock) && Arc::strong_count(current) == 2
        });
        if last_holder {
            map.remove(&self.character);
        }
    }
}
