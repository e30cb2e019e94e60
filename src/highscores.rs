//! Best score persistence
//!
//! A single slot holding the best score as a plain base-10 string.

use crate::platform::KeyValueStore;

/// Best score across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "dino-high-score";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Read the stored best. Missing or garbled values count as 0.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = match store.get(Self::STORAGE_KEY) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                log::warn!("Ignoring unparsable high score {:?}", raw);
                0
            }),
            None => 0,
        };
        log::info!("Loaded high score {}", best);
        Self { best }
    }

    /// Record a finished run's score. Persists and returns true only when
    /// it beats the current best.
    pub fn record(&mut self, score: u64, store: &mut dyn KeyValueStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        match store.set(Self::STORAGE_KEY, &score.to_string()) {
            Ok(()) => log::info!("High score saved ({})", score),
            Err(e) => log::warn!("High score not saved: {}", e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryStore, StorageError};

    #[test]
    fn test_load_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_load_garbage_is_zero() {
        let store = MemoryStore::with_item(HighScore::STORAGE_KEY, "lots");
        assert_eq!(HighScore::load(&store).best(), 0);
        let store = MemoryStore::with_item(HighScore::STORAGE_KEY, "-5");
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_load_partial_number_is_zero() {
        for raw in ["12.5", "12abc"] {
            let store = MemoryStore::with_item(HighScore::STORAGE_KEY, raw);
            assert_eq!(HighScore::load(&store).best(), 0, "{raw}");
        }
    }

    #[test]
    fn test_load_value() {
        let store = MemoryStore::with_item(HighScore::STORAGE_KEY, "1234");
        assert_eq!(HighScore::load(&store).best(), 1234);
    }

    #[test]
    fn test_record_only_strictly_higher() {
        let mut store = MemoryStore::new();
        let mut high = HighScore::new(50);
        assert!(!high.record(50, &mut store));
        assert!(!high.record(10, &mut store));
        assert_eq!(store.get(HighScore::STORAGE_KEY), None);

        assert!(high.record(51, &mut store));
        assert_eq!(high.best(), 51);
        assert_eq!(store.get(HighScore::STORAGE_KEY).as_deref(), Some("51"));
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_record_survives_write_failure() {
        let mut high = HighScore::new(0);
        assert!(high.record(7, &mut BrokenStore));
        assert_eq!(high.best(), 7);
    }
}
