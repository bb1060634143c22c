use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};

/// Entry identifier to its sequential rank at generation time.
pub type Entries = DashMap<String, u64>;

/// A concurrent map that is safe per operation, but not across operations.
///
/// `len` and `insert_all` each see a consistent shard at a time and nothing
/// more: reading the size and then acting on it is only atomic while the
/// caller holds [`SharedMap::lock_for_fill`].
#[derive(Debug, Default)]
pub struct SharedMap {
    entries: Entries,
    fill_lock: Mutex<()>,
}

impl SharedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Entries) -> Self {
        Self {
            entries,
            fill_lock: Mutex::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bulk insert. Each entry lands independently, so concurrent readers
    /// can observe a partially applied batch.
    pub fn insert_all(&self, entries: Entries) -> usize {
        let mut inserted = 0;
        for (key, value) in entries {
            if self.entries.insert(key, value).is_none() {
                inserted += 1;
            }
        }
        inserted
    }

    /// Coarse lock tied to this instance. The map itself stays usable without
    /// it; only callers that take it are serialized.
    pub fn lock_for_fill(&self) -> MutexGuard<'_, ()> {
        self.fill_lock.lock()
    }
}
