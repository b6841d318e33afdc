//! Credential store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::CredentialRecord;

/// Read-only view of a lockable credential repository
///
/// Implementations must be cheap to query: the resolver calls
/// [`is_unlocked`](Self::is_unlocked) and [`get`](Self::get) synchronously
/// on every resolution. Unlocking the store (and any dialog flow around it)
/// is the caller's responsibility.
pub trait CredentialStore: Send + Sync {
    /// Returns true if the store has been unlocked
    fn is_unlocked(&self) -> bool;

    /// Looks up a credential record by its identifier
    ///
    /// Returns `None` when the record does not exist. Callers must check
    /// [`is_unlocked`](Self::is_unlocked) first; a locked store returns
    /// `None` for every id and the two cases must not be conflated.
    fn get(&self, id: Uuid) -> Option<CredentialRecord>;
}

/// In-memory credential store with an explicit lock state
///
/// Starts locked, mirroring a credential vault that has not had its master
/// password entered yet. All methods take `&self`; interior locking keeps
/// the store shareable across threads.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: RwLock<HashMap<Uuid, CredentialRecord>>,
    unlocked: AtomicBool,
}

impl MemoryCredentialStore {
    /// Creates a new, locked, empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unlocked store pre-filled with the given records
    #[must_use]
    pub fn unlocked_with(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        let store = Self::new();
        store.unlock();
        {
            let mut map = store.records_mut();
            for record in records {
                map.insert(record.id, record);
            }
        }
        store
    }

    /// Marks the store as unlocked
    pub fn unlock(&self) {
        self.unlocked.store(true, Ordering::Release);
    }

    /// Marks the store as locked again
    ///
    /// Records are kept; they simply become unavailable until the next
    /// unlock.
    pub fn lock(&self) {
        self.unlocked.store(false, Ordering::Release);
    }

    /// Inserts or replaces a record
    pub fn insert(&self, record: CredentialRecord) {
        self.records_mut().insert(record.id, record);
    }

    /// Removes a record, returning it if present
    pub fn remove(&self, id: Uuid) -> Option<CredentialRecord> {
        self.records_mut().remove(&id)
    }

    /// Returns the number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Returns true if the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn records(&self) -> RwLockReadGuard<'_, HashMap<Uuid, CredentialRecord>> {
        self.records.read().expect("record map should not be poisoned")
    }

    fn records_mut(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, CredentialRecord>> {
        self.records.write().expect("record map should not be poisoned")
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::Acquire)
    }

    fn get(&self, id: Uuid) -> Option<CredentialRecord> {
        if !self.is_unlocked() {
            return None;
        }
        self.records().get(&id).cloned()
    }
}
