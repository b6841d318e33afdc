//! Profile store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::ConnectionProfile;

/// Read-only view of a profile repository
pub trait ProfileStore: Send + Sync {
    /// Looks up a profile by its identifier
    fn get_profile(&self, id: Uuid) -> Option<ConnectionProfile>;

    /// Returns all profiles, in unspecified order
    fn list_profiles(&self) -> Vec<ConnectionProfile>;
}

/// In-memory profile store
///
/// Persistence lives outside this crate; the suite loads saved profiles into
/// this store at startup and flushes changes back through its own settings
/// layer.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, ConnectionProfile>>,
}

impl MemoryProfileStore {
    /// Creates a new, empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the given profiles
    #[must_use]
    pub fn with_profiles(profiles: impl IntoIterator<Item = ConnectionProfile>) -> Self {
        let store = Self::new();
        {
            let mut map = store.profiles_mut();
            for profile in profiles {
                map.insert(profile.id, profile);
            }
        }
        store
    }

    /// Inserts or replaces a profile
    pub fn insert(&self, profile: ConnectionProfile) {
        self.profiles_mut().insert(profile.id, profile);
    }

    /// Removes a profile, returning it if present
    pub fn remove(&self, id: Uuid) -> Option<ConnectionProfile> {
        self.profiles_mut().remove(&id)
    }

    /// Returns the number of stored profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles().len()
    }

    /// Returns true if the store holds no profiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn profiles(&self) -> RwLockReadGuard<'_, HashMap<Uuid, ConnectionProfile>> {
        self.profiles.read().expect("profile map should not be poisoned")
    }

    fn profiles_mut(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, ConnectionProfile>> {
        self.profiles.write().expect("profile map should not be poisoned")
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get_profile(&self, id: Uuid) -> Option<ConnectionProfile> {
        self.profiles().get(&id).cloned()
    }

    fn list_profiles(&self) -> Vec<ConnectionProfile> {
        self.profiles().values().cloned().collect()
    }
}
