//! Credential store access for rdesk
//!
//! The store holds decrypted username/secret pairs behind a lock: until it
//! is unlocked (master password entry is a caller concern) no lookups can be
//! served. [`CredentialStore`] is the seam the resolver works against;
//! [`MemoryCredentialStore`] is the in-process implementation used by the
//! suite and by tests.

mod store;

pub use store::{CredentialStore, MemoryCredentialStore};
