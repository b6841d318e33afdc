//! rdesk Core Library
//!
//! This crate provides the non-UI core of the rdesk remote desktop session
//! manager: resolving connect requests into ready-to-use connection
//! descriptors, plus the profile list and host history logic behind the
//! host window.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (profiles, credentials, descriptors)
//! - [`session`] - The session parameter resolver
//! - [`profile`] - Profile store seam and list search/ordering
//! - [`secret`] - Lockable credential store seam
//! - [`history`] - Bounded MRU list of ad-hoc hosts
//! - [`logging`] - Tracing subscriber setup
//!
//! Window management, dialog flows, settings persistence, and the RDP
//! transport itself live in the surrounding suite, not here.

#![warn(missing_docs)]

pub mod error;
pub mod history;
pub mod logging;
pub mod models;
pub mod profile;
pub mod secret;
pub mod session;

pub use error::{ResolveError, ResolveResult};
pub use history::{DEFAULT_HISTORY_ENTRIES, HistoryEntry, HostHistory};
pub use logging::{LOG_ENV_VAR, LoggingConfig, LoggingError, init_logging, is_logging_initialized};
pub use models::{
    ConnectionDescriptor, ConnectionProfile, CredentialRecord, CredentialSource, Credentials,
    DEFAULT_RDP_PORT, ResolvedCredentials,
};
pub use profile::{
    MemoryProfileStore, ProfileStore, TAG_PREFIX, default_selection, filter_sorted, matches_search,
};
pub use secret::{CredentialStore, MemoryCredentialStore};
pub use session::{ConnectOverrides, SessionRequest, SessionResolver};
