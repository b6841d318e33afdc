//! Error types for rdesk-core
//!
//! Resolution errors are returned to the caller for UI-level handling: the
//! resolver performs no retries and has no fatal conditions of its own.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during session parameter resolution
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The credential store has not been unlocked yet.
    ///
    /// The caller should prompt for unlock and retry the resolution.
    #[error("credential store is locked")]
    CredentialStoreLocked,

    /// A credential reference points at a record the store does not have.
    ///
    /// The caller should surface a user-facing notice and abort; retrying
    /// cannot succeed until the reference is fixed.
    #[error("credential {0} not found in store")]
    CredentialNotFound(Uuid),

    /// The profile (or ad-hoc input) is missing a usable host.
    #[error("profile '{0}' has no host")]
    InvalidProfile(String),
}

/// Result type for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;
