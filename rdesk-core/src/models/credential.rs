//! Credential models.
//!
//! Secrets are wrapped in [`SecretString`] so they are redacted in `Debug`
//! output and zeroized on drop. Neither type derives serde: decrypted
//! credentials live only in memory, persistence belongs to the external
//! credential store.

use secrecy::SecretString;
use uuid::Uuid;

/// A decrypted username/secret pair stored in the credential store
///
/// Looked up by its opaque [`Uuid`] identifier. The record may be missing
/// (dangling reference) or unavailable (store locked); see
/// [`CredentialStore`](crate::secret::CredentialStore).
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// Unique identifier referenced by profiles
    pub id: Uuid,
    /// Username
    pub username: String,
    /// Secret (password)
    pub secret: SecretString,
}

impl CredentialRecord {
    /// Creates a new credential record
    #[must_use]
    pub fn new(id: Uuid, username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            secret: SecretString::from(secret.into()),
        }
    }
}

/// An explicit username/secret pair entered by the user
///
/// Used as connect-as overrides; takes precedence over any stored credential
/// reference during resolution.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Username
    pub username: String,
    /// Secret (password)
    pub secret: SecretString,
}

impl Credentials {
    /// Creates a new credential pair
    #[must_use]
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: SecretString::from(secret.into()),
        }
    }
}
