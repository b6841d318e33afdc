//! Connection descriptor model.
//!
//! The descriptor is the resolver's output: a fully-resolved parameter set
//! for one connection attempt. It is created fresh per attempt and handed to
//! the transport layer; it has no further lifecycle of its own.

use secrecy::SecretString;

/// Where resolved credentials came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Explicitly entered by the user for this attempt
    Override,
    /// Looked up in the credential store via a credential reference
    Store,
}

/// Credentials attached to a descriptor
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    /// Username
    pub username: String,
    /// Secret (password)
    pub secret: SecretString,
    /// Origin of the pair
    pub source: CredentialSource,
}

/// A resolved, ready-to-use connection parameter set
///
/// Invariant: a descriptor never carries a dangling credential reference.
/// Either `credentials` holds a complete username/secret pair or it is
/// `None`; resolution fails instead of producing a partial descriptor.
#[derive(Debug, Clone)]
pub struct ConnectionDescriptor {
    /// Target hostname or IP address
    pub host: String,
    /// Target port
    pub port: u16,
    /// Display label for the session tab
    pub label: String,
    /// Resolved credentials, absent when connecting without credentials
    pub credentials: Option<ResolvedCredentials>,
}

impl ConnectionDescriptor {
    /// Returns true if the descriptor carries credentials
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Returns the credential source, if credentials are attached
    #[must_use]
    pub fn credential_source(&self) -> Option<CredentialSource> {
        self.credentials.as_ref().map(|c| c.source)
    }
}
