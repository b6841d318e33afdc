//! Session parameter resolver.
//!
//! Merges profile defaults, stored credentials, and user overrides into a
//! [`ConnectionDescriptor`] with a strict credential precedence:
//!
//! 1. explicit username/secret from the overrides,
//! 2. credential-store lookup by the overrides' credential id, falling back
//!    to the profile's credential id,
//! 3. no credentials.
//!
//! A credential id that cannot be resolved is a hard error
//! ([`CredentialStoreLocked`](ResolveError::CredentialStoreLocked) or
//! [`CredentialNotFound`](ResolveError::CredentialNotFound)); resolution
//! never silently falls through to "no credentials".

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ResolveError, ResolveResult};
use crate::models::{
    ConnectionDescriptor, ConnectionProfile, CredentialSource, Credentials, DEFAULT_RDP_PORT,
    ResolvedCredentials,
};
use crate::secret::CredentialStore;

/// User-entered adjustments applied on top of a profile or ad-hoc host
///
/// Collected by the connect / connect-as dialogs. All fields are optional;
/// an empty override leaves the base input untouched.
#[derive(Debug, Clone, Default)]
pub struct ConnectOverrides {
    /// Replacement display label (tab header)
    pub label: Option<String>,
    /// Explicit username/secret pair, highest credential precedence
    pub credentials: Option<Credentials>,
    /// Stored credential to use instead of the profile's reference
    pub credential_id: Option<Uuid>,
}

impl ConnectOverrides {
    /// Creates an empty override set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets explicit credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets a stored credential reference
    #[must_use]
    pub const fn with_credential_id(mut self, id: Uuid) -> Self {
        self.credential_id = Some(id);
        self
    }
}

/// Input to a single resolution
#[derive(Debug, Clone)]
pub enum SessionRequest {
    /// Connect to a host entered directly, without a saved profile
    AdHoc {
        /// Raw host string as entered by the user
        host: String,
        /// Dialog adjustments (label, credentials)
        overrides: ConnectOverrides,
    },
    /// Connect using a saved profile as-is
    Profile {
        /// The selected profile
        profile: ConnectionProfile,
    },
    /// Connect using a saved profile with connect-as adjustments
    ProfileAs {
        /// The selected profile
        profile: ConnectionProfile,
        /// Dialog adjustments (label, credentials)
        overrides: ConnectOverrides,
    },
}

impl SessionRequest {
    /// Creates an ad-hoc request without overrides
    #[must_use]
    pub fn ad_hoc(host: impl Into<String>) -> Self {
        Self::AdHoc {
            host: host.into(),
            overrides: ConnectOverrides::new(),
        }
    }

    /// Creates an ad-hoc request with overrides
    #[must_use]
    pub fn ad_hoc_with(host: impl Into<String>, overrides: ConnectOverrides) -> Self {
        Self::AdHoc {
            host: host.into(),
            overrides,
        }
    }

    /// Creates a profile request
    #[must_use]
    pub const fn profile(profile: ConnectionProfile) -> Self {
        Self::Profile { profile }
    }

    /// Creates a connect-as request
    #[must_use]
    pub const fn profile_as(profile: ConnectionProfile, overrides: ConnectOverrides) -> Self {
        Self::ProfileAs { profile, overrides }
    }
}

/// Resolves connect requests into connection descriptors
///
/// The resolver is synchronous and re-entrant: it holds no mutable state and
/// can be called repeatedly, including retrying the same request after the
/// caller unlocks the credential store.
#[derive(Clone)]
pub struct SessionResolver {
    credential_store: Arc<dyn CredentialStore>,
}

impl SessionResolver {
    /// Creates a resolver backed by the given credential store
    #[must_use]
    pub fn new(credential_store: Arc<dyn CredentialStore>) -> Self {
        Self { credential_store }
    }

    /// Resolves a request into a connection descriptor
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidProfile`] when the host is missing,
    /// [`ResolveError::CredentialStoreLocked`] when a credential reference
    /// is present but the store is locked, and
    /// [`ResolveError::CredentialNotFound`] when the reference is dangling.
    pub fn resolve(&self, request: &SessionRequest) -> ResolveResult<ConnectionDescriptor> {
        match request {
            SessionRequest::AdHoc { host, overrides } => self.resolve_ad_hoc(host, overrides),
            SessionRequest::Profile { profile } => {
                self.resolve_with(profile, &ConnectOverrides::new())
            }
            SessionRequest::ProfileAs { profile, overrides } => {
                self.resolve_with(profile, overrides)
            }
        }
    }

    /// Resolves an ad-hoc host without overrides
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidProfile`] when the host is empty.
    pub fn resolve_host(&self, host: &str) -> ResolveResult<ConnectionDescriptor> {
        self.resolve_ad_hoc(host, &ConnectOverrides::new())
    }

    /// Resolves a profile without overrides
    ///
    /// # Errors
    /// See [`resolve`](Self::resolve).
    pub fn resolve_profile(
        &self,
        profile: &ConnectionProfile,
    ) -> ResolveResult<ConnectionDescriptor> {
        self.resolve_with(profile, &ConnectOverrides::new())
    }

    /// Resolves a profile with connect-as overrides
    ///
    /// # Errors
    /// See [`resolve`](Self::resolve).
    pub fn resolve_profile_as(
        &self,
        profile: &ConnectionProfile,
        overrides: &ConnectOverrides,
    ) -> ResolveResult<ConnectionDescriptor> {
        self.resolve_with(profile, overrides)
    }

    fn resolve_ad_hoc(
        &self,
        host: &str,
        overrides: &ConnectOverrides,
    ) -> ResolveResult<ConnectionDescriptor> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ResolveError::InvalidProfile(String::new()));
        }

        let credentials =
            self.resolve_credentials(overrides.credentials.as_ref(), overrides.credential_id)?;
        let label = overrides.label.clone().unwrap_or_else(|| host.to_string());

        debug!(
            host,
            with_credentials = credentials.is_some(),
            "resolved ad-hoc session"
        );

        Ok(ConnectionDescriptor {
            host: host.to_string(),
            port: DEFAULT_RDP_PORT,
            label,
            credentials,
        })
    }

    fn resolve_with(
        &self,
        profile: &ConnectionProfile,
        overrides: &ConnectOverrides,
    ) -> ResolveResult<ConnectionDescriptor> {
        let host = profile.host.trim();
        if host.is_empty() {
            return Err(ResolveError::InvalidProfile(profile.name.clone()));
        }

        let credential_id = overrides.credential_id.or(profile.credential_id);
        let credentials = self.resolve_credentials(overrides.credentials.as_ref(), credential_id)?;

        let label = overrides
            .label
            .clone()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| {
                if profile.name.trim().is_empty() {
                    host.to_string()
                } else {
                    profile.name.clone()
                }
            });

        debug!(
            profile = %profile.id,
            host,
            with_credentials = credentials.is_some(),
            "resolved profile session"
        );

        Ok(ConnectionDescriptor {
            host: host.to_string(),
            port: profile.port,
            label,
            credentials,
        })
    }

    /// Applies the credential precedence order
    fn resolve_credentials(
        &self,
        explicit: Option<&Credentials>,
        credential_id: Option<Uuid>,
    ) -> ResolveResult<Option<ResolvedCredentials>> {
        if let Some(creds) = explicit {
            return Ok(Some(ResolvedCredentials {
                username: creds.username.clone(),
                secret: creds.secret.clone(),
                source: CredentialSource::Override,
            }));
        }

        let Some(id) = credential_id else {
            return Ok(None);
        };

        if !self.credential_store.is_unlocked() {
            warn!(credential = %id, "credential store locked during resolution");
            return Err(ResolveError::CredentialStoreLocked);
        }

        match self.credential_store.get(id) {
            Some(record) => Ok(Some(ResolvedCredentials {
                username: record.username,
                secret: record.secret,
                source: CredentialSource::Store,
            })),
            None => {
                warn!(credential = %id, "dangling credential reference");
                Err(ResolveError::CredentialNotFound(id))
            }
        }
    }
}
