//! Connection profile model.
//!
//! A profile is a saved remote desktop target. Profiles are owned by a
//! [`ProfileStore`](crate::profile::ProfileStore); the resolver treats them
//! as immutable input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default port for RDP connections
pub const DEFAULT_RDP_PORT: u16 = 3389;

/// A saved remote desktop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name shown in the profile list and as tab label
    pub name: String,
    /// Target hostname or IP address
    pub host: String,
    /// Target port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Group the profile is sorted under
    #[serde(default)]
    pub group: String,
    /// Free-form tags, matched by `tag=` searches
    #[serde(default)]
    pub tags: Vec<String>,
    /// Reference to a stored credential, if the profile has default credentials
    #[serde(default)]
    pub credential_id: Option<Uuid>,
    /// Whether the profile is enabled for remote desktop connections
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_port() -> u16 {
    DEFAULT_RDP_PORT
}

const fn default_enabled() -> bool {
    true
}

impl ConnectionProfile {
    /// Creates a new enabled profile with the default RDP port
    #[must_use]
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            host: host.into(),
            port: DEFAULT_RDP_PORT,
            group: String::new(),
            tags: Vec::new(),
            credential_id: None,
            enabled: true,
        }
    }

    /// Sets the port
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the group
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the tags
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the credential reference
    #[must_use]
    pub const fn with_credential_id(mut self, id: Uuid) -> Self {
        self.credential_id = Some(id);
        self
    }

    /// Disables the profile
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Returns true if the profile has a credential reference
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.credential_id.is_some()
    }
}
