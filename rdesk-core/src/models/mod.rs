//! Core data structures for rdesk
//!
//! This module contains the profile, credential, and descriptor types shared
//! across the crate. Profiles are the persistent targets a user saves;
//! descriptors are the transient, fully-resolved parameter sets handed to a
//! transport layer for one connection attempt.

mod credential;
mod descriptor;
mod profile;

pub use credential::{CredentialRecord, Credentials};
pub use descriptor::{ConnectionDescriptor, CredentialSource, ResolvedCredentials};
pub use profile::{ConnectionProfile, DEFAULT_RDP_PORT};
