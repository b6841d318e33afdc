//! Session parameter resolution for rdesk
//!
//! This module turns a connect request (ad-hoc host, saved profile, or
//! profile with connect-as overrides) into an immutable
//! [`ConnectionDescriptor`](crate::models::ConnectionDescriptor) ready for
//! the transport layer.

mod resolver;

pub use resolver::{ConnectOverrides, SessionRequest, SessionResolver};
