//! Profile store and list filtering for rdesk
//!
//! Profiles are the saved targets shown in the sidebar of the host window.
//! This module provides the [`ProfileStore`] seam the resolver and UI work
//! against, an in-memory implementation, and the search/sort logic applied
//! to the profile list.

mod filter;
mod store;

pub use filter::{TAG_PREFIX, default_selection, filter_sorted, matches_search};
pub use store::{MemoryProfileStore, ProfileStore};
