//! Profile list search and ordering.
//!
//! Mirrors the host window's profile sidebar behavior: the list shows only
//! enabled profiles, grouped and sorted by group then name, and the search
//! box narrows it down. A search of the form `tag=<value>` matches tags
//! exactly (ignoring case); any other term is a case-insensitive substring
//! match against profile name or host.

use crate::models::ConnectionProfile;

/// Prefix that switches a search term to exact tag matching
pub const TAG_PREFIX: &str = "tag=";

/// Returns true if the profile passes the given search term
///
/// Disabled profiles never match. An empty or whitespace-only search matches
/// every enabled profile.
#[must_use]
pub fn matches_search(profile: &ConnectionProfile, search: &str) -> bool {
    if !profile.enabled {
        return false;
    }

    let search = search.trim();
    if search.is_empty() {
        return true;
    }

    // get() instead of slicing: the prefix is ASCII but the search may not be
    if let Some(prefix) = search.get(..TAG_PREFIX.len()) {
        if prefix.eq_ignore_ascii_case(TAG_PREFIX) {
            let wanted = search[TAG_PREFIX.len()..].trim();
            return !wanted.is_empty()
                && profile
                    .tags
                    .iter()
                    .any(|tag| tag.trim().eq_ignore_ascii_case(wanted));
        }
    }

    let search = search.to_lowercase();
    profile.name.to_lowercase().contains(&search) || profile.host.to_lowercase().contains(&search)
}

/// Filters profiles by search term and sorts them by group, then name
///
/// Ordering is case-insensitive ascending, matching the sidebar's grouped
/// presentation.
#[must_use]
pub fn filter_sorted(profiles: &[ConnectionProfile], search: &str) -> Vec<ConnectionProfile> {
    let mut matched: Vec<ConnectionProfile> = profiles
        .iter()
        .filter(|p| matches_search(p, search))
        .cloned()
        .collect();
    matched.sort_by(|a, b| {
        let group = a.group.to_lowercase().cmp(&b.group.to_lowercase());
        group.then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    matched
}

/// Returns the profile selected by default when the view opens
///
/// This is the first enabled profile in group/name order, or `None` when no
/// profile is enabled.
#[must_use]
pub fn default_selection(profiles: &[ConnectionProfile]) -> Option<ConnectionProfile> {
    filter_sorted(profiles, "").into_iter().next()
}
