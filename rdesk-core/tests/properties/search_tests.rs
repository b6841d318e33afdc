//! Property-based tests for profile list filtering and ordering

use proptest::prelude::*;
use rdesk_core::{ConnectionProfile, default_selection, filter_sorted, matches_search};

// ========== Generators ==========

fn arb_word() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,11}"
}

fn arb_profile() -> impl Strategy<Value = ConnectionProfile> {
    (
        arb_word(),
        arb_word(),
        arb_word(),
        prop::collection::vec(arb_word(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(name, host, group, tags, enabled)| {
            let profile = ConnectionProfile::new(name, format!("{host}.local"))
                .with_group(group)
                .with_tags(tags);
            if enabled { profile } else { profile.disabled() }
        })
}

fn arb_profiles() -> impl Strategy<Value = Vec<ConnectionProfile>> {
    prop::collection::vec(arb_profile(), 0..12)
}

// ========== Property Tests ==========

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Filtering never returns a disabled profile, for any search term.
    #[test]
    fn prop_disabled_profiles_never_match(
        profiles in arb_profiles(),
        search in prop_oneof![Just(String::new()), arb_word()],
    ) {
        let filtered = filter_sorted(&profiles, &search);
        prop_assert!(filtered.iter().all(|p| p.enabled));
    }

    /// An empty search returns exactly the enabled profiles.
    #[test]
    fn prop_empty_search_returns_all_enabled(profiles in arb_profiles()) {
        let filtered = filter_sorted(&profiles, "");
        let enabled = profiles.iter().filter(|p| p.enabled).count();
        prop_assert_eq!(filtered.len(), enabled);
    }

    /// The result is sorted by group, then name (case-insensitive).
    #[test]
    fn prop_result_is_sorted(profiles in arb_profiles(), search in arb_word()) {
        let filtered = filter_sorted(&profiles, &search);
        for pair in filtered.windows(2) {
            let a = (pair[0].group.to_lowercase(), pair[0].name.to_lowercase());
            let b = (pair[1].group.to_lowercase(), pair[1].name.to_lowercase());
            prop_assert!(a <= b);
        }
    }

    /// Search is case-insensitive: upper-casing the term changes nothing.
    #[test]
    fn prop_search_case_insensitive(profiles in arb_profiles(), search in arb_word()) {
        let lower = filter_sorted(&profiles, &search.to_lowercase());
        let upper = filter_sorted(&profiles, &search.to_uppercase());
        let ids_lower: Vec<_> = lower.iter().map(|p| p.id).collect();
        let ids_upper: Vec<_> = upper.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids_lower, ids_upper);
    }

    /// Every profile matched by a plain search term contains it in name or host.
    #[test]
    fn prop_plain_search_is_substring_match(profiles in arb_profiles(), search in arb_word()) {
        let term = search.to_lowercase();
        for profile in filter_sorted(&profiles, &search) {
            prop_assert!(
                profile.name.to_lowercase().contains(&term)
                    || profile.host.to_lowercase().contains(&term)
            );
        }
    }

    /// `tag=` searches match exactly the enabled profiles carrying the tag.
    #[test]
    fn prop_tag_search_is_exact(profiles in arb_profiles(), tag in arb_word()) {
        let filtered = filter_sorted(&profiles, &format!("tag={tag}"));
        for profile in &filtered {
            prop_assert!(
                profile.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag))
            );
        }
        let expected = profiles
            .iter()
            .filter(|p| p.enabled && p.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// The default selection is the head of the empty-search ordering.
    #[test]
    fn prop_default_selection_is_first_enabled(profiles in arb_profiles()) {
        let expected = filter_sorted(&profiles, "").into_iter().next().map(|p| p.id);
        let selected = default_selection(&profiles).map(|p| p.id);
        prop_assert_eq!(selected, expected);
    }

    /// `matches_search` agrees with membership in `filter_sorted`.
    #[test]
    fn prop_matches_agrees_with_filter(profiles in arb_profiles(), search in arb_word()) {
        let filtered: Vec<_> = filter_sorted(&profiles, &search)
            .iter()
            .map(|p| p.id)
            .collect();
        for profile in &profiles {
            prop_assert_eq!(
                matches_search(profile, &search),
                filtered.contains(&profile.id)
            );
        }
    }
}
