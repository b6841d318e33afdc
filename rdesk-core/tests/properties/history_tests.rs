//! Property-based tests for the ad-hoc host history

use proptest::prelude::*;
use rdesk_core::HostHistory;

fn arb_host() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9.-]{0,15}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The history never exceeds its configured maximum.
    #[test]
    fn prop_history_is_bounded(
        hosts in prop::collection::vec(arb_host(), 0..30),
        max in 0usize..10,
    ) {
        let mut history = HostHistory::new(max);
        for host in &hosts {
            history.add(host);
        }
        prop_assert!(history.len() <= max);
    }

    /// The most recently added host is always at the front.
    #[test]
    fn prop_latest_host_is_first(
        hosts in prop::collection::vec(arb_host(), 1..20),
    ) {
        let mut history = HostHistory::new(10);
        for host in &hosts {
            history.add(host);
        }
        let last = hosts.last().unwrap();
        prop_assert_eq!(history.hosts()[0], last.trim());
    }

    /// No two entries are case-insensitive duplicates.
    #[test]
    fn prop_no_duplicates(
        hosts in prop::collection::vec(arb_host(), 0..30),
    ) {
        let mut history = HostHistory::new(10);
        for host in &hosts {
            history.add(host);
        }
        let lowered: Vec<String> = history
            .hosts()
            .iter()
            .map(|h| h.to_lowercase())
            .collect();
        let mut deduped = lowered.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), lowered.len());
    }

    /// Re-adding a remembered host changes order, not length.
    #[test]
    fn prop_readd_preserves_length(
        hosts in prop::collection::vec(arb_host(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut history = HostHistory::new(20);
        for host in &hosts {
            history.add(host);
        }
        let len_before = history.len();
        let repeat = hosts[pick.index(hosts.len())].clone();
        history.add(&repeat);
        prop_assert_eq!(history.len(), len_before);
        prop_assert_eq!(history.hosts()[0], repeat.trim());
    }
}
