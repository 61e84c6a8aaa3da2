//! Property tests for the parity split.
//!
//! Invariants tested:
//! - Exactly n targets for n requests, indexed 0..n in order
//! - Even indices target base + "/sleep", odd indices target base unchanged
//! - The split is ceil(n/2) sleep targets and floor(n/2) base targets

use loadgen_dispatch::{targets, Endpoint, RequestTarget};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: one target per index, in dispatch order
    #[test]
    fn one_target_per_index(base in "http://[a-z]{1,12}(:[0-9]{2,5})?", n in 0usize..500) {
        let all: Vec<RequestTarget> = targets(&base, n).collect();
        prop_assert_eq!(all.len(), n);
        for (i, target) in all.iter().enumerate() {
            prop_assert_eq!(target.index, i);
        }
    }

    /// Property: the URL follows the index parity
    #[test]
    fn url_follows_parity(base in "[ -~]{1,40}", index in 0usize..100_000) {
        let target = RequestTarget::new(&base, index);
        if index % 2 == 0 {
            prop_assert_eq!(target.endpoint, Endpoint::Sleep);
            prop_assert_eq!(target.url, format!("{}/sleep", base));
        } else {
            prop_assert_eq!(target.endpoint, Endpoint::Base);
            prop_assert_eq!(target.url, base);
        }
    }

    /// Property: sleep targets are the rounded-up half
    #[test]
    fn split_is_balanced(n in 0usize..1000) {
        let sleeps = targets("http://h", n)
            .filter(|t| t.endpoint == Endpoint::Sleep)
            .count();
        prop_assert_eq!(sleeps, (n + 1) / 2);
        prop_assert_eq!(n - sleeps, n / 2);
    }
}
