//! Property-based tests for the pricing engine.
//!
//! These pin down the contract rather than specific scenarios: bounds on the
//! cohort size, the revenue identity, the sorted-position law, purity, and
//! the larger-cohort tie-break.

#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_precision_loss)]

use boxoffice_pricing::{PricingResult, optimal_uniform_price};
use proptest::prelude::*;

/// Validated bids: finite, non-negative, in a range where integer-scaled
/// products stay exact enough for equality assertions.
fn bids() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10_000.0, 0..40)
}

fn sorted_descending(prices: &[f64]) -> Vec<f64> {
    let mut sorted = prices.to_vec();
    sorted.sort_unstable_by(|a, b| b.total_cmp(a));
    sorted
}

proptest! {
    #[test]
    fn cohort_never_exceeds_bids_or_capacity(remaining in -5i64..60, prices in bids()) {
        let result = optimal_uniform_price(remaining, &prices);
        let cap = usize::try_from(remaining).unwrap_or(0);
        prop_assert!(result.tickets_sold <= prices.len().min(cap));
    }

    #[test]
    fn revenue_identity_holds(remaining in 1i64..60, prices in bids()) {
        let result = optimal_uniform_price(remaining, &prices);
        if result.tickets_sold > 0 {
            prop_assert_eq!(
                result.max_profit,
                result.optimal_price * result.tickets_sold as f64
            );
        } else {
            prop_assert_eq!(result, PricingResult::no_sale());
        }
    }

    #[test]
    fn nonempty_bids_with_capacity_always_sell(
        remaining in 1i64..60,
        prices in prop::collection::vec(0.0f64..10_000.0, 1..40),
    ) {
        let result = optimal_uniform_price(remaining, &prices);
        prop_assert!(result.tickets_sold >= 1);
    }

    #[test]
    fn clearing_price_sits_at_sorted_position(remaining in 1i64..60, prices in bids()) {
        let result = optimal_uniform_price(remaining, &prices);
        if result.tickets_sold > 0 {
            let sorted = sorted_descending(&prices);
            prop_assert_eq!(result.optimal_price, sorted[result.tickets_sold - 1]);
        }
    }

    #[test]
    fn no_capacity_or_no_bids_is_exactly_no_sale(remaining in -60i64..=0, prices in bids()) {
        prop_assert_eq!(optimal_uniform_price(remaining, &prices), PricingResult::no_sale());
        prop_assert_eq!(optimal_uniform_price(50, &[]), PricingResult::no_sale());
    }

    #[test]
    fn engine_is_pure(remaining in -5i64..60, prices in bids()) {
        let first = optimal_uniform_price(remaining, &prices);
        let second = optimal_uniform_price(remaining, &prices);
        prop_assert_eq!(first, second);
    }

    /// The reported revenue dominates every scanned cohort, and among the
    /// cohorts achieving it the reported one is the largest.
    #[test]
    fn result_is_optimal_with_larger_cohort_on_ties(remaining in 1i64..60, prices in bids()) {
        let result = optimal_uniform_price(remaining, &prices);
        let sorted = sorted_descending(&prices);
        let limit = sorted.len().min(usize::try_from(remaining).unwrap_or(0));

        for (n, &price) in sorted.iter().take(limit).enumerate() {
            let profit = price * (n + 1) as f64;
            prop_assert!(profit <= result.max_profit);
            if profit == result.max_profit {
                prop_assert!(result.tickets_sold >= n + 1);
            }
        }
    }
}
