//! Optimal uniform pricing engine for ticketed events.
//!
//! Given the remaining ticket capacity of an event and a list of candidate
//! prices (interpreted as willingness-to-pay bids), the engine selects the
//! single clearing price and quantity that maximize total revenue.
//!
//! The model is the classic "best uniform price for n single-unit bids"
//! problem: the revenue-maximizing price for selling to the top-k highest
//! bidders is the k-th highest bid, since every member of the cohort pays the
//! lowest bid among them.
//!
//! # Purity
//!
//! The engine is a pure function of its inputs: no I/O, no shared state, no
//! suspension points. It is safe to invoke concurrently from any number of
//! requests without synchronization, and identical inputs always produce
//! identical output.
//!
//! # Example
//!
//! ```
//! use boxoffice_pricing::optimal_uniform_price;
//!
//! // 60 tickets left, four bids: selling to the top 3 at 30 beats every
//! // other cohort (30 * 3 = 90 > 40 * 2 = 80 > 50 * 1 = 50).
//! let result = optimal_uniform_price(60, &[20.0, 30.0, 40.0, 50.0]);
//! assert_eq!(result.optimal_price, 30.0);
//! assert_eq!(result.tickets_sold, 3);
//! assert_eq!(result.max_profit, 90.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

// ============================================================================
// Result Type
// ============================================================================

/// Outcome of an optimal pricing computation.
///
/// Constructed fresh per invocation and never mutated after return. The
/// serialized field names are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// The selected uniform clearing price, or `-1.0` when no viable sale
    /// exists (no remaining capacity or no bids).
    pub optimal_price: f64,
    /// Number of tickets sold at the clearing price (cohort size).
    pub tickets_sold: usize,
    /// Total revenue: `optimal_price * tickets_sold`, or `0.0` when no
    /// viable sale exists.
    pub max_profit: f64,
}

impl PricingResult {
    /// The "no viable sale" result.
    #[must_use]
    pub const fn no_sale() -> Self {
        Self {
            optimal_price: -1.0,
            tickets_sold: 0,
            max_profit: 0.0,
        }
    }
}

impl Default for PricingResult {
    fn default() -> Self {
        Self::no_sale()
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Compute the revenue-optimal uniform price for the remaining inventory.
///
/// Bids are sorted in descending order (the caller-supplied order is
/// insignificant; duplicates are permitted), then every cohort size up to
/// `min(bids, remaining)` is scanned: selling the top `n + 1` bids at the
/// `(n + 1)`-th highest bid yields `bid * (n + 1)` revenue.
///
/// # Tie-break
///
/// When two cohort sizes yield equal revenue, the **larger** cohort wins:
/// the scan proceeds in increasing cohort order and updates on
/// greater-than-or-equal revenue. Preferring more buyers at tied revenue is
/// a deliberate policy, and tests depend on it.
///
/// # Edge cases
///
/// A non-positive `remaining` (oversold events included) or an empty price
/// list yields [`PricingResult::no_sale`]. The function never fails for
/// validated input (finite, non-negative prices).
#[must_use]
#[allow(clippy::cast_precision_loss)] // cohort sizes are far below 2^52
pub fn optimal_uniform_price(remaining: i64, candidate_prices: &[f64]) -> PricingResult {
    let available = usize::try_from(remaining).unwrap_or(0);
    let limit = candidate_prices.len().min(available);
    if limit == 0 {
        return PricingResult::no_sale();
    }

    let mut sorted = candidate_prices.to_vec();
    sorted.sort_unstable_by(|a, b| b.total_cmp(a));

    let mut best = PricingResult::no_sale();
    for (n, &price) in sorted.iter().take(limit).enumerate() {
        let cohort = n + 1;
        let candidate_profit = price * cohort as f64;
        // >= (not >): equal revenue at a larger cohort replaces the best.
        if candidate_profit >= best.max_profit {
            best = PricingResult {
                optimal_price: price,
                tickets_sold: cohort,
                max_profit: candidate_profit,
            };
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn no_remaining_capacity_yields_no_sale() {
        // capacity=50, sold=50
        let result = optimal_uniform_price(0, &[20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(result, PricingResult::no_sale());
    }

    #[test]
    fn negative_remaining_capacity_yields_no_sale() {
        // Oversold events are not rejected upstream; treat them as empty.
        let result = optimal_uniform_price(-3, &[10.0, 20.0]);
        assert_eq!(result, PricingResult::no_sale());
    }

    #[test]
    fn empty_price_list_yields_no_sale() {
        assert_eq!(optimal_uniform_price(100, &[]), PricingResult::no_sale());
    }

    #[test]
    fn zero_capacity_event_yields_no_sale() {
        // capacity=0, sold=0
        assert_eq!(
            optimal_uniform_price(0, &[20.0, 30.0, 40.0]),
            PricingResult::no_sale()
        );
    }

    #[test]
    fn picks_best_cohort_when_capacity_exceeds_bids() {
        // capacity=65, sold=5: remaining=60 covers all four bids.
        let result = optimal_uniform_price(60, &[20.0, 30.0, 40.0, 50.0]);
        assert_eq!(result.optimal_price, 30.0);
        assert_eq!(result.tickets_sold, 3);
        assert_eq!(result.max_profit, 90.0);
    }

    #[test]
    fn single_outlier_bid_dominates() {
        let result = optimal_uniform_price(60, &[20.0, 30.0, 40.0, 999_999_999.0]);
        assert_eq!(result.optimal_price, 999_999_999.0);
        assert_eq!(result.tickets_sold, 1);
        assert_eq!(result.max_profit, 999_999_999.0);
    }

    #[test]
    fn capacity_caps_the_cohort() {
        // capacity=65, sold=63: only two tickets left.
        let result = optimal_uniform_price(2, &[99_999.0, 99_998.0, 99_997.0]);
        assert_eq!(result.optimal_price, 99_998.0);
        assert_eq!(result.tickets_sold, 2);
        assert_eq!(result.max_profit, 199_996.0);
    }

    #[test]
    fn equal_profit_prefers_larger_cohort() {
        // capacity=100, sold=80: remaining=20 out of 30 bids. Cohort 10 at
        // 255 and cohort 17 at 150 both yield 2550; the larger cohort wins.
        let prices = [
            110.0, 100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, // below the cut
            300.0, 290.0, 280.0, 270.0, 265.0, 262.0, 260.0, 258.0, 256.0, 255.0, 200.0, 190.0,
            180.0, 170.0, 160.0, 150.0, 150.0, 140.0, 130.0, 120.0,
        ];
        assert_eq!(prices.len(), 30);
        let result = optimal_uniform_price(20, &prices);
        assert_eq!(result.optimal_price, 150.0);
        assert_eq!(result.tickets_sold, 17);
        assert_eq!(result.max_profit, 2550.0);
    }

    #[test]
    fn input_order_is_insignificant() {
        let ascending = optimal_uniform_price(60, &[20.0, 30.0, 40.0, 50.0]);
        let descending = optimal_uniform_price(60, &[50.0, 40.0, 30.0, 20.0]);
        assert_eq!(ascending, descending);
    }

    #[test]
    fn zero_priced_bids_still_sell() {
        // A zero-revenue cohort ties the initial best and therefore updates:
        // selling at price zero beats reporting no viable sale.
        let result = optimal_uniform_price(5, &[0.0]);
        assert_eq!(result.optimal_price, 0.0);
        assert_eq!(result.tickets_sold, 1);
        assert_eq!(result.max_profit, 0.0);
    }

    #[test]
    fn duplicate_bids_are_permitted() {
        let result = optimal_uniform_price(10, &[25.0, 25.0, 25.0]);
        assert_eq!(result.optimal_price, 25.0);
        assert_eq!(result.tickets_sold, 3);
        assert_eq!(result.max_profit, 75.0);
    }

    #[test]
    fn serialized_shape_matches_wire_contract() {
        let json = serde_json::to_value(optimal_uniform_price(60, &[20.0, 30.0, 40.0, 50.0]))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "optimal_price": 30.0,
                "tickets_sold": 3,
                "max_profit": 90.0,
            })
        );
    }

    #[test]
    fn no_sale_serializes_to_sentinel_values() {
        let json = serde_json::to_value(PricingResult::no_sale()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "optimal_price": -1.0,
                "tickets_sold": 0,
                "max_profit": 0.0,
            })
        );
    }
}
