//! Inventory tests
//!
//! Pure-logic coverage for the movement ledger and low-stock view:
//! - current stock equals the sum of signed movement deltas
//! - non-positive quantities are always rejected
//! - the low-stock view keeps only deficits, largest first

use proptest::prelude::*;
use shared::stock::{apply_movement, is_below_minimum, shortage};
use shared::types::ChangeType;
use shared::validation::validate_quantity;

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Stock starts at zero and follows the recorded deltas
    #[test]
    fn test_stock_in_then_out() {
        let mut balance = 0;
        balance = apply_movement(balance, ChangeType::In, 15);
        balance = apply_movement(balance, ChangeType::Out, 3);

        assert_eq!(balance, 12);
    }

    /// An unstocked item is short by its whole minimum
    #[test]
    fn test_unstocked_item_has_full_shortage() {
        let min_stock = 10;
        let quantity = 0;

        assert!(is_below_minimum(min_stock, quantity));
        assert_eq!(shortage(min_stock, quantity), 10);
    }

    /// Threshold comparison around a stock of 12
    #[test]
    fn test_threshold_boundaries() {
        let quantity = 12;

        // min_stock 5: not low
        assert!(!is_below_minimum(5, quantity));
        // min_stock 12: equal is not low
        assert!(!is_below_minimum(12, quantity));
        // min_stock 15: short by 3
        assert!(is_below_minimum(15, quantity));
        assert_eq!(shortage(15, quantity), 3);
    }

    /// An out larger than recorded stock leaves a negative balance
    #[test]
    fn test_out_exceeding_stock_goes_negative() {
        let mut balance = apply_movement(0, ChangeType::In, 2);
        balance = apply_movement(balance, ChangeType::Out, 5);

        assert_eq!(balance, -3);
    }

    /// Zero and negative quantities are rejected
    #[test]
    fn test_non_positive_quantity_rejected() {
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(-100).is_err());
        assert!(validate_quantity(1).is_ok());
    }

    /// Two deliveries land in full regardless of which is applied first
    #[test]
    fn test_concurrent_deliveries_both_counted() {
        let one_way = apply_movement(apply_movement(0, ChangeType::In, 5), ChangeType::In, 7);
        let other_way = apply_movement(apply_movement(0, ChangeType::In, 7), ChangeType::In, 5);

        assert_eq!(one_way, 12);
        assert_eq!(other_way, 12);
    }

    /// Recording the same delivery twice doubles the stock
    #[test]
    fn test_repeated_delivery_is_not_deduplicated() {
        let mut balance = 0;
        balance = apply_movement(balance, ChangeType::In, 8);
        balance = apply_movement(balance, ChangeType::In, 8);

        assert_eq!(balance, 16);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for valid quantities (positive whole units)
    fn quantity_strategy() -> impl Strategy<Value = i64> {
        1i64..=10_000
    }

    /// Strategy for movement directions
    fn change_strategy() -> impl Strategy<Value = ChangeType> {
        prop_oneof![Just(ChangeType::In), Just(ChangeType::Out)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Current stock equals the sum of signed deltas, starting from zero
        #[test]
        fn prop_balance_is_sum_of_signed_deltas(
            movements in prop::collection::vec((change_strategy(), quantity_strategy()), 1..30)
        ) {
            let balance = movements
                .iter()
                .fold(0i64, |acc, (change, qty)| apply_movement(acc, *change, *qty));

            let expected: i64 = movements.iter().map(|(change, qty)| change.signed(*qty)).sum();

            prop_assert_eq!(balance, expected);
        }

        /// Applying the same deltas in reverse order gives the same balance
        #[test]
        fn prop_delta_application_commutes(
            movements in prop::collection::vec((change_strategy(), quantity_strategy()), 1..20)
        ) {
            let forward = movements
                .iter()
                .fold(0i64, |acc, (change, qty)| apply_movement(acc, *change, *qty));
            let backward = movements
                .iter()
                .rev()
                .fold(0i64, |acc, (change, qty)| apply_movement(acc, *change, *qty));

            prop_assert_eq!(forward, backward);
        }

        /// In-only movements accumulate without loss
        #[test]
        fn prop_deliveries_accumulate(
            amounts in prop::collection::vec(quantity_strategy(), 1..20)
        ) {
            let balance = amounts
                .iter()
                .fold(0i64, |acc, qty| apply_movement(acc, ChangeType::In, *qty));

            prop_assert_eq!(balance, amounts.iter().sum::<i64>());
        }

        /// Non-positive quantities never validate
        #[test]
        fn prop_non_positive_quantity_rejected(qty in i64::MIN..=0) {
            prop_assert!(validate_quantity(qty).is_err());
        }

        /// Positive quantities always validate
        #[test]
        fn prop_positive_quantity_accepted(qty in quantity_strategy()) {
            prop_assert!(validate_quantity(qty).is_ok());
        }

        /// An item is low exactly when its shortage is positive
        #[test]
        fn prop_low_iff_shortage_positive(
            min_stock in 0i64..=1_000,
            quantity in -1_000i64..=2_000
        ) {
            prop_assert_eq!(
                is_below_minimum(min_stock, quantity),
                shortage(min_stock, quantity) > 0
            );
        }

        /// Shortage shrinks by exactly what a delivery adds
        #[test]
        fn prop_delivery_reduces_shortage(
            min_stock in 1i64..=1_000,
            delivered in quantity_strategy()
        ) {
            let before = shortage(min_stock, 0);
            let after = shortage(min_stock, apply_movement(0, ChangeType::In, delivered));

            prop_assert_eq!(before - after, delivered);
        }
    }
}

// ============================================================================
// Store Simulation
// ============================================================================

#[cfg(test)]
mod store_simulation {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// Simulate the record-movement pipeline against an in-memory store:
    /// validation first, then ledger append and projection update together.
    fn record(
        known_items: &HashSet<u32>,
        ledger: &mut Vec<(u32, ChangeType, i64)>,
        levels: &mut HashMap<u32, i64>,
        item: u32,
        change: ChangeType,
        quantity: i64,
    ) -> Result<i64, &'static str> {
        validate_quantity(quantity)?;
        if !known_items.contains(&item) {
            return Err("unknown item");
        }

        ledger.push((item, change, quantity));
        let balance = levels.entry(item).or_insert(0);
        *balance = apply_movement(*balance, change, quantity);
        Ok(*balance)
    }

    #[test]
    fn test_rejected_movement_changes_nothing() {
        let items: HashSet<u32> = [1].into_iter().collect();
        let mut ledger = Vec::new();
        let mut levels = HashMap::new();

        assert!(record(&items, &mut ledger, &mut levels, 1, ChangeType::In, 0).is_err());
        assert!(record(&items, &mut ledger, &mut levels, 99, ChangeType::In, 5).is_err());

        assert!(ledger.is_empty());
        assert!(levels.is_empty());
    }

    #[test]
    fn test_movements_drive_projection() {
        let items: HashSet<u32> = [1, 2].into_iter().collect();
        let mut ledger = Vec::new();
        let mut levels = HashMap::new();

        record(&items, &mut ledger, &mut levels, 1, ChangeType::In, 15).unwrap();
        record(&items, &mut ledger, &mut levels, 1, ChangeType::Out, 3).unwrap();
        record(&items, &mut ledger, &mut levels, 2, ChangeType::Out, 4).unwrap();

        assert_eq!(levels[&1], 12);
        assert_eq!(levels[&2], -4);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_projection_matches_ledger_replay() {
        let items: HashSet<u32> = [1, 2, 3].into_iter().collect();
        let mut ledger = Vec::new();
        let mut levels = HashMap::new();

        let script = [
            (1, ChangeType::In, 10),
            (2, ChangeType::In, 7),
            (1, ChangeType::Out, 4),
            (3, ChangeType::Out, 2),
            (2, ChangeType::In, 1),
        ];
        for (item, change, qty) in script {
            record(&items, &mut ledger, &mut levels, item, change, qty).unwrap();
        }

        // Replaying the ledger from zero reproduces every level
        let mut replayed: HashMap<u32, i64> = HashMap::new();
        for (item, change, qty) in &ledger {
            let balance = replayed.entry(*item).or_insert(0);
            *balance = apply_movement(*balance, *change, *qty);
        }

        assert_eq!(replayed, levels);
    }
}
