//! Purchase plan tests
//!
//! Plans open against an item and close exactly once.

use proptest::prelude::*;
use shared::types::PlanStatus;
use shared::validation::validate_quantity;

/// Simulate closing a plan: only an open plan can become done.
fn complete(status: PlanStatus) -> Result<PlanStatus, &'static str> {
    match status {
        PlanStatus::Open => Ok(PlanStatus::Done),
        PlanStatus::Done => Err("plan is already completed"),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(PlanStatus::from_str("open"), Some(PlanStatus::Open));
        assert_eq!(PlanStatus::from_str("done"), Some(PlanStatus::Done));
        assert_eq!(PlanStatus::from_str("pending"), None);
        assert_eq!(PlanStatus::Open.as_str(), "open");
        assert_eq!(PlanStatus::Done.as_str(), "done");
    }

    #[test]
    fn test_open_plan_completes() {
        assert_eq!(complete(PlanStatus::Open), Ok(PlanStatus::Done));
    }

    #[test]
    fn test_completed_plan_stays_done() {
        assert!(complete(PlanStatus::Done).is_err());
    }

    /// The default request size is a single unit
    #[test]
    fn test_minimum_plan_quantity_is_valid() {
        assert!(validate_quantity(1).is_ok());
    }

    #[test]
    fn test_plan_quantity_must_be_positive() {
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-2).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn status_strategy() -> impl Strategy<Value = PlanStatus> {
        prop_oneof![Just(PlanStatus::Open), Just(PlanStatus::Done)]
    }

    proptest! {
        /// Completion is idempotent in effect: at most one transition happens
        #[test]
        fn prop_complete_at_most_once(status in status_strategy()) {
            match complete(status) {
                Ok(next) => {
                    prop_assert_eq!(status, PlanStatus::Open);
                    prop_assert_eq!(next, PlanStatus::Done);
                    prop_assert!(complete(next).is_err());
                }
                Err(_) => prop_assert_eq!(status, PlanStatus::Done),
            }
        }

        /// Unknown status strings never parse
        #[test]
        fn prop_unknown_status_rejected(s in "[a-z]{1,12}") {
            prop_assume!(s != "open" && s != "done");
            prop_assert_eq!(PlanStatus::from_str(&s), None);
        }
    }
}
