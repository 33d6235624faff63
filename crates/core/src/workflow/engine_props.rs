//! Property-based tests for the workflow engine's admission rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::workflow::engine::{WorkflowEngine, requires_justification};
use crate::workflow::error::WorkflowError;
use crate::workflow::types::OperationType;

// Never implemented for real; `prepare` is an associated function and the
// strategies below only exercise the pure validation path.
struct NoRepository;

fn arb_type() -> impl Strategy<Value = OperationType> {
    prop_oneof![
        Just(OperationType::Deposit),
        Just(OperationType::Withdrawal),
        Just(OperationType::Transfer),
    ]
}

fn prepare(
    operation_type: OperationType,
    amount: Decimal,
) -> Result<crate::workflow::types::OperationRequest, WorkflowError> {
    let recipient = operation_type
        .requires_recipient()
        .then(|| "ACC-9".to_string());
    WorkflowEngine::<NoRepository>::prepare(operation_type, amount, "DH", "", recipient)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every non-positive amount is rejected, regardless of type.
    #[test]
    fn prop_non_positive_amount_rejected(
        operation_type in arb_type(),
        cents in -1_000_000_00i64..=0i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let result = prepare(operation_type, amount);
        prop_assert!(matches!(result, Err(WorkflowError::AmountNotPositive)));
    }

    /// Amounts in (0, 10000] never require justification.
    #[test]
    fn prop_at_or_below_threshold_no_justification(
        operation_type in arb_type(),
        cents in 1i64..=1_000_000i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let request = prepare(operation_type, amount).unwrap();
        prop_assert!(!request.requires_justification);
    }

    /// Withdrawal/transfer amounts above 10000 always require justification;
    /// deposits never do.
    #[test]
    fn prop_above_threshold_requires_justification(
        operation_type in arb_type(),
        cents in 1_000_001i64..=100_000_000i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let request = prepare(operation_type, amount).unwrap();
        let expected = operation_type.subject_to_justification();
        prop_assert_eq!(request.requires_justification, expected);
    }

    /// The derived flag always agrees with the standalone predicate.
    #[test]
    fn prop_flag_matches_predicate(
        operation_type in arb_type(),
        cents in 1i64..=100_000_000i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let request = prepare(operation_type, amount).unwrap();
        prop_assert_eq!(
            request.requires_justification,
            requires_justification(operation_type, amount)
        );
    }
}
