//! Property-based tests for allocation validation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rostra_shared::types::{ProjectId, ResourceId};
use rust_decimal::Decimal;

use super::error::AllocationError;
use super::service::AllocationService;
use super::types::CreateAllocationInput;

fn make_input(percentage: u8, billing_rate: Option<Decimal>) -> CreateAllocationInput {
    CreateAllocationInput {
        resource_id: ResourceId::from_seq(1),
        project_id: ProjectId::from_seq(1),
        role: "QA".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
        billing_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        billing_end_date: None,
        percentage,
        is_billable: true,
        timesheet_required: false,
        billing_rate,
        billing_project: false,
        notes: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any commitment within 0-100 passes validation.
    #[test]
    fn prop_percentage_in_range_is_accepted(percentage in 0u8..=100) {
        let input = make_input(percentage, None);
        prop_assert!(AllocationService::validate_create(&input).is_ok());
    }

    /// Any commitment above 100 is rejected with the out-of-range error.
    #[test]
    fn prop_percentage_above_100_is_rejected(percentage in 101u8..=u8::MAX) {
        let input = make_input(percentage, None);
        prop_assert_eq!(
            AllocationService::validate_create(&input),
            Err(AllocationError::PercentageOutOfRange(percentage))
        );
    }

    /// Any non-negative billing rate passes; any negative rate is rejected.
    #[test]
    fn prop_billing_rate_sign_decides_validity(cents in -1_000_000i64..=1_000_000) {
        let rate = Decimal::new(cents, 2);
        let input = make_input(50, Some(rate));

        let result = AllocationService::validate_create(&input);
        if rate < Decimal::ZERO {
            prop_assert_eq!(result, Err(AllocationError::NegativeBillingRate(rate)));
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
