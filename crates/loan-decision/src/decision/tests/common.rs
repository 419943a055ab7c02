use std::sync::Arc;

use chrono::NaiveDate;

use crate::decision::{DecisionEngine, LoanPolicy, PersonalCodeValidator};

/// Evaluation date every fixture age is computed against.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::default()
}

pub(super) fn engine_with_policy(policy: LoanPolicy) -> DecisionEngine {
    DecisionEngine::with_policy(Arc::new(AcceptAll), policy)
}

/// Stands in for the national-ID check so structurally odd codes reach later stages.
pub(super) struct AcceptAll;

impl PersonalCodeValidator for AcceptAll {
    fn is_valid(&self, _personal_code: &str) -> bool {
        true
    }
}

// Born 1990-05-12, aged 34 on `today()`.
pub(super) const DEBT_CODE: &str = "39005120000";
pub(super) const SEGMENT_1_CODE: &str = "39005124500";
pub(super) const SEGMENT_2_CODE: &str = "39005125007";
pub(super) const SEGMENT_3_CODE: &str = "49005129999";

// Born 2006-01-15, aged 19.
pub(super) const DEBT_1000_CODE: &str = "50601151000";

// Age boundary codes, all in segment 3.
pub(super) const EXACTLY_MINIMUM_AGE: &str = "60701157509";
pub(super) const BELOW_MINIMUM_AGE: &str = "60701167505";
pub(super) const EXACTLY_MAXIMUM_AGE: &str = "34901157509";
pub(super) const ABOVE_MAXIMUM_AGE: &str = "34801157506";
