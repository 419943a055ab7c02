//! Loan decisioning: input validation, age and credit segment checks, and the search for the
//! largest approvable loan.

mod age;
mod clock;
mod outcome;
mod personal_code;
mod policy;
mod search;
mod segment;
mod validation;

#[cfg(test)]
mod tests;

pub use age::{age_on, birth_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use outcome::{Decision, DecisionError, DecisionRequest};
pub use personal_code::{EstonianPersonalCodeValidator, PersonalCodeValidator};
pub use policy::{LoanPolicy, EXPECTED_LIFETIME_YEARS};
pub use search::{
    credit_score, find_approved_loan, is_loan_approved, ApprovedLoan, APPROVAL_THRESHOLD,
};
pub use segment::CreditSegment;

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

/// Stateless decision engine. Holds only the immutable policy and identity-code validator, so
/// one instance can serve concurrent requests.
#[derive(Clone)]
pub struct DecisionEngine {
    validator: Arc<dyn PersonalCodeValidator>,
    policy: LoanPolicy,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(Arc::new(EstonianPersonalCodeValidator))
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl DecisionEngine {
    pub fn new(validator: Arc<dyn PersonalCodeValidator>) -> Self {
        Self::with_policy(validator, LoanPolicy::STANDARD)
    }

    pub fn with_policy(validator: Arc<dyn PersonalCodeValidator>, policy: LoanPolicy) -> Self {
        Self { validator, policy }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// Calculates the largest loan the customer qualifies for.
    ///
    /// Malformed input (personal code, amount or period) comes back as
    /// `Ok(Decision::Rejected(..))`. An age outside policy bounds or a customer with no
    /// approvable loan is returned as `Err`. `now` is the date the customer's age is
    /// measured against.
    pub fn evaluate(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
        now: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        if let Err(error) = validation::verify_inputs(
            self.validator.as_ref(),
            &self.policy,
            personal_code,
            loan_amount,
            loan_period,
        ) {
            debug!(%error, "loan request failed input validation");
            return Ok(Decision::Rejected(error));
        }

        let age = age::validate_age(personal_code, now, &self.policy)?;

        let segment = CreditSegment::classify(personal_code)?;
        let credit_modifier = segment.credit_modifier(&self.policy);
        debug!(age, segment = segment.label(), credit_modifier, "credit segment resolved");

        let approved = search::find_approved_loan(&self.policy, credit_modifier, loan_period)?;
        debug!(
            requested_amount = loan_amount,
            requested_period = loan_period,
            approved_amount = approved.loan_amount,
            approved_period = approved.loan_period,
            credit_score = credit_score(credit_modifier, approved.loan_amount, approved.loan_period),
            "loan approved"
        );

        Ok(Decision::approved(
            approved.loan_amount,
            approved.loan_period,
        ))
    }

    /// Same as [`DecisionEngine::evaluate`] but folds every failure into
    /// [`Decision::Rejected`].
    pub fn decide(&self, request: &DecisionRequest, now: NaiveDate) -> Decision {
        self.evaluate(
            &request.personal_code,
            request.loan_amount,
            request.loan_period,
            now,
        )
        .into()
    }

    /// Evaluates against the date reported by `clock`.
    pub fn decide_with_clock(&self, request: &DecisionRequest, clock: &dyn Clock) -> Decision {
        self.decide(request, clock.today())
    }
}
