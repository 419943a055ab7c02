use super::outcome::DecisionError;
use super::policy::LoanPolicy;

/// Credit score of a candidate loan: `(modifier / amount) * period / 10`.
pub fn credit_score(credit_modifier: i64, loan_amount: i64, loan_period: i32) -> f64 {
    (credit_modifier as f64 / loan_amount as f64) * f64::from(loan_period) / 10.0
}

/// Score a candidate must reach to be approved.
pub const APPROVAL_THRESHOLD: f64 = 0.1;

/// A candidate is approved when its credit score reaches [`APPROVAL_THRESHOLD`]. Evaluated in
/// `f64` so boundary cases round the same way existing decisions did.
pub fn is_loan_approved(credit_modifier: i64, loan_amount: i64, loan_period: i32) -> bool {
    credit_score(credit_modifier, loan_amount, loan_period) >= APPROVAL_THRESHOLD
}

/// Approvable pair found by [`find_approved_loan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovedLoan {
    pub loan_amount: i64,
    pub loan_period: i32,
}

/// Finds the largest approvable amount, starting at the requested period and lengthening it
/// one month at a time until the policy maximum.
///
/// Each period tries at most `(max - min) / step + 2` amounts, and the period only grows
/// until `maximum_loan_period`, so the search always terminates.
pub fn find_approved_loan(
    policy: &LoanPolicy,
    credit_modifier: i64,
    requested_period: i32,
) -> Result<ApprovedLoan, DecisionError> {
    if credit_modifier <= 0 || policy.loan_amount_step <= 0 {
        return Err(DecisionError::NoValidLoan);
    }

    let mut loan_amount = policy.maximum_loan_amount;
    let mut loan_period = requested_period;

    while !is_loan_approved(credit_modifier, loan_amount, loan_period) {
        loan_amount -= policy.loan_amount_step;

        if loan_amount < policy.minimum_loan_amount {
            if loan_period >= policy.maximum_loan_period {
                return Err(DecisionError::NoValidLoan);
            }
            loan_period += 1;
            loan_amount = policy.maximum_loan_amount;
        }
    }

    Ok(ApprovedLoan {
        loan_amount,
        loan_period,
    })
}
