use super::outcome::DecisionError;
use super::personal_code::PersonalCodeValidator;
use super::policy::LoanPolicy;

/// Checks request inputs in a fixed order and reports the first violation.
pub(crate) fn verify_inputs(
    validator: &dyn PersonalCodeValidator,
    policy: &LoanPolicy,
    personal_code: &str,
    loan_amount: i64,
    loan_period: i32,
) -> Result<(), DecisionError> {
    if !validator.is_valid(personal_code) {
        return Err(DecisionError::InvalidPersonalCode);
    }
    if !policy.amount_in_range(loan_amount) {
        return Err(DecisionError::InvalidLoanAmount);
    }
    if !policy.period_in_range(loan_period) {
        return Err(DecisionError::InvalidLoanPeriod);
    }
    Ok(())
}
