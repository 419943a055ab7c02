/// Fixed lending policy applied to every decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    pub minimum_loan_amount: i64,
    pub maximum_loan_amount: i64,
    pub loan_amount_step: i64,
    pub minimum_loan_period: i32,
    pub maximum_loan_period: i32,
    pub segment_1_credit_modifier: i64,
    pub segment_2_credit_modifier: i64,
    pub segment_3_credit_modifier: i64,
    pub minimum_age: i32,
    pub maximum_age: i32,
}

/// Average lifetime the maximum age is derived from. Pending business sign-off.
pub const EXPECTED_LIFETIME_YEARS: i32 = 81;

const MAXIMUM_LOAN_PERIOD: i32 = 60;

impl LoanPolicy {
    pub const STANDARD: LoanPolicy = LoanPolicy {
        minimum_loan_amount: 2000,
        maximum_loan_amount: 10000,
        loan_amount_step: 100,
        minimum_loan_period: 12,
        maximum_loan_period: MAXIMUM_LOAN_PERIOD,
        segment_1_credit_modifier: 100,
        segment_2_credit_modifier: 300,
        segment_3_credit_modifier: 1000,
        minimum_age: 18,
        // A customer must be able to finish the longest loan within the expected lifetime.
        maximum_age: EXPECTED_LIFETIME_YEARS - MAXIMUM_LOAN_PERIOD / 12,
    };

    pub fn amount_in_range(&self, amount: i64) -> bool {
        (self.minimum_loan_amount..=self.maximum_loan_amount).contains(&amount)
    }

    pub fn period_in_range(&self, period: i32) -> bool {
        (self.minimum_loan_period..=self.maximum_loan_period).contains(&period)
    }

    pub fn age_in_range(&self, age: i32) -> bool {
        (self.minimum_age..=self.maximum_age).contains(&age)
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}
