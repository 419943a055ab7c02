use serde::{Deserialize, Serialize};

/// Loan application as received from the request layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

/// Result of a loan evaluation. Either an approved offer or a rejection reason, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approved { loan_amount: i64, loan_period: i32 },
    Rejected(DecisionError),
}

impl Decision {
    pub fn approved(loan_amount: i64, loan_period: i32) -> Self {
        Decision::Approved {
            loan_amount,
            loan_period,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved { .. })
    }

    pub fn loan_amount(&self) -> Option<i64> {
        match self {
            Decision::Approved { loan_amount, .. } => Some(*loan_amount),
            Decision::Rejected(_) => None,
        }
    }

    pub fn loan_period(&self) -> Option<i32> {
        match self {
            Decision::Approved { loan_period, .. } => Some(*loan_period),
            Decision::Rejected(_) => None,
        }
    }

    /// Human-readable rejection reason.
    pub fn reason(&self) -> Option<String> {
        match self {
            Decision::Approved { .. } => None,
            Decision::Rejected(error) => Some(error.to_string()),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::Approved {
                loan_amount,
                loan_period,
            } => format!("approved {loan_amount} for {loan_period} months"),
            Decision::Rejected(error) => format!("rejected: {error}"),
        }
    }
}

impl From<Result<Decision, DecisionError>> for Decision {
    fn from(result: Result<Decision, DecisionError>) -> Self {
        result.unwrap_or_else(Decision::Rejected)
    }
}

/// Business-rule violations raised while deciding on a loan. None of them are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidPersonalCode,
    #[error("Invalid loan amount!")]
    InvalidLoanAmount,
    #[error("Invalid loan period!")]
    InvalidLoanPeriod,
    #[error("Invalid age!")]
    InvalidAge,
    #[error("No valid loan found!")]
    NoValidLoan,
}
