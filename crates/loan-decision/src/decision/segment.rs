use super::outcome::DecisionError;
use super::policy::LoanPolicy;

/// Creditworthiness band derived from the last four digits of a personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditSegment {
    /// 0000..=2499, customer carries debt.
    Debt,
    /// 2500..=4999
    Segment1,
    /// 5000..=7499
    Segment2,
    /// 7500..=9999
    Segment3,
}

impl CreditSegment {
    pub fn classify(personal_code: &str) -> Result<Self, DecisionError> {
        let suffix = personal_code
            .len()
            .checked_sub(4)
            .and_then(|start| personal_code.get(start..))
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or(DecisionError::InvalidPersonalCode)?;
        let value: u16 = suffix
            .parse()
            .map_err(|_| DecisionError::InvalidPersonalCode)?;

        Ok(match value {
            0..=2499 => CreditSegment::Debt,
            2500..=4999 => CreditSegment::Segment1,
            5000..=7499 => CreditSegment::Segment2,
            _ => CreditSegment::Segment3,
        })
    }

    /// Credit modifier for this band; zero means no loan can be offered.
    pub fn credit_modifier(&self, policy: &LoanPolicy) -> i64 {
        match self {
            CreditSegment::Debt => 0,
            CreditSegment::Segment1 => policy.segment_1_credit_modifier,
            CreditSegment::Segment2 => policy.segment_2_credit_modifier,
            CreditSegment::Segment3 => policy.segment_3_credit_modifier,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreditSegment::Debt => "debt",
            CreditSegment::Segment1 => "segment 1",
            CreditSegment::Segment2 => "segment 2",
            CreditSegment::Segment3 => "segment 3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_segment_edges() {
        let cases = [
            ("39005120000", CreditSegment::Debt),
            ("30701152499", CreditSegment::Debt),
            ("39005122506", CreditSegment::Segment1),
            ("60612314999", CreditSegment::Segment1),
            ("30701155000", CreditSegment::Segment2),
            ("60701157499", CreditSegment::Segment2),
            ("44812317500", CreditSegment::Segment3),
            ("49005129999", CreditSegment::Segment3),
        ];

        for (code, expected) in cases {
            assert_eq!(CreditSegment::classify(code), Ok(expected), "{code}");
        }
    }

    #[test]
    fn debt_segment_has_zero_modifier() {
        let policy = LoanPolicy::STANDARD;
        assert_eq!(CreditSegment::Debt.credit_modifier(&policy), 0);
        assert_eq!(CreditSegment::Segment1.credit_modifier(&policy), 100);
        assert_eq!(CreditSegment::Segment2.credit_modifier(&policy), 300);
        assert_eq!(CreditSegment::Segment3.credit_modifier(&policy), 1000);
    }

    #[test]
    fn rejects_non_numeric_or_short_suffix() {
        assert_eq!(
            CreditSegment::classify("390051245x0"),
            Err(DecisionError::InvalidPersonalCode)
        );
        assert_eq!(
            CreditSegment::classify("450"),
            Err(DecisionError::InvalidPersonalCode)
        );
        assert_eq!(
            CreditSegment::classify("3900512+450"),
            Err(DecisionError::InvalidPersonalCode)
        );
    }
}
