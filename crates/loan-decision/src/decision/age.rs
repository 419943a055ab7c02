use chrono::{Datelike, NaiveDate};

use super::outcome::DecisionError;
use super::policy::LoanPolicy;

fn century(marker: u8) -> Result<i32, DecisionError> {
    match marker {
        b'1' | b'2' => Ok(1800),
        b'3' | b'4' => Ok(1900),
        b'5' | b'6' => Ok(2000),
        b'7' | b'8' => Ok(2100),
        _ => Err(DecisionError::InvalidPersonalCode),
    }
}

fn two_digits(code: &[u8], start: usize) -> Result<u32, DecisionError> {
    match code.get(start..start + 2) {
        Some([tens, ones]) if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Ok(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => Err(DecisionError::InvalidPersonalCode),
    }
}

/// Decodes the birth date from the first seven characters of a personal code.
///
/// The first character selects the century, followed by `YYMMDD`. Unknown century markers
/// and dates missing from the calendar are reported as [`DecisionError::InvalidPersonalCode`].
pub fn birth_date(personal_code: &str) -> Result<NaiveDate, DecisionError> {
    let code = personal_code.as_bytes();
    let marker = *code.first().ok_or(DecisionError::InvalidPersonalCode)?;

    let year = century(marker)? + two_digits(code, 1)? as i32;
    let month = two_digits(code, 3)?;
    let day = two_digits(code, 5)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DecisionError::InvalidPersonalCode)
}

/// Whole years elapsed between `born` and `today`. Negative when `born` lies in the future.
pub fn age_on(born: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}

pub(crate) fn validate_age(
    personal_code: &str,
    today: NaiveDate,
    policy: &LoanPolicy,
) -> Result<i32, DecisionError> {
    let age = age_on(birth_date(personal_code)?, today);
    if policy.age_in_range(age) {
        Ok(age)
    } else {
        Err(DecisionError::InvalidAge)
    }
}
