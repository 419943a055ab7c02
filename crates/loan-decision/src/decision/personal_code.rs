use super::age::birth_date;

/// Structural and checksum check for national identity codes.
pub trait PersonalCodeValidator: Send + Sync {
    fn is_valid(&self, personal_code: &str) -> bool;
}

const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Validator for Estonian personal identification codes (`GYYMMDDSSSC`).
#[derive(Debug, Default, Clone, Copy)]
pub struct EstonianPersonalCodeValidator;

impl EstonianPersonalCodeValidator {
    /// Computes the check digit for the first ten digits of a code.
    pub fn check_digit(digits: &[u32; 10]) -> u32 {
        let weighted = |weights: &[u32; 10]| -> u32 {
            digits
                .iter()
                .zip(weights)
                .map(|(digit, weight)| digit * weight)
                .sum::<u32>()
                % 11
        };

        match weighted(&PRIMARY_WEIGHTS) {
            10 => match weighted(&SECONDARY_WEIGHTS) {
                10 => 0,
                remainder => remainder,
            },
            remainder => remainder,
        }
    }
}

impl PersonalCodeValidator for EstonianPersonalCodeValidator {
    fn is_valid(&self, personal_code: &str) -> bool {
        if personal_code.len() != 11 || !personal_code.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        if birth_date(personal_code).is_err() {
            return false;
        }

        let mut digits = [0u32; 11];
        for (slot, byte) in digits.iter_mut().zip(personal_code.bytes()) {
            *slot = u32::from(byte - b'0');
        }

        let mut body = [0u32; 10];
        body.copy_from_slice(&digits[..10]);
        Self::check_digit(&body) == digits[10]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_codes() {
        let validator = EstonianPersonalCodeValidator;
        for code in ["39005124500", "49005129999", "50601151000", "60701150007"] {
            assert!(validator.is_valid(code), "{code} should be valid");
        }
    }

    #[test]
    fn rejects_bad_check_digit() {
        let validator = EstonianPersonalCodeValidator;
        assert!(!validator.is_valid("39005124501"));
        assert!(!validator.is_valid("49005129998"));
    }

    #[test]
    fn rejects_wrong_shape() {
        let validator = EstonianPersonalCodeValidator;
        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("3900512450"));
        assert!(!validator.is_valid("390051245000"));
        assert!(!validator.is_valid("3900512450a"));
        assert!(!validator.is_valid("9900512450\u{0}"));
    }

    #[test]
    fn rejects_unknown_century_and_impossible_dates() {
        let validator = EstonianPersonalCodeValidator;
        assert!(!validator.is_valid("99005124500"));
        assert!(!validator.is_valid("39013124500"));
    }

    #[test]
    fn falls_back_to_secondary_weights() {
        let validator = EstonianPersonalCodeValidator;
        assert_eq!(
            EstonianPersonalCodeValidator::check_digit(&[3, 9, 0, 0, 5, 1, 2, 0, 1, 1]),
            1
        );
        assert!(validator.is_valid("39005120111"));
    }

    #[test]
    fn uses_zero_when_both_weightings_leave_ten() {
        let validator = EstonianPersonalCodeValidator;
        assert_eq!(
            EstonianPersonalCodeValidator::check_digit(&[3, 9, 0, 0, 5, 1, 2, 0, 9, 6]),
            0
        );
        assert!(validator.is_valid("39005120960"));
    }
}
