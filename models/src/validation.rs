// models/src/validation.rs
//
// Boundary validation for interactively entered fields. These return a
// value or the reason for rejection; the re-prompt loop lives in the CLI.

use crate::errors::{ValidationError, ValidationResult};
use crate::patient::{Gender, MAX_AGE};

/// Parses an age entered at the prompt. Accepts 0-120 inclusive.
pub fn parse_age(input: &str) -> ValidationResult<u8> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    if !(0..=MAX_AGE as i64).contains(&value) {
        return Err(ValidationError::AgeOutOfRange(value));
    }
    Ok(value as u8)
}

/// Parses a gender entered at the prompt. Exactly "M" or "F".
pub fn parse_gender(input: &str) -> ValidationResult<Gender> {
    input.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_ages_inside_range() {
        assert_eq!(parse_age("0"), Ok(0));
        assert_eq!(parse_age("45"), Ok(45));
        assert_eq!(parse_age("120"), Ok(120));
        assert_eq!(parse_age("  33 "), Ok(33));
    }

    #[test]
    fn should_reject_ages_outside_range() {
        assert_eq!(parse_age("121"), Err(ValidationError::AgeOutOfRange(121)));
        assert_eq!(parse_age("-1"), Err(ValidationError::AgeOutOfRange(-1)));
    }

    #[test]
    fn should_reject_non_numeric_age() {
        assert_eq!(
            parse_age("abc"),
            Err(ValidationError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_age(""), Err(ValidationError::NotANumber("".to_string())));
    }

    #[test]
    fn should_parse_gender_after_trimming() {
        assert_eq!(parse_gender(" M\n"), Ok(Gender::Male));
        assert_eq!(parse_gender("F"), Ok(Gender::Female));
        assert!(parse_gender("f").is_err());
    }
}
