use crate::{error::invalid_input_error, BikeshareError};

/// validates a free-form user input against a set of allowed values. the
/// comparison ignores surrounding whitespace and ASCII case.
///
/// # Returns
///
/// the matching entry of `allowed`, or [`BikeshareError::InvalidInput`] listing
/// the accepted values.
pub fn validate<'a>(input: &str, allowed: &[&'a str]) -> Result<&'a str, BikeshareError> {
    let normalized = input.trim();
    allowed
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(normalized))
        .copied()
        .ok_or_else(|| invalid_input_error(input, allowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_matches_ignoring_case_and_whitespace() {
        let allowed = ["yes", "no"];
        assert_eq!(validate("  YES\n", &allowed).unwrap(), "yes");
        assert_eq!(validate("No", &allowed).unwrap(), "no");
    }

    #[test]
    fn test_validate_rejects_unknown_value() {
        let allowed = ["yes", "no"];
        match validate("maybe", &allowed) {
            Err(BikeshareError::InvalidInput { input, expected }) => {
                assert_eq!(input, "maybe");
                assert_eq!(expected, "yes, no");
            }
            other => panic!("expected invalid input error, found {other:?}"),
        }
    }
}
