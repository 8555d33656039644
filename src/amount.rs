use std::str::FromStr;

use bigdecimal::BigDecimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("`{input}` is not a valid decimal amount")]
    Invalid { input: String },
}

/// Parses a decimal string exactly, keeping every digit and its scale.
pub fn parse_amount(input: &str) -> Result<BigDecimal, AmountError> {
    BigDecimal::from_str(input.trim()).map_err(|_| AmountError::Invalid {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exactly() {
        let amount = parse_amount("1000.12345").unwrap();
        assert_eq!(amount.to_plain_string(), "1000.12345");
        assert_eq!(parse_amount(" 100 ").unwrap().to_plain_string(), "100");
        assert_eq!(parse_amount("-0.5").unwrap().to_plain_string(), "-0.5");
    }

    #[test]
    fn keeps_digits_past_28() {
        let amount = parse_amount("1000.123456789012345678901234567").unwrap();
        assert_eq!(amount.to_plain_string(), "1000.123456789012345678901234567");
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_amount("12,5").unwrap_err();
        assert_eq!(
            err,
            AmountError::Invalid {
                input: "12,5".to_string()
            }
        );
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
