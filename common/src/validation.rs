use rust_decimal::Decimal;
use validator::ValidationError;

/// Largest amount a `NUMERIC(8, 2)` column holds.
const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Money amounts: non-negative, at most two decimal places, within column range.
pub fn amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative").with_message("must not be negative".into()));
    }
    if value.normalize().scale() > 2 {
        return Err(ValidationError::new("scale")
            .with_message("must have at most two decimal places".into()));
    }
    if *value > MAX_AMOUNT {
        return Err(ValidationError::new("range").with_message("amount is too large".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn accepts_plain_prices() {
        for ok in ["0", "5.0", "12.50", "999999.99", "-0"] {
            assert!(amount(&dec(ok)).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_negative_fractional_and_huge_amounts() {
        assert_eq!(amount(&dec("-1")).unwrap_err().code, "negative");
        assert_eq!(amount(&dec("1.005")).unwrap_err().code, "scale");
        assert_eq!(amount(&dec("1000000")).unwrap_err().code, "range");
    }

    #[test]
    fn trailing_zeros_do_not_count_as_places() {
        assert!(amount(&dec("3.1000")).is_ok());
    }
}
