//! Stake amount parsing and fixed-point scaling.

use crate::error::StakeError;

/// Base units per whole token. The staked token is assumed to use six
/// decimals, matching the deployed mint.
pub const AMOUNT_SCALE: u64 = 1_000_000;

/// Parse a human-entered amount into base units.
///
/// Accepts any decimal text `f64` accepts, rejects non-finite and negative
/// values, scales by [`AMOUNT_SCALE`] and truncates toward zero. Amounts
/// whose scaled value does not fit a `u64` are rejected.
pub fn parse_stake_amount(input: &str) -> Result<u64, StakeError> {
    let text = input.trim();
    let value: f64 = text
        .parse()
        .map_err(|_| StakeError::InvalidAmount(format!("not a number: {text:?}")))?;

    if !value.is_finite() {
        return Err(StakeError::InvalidAmount("amount must be finite".into()));
    }
    if value < 0.0 {
        return Err(StakeError::InvalidAmount(
            "amount must not be negative".into(),
        ));
    }

    let scaled = (value * AMOUNT_SCALE as f64).trunc();
    // `u64::MAX as f64` rounds up to 2^64, so >= catches every overflow.
    if scaled >= u64::MAX as f64 {
        return Err(StakeError::InvalidAmount(format!(
            "amount too large: {text}"
        )));
    }

    Ok(scaled as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_token_scales_to_a_million_base_units() {
        assert_eq!(parse_stake_amount("1").unwrap(), 1_000_000);
    }

    #[test]
    fn fractional_amounts_scale() {
        assert_eq!(parse_stake_amount("0.5").unwrap(), 500_000);
        assert_eq!(parse_stake_amount("2.25").unwrap(), 2_250_000);
    }

    #[test]
    fn zero_is_allowed() {
        assert_eq!(parse_stake_amount("0").unwrap(), 0);
    }

    #[test]
    fn sub_base_unit_digits_truncate_toward_zero() {
        assert_eq!(parse_stake_amount("0.0000019").unwrap(), 1);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_stake_amount("  3 ").unwrap(), 3_000_000);
    }

    #[test]
    fn exponent_notation_parses() {
        assert_eq!(parse_stake_amount("1e3").unwrap(), 1_000_000_000);
    }

    #[test]
    fn text_is_rejected() {
        let err = parse_stake_amount("abc").unwrap_err();
        assert!(matches!(err, StakeError::InvalidAmount(_)));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse_stake_amount("").is_err());
        assert!(parse_stake_amount("   ").is_err());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(parse_stake_amount("-1").is_err());
        assert!(parse_stake_amount("-0.0001").is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        // `f64::from_str` accepts these spellings; the scaler must not.
        assert!(parse_stake_amount("inf").is_err());
        assert!(parse_stake_amount("-inf").is_err());
        assert!(parse_stake_amount("NaN").is_err());
    }

    #[test]
    fn overflowing_amounts_are_rejected() {
        assert!(parse_stake_amount("1e30").is_err());
    }

    #[test]
    fn large_amounts_near_the_limit_are_accepted() {
        // 2^44 whole tokens; the scaled product is exact in an f64 and
        // close to the 2^64 / 10^6 ceiling.
        let units = parse_stake_amount("17592186044416").unwrap();
        assert_eq!(units, 17_592_186_044_416_000_000);
    }
}
