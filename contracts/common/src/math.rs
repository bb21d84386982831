//! Mathematical Utilities for the FundMe Protocol
//!
//! Fixed-point conversion between the native settlement asset and the
//! reference currency. All arithmetic is checked u128; intermediate
//! products are formed before any division so precision is never truncated
//! early.

use crate::constants::{feed, limits, native, usd};
use crate::errors::{FundMeError, FundMeResult};
use crate::types::PriceQuote;

/// Convert a native-asset amount (base units, 18 decimals) into a
/// reference-currency value (18 decimals) using the feed's latest round.
///
/// `usd_value = amount * answer / 10^(native_decimals + feed_decimals - usd_decimals)`
///
/// The scaling exponent is driven by the decimals the feed reports, never a
/// hardcoded precision.
///
/// # Errors
/// - `OracleUnavailable` if the answer is non-positive or the reported
///   precision cannot be rescaled
/// - `Overflow` if the scaled product exceeds u128
pub fn native_to_usd(amount: u128, quote: &PriceQuote) -> FundMeResult<u128> {
    if quote.answer <= 0 {
        return Err(FundMeError::OracleUnavailable {
            reason: "non-positive answer",
        });
    }
    if quote.decimals > feed::MAX_DECIMALS {
        return Err(FundMeError::OracleUnavailable {
            reason: "unsupported feed precision",
        });
    }

    let product = amount
        .checked_mul(quote.answer as u128)
        .ok_or(FundMeError::Overflow)?;

    let exponent =
        native::DECIMALS as i32 + quote.decimals as i32 - usd::DECIMALS as i32;

    if exponent >= 0 {
        let divisor = 10u128
            .checked_pow(exponent as u32)
            .ok_or(FundMeError::Overflow)?;
        Ok(product / divisor)
    } else {
        let multiplier = 10u128
            .checked_pow((-exponent) as u32)
            .ok_or(FundMeError::Overflow)?;
        product.checked_mul(multiplier).ok_or(FundMeError::Overflow)
    }
}

/// Whether a converted reference-currency value meets the minimum
/// contribution
pub fn meets_minimum(usd_value: u128) -> bool {
    usd_value >= limits::MINIMUM_USD
}

/// Safe addition with overflow check
pub fn safe_add(a: u128, b: u128) -> FundMeResult<u128> {
    a.checked_add(b).ok_or(FundMeError::Overflow)
}

/// Safe subtraction with underflow check
pub fn safe_sub(a: u128, b: u128) -> FundMeResult<u128> {
    a.checked_sub(b).ok_or(FundMeError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::usd::ONE as ONE_USD;

    const ANSWER_2000: i64 = 2_000_00000000; // $2,000.00000000, 8 decimals
    const ONE_NATIVE: u128 = native::ONE;

    #[test]
    fn test_one_native_unit_at_2000() {
        let quote = PriceQuote::new(ANSWER_2000, 8);
        let usd_value = native_to_usd(ONE_NATIVE, &quote).unwrap();
        assert_eq!(usd_value, 2_000 * ONE_USD);
    }

    #[test]
    fn test_threshold_scenario_51_vs_49() {
        // $2,000/unit: $51 worth is 0.0255 units, $49 worth is 0.0245 units
        let quote = PriceQuote::new(ANSWER_2000, 8);

        let fifty_one = 25_500_000_000_000_000u128; // 0.0255 * 1e18
        let usd_value = native_to_usd(fifty_one, &quote).unwrap();
        assert_eq!(usd_value, 51 * ONE_USD);
        assert!(meets_minimum(usd_value));

        let forty_nine = 24_500_000_000_000_000u128; // 0.0245 * 1e18
        let usd_value = native_to_usd(forty_nine, &quote).unwrap();
        assert_eq!(usd_value, 49 * ONE_USD);
        assert!(!meets_minimum(usd_value));
    }

    #[test]
    fn test_conversion_uses_reported_decimals() {
        // Same $2,000 price published at 6-decimal precision
        let quote = PriceQuote::new(2_000_000000, 6);
        let usd_value = native_to_usd(ONE_NATIVE, &quote).unwrap();
        assert_eq!(usd_value, 2_000 * ONE_USD);
    }

    #[test]
    fn test_zero_amount_converts_to_zero() {
        let quote = PriceQuote::new(ANSWER_2000, 8);
        let usd_value = native_to_usd(0, &quote).unwrap();
        assert_eq!(usd_value, 0);
        assert!(!meets_minimum(usd_value));
    }

    #[test]
    fn test_non_positive_answer_is_unavailable() {
        let zero = PriceQuote::new(0, 8);
        assert!(matches!(
            native_to_usd(ONE_NATIVE, &zero),
            Err(FundMeError::OracleUnavailable { .. })
        ));

        let negative = PriceQuote::new(-1, 8);
        assert!(matches!(
            native_to_usd(ONE_NATIVE, &negative),
            Err(FundMeError::OracleUnavailable { .. })
        ));
    }

    #[test]
    fn test_unsupported_precision_is_unavailable() {
        let quote = PriceQuote::new(1, feed::MAX_DECIMALS + 1);
        assert!(matches!(
            native_to_usd(ONE_NATIVE, &quote),
            Err(FundMeError::OracleUnavailable { .. })
        ));
    }

    #[test]
    fn test_product_overflow() {
        let quote = PriceQuote::new(i64::MAX, 8);
        assert_eq!(
            native_to_usd(u128::MAX / 2, &quote),
            Err(FundMeError::Overflow)
        );
    }

    #[test]
    fn test_safe_math() {
        assert_eq!(safe_add(1, 2).unwrap(), 3);
        assert_eq!(safe_add(u128::MAX, 1), Err(FundMeError::Overflow));
        assert_eq!(safe_sub(3, 1).unwrap(), 2);
        assert_eq!(safe_sub(1, 3), Err(FundMeError::Overflow));
    }
}
