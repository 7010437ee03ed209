// Commercial rounding used for every monetary value the engine reports
use rust_decimal::{Decimal, RoundingStrategy};

/// Extra places kept when re-quantizing before the final rounding
const REQUANTIZE_DECIMALS: u32 = 8;

/// Round half away from zero at `decimals` places.
///
/// The value is first re-quantized to `decimals + 8` places so that the
/// residue of long divisions (`12.3449999999996…`) lands on the intended tie
/// before the final rounding. Banker's rounding and truncation are never used.
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    let rounded = value
        .round_dp_with_strategy(
            decimals + REQUANTIZE_DECIMALS,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        // Avoid reporting -0.00
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Round to cents
pub fn round2(value: Decimal) -> Decimal {
    round_half_up(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_half_up_at_cents() {
        assert_eq!(round2(dec!(12.345)), dec!(12.35));
        assert_eq!(round2(dec!(1.005)), dec!(1.01));
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
        assert_eq!(round2(dec!(12.344)), dec!(12.34));
    }

    #[test]
    fn test_rounds_half_away_from_zero_for_negatives() {
        assert_eq!(round2(dec!(-12.345)), dec!(-12.35));
        assert_eq!(round2(dec!(-0.004)), Decimal::ZERO);
        assert!(!round2(dec!(-0.004)).is_sign_negative());
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(round_half_up(dec!(1012.345), 0), dec!(1012));
        assert_eq!(round_half_up(dec!(1012.5), 0), dec!(1013));
        assert_eq!(round_half_up(dec!(1030.9999999999), 0), dec!(1031));
    }

    #[test]
    fn test_requantizes_division_residue() {
        assert_eq!(round2(dec!(12.344999999995)), dec!(12.35));
        assert_eq!(round2(dec!(12.34499999)), dec!(12.34));
    }

    #[test]
    fn test_not_bankers_rounding() {
        // Banker's rounding would give 2 and 0.12
        assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
        assert_eq!(round2(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn test_cpi_product_rounds_cleanly() {
        assert_eq!(round2(dec!(1000) * dec!(0.031)), dec!(31));
        assert_eq!(round2(dec!(850) * dec!(0.031)), dec!(26.35));
    }

    #[test]
    fn test_zero() {
        assert_eq!(round2(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(round_half_up(Decimal::ZERO, 0), Decimal::ZERO);
    }
}
