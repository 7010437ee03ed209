// Section 2: municipal tax, school tax and insurance variations
use crate::rates::{RateSet, MONTHS_PER_YEAR};
use crate::rounding::round2;
use rust_decimal::Decimal;
use shared_types::{TaxAdjustment, TaxRecord};

/// Prorate the variation of one tax or insurance category onto the concerned
/// dwelling's monthly rent.
///
/// Decreases pass through in full. Increases are only passed on above the
/// franchise (`cpi_rate × prior_period`), and only the part exceeding it.
/// The same rule applies to municipal tax, school tax and insurance premiums.
pub fn adjust_tax_or_insurance(
    record: &TaxRecord,
    rent: Decimal,
    building_revenue: Decimal,
    rates: &RateSet,
) -> TaxAdjustment {
    let variation = record.current_period - record.prior_period;

    if record.prior_period.is_zero() || building_revenue.is_zero() {
        return TaxAdjustment {
            variation,
            ..Default::default()
        };
    }

    let weight = (rent * MONTHS_PER_YEAR) / building_revenue;

    let (franchise, raw) = if variation < Decimal::ZERO {
        (Decimal::ZERO, (variation * weight) / MONTHS_PER_YEAR)
    } else {
        let franchise = rates.cpi_rate * record.prior_period;
        if variation <= franchise {
            (franchise, Decimal::ZERO)
        } else {
            (franchise, ((variation - franchise) * weight) / MONTHS_PER_YEAR)
        }
    };

    TaxAdjustment {
        variation,
        franchise,
        raw,
        amount: round2(raw),
    }
}
