// Section 5: snow removal fees
use crate::rates::MONTHS_PER_YEAR;
use crate::rounding::round2;
use rust_decimal::Decimal;
use shared_types::{SnowRemovalAdjustment, SnowRemovalRecord};

/// Prorate the year-over-year change in snow removal fees by the concerned
/// dwelling's share of building revenue
pub fn adjust_snow_removal(
    record: Option<&SnowRemovalRecord>,
    rent: Decimal,
    building_revenue: Decimal,
) -> SnowRemovalAdjustment {
    let Some(record) = record else {
        return SnowRemovalAdjustment::default();
    };

    let delta = record.delta();
    if building_revenue.is_zero() {
        return SnowRemovalAdjustment {
            delta,
            ..Default::default()
        };
    }

    let annual_weight = (rent * MONTHS_PER_YEAR) / building_revenue;
    let raw = (delta * annual_weight) / MONTHS_PER_YEAR;

    SnowRemovalAdjustment {
        delta,
        raw,
        amount: round2(raw),
    }
}
