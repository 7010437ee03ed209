// Section 1: cost-of-living adjustment
use crate::rates::RateSet;
use crate::rounding::round2;
use rust_decimal::Decimal;
use shared_types::{BaseAdjustment, CalculationInput};

/// Compute the base adjustment, rounded to cents.
///
/// Seniors residences split the rent into a personal-services portion and the
/// remainder, each with its own rate. The two blocks are summed unrounded and
/// rounded once; their individual roundings are reported for display only.
pub fn base_adjustment(input: &CalculationInput, rates: &RateSet) -> BaseAdjustment {
    let rent = input.current_rent;

    if !input.is_seniors_residence {
        return BaseAdjustment {
            adjustment: round2(rent * rates.cpi_rate),
            services_block: None,
            cpi_block: None,
        };
    }

    let services = input.services_portion.unwrap_or(Decimal::ZERO);
    let services_block = services * rates.senior_services_rate;
    let cpi_block = (rent - services) * rates.cpi_rate;

    BaseAdjustment {
        adjustment: round2(services_block + cpi_block),
        services_block: Some(round2(services_block)),
        cpi_block: Some(round2(cpi_block)),
    }
}
