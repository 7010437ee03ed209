pub mod pipeline;
pub mod proration;
pub mod rates;
pub mod rounding;
pub mod sections;
pub mod subtotals;

pub use proration::ProrationContext;
pub use rates::RateSet;
pub use rounding::{round2, round_half_up};
pub use subtotals::BuildingSubtotals;

use shared_types::{CalculationInput, CalculationOutput};
use tracing::debug;

/// RentEngine entry point
///
/// Stateless: identical inputs always yield identical outputs, so a single
/// engine can be shared freely between threads and requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentEngine {
    rates: RateSet,
}

impl RentEngine {
    pub fn new() -> Self {
        Self {
            rates: RateSet::STATUTORY,
        }
    }

    pub fn with_rates(rates: RateSet) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateSet {
        &self.rates
    }

    /// Compute the full rent adjustment for the concerned dwelling
    pub fn calculate(&self, input: &CalculationInput) -> CalculationOutput {
        let output = pipeline::run(input, &self.rates);

        debug!(
            base = %output.base.adjustment,
            taxes = %output.tax_insurance_total,
            repairs = %output.repairs.total,
            new_expenses_aid = %output.new_expenses_aid_total,
            snow_removal = %output.snow_removal.amount,
            total = %output.total_adjustment,
            recommended_rent = %output.recommended_rent,
            "rent adjustment calculated"
        );

        output
    }
}

impl Default for RentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use shared_types::{RevenueBreakdown, UnitRevenueEntry};

    fn single_dwelling_input() -> CalculationInput {
        CalculationInput {
            current_rent: dec!(1000),
            dwellings: RevenueBreakdown {
                rented: UnitRevenueEntry {
                    count: 1,
                    monthly_rent: dec!(1000),
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_engine_uses_statutory_rates() {
        let engine = RentEngine::new();
        assert_eq!(engine.rates(), &RateSet::STATUTORY);
        assert_eq!(RentEngine::default(), engine);
    }

    #[test]
    fn test_engine_computes_base_only_scenario() {
        let output = RentEngine::new().calculate(&single_dwelling_input());

        assert_eq!(output.building_revenue, dec!(12000));
        assert_eq!(output.base.adjustment, dec!(31));
        assert_eq!(output.total_adjustment, dec!(31));
        assert_eq!(output.recommended_rent, dec!(1031));
        assert_eq!(output.percentage_variation, dec!(3.1));
    }

    #[test]
    fn test_engine_with_custom_rates() {
        let engine = RentEngine::with_rates(RateSet {
            cpi_rate: dec!(0.02),
            ..RateSet::STATUTORY
        });
        let output = engine.calculate(&single_dwelling_input());
        assert_eq!(output.base.adjustment, dec!(20));
        assert_eq!(output.recommended_rent, dec!(1020));
    }

    #[test]
    fn test_engine_does_not_mutate_input() {
        let input = single_dwelling_input();
        let before = input.clone();
        let _ = RentEngine::new().calculate(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_engine_handles_unit_counts_beyond_u32() {
        let input = CalculationInput {
            dwellings: RevenueBreakdown {
                rented: UnitRevenueEntry {
                    count: u32::MAX,
                    monthly_rent: dec!(1000),
                },
                vacant: UnitRevenueEntry {
                    count: 1,
                    monthly_rent: Decimal::ZERO,
                },
                ..Default::default()
            },
            repairs: vec![shared_types::RepairLine {
                expense: dec!(12000),
                dwelling_count_affected: 2,
                is_concerned_dwelling_affected: true,
                ..Default::default()
            }],
            ..single_dwelling_input()
        };
        let output = RentEngine::new().calculate(&input);

        assert_eq!(output.dwelling_subtotal.count, u64::from(u32::MAX) + 1);
        assert_eq!(output.base.adjustment, dec!(31));
        assert!(output.repairs.lines[0].weight > Decimal::ZERO);
    }
}
