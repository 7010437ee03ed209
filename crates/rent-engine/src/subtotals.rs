// Building-wide revenue statistics shared by every proration section
use crate::rates::MONTHS_PER_YEAR;
use rust_decimal::Decimal;
use shared_types::{CalculationInput, RevenueBreakdown, UnitSubtotal};

/// Subtotals derived from the revenue breakdowns of the building
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuildingSubtotals {
    pub dwellings: UnitSubtotal,
    pub non_residential: UnitSubtotal,
    /// Monthly rents of all units × 12
    pub annual_rent_total: Decimal,
    /// Annual rents plus other operating revenue
    pub building_revenue: Decimal,
    /// Concerned dwelling's annual rent as a share of building revenue
    pub revenue_weight: Decimal,
}

/// Sum counts and monthly rents over the three occupancy categories
pub fn unit_subtotal(breakdown: &RevenueBreakdown) -> UnitSubtotal {
    breakdown
        .entries()
        .iter()
        .fold(UnitSubtotal::default(), |acc, entry| UnitSubtotal {
            count: acc.count + u64::from(entry.count),
            rent: acc.rent + entry.monthly_rent,
        })
}

impl BuildingSubtotals {
    pub fn from_input(input: &CalculationInput) -> Self {
        let dwellings = unit_subtotal(&input.dwellings);
        let non_residential = unit_subtotal(&input.non_residential);

        let annual_rent_total = (dwellings.rent + non_residential.rent) * MONTHS_PER_YEAR;
        let building_revenue = annual_rent_total + input.other_revenue;

        let revenue_weight = if building_revenue > Decimal::ZERO {
            (input.current_rent * MONTHS_PER_YEAR) / building_revenue
        } else {
            Decimal::ZERO
        };

        Self {
            dwellings,
            non_residential,
            annual_rent_total,
            building_revenue,
            revenue_weight,
        }
    }
}
