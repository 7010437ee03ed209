//! Weighted proration of a building-wide amount onto the concerned dwelling
//!
//! Line items only record how many units they affect, not which ones. Each
//! additional affected unit is therefore approximated by the average rent of
//! its category, while the concerned dwelling contributes its exact rent:
//!
//! ```text
//! base   = rent + max(0, dwellings_affected - 1) × avg_other_dwelling_rent
//!               + non_residential_affected × avg_non_residential_rent
//! weight = rent / base
//! ```
//!
//! Both averages are kept as numerator and divisor, and the base is brought to
//! a common denominator, so the weight takes a single division. A base that
//! cancels to zero is detected exactly instead of surviving as a residue of
//! the averages' long divisions.
//!
//! Repairs, new expenses and aid variations all share this weight.

use crate::subtotals::BuildingSubtotals;
use rust_decimal::Decimal;

/// A per-unit average held as `total / units`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Average {
    total: Decimal,
    units: Decimal,
}

impl Average {
    const NONE: Average = Average {
        total: Decimal::ZERO,
        units: Decimal::ONE,
    };

    fn value(&self) -> Decimal {
        self.total / self.units
    }
}

/// Everything needed to weight a line item, fixed for one calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProrationContext {
    rent: Decimal,
    building_revenue: Decimal,
    other_dwellings: Average,
    non_residential: Average,
}

impl ProrationContext {
    pub fn new(rent: Decimal, subtotals: &BuildingSubtotals) -> Self {
        let dwellings = subtotals.dwellings;
        let non_residential = subtotals.non_residential;

        let other_dwellings = if dwellings.count <= 1 {
            Average::NONE
        } else {
            Average {
                total: dwellings.rent - rent,
                units: Decimal::from(dwellings.count - 1),
            }
        };

        let non_residential = if non_residential.count == 0 {
            Average::NONE
        } else {
            Average {
                total: non_residential.rent,
                units: Decimal::from(non_residential.count),
            }
        };

        Self {
            rent,
            building_revenue: subtotals.building_revenue,
            other_dwellings,
            non_residential,
        }
    }

    pub fn avg_other_dwelling_rent(&self) -> Decimal {
        self.other_dwellings.value()
    }

    pub fn avg_non_residential_rent(&self) -> Decimal {
        self.non_residential.value()
    }

    /// Base scaled by `other_dwellings.units × non_residential.units`
    fn scaled_base(&self, dwellings_affected: u32, non_residential_affected: u32) -> Decimal {
        let others = Decimal::from(dwellings_affected.saturating_sub(1));
        let non_residential = Decimal::from(non_residential_affected);
        let (od, nr) = (self.other_dwellings, self.non_residential);

        self.rent * od.units * nr.units
            + others * od.total * nr.units
            + non_residential * nr.total * od.units
    }

    /// Estimated combined rent of the units a line item affects
    pub fn concerned_base(
        &self,
        dwellings_affected: u32,
        non_residential_affected: u32,
    ) -> Decimal {
        self.scaled_base(dwellings_affected, non_residential_affected)
            / (self.other_dwellings.units * self.non_residential.units)
    }

    /// Share of a line item's amount borne by the concerned dwelling.
    ///
    /// Zero when the building has no revenue or the affected base is zero.
    pub fn weight(&self, dwellings_affected: u32, non_residential_affected: u32) -> Decimal {
        if self.building_revenue.is_zero() {
            return Decimal::ZERO;
        }

        let scaled_base = self.scaled_base(dwellings_affected, non_residential_affected);
        if scaled_base.is_zero() {
            return Decimal::ZERO;
        }

        self.rent * self.other_dwellings.units * self.non_residential.units / scaled_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared_types::UnitSubtotal;

    fn subtotals(dwellings: (u64, Decimal), non_residential: (u64, Decimal)) -> BuildingSubtotals {
        let annual_rent_total = (dwellings.1 + non_residential.1) * dec!(12);
        BuildingSubtotals {
            dwellings: UnitSubtotal {
                count: dwellings.0,
                rent: dwellings.1,
            },
            non_residential: UnitSubtotal {
                count: non_residential.0,
                rent: non_residential.1,
            },
            annual_rent_total,
            building_revenue: annual_rent_total,
            revenue_weight: Decimal::ZERO,
        }
    }

    #[test]
    fn test_single_dwelling_bears_everything() {
        let ctx = ProrationContext::new(dec!(1000), &subtotals((1, dec!(1000)), (0, dec!(0))));
        assert_eq!(ctx.weight(1, 0), Decimal::ONE);
        // Counts beyond the building are harmless with no other units to average
        assert_eq!(ctx.weight(3, 0), Decimal::ONE);
    }

    #[test]
    fn test_other_dwellings_use_average_of_the_others() {
        // 4 dwellings totaling 4 000; the concerned one pays 1 000,
        // the other three average 1 000
        let ctx = ProrationContext::new(dec!(1000), &subtotals((4, dec!(4000)), (0, dec!(0))));
        assert_eq!(ctx.avg_other_dwelling_rent(), dec!(1000));
        assert_eq!(ctx.concerned_base(4, 0), dec!(4000));
        assert_eq!(ctx.weight(4, 0), dec!(0.25));
        assert_eq!(ctx.weight(2, 0), dec!(0.5));
    }

    #[test]
    fn test_average_excludes_concerned_rent() {
        let ctx = ProrationContext::new(dec!(600), &subtotals((3, dec!(2400)), (0, dec!(0))));
        assert_eq!(ctx.avg_other_dwelling_rent(), dec!(900));
        assert_eq!(ctx.weight(3, 0), dec!(0.25));
    }

    #[test]
    fn test_non_residential_units_use_their_own_average() {
        let ctx = ProrationContext::new(dec!(800), &subtotals((2, dec!(1600)), (2, dec!(3000))));
        assert_eq!(ctx.avg_non_residential_rent(), dec!(1500));
        assert_eq!(ctx.concerned_base(2, 1), dec!(3100));
    }

    #[test]
    fn test_zero_dwellings_affected_counts_concerned_rent_only() {
        let ctx = ProrationContext::new(dec!(800), &subtotals((2, dec!(1600)), (0, dec!(0))));
        assert_eq!(ctx.concerned_base(0, 0), dec!(800));
        assert_eq!(ctx.weight(0, 0), Decimal::ONE);
    }

    #[test]
    fn test_zero_base_yields_zero_weight() {
        let ctx = ProrationContext::new(Decimal::ZERO, &subtotals((1, dec!(500)), (0, dec!(0))));
        assert_eq!(ctx.weight(1, 0), Decimal::ZERO);
    }

    #[test]
    fn test_base_cancelling_through_thirds_is_exactly_zero() {
        // Others average -1/3 each, commercial units 1/3 each:
        // 1 + 4 × (-1/3) + 1 × 1/3 = 0
        let ctx = ProrationContext::new(dec!(1), &subtotals((4, dec!(0)), (3, dec!(1))));
        assert_eq!(ctx.concerned_base(5, 1), Decimal::ZERO);
        assert_eq!(ctx.weight(5, 1), Decimal::ZERO);
    }

    #[test]
    fn test_zero_revenue_yields_zero_weight() {
        let ctx = ProrationContext::new(dec!(1000), &subtotals((0, dec!(0)), (0, dec!(0))));
        assert_eq!(ctx.weight(1, 0), Decimal::ZERO);
    }
}
