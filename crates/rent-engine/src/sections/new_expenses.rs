// Section 4: new recurring expenses
use crate::proration::ProrationContext;
use crate::rates::MONTHS_PER_YEAR;
use crate::rounding::round2;
use rust_decimal::Decimal;
use shared_types::{LineAdjustment, NewExpenseLine};

/// Monthly contribution of a new expense. No amortization: the retained
/// annual expense is spread over twelve months and weighted.
pub fn adjust_new_expense(line: &NewExpenseLine, ctx: &ProrationContext) -> LineAdjustment {
    let retained = line.retained_expense();
    if !line.is_concerned_dwelling_affected || retained <= Decimal::ZERO {
        return LineAdjustment {
            id: line.id.clone(),
            ..Default::default()
        };
    }

    let weight = ctx.weight(line.dwelling_count_affected, line.non_residential_count_affected);
    let raw = (retained / MONTHS_PER_YEAR) * weight;

    LineAdjustment {
        id: line.id.clone(),
        weight,
        annual_eligible: retained,
        raw,
        amount: round2(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtotals::BuildingSubtotals;
    use rust_decimal_macros::dec;
    use shared_types::UnitSubtotal;

    fn four_dwellings() -> ProrationContext {
        let subtotals = BuildingSubtotals {
            dwellings: UnitSubtotal {
                count: 4,
                rent: dec!(4000),
            },
            non_residential: UnitSubtotal::default(),
            annual_rent_total: dec!(48000),
            building_revenue: dec!(48000),
            revenue_weight: dec!(0.25),
        };
        ProrationContext::new(dec!(1000), &subtotals)
    }

    fn expense(amount: Decimal, aid: Decimal) -> NewExpenseLine {
        NewExpenseLine {
            id: "concierge".to_string(),
            expense: amount,
            financial_aid: aid,
            dwelling_count_affected: 4,
            is_concerned_dwelling_affected: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_expense_prorated_without_amortization() {
        // (2400 - 0) / 12 × 0.25 = 50
        let adj = adjust_new_expense(&expense(dec!(2400), Decimal::ZERO), &four_dwellings());
        assert_eq!(adj.weight, dec!(0.25));
        assert_eq!(adj.raw, dec!(50));
    }

    #[test]
    fn test_aid_reduces_retained_expense() {
        let adj = adjust_new_expense(&expense(dec!(2400), dec!(1200)), &four_dwellings());
        assert_eq!(adj.annual_eligible, dec!(1200));
        assert_eq!(adj.raw, dec!(25));
    }

    #[test]
    fn test_gated_lines_yield_zero() {
        let covered = adjust_new_expense(&expense(dec!(1000), dec!(1000)), &four_dwellings());
        assert_eq!(covered.raw, Decimal::ZERO);

        let unaffected = NewExpenseLine {
            is_concerned_dwelling_affected: false,
            ..expense(dec!(2400), Decimal::ZERO)
        };
        assert_eq!(adjust_new_expense(&unaffected, &four_dwellings()).raw, Decimal::ZERO);
    }
}
