//! Aggregation of section contributions into the recommended rent
//!
//! Rounding order is part of the methodology and must not be rearranged:
//!
//! - the base adjustment enters the total already rounded to cents;
//! - every other section enters unrounded, multi-line sections as the
//!   unrounded sum of their lines;
//! - the displayed total is the cents rounding of that mixture, while the
//!   recommended rent rounds `current_rent + raw total` to a whole unit.

use crate::proration::ProrationContext;
use crate::rates::RateSet;
use crate::rounding::{round2, round_half_up};
use crate::sections::{
    adjust_aid_variation, adjust_new_expense, adjust_repair, adjust_snow_removal,
    adjust_tax_or_insurance, base_adjustment,
};
use crate::subtotals::BuildingSubtotals;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared_types::{CalculationInput, CalculationOutput, LineAdjustment, SectionTotal};

/// Collect line adjustments, summing raw values in input order
fn section_total(lines: Vec<LineAdjustment>) -> SectionTotal {
    let raw_total = lines.iter().fold(Decimal::ZERO, |acc, line| acc + line.raw);
    SectionTotal {
        lines,
        raw_total,
        total: round2(raw_total),
    }
}

/// Final rent figures derived from the unrounded grand total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentFigures {
    pub total_adjustment: Decimal,
    pub recommended_rent: Decimal,
    pub percentage_variation: Decimal,
}

/// Derive displayed total, recommended rent and percentage variation
pub fn rent_figures(current_rent: Decimal, raw_total_adjustment: Decimal) -> RentFigures {
    let total_adjustment = round_half_up(raw_total_adjustment, 2);
    let recommended_rent = round_half_up(current_rent + raw_total_adjustment, 0);
    let percentage_variation = if current_rent > Decimal::ZERO {
        round_half_up(((recommended_rent - current_rent) / current_rent) * dec!(100), 2)
    } else {
        Decimal::ZERO
    };

    RentFigures {
        total_adjustment,
        recommended_rent,
        percentage_variation,
    }
}

/// Run every section over the input and aggregate
pub fn run(input: &CalculationInput, rates: &RateSet) -> CalculationOutput {
    let rent = input.current_rent;
    let subtotals = BuildingSubtotals::from_input(input);
    let revenue = subtotals.building_revenue;

    let base = base_adjustment(input, rates);

    let municipal_tax = adjust_tax_or_insurance(&input.municipal_tax, rent, revenue, rates);
    let school_tax = adjust_tax_or_insurance(&input.school_tax, rent, revenue, rates);
    let insurance = adjust_tax_or_insurance(&input.insurance, rent, revenue, rates);
    let tax_insurance_raw = municipal_tax.raw + school_tax.raw + insurance.raw;

    let ctx = ProrationContext::new(rent, &subtotals);

    let repairs = section_total(
        input
            .repairs
            .iter()
            .map(|line| adjust_repair(line, &ctx, rates))
            .collect(),
    );
    let new_expenses = section_total(
        input
            .new_expenses
            .iter()
            .map(|line| adjust_new_expense(line, &ctx))
            .collect(),
    );
    let aid_variations = section_total(
        input
            .aid_variations
            .iter()
            .map(|line| adjust_aid_variation(line, &ctx))
            .collect(),
    );
    let new_expenses_aid_raw = new_expenses.raw_total + aid_variations.raw_total;

    let snow_removal = adjust_snow_removal(input.snow_removal.as_ref(), rent, revenue);

    let raw_total_adjustment = base.adjustment
        + tax_insurance_raw
        + repairs.raw_total
        + new_expenses_aid_raw
        + snow_removal.raw;

    let figures = rent_figures(rent, raw_total_adjustment);

    CalculationOutput {
        dwelling_subtotal: subtotals.dwellings,
        non_residential_subtotal: subtotals.non_residential,
        annual_rent_total: subtotals.annual_rent_total,
        building_revenue: revenue,
        revenue_weight: subtotals.revenue_weight,
        base,
        municipal_tax,
        school_tax,
        insurance,
        tax_insurance_total: round2(tax_insurance_raw),
        repairs,
        new_expenses,
        aid_variations,
        new_expenses_aid_total: round2(new_expenses_aid_raw),
        snow_removal,
        raw_total_adjustment,
        total_adjustment: figures.total_adjustment,
        recommended_rent: figures.recommended_rent,
        percentage_variation: figures.percentage_variation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{NewExpenseLine, RevenueBreakdown, UnitRevenueEntry};

    #[test]
    fn test_rounding_mixture_uses_raw_total_for_rent() {
        let figures = rent_figures(dec!(1000), dec!(12.345));
        assert_eq!(figures.total_adjustment, dec!(12.35));
        assert_eq!(figures.recommended_rent, dec!(1012));
        assert_eq!(figures.percentage_variation, dec!(1.2));
    }

    #[test]
    fn test_raw_total_decides_whole_unit_rounding() {
        // 1000 + 12.4951 rounds to 1012 even though 12.4951 displays as 12.50
        let figures = rent_figures(dec!(1000), dec!(12.4951));
        assert_eq!(figures.total_adjustment, dec!(12.5));
        assert_eq!(figures.recommended_rent, dec!(1012));
    }

    #[test]
    fn test_zero_rent_has_zero_percentage() {
        let figures = rent_figures(Decimal::ZERO, dec!(15));
        assert_eq!(figures.recommended_rent, dec!(15));
        assert_eq!(figures.percentage_variation, Decimal::ZERO);
    }

    #[test]
    fn test_negative_total_lowers_rent() {
        let figures = rent_figures(dec!(1000), dec!(-25));
        assert_eq!(figures.total_adjustment, dec!(-25));
        assert_eq!(figures.recommended_rent, dec!(975));
        assert_eq!(figures.percentage_variation, dec!(-2.5));
    }

    #[test]
    fn test_section_sums_raw_lines_before_rounding() {
        let section = section_total(vec![
            LineAdjustment {
                raw: dec!(0.004),
                amount: Decimal::ZERO,
                ..Default::default()
            },
            LineAdjustment {
                raw: dec!(0.004),
                amount: Decimal::ZERO,
                ..Default::default()
            },
        ]);
        assert_eq!(section.raw_total, dec!(0.008));
        assert_eq!(section.total, dec!(0.01));
    }

    #[test]
    fn test_new_expenses_and_aid_combined_unrounded() {
        let input = CalculationInput {
            current_rent: dec!(1000),
            dwellings: RevenueBreakdown {
                rented: UnitRevenueEntry {
                    count: 1,
                    monthly_rent: dec!(1000),
                },
                ..Default::default()
            },
            new_expenses: vec![NewExpenseLine {
                id: "a".to_string(),
                expense: dec!(100),
                dwelling_count_affected: 1,
                is_concerned_dwelling_affected: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let output = run(&input, &RateSet::STATUTORY);

        // 100 / 12 = 8.333...
        assert_eq!(output.new_expenses.total, dec!(8.33));
        assert_eq!(output.new_expenses_aid_total, dec!(8.33));
        assert_eq!(
            output.raw_total_adjustment,
            output.base.adjustment + output.new_expenses.raw_total
        );
        assert_eq!(output.total_adjustment, dec!(39.33));
        assert_eq!(output.recommended_rent, dec!(1039));
    }
}
