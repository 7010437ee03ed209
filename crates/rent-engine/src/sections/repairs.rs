// Section 3: major repairs and improvements
use crate::proration::ProrationContext;
use crate::rates::{RateSet, MONTHS_PER_YEAR};
use crate::rounding::round2;
use rust_decimal::Decimal;
use shared_types::{LineAdjustment, RepairLine};

/// Annual amount of a repair eligible for proration.
///
/// The retained expense is amortized at the capitalization rate. The share
/// financed by a reduced-interest loan is further capped by the actual annual
/// loan payment, so a cheaper loan lowers what is passed on.
pub fn annual_eligible_amount(line: &RepairLine, rates: &RateSet) -> Decimal {
    let retained = line.retained_expense();
    if retained <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let financed = line.reduced_interest_loan_amount.min(retained);
    let unfinanced = retained - financed;

    let annual_unfinanced = rates.capitalization_rate * unfinanced;
    let annual_financed = if financed > Decimal::ZERO {
        (rates.capitalization_rate * financed).min(line.annual_loan_payment)
    } else {
        Decimal::ZERO
    };

    annual_unfinanced + annual_financed
}

/// Monthly contribution of one repair line to the concerned dwelling's rent
pub fn adjust_repair(line: &RepairLine, ctx: &ProrationContext, rates: &RateSet) -> LineAdjustment {
    if !line.is_concerned_dwelling_affected || line.retained_expense() <= Decimal::ZERO {
        return LineAdjustment {
            id: line.id.clone(),
            ..Default::default()
        };
    }

    let annual_eligible = annual_eligible_amount(line, rates);
    let weight = ctx.weight(line.dwelling_count_affected, line.non_residential_count_affected);
    let raw = (annual_eligible * weight) / MONTHS_PER_YEAR;

    LineAdjustment {
        id: line.id.clone(),
        weight,
        annual_eligible,
        raw,
        amount: round2(raw),
    }
}
