//! Boundary validation for calculation inputs
//!
//! The engine assumes non-negative amounts at cent precision and bounded unit
//! counts. Collaborators that accept user data (HTTP, browser, local storage)
//! run `validate` before handing the input over.
//!
//! The bounds keep every intermediate product of the engine inside the
//! `Decimal` range: the smallest nonzero proration base is one cent over the
//! product of the unit counts, so weights stay below `MAX_AMOUNT × MAX_UNITS²
//! × 100` even for inconsistent rent breakdowns.

use rust_decimal::Decimal;

use crate::error::InputError;
use crate::types::{CalculationInput, RevenueBreakdown};

/// Largest monetary amount accepted in any field
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest unit count accepted per occupancy category or affected count
pub const MAX_UNITS: u32 = 1_000;

/// Largest number of lines accepted per line-item section
pub const MAX_LINES: usize = 100;

fn amount(field: impl Into<String>, value: Decimal) -> Result<(), InputError> {
    let field = field.into();
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::Negative { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(InputError::AmountTooLarge {
            field,
            value,
            max: MAX_AMOUNT,
        });
    }
    if value.normalize().scale() > 2 {
        return Err(InputError::SubCentPrecision { field, value });
    }
    Ok(())
}

fn units(field: impl Into<String>, count: u32) -> Result<(), InputError> {
    if count > MAX_UNITS {
        return Err(InputError::TooManyUnits {
            field: field.into(),
            count,
            max: MAX_UNITS,
        });
    }
    Ok(())
}

fn lines<T>(section: &'static str, items: &[T]) -> Result<(), InputError> {
    if items.len() > MAX_LINES {
        return Err(InputError::TooManyLines {
            section,
            count: items.len(),
            max: MAX_LINES,
        });
    }
    Ok(())
}

fn check_breakdown(prefix: &str, breakdown: &RevenueBreakdown) -> Result<(), InputError> {
    for (name, entry) in [
        ("rented", &breakdown.rented),
        ("vacant", &breakdown.vacant),
        ("owner_occupied", &breakdown.owner_occupied),
    ] {
        units(format!("{prefix}.{name}.count"), entry.count)?;
        amount(format!("{prefix}.{name}.monthly_rent"), entry.monthly_rent)?;
    }
    Ok(())
}

impl CalculationInput {
    /// Parse and validate a JSON document in one step
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let input: CalculationInput = serde_json::from_str(json)?;
        input.validate()?;
        Ok(input)
    }

    /// Reject negative, oversized or sub-cent amounts and oversized counts.
    /// Variations are computed, so only their operands are checked here.
    pub fn validate(&self) -> Result<(), InputError> {
        amount("current_rent", self.current_rent)?;
        if let Some(services) = self.services_portion {
            amount("services_portion", services)?;
        }
        check_breakdown("dwellings", &self.dwellings)?;
        check_breakdown("non_residential", &self.non_residential)?;
        amount("other_revenue", self.other_revenue)?;

        for (name, record) in [
            ("municipal_tax", &self.municipal_tax),
            ("school_tax", &self.school_tax),
            ("insurance", &self.insurance),
        ] {
            amount(format!("{name}.current_period"), record.current_period)?;
            amount(format!("{name}.prior_period"), record.prior_period)?;
        }

        lines("repairs", &self.repairs)?;
        for (i, line) in self.repairs.iter().enumerate() {
            amount(format!("repairs[{i}].expense"), line.expense)?;
            amount(format!("repairs[{i}].financial_aid"), line.financial_aid)?;
            amount(
                format!("repairs[{i}].third_party_indemnity"),
                line.third_party_indemnity,
            )?;
            amount(
                format!("repairs[{i}].reduced_interest_loan_amount"),
                line.reduced_interest_loan_amount,
            )?;
            amount(
                format!("repairs[{i}].annual_loan_payment"),
                line.annual_loan_payment,
            )?;
            units(
                format!("repairs[{i}].dwelling_count_affected"),
                line.dwelling_count_affected,
            )?;
            units(
                format!("repairs[{i}].non_residential_count_affected"),
                line.non_residential_count_affected,
            )?;
        }

        lines("new_expenses", &self.new_expenses)?;
        for (i, line) in self.new_expenses.iter().enumerate() {
            amount(format!("new_expenses[{i}].expense"), line.expense)?;
            amount(format!("new_expenses[{i}].financial_aid"), line.financial_aid)?;
            units(
                format!("new_expenses[{i}].dwelling_count_affected"),
                line.dwelling_count_affected,
            )?;
            units(
                format!("new_expenses[{i}].non_residential_count_affected"),
                line.non_residential_count_affected,
            )?;
        }

        lines("aid_variations", &self.aid_variations)?;
        for (i, line) in self.aid_variations.iter().enumerate() {
            amount(
                format!("aid_variations[{i}].amount_current_year"),
                line.amount_current_year,
            )?;
            amount(
                format!("aid_variations[{i}].amount_prior_year"),
                line.amount_prior_year,
            )?;
            units(
                format!("aid_variations[{i}].dwelling_count_affected"),
                line.dwelling_count_affected,
            )?;
            units(
                format!("aid_variations[{i}].non_residential_count_affected"),
                line.non_residential_count_affected,
            )?;
        }

        if let Some(snow) = &self.snow_removal {
            amount("snow_removal.fees_current_year", snow.fees_current_year)?;
            amount("snow_removal.fees_prior_year", snow.fees_prior_year)?;
        }

        Ok(())
    }
}
