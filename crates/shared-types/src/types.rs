// Money is `Decimal` at cent precision; weights and rates are unrounded ratios
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One occupancy category (rented, vacant or owner-occupied) of a building
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitRevenueEntry {
    pub count: u32,
    pub monthly_rent: Decimal,
}

/// Unit counts and monthly rents per occupancy category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueBreakdown {
    pub rented: UnitRevenueEntry,
    pub vacant: UnitRevenueEntry,
    pub owner_occupied: UnitRevenueEntry,
}

impl RevenueBreakdown {
    pub fn entries(&self) -> [&UnitRevenueEntry; 3] {
        [&self.rented, &self.vacant, &self.owner_occupied]
    }
}

/// Current vs. prior period amount for a tax or insurance category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRecord {
    pub current_period: Decimal,
    pub prior_period: Decimal,
}

/// Insurance premiums share the comparison shape of a tax record
pub type InsuranceRecord = TaxRecord;

/// A major repair or improvement work carried out on the building
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairLine {
    pub id: String,
    pub description: String,
    pub expense: Decimal,
    pub financial_aid: Decimal,
    pub third_party_indemnity: Decimal,
    pub reduced_interest_loan_amount: Decimal,
    pub annual_loan_payment: Decimal,
    pub dwelling_count_affected: u32,
    pub non_residential_count_affected: u32,
    pub is_concerned_dwelling_affected: bool,
}

impl RepairLine {
    /// Expense net of financial aid and third-party indemnity
    pub fn retained_expense(&self) -> Decimal {
        self.expense - self.financial_aid - self.third_party_indemnity
    }
}

/// A new recurring expense (new service, new fee) attributable to the building
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewExpenseLine {
    pub id: String,
    pub description: String,
    pub expense: Decimal,
    pub financial_aid: Decimal,
    pub dwelling_count_affected: u32,
    pub non_residential_count_affected: u32,
    pub is_concerned_dwelling_affected: bool,
}

impl NewExpenseLine {
    pub fn retained_expense(&self) -> Decimal {
        self.expense - self.financial_aid
    }
}

/// Year-over-year change in a financial aid received by the landlord
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AidVariationLine {
    pub id: String,
    pub description: String,
    pub amount_current_year: Decimal,
    pub amount_prior_year: Decimal,
    pub dwelling_count_affected: u32,
    pub non_residential_count_affected: u32,
    pub is_concerned_dwelling_affected: bool,
}

impl AidVariationLine {
    pub fn variation(&self) -> Decimal {
        self.amount_current_year - self.amount_prior_year
    }
}

/// Snow removal contract fees, this year and last
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowRemovalRecord {
    pub fees_current_year: Decimal,
    pub fees_prior_year: Decimal,
}

impl SnowRemovalRecord {
    pub fn delta(&self) -> Decimal {
        self.fees_current_year - self.fees_prior_year
    }
}

/// Everything the engine needs to compute a rent adjustment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    /// Current monthly rent of the concerned dwelling
    pub current_rent: Decimal,
    pub is_seniors_residence: bool,
    /// Portion of the rent paid for personal services (seniors residences only)
    pub services_portion: Option<Decimal>,
    pub dwellings: RevenueBreakdown,
    pub non_residential: RevenueBreakdown,
    /// Annual revenue from parking, laundry and other sources
    pub other_revenue: Decimal,
    pub municipal_tax: TaxRecord,
    pub school_tax: TaxRecord,
    pub insurance: InsuranceRecord,
    pub repairs: Vec<RepairLine>,
    pub new_expenses: Vec<NewExpenseLine>,
    pub aid_variations: Vec<AidVariationLine>,
    pub snow_removal: Option<SnowRemovalRecord>,
}

/// Count and monthly rent totals over the three occupancy categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitSubtotal {
    /// Sum of the three category counts, wide enough for any `u32` inputs
    pub count: u64,
    pub rent: Decimal,
}

/// Section 1: cost-of-living adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseAdjustment {
    pub adjustment: Decimal,
    /// Rounded services block, seniors residences only (display)
    pub services_block: Option<Decimal>,
    /// Rounded rent-minus-services block, seniors residences only (display)
    pub cpi_block: Option<Decimal>,
}

/// Section 2 contribution of one tax or insurance category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxAdjustment {
    pub variation: Decimal,
    pub franchise: Decimal,
    pub raw: Decimal,
    pub amount: Decimal,
}

/// Contribution of one repair, new expense or aid variation line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineAdjustment {
    pub id: String,
    pub weight: Decimal,
    /// Annualized amount subject to proration before weighting
    pub annual_eligible: Decimal,
    pub raw: Decimal,
    pub amount: Decimal,
}

/// A multi-line section: per-line detail, unrounded sum and its rounding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionTotal {
    pub lines: Vec<LineAdjustment>,
    pub raw_total: Decimal,
    pub total: Decimal,
}

/// Section 5 contribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SnowRemovalAdjustment {
    pub delta: Decimal,
    pub raw: Decimal,
    pub amount: Decimal,
}

/// Sections listed on the printed adjustment summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    BaseAdjustment,
    TaxesAndInsurance,
    MajorRepairs,
    NewExpensesAndAid,
    SnowRemoval,
    Total,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::BaseAdjustment => "Base adjustment",
            Section::TaxesAndInsurance => "Taxes and insurance",
            Section::MajorRepairs => "Major repairs and improvements",
            Section::NewExpensesAndAid => "New expenses and financial aid",
            Section::SnowRemoval => "Snow removal",
            Section::Total => "Total adjustment",
        }
    }
}

/// One printable row of the adjustment summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub section: Section,
    pub label: String,
    pub amount: Decimal,
}

/// Full result of a rent adjustment calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    pub dwelling_subtotal: UnitSubtotal,
    pub non_residential_subtotal: UnitSubtotal,
    pub annual_rent_total: Decimal,
    pub building_revenue: Decimal,
    pub revenue_weight: Decimal,
    pub base: BaseAdjustment,
    pub municipal_tax: TaxAdjustment,
    pub school_tax: TaxAdjustment,
    pub insurance: TaxAdjustment,
    /// round2 of the three unrounded tax/insurance contributions
    pub tax_insurance_total: Decimal,
    pub repairs: SectionTotal,
    pub new_expenses: SectionTotal,
    pub aid_variations: SectionTotal,
    /// round2 of new expenses and aid variations summed unrounded
    pub new_expenses_aid_total: Decimal,
    pub snow_removal: SnowRemovalAdjustment,
    pub raw_total_adjustment: Decimal,
    pub total_adjustment: Decimal,
    pub recommended_rent: Decimal,
    pub percentage_variation: Decimal,
}

impl CalculationOutput {
    /// Section amounts in the order they are printed, ending with the total
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        [
            (Section::BaseAdjustment, self.base.adjustment),
            (Section::TaxesAndInsurance, self.tax_insurance_total),
            (Section::MajorRepairs, self.repairs.total),
            (Section::NewExpensesAndAid, self.new_expenses_aid_total),
            (Section::SnowRemoval, self.snow_removal.amount),
            (Section::Total, self.total_adjustment),
        ]
        .into_iter()
        .map(|(section, amount)| SummaryRow {
            section,
            label: section.label().to_string(),
            amount,
        })
        .collect()
    }
}
