pub mod error;
pub mod types;
pub mod validation;

pub use error::InputError;
pub use types::{
    AidVariationLine, BaseAdjustment, CalculationInput, CalculationOutput, InsuranceRecord,
    LineAdjustment, NewExpenseLine, RepairLine, RevenueBreakdown, Section, SectionTotal,
    SnowRemovalAdjustment, SnowRemovalRecord, SummaryRow, TaxAdjustment, TaxRecord,
    UnitRevenueEntry, UnitSubtotal,
};
pub use validation::{MAX_AMOUNT, MAX_LINES, MAX_UNITS};
