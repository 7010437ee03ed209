//! Adjustment sections of the rent adjustment form
//!
//! 1. Base cost-of-living adjustment
//! 2. Municipal tax, school tax and insurance
//! 3. Major repairs and improvements
//! 4. New expenses and financial aid variations
//! 5. Snow removal
//!
//! Every section returns unrounded ("raw") contributions except the base
//! adjustment, which is rounded to cents before aggregation.

pub mod aid_variation;
pub mod base;
pub mod new_expenses;
pub mod repairs;
pub mod snow_removal;
pub mod tax_insurance;

pub use aid_variation::adjust_aid_variation;
pub use base::base_adjustment;
pub use new_expenses::adjust_new_expense;
pub use repairs::{adjust_repair, annual_eligible_amount};
pub use snow_removal::adjust_snow_removal;
pub use tax_insurance::adjust_tax_or_insurance;
