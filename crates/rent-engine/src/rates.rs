//! Statutory rates for the rent adjustment methodology
//!
//! A single rate table is in force. It is compiled in rather than loaded so
//! that identical inputs always produce identical adjustments.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Months per year, for moving between annual and monthly amounts
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Rates applied by the adjustment sections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSet {
    /// Cost-of-living rate: base adjustment and tax/insurance franchise
    pub cpi_rate: Decimal,
    /// Rate applied to the personal-services portion in seniors residences
    pub senior_services_rate: Decimal,
    /// Annual rate used to amortize capital repairs
    pub capitalization_rate: Decimal,
}

impl RateSet {
    /// The rate table currently in force
    pub const STATUTORY: RateSet = RateSet {
        cpi_rate: dec!(0.031),
        senior_services_rate: dec!(0.067),
        capitalization_rate: dec!(0.05),
    };
}

impl Default for RateSet {
    fn default() -> Self {
        Self::STATUTORY
    }
}
