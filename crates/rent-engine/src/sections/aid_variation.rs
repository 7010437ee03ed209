// Section 4: variations of financial aid received by the landlord
use crate::proration::ProrationContext;
use crate::rates::MONTHS_PER_YEAR;
use crate::rounding::round2;
use shared_types::{AidVariationLine, LineAdjustment};

/// Monthly contribution of an aid variation.
///
/// The sign is inverted: losing aid raises the rent, gaining aid lowers it.
/// A zero or negative variation is meaningful, so only the affected flag gates.
pub fn adjust_aid_variation(line: &AidVariationLine, ctx: &ProrationContext) -> LineAdjustment {
    if !line.is_concerned_dwelling_affected {
        return LineAdjustment {
            id: line.id.clone(),
            ..Default::default()
        };
    }

    let variation = line.variation();
    let weight = ctx.weight(line.dwelling_count_affected, line.non_residential_count_affected);
    let raw = -(variation / MONTHS_PER_YEAR) * weight;

    LineAdjustment {
        id: line.id.clone(),
        weight,
        annual_eligible: variation,
        raw,
        amount: round2(raw),
    }
}
