use rent_engine::RentEngine;
use shared_types::CalculationInput;
use wasm_bindgen::prelude::*;

// Export modules
pub mod form_state;
pub mod storage;

// Re-export commonly used items
pub use form_state::{FormError, FormState};
pub use storage::{FormStore, FORM_STATE_KEY};

/// WASM entry point for a one-shot calculation
///
/// # Arguments
/// * `input_json` - JSON string of `CalculationInput`
///
/// # Returns
/// JSON string of `CalculationOutput`
#[wasm_bindgen]
pub fn calculate_rent_wasm(input_json: &str) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let input = CalculationInput::from_json(input_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to read input: {}", e)))?;

    let output = RentEngine::new().calculate(&input);

    serde_json::to_string(&output)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Printable summary rows for the document export
#[wasm_bindgen]
pub fn summary_rows_wasm(input_json: &str) -> Result<String, JsValue> {
    let input = CalculationInput::from_json(input_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to read input: {}", e)))?;

    let rows = RentEngine::new().calculate(&input).summary_rows();

    serde_json::to_string(&rows)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize summary: {}", e)))
}

/// Get the rate table in force
#[wasm_bindgen]
pub fn get_rates_wasm() -> Result<String, JsValue> {
    let engine = RentEngine::new();
    serde_json::to_string(engine.rates())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize rates: {}", e)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use shared_types::RepairLine;

    proptest! {
        /// Property: Adding then removing a line restores the calculation
        #[test]
        fn add_remove_restores_output(expense_cents in 0u32..10_000_000, rent_cents in 1u32..500_000) {
            let rent = Decimal::new(i64::from(rent_cents), 2);
            let mut state = FormState::from_input(CalculationInput {
                current_rent: rent,
                dwellings: shared_types::RevenueBreakdown {
                    rented: shared_types::UnitRevenueEntry { count: 1, monthly_rent: rent },
                    ..Default::default()
                },
                ..Default::default()
            });
            let before = state.calculate();

            let id = state.add_repair(RepairLine {
                expense: Decimal::new(i64::from(expense_cents), 2),
                dwelling_count_affected: 1,
                is_concerned_dwelling_affected: true,
                ..Default::default()
            });
            state.remove_repair(&id).unwrap();

            prop_assert_eq!(state.calculate(), before);
        }

        /// Property: Persisted JSON restores an identical form
        #[test]
        fn json_round_trip(count in 0usize..5) {
            let mut state = FormState::new();
            for _ in 0..count {
                state.add_aid_variation(shared_types::AidVariationLine::default());
            }
            let restored = FormState::from_json(&state.to_json().unwrap()).unwrap();
            prop_assert_eq!(restored.input(), state.input());
        }
    }
}
