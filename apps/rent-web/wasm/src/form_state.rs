//! Calculator form state owned by the browser front-end
//!
//! The wizard keeps one `FormState` alive, edits it field by field and
//! re-runs the engine after every change. Line items (repairs, new expenses,
//! aid variations) get their ids here; the engine only reads them.

use rent_engine::RentEngine;
use serde::{Deserialize, Serialize};
use shared_types::{
    AidVariationLine, CalculationInput, CalculationOutput, NewExpenseLine, RepairLine,
};
use thiserror::Error;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("No {kind} line with id '{id}'")]
    LineNotFound { kind: &'static str, id: String },

    #[error("Invalid form state: {0}")]
    Invalid(String),
}

impl From<FormError> for JsValue {
    fn from(err: FormError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

trait LineItem {
    const KIND: &'static str;
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! line_item {
    ($ty:ty, $kind:literal) => {
        impl LineItem for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

line_item!(RepairLine, "repair");
line_item!(NewExpenseLine, "new expense");
line_item!(AidVariationLine, "aid variation");

fn add_line<T: LineItem>(lines: &mut Vec<T>, mut line: T) -> String {
    let id = Uuid::new_v4().to_string();
    line.set_id(id.clone());
    lines.push(line);
    id
}

fn update_line<T: LineItem>(lines: &mut [T], line: T) -> Result<(), FormError> {
    let slot = lines
        .iter_mut()
        .find(|existing| existing.id() == line.id())
        .ok_or_else(|| FormError::LineNotFound {
            kind: T::KIND,
            id: line.id().to_string(),
        })?;
    *slot = line;
    Ok(())
}

fn remove_line<T: LineItem>(lines: &mut Vec<T>, id: &str) -> Result<T, FormError> {
    let index = lines
        .iter()
        .position(|line| line.id() == id)
        .ok_or_else(|| FormError::LineNotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;
    Ok(lines.remove(index))
}

fn parse<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T, FormError> {
    serde_json::from_str(json).map_err(|e| FormError::Invalid(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, FormError> {
    serde_json::to_string(value).map_err(|e| FormError::Invalid(e.to_string()))
}

/// Calculator form state, persisted as a whole and recalculated on change
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: CalculationInput,
    engine: RentEngine,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_input(input: CalculationInput) -> Self {
        Self {
            input,
            engine: RentEngine::new(),
        }
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn set_input(&mut self, input: CalculationInput) {
        self.input = input;
    }

    pub fn add_repair(&mut self, line: RepairLine) -> String {
        add_line(&mut self.input.repairs, line)
    }

    pub fn update_repair(&mut self, line: RepairLine) -> Result<(), FormError> {
        update_line(&mut self.input.repairs, line)
    }

    pub fn remove_repair(&mut self, id: &str) -> Result<RepairLine, FormError> {
        remove_line(&mut self.input.repairs, id)
    }

    pub fn add_new_expense(&mut self, line: NewExpenseLine) -> String {
        add_line(&mut self.input.new_expenses, line)
    }

    pub fn update_new_expense(&mut self, line: NewExpenseLine) -> Result<(), FormError> {
        update_line(&mut self.input.new_expenses, line)
    }

    pub fn remove_new_expense(&mut self, id: &str) -> Result<NewExpenseLine, FormError> {
        remove_line(&mut self.input.new_expenses, id)
    }

    pub fn add_aid_variation(&mut self, line: AidVariationLine) -> String {
        add_line(&mut self.input.aid_variations, line)
    }

    pub fn update_aid_variation(&mut self, line: AidVariationLine) -> Result<(), FormError> {
        update_line(&mut self.input.aid_variations, line)
    }

    pub fn remove_aid_variation(&mut self, id: &str) -> Result<AidVariationLine, FormError> {
        remove_line(&mut self.input.aid_variations, id)
    }

    pub fn calculate(&self) -> CalculationOutput {
        self.engine.calculate(&self.input)
    }

    /// Serialize the whole input, the unit of persistence
    pub fn to_json(&self) -> Result<String, FormError> {
        to_json(&self.input)
    }

    /// Restore a persisted input, rejecting it unless it validates
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let input =
            CalculationInput::from_json(json).map_err(|e| FormError::Invalid(e.to_string()))?;
        Ok(Self::from_input(input))
    }
}

// WASM bindings
#[wasm_bindgen]
impl FormState {
    #[wasm_bindgen(constructor)]
    pub fn new_wasm() -> Self {
        console_error_panic_hook::set_once();
        Self::new()
    }

    /// Replace the whole input after a field edit
    #[wasm_bindgen(js_name = setInputJson)]
    pub fn set_input_json(&mut self, json: &str) -> Result<(), JsValue> {
        let input = CalculationInput::from_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.set_input(input);
        Ok(())
    }

    #[wasm_bindgen(js_name = inputJson)]
    pub fn input_json(&self) -> Result<String, JsValue> {
        Ok(self.to_json()?)
    }

    #[wasm_bindgen(js_name = addRepair)]
    pub fn add_repair_json(&mut self, json: &str) -> Result<String, JsValue> {
        Ok(self.add_repair(parse(json)?))
    }

    #[wasm_bindgen(js_name = updateRepair)]
    pub fn update_repair_json(&mut self, json: &str) -> Result<(), JsValue> {
        Ok(self.update_repair(parse(json)?)?)
    }

    #[wasm_bindgen(js_name = removeRepair)]
    pub fn remove_repair_js(&mut self, id: &str) -> Result<(), JsValue> {
        self.remove_repair(id)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = addNewExpense)]
    pub fn add_new_expense_json(&mut self, json: &str) -> Result<String, JsValue> {
        Ok(self.add_new_expense(parse(json)?))
    }

    #[wasm_bindgen(js_name = updateNewExpense)]
    pub fn update_new_expense_json(&mut self, json: &str) -> Result<(), JsValue> {
        Ok(self.update_new_expense(parse(json)?)?)
    }

    #[wasm_bindgen(js_name = removeNewExpense)]
    pub fn remove_new_expense_js(&mut self, id: &str) -> Result<(), JsValue> {
        self.remove_new_expense(id)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = addAidVariation)]
    pub fn add_aid_variation_json(&mut self, json: &str) -> Result<String, JsValue> {
        Ok(self.add_aid_variation(parse(json)?))
    }

    #[wasm_bindgen(js_name = updateAidVariation)]
    pub fn update_aid_variation_json(&mut self, json: &str) -> Result<(), JsValue> {
        Ok(self.update_aid_variation(parse(json)?)?)
    }

    #[wasm_bindgen(js_name = removeAidVariation)]
    pub fn remove_aid_variation_js(&mut self, id: &str) -> Result<(), JsValue> {
        self.remove_aid_variation(id)?;
        Ok(())
    }

    /// Run the engine and return the output as JSON
    #[wasm_bindgen(js_name = calculate)]
    pub fn calculate_json(&self) -> Result<String, JsValue> {
        Ok(to_json(&self.calculate())?)
    }
}
