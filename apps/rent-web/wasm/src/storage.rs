//! localStorage persistence of the calculator form state
//!
//! The whole form is stored under one fixed key and replaced on every save.
//! Debouncing saves is left to the caller.

use wasm_bindgen::prelude::*;

use crate::form_state::FormState;

/// Key under which the form state is stored
pub const FORM_STATE_KEY: &str = "rent_calculator_state";

/// Form state store backed by `window.localStorage`
#[wasm_bindgen]
pub struct FormStore {
    storage: web_sys::Storage,
}

#[wasm_bindgen]
impl FormStore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<FormStore, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let storage = window.local_storage()?.ok_or("No localStorage")?;
        Ok(FormStore { storage })
    }

    /// Replace the stored form with `state`
    pub fn save(&self, state: &FormState) -> Result<(), JsValue> {
        let json = state.to_json()?;
        self.storage.set_item(FORM_STATE_KEY, &json)
    }

    /// Restore the stored form. Missing, unreadable or invalid entries yield
    /// `None` so the wizard starts from a blank form.
    pub fn load(&self) -> Result<Option<FormState>, JsValue> {
        let Some(json) = self.storage.get_item(FORM_STATE_KEY)? else {
            return Ok(None);
        };

        match FormState::from_json(&json) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                web_sys::console::warn_1(&format!("Discarding stored form: {}", err).into());
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> Result<(), JsValue> {
        self.storage.remove_item(FORM_STATE_KEY)
    }
}
