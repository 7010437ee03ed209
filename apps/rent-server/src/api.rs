//! API handlers for the rent adjustment server
//!
//! Provides REST endpoints for:
//! - Health checks
//! - The rate table in force
//! - Rent adjustment calculation

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rent_engine::RateSet;
use serde::Serialize;
use shared_types::{CalculationInput, CalculationOutput, SummaryRow};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "rent-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Rate table response
#[derive(Serialize)]
pub struct RatesResponse {
    pub success: bool,
    pub rates: RateSet,
}

/// Handler: GET /api/rates
pub async fn handle_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    Json(RatesResponse {
        success: true,
        rates: *state.engine.rates(),
    })
}

/// Calculation response
#[derive(Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub result: CalculationOutput,
    /// Printable section rows, in form order
    pub summary: Vec<SummaryRow>,
    /// Unix timestamp of the calculation
    pub calculated_at: i64,
}

/// Handler: POST /api/calculate
pub async fn handle_calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ServerError> {
    let Json(input) = payload.map_err(|e| ServerError::InvalidRequest(e.body_text()))?;
    input.validate()?;

    debug!(
        repairs = input.repairs.len(),
        new_expenses = input.new_expenses.len(),
        aid_variations = input.aid_variations.len(),
        "Calculation request"
    );

    let result = state.engine.calculate(&input);
    info!(
        "Calculated rent: {} -> {} ({}%)",
        input.current_rent, result.recommended_rent, result.percentage_variation
    );

    let summary = result.summary_rows();
    Ok(Json(CalculateResponse {
        success: true,
        result,
        summary,
        calculated_at: chrono::Utc::now().timestamp(),
    }))
}
