//! Quote and informational endpoints.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::quoting::BrandGroups;

/// `GET /quote`
pub async fn get_quote(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let start = Instant::now();

    let response = match state.engine.quote_params(&params) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(violation) => {
            tracing::debug!(error = %violation, "Quote rejected");
            ApiError(violation).into_response()
        }
    };

    metrics::record_request("quote", response.status().as_u16(), start);
    response
}

/// `GET /calc_update_date`
pub async fn get_update_date(State(state): State<AppState>) -> impl IntoResponse {
    state.update_date.format("%Y-%m-%d").to_string()
}

#[derive(Serialize)]
struct BrandList<'a> {
    brands: &'a BrandGroups,
}

/// `GET /brands`
pub async fn get_brands(State(state): State<AppState>) -> Response {
    Json(BrandList {
        brands: &state.engine.rules().brands,
    })
    .into_response()
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
