//! HTTP request handlers for the freight engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_distance, calculate_margin, calculate_rate_with_audit, find_matching_carriers,
    get_recommended_rate,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{AuditTrace, CarrierMatch, QuoteResult};

use super::request::{DistanceRequest, MarginRequest, MatchRequest, QuoteRequest};
use super::response::{ApiError, ApiErrorResponse, DistanceResponse, MatchResponse};
use super::state::AppState;

/// Matched carriers whose insurance lapses within this many days are logged.
const INSURANCE_EXPIRY_WARNING_DAYS: u32 = 30;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/margin", post(margin_handler))
        .route("/distance", post(distance_handler))
        .route("/match", post(match_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Prices a shipment and returns the quote with its audit trace.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_quote(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                equipment_class = %request.equipment_class,
                carrier_rate = %result.quote.total_carrier_rate,
                customer_rate = %result.quote.suggested_customer_rate,
                duration_us = start_time.elapsed().as_micros(),
                "Quote completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Quote failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /margin endpoint.
async fn margin_handler(payload: Result<Json<MarginRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing margin request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match calculate_margin(request.customer_rate, request.carrier_rate) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                margin = %breakdown.margin,
                margin_percentage = %breakdown.margin_percentage,
                "Margin calculated"
            );
            json_response(StatusCode::OK, breakdown)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Margin calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /distance endpoint.
async fn distance_handler(payload: Result<Json<DistanceRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing distance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let DistanceRequest {
        origin,
        destination,
    } = request;
    match calculate_distance(origin.lat, origin.lng, destination.lat, destination.lng) {
        Ok(miles) => {
            info!(correlation_id = %correlation_id, miles, "Distance calculated");
            json_response(StatusCode::OK, DistanceResponse { miles })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Distance calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /match endpoint.
///
/// Ranks the supplied carriers for the shipment. When the request carries a
/// calculated rate, the response also includes the rate adjusted by the top
/// match's score.
async fn match_handler(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing match request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let matches = find_matching_carriers(
        &request.shipment,
        &request.carriers,
        request.limit,
        config.scoring(),
    );
    let eligible_count = request.carriers.iter().filter(|c| c.is_eligible()).count();
    let recommended_rate = request
        .calculated_rate
        .map(|rate| get_recommended_rate(&matches, rate, config.recommendation()));

    let expiring = carriers_with_expiring_insurance(&matches, Utc::now().date_naive());
    if !expiring.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            carriers = ?expiring,
            within_days = INSURANCE_EXPIRY_WARNING_DAYS,
            "Matched carriers with insurance expiring soon"
        );
    }

    info!(
        correlation_id = %correlation_id,
        candidates = request.carriers.len(),
        eligible_count,
        returned = matches.len(),
        top_score = matches.first().map(|m| m.score),
        "Match completed"
    );

    json_response(
        StatusCode::OK,
        MatchResponse {
            matches,
            eligible_count,
            recommended_rate,
        },
    )
}

/// Returns the ids of matched carriers whose insurance lapses within
/// [`INSURANCE_EXPIRY_WARNING_DAYS`] of `as_of`.
fn carriers_with_expiring_insurance(matches: &[CarrierMatch], as_of: NaiveDate) -> Vec<&str> {
    matches
        .iter()
        .filter(|m| {
            m.carrier
                .insurance_expiring_soon(as_of, INSURANCE_EXPIRY_WARNING_DAYS)
        })
        .map(CarrierMatch::carrier_id)
        .collect()
}

/// Prices a quote request and wraps it in a [`QuoteResult`].
fn perform_quote(request: &QuoteRequest, config: &ConfigLoader) -> EngineResult<QuoteResult> {
    let start_time = Instant::now();

    let calculation = calculate_rate_with_audit(
        request.distance_miles,
        request.weight_pounds,
        request.equipment_class,
        request.margin_override,
        config.pricing(),
        1,
    )?;

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(QuoteResult {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        shipment_id: request.shipment_id.clone(),
        quote: calculation.quote,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings: calculation.warnings,
            duration_us,
        },
    })
}

/// Maps a JSON extraction failure onto a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
