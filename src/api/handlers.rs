//! HTTP request handlers for the cabin pricing API.
//!
//! This module contains the handler functions for all API endpoints. Both
//! endpoints are side-effect free and safe to retry.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{check_availability, compute_stay_price};

use super::request::{AvailabilityQuery, PriceRequest};
use super::response::{ApiError, ApiErrorResponse, PriceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/price", post(price_handler))
        .route("/availability", get(availability_handler))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /price.
///
/// Accepts a category and a `[start_date, end_date)` range and returns the
/// total price of the stay.
async fn price_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    let catalog = state.config().catalog();
    let priced = request.to_stay(catalog.max_stay_nights).and_then(|stay| {
        let result = compute_stay_price(state.config().rate_table(), &stay)?;
        Ok(PriceResponse::new(result, stay.end_date()?, &catalog.currency))
    });

    match priced {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                category = %response.category,
                nights = response.nights,
                total_price = response.total_price,
                duration_us = start_time.elapsed().as_micros(),
                "Price calculated"
            );
            json_ok(response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Price calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /availability.
///
/// Checks a candidate `[start_date, end_date)` range against the cabin's
/// occupied dates and lists every conflicting night.
async fn availability_handler(
    State(state): State<AppState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query string error"
            );
            return ApiErrorResponse::bad_request(ApiError::invalid_query(body_text))
                .into_response();
        }
    };

    let start_time = Instant::now();
    let max_nights = state.config().catalog().max_stay_nights;
    let checked = query.to_range(max_nights).and_then(|(start_date, nights)| {
        let occupied = state.occupancy().occupied_dates(&query.cabin_id)?;
        check_availability(
            &query.cabin_id,
            start_date,
            nights,
            &occupied,
            query.exclude_reservation_id.as_deref(),
        )
    });

    match checked {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                cabin_id = %result.cabin_id,
                available = result.available,
                conflicts = result.conflicting_dates.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Availability checked"
            );
            json_ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                cabin_id = %query.cabin_id,
                error = %err,
                "Availability check rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
