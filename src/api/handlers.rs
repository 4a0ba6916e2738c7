//! HTTP request handlers for the shift book API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{EmployeeHours, MonthTotals, Shift, ShiftEntry, YearMonth};

use super::request::{ShiftRequest, ShiftsQuery, TotalsQuery};
use super::response::{ApiError, ApiErrorResponse, ShiftView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts", get(list_shifts_handler).post(create_shift_handler))
        .route(
            "/shifts/:id",
            get(get_shift_handler)
                .put(edit_shift_handler)
                .delete(delete_shift_handler),
        )
        .route("/totals", get(totals_handler))
        .route("/employees/hours", get(employee_hours_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn failure(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a body rejection to the API error shape.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
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
    ApiErrorResponse::bad_request(error).into_response()
}

fn path_rejection(correlation_id: Uuid, rejection: PathRejection) -> Response {
    warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path");
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
        .into_response()
}

fn query_rejection(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query");
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
        .into_response()
}

/// Renders a stored shift with its employee's wage level.
fn view_of(state: &AppState, shift: &Shift) -> Result<ShiftView, EngineError> {
    let roster = state.roster.read();
    let employee = roster.employee(&shift.employee_name)?;
    Ok(ShiftView::new(shift, employee))
}

/// Handler for `POST /shifts`.
///
/// Records a shift, creating its employee on first sight.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create shift request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    let wage_level = request.wage_level;

    let saved = ShiftEntry::try_from(request)
        .and_then(|entry| state.roster.write().save_shift(entry, wage_level))
        .and_then(|shift| view_of(&state, &shift));

    match saved {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                shift_id = view.id,
                employee = %view.name,
                "Shift created"
            );
            json_response(StatusCode::CREATED, view)
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for `GET /shifts`, optionally limited to one date.
async fn list_shifts_handler(
    State(state): State<AppState>,
    query: Result<Query<ShiftsQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };

    let views: Result<Vec<ShiftView>, EngineError> = {
        let roster = state.roster.read();
        let shifts: Vec<&Shift> = match query.date {
            Some(date) => roster.shifts_on(date).collect(),
            None => roster.shifts().collect(),
        };
        shifts
            .into_iter()
            .map(|shift| {
                roster
                    .employee(&shift.employee_name)
                    .map(|employee| ShiftView::new(shift, employee))
            })
            .collect()
    };
    let views = match views {
        Ok(views) => views,
        Err(err) => return failure(correlation_id, err),
    };

    info!(
        correlation_id = %correlation_id,
        shifts_count = views.len(),
        "Listed shifts"
    );
    json_response(StatusCode::OK, views)
}

/// Handler for `GET /shifts/:id`.
async fn get_shift_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };

    let found = {
        let roster = state.roster.read();
        roster.shift(id).and_then(|shift| {
            roster
                .employee(&shift.employee_name)
                .map(|employee| ShiftView::new(shift, employee))
        })
    };

    match found {
        Ok(view) => json_response(StatusCode::OK, view),
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for `PUT /shifts/:id`.
///
/// Replaces every field except the id.
async fn edit_shift_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing edit shift request");

    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    let wage_level = request.wage_level;

    let edited = ShiftEntry::try_from(request)
        .and_then(|entry| state.roster.write().edit_shift(id, entry, wage_level))
        .and_then(|shift| view_of(&state, &shift));

    match edited {
        Ok(view) => {
            info!(correlation_id = %correlation_id, shift_id = id, "Shift edited");
            json_response(StatusCode::OK, view)
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for `DELETE /shifts/:id`.
async fn delete_shift_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };

    let deleted = state.roster.write().delete_shift(id);
    match deleted {
        Ok(_) => {
            info!(correlation_id = %correlation_id, shift_id = id, "Shift deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for `GET /totals`.
///
/// Prices every shift in the month, optionally for one employee.
async fn totals_handler(
    State(state): State<AppState>,
    query: Result<Query<TotalsQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing totals request");

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejection(correlation_id, rejection),
    };

    let month = match query.month.as_deref() {
        Some(key) => match key.parse::<YearMonth>() {
            Ok(month) => month,
            Err(err) => return failure(correlation_id, err),
        },
        None => YearMonth::current(),
    };

    let start_time = Instant::now();
    let totals: Result<MonthTotals, EngineError> = {
        let roster = state.roster.read();
        state
            .engine
            .month_totals(roster.assignments(), month, query.employee.as_deref())
    };

    match totals {
        Ok(totals) => {
            info!(
                correlation_id = %correlation_id,
                month = %totals.month,
                shifts_count = totals.shift_count,
                total_salary = %totals.total_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Totals calculated"
            );
            json_response(StatusCode::OK, totals)
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for `GET /employees/hours`.
async fn employee_hours_handler(State(state): State<AppState>) -> Response {
    let hours: Vec<EmployeeHours> = state.roster.read().hours_by_employee();
    json_response(StatusCode::OK, hours)
}
