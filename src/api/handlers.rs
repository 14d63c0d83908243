//! HTTP request handlers for the payroll REST API.
//!
//! This module contains the handler functions for the JSON endpoints and
//! assembles the full application router (REST plus dashboard pages).

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::Employee;
use crate::store::allocate_id;

use super::pages;
use super::request::EmployeeInput;
use super::response::{ApiError, ApiErrorResponse, MessageResponse};
use super::state::AppState;

/// Creates the application router with all REST and page routes.
///
/// CORS is permissive and every request is traced, matching the source
/// system's globally mounted middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", put(update_employee).delete(delete_employee))
        .merge(pages::page_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /employees.
async fn list_employees(State(state): State<AppState>) -> Response {
    match state.store().load() {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to list employees");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /employees.
///
/// Allocates the next id, appends the record, and writes the store back.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee create request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let mut employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Store load failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let employee = Employee {
        id: allocate_id(&employees),
        name: input.name,
        department: input.department,
        basic_salary: input.basic_salary,
    };
    employees.push(employee.clone());

    if let Err(err) = state.store().save(&employees) {
        warn!(correlation_id = %correlation_id, error = %err, "Store save failed");
        return ApiErrorResponse::from(err).into_response();
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        department = %employee.department,
        "Employee created"
    );
    (StatusCode::CREATED, Json(employee)).into_response()
}

/// Handler for PUT /employees/:id.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Processing employee update request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let mut employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let Some(index) = employees.iter().position(|e| e.id == id) else {
        warn!(correlation_id = %correlation_id, employee_id = id, "Employee not found");
        return ApiErrorResponse::from(PayrollError::EmployeeNotFound { id }).into_response();
    };

    employees[index].name = input.name;
    employees[index].department = input.department;
    employees[index].basic_salary = input.basic_salary;

    if let Err(err) = state.store().save(&employees) {
        return ApiErrorResponse::from(err).into_response();
    }

    info!(correlation_id = %correlation_id, employee_id = id, "Employee updated");
    Json(MessageResponse::new("Employee updated")).into_response()
}

/// Handler for DELETE /employees/:id.
///
/// Deleting an id that does not exist is not an error; the store simply
/// stays unchanged (preserved source behavior).
async fn delete_employee(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let before = employees.len();
    let remaining: Vec<Employee> = employees.into_iter().filter(|e| e.id != id).collect();

    if let Err(err) = state.store().save(&remaining) {
        return ApiErrorResponse::from(err).into_response();
    }

    info!(
        employee_id = id,
        removed = before - remaining.len(),
        "Employee delete processed"
    );
    Json(MessageResponse::new("Employee deleted")).into_response()
}

/// Maps a JSON extraction failure to the appropriate error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
