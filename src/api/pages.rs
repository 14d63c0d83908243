//! Server-rendered dashboard pages.
//!
//! These handlers implement the HTML side of the dashboard: the employee
//! list with search and stats, the add/edit forms with server-side
//! validation, delete, and the payslip view. Successful mutations redirect
//! back to the dashboard with a flash message in the query string.

use axum::{
    Router,
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::Local;
use serde::Deserialize;
use tracing::warn;

use crate::calculation::{compute_components, compute_stats, enrich_employee};
use crate::models::Employee;
use crate::store::allocate_id;

use super::request::EmployeeForm;
use super::state::AppState;
use super::views;

/// Query parameters of the dashboard page.
#[derive(Debug, Deserialize)]
struct DashboardParams {
    success: Option<String>,
}

/// Query parameters of the search page.
#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Creates the router for all page routes.
pub(crate) fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/search", get(search))
        .route("/add", get(add_form).post(add_submit))
        .route("/edit/:id", get(edit_form).post(edit_submit))
        .route("/delete/:id", get(delete_submit))
        .route("/slip/:id", get(payslip))
}

/// GET / - the dashboard: enriched employee table plus fleet stats.
async fn dashboard(State(state): State<AppState>, Query(params): Query<DashboardParams>) -> Response {
    let employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => {
            warn!(error = %err, "Dashboard store load failed");
            return store_error_page(&err.to_string());
        }
    };

    let enriched: Vec<_> = employees.iter().map(enrich_employee).collect();
    let stats = compute_stats(&employees);

    Html(views::dashboard_page(
        &enriched,
        &stats,
        "",
        params.success.as_deref(),
        None,
    ))
    .into_response()
}

/// GET /search - the dashboard filtered by a query over id, name, and
/// department. Stats always cover the full collection regardless of the
/// filter.
async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.unwrap_or_default().trim().to_lowercase();

    let employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => {
            warn!(error = %err, "Search store load failed");
            return store_error_page(&err.to_string());
        }
    };

    let filtered: Vec<_> = if query.is_empty() {
        employees.iter().map(enrich_employee).collect()
    } else {
        employees
            .iter()
            .filter(|e| e.matches_query(&query))
            .map(enrich_employee)
            .collect()
    };

    Html(views::dashboard_page(
        &filtered,
        &compute_stats(&employees),
        &query,
        None,
        None,
    ))
    .into_response()
}

/// GET /add - the empty add form.
async fn add_form() -> Response {
    Html(views::add_page(None, None)).into_response()
}

/// POST /add - validates and saves a new employee.
async fn add_submit(State(state): State<AppState>, Form(form): Form<EmployeeForm>) -> Response {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(_) => {
            return Html(views::add_page(Some(views::VALIDATION_MESSAGE), Some(&form)))
                .into_response();
        }
    };

    let mut employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => return store_error_page(&err.to_string()),
    };

    employees.push(Employee {
        id: allocate_id(&employees),
        name: valid.name,
        department: valid.department,
        basic_salary: valid.basic_salary,
    });

    if let Err(err) = state.store().save(&employees) {
        warn!(error = %err, "Add form store save failed");
        return Html(views::add_page(Some(&err.to_string()), Some(&form))).into_response();
    }

    Redirect::to("/?success=Employee+added+successfully").into_response()
}

/// GET /edit/:id - the edit form pre-filled from the record; unknown ids
/// bounce back to the dashboard.
async fn edit_form(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => return store_error_page(&err.to_string()),
    };

    match employees.iter().find(|e| e.id == id) {
        Some(employee) => {
            Html(views::edit_page(id, &EmployeeForm::from_employee(employee), None)).into_response()
        }
        None => Redirect::to("/").into_response(),
    }
}

/// POST /edit/:id - validates and updates an existing employee.
///
/// An id that vanished between the form render and the submit is silently
/// ignored; the redirect happens either way (preserved source behavior).
async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<EmployeeForm>,
) -> Response {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(_) => {
            return Html(views::edit_page(id, &form, Some(views::VALIDATION_MESSAGE)))
                .into_response();
        }
    };

    let mut employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => return store_error_page(&err.to_string()),
    };

    if let Some(index) = employees.iter().position(|e| e.id == id) {
        employees[index].name = valid.name;
        employees[index].department = valid.department;
        employees[index].basic_salary = valid.basic_salary;

        if let Err(err) = state.store().save(&employees) {
            warn!(error = %err, "Edit form store save failed");
            return Html(views::edit_page(id, &form, Some(&err.to_string()))).into_response();
        }
    }

    Redirect::to("/?success=Employee+updated+successfully").into_response()
}

/// GET /delete/:id - removes the record and redirects with a flash message.
async fn delete_submit(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => return store_error_page(&err.to_string()),
    };

    let remaining: Vec<Employee> = employees.into_iter().filter(|e| e.id != id).collect();

    if let Err(err) = state.store().save(&remaining) {
        return store_error_page(&err.to_string());
    }

    Redirect::to("/?success=Employee+deleted+successfully").into_response()
}

/// GET /slip/:id - the payslip for one employee; unknown ids bounce back
/// to the dashboard.
async fn payslip(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let employees = match state.store().load() {
        Ok(employees) => employees,
        Err(err) => return store_error_page(&err.to_string()),
    };

    let Some(employee) = employees.iter().find(|e| e.id == id) else {
        return Redirect::to("/").into_response();
    };

    let components = compute_components(employee.basic_salary);
    let now = Local::now();
    let month_year = now.format("%B %Y").to_string();
    let generated_on = now.format("%d %B %Y").to_string();

    Html(views::slip_page(employee, &components, &month_year, &generated_on)).into_response()
}

/// Renders an empty dashboard carrying a store failure message.
fn store_error_page(message: &str) -> Response {
    Html(views::dashboard_page(
        &[],
        &compute_stats(&[]),
        "",
        None,
        Some(message),
    ))
    .into_response()
}
