//! Comprehensive integration tests for the payroll dashboard.
//!
//! This test suite covers the full HTTP surface:
//! - REST CRUD over the flat-file store
//! - Lenient salary coercion at the API boundary
//! - Dashboard rendering with stats and flash messages
//! - Search filtering with global stats
//! - Add/edit form validation and redirects
//! - Payslip rendering and unknown-id redirects

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::models::Employee;
use payroll_engine::store::FileStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn temp_state(name: &str) -> AppState {
    let path = std::env::temp_dir().join(format!(
        "payroll-engine-integration-{}-{}.json",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);
    AppState::new(FileStore::new(path))
}

fn seeded_state(name: &str, salaries: &[u64]) -> AppState {
    let state = temp_state(name);
    let employees: Vec<Employee> = salaries
        .iter()
        .enumerate()
        .map(|(i, &basic)| Employee {
            id: i as u64 + 1,
            name: format!("Employee {}", i + 1),
            department: if i % 2 == 0 { "Engineering" } else { "Sales" }.to_string(),
            basic_salary: Decimal::from(basic),
        })
        .collect();
    state.store().save(&employees).unwrap();
    state
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_page(router: Router, uri: &str) -> (StatusCode, String) {
    let (status, body) = send(
        router,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    (status, String::from_utf8(body).unwrap())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(
        router,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn send_json(router: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, body) = send(
        router,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_form(router: Router, uri: &str, body: &str) -> axum::response::Response {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn cleanup(state: &AppState) {
    let _ = std::fs::remove_file(state.store().path());
}

// =============================================================================
// REST API
// =============================================================================

#[tokio::test]
async fn test_list_is_empty_before_any_data_exists() {
    let state = temp_state("rest-empty");
    let (status, json) = get_json(create_router(state.clone()), "/employees").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_full_crud_flow() {
    let state = temp_state("rest-crud");

    // Create two employees; ids allocate sequentially.
    let (status, created) = send_json(
        create_router(state.clone()),
        "POST",
        "/employees",
        json!({"name": "Asha Verma", "department": "Engineering", "basicSalary": 50000}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, created) = send_json(
        create_router(state.clone()),
        "POST",
        "/employees",
        json!({"name": "Bilal Khan", "department": "Sales", "basicSalary": 30000}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 2);

    // Update the first.
    let (status, updated) = send_json(
        create_router(state.clone()),
        "PUT",
        "/employees/1",
        json!({"name": "Asha Verma", "department": "Platform", "basicSalary": 55000}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Employee updated");

    // Delete the second.
    let (status, deleted) = send(
        create_router(state.clone()),
        Request::builder()
            .method("DELETE")
            .uri("/employees/2")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let deleted: Value = serde_json::from_slice(&deleted).unwrap();
    assert_eq!(deleted["message"], "Employee deleted");

    // One record remains, with the update applied.
    let (_, listed) = get_json(create_router(state.clone()), "/employees").await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[0]["department"], "Platform");

    cleanup(&state);
}

#[tokio::test]
async fn test_create_coerces_string_salary() {
    let state = temp_state("rest-coerce");

    let (status, _) = send_json(
        create_router(state.clone()),
        "POST",
        "/employees",
        json!({"name": "C", "department": "Ops", "basicSalary": "42000.50"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = state.store().load().unwrap();
    assert_eq!(stored[0].basic_salary, Decimal::new(4_200_050, 2));
    cleanup(&state);
}

#[tokio::test]
async fn test_create_coerces_garbage_salary_to_zero() {
    let state = temp_state("rest-garbage");

    let (status, created) = send_json(
        create_router(state.clone()),
        "POST",
        "/employees",
        json!({"name": "D", "department": "Ops", "basicSalary": "abc"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["basicSalary"], "0");
    cleanup(&state);
}

#[tokio::test]
async fn test_create_with_missing_name_returns_400() {
    let state = temp_state("rest-missing-name");

    let (status, error) = send_json(
        create_router(state.clone()),
        "POST",
        "/employees",
        json!({"department": "Ops", "basicSalary": 1000}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let state = seeded_state("rest-404", &[10_000]);

    let (status, error) = send_json(
        create_router(state.clone()),
        "PUT",
        "/employees/99",
        json!({"name": "X", "department": "Y", "basicSalary": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "EMPLOYEE_NOT_FOUND");
    cleanup(&state);
}

// =============================================================================
// Dashboard Pages
// =============================================================================

#[tokio::test]
async fn test_dashboard_shows_worked_example_stats() {
    let state = seeded_state("page-stats", &[10_000, 20_000, 30_000]);

    let (status, html) = get_page(create_router(state.clone()), "/").await;

    assert_eq!(status, StatusCode::OK);
    // (10000 + 20000 + 30000) * 1.38 = 82800
    assert!(html.contains("₹82,800"));
    assert!(html.contains("₹30,000"));
    assert!(html.contains("Employee 1"));
    assert!(html.contains("Employee 3"));
    cleanup(&state);
}

#[tokio::test]
async fn test_dashboard_shows_flash_message_from_query() {
    let state = seeded_state("page-flash", &[10_000]);

    let (_, html) = get_page(
        create_router(state.clone()),
        "/?success=Employee+added+successfully",
    )
    .await;

    assert!(html.contains("Employee added successfully"));
    cleanup(&state);
}

#[tokio::test]
async fn test_search_filters_rows_but_keeps_global_stats() {
    // Employees alternate Engineering/Sales; only Engineering rows match,
    // but the stats still cover all three employees.
    let state = seeded_state("page-search", &[10_000, 20_000, 30_000]);

    let (status, html) = get_page(create_router(state.clone()), "/search?q=sales").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Employee 2"));
    assert!(!html.contains("Employee 1<"));
    assert!(!html.contains("Employee 3"));
    assert!(html.contains("₹82,800"));
    cleanup(&state);
}

#[tokio::test]
async fn test_search_without_query_shows_everyone() {
    let state = seeded_state("page-search-all", &[10_000, 20_000]);

    let (_, html) = get_page(create_router(state.clone()), "/search").await;

    assert!(html.contains("Employee 1"));
    assert!(html.contains("Employee 2"));
    cleanup(&state);
}

#[tokio::test]
async fn test_add_form_round_trip_persists_and_redirects() {
    let state = temp_state("page-add");

    let response = post_form(
        create_router(state.clone()),
        "/add",
        "name=Asha+Verma&department=Engineering&basicSalary=50000",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/?success=Employee+added+successfully"
    );

    let stored = state.store().load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Asha Verma");
    assert_eq!(stored[0].basic_salary, Decimal::from(50_000));
    cleanup(&state);
}

#[tokio::test]
async fn test_add_form_with_invalid_salary_redisplays_with_error() {
    let state = temp_state("page-add-invalid");

    let response = post_form(
        create_router(state.clone()),
        "/add",
        "name=Asha&department=Engineering&basicSalary=abc",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("All fields are required"));
    assert!(html.contains("value=\"abc\""));
    assert!(state.store().load().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_form_rejects_negative_salary() {
    let state = temp_state("page-add-negative");

    let response = post_form(
        create_router(state.clone()),
        "/add",
        "name=Asha&department=Engineering&basicSalary=-100",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.store().load().unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_form_prefills_record() {
    let state = seeded_state("page-edit-form", &[42_000]);

    let (status, html) = get_page(create_router(state.clone()), "/edit/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("value=\"Employee 1\""));
    assert!(html.contains("value=\"42000\""));
    cleanup(&state);
}

#[tokio::test]
async fn test_edit_form_for_unknown_id_redirects_home() {
    let state = seeded_state("page-edit-missing", &[42_000]);

    let response = create_router(state.clone())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/edit/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/");
    cleanup(&state);
}

#[tokio::test]
async fn test_edit_submit_updates_record() {
    let state = seeded_state("page-edit-submit", &[42_000]);

    let response = post_form(
        create_router(state.clone()),
        "/edit/1",
        "name=Renamed&department=Platform&basicSalary=60000",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/?success=Employee+updated+successfully"
    );

    let stored = state.store().load().unwrap();
    assert_eq!(stored[0].name, "Renamed");
    assert_eq!(stored[0].basic_salary, Decimal::from(60_000));
    cleanup(&state);
}

#[tokio::test]
async fn test_delete_page_removes_record_and_redirects() {
    let state = seeded_state("page-delete", &[10_000, 20_000]);

    let response = create_router(state.clone())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/delete/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/?success=Employee+deleted+successfully"
    );
    assert_eq!(state.store().load().unwrap().len(), 1);
    cleanup(&state);
}

#[tokio::test]
async fn test_payslip_shows_all_formatted_components() {
    let state = seeded_state("page-slip", &[50_000]);

    let (status, html) = get_page(create_router(state.clone()), "/slip/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("₹50,000"));
    assert!(html.contains("₹20,000"));
    assert!(html.contains("₹5,000"));
    assert!(html.contains("₹6,000"));
    assert!(html.contains("₹69,000"));
    cleanup(&state);
}

#[tokio::test]
async fn test_payslip_for_unknown_id_redirects_home() {
    let state = seeded_state("page-slip-missing", &[50_000]);

    let response = create_router(state.clone())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/slip/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/");
    cleanup(&state);
}
