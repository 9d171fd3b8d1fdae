//! Shared test fixtures
//!
//! States are built over the in-memory engine with the same schema and
//! seeded Admin the production path uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use tower::ServiceExt;

use dayflow_server::auth::{JwtConfig, JwtService};
use dayflow_server::core::{Config, ServerState};
use dayflow_server::db::define_schema;
use dayflow_server::db::models::{
    AccountStatus, EmployeeProfile, NewEmployee, Role, SalaryStructure,
};
use dayflow_server::db::repository::EmployeeProfileRepository;

pub const TEST_SECRET: &str = "integration-test-secret-key-0123456789";
pub const ADMIN_EMAIL: &str = "admin@dayflow.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// State over an in-memory database with schema defined and Admin seeded
pub async fn test_state() -> ServerState {
    let db: Surreal<Db> = Surreal::new::<Mem>(()).await.expect("open mem db");
    db.use_ns("dayflow").use_db("hrms").await.expect("use ns");
    define_schema(&db).await.expect("define schema");

    let jwt = JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_minutes: 60,
        issuer: "dayflow-server".to_string(),
        audience: "dayflow-clients".to_string(),
    };

    let mut config = Config::with_overrides("/tmp/dayflow-test", 0);
    config.jwt = jwt.clone();
    config.admin_email = ADMIN_EMAIL.to_string();
    config.admin_password = ADMIN_PASSWORD.to_string();

    let state = ServerState::new(config, db, Arc::new(JwtService::with_config(jwt)));
    state.seed_admin().await.expect("seed admin");
    state
}

pub fn new_employee(email: &str, employee_id: &str) -> NewEmployee {
    NewEmployee {
        email: email.to_string(),
        password: "secret123".to_string(),
        role: Role::Employee,
        status: AccountStatus::Active,
        employee_id: employee_id.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        job_title: "Engineer".to_string(),
        department: "R&D".to_string(),
        salary_structure: SalaryStructure {
            basic: 3000.0,
            hra: 500.0,
            allowances: 200.0,
            deductions: 150.0,
        },
    }
}

/// Create an active employee (user + profile) directly through the repository
pub async fn create_employee(
    state: &ServerState,
    email: &str,
    employee_id: &str,
) -> EmployeeProfile {
    let repo = EmployeeProfileRepository::new(state.get_db());
    repo.create_with_user(new_employee(email, employee_id))
        .await
        .expect("create employee")
}

/// Issue a token the way the login handler does
pub fn token_for(state: &ServerState, user_id: &str, email: &str, role: &str) -> String {
    state
        .get_jwt_service()
        .generate_token(user_id, email, role)
        .expect("generate token")
}

/// Fire one request at the router and decode the JSON body
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse body")
    };

    (status, json)
}

/// Log in through the HTTP surface and return the bearer token
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token in response").to_string()
}
