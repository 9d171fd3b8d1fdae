//! Payroll snapshots and leave request decisions

mod common;

use http::StatusCode;
use serde_json::json;

use dayflow_server::api::create_router;
use dayflow_server::db::models::{EmployeeProfileUpdate, SalaryStructure};
use dayflow_server::db::repository::EmployeeProfileRepository;

#[tokio::test]
async fn payroll_generation_snapshots_the_salary_structure() {
    let state = common::test_state().await;
    // basic 3000, hra 500, allowances 200, deductions 150
    let profile = common::create_employee(&state, "paid@dayflow.com", "EMP-P1").await;
    let app = create_router(state.clone());
    let admin = common::login(&app, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;

    let user_id = profile.user.to_string();
    let (status, body) = common::request(
        &app,
        "POST",
        "/api/payroll/generate",
        Some(&admin),
        Some(json!({ "userId": user_id, "month": "01", "year": 2026 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["basicSalary"], 3000.0);
    // allowances on the slip = allowances + hra
    assert_eq!(body["data"]["allowances"], 700.0);
    assert_eq!(body["data"]["deductions"], 150.0);
    assert_eq!(body["data"]["netSalary"], 3550.0);
    assert_eq!(body["data"]["status"], "Pending");

    // Same period conflicts
    let (status, body) = common::request(
        &app,
        "POST",
        "/api/payroll/generate",
        Some(&admin),
        Some(json!({ "userId": user_id, "month": "01", "year": 2026 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Payroll already generated for this period");

    // A raise after issuance never touches the issued slip
    let profiles = EmployeeProfileRepository::new(state.get_db());
    let profile_id = profile.id.as_ref().unwrap().to_string();
    profiles
        .update(
            &profile_id,
            EmployeeProfileUpdate {
                salary_structure: Some(SalaryStructure {
                    basic: 9000.0,
                    hra: 0.0,
                    allowances: 0.0,
                    deductions: 0.0,
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let token = common::token_for(&state, &user_id, "paid@dayflow.com", "Employee");
    let (status, body) =
        common::request(&app, "GET", "/api/payroll/my-slips", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["netSalary"], 3550.0);

    // The next period picks up the new structure
    let (status, body) = common::request(
        &app,
        "POST",
        "/api/payroll/generate",
        Some(&admin),
        Some(json!({ "userId": user_id, "month": "02", "year": 2026 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["netSalary"], 9000.0);
}

#[tokio::test]
async fn payroll_requires_an_employee_profile() {
    let state = common::test_state().await;
    let app = create_router(state.clone());
    let admin = common::login(&app, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;

    // The seeded Admin identity has no profile
    let users = dayflow_server::db::repository::UserRepository::new(state.get_db());
    let admin_user = users.find_by_email(common::ADMIN_EMAIL).await.unwrap().unwrap();

    let (status, body) = common::request(
        &app,
        "POST",
        "/api/payroll/generate",
        Some(&admin),
        Some(json!({
            "userId": admin_user.id.as_ref().unwrap().to_string(),
            "month": "01",
            "year": 2026
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Employee profile not found");
}

#[tokio::test]
async fn my_slips_order_newest_period_first() {
    let state = common::test_state().await;
    let profile = common::create_employee(&state, "slips@dayflow.com", "EMP-P2").await;
    let app = create_router(state.clone());
    let admin = common::login(&app, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;

    let user_id = profile.user.to_string();
    for (month, year) in [("03", 2025), ("01", 2026), ("11", 2025)] {
        let (status, _) = common::request(
            &app,
            "POST",
            "/api/payroll/generate",
            Some(&admin),
            Some(json!({ "userId": user_id, "month": month, "year": year })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let token = common::token_for(&state, &user_id, "slips@dayflow.com", "Employee");
    let (_, body) = common::request(&app, "GET", "/api/payroll/my-slips", Some(&token), None).await;

    let periods: Vec<(i64, String)> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["year"].as_i64().unwrap(), s["month"].as_str().unwrap().to_string()))
        .collect();
    assert_eq!(
        periods,
        vec![
            (2026, "01".to_string()),
            (2025, "11".to_string()),
            (2025, "03".to_string()),
        ]
    );
}

#[tokio::test]
async fn leave_lifecycle_allows_re_decision() {
    let state = common::test_state().await;
    let profile = common::create_employee(&state, "leave@dayflow.com", "EMP-L1").await;
    let app = create_router(state.clone());
    let token = common::token_for(
        &state,
        &profile.user.to_string(),
        "leave@dayflow.com",
        "Employee",
    );

    let (status, body) = common::request(
        &app,
        "POST",
        "/api/leaves",
        Some(&token),
        Some(json!({
            "type": "Paid",
            "startDate": 1_770_000_000_000i64,
            "endDate": 1_770_200_000_000i64,
            "reason": "Family trip"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "Pending");
    let leave_id = body["data"]["id"].as_str().unwrap().to_string();

    let admin = common::login(&app, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;

    // 'Pending' is not a decision
    let (status, _) = common::request(
        &app,
        "PUT",
        &format!("/api/leaves/{leave_id}"),
        Some(&admin),
        Some(json!({ "status": "Pending" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = common::request(
        &app,
        "PUT",
        &format!("/api/leaves/{leave_id}"),
        Some(&admin),
        Some(json!({ "status": "Approved", "adminComments": "Enjoy" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Approved");
    assert_eq!(body["data"]["adminComments"], "Enjoy");

    // Current contract: an already-decided request may be re-decided
    let (status, body) = common::request(
        &app,
        "PUT",
        &format!("/api/leaves/{leave_id}"),
        Some(&admin),
        Some(json!({ "status": "Rejected", "adminComments": "Coverage gap" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Rejected");
    assert_eq!(body["data"]["adminComments"], "Coverage gap");

    // Unknown request id
    let (status, body) = common::request(
        &app,
        "PUT",
        "/api/leaves/leave_request:nonexistent",
        Some(&admin),
        Some(json!({ "status": "Approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn leave_listings_scope_by_caller_and_order_newest_first() {
    let state = common::test_state().await;
    let first = common::create_employee(&state, "one@dayflow.com", "EMP-L2").await;
    let second = common::create_employee(&state, "two@dayflow.com", "EMP-L3").await;
    let app = create_router(state.clone());

    let first_token = common::token_for(
        &state,
        &first.user.to_string(),
        "one@dayflow.com",
        "Employee",
    );
    let second_token = common::token_for(
        &state,
        &second.user.to_string(),
        "two@dayflow.com",
        "Employee",
    );

    for (token, reason) in [
        (&first_token, "Dentist"),
        (&second_token, "Moving day"),
        (&first_token, "Conference"),
    ] {
        let (status, _) = common::request(
            &app,
            "POST",
            "/api/leaves",
            Some(token),
            Some(json!({
                "type": "Sick",
                "startDate": 1_770_000_000_000i64,
                "endDate": 1_770_100_000_000i64,
                "reason": reason
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        // createdAt has millisecond resolution; keep the ordering unambiguous
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    // Own requests only, newest created first
    let (_, body) = common::request(&app, "GET", "/api/leaves/my-leaves", Some(&first_token), None).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["reason"], "Conference");
    assert_eq!(body["data"][1]["reason"], "Dentist");

    // Admin sees everything, joined with email
    let admin = common::login(&app, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;
    let (_, body) = common::request(&app, "GET", "/api/leaves/all", Some(&admin), None).await;
    assert_eq!(body["count"], 3);
    assert!(body["data"][0]["email"].as_str().is_some());
}
