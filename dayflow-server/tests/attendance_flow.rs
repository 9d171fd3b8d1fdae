//! Attendance check-in/check-out semantics

mod common;

use http::StatusCode;

use dayflow_server::api::create_router;
use dayflow_server::db::models::AttendanceStatus;
use dayflow_server::db::repository::{AttendanceRepository, RepoError};
use dayflow_server::utils::time::work_duration_hours;

const DAY_MS: i64 = 24 * 3_600_000;

#[tokio::test]
async fn check_in_is_once_per_day() {
    let state = common::test_state().await;
    let profile = common::create_employee(&state, "worker@dayflow.com", "EMP-A1").await;
    let repo = AttendanceRepository::new(state.get_db());

    let day = 1_700_000_000_000;
    let record = repo
        .check_in(&profile.user, day, day + 9 * 3_600_000)
        .await
        .expect("first check-in");
    assert_eq!(record.status, AttendanceStatus::Present);
    assert_eq!(record.date, day);
    assert!(record.check_out.is_none());
    assert_eq!(record.work_duration, 0.0);

    // Same user, same day
    let err = repo
        .check_in(&profile.user, day, day + 10 * 3_600_000)
        .await
        .expect_err("duplicate check-in");
    assert!(matches!(err, RepoError::Duplicate(msg) if msg == "Already checked in for today"));

    // A different day is a fresh record
    repo.check_in(&profile.user, day + DAY_MS, day + DAY_MS + 9 * 3_600_000)
        .await
        .expect("next-day check-in");

    // And a different user shares the day freely
    let colleague = common::create_employee(&state, "peer@dayflow.com", "EMP-A2").await;
    repo.check_in(&colleague.user, day, day + 9 * 3_600_000)
        .await
        .expect("other user same day");
}

#[tokio::test]
async fn check_out_records_rounded_duration() {
    let state = common::test_state().await;
    let profile = common::create_employee(&state, "hours@dayflow.com", "EMP-B1").await;
    let repo = AttendanceRepository::new(state.get_db());

    let day = 1_700_000_000_000;
    let check_in = day + 9 * 3_600_000;
    // 17:30 after a 09:00 check-in is exactly 8.5 hours
    let check_out = check_in + 8 * 3_600_000 + 30 * 60_000;

    let record = repo.check_in(&profile.user, day, check_in).await.unwrap();
    let id = record.id.expect("record id");

    let duration = work_duration_hours(check_in, check_out);
    let updated = repo.set_check_out(&id, check_out, duration).await.unwrap();

    assert_eq!(updated.check_out, Some(check_out));
    assert_eq!(updated.work_duration, 8.5);
}

#[tokio::test]
async fn history_is_newest_day_first() {
    let state = common::test_state().await;
    let profile = common::create_employee(&state, "history@dayflow.com", "EMP-C1").await;
    let repo = AttendanceRepository::new(state.get_db());

    let base = 1_700_000_000_000;
    for offset in [0, 2, 1] {
        let day = base + offset * DAY_MS;
        repo.check_in(&profile.user, day, day + 9 * 3_600_000)
            .await
            .unwrap();
    }

    let history = repo.find_by_user(&profile.user).await.unwrap();
    let dates: Vec<i64> = history.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![base + 2 * DAY_MS, base + DAY_MS, base]);
}

#[tokio::test]
async fn http_check_in_and_out_enforce_daily_state_machine() {
    let state = common::test_state().await;
    let profile = common::create_employee(&state, "clock@dayflow.com", "EMP-D1").await;
    let app = create_router(state.clone());
    let token = common::token_for(
        &state,
        &profile.user.to_string(),
        "clock@dayflow.com",
        "Employee",
    );

    // Check-out before check-in
    let (status, body) =
        common::request(&app, "POST", "/api/attendance/check-out", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "No check-in record found for today");

    let (status, body) =
        common::request(&app, "POST", "/api/attendance/check-in", Some(&token), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "Present");

    let (status, body) =
        common::request(&app, "POST", "/api/attendance/check-in", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Already checked in for today");

    let (status, body) =
        common::request(&app, "POST", "/api/attendance/check-out", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["checkOut"].as_i64().is_some());
    assert!(body["data"]["workDuration"].as_f64().unwrap() >= 0.0);

    let (status, body) =
        common::request(&app, "POST", "/api/attendance/check-out", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Already checked out today");

    // The admin view joins identity fields
    let admin = common::login(&app, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;
    let (status, body) =
        common::request(&app, "GET", "/api/attendance/all", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["email"], "clock@dayflow.com");
}
