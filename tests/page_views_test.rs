// ABOUTME: Integration tests for the dashboard and progress views
// ABOUTME: Covers both dashboard shapes, auth guards, failure normalization and retry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_fitness_client::{
    config::BackendFlavor,
    constants::{messages, mock_paths},
    lifecycle::FetchState,
    views::{DashboardView, Panel, ProgressView},
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_php_dashboard_posts_user_id_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dashboard.php"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({"userId": "u1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "stats": {"workoutsCompleted": 5, "totalWorkouts": 40},
                "workoutHistory": [{"name": "Swim", "duration": "45 min", "calories": 400, "date": "Mon"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let view = DashboardView::new();
    let state = view.load(&ctx).await;

    let data = state.value().unwrap();
    assert_eq!(data.stats.len(), 2);
    assert_eq!(data.stats[1].title, "Total Workouts");
    assert_eq!(data.recent_workouts[0].name, "Swim");
    assert_eq!(data.goals.len(), 3);
    assert!(view.render().to_string().contains("Swim"));
}

#[tokio::test]
async fn test_php_dashboard_without_session_requests_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = common::context(BackendFlavor::Php, &server);
    let view = DashboardView::new();
    let state = view.load(&ctx).await;
    assert_eq!(state.error(), Some(messages::AUTH_REQUIRED));
}

#[tokio::test]
async fn test_mock_dashboard_reads_direct_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(mock_paths::DASHBOARD))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": [{"title": "Calories Burned", "value": 2100, "unit": "kcal", "change": "+5%"}],
            "goals": [{"name": "Run 10k", "target": "10 km", "progress": 70}]
        })))
        .mount(&server)
        .await;

    let ctx = common::context(BackendFlavor::Mock, &server);
    let view = DashboardView::new();
    let data = view.load(&ctx).await.value().cloned().unwrap();
    assert_eq!(data.stats[0].value.to_string(), "2100");
    assert!(data.recent_workouts.is_empty());
    assert_eq!(data.goals[0].name, "Run 10k");
}

#[tokio::test]
async fn test_non_success_status_uses_body_message_or_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(mock_paths::DASHBOARD))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "X"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/progress"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let ctx = common::context(BackendFlavor::Mock, &server);
    let dashboard = DashboardView::new();
    assert_eq!(dashboard.load(&ctx).await, FetchState::Failure("X".into()));

    let progress = ProgressView::new();
    assert_eq!(
        progress.load(&ctx).await.error(),
        Some(messages::PROGRESS_FAILED)
    );
    assert!(matches!(progress.render(), Panel::Error { retry: true, .. }));
}

#[tokio::test]
async fn test_success_false_body_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dashboard.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": "Y"})),
        )
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let view = DashboardView::new();
    assert_eq!(view.load(&ctx).await.error(), Some("Y"));
}

#[tokio::test]
async fn test_php_envelope_without_success_flag_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dashboard.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let view = DashboardView::new();
    assert_eq!(view.load(&ctx).await.error(), Some(messages::DASHBOARD_FAILED));
}

#[tokio::test]
async fn test_unreachable_backend_then_retry() {
    let ctx = common::unreachable_context();
    let view = ProgressView::new();
    assert_eq!(
        view.load(&ctx).await.error(),
        Some(messages::NETWORK_UNAVAILABLE)
    );
    assert!(view.retry(&ctx).await.error().is_some());
}

#[tokio::test]
async fn test_progress_sends_token_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/progress.php"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metrics": [{"title": "Weight", "value": 70, "unit": "kg", "trend": "down", "change": "-1kg"}],
            "workoutHistory": [{"date": "Mon", "name": "Legs", "duration": "1h", "calories": 500, "progress": "improved"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let view = ProgressView::new();
    let data = view.load(&ctx).await.value().cloned().unwrap();
    assert_eq!(data.metrics.len(), 1);
    assert!(data.goal_progress.is_empty());
    assert!(view.render().to_string().contains("Legs"));
}
