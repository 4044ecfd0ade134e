// ABOUTME: Integration tests for the profile view
// ABOUTME: Covers the token guard, edit mode, local validation and password omission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_fitness_client::{
    attachment::SelectedFile,
    config::BackendFlavor,
    constants::messages,
    errors::ErrorCode,
    lifecycle::FetchState,
    views::{ProfileMode, ProfileView},
};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn stored_profile() -> Value {
    json!({
        "firstName": "Ana", "lastName": "Diaz", "email": "a@x.io",
        "age": 31, "weight": "61.5", "height": 168, "image": "https://img/ana.png"
    })
}

#[tokio::test]
async fn test_profile_without_token_stays_idle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = common::context(BackendFlavor::Php, &server);
    let mut view = ProfileView::new();
    assert_eq!(view.load(&ctx, Some("u1")).await, FetchState::Idle);
}

#[tokio::test]
async fn test_profile_loads_by_id_and_shows_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile.php/u1"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_profile()))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let mut view = ProfileView::new();
    let profile = view.load(&ctx, None).await.value().cloned().unwrap();
    assert_eq!(profile.weight, Some(61.5));
    assert_eq!(view.preview(), Some("https://img/ana.png"));
    assert!(view.render().to_string().contains("Ana Diaz"));
}

#[tokio::test]
async fn test_save_omits_blank_password_and_returns_to_viewing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile.php/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_profile()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/profile.php/u1"))
        .respond_with(|request: &Request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            assert!(body.get("password").is_none());
            assert_eq!(body["age"], json!(32.0));
            ResponseTemplate::new(200).set_body_json(body)
        })
        .expect(1)
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let mut view = ProfileView::new();
    view.load(&ctx, Some("u1")).await;

    view.begin_edit();
    assert_eq!(view.mode(), ProfileMode::Editing);
    assert_eq!(view.form().text("firstName"), "Ana");
    view.set_field("age", "32");

    let saved = view.save(&ctx).await.unwrap();
    assert_eq!(saved.age, Some(32.0));
    assert_eq!(view.mode(), ProfileMode::Viewing);
    assert_eq!(view.state().value().and_then(|p| p.age), Some(32.0));
}

#[tokio::test]
async fn test_save_sends_new_password_as_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile.php/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_profile()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/profile.php/u1"))
        .and(body_partial_json(json!({"password": " new "})))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_profile()))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let mut view = ProfileView::new();
    view.load(&ctx, Some("u1")).await;
    view.begin_edit();
    view.set_field("password", " new ");

    view.save(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_rejected_picture_uses_profile_wording() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile.php/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_profile()))
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let mut view = ProfileView::new();
    view.load(&ctx, Some("u1")).await;
    view.begin_edit();

    let text = SelectedFile::new("cv.pdf", "application/pdf", vec![1, 2, 3]);
    assert!(view.attach_image(text).await.is_err());
    assert_eq!(view.error().as_deref(), Some(messages::PROFILE_IMAGE_WRONG_TYPE));

    let big = SelectedFile::new("huge.png", "image/png", vec![0; 5 * 1024 * 1024 + 1]);
    assert!(view.attach_image(big).await.is_err());
    assert_eq!(view.error().as_deref(), Some(messages::PROFILE_IMAGE_TOO_LARGE));
    assert_eq!(view.preview(), Some("https://img/ana.png"));
    assert_eq!(view.form().text("image"), "https://img/ana.png");
}

#[tokio::test]
async fn test_invalid_edit_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile.php/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_profile()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let mut view = ProfileView::new();
    view.load(&ctx, Some("u1")).await;
    view.begin_edit();

    view.set_field("weight", "heavy");
    let error = view.save(&ctx).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(view.error().as_deref(), Some(messages::PROFILE_INVALID_FIELDS));
    assert_eq!(view.mode(), ProfileMode::Editing);

    view.set_field("weight", "60");
    view.set_field("firstName", "  ");
    assert_eq!(
        view.save(&ctx).await.unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
}

#[tokio::test]
async fn test_update_failure_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile.php/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_profile()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/profile.php/u1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Forbidden"})))
        .mount(&server)
        .await;

    let ctx = common::logged_in(BackendFlavor::Php, &server, "tok", "u1").await;
    let mut view = ProfileView::new();
    view.load(&ctx, Some("u1")).await;
    view.begin_edit();

    assert!(view.save(&ctx).await.is_err());
    assert_eq!(view.error().as_deref(), Some("Forbidden"));
    assert_eq!(view.mode(), ProfileMode::Editing);
}
