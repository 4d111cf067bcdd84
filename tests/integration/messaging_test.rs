//! Messaging and chat integration tests
//!
//! Requires a live Postgres reachable through DATABASE_URL. The chat tests
//! use the mock generation backend, which echoes the persona prompt, so
//! persona grounding is observable without a network call.

mod common;

use axum::http::{Method, StatusCode};
use common::{actor, authed_request, create_test_jwt, parse_body, seed_plumber, TestApp};
use tower::ServiceExt;

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn send_message_then_thread_contains_it() {
    let app = TestApp::new().await.expect("test app");
    let alice = actor();
    let bob = actor();
    let jwt = create_test_jwt(alice);

    let req = authed_request(
        Method::POST,
        "/v1/messages",
        &jwt,
        Some(serde_json::json!({
            "receiver": bob.to_string(),
            "body": "Hi, is my sink fixable?"
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created = parse_body(resp).await;
    assert_eq!(created["sender"], alice.to_string());
    assert_eq!(created["receiver"], bob.to_string());
    assert_eq!(created["body"], "Hi, is my sink fixable?");
    assert!(created["id"].is_string());
    assert!(created["timestamp"].is_string());

    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", bob),
        &jwt,
        None,
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let thread = parse_body(resp).await;
    let thread = thread.as_array().expect("thread is a list");
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0]["id"], created["id"]);

    app.cleanup(&[alice, bob]).await.unwrap();
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn thread_is_symmetric_between_participants() {
    let app = TestApp::new().await.expect("test app");
    let alice = actor();
    let bob = actor();
    let alice_jwt = create_test_jwt(alice);
    let bob_jwt = create_test_jwt(bob);

    for (jwt, receiver, body) in [
        (&alice_jwt, bob, "First from Alice"),
        (&bob_jwt, alice, "Reply from Bob"),
        (&alice_jwt, bob, "Second from Alice"),
    ] {
        let req = authed_request(
            Method::POST,
            "/v1/messages",
            jwt,
            Some(serde_json::json!({
                "receiver": receiver.to_string(),
                "body": body
            })),
        );
        let resp = app.router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", bob),
        &alice_jwt,
        None,
    );
    let alice_view = parse_body(app.router.clone().oneshot(req).await.unwrap()).await;

    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", alice),
        &bob_jwt,
        None,
    );
    let bob_view = parse_body(app.router.clone().oneshot(req).await.unwrap()).await;

    // Same thread no matter which participant asks
    assert_eq!(alice_view, bob_view);

    let thread = alice_view.as_array().unwrap();
    assert_eq!(thread.len(), 3);
    assert_eq!(thread[0]["body"], "First from Alice");
    assert_eq!(thread[1]["body"], "Reply from Bob");
    assert_eq!(thread[2]["body"], "Second from Alice");

    // Ascending, non-decreasing timestamps
    let timestamps: Vec<&str> = thread
        .iter()
        .map(|m| m["timestamp"].as_str().unwrap())
        .collect();
    for pair in timestamps.windows(2) {
        assert!(pair[0] <= pair[1], "timestamps out of order: {:?}", pair);
    }

    app.cleanup(&[alice, bob]).await.unwrap();
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn empty_thread_is_an_empty_list() {
    let app = TestApp::new().await.expect("test app");
    let alice = actor();
    let stranger = actor();
    let jwt = create_test_jwt(alice);

    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", stranger),
        &jwt,
        None,
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let thread = parse_body(resp).await;
    assert_eq!(thread, serde_json::json!([]));
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn blank_message_body_is_rejected_without_persisting() {
    let app = TestApp::new().await.expect("test app");
    let alice = actor();
    let bob = actor();
    let jwt = create_test_jwt(alice);

    let req = authed_request(
        Method::POST,
        "/v1/messages",
        &jwt,
        Some(serde_json::json!({
            "receiver": bob.to_string(),
            "body": "   "
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", bob),
        &jwt,
        None,
    );
    let thread = parse_body(app.router.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(thread, serde_json::json!([]));
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn chat_send_persists_message_pair_with_reversed_reply() {
    let app = TestApp::new().await.expect("test app");
    let customer = actor();
    let worker = actor();
    let jwt = create_test_jwt(customer);

    seed_plumber(&app, worker).await;

    let req = authed_request(
        Method::POST,
        &format!("/v1/chat/{}", worker),
        &jwt,
        Some(serde_json::json!({
            "body": "How much to fix my sink?"
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = parse_body(resp).await;

    assert_eq!(body["user_message"]["sender"], customer.to_string());
    assert_eq!(body["user_message"]["receiver"], worker.to_string());
    assert_eq!(body["user_message"]["body"], "How much to fix my sink?");

    // The reply originates from the worker
    assert_eq!(body["ai_response"]["sender"], worker.to_string());
    assert_eq!(body["ai_response"]["receiver"], customer.to_string());

    // The mock backend echoes its system prompt, so a persona-grounded
    // reply must reference the worker's published services
    let reply = body["ai_response"]["body"].as_str().unwrap();
    assert!(reply.contains("Fix Sink"), "reply not grounded: {}", reply);
    assert!(reply.contains("Plumber"), "reply not grounded: {}", reply);

    // Both sides of the exchange landed in the same thread
    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", worker),
        &jwt,
        None,
    );
    let thread = parse_body(app.router.clone().oneshot(req).await.unwrap()).await;
    let thread = thread.as_array().unwrap();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0]["id"], body["user_message"]["id"]);
    assert_eq!(thread[1]["id"], body["ai_response"]["id"]);

    app.cleanup(&[customer, worker]).await.unwrap();
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn chat_send_to_unknown_worker_still_delivers_message() {
    let app = TestApp::new().await.expect("test app");
    let customer = actor();
    let nobody = actor();
    let jwt = create_test_jwt(customer);

    let req = authed_request(
        Method::POST,
        &format!("/v1/chat/{}", nobody),
        &jwt,
        Some(serde_json::json!({
            "body": "Anyone there?"
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error = parse_body(resp).await;
    let message = error["error"]["message"].as_str().unwrap();
    assert!(
        message.contains("your message was delivered"),
        "error should report partial success: {}",
        message
    );

    // Exactly the human message survives, no reply
    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", nobody),
        &jwt,
        None,
    );
    let thread = parse_body(app.router.clone().oneshot(req).await.unwrap()).await;
    let thread = thread.as_array().unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0]["body"], "Anyone there?");
    assert_eq!(thread[0]["sender"], customer.to_string());

    app.cleanup(&[customer, nobody]).await.unwrap();
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn chat_send_keeps_message_when_generation_fails() {
    let app = TestApp::with_llm_provider("mock-failing")
        .await
        .expect("test app");
    let customer = actor();
    let worker = actor();
    let jwt = create_test_jwt(customer);

    seed_plumber(&app, worker).await;

    let req = authed_request(
        Method::POST,
        &format!("/v1/chat/{}", worker),
        &jwt,
        Some(serde_json::json!({
            "body": "How much to fix my sink?"
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let error = parse_body(resp).await;
    assert_eq!(error["error"]["code"], "GENERATION_ERROR");
    let message = error["error"]["message"].as_str().unwrap();
    assert!(
        message.contains("your message was delivered"),
        "error should report partial success: {}",
        message
    );

    // The human message survived the failed generation; no reply row
    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", worker),
        &jwt,
        None,
    );
    let thread = parse_body(app.router.clone().oneshot(req).await.unwrap()).await;
    let thread = thread.as_array().unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0]["body"], "How much to fix my sink?");
    assert_eq!(thread[0]["sender"], customer.to_string());

    app.cleanup(&[customer, worker]).await.unwrap();
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn chat_send_with_blank_body_persists_nothing() {
    let app = TestApp::new().await.expect("test app");
    let customer = actor();
    let worker = actor();
    let jwt = create_test_jwt(customer);

    seed_plumber(&app, worker).await;

    let req = authed_request(
        Method::POST,
        &format!("/v1/chat/{}", worker),
        &jwt,
        Some(serde_json::json!({
            "body": ""
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = authed_request(
        Method::GET,
        &format!("/v1/messages?with={}", worker),
        &jwt,
        None,
    );
    let thread = parse_body(app.router.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(thread, serde_json::json!([]));

    app.cleanup(&[customer, worker]).await.unwrap();
}

#[ignore = "requires a live database (DATABASE_URL)"]
#[test_log::test(tokio::test)]
async fn requests_without_a_token_are_rejected() {
    let app = TestApp::new().await.expect("test app");

    let req = axum::http::Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/messages?with={}", actor()))
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
