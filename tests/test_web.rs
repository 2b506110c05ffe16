//! Integration tests for the axum channel - handlers are exercised through
//! the router with the dummy provider, no socket and no real API key.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use senmon_assistant::chat::RolePrompt;
use senmon_assistant::comms::axum_channel::router_for;
use senmon_assistant::comms::CommsState;
use senmon_assistant::config::OpenAiConfig;
use senmon_assistant::llm::providers::dummy::DummyProvider;
use senmon_assistant::llm::providers::openai_compatible::OpenAiCompatibleProvider;
use senmon_assistant::llm::LlmProvider;

fn test_state() -> Arc<CommsState> {
    Arc::new(CommsState::new(
        LlmProvider::Dummy(DummyProvider),
        RolePrompt::built_in(),
        "test-model",
    ))
}

/// State over a real HTTP provider pointed at `api_base_url`, for error-path
/// tests. No API key; the endpoints under test never answer successfully.
fn openai_state(api_base_url: String, timeout_seconds: u64) -> Arc<CommsState> {
    let cfg = OpenAiConfig {
        api_base_url,
        model: "test-model".into(),
        temperature: 0.0,
        max_tokens: 1000,
        timeout_seconds,
    };
    let provider = LlmProvider::OpenAi(OpenAiCompatibleProvider::new(cfg, None).unwrap());
    Arc::new(CommsState::new(provider, RolePrompt::built_in(), "test-model"))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_answer(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn root_serves_the_form() {
    let router = router_for(test_state());
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("専門家AIアシスタント"));
    assert!(html.contains("実行"));
}

#[tokio::test]
async fn favicon_is_no_content() {
    let router = router_for(test_state());
    let response = router
        .oneshot(
            Request::builder()
                .uri("/favicon.ico")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn roles_lists_all_five_personas() {
    let router = router_for(test_state());
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/roles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let roles = json["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 5);
    assert_eq!(roles[0]["id"], "business_strategy");
    assert_eq!(roles[2]["label"], "財務分析、投資戦略の専門家");
}

#[tokio::test]
async fn answer_round_trip_with_dummy_provider() {
    let state = test_state();
    let router = router_for(state.clone());
    let response = router
        .oneshot(post_answer(serde_json::json!({
            "role": "finance",
            "request": "来月の予算配分について相談したい",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reply"], "[echo] 来月の予算配分について相談したい");
    assert!(json["session_id"].is_string());
    assert_eq!(state.session_count().await, 1);
}

#[tokio::test]
async fn answer_reuses_the_returned_session() {
    let state = test_state();
    let router = router_for(state.clone());

    let first = router
        .clone()
        .oneshot(post_answer(serde_json::json!({
            "role": "hr",
            "request": "採用計画の相談",
        })))
        .await
        .unwrap();
    let first_json = body_json(first).await;
    let session_id = first_json["session_id"].clone();

    let second = router
        .oneshot(post_answer(serde_json::json!({
            "role": "hr",
            "request": "面接フローはどうする",
            "session_id": session_id,
        })))
        .await
        .unwrap();
    let second_json = body_json(second).await;

    assert_eq!(second_json["session_id"], first_json["session_id"]);
    assert_eq!(state.session_count().await, 1);

    let id = uuid::Uuid::parse_str(first_json["session_id"].as_str().unwrap()).unwrap();
    // Two turns: (system + user + assistant) × 2.
    assert_eq!(state.session_len(id).await, Some(6));
}

#[tokio::test]
async fn empty_request_returns_static_message_without_calling_provider() {
    let state = test_state();
    let router = router_for(state.clone());
    for request in ["", "   ", "\t\n"] {
        let response = router
            .clone()
            .oneshot(post_answer(serde_json::json!({
                "role": "marketing",
                "request": request,
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["reply"], "リクエストが入力されていません。");
        assert!(json["session_id"].is_null());
    }
    // No conversation was created or mutated.
    assert_eq!(state.session_count().await, 0);
}

#[tokio::test]
async fn request_text_is_forwarded_untrimmed() {
    // Surrounding whitespace survives the emptiness check and reaches the
    // provider as submitted; the echo reply pins it.
    let router = router_for(test_state());
    let response = router
        .oneshot(post_answer(serde_json::json!({
            "role": "marketing",
            "request": "  キャンペーン案を出して  ",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reply"], "[echo]   キャンペーン案を出して  ");
}

#[tokio::test]
async fn provider_failure_returns_bad_gateway() {
    // Bind then drop to get a port with nothing listening; the connection is
    // refused and the handler maps the provider error to 502.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = openai_state(format!("http://{addr}/v1/chat/completions"), 1);
    let router = router_for(state.clone());
    let response = router
        .oneshot(post_answer(serde_json::json!({
            "role": "finance",
            "request": "来月の予算配分について相談したい",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "internal");
}

#[tokio::test(start_paused = true)]
async fn hung_provider_returns_gateway_timeout() {
    // Accept connections but never respond, so the round-trip pends until the
    // handler's guard timeout fires. Paused time auto-advances to the guard
    // (120 s) well before the provider's own 3600 s request timeout.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accept = tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((sock, _)) = listener.accept().await {
                held.push(sock);
            }
        }
    });

    let state = openai_state(format!("http://{addr}/v1/chat/completions"), 3600);
    let router = router_for(state);
    let response = router
        .oneshot(post_answer(serde_json::json!({
            "role": "scheduling",
            "request": "納期リスクを評価して",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "timeout");

    accept.abort();
}

#[tokio::test]
async fn unknown_role_is_rejected() {
    let state = test_state();
    let router = router_for(state.clone());
    let response = router
        .oneshot(post_answer(serde_json::json!({
            "role": "fortune_teller",
            "request": "運勢を教えて",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "invalid_role");
    assert_eq!(state.session_count().await, 0);
}

#[tokio::test]
async fn role_accepted_by_full_label() {
    let router = router_for(test_state());
    let response = router
        .oneshot(post_answer(serde_json::json!({
            "role": "財務分析、投資戦略の専門家",
            "request": "投資配分の相談",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_dummy_provider_ok() {
    let router = router_for(test_state());
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["provider"], "dummy");
    assert_eq!(json["model"], "test-model");
}
