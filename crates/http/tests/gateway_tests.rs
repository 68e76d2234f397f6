//! End-to-end gateway tests against mocked upstream services.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use portico_http::client::{AuthClient, EventsClient};
use portico_http::server::{HttpServer, ServerConfig};
use portico_http::services::{TokenConfig, TokenValidator};
use portico_http::state::AppState;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECRET: &str = "integration-secret";

/// An address nothing listens on, for connection-failure scenarios.
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

fn sign(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn user_token(subject: &str) -> String {
    sign(json!({
        "userId": subject,
        "exp": chrono::Utc::now().timestamp() + 3600,
    }))
}

fn app(auth_url: &str, events_url: &str) -> Router {
    let validator = TokenValidator::new(&TokenConfig {
        secret: SECRET.to_string(),
        insecure_dev_mode: false,
    })
    .unwrap();
    let auth = AuthClient::new(auth_url, Duration::from_secs(2)).unwrap();
    let events = EventsClient::new(events_url, Duration::from_secs(2)).unwrap();
    let state = AppState::new(validator, auth, events);
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: "http://localhost:3000".to_string(),
        timeout_secs: 5,
    };
    HttpServer::new(config, state).unwrap().router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn login_passes_backend_body_through() {
    let auth = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ana@example.com", "password": "s3cret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "token": "backend-issued-token",
            "user": {"id": "u1", "name": "Ana"}
        })))
        .mount(&auth)
        .await;

    let app = app(&auth.uri(), DEAD_UPSTREAM);
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": "ana@example.com", "password": "s3cret"}).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["token"], "backend-issued-token");
    assert_eq!(body["user"]["name"], "Ana");
}

#[tokio::test]
async fn login_failure_message_passes_through() {
    let auth = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "message": "Credenciais inválidas"})),
        )
        .mount(&auth)
        .await;

    let app = app(&auth.uri(), DEAD_UPSTREAM);
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"email": "x", "password": "y"}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Credenciais inválidas");
}

#[tokio::test]
async fn protected_route_without_token_is_rejected() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app.oneshot(get("/orders/my-subscriptions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body, json!({"success": false, "message": "No token provided"}));
}

#[tokio::test]
async fn expired_token_is_rejected_as_expired() {
    let token = sign(json!({
        "userId": "u1",
        "exp": chrono::Utc::now().timestamp() - 3600,
    }));
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app
        .oneshot(authed("GET", "/orders/my-subscriptions", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["message"], "Token expired");
}

#[tokio::test]
async fn garbage_token_is_rejected_as_invalid() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app
        .oneshot(authed("GET", "/orders/my-subscriptions", "not-a-jwt", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["message"], "Invalid token");
}

#[tokio::test]
async fn event_listing_is_served_anonymously_with_a_bad_token() {
    let events = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "e1", "nome": "Meetup", "vagas": 10}
        ])))
        .mount(&events)
        .await;

    let app = app(DEAD_UPSTREAM, &events.uri());
    let response = app
        .oneshot(authed("GET", "/events", "expired-or-garbage", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body[0]["id"], "e1");
    assert_eq!(body[0]["title"], "Meetup");
    assert_eq!(body[0]["slots"], 10);
}

#[tokio::test]
async fn event_creation_translates_fields_both_ways() {
    let events = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_json(json!({
            "nome": "Meetup",
            "descricao": "Conversa sobre Rust",
            "data": "2025-10-01",
            "local": "Centro",
            "vagas": 30
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "abc123",
            "nome": "Meetup",
            "descricao": "Conversa sobre Rust",
            "data": "2025-10-01",
            "local": "Centro",
            "vagas": 30
        })))
        .mount(&events)
        .await;

    let app = app(DEAD_UPSTREAM, &events.uri());
    let token = user_token("organizer");
    let response = app
        .oneshot(authed(
            "POST",
            "/events",
            &token,
            Some(json!({
                "title": "Meetup",
                "description": "Conversa sobre Rust",
                "date": "2025-10-01",
                "location": "Centro",
                "slots": 30
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], "abc123");
    assert_eq!(body["title"], "Meetup");
    assert_eq!(body["location"], "Centro");
    assert!(body.get("nome").is_none());
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn event_deletion_propagates_the_empty_response() {
    let events = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/events/123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&events)
        .await;

    let app = app(DEAD_UPSTREAM, &events.uri());
    let token = user_token("organizer");
    let response = app
        .oneshot(authed("DELETE", "/events/123", &token, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn unreachable_events_service_yields_503_with_its_message() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app.oneshot(get("/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Falha ao conectar com a API de eventos. Tente novamente mais tarde."
    );
}

#[tokio::test]
async fn mock_subscription_confirms_with_caller_identity() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let token = user_token("user-7");
    let response = app
        .oneshot(authed(
            "POST",
            "/orders/subscribe",
            &token,
            Some(json!({"eventId": "42"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["userId"], "user-7");
    assert_eq!(body["data"]["eventId"], "42");
    assert_eq!(body["data"]["status"], "confirmed");
    assert!(body["data"]["id"].as_str().unwrap().starts_with("sub-"));
}

#[tokio::test]
async fn subscription_without_event_id_is_a_bad_request() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let token = user_token("user-7");
    let response = app
        .oneshot(authed("POST", "/orders/subscribe", &token, Some(json!({}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "eventId is required");
}

#[tokio::test]
async fn mock_unsubscription_is_idempotent() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let token = user_token("user-7");
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(authed("DELETE", "/orders/99", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Inscrição cancelada com sucesso");
    }
}

#[tokio::test]
async fn unknown_route_is_a_404_envelope() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app.oneshot(get("/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body, json!({"success": false, "message": "Route not found"}));
}

#[tokio::test]
async fn legacy_api_prefix_serves_the_same_routes() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);

    let response = app.clone().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // auth classification applies under the prefix too
    let response = app
        .oneshot(get("/api/orders/my-subscriptions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_reports_backend_statuses() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["auth"], "configured");
    assert_eq!(body["services"]["events"], "configured");
    assert_eq!(body["services"]["orders"], "using mocks");
    assert_eq!(body["services"]["notification"], "using mocks");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn root_banner_is_public() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "online");
    assert_eq!(body["message"], "API Gateway is running");
}

#[tokio::test]
async fn profile_is_fetched_with_the_forwarded_bearer() {
    let auth = MockServer::start().await;
    let token = user_token("u1");
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(wiremock::matchers::header(
            "authorization",
            format!("Bearer {token}").as_str(),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "u1", "name": "Ana", "email": "ana@example.com"})),
        )
        .mount(&auth)
        .await;

    let app = app(&auth.uri(), DEAD_UPSTREAM);
    let response = app
        .oneshot(authed("GET", "/auth/me", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Ana");
}

#[tokio::test]
async fn notifications_are_served_by_the_mock_backend() {
    let app = app(DEAD_UPSTREAM, DEAD_UPSTREAM);
    let token = user_token("user-1");
    let response = app
        .oneshot(authed("GET", "/notifications", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert!(body["data"].as_array().is_some());
}
