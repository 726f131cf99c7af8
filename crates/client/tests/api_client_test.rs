//! Envelope and error-classification tests for `ApiClient`.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lunas_client::ApiClient;
use lunas_shared::AppError;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), 5).expect("client builds")
}

#[tokio::test]
async fn decodes_successful_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "7f0c2f44-9a3e-4a8e-8f7d-2f1a5a9b6c01",
                "name": "Siti",
                "email": "siti@example.com",
                "role": "admin"
            }
        })))
        .mount(&server)
        .await;

    let profile = client(&server).auth().me().await.unwrap();
    assert_eq!(profile.name, "Siti");
    assert_eq!(profile.email, "siti@example.com");
}

#[tokio::test]
async fn sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "7f0c2f44-9a3e-4a8e-8f7d-2f1a5a9b6c01",
                "name": "Siti",
                "email": "siti@example.com",
                "role": "staff"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server).with_token("token-123".to_string());
    api.auth().me().await.unwrap();
}

#[tokio::test]
async fn classifies_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Token has expired"
        })))
        .mount(&server)
        .await;

    let err = client(&server).auth().me().await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
    assert!(err.to_string().contains("Token has expired"));
}

#[tokio::test]
async fn classifies_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Company profile not configured"
        })))
        .mount(&server)
        .await;

    let err = client(&server).company().get().await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn rejected_envelope_with_ok_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "maintenance window"
        })))
        .mount(&server)
        .await;

    let err = client(&server).company().get().await.unwrap_err();
    assert!(matches!(err, AppError::Api(_)));
    assert!(err.to_string().contains("maintenance window"));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client(&server).company().get().await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn missing_data_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true
        })))
        .mount(&server)
        .await;

    let err = client(&server).company().get().await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}
