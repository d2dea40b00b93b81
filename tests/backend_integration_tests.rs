use messenger::api::{ApiError, Backend, HttpBackend, MessageForm};
use messenger::core::cookies::{CookieDescriptor, CookieScope, parse_cookie_string};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn test_form() -> MessageForm {
    MessageForm {
        message_url: "https://wellfound.com/u/jane".to_string(),
        message: "Hello Jane".to_string(),
    }
}

async fn mount_send_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// POST /send
// ============================================================================

#[tokio::test]
async fn test_send_posts_urlencoded_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "message_url=https%3A%2F%2Fwellfound.com%2Fu%2Fjane&message=Hello+Jane",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Message sent successfully!"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    assert_ok!(backend.send_message(&test_form()).await);
}

#[tokio::test]
async fn test_send_accepts_any_2xx_and_ignores_body() {
    let mock_server = MockServer::start().await;
    mount_send_response(&mock_server, ResponseTemplate::new(204)).await;

    let backend = HttpBackend::new(mock_server.uri());
    assert_ok!(backend.send_message(&test_form()).await);
}

#[tokio::test]
async fn test_send_unauthorized_carries_status_and_message() {
    let mock_server = MockServer::start().await;
    mount_send_response(
        &mock_server,
        ResponseTemplate::new(401)
            .set_body_json(json!({"error": "Authentication failed. Please check your cookies."})),
    )
    .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.send_message(&test_form()).await);
    assert_eq!(
        err,
        ApiError::Api {
            status: 401,
            message: Some("Authentication failed. Please check your cookies.".to_string()),
        }
    );
}

#[tokio::test]
async fn test_send_server_error_with_body() {
    let mock_server = MockServer::start().await;
    mount_send_response(
        &mock_server,
        ResponseTemplate::new(500).set_body_json(json!({"error": "Automation error: timeout"})),
    )
    .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.send_message(&test_form()).await);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.server_message(), Some("Automation error: timeout"));
}

#[tokio::test]
async fn test_send_server_error_without_body() {
    let mock_server = MockServer::start().await;
    mount_send_response(&mock_server, ResponseTemplate::new(500)).await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.send_message(&test_form()).await);
    assert_eq!(err, ApiError::Api { status: 500, message: None });
}

#[tokio::test]
async fn test_send_non_json_error_body_has_no_message() {
    let mock_server = MockServer::start().await;
    mount_send_response(
        &mock_server,
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.send_message(&test_form()).await);
    assert_eq!(err, ApiError::Api { status: 502, message: None });
}

#[tokio::test]
async fn test_send_network_error() {
    // Grab a free port and release it so nothing is listening there.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let backend = HttpBackend::new(format!("http://{addr}"));
    let err = assert_err!(backend.send_message(&test_form()).await);
    assert!(matches!(err, ApiError::Network(_)));
}

// ============================================================================
// POST /set-cookies
// ============================================================================

#[tokio::test]
async fn test_set_cookies_posts_json_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/set-cookies"))
        .and(body_json(json!({
            "cookies": [
                {"name": "a", "value": "1", "domain": ".wellfound.com", "path": "/"},
                {"name": "b", "value": "2", "domain": ".wellfound.com", "path": "/"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Cookies saved successfully"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cookies = parse_cookie_string("a=1; b=2", &CookieScope::default());
    let backend = HttpBackend::new(mock_server.uri());
    assert_ok!(backend.set_cookies(&cookies).await);
}

#[tokio::test]
async fn test_set_cookies_omits_missing_values() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/set-cookies"))
        .and(body_json(json!({
            "cookies": [{"name": "flag", "domain": ".wellfound.com", "path": "/"}]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cookies = vec![CookieDescriptor {
        name: "flag".to_string(),
        value: None,
        domain: ".wellfound.com".to_string(),
        path: "/".to_string(),
    }];
    let backend = HttpBackend::new(mock_server.uri());
    assert_ok!(backend.set_cookies(&cookies).await);
}

#[tokio::test]
async fn test_set_cookies_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/set-cookies"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "No cookies provided"})))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.set_cookies(&[]).await);
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.server_message(), Some("No cookies provided"));
}
