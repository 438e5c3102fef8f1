use dcc_updates::config::UserAgentConfig;
use dcc_updates::updates::{build_http_client, fetch_html};
use dcc_updates::UpdatesError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hub/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    let body = fetch_html(&client, &format!("{}/hub/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn test_fetch_sends_identifying_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "dcc-cannaconnect-action/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("matched"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    let body = fetch_html(&client, &mock_server.uri()).await.unwrap();

    assert_eq!(body, "matched");
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    let err = fetch_html(&client, &mock_server.uri()).await.unwrap_err();

    match err {
        UpdatesError::Fetch { status, reason } => {
            assert_eq!(status, 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("expected Fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_does_not_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&UserAgentConfig::default()).unwrap();
    let result = fetch_html(&client, &mock_server.uri()).await;

    assert!(matches!(result, Err(UpdatesError::Fetch { status: 500, .. })));
}
