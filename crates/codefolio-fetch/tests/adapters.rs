//! Integration tests for the platform fetch adapters using wiremock HTTP mocks.

use std::time::Duration;

use codefolio_core::Platform;
use codefolio_fetch::{Endpoints, FetchClient, FetchError, UpstreamFailureKind};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> FetchClient {
    FetchClient::with_endpoints(30, "codefolio-test/0.1", Endpoints::all_to(base_url))
        .expect("client construction should not fail")
}

#[tokio::test]
async fn github_success_returns_user_object() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "login": "alice",
        "followers": 120,
        "following": 30,
        "public_repos": 25,
        "public_gists": 4
    });

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .fetch(Platform::Github, "alice")
        .await
        .expect("should fetch user");

    assert_eq!(payload["login"], "alice");
    assert_eq!(payload["followers"], 120);
}

#[tokio::test]
async fn github_missing_user_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            &serde_json::json!({"message": "Not Found"}),
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(Platform::Github, "ghost").await.unwrap_err();

    assert!(matches!(err, FetchError::NotFound { ref username, .. } if username == "ghost"));
    assert_eq!(err.kind(), UpstreamFailureKind::NotFound);
}

#[tokio::test]
async fn github_rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(Platform::Github, "alice").await.unwrap_err();

    assert!(matches!(err, FetchError::RateLimited { .. }));
    assert_eq!(err.kind(), UpstreamFailureKind::RateLimited);
}

#[tokio::test]
async fn github_invalid_json_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(Platform::Github, "alice").await.unwrap_err();

    assert!(matches!(err, FetchError::MalformedResponse { .. }));
    assert_eq!(err.kind(), UpstreamFailureKind::MalformedResponse);
}

#[tokio::test]
async fn github_server_error_is_transport_kind() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(Platform::Github, "alice").await.unwrap_err();

    assert!(matches!(err, FetchError::UnexpectedStatus { status: 500, .. }));
    assert_eq!(err.kind(), UpstreamFailureKind::Transport);
}

#[tokio::test]
async fn github_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .and(header("authorization", "Bearer ghp_test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&serde_json::json!({"login": "alice"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_tokens(Some("ghp_test".to_string()), None);
    client
        .fetch(Platform::Github, "alice")
        .await
        .expect("authorized fetch should succeed");
}

#[tokio::test]
async fn codeforces_ok_envelope_unwraps_result() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "status": "OK",
        "result": [{
            "handle": "tourist",
            "rating": 3800,
            "maxRating": 3979,
            "rank": "legendary grandmaster",
            "contribution": 128
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/user.info"))
        .and(query_param("handles", "tourist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .fetch(Platform::Codeforces, "tourist")
        .await
        .expect("should unwrap envelope");

    assert_eq!(payload["rating"], 3800);
    assert_eq!(payload["rank"], "legendary grandmaster");
}

#[tokio::test]
async fn codeforces_failed_envelope_maps_to_not_found() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "status": "FAILED",
        "comment": "handles: User with handle nobody not found"
    });

    Mock::given(method("GET"))
        .and(path("/api/user.info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch(Platform::Codeforces, "nobody")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::NotFound { .. }));
}

#[tokio::test]
async fn leetcode_posts_graphql_and_unwraps_data() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "data": {
            "matchedUser": {
                "profile": {"ranking": 10543},
                "submitStats": {
                    "acSubmissionNum": [
                        {"difficulty": "All", "count": 310},
                        {"difficulty": "Easy", "count": 150},
                        {"difficulty": "Medium", "count": 120},
                        {"difficulty": "Hard", "count": 40}
                    ]
                }
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .fetch(Platform::Leetcode, "bob")
        .await
        .expect("should unwrap data");

    assert_eq!(payload["matchedUser"]["profile"]["ranking"], 10543);
}

#[tokio::test]
async fn leetcode_null_matched_user_is_not_found() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"data": {"matchedUser": null}});

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(Platform::Leetcode, "ghost").await.unwrap_err();

    assert!(matches!(err, FetchError::NotFound { .. }));
}

#[tokio::test]
async fn twitter_requests_public_metrics() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "data": {
            "username": "alice_dev",
            "public_metrics": {
                "followers_count": 900,
                "following_count": 120,
                "tweet_count": 4821
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/2/users/by/username/alice_dev"))
        .and(query_param("user.fields", "public_metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .fetch(Platform::Twitter, "alice_dev")
        .await
        .expect("should fetch metrics");

    assert_eq!(payload["data"]["public_metrics"]["followers_count"], 900);
}

#[tokio::test]
async fn codechef_success_false_is_not_found() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"success": false, "status": 404});

    Mock::given(method("GET"))
        .and(path("/handle/nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch(Platform::Codechef, "nobody")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::NotFound { .. }));
}

#[tokio::test]
async fn instagram_missing_user_tree_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alice.pics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch(Platform::Instagram, "alice.pics")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::MalformedResponse { .. }));
}

#[tokio::test]
async fn slow_upstream_resolves_to_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&serde_json::json!({"login": "alice"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = FetchClient::with_endpoints(
        1,
        "codefolio-test/0.1",
        Endpoints::all_to(&server.uri()),
    )
    .unwrap();
    let err = client.fetch(Platform::Github, "alice").await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { timeout_secs: 1, .. }));
    assert_eq!(err.kind(), UpstreamFailureKind::Timeout);
}
