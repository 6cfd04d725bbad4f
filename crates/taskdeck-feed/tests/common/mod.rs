/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdeck-feed tests

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mount a canned /posts response with the given JSON body
pub async fn mount_posts(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(body.to_string(), "application/json"),
        )
        .mount(server)
        .await;
}

/// A small fixed posts payload used across tests
pub fn sample_posts_json() -> &'static str {
    r#"[
        {"userId": 1, "id": 10, "title": "ten", "body": "body ten"},
        {"userId": 1, "id": 11, "title": "eleven", "body": "body eleven"}
    ]"#
}
