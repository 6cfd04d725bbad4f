/*
[INPUT]:  Feed client and endpoint paths
[OUTPUT]: Decoded blog post lists
[POS]:    HTTP layer - blog post endpoints (no auth required)
[UPDATE]: When adding new feed endpoints or changing response format
*/

use reqwest::Method;

use crate::client::FeedClient;
use crate::error::Result;
use crate::types::BlogPost;

impl FeedClient {
    /// Fetch the full list of blog posts
    ///
    /// GET /posts
    pub async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        let builder = self.feed_request(Method::GET, "/posts")?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{ClientConfig, FeedClient};
    use crate::error::FeedError;
    use crate::types::BlogPost;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> FeedClient {
        FeedClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_fetch_posts() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {"userId": 1, "id": 1, "title": "first", "body": "alpha"},
            {"userId": 1, "id": 2, "title": "second", "body": "beta"},
            {"userId": 2, "id": 3, "title": "third", "body": "gamma"}
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let posts = test_client(&server)
            .fetch_posts()
            .await
            .expect("fetch_posts failed");

        let expected = vec![
            BlogPost {
                id: 1,
                user_id: 1,
                title: "first".to_string(),
                body: "alpha".to_string(),
            },
            BlogPost {
                id: 2,
                user_id: 1,
                title: "second".to_string(),
                body: "beta".to_string(),
            },
            BlogPost {
                id: 3,
                user_id: 2,
                title: "third".to_string(),
                body: "gamma".to_string(),
            },
        ];

        assert_eq!(posts, expected);
    }

    #[tokio::test]
    async fn test_fetch_posts_server_error() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_posts()
            .await
            .expect_err("expected API error");

        match err {
            FeedError::Api { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Api error variant, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_posts_malformed_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"not": "an array"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_posts()
            .await
            .expect_err("expected decode error");

        assert!(matches!(err, FeedError::Http(_)));
    }
}
