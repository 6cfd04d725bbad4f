/*
[INPUT]:  JSONPlaceholder schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - wire types for the blog feed
[UPDATE]: When the feed schema changes or new types are consumed
*/

use serde::{Deserialize, Serialize};

/// A single blog post as returned by the feed service.
///
/// The wire format also carries `userId`; only `id`, `title`, and `body`
/// are rendered downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_deserializes_wire_format() {
        let raw = r#"{"userId": 1, "id": 7, "title": "hello", "body": "world"}"#;
        let post: BlogPost = serde_json::from_str(raw).expect("decode blog post");
        assert_eq!(post.id, 7);
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "hello");
        assert_eq!(post.body, "world");
    }

    #[test]
    fn test_blog_post_tolerates_missing_user_id() {
        let raw = r#"{"id": 2, "title": "t", "body": "b"}"#;
        let post: BlogPost = serde_json::from_str(raw).expect("decode blog post");
        assert_eq!(post.user_id, 0);
    }
}
