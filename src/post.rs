//! Posts payload returned by `GET /posts`.

use serde::Deserialize;

use crate::error::FetchError;
use crate::request::PostsRequest;

/// A remote post. Fields the table does not show are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Tags for the table cell, e.g. `history, crime`.
    pub fn tags_label(&self) -> String {
        self.tags.join(", ")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// One page of posts plus the paging metadata the server reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    /// Total number of posts on the server.
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

#[derive(Deserialize)]
struct RawPage {
    posts: Vec<Post>,
    total: Option<u32>,
    skip: Option<u32>,
    limit: Option<u32>,
}

impl PostsPage {
    /// Decode a response body. `request` fills in metadata the server left out.
    ///
    /// Without a `total`, the page is assumed to be the last one unless it
    /// came back full, in which case one more page is assumed to exist.
    pub fn from_json(body: &str, request: &PostsRequest) -> Result<Self, FetchError> {
        let raw: RawPage = serde_json::from_str(body)?;
        let skip = raw.skip.unwrap_or(request.skip);
        let limit = raw.limit.unwrap_or(request.limit);
        let fetched = u32::try_from(raw.posts.len()).unwrap_or(u32::MAX);
        let total = raw.total.unwrap_or_else(|| {
            let seen = skip.saturating_add(fetched);
            if fetched >= request.limit && request.limit > 0 {
                seen.saturating_add(1)
            } else {
                seen
            }
        });

        log::debug!(
            "decoded {} posts (skip={}, limit={}, total={})",
            fetched,
            skip,
            limit,
            total
        );

        Ok(Self {
            posts: raw.posts,
            total,
            skip,
            limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "posts": [
            {
                "id": 1,
                "title": "His mother had always taught him",
                "body": "His mother had always taught him not to ever think of himself as better than others.",
                "tags": ["history", "american", "crime"],
                "reactions": { "likes": 192, "dislikes": 25 },
                "views": 305,
                "userId": 121
            },
            {
                "id": 2,
                "title": "He was an expert but not in a discipline",
                "body": "He was an expert but not in a discipline that anyone could fully appreciate.",
                "tags": ["french", "fiction", "english"],
                "reactions": { "likes": 859, "dislikes": 32 },
                "views": 4884,
                "userId": 91
            }
        ],
        "total": 251,
        "skip": 0,
        "limit": 2
    }"#;

    #[test]
    fn test_decode_sample() {
        let request = PostsRequest { skip: 0, limit: 2 };
        let page = PostsPage::from_json(SAMPLE, &request).unwrap();
        assert_eq!(page.posts.len(), 2);
        assert_eq!(page.total, 251);
        assert_eq!(page.limit, 2);
        assert_eq!(page.posts[0].id, 1);
        assert_eq!(page.posts[1].tags, vec!["french", "fiction", "english"]);
    }

    #[test]
    fn test_tags_label() {
        let page = PostsPage::from_json(SAMPLE, &PostsRequest { skip: 0, limit: 2 }).unwrap();
        assert_eq!(page.posts[0].tags_label(), "history, american, crime");
        assert!(page.posts[0].has_tag("crime"));
        assert!(!page.posts[0].has_tag("fiction"));
    }

    #[test]
    fn test_missing_metadata_uses_request() {
        let body = r#"{"posts":[{"id":7,"title":"t","body":"b","tags":[]}]}"#;
        let page = PostsPage::from_json(body, &PostsRequest { skip: 30, limit: 10 }).unwrap();
        assert_eq!(page.skip, 30);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 31);
    }

    #[test]
    fn test_full_page_without_total_allows_next() {
        let body = r#"{"posts":[
            {"id":1,"title":"a","body":"a"},
            {"id":2,"title":"b","body":"b"}
        ]}"#;
        let page = PostsPage::from_json(body, &PostsRequest { skip: 0, limit: 2 }).unwrap();
        assert_eq!(page.total, 3);
        assert!(page.posts[0].tags.is_empty());
    }

    #[test]
    fn test_missing_posts_is_decode_error() {
        let err = PostsPage::from_json(r#"{"total": 3}"#, &PostsRequest { skip: 0, limit: 10 })
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_malformed_post_is_decode_error() {
        let body = r#"{"posts":[{"id":"one","title":"t","body":"b"}]}"#;
        let err = PostsPage::from_json(body, &PostsRequest { skip: 0, limit: 10 }).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_non_json_is_decode_error() {
        let err = PostsPage::from_json("<html>502</html>", &PostsRequest { skip: 0, limit: 10 })
            .unwrap_err();
        assert_eq!(err.banner(), "Error fetching posts");
    }
}
