//! HTTP access to the posts API.

use gloo::net::http::Request;
use posts_table::{ApiConfig, FetchError, PostsPage, PostsRequest};

/// Fetch one page of posts. One attempt, no retry.
pub async fn fetch_posts(config: &ApiConfig, request: PostsRequest) -> Result<PostsPage, FetchError> {
    let url = request.url(config);
    log::debug!("GET {url}");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    PostsPage::from_json(&body, &request)
}
