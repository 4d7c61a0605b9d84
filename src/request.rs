//! Paginated request building.

use crate::view_state::Pagination;

/// API host used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://dummyjson.com";

/// Where posts are fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at compile time via `POSTS_API_BASE`, if set.
    pub fn from_build_env() -> Self {
        match option_env!("POSTS_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }
}

/// One page of posts to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PostsRequest {
    pub skip: u32,
    pub limit: u32,
}

impl PostsRequest {
    pub fn from_pagination(pagination: &Pagination) -> Self {
        Self {
            skip: pagination.skip(),
            limit: pagination.page_size,
        }
    }

    /// `GET` URL for this page.
    pub fn url(&self, config: &ApiConfig) -> String {
        format!(
            "{}/posts?skip={}&limit={}",
            config.base_url, self.skip, self.limit
        )
    }
}
