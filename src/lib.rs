//! # posts-table
//!
//! Core of a paginated, filterable posts table whose view state lives in
//! the URL query string.
//!
//! The browser front end (`web-ui`) is a thin Yew shell over this crate.
//! Everything that can be decided without a DOM lives here so it can be
//! tested natively:
//! - **View state**: pagination, selected tags and search text, parsed from
//!   and serialized to the query string
//! - **Requests**: `skip`/`limit` derivation and request URLs
//! - **Responses**: decoding of the `/posts` JSON payload
//! - **Filtering**: tag and search filters applied to a fetched page
//! - **Fetch state**: loading/error transitions and stale-response tickets
//!
//! ## Example
//!
//! ```
//! use posts_table::{ApiConfig, PostsRequest, ViewState};
//!
//! let view = ViewState::from_query("?page=3&pageSize=20&tags=health,science");
//! assert_eq!(view.pagination.current, 3);
//! assert_eq!(view.selected_tags, vec!["health", "science"]);
//!
//! let request = PostsRequest::from_pagination(&view.pagination);
//! assert_eq!(
//!     request.url(&ApiConfig::default()),
//!     "https://dummyjson.com/posts?skip=40&limit=20"
//! );
//! ```

pub mod error;
pub mod fetch_state;
pub mod filter;
pub mod post;
pub mod report;
pub mod request;
pub mod view_state;

pub use error::FetchError;
pub use fetch_state::{FetchGeneration, FetchState, FetchTicket};
pub use filter::{filter_posts, matches_search, matches_tags};
pub use post::{Post, PostsPage};
pub use report::render_rows;
pub use request::{ApiConfig, DEFAULT_API_BASE, PostsRequest};
pub use view_state::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PAGE_SIZE_OPTIONS, Pagination, TAG_OPTIONS,
    TagOption, ViewState,
};
