//! CLI tool to inspect how a URL query string drives the posts table.
//!
//! Usage:
//!   posts-query "?page=3&pageSize=20&tags=health"
//!   posts-query "page=2&search=love" --response saved-page.json
//!
//! Prints the normalized view state, the canonical query string and the
//! request URL. With `--response`, also decodes a saved `/posts` response
//! and prints the rows the page would display.

use clap::Parser;
use posts_table::{ApiConfig, PostsPage, PostsRequest, ViewState, filter_posts, render_rows};
use std::fs;
use std::path::Path;
use std::process;

/// Resolve a posts-table query string into view state and a request URL.
#[derive(Parser)]
#[command(name = "posts-query")]
struct Cli {
    /// Query string, with or without the leading '?'
    #[arg(default_value = "")]
    query: String,

    /// API base URL (default: compile-time POSTS_API_BASE or https://dummyjson.com)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Saved JSON response from GET /posts to filter and print
    #[arg(short, long)]
    response: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.base_url {
        Some(base) => ApiConfig::new(base.as_str()),
        None => ApiConfig::from_build_env(),
    };
    let view = ViewState::from_query(&cli.query);
    let request = PostsRequest::from_pagination(&view.pagination);

    println!("Page:      {}", view.pagination.current);
    println!("Page size: {}", view.pagination.page_size);
    println!("Tags:      {}", view.selected_tags.join(", "));
    println!("Search:    {}", view.search_text);
    println!("Query:     ?{}", view.to_query());
    println!("Request:   {}", request.url(&config));

    if let Some(path) = &cli.response {
        match load_rows(Path::new(path), &view, &request) {
            Ok((rows, page)) => {
                println!();
                print!("{rows}");
                eprintln!(
                    "Page {} of {} ({} posts total)",
                    view.pagination.current,
                    view.pagination.page_count(page.total),
                    page.total
                );
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}

/// Decode a saved response and render the rows `view` would display.
fn load_rows(
    path: &Path,
    view: &ViewState,
    request: &PostsRequest,
) -> Result<(String, PostsPage), String> {
    let body = fs::read_to_string(path)
        .map_err(|e| format!("reading response file '{}': {e}", path.display()))?;
    let page = PostsPage::from_json(&body, request)
        .map_err(|e| format!("decoding '{}': {e}", path.display()))?;
    let rows = render_rows(&filter_posts(&page.posts, view));
    Ok((rows, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_rows_filters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"posts":[
                {{"id":1,"title":"Budget tips","body":"Save more.","tags":["finance"]}},
                {{"id":2,"title":"Sleep well","body":"Rest matters.","tags":["health"]}}
            ],"total":2,"skip":0,"limit":10}}"#
        )
        .unwrap();

        let view = ViewState::from_query("tags=health");
        let request = PostsRequest::from_pagination(&view.pagination);
        let (rows, page) = load_rows(file.path(), &view, &request).unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(rows.lines().count(), 2);
        assert!(rows.contains("Sleep well"));
        assert!(!rows.contains("Budget tips"));
    }

    #[test]
    fn test_load_rows_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let view = ViewState::default();
        let request = PostsRequest::from_pagination(&view.pagination);
        let err = load_rows(&dir.path().join("nope.json"), &view, &request).unwrap_err();
        assert!(err.starts_with("reading response file"));
    }

    #[test]
    fn test_load_rows_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let view = ViewState::default();
        let request = PostsRequest::from_pagination(&view.pagination);
        let err = load_rows(file.path(), &view, &request).unwrap_err();
        assert!(err.contains("malformed response"));
    }
}
