//! Tag and search filters applied to a fetched page.

use crate::post::Post;
use crate::view_state::ViewState;

/// True when nothing is selected or the post carries any selected tag.
pub fn matches_tags(post: &Post, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|tag| post.has_tag(tag))
}

/// Case-insensitive substring match on title or body. Blank search matches all.
pub fn matches_search(post: &Post, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(&needle) || post.body.to_lowercase().contains(&needle)
}

/// Posts from `posts` that the current view should display, in order.
pub fn filter_posts<'a>(posts: &'a [Post], view: &ViewState) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| matches_tags(post, &view.selected_tags))
        .filter(|post| matches_search(post, &view.search_text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, body: &str, tags: &[&str]) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: body.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post(1, "Quantum leaps", "New results in physics.", &["science"]),
            post(2, "Market update", "Stocks rallied today.", &["finance", "technology"]),
            post(3, "Morning runs", "Why jogging helps.", &["health"]),
        ]
    }

    #[test]
    fn test_no_filters_keeps_all() {
        let posts = sample();
        let shown = filter_posts(&posts, &ViewState::default());
        assert_eq!(shown.len(), 3);
    }

    #[test]
    fn test_any_selected_tag_matches() {
        let posts = sample();
        let view = ViewState::default().with_tags(["technology", "health"]);
        let ids: Vec<u64> = filter_posts(&posts, &view).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_unmatched_tag_hides_all() {
        let posts = sample();
        let view = ViewState::default().with_tags(["history"]);
        assert!(filter_posts(&posts, &view).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let posts = sample();
        let view = ViewState::default().with_search("  STOCKS ");
        let ids: Vec<u64> = filter_posts(&posts, &view).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_search_matches_title() {
        let posts = sample();
        assert!(matches_search(&posts[0], "quantum"));
        assert!(!matches_search(&posts[0], "jogging"));
        assert!(matches_search(&posts[0], "   "));
    }

    #[test]
    fn test_tags_and_search_combine() {
        let posts = sample();
        let view = ViewState::default()
            .with_tags(["science", "health"])
            .with_search("why");
        let ids: Vec<u64> = filter_posts(&posts, &view).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }
}
