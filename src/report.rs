//! Plain-text rendering of table rows.

use crate::post::Post;

const TITLE_WIDTH: usize = 40;
const BODY_WIDTH: usize = 60;

/// Render posts as aligned `ID | Title | Body | Tags` lines with a header.
///
/// Long titles and bodies are cut and end in `...`.
pub fn render_rows(posts: &[&Post]) -> String {
    let mut out = format!(
        "{:>5} | {:<tw$} | {:<bw$} | Tags\n",
        "ID",
        "Title",
        "Body",
        tw = TITLE_WIDTH,
        bw = BODY_WIDTH
    );
    for post in posts {
        out.push_str(&format!(
            "{:>5} | {:<tw$} | {:<bw$} | {}\n",
            post.id,
            truncate(&post.title, TITLE_WIDTH),
            truncate(&post.body, BODY_WIDTH),
            post.tags_label(),
            tw = TITLE_WIDTH,
            bw = BODY_WIDTH
        ));
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let out = render_rows(&[]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("   ID | Title"));
        assert!(out.trim_end().ends_with("| Tags"));
    }

    #[test]
    fn test_row_contents() {
        let post = Post {
            id: 42,
            title: "Short".to_string(),
            body: "x".repeat(100),
            tags: vec!["health".to_string(), "science".to_string()],
        };
        let out = render_rows(&[&post]);
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("   42 | Short"));
        assert!(row.contains(&format!("{}...", "x".repeat(BODY_WIDTH - 3))));
        assert!(row.ends_with("| health, science"));
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo", 5), "héllo");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
