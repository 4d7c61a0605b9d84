//! View state mirrored in the URL query string.
//!
//! Query format:
//! ```text
//! ?page=2&pageSize=20&tags=health%2Cscience&search=love
//! ```
//!
//! - `page` - 1-based page number (default 1)
//! - `pageSize` - rows per page (default 10, at most 100)
//! - `tags` - comma-joined tag filter (omitted when empty)
//! - `search` - free-text search (omitted when empty)

use std::num::IntErrorKind;

use url::form_urlencoded;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 20, 50, 100];

const KEY_PAGE: &str = "page";
const KEY_PAGE_SIZE: &str = "pageSize";
const KEY_TAGS: &str = "tags";
const KEY_SEARCH: &str = "search";

/// A selectable tag in the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TAG_OPTIONS: &[TagOption] = &[
    TagOption {
        value: "technology",
        label: "Technology",
    },
    TagOption {
        value: "health",
        label: "Health",
    },
    TagOption {
        value: "science",
        label: "Science",
    },
    TagOption {
        value: "finance",
        label: "Finance",
    },
];

/// Current page and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// 1-based page number.
    pub current: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(current: u32, page_size: u32) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of records before the current page.
    pub fn skip(&self) -> u32 {
        self.current.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` records. Never less than 1.
    pub fn page_count(&self, total: u32) -> u32 {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, total: u32) -> bool {
        self.current < self.page_count(total)
    }
}

/// Everything the page shows that is not fetched data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub pagination: Pagination,
    /// Selected tags in selection order, without duplicates.
    pub selected_tags: Vec<String>,
    pub search_text: String,
}

impl ViewState {
    /// Parse a query string. A leading `?` is optional.
    ///
    /// Never fails: missing or unusable values fall back to defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut page = None;
        let mut page_size = None;
        let mut tags = None;
        let mut search = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                KEY_PAGE => page = Some(value.into_owned()),
                KEY_PAGE_SIZE => page_size = Some(value.into_owned()),
                KEY_TAGS => tags = Some(value.into_owned()),
                KEY_SEARCH => search = Some(value.into_owned()),
                _ => {}
            }
        }

        let current = page
            .as_deref()
            .and_then(parse_leading_positive)
            .unwrap_or(DEFAULT_PAGE);
        let page_size = page_size
            .as_deref()
            .and_then(parse_leading_positive)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            pagination: Pagination::new(current, page_size),
            selected_tags: tags.as_deref().map(split_tags).unwrap_or_default(),
            search_text: search.unwrap_or_default(),
        }
    }

    /// Key/value pairs in URL order. Empty tags and search are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (KEY_PAGE, self.pagination.current.to_string()),
            (KEY_PAGE_SIZE, self.pagination.page_size.to_string()),
        ];
        if !self.selected_tags.is_empty() {
            pairs.push((KEY_TAGS, self.selected_tags.join(",")));
        }
        if !self.search_text.is_empty() {
            pairs.push((KEY_SEARCH, self.search_text.clone()));
        }
        pairs
    }

    /// Encoded query string without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            pagination: Pagination::new(page, self.pagination.page_size),
            ..self.clone()
        }
    }

    /// Changing the page size starts over at page 1.
    pub fn with_page_size(&self, page_size: u32) -> Self {
        Self {
            pagination: Pagination::new(DEFAULT_PAGE, page_size),
            ..self.clone()
        }
    }

    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = Vec::new();
        for tag in tags {
            push_unique(&mut selected, tag.as_ref());
        }
        Self {
            selected_tags: selected,
            ..self.clone()
        }
    }

    /// Select `tag` if it is not selected, otherwise deselect it.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if let Some(idx) = next.selected_tags.iter().position(|t| t == tag) {
            next.selected_tags.remove(idx);
        } else {
            push_unique(&mut next.selected_tags, tag);
        }
        next
    }

    pub fn with_search(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self.clone()
        }
    }
}

/// Parse the leading run of ASCII digits, rejecting zero.
///
/// An optional `+` may precede the digits. Runs too large for `u32`
/// saturate to `u32::MAX`.
fn parse_leading_positive(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let parsed = match value[..end].parse::<u32>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => return None,
    };
    Some(parsed).filter(|n| *n > 0)
}

fn split_tags(value: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for tag in value.split(',') {
        push_unique(&mut tags, tag);
    }
    tags
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    let tag = tag.trim();
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
