//! UI components for the posts page.

use posts_table::{PAGE_SIZE_OPTIONS, Pagination, Post, TAG_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Error banner shown above the controls.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="alert alert-error" role="alert">
            { &props.message }
        </div>
    }
}

/// Free-text search input.
#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <input
            class="search-input"
            type="search"
            placeholder="Search posts"
            value={props.value.clone()}
            oninput={on_input}
        />
    }
}

/// Multi-select tag filter.
#[derive(Properties, PartialEq)]
pub struct TagSelectProps {
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(TagSelect)]
pub fn tag_select(props: &TagSelectProps) -> Html {
    let on_clear_click = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="tag-select">
            if props.selected.is_empty() {
                <span class="placeholder">{ "Select tags" }</span>
            }
            { for TAG_OPTIONS.iter().map(|option| {
                let selected = props.selected.iter().any(|t| t == option.value);
                let onclick = {
                    let on_toggle = props.on_toggle.clone();
                    let value = option.value.to_string();
                    Callback::from(move |_: MouseEvent| on_toggle.emit(value.clone()))
                };
                html! {
                    <button
                        class={classes!("tag-option", selected.then_some("selected"))}
                        aria-pressed={selected.to_string()}
                        {onclick}
                    >
                        { option.label }
                    </button>
                }
            })}
            if !props.selected.is_empty() {
                <button class="tag-clear" title="Clear tags" onclick={on_clear_click}>
                    { "\u{00D7}" }
                </button>
            }
        </div>
    }
}

/// The posts table.
#[derive(Properties, PartialEq)]
pub struct PostsTableProps {
    pub posts: Vec<Post>,
    pub loading: bool,
}

#[function_component(PostsTable)]
pub fn posts_table(props: &PostsTableProps) -> Html {
    html! {
        <div class={classes!("table-wrapper", props.loading.then_some("loading"))}>
            if props.loading {
                <div class="spinner">{ "Loading..." }</div>
            }
            <table class="posts-table">
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ "Title" }</th>
                        <th>{ "Body" }</th>
                        <th>{ "Tags" }</th>
                    </tr>
                </thead>
                <tbody>
                    if props.posts.is_empty() && !props.loading {
                        <tr class="empty-row">
                            <td colspan="4">{ "No posts" }</td>
                        </tr>
                    }
                    { for props.posts.iter().map(|post| html! {
                        <tr key={post.id}>
                            <td>{ post.id.to_string() }</td>
                            <td>{ &post.title }</td>
                            <td>{ &post.body }</td>
                            <td>{ post.tags_label() }</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

/// Text shown between the pager buttons.
pub fn page_label(pagination: &Pagination, total: u32) -> String {
    format!(
        "Page {} of {}",
        pagination.current,
        pagination.page_count(total)
    )
}

/// Page sizes for the selector, including `current` when it is not a preset.
pub fn page_size_options(current: u32) -> Vec<u32> {
    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
        sizes.sort_unstable();
    }
    sizes
}

/// Previous/next buttons and the page-size selector.
#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub pagination: Pagination,
    pub total: u32,
    pub on_page: Callback<u32>,
    pub on_page_size: Callback<u32>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let current = props.pagination.current;

    let on_previous = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(current.saturating_sub(1).max(1)))
    };

    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(current.saturating_add(1)))
    };

    let on_size_change = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = target.value().parse::<u32>() {
                on_page_size.emit(size);
            }
        })
    };

    html! {
        <div class="pager">
            <button
                class="pager-button"
                disabled={!props.pagination.has_previous()}
                onclick={on_previous}
            >
                { "\u{2039} Prev" }
            </button>
            <span class="pager-label">{ page_label(&props.pagination, props.total) }</span>
            <button
                class="pager-button"
                disabled={!props.pagination.has_next(props.total)}
                onclick={on_next}
            >
                { "Next \u{203A}" }
            </button>
            <select class="page-size-select" onchange={on_size_change}>
                { for page_size_options(props.pagination.page_size).into_iter().map(|size| html! {
                    <option
                        value={size.to_string()}
                        selected={size == props.pagination.page_size}
                    >
                        { format!("{size} / page") }
                    </option>
                })}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(&Pagination::new(2, 10), 251), "Page 2 of 26");
        assert_eq!(page_label(&Pagination::default(), 0), "Page 1 of 1");
    }

    #[test]
    fn test_page_size_options_presets() {
        assert_eq!(page_size_options(20), vec![10, 20, 50, 100]);
    }

    #[test]
    fn test_page_size_options_include_custom_size() {
        assert_eq!(page_size_options(25), vec![10, 20, 25, 50, 100]);
        assert_eq!(page_size_options(3), vec![3, 10, 20, 50, 100]);
    }
}
