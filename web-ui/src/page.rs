//! The posts page: URL-driven view state, fetching and layout.

use posts_table::{
    ApiConfig, FetchGeneration, FetchState, Post, PostsRequest, ViewState, filter_posts,
};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_posts;
use crate::app::Route;
use crate::components::{ErrorBanner, Pager, PostsTable, SearchBox, TagSelect};

/// How a view change is written to the browser history.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum HistoryMode {
    Push,
    /// Used while typing so each keystroke does not add an entry.
    Replace,
}

/// Page listing posts with search, tag filter and pager.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let config = use_memo((), |_| ApiConfig::from_build_env());
    let fetch_state = use_state(FetchState::default);
    let generation = use_mut_ref(FetchGeneration::default);

    let view = ViewState::from_query(location.as_ref().map(|l| l.query_str()).unwrap_or(""));
    let request = PostsRequest::from_pagination(&view.pagination);

    // Fetch whenever the requested slice changes
    {
        let fetch_state = fetch_state.clone();
        let generation = generation.clone();
        let config = config.clone();

        use_effect_with(request, move |request| {
            let request = *request;
            let ticket = generation.borrow_mut().issue();

            let previous = (*fetch_state).clone();
            fetch_state.set(previous.start());

            spawn_local(async move {
                let result = fetch_posts(&config, request).await;
                if let Err(e) = &result {
                    log::error!("fetching posts failed: {e}");
                }

                let completed = generation.borrow().complete(ticket, &previous, result);
                match completed {
                    Some(next) => {
                        log::info!(
                            "showing {} posts (skip={}, total={})",
                            next.posts.len(),
                            request.skip,
                            next.total
                        );
                        fetch_state.set(next);
                    }
                    None => log::debug!(
                        "dropping stale response for skip={} limit={}",
                        request.skip,
                        request.limit
                    ),
                }
            });

            || ()
        });
    }

    let navigate = {
        let navigator = navigator.clone();
        Callback::from(move |(next, mode): (ViewState, HistoryMode)| {
            let Some(navigator) = &navigator else {
                log::warn!("no router context, URL not updated");
                return;
            };
            let pairs = next.query_pairs();
            let result = match mode {
                HistoryMode::Push => navigator.push_with_query(&Route::Home, &pairs),
                HistoryMode::Replace => navigator.replace_with_query(&Route::Home, &pairs),
            };
            if let Err(e) = result {
                log::error!("updating URL failed: {e}");
            }
        })
    };

    let on_search = {
        let navigate = navigate.clone();
        let view = view.clone();
        Callback::from(move |text: String| {
            navigate.emit((view.with_search(text), HistoryMode::Replace));
        })
    };

    let on_toggle_tag = {
        let navigate = navigate.clone();
        let view = view.clone();
        Callback::from(move |tag: String| {
            navigate.emit((view.toggle_tag(&tag), HistoryMode::Push));
        })
    };

    let on_clear_tags = {
        let navigate = navigate.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            navigate.emit((view.with_tags(Vec::<String>::new()), HistoryMode::Push));
        })
    };

    let on_page = {
        let navigate = navigate.clone();
        let view = view.clone();
        Callback::from(move |page: u32| {
            navigate.emit((view.with_page(page), HistoryMode::Push));
        })
    };

    let on_page_size = {
        let navigate = navigate.clone();
        let view = view.clone();
        Callback::from(move |size: u32| {
            navigate.emit((view.with_page_size(size), HistoryMode::Push));
        })
    };

    let shown: Vec<Post> = filter_posts(&fetch_state.posts, &view)
        .into_iter()
        .cloned()
        .collect();

    html! {
        <div class="posts-page">
            if let Some(message) = &fetch_state.error {
                <ErrorBanner message={message.clone()} />
            }
            <div class="controls">
                <SearchBox value={view.search_text.clone()} on_change={on_search} />
                <TagSelect
                    selected={view.selected_tags.clone()}
                    on_toggle={on_toggle_tag}
                    on_clear={on_clear_tags}
                />
            </div>
            <PostsTable posts={shown} loading={fetch_state.loading} />
            <Pager
                pagination={view.pagination}
                total={fetch_state.total}
                {on_page}
                {on_page_size}
            />
        </div>
    }
}
