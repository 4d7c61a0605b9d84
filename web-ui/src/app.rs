//! Router shell and page chrome.

use posts_table::ApiConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::page::HomePage;

/// Client-side routes.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h2>{ "Page not found" }</h2>
            <Link<Route> to={Route::Home}>{ "Back to posts" }</Link<Route>>
        </div>
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let api_base = ApiConfig::from_build_env().base_url;

    html! {
        <BrowserRouter>
            <div class="app">
                <header class="header">
                    <h1>{ "Posts" }</h1>
                </header>

                <main class="main">
                    <Switch<Route> render={switch} />
                </main>

                <footer class="footer">
                    <span>{ format!("Data from {api_base}") }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </footer>
            </div>
        </BrowserRouter>
    }
}
