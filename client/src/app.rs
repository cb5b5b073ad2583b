//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::config::{API_BASE_META_NAME, ApiConfig};
use crate::net::api::ApiClient;
use crate::pages::{
    analytics::AnalyticsPage, customizer::CustomizerPage, home::HomePage, posts::PostsPage, schedule::SchedulePage,
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend origin is written into a meta tag so the hydrated client
/// talks to the same API the server was configured with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::resolve);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=config.base_url().to_owned()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::resolve);
    provide_context(ApiClient::new(&config));

    view! {
        <Stylesheet id="leptos" href="/pkg/socialscheduler.css"/>
        <Title text="SocialScheduler"/>

        <Router>
            <Navigation/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("schedule") view=SchedulePage/>
                    <Route path=StaticSegment("posts") view=PostsPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("customizer") view=CustomizerPage/>
                </Routes>
            </main>
        </Router>
    }
}
