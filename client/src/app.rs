//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META, ApiConfig};
use crate::net::types::SessionToken;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{RootView, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// Writes the API base URL from context into a `<meta>` tag so the hydrated
/// client talks to the same backend.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api = ApiConfig::resolve();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api.base_url().to_owned()/>
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
/// Provides the API config context and mounts the session root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::resolve());

    view! {
        <Stylesheet id="leptos" href="/pkg/rolegate.css"/>
        <Title text="Rolegate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionRoot/>
            </Routes>
        </Router>
    }
}

/// Holds the session token and switches between login and dashboard.
#[component]
pub fn SessionRoot() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    let on_login = Callback::new(move |token: SessionToken| session.update(|s| s.sign_in(token)));

    move || match session.with(SessionState::view) {
        RootView::Login => view! { <LoginPage on_login=on_login/> }.into_any(),
        RootView::Dashboard(token) => view! { <DashboardPage token=token/> }.into_any(),
    }
}
