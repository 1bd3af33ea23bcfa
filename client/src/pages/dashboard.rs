//! Authenticated dashboard with the navigation sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the root once a session token exists. Issues exactly one menu
//! fetch with that token; there is no polling or retry.

use leptos::prelude::*;

use crate::components::menu_tree::MenuTree;
use crate::config::ApiConfig;
use crate::net::types::{MenuNode, SessionToken};
use crate::state::menu::{EMPTY_MENU_MESSAGE, MenuPanel, menu_panel};

#[component]
pub fn DashboardPage(token: SessionToken) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let menus = RwSignal::new(None::<Vec<MenuNode>>);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::net::api;
        use crate::state::menu::MENU_FETCH_FAILED_NOTICE;
        use crate::util::notice;

        // The request itself is not aborted on unmount; its result is dropped.
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_menus(&config, &token).await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(items) => menus.set(Some(items)),
                Err(e) => notice::report(MENU_FETCH_FAILED_NOTICE, &e),
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
    }

    view! {
        <div class="dashboard-page">
            <aside class="dashboard-page__sidebar">
                <h4 class="dashboard-page__nav-title">"Navigation"</h4>
                {move || match menu_panel(menus.get()) {
                    MenuPanel::Tree(items) => view! { <MenuTree menus=items/> }.into_any(),
                    MenuPanel::Empty => {
                        view! { <p class="dashboard-page__empty">{EMPTY_MENU_MESSAGE}</p> }.into_any()
                    }
                }}
            </aside>
            <main class="dashboard-page__main">
                <h2>"Dashboard"</h2>
            </main>
        </div>
    }
}
