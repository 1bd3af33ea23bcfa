//! Login page with username/password and optional role selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives [`LoginState`] from form events. The finished session token is
//! handed to the parent through `on_login`; the parent then unmounts this page.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::SessionToken;
use crate::state::login::{LOGIN_FAILED_NOTICE, LoginError, LoginState, SELECT_ROLE_FAILED_NOTICE};
use crate::util::notice;

#[component]
pub fn LoginPage(on_login: Callback<SessionToken>) -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let form = RwSignal::new(LoginState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(creds)) = form.try_update(LoginState::begin_login) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = api::login(&config.get_value(), &creds.username, &creds.password).await;
            match form.try_update(|f| f.finish_login(result)) {
                Some(Ok(Some(token))) => on_login.run(token),
                Some(Err(e)) => notice::report(LOGIN_FAILED_NOTICE, &e),
                Some(Ok(None)) | None => {}
            }
        });
    };

    let on_confirm = move |_| {
        let request = match form.try_update(LoginState::begin_role_confirmation) {
            Some(Ok(request)) => request,
            Some(Err(LoginError::Busy)) | None => return,
            Some(Err(e)) => {
                notice::report(SELECT_ROLE_FAILED_NOTICE, &e);
                return;
            }
        };

        leptos::task::spawn_local(async move {
            let result = api::select_role(&config.get_value(), &request.user_id, &request.selected_role_id).await;
            match form.try_update(|f| f.finish_role_selection(result)) {
                Some(Ok(token)) => on_login.run(token),
                Some(Err(e)) => notice::report(SELECT_ROLE_FAILED_NOTICE, &e),
                None => {}
            }
        });
    };

    let selected_value = move || {
        form.with(|f| f.selected_role.as_ref().map(ToString::to_string).unwrap_or_default())
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.username = value);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        "Login"
                    </button>
                </form>
                <Show when=move || form.with(|f| !f.roles().is_empty())>
                    <div class="role-select">
                        <h5>"Select Role:"</h5>
                        <select
                            class="role-select__input"
                            prop:value=selected_value
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.select_role_value(&value));
                            }
                        >
                            <option value="">"-- Select Role --"</option>
                            {move || {
                                form.with(|f| f.roles().to_vec())
                                    .into_iter()
                                    .map(|role| {
                                        view! { <option value=role.id.to_string()>{role.name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <button
                            class="login-button login-button--confirm"
                            disabled=move || !form.with(LoginState::can_confirm)
                            on:click=on_confirm
                        >
                            "Confirm Role"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
