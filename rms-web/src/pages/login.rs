use crate::{
    components::ErrorAlert,
    models::app_state::{AppState, SessionHandle},
    routes::MainRoute,
};
use shared::LoginState;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let session = use_context::<SessionHandle>();
    let last_error = use_selector(|state: &AppState| state.session.last_error.clone());
    let pending = use_selector(|state: &AppState| state.session.pending);
    let navigator = use_navigator();

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(session) = session.clone() else {
                return;
            };
            let username_value = (*username_handle).clone();
            let password_value = (*password_handle).clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let state = session.login(&username_value, &password_value).await;
                if state == LoginState::LoggedIn {
                    if let Some(ref nav) = navigator_handle {
                        nav.push(&MainRoute::Home);
                    }
                }
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *pending;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Records Management"}</h2>
                    <ErrorAlert message={(*last_error).clone()} />
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            autocomplete="username"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
