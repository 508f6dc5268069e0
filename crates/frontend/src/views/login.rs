//! Login view

use crate::auth::token::now_unix;
use crate::auth::{use_auth, AuthAction, Session};
use crate::services::AuthApiService;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if username.trim().is_empty() || password.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            is_submitting.set(true);
            error.set(None);

            let auth = auth.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let username = username.trim().to_string();
            let password = (*password).clone();

            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().login(username, password).await {
                    // The guard moves us to the dashboard once the session is stored
                    Ok(response) => {
                        auth.dispatch(AuthAction::Login(Session::from_login(response, now_unix())))
                    }
                    Err(e) if e.is_unauthorized() => {
                        error.set(Some("Invalid username or password".to_string()));
                    }
                    Err(e) => {
                        tracing::error!("Login failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    // Explains why the user landed here after an expired session
    let notice = auth.session_expired.then(|| auth.error.clone()).flatten();

    html! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">{"Sign in to ShopDash"}</h1>

                if let Some(notice) = notice {
                    <div class="mb-4 p-3 bg-yellow-50 text-yellow-800 rounded text-sm">{notice}</div>
                }
                if let Some(error) = &*error {
                    <div class="mb-4 p-3 bg-red-50 text-red-700 rounded text-sm">{error}</div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="username" class="block text-sm font-medium text-gray-700 mb-1">{"Username"}</label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            value={(*username).clone()}
                            oninput={on_username}
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={on_password}
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white font-medium py-2 px-4 rounded-lg transition-colors"
                    >
                        { if *is_submitting { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
