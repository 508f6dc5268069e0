//! Top navigation bar shown on protected views

use crate::auth::{use_auth, AuthAction};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn link_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 text-sm font-medium text-blue-600 border-b-2 border-blue-600"
    } else {
        "px-3 py-2 text-sm font-medium text-gray-600 hover:text-gray-900"
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let auth = use_auth();
    let current = use_route::<Route>();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.dispatch(AuthAction::Logout);
        })
    };

    let greeting = auth
        .session
        .as_ref()
        .and_then(|s| s.user.as_ref())
        .map(|user| format!("Signed in as {}", user.display_name()));

    html! {
        <nav class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 flex justify-between h-16 items-center">
                <div class="flex items-center gap-6">
                    <h1 class="text-xl font-bold text-gray-900">{"ShopDash"}</h1>
                    <Link<Route> to={Route::Dashboard} classes={classes!(link_class(current == Some(Route::Dashboard)))}>
                        {"Dashboard"}
                    </Link<Route>>
                    <Link<Route> to={Route::Products} classes={classes!(link_class(current == Some(Route::Products)))}>
                        {"Products"}
                    </Link<Route>>
                </div>
                <div class="flex items-center gap-4">
                    if let Some(greeting) = greeting {
                        <span class="text-sm text-gray-500">{greeting}</span>
                    }
                    <button
                        onclick={on_logout}
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg transition-colors"
                    >
                        {"Logout"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
