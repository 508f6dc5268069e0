//! Route rendering behind the navigation guard

use super::guard::{guard_with_store, GuardDecision};
use super::Route;
use crate::auth::token::now_unix;
use crate::auth::{use_auth, AuthAction, LocalTokenStore};
use crate::components::Spinner;
use crate::views::{DashboardView, LoginView, NotFoundView, ProductsView};
use yew::prelude::*;
use yew_router::prelude::*;

/// `Switch` render function
pub fn switch(route: Route) -> Html {
    html! { <GuardedRoute {route} /> }
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub route: Route,
}

/// Runs the guard for `route` and renders either a redirect or the view.
///
/// Subscribes to the auth context, so signing out or an expired session
/// re-evaluates the guard for the current route.
#[function_component(GuardedRoute)]
pub fn guarded_route(props: &GuardedRouteProps) -> Html {
    let auth = use_auth();
    let decision = (!auth.is_loading)
        .then(|| guard_with_store(&props.route, &LocalTokenStore, now_unix()));

    // The guard found the stored token gone while the context still holds a session
    {
        let auth = auth.clone();
        let stale = auth.session.is_some()
            && decision == Some(GuardDecision::Redirect(Route::Login));
        use_effect_with(stale, move |stale| {
            if *stale {
                auth.dispatch(AuthAction::ValidateToken);
            }
        });
    }

    match decision {
        None => html! { <Spinner text={Some("Checking authentication...".to_string())} full_page={true} /> },
        Some(GuardDecision::Redirect(to)) => html! { <Redirect<Route> {to} /> },
        Some(GuardDecision::Allow) => match props.route {
            Route::Login => html! { <LoginView /> },
            Route::Dashboard => html! { <DashboardView /> },
            Route::Products => html! { <ProductsView /> },
            // Root always redirects
            Route::Root | Route::NotFound => html! { <NotFoundView /> },
        },
    }
}
