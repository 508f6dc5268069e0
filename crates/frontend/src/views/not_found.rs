use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-100">
            <h1 class="text-4xl font-bold text-gray-900 mb-2">{"404"}</h1>
            <p class="text-gray-600 mb-6">{"This page does not exist."}</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("text-blue-600", "hover:underline")}>
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
