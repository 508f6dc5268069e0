//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
    /// Center in the viewport instead of the enclosing panel
    #[prop_or_default]
    pub full_page: bool,
}

fn container_class(full_page: bool) -> &'static str {
    if full_page {
        "flex flex-col items-center justify-center min-h-screen bg-gray-100"
    } else {
        "text-center p-10"
    }
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class={container_class(props.full_page)}>
            <div class="w-10 h-10 border-4 border-gray-200 border-t-blue-500 rounded-full animate-spin mx-auto mb-4"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-600 text-sm m-0">{text}</p>
            }
        </div>
    }
}
