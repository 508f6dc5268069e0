//! Dashboard view

use crate::components::{NavBar, Spinner};
use crate::services::DashboardService;
use shopdash_http::types::DashboardStats;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded(DashboardStats),
    Failed(String),
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: &'static str,
    value: String,
    #[prop_or_default]
    highlight: bool,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let value_class = if props.highlight {
        "text-3xl font-bold text-red-600"
    } else {
        "text-3xl font-bold text-gray-900"
    };

    html! {
        <div class="bg-white rounded-lg shadow p-6">
            <p class="text-sm text-gray-500 mb-1">{props.label}</p>
            <p class={value_class}>{&props.value}</p>
        </div>
    }
}

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match DashboardService::new().stats().await {
                    Ok(stats) => state.set(LoadState::Loaded(stats)),
                    Err(e) => {
                        tracing::error!("Failed to load dashboard stats: {e}");
                        state.set(LoadState::Failed(e.to_string()));
                    }
                }
            });
        });
    }

    let content = match &*state {
        LoadState::Loading => html! { <Spinner text={Some("Loading dashboard...".to_string())} /> },
        LoadState::Failed(error) => html! {
            <div class="p-4 bg-red-50 text-red-700 rounded">{error}</div>
        },
        LoadState::Loaded(stats) => html! {
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard label="Products" value={stats.total_products.to_string()} />
                <StatCard label="Units in stock" value={stats.total_stock.to_string()} />
                <StatCard label="Low stock" value={stats.low_stock.to_string()} highlight={stats.low_stock > 0} />
                <StatCard label="Inventory value" value={format!("{:.2}", stats.inventory_value)} />
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <NavBar />
            <main class="max-w-7xl mx-auto px-4 py-8">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">{"Dashboard"}</h2>
                {content}
            </main>
        </div>
    }
}
