use shopdash_frontend::{logging, App};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(api = shopdash_frontend::AppConfig::api_base_url(), "Starting ShopDash");
    yew::Renderer::<App>::new().render();
}
