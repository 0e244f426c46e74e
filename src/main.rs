mod app;
mod components;
mod models;
mod pages;
mod routes;
mod services;
mod utils;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Ecoleta starting...");

    yew::Renderer::<App>::new().render();
}
