mod api;
mod app;
mod components;
mod guards;
mod pages;
mod routes;
mod settings;
mod storage;
mod toast;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("finanzas frontend starting");
    yew::Renderer::<app::App>::new().render();
}
