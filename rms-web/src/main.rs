mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;

#[cfg(test)]
mod routes_test;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::log_1(&format!("Logger already initialised: {err}").into());
    }

    log::info!("Starting RMS web application");

    Renderer::<Root>::new().render();
}
