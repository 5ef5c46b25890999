use crate::{config::FrontendConfig, models::app_state::SessionHandle};
use yew::{Html, function_component, html, use_context};

/// About page component
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let backend = use_context::<SessionHandle>().map_or_else(
        || config.api_base_url.clone(),
        |session| session.backend().endpoints().base_url().to_string(),
    );

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "About" }</h1>
            <p>
                { "Records Management System: registers laboratory requests, maintains customer, \
                   area and sales person master data, and groups requests onto sticker canvases." }
            </p>
            <div class="stats shadow">
                <div class="stat">
                    <div class="stat-title">{ "Backend" }</div>
                    <div class="stat-value text-sm font-mono">{ backend }</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{ "Rows per page" }</div>
                    <div class="stat-value text-sm">{ config.batch_size }</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{ "Version" }</div>
                    <div class="stat-value text-sm">{ env!("CARGO_PKG_VERSION") }</div>
                </div>
            </div>
        </div>
    }
}
