use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p>{ "The page you requested does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                { "Back to home" }
            </Link<MainRoute>>
        </div>
    }
}
