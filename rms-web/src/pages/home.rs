use crate::{models::app_state::AppState, routes::MainRoute};
use shared::RecordKind;
use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

struct HomeCard {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    route: MainRoute,
}

fn home_cards() -> Vec<HomeCard> {
    let mut cards = vec![
        HomeCard {
            title: "Requests",
            icon: "fa-file-lines",
            description: "Browse incoming requests and register new ones.",
            route: MainRoute::Requests,
        },
        HomeCard {
            title: "Stickers",
            icon: "fa-note-sticky",
            description: "Group requests onto sticker canvases for printing.",
            route: MainRoute::Stickers,
        },
    ];
    cards.extend(RecordKind::master_data().map(|kind| HomeCard {
        title: kind.title(),
        icon: "fa-database",
        description: "Maintain the master data used by requests.",
        route: MainRoute::master_data(kind),
    }));
    cards
}

/// Home page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let user_name = use_selector(AppState::user_name);
    let greeting = (*user_name)
        .as_ref()
        .map_or_else(|| "Welcome".to_string(), |name| format!("Welcome, {name}"));

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ greeting }</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for home_cards().into_iter().map(|card| html! {
                    <div class="card bg-base-200 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                <i class={yew::classes!("fa-solid", card.icon)}></i>
                                { card.title }
                            </h2>
                            <p>{ card.description }</p>
                            <div class="card-actions justify-end">
                                <Link<MainRoute> to={card.route} classes="btn btn-primary">
                                    { "Open" }
                                </Link<MainRoute>>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
