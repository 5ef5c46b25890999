use crate::{components::HeaderNavItem, models::app_state::AppState, routes::MainRoute};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user_name = use_selector(AppState::user_name);
    let header_routes = MainRoute::header_routes();

    let render_routes = |routes: &[MainRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <HeaderNavItem
                    current_route={props.current_route.clone()}
                    route={route.clone()}
                />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {"RMS"}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end lg:hidden">
                <button class="btn btn-soft">
                <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                { render_routes(&header_routes) }
                </ul>
            </div>
            <ul class="hidden menu lg:menu-horizontal">
                { render_routes(&header_routes) }
            </ul>
            <div class="hidden sm:flex items-center gap-2">
                {
                    (*user_name).as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        },
                        |name| html! {
                            <>
                                <i class="fa-solid fa-user"></i>
                                <span class="text-sm text-base-content/80">{ name.clone() }</span>
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
