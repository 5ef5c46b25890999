use crate::{
    api::RmsClient,
    components::{ErrorAlert, Loading},
    containers::layout::Layout,
    models::app_state::{AppState, SessionHandle},
    pages::*,
};
use shared::{GuardedRoute, LoginState, Navigation, NavigationGuard, RecordKind};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/requests")]
    Requests,
    #[at("/stickers")]
    Stickers,
    #[at("/master-data/:record_name")]
    MasterData { record_name: String },
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Route name as used in navigation and logs.
    pub fn name(&self) -> &'static str {
        match self {
            MainRoute::Home => "home",
            MainRoute::Login => "login",
            MainRoute::Requests => "requests",
            MainRoute::Stickers => "stickers",
            MainRoute::MasterData { .. } => "master-data",
            MainRoute::About => "about",
            MainRoute::NotFound => "not-found",
        }
    }

    /// Master-data route for a record kind.
    pub fn master_data(kind: RecordKind) -> Self {
        MainRoute::MasterData {
            record_name: kind.slug().to_string(),
        }
    }

    /// Header label for navigation links.
    pub fn title(&self) -> String {
        match self {
            MainRoute::Home => "Home".to_string(),
            MainRoute::Login => "Sign in".to_string(),
            MainRoute::Requests => "Requests".to_string(),
            MainRoute::Stickers => "Stickers".to_string(),
            MainRoute::MasterData { record_name } => record_name
                .parse::<RecordKind>()
                .map_or_else(|_| record_name.clone(), |kind| kind.title().to_string()),
            MainRoute::About => "About".to_string(),
            MainRoute::NotFound => "Not found".to_string(),
        }
    }

    /// Links shown in the navigation header, in display order.
    pub fn header_routes() -> Vec<MainRoute> {
        let mut routes = vec![MainRoute::Home, MainRoute::Requests, MainRoute::Stickers];
        routes.extend(RecordKind::master_data().map(MainRoute::master_data));
        routes.push(MainRoute::About);
        routes
    }
}

impl GuardedRoute for MainRoute {
    fn requires_auth(&self) -> bool {
        !matches!(self, MainRoute::Login | MainRoute::NotFound)
    }

    fn login_route() -> Self {
        MainRoute::Login
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGateProps {
    pub route: MainRoute,
}

/// Runs the navigation guard for `route` and renders its view once allowed.
#[function_component(RouteGate)]
fn route_gate(props: &RouteGateProps) -> Html {
    let session = use_context::<SessionHandle>();
    let login_state = use_selector(|state: &AppState| state.session.login_state);

    {
        let session = session.clone();
        use_effect_with(*login_state, move |state| {
            if let (LoginState::Unknown, Some(session)) = (*state, session) {
                spawn_local(async move {
                    NavigationGuard::new(session).resolve().await;
                });
            }
            || {}
        });
    }

    if session.is_none() {
        log("Route gate rendered without a session provider");
        return html! { <ErrorAlert message={Some("Session unavailable".to_string())} /> };
    }
    if *login_state == LoginState::Unknown {
        return html! { <Loading /> };
    }

    match NavigationGuard::<RmsClient>::decide(&props.route, *login_state) {
        Navigation::Redirect(target) => html! { <Redirect<MainRoute> to={target} /> },
        Navigation::Proceed => route_view(&props.route, *login_state),
    }
}

fn route_view(route: &MainRoute, login_state: LoginState) -> Html {
    let current_route = Some(route.clone());
    match route {
        MainRoute::Login => {
            if login_state.is_logged_in() {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Home => html! {
            <Layout {current_route}><HomePage /></Layout>
        },
        MainRoute::Requests => html! {
            <Layout {current_route}><RequestsPage /></Layout>
        },
        MainRoute::Stickers => html! {
            <Layout {current_route}><StickersPage /></Layout>
        },
        MainRoute::MasterData { record_name } => {
            match record_name.parse::<RecordKind>() {
                Ok(kind) if kind.is_master_data() => html! {
                    <Layout {current_route}><MasterDataPage {kind} /></Layout>
                },
                _ => html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> },
            }
        }
        MainRoute::About => html! {
            <Layout {current_route}><AboutPage /></Layout>
        },
        MainRoute::NotFound => html! {
            <Layout {current_route}><ErrorPage /></Layout>
        },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {}", route.name()).as_str());
    html! { <RouteGate {route} /> }
}
