use crate::api::RmsClient;
use crate::config::FrontendConfig;
use crate::models::app_state::{AppState, SessionHandle};
use crate::routes::{MainRoute, switch};
use wasm_bindgen::prelude::*;
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let config = use_memo((), |_| FrontendConfig::new());

    // One session store for the lifetime of the app; every change is
    // mirrored into the yewdux store so selectors re-render.
    let session = {
        let config = config.clone();
        use_memo((), move |_| {
            log(&format!("Using backend at {}", config.endpoints().base_url()));
            let session = SessionHandle::new(RmsClient::new(&config.api_base_url));
            session.subscribe(move |snapshot| {
                dispatch.set(AppState {
                    session: snapshot.clone(),
                });
            });
            session
        })
    };

    html! {
        <ContextProvider<FrontendConfig> context={(*config).clone()}>
            <ContextProvider<SessionHandle> context={(*session).clone()}>
                <BrowserRouter>
                    <Switch<MainRoute> render={switch} />
                </BrowserRouter>
            </ContextProvider<SessionHandle>>
        </ContextProvider<FrontendConfig>>
    }
}
