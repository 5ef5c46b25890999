use crate::containers::header::Header;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Page title follows the active route
    {
        let title = props
            .current_route
            .as_ref()
            .map_or_else(|| "RMS".to_string(), |route| format!("{} · RMS", route.title()));
        use_effect_with(title, |title| {
            if let Some(document) = window().and_then(|window| window.document()) {
                document.set_title(title);
            }
            || {}
        });
    }

    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "p-4",
                "container",
                "mx-auto"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"Records Management System · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
