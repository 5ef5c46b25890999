use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let route_icon = match &props.route {
        MainRoute::Home => "house",
        MainRoute::Requests => "file-lines",
        MainRoute::Stickers => "note-sticky",
        MainRoute::MasterData { .. } => "database",
        MainRoute::About => "circle-info",
        MainRoute::Login | MainRoute::NotFound => "link",
    };

    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{route_icon}"))}></i>
              {props.route.title()}
          </Link<MainRoute>>
      </li>
    }
}
