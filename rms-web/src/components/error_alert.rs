use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Alert for a failed backend call; renders nothing without a message.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="alert alert-error" role="alert">
                <i class="fa-solid fa-triangle-exclamation"></i>
                <span>{message.clone()}</span>
            </div>
        },
        None => html! {},
    }
}
