use web_sys::HtmlInputElement;
use yew::{Callback, Html, InputEvent, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or("text")]
    pub input_type: &'static str,
    #[prop_or_default]
    pub required: bool,
}

/// Labelled input that reports its text on every keystroke.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <div class="form-control">
            <label class="label" for={props.id}>
                <span class="label-text">{props.label}</span>
            </label>
            <input
                id={props.id}
                class="input input-bordered input-sm"
                type={props.input_type}
                required={props.required}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
