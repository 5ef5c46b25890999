use shared::reference::{self, RefCategory, RefValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::app_state::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct RefSelectProps {
    pub category: RefCategory,
    pub label: &'static str,
    pub selected: Option<i64>,
    pub on_select: Callback<Option<i64>>,
}

/// Dropdown filled from the reference values of one category.
#[function_component(RefSelect)]
pub fn ref_select(props: &RefSelectProps) -> Html {
    let session = use_context::<SessionHandle>();
    let values = use_state(Vec::<RefValue>::new);
    let error = use_state(|| None::<String>);

    {
        let values = values.clone();
        let error = error.clone();
        use_effect_with(props.category, move |category| {
            if let Some(session) = session {
                let category = *category;
                spawn_local(async move {
                    match session.backend().ref_values(category).await {
                        Ok(loaded) => values.set(loaded),
                        Err(err) => {
                            log::warn!("loading {category} values failed: {err}");
                            error.set(Some(reference::failure_message(&err)));
                        }
                    }
                });
            }
            || {}
        });
    }

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_select.emit(select.value().parse::<i64>().ok());
            }
        })
    };

    let id = format!("ref-{}", props.category);
    html! {
        <div class="form-control">
            <label class="label" for={id.clone()}>
                <span class="label-text">{props.label}</span>
            </label>
            <select {id} class="select select-bordered select-sm" {onchange}>
                <option value="" selected={props.selected.is_none()}>{"Select…"}</option>
                { for values.iter().map(|value| html! {
                    <option
                        value={value.id.to_string()}
                        selected={props.selected == Some(value.id)}
                    >
                        {value.name.clone()}
                    </option>
                }) }
            </select>
            if let Some(message) = &*error {
                <span class="label-text-alt text-error">{message.clone()}</span>
            }
        </div>
    }
}
