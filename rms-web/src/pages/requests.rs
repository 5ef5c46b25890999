use chrono::NaiveDate;
use serde_json::Value;
use shared::{
    RecordKind,
    models::{RequestCreate, RequestUpdate, RequestView},
    reference::RefCategory,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::{
    components::{ErrorAlert, FormField, RefSelect, RowAction},
    containers::records_browser::RecordsBrowser,
    models::app_state::{AppState, SessionHandle},
};

/// Form contents for a new request.
#[derive(Debug, Clone, Default, PartialEq)]
struct RequestDraft {
    date_received: String,
    customer_id: Option<i64>,
    area_id: Option<i64>,
    sales_person_id: Option<i64>,
    short_description: String,
    long_description: String,
    lpo_no: String,
    status: String,
    category: String,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl RequestDraft {
    /// Builds the create payload, or says which required field is missing.
    fn to_payload(&self, created_by: Option<String>) -> Result<RequestCreate, String> {
        let customer_id = self.customer_id.ok_or("Select a customer")?;
        let area_id = self.area_id.ok_or("Select an area")?;
        let date_received = match non_blank(&self.date_received) {
            Some(date) => Some(
                NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                    .map_err(|_| format!("Invalid date: {date}"))?,
            ),
            None => None,
        };
        Ok(RequestCreate {
            date_received,
            customer_id,
            area_id,
            long_description: non_blank(&self.long_description),
            short_description: non_blank(&self.short_description),
            sales_person_id: self.sales_person_id,
            status: non_blank(&self.status),
            category: non_blank(&self.category),
            lpo_no: non_blank(&self.lpo_no),
            created_by,
        })
    }
}

/// Requests page component
#[function_component(RequestsPage)]
pub fn requests_page() -> Html {
    let session = use_context::<SessionHandle>();
    let username = use_selector(|state: &AppState| {
        state.session.user.as_ref().map(|user| user.username.clone())
    });
    let reload = use_state(|| 0_u32);
    let draft = use_state(RequestDraft::default);
    let selected = use_state(|| None::<RequestView>);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    let on_action = {
        let session = session.clone();
        let selected = selected.clone();
        let error = error.clone();
        Callback::from(move |(_, row): (RowAction, Value)| {
            let (Some(session), Some(id)) = (session.clone(), row.get("id").and_then(Value::as_i64))
            else {
                return;
            };
            let selected = selected.clone();
            let error = error.clone();
            spawn_local(async move {
                match session
                    .backend()
                    .get_record::<RequestView>(RecordKind::Requests, id)
                    .await
                {
                    Ok(request) => selected.set(Some(request)),
                    Err(err) => error.set(Some(err.user_message("Failed to load request"))),
                }
            });
        })
    };

    let on_create = {
        let session = session.clone();
        let draft = draft.clone();
        let reload = reload.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(session) = session.clone() else {
                return;
            };
            let payload = match draft.to_payload((*username).clone()) {
                Ok(payload) => payload,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let draft = draft.clone();
            let reload = reload.clone();
            let error = error.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match session
                    .backend()
                    .create_record(RecordKind::Requests, &payload)
                    .await
                {
                    Ok(response) => {
                        let id = response.id_field("new_request_id");
                        log::info!("created request {id:?}");
                        notice.set(response.message.or_else(|| {
                            id.map(|id| format!("Request {id} created"))
                        }));
                        error.set(None);
                        draft.set(RequestDraft::default());
                        reload.set(*reload + 1);
                    }
                    Err(err) => error.set(Some(err.user_message("Request creation failed"))),
                }
            });
        })
    };

    let edit = |apply: fn(&mut RequestDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let select = |apply: fn(&mut RequestDraft, Option<i64>)| {
        let draft = draft.clone();
        Callback::from(move |value: Option<i64>| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };
    let on_updated = {
        let selected = selected.clone();
        let reload = reload.clone();
        Callback::from(move |request: RequestView| {
            selected.set(Some(request));
            reload.set(*reload + 1);
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Requests" }</h1>
            <ErrorAlert message={(*error).clone()} />
            if let Some(message) = &*notice {
                <div class="alert alert-success"><span>{message.clone()}</span></div>
            }

            if let Some(request) = &*selected {
                <RequestDetails key={request.id.to_string()} request={request.clone()} {on_close} {on_updated} />
            }

            <RecordsBrowser
                kind={RecordKind::Requests}
                reload={*reload}
                actions={vec![RowAction::View]}
                {on_action}
            />

            <form class="card bg-base-200 shadow" onsubmit={on_create}>
                <div class="card-body">
                    <h2 class="card-title">{ "New request" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <RefSelect category={RefCategory::Customer} label="Customer"
                            selected={draft.customer_id}
                            on_select={select(|draft, id| draft.customer_id = id)} />
                        <RefSelect category={RefCategory::Area} label="Area"
                            selected={draft.area_id}
                            on_select={select(|draft, id| draft.area_id = id)} />
                        <RefSelect category={RefCategory::SalesPerson} label="Sales person"
                            selected={draft.sales_person_id}
                            on_select={select(|draft, id| draft.sales_person_id = id)} />
                        <FormField id="date-received" label="Date received" input_type="date"
                            value={draft.date_received.clone()}
                            on_change={edit(|draft, value| draft.date_received = value)} />
                        <FormField id="lpo-no" label="LPO No."
                            value={draft.lpo_no.clone()}
                            on_change={edit(|draft, value| draft.lpo_no = value)} />
                        <FormField id="status" label="Status"
                            value={draft.status.clone()}
                            on_change={edit(|draft, value| draft.status = value)} />
                        <FormField id="category" label="Category"
                            value={draft.category.clone()}
                            on_change={edit(|draft, value| draft.category = value)} />
                        <FormField id="short-description" label="Short description"
                            value={draft.short_description.clone()}
                            on_change={edit(|draft, value| draft.short_description = value)} />
                        <FormField id="long-description" label="Long description"
                            value={draft.long_description.clone()}
                            on_change={edit(|draft, value| draft.long_description = value)} />
                    </div>
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary" type="submit">{ "Create request" }</button>
                    </div>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RequestDetailsProps {
    request: RequestView,
    on_close: Callback<()>,
    on_updated: Callback<RequestView>,
}

/// Details of one request with an inline status/category editor.
#[function_component(RequestDetails)]
fn request_details(props: &RequestDetailsProps) -> Html {
    let session = use_context::<SessionHandle>();
    let modified_by = use_selector(|state: &AppState| {
        state.session.user.as_ref().map(|user| user.username.clone())
    });
    let status = use_state(|| props.request.status.clone().unwrap_or_default());
    let category = use_state(|| props.request.category.clone().unwrap_or_default());
    let error = use_state(|| None::<String>);

    let on_save = {
        let id = props.request.id;
        let status = status.clone();
        let category = category.clone();
        let error = error.clone();
        let on_updated = props.on_updated.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(session) = session.clone() else {
                return;
            };
            let payload = RequestUpdate {
                status: non_blank(&status),
                category: non_blank(&category),
                modified_by: (*modified_by).clone(),
                ..RequestUpdate::default()
            };
            let error = error.clone();
            let on_updated = on_updated.clone();
            spawn_local(async move {
                let backend = session.backend();
                let result = match backend.update_record(RecordKind::Requests, id, &payload).await {
                    Ok(_) => backend.get_record::<RequestView>(RecordKind::Requests, id).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(request) => on_updated.emit(request),
                    Err(err) => error.set(Some(err.user_message("Request update failed"))),
                }
            });
        })
    };

    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let request = &props.request;
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_status = {
        let status = status.clone();
        Callback::from(move |value: String| status.set(value))
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |value: String| category.set(value))
    };

    html! {
        <div class="card bg-base-100 border border-base-300 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{ format!("Request {}", request.ref_no) }</h2>
                    <button class="btn btn-sm btn-ghost" onclick={on_close}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <ErrorAlert message={(*error).clone()} />
                <dl class="grid grid-cols-2 md:grid-cols-4 gap-2 text-sm">
                    <dt class="font-semibold">{ "Customer" }</dt><dd>{ text(&request.customer_name) }</dd>
                    <dt class="font-semibold">{ "Area" }</dt><dd>{ text(&request.area_name) }</dd>
                    <dt class="font-semibold">{ "Date received" }</dt>
                    <dd>{ request.date_received.map_or_else(|| "-".to_string(), |date| date.to_string()) }</dd>
                    <dt class="font-semibold">{ "LPO No." }</dt><dd>{ text(&request.lpo_no) }</dd>
                    <dt class="font-semibold">{ "Description" }</dt><dd>{ text(&request.long_description) }</dd>
                    <dt class="font-semibold">{ "Created" }</dt>
                    <dd>{ format!("{} by {}", request.created_on, text(&request.created_by)) }</dd>
                </dl>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                    <FormField id="edit-status" label="Status" value={(*status).clone()} on_change={on_status} />
                    <FormField id="edit-category" label="Category" value={(*category).clone()} on_change={on_category} />
                    <button class="btn btn-secondary btn-sm" onclick={on_save}>{ "Save" }</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RequestDraft {
        RequestDraft {
            customer_id: Some(3),
            area_id: Some(4),
            ..RequestDraft::default()
        }
    }

    #[test]
    fn test_draft_requires_customer_and_area() {
        let missing_customer = RequestDraft {
            customer_id: None,
            ..draft()
        };
        assert_eq!(
            missing_customer.to_payload(None),
            Err("Select a customer".to_string())
        );

        let missing_area = RequestDraft {
            area_id: None,
            ..draft()
        };
        assert_eq!(missing_area.to_payload(None), Err("Select an area".to_string()));
    }

    #[test]
    fn test_draft_blank_fields_are_omitted() {
        let payload = RequestDraft {
            short_description: "  ".to_string(),
            lpo_no: " LPO-17 ".to_string(),
            ..draft()
        }
        .to_payload(Some("jdoe".to_string()))
        .unwrap();

        assert_eq!(payload.customer_id, 3);
        assert_eq!(payload.area_id, 4);
        assert_eq!(payload.short_description, None);
        assert_eq!(payload.lpo_no.as_deref(), Some("LPO-17"));
        assert_eq!(payload.created_by.as_deref(), Some("jdoe"));
    }

    #[test]
    fn test_draft_date_parsing() {
        let payload = RequestDraft {
            date_received: "2024-02-29".to_string(),
            ..draft()
        }
        .to_payload(None)
        .unwrap();
        assert_eq!(payload.date_received, NaiveDate::from_ymd_opt(2024, 2, 29));

        let invalid = RequestDraft {
            date_received: "29/02/2024".to_string(),
            ..draft()
        };
        assert_eq!(
            invalid.to_payload(None),
            Err("Invalid date: 29/02/2024".to_string())
        );
    }
}
