use serde::Serialize;
use serde_json::Value;
use shared::{
    RecordKind,
    models::{NamedRecordInput, SalesPersonInput},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    components::{ErrorAlert, FormField, RowAction},
    containers::records_browser::RecordsBrowser,
    models::app_state::SessionHandle,
};

/// Create/update body for one master-data kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum MasterPayload {
    Named(NamedRecordInput),
    SalesPerson(SalesPersonInput),
}

/// Editor contents; `editing` holds the id of the record being changed.
#[derive(Debug, Clone, Default, PartialEq)]
struct MasterDraft {
    editing: Option<i64>,
    name: String,
    first_name: String,
    last_name: String,
}

fn field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl MasterDraft {
    /// Loads a listed row into the editor.
    fn from_row(row: &Value) -> Self {
        Self {
            editing: row.get("id").and_then(Value::as_i64),
            name: field(row, "name"),
            first_name: field(row, "first_name"),
            last_name: field(row, "last_name"),
        }
    }

    fn to_payload(&self, kind: RecordKind) -> Result<MasterPayload, String> {
        if kind == RecordKind::SalesPersons {
            let (first_name, last_name) = (self.first_name.trim(), self.last_name.trim());
            if first_name.is_empty() || last_name.is_empty() {
                return Err("First and last name are required".to_string());
            }
            Ok(MasterPayload::SalesPerson(SalesPersonInput {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            }))
        } else {
            let name = self.name.trim();
            if name.is_empty() {
                return Err("Name is required".to_string());
            }
            Ok(MasterPayload::Named(NamedRecordInput {
                name: name.to_string(),
            }))
        }
    }
}

fn confirm_delete(kind: RecordKind, id: i64) -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message(&format!("Delete {} record {id}?", kind.title()))
                .ok()
        })
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct MasterDataPageProps {
    pub kind: RecordKind,
}

/// Master data page component
#[function_component(MasterDataPage)]
pub fn master_data_page(props: &MasterDataPageProps) -> Html {
    let kind = props.kind;
    let session = use_context::<SessionHandle>();
    let reload = use_state(|| 0_u32);
    let draft = use_state(MasterDraft::default);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    // A different collection starts with an empty editor
    {
        let draft = draft.clone();
        let error = error.clone();
        let notice = notice.clone();
        use_effect_with(kind, move |_| {
            draft.set(MasterDraft::default());
            error.set(None);
            notice.set(None);
            || {}
        });
    }

    let on_action = {
        let session = session.clone();
        let draft = draft.clone();
        let reload = reload.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |(action, row): (RowAction, Value)| match action {
            RowAction::Edit | RowAction::View => draft.set(MasterDraft::from_row(&row)),
            RowAction::Delete => {
                let (Some(session), Some(id)) =
                    (session.clone(), row.get("id").and_then(Value::as_i64))
                else {
                    return;
                };
                if !confirm_delete(kind, id) {
                    return;
                }
                let reload = reload.clone();
                let error = error.clone();
                let notice = notice.clone();
                spawn_local(async move {
                    match session.backend().delete_record(kind, id).await {
                        Ok(response) => {
                            notice.set(Some(
                                response
                                    .message
                                    .unwrap_or_else(|| format!("Record {id} deleted")),
                            ));
                            error.set(None);
                            reload.set(*reload + 1);
                        }
                        Err(err) => error.set(Some(err.user_message("Delete failed"))),
                    }
                });
            }
            RowAction::Generate | RowAction::Download => {}
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let reload = reload.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(session) = session.clone() else {
                return;
            };
            let payload = match draft.to_payload(kind) {
                Ok(payload) => payload,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let editing = draft.editing;
            let draft = draft.clone();
            let reload = reload.clone();
            let error = error.clone();
            let notice = notice.clone();
            spawn_local(async move {
                let backend = session.backend();
                let result = match editing {
                    Some(id) => backend.update_record(kind, id, &payload).await,
                    None => backend.create_record(kind, &payload).await,
                };
                match result {
                    Ok(response) => {
                        notice.set(response.message);
                        error.set(None);
                        draft.set(MasterDraft::default());
                        reload.set(*reload + 1);
                    }
                    Err(err) => error.set(Some(err.user_message("Save failed"))),
                }
            });
        })
    };

    let edit = |apply: fn(&mut MasterDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_cancel = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set(MasterDraft::default()))
    };

    let fields = if kind == RecordKind::SalesPersons {
        html! {
            <>
                <FormField id="first-name" label="First name" required=true
                    value={draft.first_name.clone()}
                    on_change={edit(|draft, value| draft.first_name = value)} />
                <FormField id="last-name" label="Last name" required=true
                    value={draft.last_name.clone()}
                    on_change={edit(|draft, value| draft.last_name = value)} />
            </>
        }
    } else {
        html! {
            <FormField id="name" label="Name" required=true
                value={draft.name.clone()}
                on_change={edit(|draft, value| draft.name = value)} />
        }
    };

    let form_title = draft.editing.map_or_else(
        || format!("New {}", kind.title().to_lowercase()),
        |id| format!("Edit record {id}"),
    );

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ kind.title() }</h1>
            <ErrorAlert message={(*error).clone()} />
            if let Some(message) = &*notice {
                <div class="alert alert-success"><span>{message.clone()}</span></div>
            }

            <RecordsBrowser
                {kind}
                reload={*reload}
                actions={vec![RowAction::Edit, RowAction::Delete]}
                {on_action}
            />

            <form class="card bg-base-200 shadow" onsubmit={on_submit}>
                <div class="card-body">
                    <h2 class="card-title">{ form_title }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { fields }
                    </div>
                    <div class="card-actions justify-end">
                        if draft.editing.is_some() {
                            <button class="btn btn-ghost" type="button" onclick={on_cancel}>{ "Cancel" }</button>
                        }
                        <button class="btn btn-primary" type="submit">{ "Save" }</button>
                    </div>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_draft_from_row() {
        let draft = MasterDraft::from_row(&json!({"id": 5, "first_name": "Jane", "last_name": "Doe"}));
        assert_eq!(draft.editing, Some(5));
        assert_eq!(draft.first_name, "Jane");
        assert_eq!(draft.last_name, "Doe");
        assert!(draft.name.is_empty());
    }

    #[test_case(RecordKind::Customers ; "customers")]
    #[test_case(RecordKind::Areas ; "areas")]
    fn test_named_payload(kind: RecordKind) {
        let draft = MasterDraft {
            name: "  Acme  ".to_string(),
            ..MasterDraft::default()
        };
        let payload = draft.to_payload(kind).unwrap();
        assert_eq!(serde_json::to_value(payload).unwrap(), json!({"name": "Acme"}));

        assert_eq!(
            MasterDraft::default().to_payload(kind),
            Err("Name is required".to_string())
        );
    }

    #[test]
    fn test_sales_person_payload() {
        let draft = MasterDraft {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..MasterDraft::default()
        };
        let payload = draft.to_payload(RecordKind::SalesPersons).unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"first_name": "Jane", "last_name": "Doe"})
        );

        let missing_last = MasterDraft {
            first_name: "Jane".to_string(),
            ..MasterDraft::default()
        };
        assert_eq!(
            missing_last.to_payload(RecordKind::SalesPersons),
            Err("First and last name are required".to_string())
        );
    }
}
