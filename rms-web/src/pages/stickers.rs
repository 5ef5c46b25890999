use serde_json::Value;
use shared::{
    RecordKind,
    models::{StickerCanvasCreate, StickerCanvasView, StickerCreate},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::{
    components::{ErrorAlert, FormField, RowAction},
    containers::records_browser::RecordsBrowser,
    models::app_state::{AppState, SessionHandle},
};

/// Parses a comma or whitespace separated list of request ids.
fn parse_request_ids(input: &str) -> Result<Vec<StickerCreate>, String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map(|request_id| StickerCreate { request_id })
                .map_err(|_| format!("Invalid request id: {part}"))
        })
        .collect()
}

/// Whether a listed canvas already has a stored PDF.
fn has_document(row: &Value) -> bool {
    row.get("document_id")
        .and_then(Value::as_str)
        .is_some_and(|document_id| !document_id.trim().is_empty())
}

fn open_in_new_tab(url: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.open_with_url_and_target(url, "_blank").ok())
        .flatten()
        .is_some()
}

fn canvas_payload(
    request_ids: &str,
    document_id: &str,
    created_by: Option<String>,
) -> Result<StickerCanvasCreate, String> {
    let stickers = parse_request_ids(request_ids)?;
    if stickers.is_empty() {
        return Err("Enter at least one request id".to_string());
    }
    let document_id = document_id.trim();
    let canvas = StickerCanvasCreate {
        document_id: (!document_id.is_empty()).then(|| document_id.to_string()),
        created_by,
        stickers,
    };
    if canvas.within_limit() {
        Ok(canvas)
    } else {
        Err(format!(
            "A canvas holds at most {} stickers",
            StickerCanvasCreate::MAX_STICKERS
        ))
    }
}

/// Stickers page component
#[function_component(StickersPage)]
pub fn stickers_page() -> Html {
    let session = use_context::<SessionHandle>();
    let username = use_selector(|state: &AppState| {
        state.session.user.as_ref().map(|user| user.username.clone())
    });
    let reload = use_state(|| 0_u32);
    let request_ids = use_state(String::new);
    let document_id = use_state(String::new);
    let selected = use_state(|| None::<StickerCanvasView>);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    let on_action = {
        let session = session.clone();
        let selected = selected.clone();
        let reload = reload.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |(action, row): (RowAction, Value)| {
            let (Some(session), Some(id)) = (session.clone(), row.get("id").and_then(Value::as_i64))
            else {
                return;
            };
            match action {
                RowAction::Download => {
                    if !has_document(&row) {
                        error.set(Some(format!("Generate the PDF of canvas {id} first")));
                    } else if !open_in_new_tab(&session.backend().sticker_document_url(id, false)) {
                        error.set(Some("The browser blocked the download window".to_string()));
                    }
                }
                RowAction::Generate => {
                    let reload = reload.clone();
                    let error = error.clone();
                    let notice = notice.clone();
                    spawn_local(async move {
                        match session.backend().generate_sticker_document(id).await {
                            Ok(response) => {
                                log::info!("generated sticker document for canvas {id}");
                                notice.set(Some(
                                    response
                                        .message
                                        .unwrap_or_else(|| format!("PDF generated for canvas {id}")),
                                ));
                                error.set(None);
                                reload.set(*reload + 1);
                            }
                            Err(err) => error.set(Some(err.user_message("Sticker generation failed"))),
                        }
                    });
                }
                RowAction::View | RowAction::Edit | RowAction::Delete => {
                    let selected = selected.clone();
                    let error = error.clone();
                    spawn_local(async move {
                        match session
                            .backend()
                            .get_record::<StickerCanvasView>(RecordKind::Stickers, id)
                            .await
                        {
                            Ok(canvas) => selected.set(Some(canvas)),
                            Err(err) => {
                                error.set(Some(err.user_message("Failed to load sticker canvas")));
                            }
                        }
                    });
                }
            }
        })
    };

    let on_create = {
        let request_ids = request_ids.clone();
        let document_id = document_id.clone();
        let reload = reload.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(session) = session.clone() else {
                return;
            };
            let payload = match canvas_payload(&request_ids, &document_id, (*username).clone()) {
                Ok(payload) => payload,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let request_ids = request_ids.clone();
            let document_id = document_id.clone();
            let reload = reload.clone();
            let error = error.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match session
                    .backend()
                    .create_record(RecordKind::Stickers, &payload)
                    .await
                {
                    Ok(response) => {
                        log::info!("created sticker canvas {:?}", response.id_field("canvas_id"));
                        notice.set(response.message);
                        error.set(None);
                        request_ids.set(String::new());
                        document_id.set(String::new());
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        error.set(Some(err.user_message("Sticker canvas creation failed")));
                    }
                }
            });
        })
    };

    let on_request_ids = {
        let request_ids = request_ids.clone();
        Callback::from(move |value: String| request_ids.set(value))
    };
    let on_document_id = {
        let document_id = document_id.clone();
        Callback::from(move |value: String| document_id.set(value))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Sticker canvases" }</h1>
            <ErrorAlert message={(*error).clone()} />
            if let Some(message) = &*notice {
                <div class="alert alert-success"><span>{message.clone()}</span></div>
            }

            if let Some(canvas) = &*selected {
                <div class="card bg-base-100 border border-base-300 shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <h2 class="card-title">
                                { format!("Canvas {} · {} stickers", canvas.id, canvas.stickers_count()) }
                            </h2>
                            <button class="btn btn-sm btn-ghost" onclick={on_close}>
                                <i class="fa-solid fa-xmark"></i>
                            </button>
                        </div>
                        <ul class="list-disc list-inside text-sm">
                            { for canvas.stickers.iter().map(|sticker| html! {
                                <li>{ format!("Sticker {} for request {}", sticker.id, sticker.request_id) }</li>
                            }) }
                        </ul>
                    </div>
                </div>
            }

            <RecordsBrowser
                kind={RecordKind::Stickers}
                reload={*reload}
                actions={vec![RowAction::View, RowAction::Generate, RowAction::Download]}
                {on_action}
            />

            <form class="card bg-base-200 shadow" onsubmit={on_create}>
                <div class="card-body">
                    <h2 class="card-title">{ "New canvas" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <FormField id="request-ids" label="Request ids" required=true
                            value={(*request_ids).clone()} on_change={on_request_ids} />
                        <FormField id="document-id" label="Document id"
                            value={(*document_id).clone()} on_change={on_document_id} />
                    </div>
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary" type="submit">{ "Create canvas" }</button>
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

    #[test]
    fn test_parse_request_ids() {
        let stickers = parse_request_ids("4, 8 15,16").unwrap();
        let ids: Vec<i64> = stickers.iter().map(|sticker| sticker.request_id).collect();
        assert_eq!(ids, vec![4, 8, 15, 16]);

        assert_eq!(
            parse_request_ids("4, x"),
            Err("Invalid request id: x".to_string())
        );
    }

    #[test]
    fn test_has_document() {
        assert!(has_document(&json!({"id": 1, "document_id": "doc-42"})));
        assert!(!has_document(&json!({"id": 1, "document_id": null})));
        assert!(!has_document(&json!({"id": 1, "document_id": " "})));
        assert!(!has_document(&json!({"id": 1})));
    }

    #[test]
    fn test_canvas_payload_limits() {
        assert_eq!(
            canvas_payload(" ", "", None),
            Err("Enter at least one request id".to_string())
        );

        let eleven = (1..=11).map(|id| id.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(
            canvas_payload(&eleven, "", None),
            Err("A canvas holds at most 10 stickers".to_string())
        );

        let canvas = canvas_payload("1,2", " DOC-9 ", Some("jdoe".to_string())).unwrap();
        assert_eq!(canvas.stickers.len(), 2);
        assert_eq!(canvas.document_id.as_deref(), Some("DOC-9"));
        assert_eq!(canvas.created_by.as_deref(), Some("jdoe"));
    }
}
