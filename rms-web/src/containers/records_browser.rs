use std::rc::Rc;

use serde_json::Value;
use shared::{RecordKind, models::Page, tables::headers_for};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    components::{ErrorAlert, RecordsTable, RowAction},
    config::FrontendConfig,
    models::app_state::SessionHandle,
};

/// Hands out one ticket per fetch; only the newest ticket may store its result.
#[derive(Debug, Default)]
struct LatestFetch {
    current: u64,
}

impl LatestFetch {
    fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

/// What a change of collection or page asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchPlan {
    /// Another collection was opened past its first page; rewind before fetching.
    Rewind,
    Fetch,
}

fn plan_fetch(previous: RecordKind, kind: RecordKind, start_index: u32) -> FetchPlan {
    if previous != kind && start_index != 0 {
        FetchPlan::Rewind
    } else {
        FetchPlan::Fetch
    }
}

#[derive(Properties, PartialEq)]
pub struct RecordsBrowserProps {
    pub kind: RecordKind,
    /// Bump to refetch the current page after a change.
    #[prop_or_default]
    pub reload: u32,
    #[prop_or_default]
    pub actions: Vec<RowAction>,
    #[prop_or_default]
    pub on_action: Option<Callback<(RowAction, Value)>>,
}

/// Paged table of one record collection, fetched through the session's client.
#[function_component(RecordsBrowser)]
pub fn records_browser(props: &RecordsBrowserProps) -> Html {
    let session = use_context::<SessionHandle>();
    let batch_size = use_context::<FrontendConfig>()
        .unwrap_or_default()
        .batch_size;
    let start_index = use_state(|| 0_u32);
    let page = use_state(|| Rc::new(Page::<Value>::default()));
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let latest = use_mut_ref(LatestFetch::default);
    let shown_kind = use_mut_ref(|| props.kind);

    {
        let start_index_handle = start_index.clone();
        let page = page.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(
            (props.kind, *start_index, props.reload),
            move |&(kind, start_index, _)| {
                // Every run invalidates whatever fetch is still in flight
                let ticket = latest.borrow_mut().issue();
                let previous = shown_kind.replace(kind);
                if previous != kind {
                    page.set(Rc::new(Page::default()));
                    error.set(None);
                }

                match (plan_fetch(previous, kind, start_index), session) {
                    (FetchPlan::Rewind, _) => start_index_handle.set(0),
                    (FetchPlan::Fetch, Some(session)) => {
                        loading.set(true);
                        spawn_local(async move {
                            let result = session
                                .backend()
                                .list_records::<Value>(kind, start_index, batch_size)
                                .await;
                            if !latest.borrow().is_current(ticket) {
                                log::debug!("dropping stale {kind} page at {start_index}");
                                return;
                            }
                            match result {
                                Ok(records) => {
                                    page.set(Rc::new(records));
                                    error.set(None);
                                }
                                Err(err) => {
                                    log::warn!("listing {kind} failed: {err}");
                                    error.set(Some(err.user_message(&format!(
                                        "Failed to load {}",
                                        kind.title().to_lowercase()
                                    ))));
                                }
                            }
                            loading.set(false);
                        });
                    }
                    (FetchPlan::Fetch, None) => {}
                }
                || {}
            },
        );
    }

    let on_page = {
        let start_index = start_index.clone();
        Callback::from(move |next: u32| start_index.set(next))
    };

    html! {
        <div class="space-y-2">
            <ErrorAlert message={(*error).clone()} />
            if *loading {
                <progress class="progress progress-primary w-full"></progress>
            }
            <RecordsTable
                headers={headers_for(props.kind)}
                rows={Rc::new(page.records.clone())}
                total_count={page.total_count}
                start_index={*start_index}
                {batch_size}
                actions={props.actions.clone()}
                on_action={props.on_action.clone()}
                {on_page}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_fetch_is_current() {
        let mut latest = LatestFetch::default();
        let customers = latest.issue();
        let areas = latest.issue();

        assert!(!latest.is_current(customers));
        assert!(latest.is_current(areas));
    }

    #[test]
    fn test_switching_collection_rewinds_to_first_page() {
        assert_eq!(
            plan_fetch(RecordKind::Customers, RecordKind::Areas, 60),
            FetchPlan::Rewind
        );
        assert_eq!(
            plan_fetch(RecordKind::Customers, RecordKind::Areas, 0),
            FetchPlan::Fetch
        );
        assert_eq!(
            plan_fetch(RecordKind::Areas, RecordKind::Areas, 60),
            FetchPlan::Fetch
        );
    }

    #[test]
    fn test_rewind_then_fetch_drops_old_collection() {
        // customers page 3 in flight, then areas opened: rewind run and fetch run
        let mut latest = LatestFetch::default();
        let customers_page = latest.issue();
        let rewind = latest.issue();
        let areas_first_page = latest.issue();

        assert!(!latest.is_current(customers_page));
        assert!(!latest.is_current(rewind));
        assert!(latest.is_current(areas_first_page));
    }
}
