use std::rc::Rc;

use serde_json::Value;
use shared::tables::{TableHeader, cell_text};
use yew::{Callback, Html, Properties, classes, function_component, html};

/// Per-row buttons a table can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Generate,
    Download,
}

impl RowAction {
    fn label(self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Generate => "Generate PDF",
            RowAction::Download => "Download PDF",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            RowAction::View => "fa-eye",
            RowAction::Edit => "fa-pen",
            RowAction::Delete => "fa-trash",
            RowAction::Generate => "fa-file-pdf",
            RowAction::Download => "fa-download",
        }
    }
}

/// Start indexes of the previous and next page, clamped to the `u32` range.
fn neighbour_pages(start_index: u32, batch_size: u32) -> (u32, u32) {
    (
        start_index.saturating_sub(batch_size),
        start_index.saturating_add(batch_size),
    )
}

#[derive(Properties, PartialEq)]
pub struct RecordsTableProps {
    pub headers: &'static [TableHeader],
    pub rows: Rc<Vec<Value>>,
    #[prop_or_default]
    pub total_count: u64,
    #[prop_or_default]
    pub start_index: u32,
    #[prop_or(30)]
    pub batch_size: u32,
    #[prop_or_default]
    pub actions: Vec<RowAction>,
    #[prop_or_default]
    pub on_action: Option<Callback<(RowAction, Value)>>,
    /// Receives the new `start_index` when the user pages.
    #[prop_or_default]
    pub on_page: Option<Callback<u32>>,
}

#[function_component(RecordsTable)]
pub fn records_table(props: &RecordsTableProps) -> Html {
    let has_actions = !props.actions.is_empty() && props.on_action.is_some();
    let shown = u64::try_from(props.rows.len()).unwrap_or(u64::MAX);
    let first = u64::from(props.start_index);
    let has_previous = props.start_index > 0;
    let has_next = first + shown < props.total_count;

    let render_actions = |row: &Value| -> Html {
        let Some(on_action) = props.on_action.clone() else {
            return html! {};
        };
        html! {
            <td class="flex gap-1">
                { for props.actions.iter().map(|action| {
                    let action = *action;
                    let row = row.clone();
                    let on_action = on_action.clone();
                    let onclick = Callback::from(move |_| on_action.emit((action, row.clone())));
                    let tone = if action == RowAction::Delete { "btn-error" } else { "btn-ghost" };
                    html! {
                        <button class={classes!("btn", "btn-xs", tone)} title={action.label()} {onclick}>
                            <i class={classes!("fa-solid", action.icon())}></i>
                        </button>
                    }
                }) }
            </td>
        }
    };

    let pager = props.on_page.clone().map_or_else(
        || html! {},
        |on_page| {
            let (previous, next) = neighbour_pages(props.start_index, props.batch_size);
            let on_previous = {
                let on_page = on_page.clone();
                Callback::from(move |_| on_page.emit(previous))
            };
            let on_next = Callback::from(move |_| on_page.emit(next));
            html! {
                <div class="join">
                    <button class="join-item btn btn-sm" disabled={!has_previous} onclick={on_previous}>
                        <i class="fa-solid fa-chevron-left"></i>
                    </button>
                    <button class="join-item btn btn-sm" disabled={!has_next} onclick={on_next}>
                        <i class="fa-solid fa-chevron-right"></i>
                    </button>
                </div>
            }
        },
    );

    let summary = if shown == 0 {
        format!("0 of {}", props.total_count)
    } else {
        format!("{}-{} of {}", first + 1, first + shown, props.total_count)
    };

    html! {
        <div class="space-y-2">
            <div class="overflow-x-auto rounded-box border border-base-300">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            { for props.headers.iter().map(|header| html! { <th>{header.text}</th> }) }
                            if has_actions {
                                <th></th>
                            }
                        </tr>
                    </thead>
                    <tbody>
                        if props.rows.is_empty() {
                            <tr>
                                <td colspan={(props.headers.len() + 1).to_string()} class="text-center text-base-content/60">
                                    {"No records"}
                                </td>
                            </tr>
                        }
                        { for props.rows.iter().map(|row| html! {
                            <tr>
                                { for props.headers.iter().map(|header| html! { <td>{cell_text(row, header)}</td> }) }
                                if has_actions {
                                    {render_actions(row)}
                                }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
            <div class="flex items-center justify-between text-sm">
                <span class="text-base-content/70">{summary}</span>
                {pager}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbour_pages() {
        assert_eq!(neighbour_pages(0, 30), (0, 30));
        assert_eq!(neighbour_pages(60, 30), (30, 90));
        assert_eq!(neighbour_pages(10, 30), (0, 40));
    }

    #[test]
    fn test_neighbour_pages_do_not_overflow() {
        assert_eq!(neighbour_pages(u32::MAX - 5, 30), (u32::MAX - 35, u32::MAX));
    }
}
