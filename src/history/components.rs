use leptos::{component, view, For, IntoView, MaybeSignal, SignalGet};

use crate::components::Spinner;
use crate::request::{create_request, latest};
use crate::types::{History, StreamRecord};

/// One line per stream, oldest first.
#[component]
pub fn HistoryList(#[prop(into)] url: MaybeSignal<String>) -> impl IntoView {
    let history = latest(create_request::<History>(move || url.get()));

    view! {
        <div id="history">
            {move || match history.get() {
                Some(history) => {
                    let entries = history
                        .by_date()
                        .enumerate()
                        .map(|(index, (date, record))| (index, history_entry_text(date, record)))
                        .collect::<Vec<_>>();
                    view! {
                        <For
                            each=move || entries.clone()
                            key=|(index, _)| *index
                            let:entry
                        >
                            <div class="history-entry" id=format!("entry-{}", entry.0)>
                                {entry.1}
                            </div>
                        </For>
                    }
                    .into_view()
                }
                None => view! { <Spinner /> }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn HistoryTable(#[prop(into)] url: MaybeSignal<String>) -> impl IntoView {
    let history = latest(create_request::<History>(move || url.get()));

    view! {
        <div class="overflow-auto">
            <table id="history-table" class="striped">
                <thead>
                    <tr class="table-header">
                        <th scope="col">"Date"</th>
                        <th scope="col">"Time"</th>
                        <th scope="col">"Offset"</th>
                        <th scope="col">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match history.get() {
                        Some(history) => {
                            let rows = history
                                .by_date()
                                .map(|(date, record)| (date.clone(), record.clone()))
                                .collect::<Vec<_>>();
                            view! {
                                <For
                                    each=move || rows.clone()
                                    key=|(date, _)| date.clone()
                                    let:row
                                >
                                    <HistoryRow date=row.0 record=row.1 />
                                </For>
                            }
                            .into_view()
                        }
                        None => view! { <Spinner /> }.into_view(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn HistoryRow(date: String, record: StreamRecord) -> impl IntoView {
    let offset = format_offset(record.offset);

    view! {
        <tr>
            <td class="live-date">{date}</td>
            <td class="live-time">{record.time}</td>
            <td class="live-offset">{offset}</td>
            <td class="live-status">{record.status.table_label()}</td>
        </tr>
    }
}

pub fn history_entry_text(date: &str, record: &StreamRecord) -> String {
    format!(
        "{date}: {} (went live at {})",
        record.status.list_label(),
        record.time
    )
}

/// Minutes from the goal with one decimal place.
pub fn format_offset(offset: Option<f64>) -> String {
    offset.map_or_else(|| "n/a".to_string(), |offset| format!("{offset:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Punctuality;

    fn stream(status: Punctuality, time: &str) -> StreamRecord {
        StreamRecord {
            status,
            time: time.to_string(),
            offset: None,
        }
    }

    #[test]
    fn entry_text_uses_padded_labels() {
        assert_eq!(
            history_entry_text("2023-02-01", &stream(Punctuality::OnTime, "17:01:00")),
            "2023-02-01: ON TIME (went live at 17:01:00)"
        );
        assert_eq!(
            history_entry_text("2023-02-02", &stream(Punctuality::Late, "18:10:00")),
            "2023-02-02: LATE\u{a0}\u{a0}\u{a0} (went live at 18:10:00)"
        );
    }

    #[test]
    fn offset_has_one_decimal() {
        assert_eq!(format_offset(Some(12.0)), "12.0");
        assert_eq!(format_offset(Some(-3.26)), "-3.3");
        assert_eq!(format_offset(None), "n/a");
    }
}
