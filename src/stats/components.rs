use leptos::{
    component, create_memo, create_signal, ev::Event, event_target_value, view, CollectView,
    IntoView, Signal, SignalGet, SignalSet, SignalWith,
};
use tracing::{debug, error};

use crate::components::Spinner;
use crate::history::HistoryTable;
use crate::record::RecordSummaryLine;
use crate::request::{create_request, filtered_urls, latest};
use crate::types::{AverageTime, WeekdayFilter};

#[component]
pub fn Stats() -> impl IntoView {
    let (weekday, set_weekday) = create_signal(WeekdayFilter::All);
    let urls = create_memo(move |_| filtered_urls(weekday.get()));

    let handle_change = move |evt: Event| {
        let value = event_target_value(&evt);
        match value.parse::<WeekdayFilter>() {
            Ok(filter) => {
                debug!(weekday = %filter, "weekday filter changed");
                set_weekday.set(filter);
            }
            Err(err) => error!(value, "weekday selection error: {err}"),
        }
    };

    let record_url = Signal::derive(move || urls.with(|urls| urls.record.clone()));
    let history_url = Signal::derive(move || urls.with(|urls| urls.history.clone()));
    let when_url = Signal::derive(move || urls.with(|urls| urls.when.clone()));

    view! {
        <section>
            <label for="weekday-select">"Weekday"</label>
            <select id="weekday-select" on:change=handle_change>
                {WeekdayFilter::OPTIONS
                    .into_iter()
                    .map(|filter| {
                        view! { <option value=filter.to_string()>{filter.label()}</option> }
                    })
                    .collect_view()}
            </select>
        </section>
        <section>
            <RecordSummaryLine url=record_url />
            <p>"Average start time: " <AverageTimeText url=when_url /></p>
        </section>
        <section>
            <HistoryTable url=history_url />
        </section>
    }
}

#[component]
fn AverageTimeText(url: Signal<String>) -> impl IntoView {
    let average = latest(create_request::<AverageTime>(move || url.get()));

    view! {
        <span id="avg-time">
            {move || match average.get() {
                Some(average) => average.average.into_view(),
                None => view! { <Spinner /> }.into_view(),
            }}
        </span>
    }
}
