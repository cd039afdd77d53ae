use leptos::{component, view, CollectView, IntoView, MaybeSignal, SignalGet};

use crate::components::Spinner;
use crate::config::{RECORD_SINCE, STREAMER};
use crate::request::{create_request, latest};
use crate::types::RecordSummary;

/// Full sentences describing the record, one per line.
#[component]
pub fn Record(#[prop(into)] url: MaybeSignal<String>) -> impl IntoView {
    let record = latest(create_request::<RecordSummary>(move || url.get()));

    view! {
        <p id="record">
            {move || match record.get() {
                Some(record) => record_sentences(&record)
                    .into_iter()
                    .enumerate()
                    .map(|(index, sentence)| {
                        view! {
                            {(index > 0).then(|| view! { <br /> })}
                            {sentence}
                        }
                    })
                    .collect_view(),
                None => view! { <Spinner /> }.into_view(),
            }}
        </p>
    }
}

#[component]
pub fn RecordSummaryLine(#[prop(into)] url: MaybeSignal<String>) -> impl IntoView {
    let record = latest(create_request::<RecordSummary>(move || url.get()));

    view! {
        <p id="record">
            {move || match record.get() {
                Some(record) => record_summary_line(&record).into_view(),
                None => view! { <Spinner /> }.into_view(),
            }}
        </p>
    }
}

pub fn record_sentences(record: &RecordSummary) -> Vec<String> {
    let RecordSummary {
        on_time,
        early,
        total,
        ..
    } = record;

    let mut sentences = vec![
        format!(
            "{STREAMER} has been on time for {on_time} out of the {total} streams since {RECORD_SINCE}."
        ),
        format!(
            "{STREAMER} has been early for {early} out of the {total} streams since {RECORD_SINCE}."
        ),
    ];

    if let Some(streak) = record.streak() {
        sentences.push(format!(
            "{STREAMER} has been {} {} times in a row.",
            streak.status.streak_word(),
            streak.length
        ));
    }

    sentences
}

pub fn record_summary_line(record: &RecordSummary) -> String {
    format!(
        "{} on-time, {} early, {} late.",
        record.on_time,
        record.early,
        record.late()
    )
}
