use leptos::{component, view, IntoView};

use crate::history::HistoryList;
use crate::live::LiveStatusBanner;
use crate::record::Record;
use crate::request::{endpoint_url, HISTORY_PATH, RECORD_PATH};
use crate::types::WeekdayFilter;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section>
            <LiveStatusBanner />
        </section>
        <section>
            <Record url=endpoint_url(RECORD_PATH, WeekdayFilter::All) />
        </section>
        <section>
            <HistoryList url=endpoint_url(HISTORY_PATH, WeekdayFilter::All) />
        </section>
    }
}
