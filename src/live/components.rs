use leptos::{
    component, create_effect, create_memo, create_signal, view, IntoView, SignalGet, SignalSet,
    View,
};
use leptos_use::use_interval_fn;
use tracing::debug;

use crate::config::{CLOCK_TICK_INTERVAL_MS, LIVE_POLL_INTERVAL_MS};
use crate::datetime::{format_countdown, now_local};
use crate::request::{create_request, endpoint_url, latest, LIVE_PATH};
use crate::types::{LiveStatus, WeekdayFilter};

use super::status::{select_state, LiveState};

#[component]
pub fn LiveStatusBanner() -> impl IntoView {
    let live = create_request::<LiveStatus>(|| endpoint_url(LIVE_PATH, WeekdayFilter::All));
    let status = latest(live);
    let (now, set_now) = create_signal(now_local());

    // The poll only writes the status, the clock only writes `now`
    use_interval_fn(move || live.refetch(), LIVE_POLL_INTERVAL_MS);
    use_interval_fn(move || set_now.set(now_local()), CLOCK_TICK_INTERVAL_MS);

    create_effect(move |_| {
        if let Some(status) = status.get() {
            debug!(
                live = status.live,
                was_live = status.was_live,
                "live status updated"
            );
        }
    });

    let state = create_memo(move |_| select_state(status.get().unwrap_or_default(), now.get()));

    view! { <h2 id="islive">{move || state_view(state.get())}</h2> }
}

fn state_view(state: LiveState) -> View {
    match state {
        LiveState::BeforeGoal { remaining } => view! {
            "He " <i>"should"</i> " be live in " {format_countdown(remaining)} "."
        }
        .into_view(),
        LiveState::Late { elapsed } => view! {
            "He " <i>"should've"</i> " been live " {format_countdown(elapsed)} " ago..."
        }
        .into_view(),
        state => state.to_string().into_view(),
    }
}
