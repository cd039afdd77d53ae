use leptos::{component, view, IntoView};

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span aria-busy="true">"Loading..."</span> }
}
