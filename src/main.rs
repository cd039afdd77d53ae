#![deny(clippy::all, clippy::pedantic)]
#![allow(non_snake_case, clippy::module_name_repetitions)]

use leptos::{component, view, IntoView};
use leptos_router::{Route, Router, Routes, A};
use tracing::Level;
use wasm_tracing::WASMLayerConfigBuilder;

use crate::home::Home;
use crate::stats::Stats;

mod components;
mod config;
mod datetime;
mod history;
mod home;
mod live;
mod record;
mod request;
mod stats;
mod types;

fn main() {
    console_error_panic_hook::set_once();

    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    wasm_tracing::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(max_level)
            .build(),
    );

    leptos::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <main class="container">
            <Router>
                <nav>
                    <ul>
                        <li>
                            <strong>
                                <A href="/">"Live at Five"</A>
                            </strong>
                        </li>
                    </ul>
                    <ul>
                        <li>
                            <A href="/stats">"Stats"</A>
                        </li>
                    </ul>
                </nav>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/stats" view=Stats />
                    <Route path="/*any" view=|| view! { <h1>"Not Found"</h1> } />
                </Routes>
            </Router>
        </main>
    }
}
