//! Placeholder views for non-ready page states.

use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="status status--loading" aria-busy="true">
            <Spinner />
            <p>"Loading..."</p>
        </div>
    }
}

/// The route points at nothing in the store
#[component]
pub fn NotFoundView(
    #[prop(into)] what: String,
    #[prop(into)] back_href: String,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    view! {
        <div class="status status--not-found">
            <h1>{format!("{} Not Found", what)}</h1>
            <p>"The page you are looking for does not exist or has been moved."</p>
            <A href=back_href attr:class="button button--primary">{back_label}</A>
        </div>
    }
}

/// The store could not be reached; the cause stays in the console
#[component]
pub fn ErrorView(#[prop(into)] message: String) -> impl IntoView {
    log::debug!("Rendering error view: {}", message);
    view! {
        <div class="status status--error">
            <MessageBar intent=MessageBarIntent::Error>
                <MessageBarBody>
                    <MessageBarTitle>"Temporarily unavailable"</MessageBarTitle>
                    "We could not load this page right now. Please try again in a moment."
                </MessageBarBody>
            </MessageBar>
            <button class="button button--ghost" on:click=|_| {
                if let Some(w) = web_sys::window() {
                    if let Err(e) = w.location().reload() {
                        log::error!("Failed to reload page: {:?}", e);
                    }
                }
            }>
                "Retry"
            </button>
        </div>
    }
}
