//! Page-level loading of store content.
//!
//! A page derives a key from its route (e.g. category + slugs), and
//! [`use_content_page`] turns it into a [`PageState`] signal: `Loading` until
//! the fetch settles `Ready`, `NotFound` or `Error`. A key of `None` (an
//! invalid route segment) settles `NotFound` without a request.
//!
//! The in-flight request is aborted when the key changes, when the page
//! unmounts, and after [`PAGE_FETCH_TIMEOUT_MS`].

use contracts::shared::page_state::{PageLoader, PageState};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};

use super::api_utils::{found, ApiError};

/// Upper bound for a page fetch; afterwards the page settles `Error`
pub const PAGE_FETCH_TIMEOUT_MS: u32 = 15_000;

fn abort(controller: &mut Option<AbortController>) {
    if let Some(c) = controller.take() {
        c.abort();
    }
}

pub fn use_content_page<K, T, F, Fut>(
    key: impl Fn() -> Option<K> + 'static,
    fetch: F,
) -> RwSignal<PageState<T>>
where
    K: Clone + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(K, Option<AbortSignal>) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(PageState::<T>::Loading);
    let loader = StoredValue::new_local(PageLoader::<T>::new());
    let controller = StoredValue::new_local(None::<AbortController>);

    Effect::new(move |_| {
        let key = key();

        controller.update_value(abort);
        let Some(ticket) = loader.try_update_value(|l| l.begin()) else {
            return;
        };
        state.set(PageState::Loading);

        let Some(key) = key else {
            if loader
                .try_update_value(|l| l.complete(ticket, Ok::<_, ApiError>(None)))
                .unwrap_or(false)
            {
                state.set(PageState::NotFound);
            }
            return;
        };

        let request_controller = AbortController::new().ok();
        let signal = request_controller.as_ref().map(|c| c.signal());
        let timeout = request_controller.clone().map(|c| {
            Timeout::new(PAGE_FETCH_TIMEOUT_MS, move || {
                log::warn!("Page fetch exceeded {} ms, aborting", PAGE_FETCH_TIMEOUT_MS);
                c.abort();
            })
        });
        controller.set_value(request_controller);

        let request = fetch(key, signal);
        spawn_local(async move {
            let result = found(request.await);
            drop(timeout);

            if let Err(e) = &result {
                log::error!("Failed to load page content: {}", e);
            }

            // Stale tickets and closed loaders are ignored
            let settled = loader
                .try_update_value(|l| l.complete(ticket, result))
                .unwrap_or(false);
            if settled {
                if let Some(next) = loader.try_with_value(|l| l.state().clone()) {
                    state.try_set(next);
                }
            }
        });
    });

    on_cleanup(move || {
        loader.try_update_value(|l| l.close());
        controller.try_update_value(abort);
    });

    state
}
