use crate::layout::navbar::Navbar;
use crate::layout::transition::{TransitionContext, TransitionOverlay};
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Общий контекст перехода карточка → страница
    provide_context(TransitionContext::new());

    view! {
        <ConfigProvider>
            <Router>
                <Navbar />
                <AppRoutes />
                <TransitionOverlay />
            </Router>
        </ConfigProvider>
    }
}
