use leptos::prelude::*;

use crate::layout::aurora::AuroraBackground;
use crate::shared::components::status::NotFoundView;
use crate::shared::document::set_title;

#[component]
#[allow(non_snake_case)]
pub fn NotFoundPage() -> impl IntoView {
    Effect::new(move |_| set_title(Some("Page Not Found")));

    view! {
        <AuroraBackground plain=true>
            <NotFoundView what="Page" back_href="/" back_label="Back to Home" />
        </AuroraBackground>
    }
}
