use leptos::prelude::*;

const AURORA_VARS: &str = "--aurora: repeating-linear-gradient(100deg, #CF9160 10%, #7D7A71 15%, #000000 20%, #CF9160 25%, #7D7A71 30%); \
--dark-gradient: repeating-linear-gradient(100deg, #000 0%, #000 7%, transparent 10%, transparent 12%, #000 16%);";

/// Dark page background with the animated brand-colour aurora
#[component]
pub fn AuroraBackground(
    #[prop(optional)] plain: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <main class="aurora">
            <div class="aurora__layer" style=AURORA_VARS aria-hidden="true">
                <div class="aurora__glow" class:aurora__glow--radial=!plain></div>
            </div>
            {children()}
        </main>
    }
}
