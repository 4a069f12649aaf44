use contracts::shared::site_route::Breadcrumb;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Breadcrumbs(items: Vec<Breadcrumb>) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let label = crumb.label;
                        let item = match crumb.href {
                            Some(href) => view! { <A href=href>{label}</A> }.into_any(),
                            None => view! { <span aria-current="page">{label}</span> }.into_any(),
                        };
                        view! {
                            <li>
                                {item}
                                {(i < last).then(|| view! { <span class="breadcrumbs__sep">"/"</span> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}
