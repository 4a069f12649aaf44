use contracts::domain::common::Slug;
use leptos_router::params::ParamsMap;

/// `None` for a missing or malformed `:subcategory` segment
pub fn subcategory_key(params: &ParamsMap) -> Option<Slug> {
    params.get("subcategory").and_then(|s| Slug::parse(&s))
}
