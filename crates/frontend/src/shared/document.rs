pub const SITE_TITLE: &str = "Sivory Design - Pergolas Crafted to Perfection";

pub fn document_title(page: Option<&str>) -> String {
    match page.map(str::trim) {
        Some(page) if !page.is_empty() => format!("{} | Sivory Design", page),
        _ => SITE_TITLE.to_string(),
    }
}

/// Set `document.title` for the current page
pub fn set_title(page: Option<&str>) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&document_title(page));
    }
}
