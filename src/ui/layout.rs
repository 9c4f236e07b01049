use crate::app::Page;

pub const APP_TITLE: &str = "Taylor's Kitchen Assistant";

/// Shared page chrome: title plus the three-way nav bar. Not rendered in
/// Detail, which brings its own back affordance instead.
pub fn render_header(page: Page) -> String {
    let tab = |target: Page, label: &str| {
        if page == target {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    };
    format!(
        "{APP_TITLE}\n{}  {}  {}\n{}",
        tab(Page::Home, "Home"),
        tab(Page::Search, "Recipes"),
        tab(Page::Favorites, "Favorites"),
        "=".repeat(52)
    )
}

/// Generic empty-state panel; the only user-visible shape a failure takes.
pub fn render_empty(title: &str, hint: &str) -> String {
    format!("\n  {title}\n  {hint}\n")
}
