//! Page navigation. All game pages live in a flat `pages/` directory next to
//! the landing page.

pub const PAGES_DIR: &str = "pages";

/// Where a "next" control leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextTarget {
    /// A named screen under `pages/`, e.g. `welcome` → `pages/welcome.html`.
    Screen(String),
    /// A page file, resolved relative to the current location.
    Page(String),
}

impl NextTarget {
    pub fn href(&self, current_path: &str) -> Option<String> {
        match self {
            NextTarget::Screen(name) if name.is_empty() => None,
            NextTarget::Screen(name) => resolve_href(current_path, &format!("{name}.html")),
            NextTarget::Page(target) => resolve_href(current_path, target),
        }
    }
}

/// Resolve a page target against the current location path.
///
/// Inside `pages/` the result is a sibling file, never `pages/pages/...`.
pub fn resolve_href(current_path: &str, target: &str) -> Option<String> {
    if target.is_empty() {
        return None;
    }
    let target = target.strip_prefix("../pages/").unwrap_or(target);
    if current_path.contains("/pages/") {
        Some(target.to_string())
    } else {
        Some(format!("{PAGES_DIR}/{target}"))
    }
}
