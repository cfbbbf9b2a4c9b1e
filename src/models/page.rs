//! Page layout models: the navigation menu and active-page resolution.

use serde::Serialize;

/// Page shown when the request path has no file segment
pub const HOME_PAGE: &str = "home.html";

/// A fixed navigation menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub href: &'static str,
    pub label: &'static str,
}

/// The staff navigation menu, in display order
pub const NAV_MENU: [MenuEntry; 4] = [
    MenuEntry {
        href: HOME_PAGE,
        label: "Dashboard",
    },
    MenuEntry {
        href: "create-booking.html",
        label: "New Booking",
    },
    MenuEntry {
        href: "reservations.html",
        label: "Reservations",
    },
    MenuEntry {
        href: "#",
        label: "Settings",
    },
];

/// Navigation entry ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Last path segment, or [`HOME_PAGE`] when there is none.
pub fn active_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => HOME_PAGE,
    }
}

/// The navigation menu with the entry for `path` marked active.
pub fn nav_items(path: &str) -> Vec<NavItem> {
    let active = active_page(path);
    NAV_MENU
        .iter()
        .map(|entry| NavItem {
            href: entry.href,
            label: entry.label,
            active: entry.href != "#" && entry.href == active,
        })
        .collect()
}
