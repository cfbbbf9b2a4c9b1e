//! View models shared by the page routes

pub mod page;

pub use page::{active_page, nav_items, NavItem, NAV_MENU};
