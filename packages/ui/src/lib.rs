//! Server-rendered UI shared by the web frontend.

mod document;
pub use document::render_page;

mod navbar;
pub use navbar::{LogoutButton, Navbar};

mod sidebar;
pub use sidebar::{nav_items, NavItem, Sidebar};

mod stat_card;
pub use stat_card::{money, StatCard};

pub mod views;
