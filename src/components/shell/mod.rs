//! Page chrome around the dashboard widgets.

mod cards;
mod header;
mod sidebar;

pub use cards::{ActivityFeed, StatCards};
pub use header::DashboardHeader;
pub use sidebar::Sidebar;
