pub mod charts;
mod dashboard;
mod layout;
pub mod paint;
pub mod theme;

pub use dashboard::{Dashboard, DashboardFrame, SortKey};
pub use layout::DashboardLayout;
pub use theme::Theme;
