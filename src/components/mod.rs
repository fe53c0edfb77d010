pub mod app_sidebar;
pub mod dashboard;
pub mod header;
pub mod layout;
pub mod not_found;
pub mod project;
pub mod projects;
pub mod shared;
pub mod ui;

pub use layout::{Layout, LayoutErrorBoundary};
