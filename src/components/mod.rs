pub mod app_grid;
pub mod footer;
pub mod header;
pub mod modals;
pub mod sidebar;
pub mod splash;
