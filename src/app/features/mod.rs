pub mod handler;
pub mod navigation;
pub mod search;
pub mod system;
pub mod ui;
