pub mod background_picker;
pub mod confirm;
pub mod error;
pub mod help;
pub mod helpers;
pub mod manager;
pub mod system_menu;

pub use manager::ModalManager;
