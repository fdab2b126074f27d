pub mod desktop_entries;
pub mod icons;
pub mod process;
pub mod stats;
