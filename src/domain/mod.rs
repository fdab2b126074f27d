pub mod catalog;
pub mod launcher;
pub mod models;
