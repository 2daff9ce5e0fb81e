pub mod bot;
pub mod cli;
pub mod core;
pub mod error;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;
