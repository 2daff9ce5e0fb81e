pub mod choice;
pub mod config;
pub mod request;
pub mod session;
