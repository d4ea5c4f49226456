pub mod app;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod messages;
pub mod report;
pub mod screens;
pub mod ui;

pub const APP_NAME: &str = "termsaver";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
