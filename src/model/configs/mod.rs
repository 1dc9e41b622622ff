pub mod config;
pub mod log_config;
pub mod style_config;
