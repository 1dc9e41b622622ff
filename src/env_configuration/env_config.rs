use crate::common::*;

#[doc = "env 헬퍼함수 정의"]
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[doc = "Function to globally initialize the 'SYSTEM_CONFIG_PATH' variable"]
pub static SYSTEM_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("SYSTEM_CONFIG_PATH", "./config/system_config.toml"));

#[doc = "Function to globally initialize the 'LOG_LEVEL' variable"]
pub static LOG_LEVEL: once_lazy<String> = once_lazy::new(|| get_env_or_default("LOG_LEVEL", "info"));
