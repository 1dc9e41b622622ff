use crate::common::*;

use crate::enums::log_rotation::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Getters)]
#[serde(deny_unknown_fields)]
#[getset(get = "pub")]
pub struct LogConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_file_basename")]
    pub file_basename: String,
    #[serde(default)]
    pub rotate_by: LogRotation,
    #[serde(default = "default_keep_log_files")]
    pub keep_log_files: usize,
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_file_basename() -> String {
    "school_message_composer".to_string()
}

fn default_keep_log_files() -> usize {
    10
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            log_dir: default_log_dir(),
            file_basename: default_file_basename(),
            rotate_by: LogRotation::Day,
            keep_log_files: default_keep_log_files(),
        }
    }
}
