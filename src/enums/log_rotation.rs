use crate::common::*;

#[doc = "How often the log file is rotated"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Day,
    Hour,
}

impl LogRotation {
    pub fn age(&self) -> Age {
        match self {
            LogRotation::Day => Age::Day,
            LogRotation::Hour => Age::Hour,
        }
    }
}
