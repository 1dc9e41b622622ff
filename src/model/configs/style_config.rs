use crate::common::*;

use crate::enums::{language::*, link_target::*};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Getters)]
#[serde(deny_unknown_fields)]
#[getset(get = "pub")]
pub struct StyleConfig {
    #[serde(default = "default_true")]
    pub use_borders: bool,
    #[serde(default = "default_true")]
    pub use_emojis: bool,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub link_target: LinkTarget,
}

fn default_true() -> bool {
    true
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            use_borders: true,
            use_emojis: true,
            language: Language::En,
            link_target: LinkTarget::Desktop,
        }
    }
}
