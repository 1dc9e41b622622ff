use crate::common::*;

use crate::enums::{language::*, template_type::*};

#[doc = "Everything the input collector hands over for one message"]
/// Style flags and language are optional here; unset values fall back to the
/// configured defaults when the request is composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ComposeRequest {
    pub template: TemplateType,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub fields: FieldValues,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub use_borders: Option<bool>,
    #[serde(default)]
    pub use_emojis: Option<bool>,
}

impl ComposeRequest {
    #[doc = "True when the form holds something worth previewing: any non-empty field value or at least one tag"]
    pub fn has_content(&self) -> bool {
        self.fields.values().any(|value| !value.is_empty()) || !self.tags.is_empty()
    }
}
