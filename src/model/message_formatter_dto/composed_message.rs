use crate::common::*;

use crate::enums::{language::*, template_type::*};

use crate::model::compose_request::*;
use crate::model::configs::style_config::*;
use crate::model::message_formatter_dto::message_formatter::*;

#[doc = "A request with every optional setting resolved, ready to be rendered"]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ComposedMessage {
    pub template: TemplateType,
    pub language: Language,
    pub fields: FieldValues,
    pub tags: Vec<String>,
    pub photos: Vec<String>,
    pub use_borders: bool,
    pub use_emojis: bool,
}

impl ComposedMessage {
    #[doc = "Fills unset request settings from the configured style defaults"]
    pub fn resolve(request: &ComposeRequest, defaults: &StyleConfig) -> Self {
        ComposedMessage {
            template: request.template,
            language: request.language.unwrap_or(defaults.language),
            fields: request.fields.clone(),
            tags: request.tags.clone(),
            photos: request.photos.clone(),
            use_borders: request.use_borders.unwrap_or(defaults.use_borders),
            use_emojis: request.use_emojis.unwrap_or(defaults.use_emojis),
        }
    }
}

impl MessageFormatter for ComposedMessage {
    #[doc = "Renders this resolved request with the formatter"]
    fn get_chat_format(&self) -> String {
        format(
            self.template,
            &self.fields,
            self.language,
            self.use_borders,
            self.use_emojis,
            &self.tags,
            &self.photos,
        )
    }
}
