use crate::common::*;

use crate::traits::service::compose_service_trait::*;

use crate::enums::link_target::*;

use crate::model::{
    compose_request::*,
    configs::style_config::*,
    message_formatter_dto::{composed_message::*, message_formatter::*},
};

use crate::utils_modules::link_utils;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ComposeServiceImpl {
    style_config: Arc<StyleConfig>,
}

impl ComposeService for ComposeServiceImpl {
    #[doc = "Renders a request, filling unset style flags and language from the config"]
    fn compose(&self, request: &ComposeRequest) -> String {
        let composed: ComposedMessage = ComposedMessage::resolve(request, &self.style_config);
        let message: String = composed.get_chat_format();

        info!(
            "Composed '{}' message in '{}' ({} chars, borders={}, emojis={})",
            composed.template(),
            composed.language(),
            link_utils::char_count(&message),
            composed.use_borders(),
            composed.use_emojis()
        );

        message
    }

    fn preview(&self, request: &ComposeRequest) -> Option<String> {
        if !request.has_content() {
            return None;
        }
        Some(self.compose(request))
    }

    #[doc = "Share link for the configured target unless one is given explicitly"]
    fn share_link(&self, message: &str, target: Option<LinkTarget>) -> String {
        let target: LinkTarget = target.unwrap_or(self.style_config.link_target);
        link_utils::share_link(message, target)
    }
}
