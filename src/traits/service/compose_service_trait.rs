use crate::enums::link_target::*;

use crate::model::compose_request::*;

pub trait ComposeService {
    /// Always renders, even for an empty form.
    fn compose(&self, request: &ComposeRequest) -> String;
    /// `None` while the form holds nothing worth previewing.
    fn preview(&self, request: &ComposeRequest) -> Option<String>;
    fn share_link(&self, message: &str, target: Option<LinkTarget>) -> String;
}
