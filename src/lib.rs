/*
Description : Template catalog and message formatter for school-to-parent chat messages
              (lesson reports, homework, exam notices, announcements, achievements, meetings).
*/
pub mod common;

pub mod catalog;
pub mod controller;
pub mod enums;
pub mod env_configuration;
pub mod model;
pub mod service;
pub mod traits;
pub mod utils_modules;

pub use catalog::template_catalog::{
    display_name_for, fields_for, footer_for, lead_emoji_for, title_for,
};
pub use common::FieldValues;
pub use enums::{
    compose_error::ComposeError, emoji_category::EmojiCategory, field_kind::FieldKind,
    language::Language, link_target::LinkTarget, template_type::TemplateType,
};
pub use model::{compose_request::ComposeRequest, field_schema::FieldSchema};
pub use model::message_formatter_dto::message_formatter::{format, MessageFormatter};
