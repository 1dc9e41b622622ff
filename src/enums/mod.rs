pub mod compose_error;
pub mod emoji_category;
pub mod field_kind;
pub mod language;
pub mod link_target;
pub mod log_rotation;
pub mod section_glyph;
pub mod template_type;
