pub mod emoji_taxonomy;
pub mod glyphs;
pub mod template_catalog;
