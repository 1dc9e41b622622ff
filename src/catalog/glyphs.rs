//! Fixed markup understood by the destination chat client.

/// Opening and closing horizontal rule.
pub const HORIZONTAL_RULE: &str = "━━━━━━━━━━━━━━━━━━━━";
/// Divider after the title and before the footer.
pub const DIVIDER: &str = "------------------------";

pub const BOLD_MARKER: &str = "*";
pub const ITALIC_MARKER: &str = "_";
pub const BULLET: &str = "- ";

pub const TAG_GLYPH: &str = "\u{1F3F7}\u{FE0F}";
pub const CAMERA_GLYPH: &str = "\u{1F4F7}";
pub const GRATITUDE_GLYPH: &str = "\u{1F64F}";

pub fn bold(text: &str) -> String {
    format!("{BOLD_MARKER}{text}{BOLD_MARKER}")
}

pub fn italic(text: &str) -> String {
    format!("{ITALIC_MARKER}{text}{ITALIC_MARKER}")
}

#[doc = "`\"{glyph} \"` when emojis are enabled, empty otherwise"]
pub fn glyph_prefix(glyph: &str, use_emojis: bool) -> String {
    if use_emojis {
        format!("{glyph} ")
    } else {
        String::new()
    }
}
