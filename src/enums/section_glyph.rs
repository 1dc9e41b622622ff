/// Emoji prefixed to a content line when emojis are enabled.
///
/// Glyphs are named by the semantic role of the line ("date", "subject",
/// "topics", ...) rather than by field key, so several fields share one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionGlyph {
    Calendar,
    Book,
    Pencil,
    Memo,
    Star,
    Pin,
    Clock,
    Location,
    Books,
    Target,
    School,
    Clipboard,
    Warning,
    Sparkles,
    Person,
    Party,
    Clap,
    Write,
    Alarm,
}

impl SectionGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionGlyph::Calendar => "\u{1F4C5}",
            SectionGlyph::Book => "\u{1F4D6}",
            SectionGlyph::Pencil => "\u{270F}\u{FE0F}",
            SectionGlyph::Memo => "\u{1F4DD}",
            SectionGlyph::Star => "\u{2B50}",
            SectionGlyph::Pin => "\u{1F4CC}",
            SectionGlyph::Clock => "\u{1F551}",
            SectionGlyph::Location => "\u{1F4CD}",
            SectionGlyph::Books => "\u{1F4DA}",
            SectionGlyph::Target => "\u{1F3AF}",
            SectionGlyph::School => "\u{1F3EB}",
            SectionGlyph::Clipboard => "\u{1F4CB}",
            SectionGlyph::Warning => "\u{26A0}\u{FE0F}",
            SectionGlyph::Sparkles => "\u{2728}",
            SectionGlyph::Person => "\u{1F464}",
            SectionGlyph::Party => "\u{1F389}",
            SectionGlyph::Clap => "\u{1F44F}",
            SectionGlyph::Write => "\u{270D}\u{FE0F}",
            SectionGlyph::Alarm => "\u{23F0}",
        }
    }
}
