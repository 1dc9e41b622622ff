//! Emoji picker taxonomy.
//!
//! Grouped glyph sets offered to the person filling in a form. The formatter
//! never reads these; it has its own role-based glyphs in `SectionGlyph`.

use crate::enums::{emoji_category::*, language::*};

use crate::model::bilingual::*;

const SCHOOL: &[&str] = &[
    "📚", "📖", "📝", "✏️", "📕", "📗", "📙", "🎒", "🎓", "🏫", "✍️", "📐", "📏",
];
const TIME: &[&str] = &["📅", "📆", "⏰", "🕐", "🕑", "🕒", "🕓", "⏳", "⌛"];
const STATUS: &[&str] = &[
    "✅", "❌", "⭐", "🌟", "💯", "👍", "👏", "🎯", "🏆", "🥇", "🥈", "🥉", "🏅",
];
const ALERT: &[&str] = &["⚠️", "❗", "❕", "📢", "📣", "🔔", "💡", "📌", "📍"];
const EMOTION: &[&str] = &[
    "😊", "🙂", "😃", "🤗", "💪", "🙏", "❤️", "💖", "🎉", "🎊", "✨", "🌈", "🍀", "🤝",
];
const ARROWS: &[&str] = &["➡️", "⬅️", "⬆️", "⬇️", "▶️", "◀️", "🔸", "🔹", "🔺", "🔻"];
const NUMBERS: &[&str] = &[
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];
const DECORATIVE: &[&str] = &["-", "=", "*", "•", "◆", "◇", "○", "●"];

impl EmojiCategory {
    pub fn glyphs(&self) -> &'static [&'static str] {
        match self {
            EmojiCategory::School => SCHOOL,
            EmojiCategory::Time => TIME,
            EmojiCategory::Status => STATUS,
            EmojiCategory::Alert => ALERT,
            EmojiCategory::Emotion => EMOTION,
            EmojiCategory::Arrows => ARROWS,
            EmojiCategory::Numbers => NUMBERS,
            EmojiCategory::Decorative => DECORATIVE,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let label: Bilingual = match self {
            EmojiCategory::School => Bilingual::new("School", "مدرسة"),
            EmojiCategory::Time => Bilingual::new("Time", "وقت"),
            EmojiCategory::Status => Bilingual::new("Status", "حالة"),
            EmojiCategory::Alert => Bilingual::new("Alert", "تنبيه"),
            EmojiCategory::Emotion => Bilingual::new("Emotion", "مشاعر"),
            EmojiCategory::Arrows => Bilingual::new("Arrows", "أسهم"),
            EmojiCategory::Numbers => Bilingual::new("Numbers", "أرقام"),
            EmojiCategory::Decorative => Bilingual::new("Decorative", "زخرفة"),
        };
        label.get(language)
    }
}

#[doc = "Inserts `glyph` into `value` at the given char cursor and returns the new value and the cursor just past the glyph."]
/// # Arguments
/// * `value` - current field contents
/// * `cursor` - insertion point counted in chars; positions past the end append
/// * `glyph` - emoji picked by the user
///
/// # Returns
/// * `(String, usize)` - updated contents and the char position after the inserted glyph
pub fn insert_at(value: &str, cursor: usize, glyph: &str) -> (String, usize) {
    let char_len: usize = value.chars().count();
    let cursor: usize = cursor.min(char_len);

    let byte_idx: usize = value
        .char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len());

    let mut inserted: String = String::with_capacity(value.len() + glyph.len());
    inserted.push_str(&value[..byte_idx]);
    inserted.push_str(glyph);
    inserted.push_str(&value[byte_idx..]);

    (inserted, cursor + glyph.chars().count())
}
