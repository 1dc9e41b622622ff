use crate::common::*;

use crate::catalog::{glyphs::*, template_catalog::*};

use crate::enums::{language::*, template_type::*};

use crate::model::bilingual::*;
use crate::model::message_formatter_dto::template_content::*;

const ASSESSMENT_LABEL: Bilingual = Bilingual::new("Assessment", "التقييم");
const ACTIVITY_PHOTOS_LABEL: Bilingual = Bilingual::new("Activity Photos", "صور النشاط");

pub trait MessageFormatter {
    fn get_chat_format(&self) -> String;
}

#[doc = "Photos starting with `http` are linked inline; everything else travels as an attachment"]
pub fn is_photo_url(photo: &str) -> bool {
    photo.starts_with("http")
}

fn attachment_note(count: usize, language: Language) -> String {
    match language {
        Language::En => format!("({} photo(s) attached)", count),
        Language::Ar => format!("({} صورة مرفقة)", count),
    }
}

#[doc = "Renders the final chat message for a template"]
/// Total and deterministic: every combination of inputs yields a message and
/// identical inputs yield identical output.
///
/// # Arguments
/// * `template` - which template to render
/// * `fields` - field key → entered value; missing or blank values are omitted
/// * `language` - language of every label, title and footer
/// * `use_borders` - wrap the message in rules and add dividers
/// * `use_emojis` - prefix lines with role glyphs
/// * `tags` - assessment chips, in order
/// * `photos` - URLs or local attachment references, in order
///
/// # Returns
/// * `String` - lines joined with `\n`
pub fn format(
    template: TemplateType,
    fields: &FieldValues,
    language: Language,
    use_borders: bool,
    use_emojis: bool,
    tags: &[String],
    photos: &[String],
) -> String {
    let mut parts: Vec<String> = Vec::new();

    /* 1. Header */
    let title: &str = title_for(template, language);

    if use_borders {
        parts.push(HORIZONTAL_RULE.to_string());
    }

    if use_emojis {
        let emoji: &str = lead_emoji_for(template);
        parts.push(bold(&format!("{} {} {}", emoji, title, emoji)));
    } else {
        parts.push(bold(title));
    }

    if use_borders {
        parts.push(DIVIDER.to_string());
    }
    parts.push(String::new());

    /* 2. Body */
    let content: String = render_template_content(template, fields, language, use_emojis).join("\n");
    if !content.is_empty() {
        parts.push(content);
    }

    /* 3. Assessment tags */
    if !tags.is_empty() {
        parts.push(String::new());
        let label: String = format!("{}:", ASSESSMENT_LABEL.get(language));
        parts.push(format!("{}{}", glyph_prefix(TAG_GLYPH, use_emojis), bold(&label)));

        let chips: Vec<String> = tags.iter().map(|tag| format!("[{}]", tag)).collect();
        parts.push(chips.join(" "));
    }

    /* 4. Photos */
    if !photos.is_empty() {
        parts.push(String::new());
        let label: String = format!("{}:", ACTIVITY_PHOTOS_LABEL.get(language));
        parts.push(format!("{}{}", glyph_prefix(CAMERA_GLYPH, use_emojis), bold(&label)));

        /* numbering follows the position in the full list, attachments included */
        for (index, photo) in photos.iter().enumerate() {
            if is_photo_url(photo) {
                parts.push(format!("{}. {}", index + 1, photo));
            }
        }

        let attached: usize = photos.iter().filter(|photo| !is_photo_url(photo)).count();
        if attached > 0 {
            parts.push(attachment_note(attached, language));
        }
    }

    parts.push(String::new());

    /* 5. Footer */
    if use_borders {
        parts.push(DIVIDER.to_string());
    }

    let footer: &str = footer_for(template, language);
    let gratitude: String = if use_emojis {
        format!(" {}", GRATITUDE_GLYPH)
    } else {
        String::new()
    };
    parts.push(italic(&format!("{}{}", footer, gratitude)));

    if use_borders {
        parts.push(HORIZONTAL_RULE.to_string());
    }

    parts.join("\n")
}
