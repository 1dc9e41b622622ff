//! Body section of each template.
//!
//! The arrangement of fields is fixed per template and independent of the
//! order in the form schema.

use crate::common::*;

use crate::catalog::glyphs::*;

use crate::enums::{language::*, section_glyph::*, template_type::*};

use crate::model::bilingual::*;

use crate::enums::section_glyph::SectionGlyph::*;

const DATE: Bilingual = Bilingual::new("Date", "التاريخ");
const SUBJECT: Bilingual = Bilingual::new("Subject", "المادة");
const TIME: Bilingual = Bilingual::new("Time", "الوقت");

const TOPICS_COVERED: Bilingual = Bilingual::new("Topics Covered", "المواضيع المغطاة");
const CLASS_ACTIVITY: Bilingual = Bilingual::new("Class Activity", "نشاط الصف");
const STUDENT_PERFORMANCE: Bilingual = Bilingual::new("Student Performance", "أداء الطالب");
const LESSON_NOTES: Bilingual = Bilingual::new("Notes", "ملاحظات");

const DATE_GIVEN: Bilingual = Bilingual::new("Date Given", "تاريخ الإعطاء");
const DUE_DATE: Bilingual = Bilingual::new("Due Date", "تاريخ التسليم");
const ASSIGNMENT: Bilingual = Bilingual::new("Assignment", "الواجب");
const MATERIALS_NEEDED: Bilingual = Bilingual::new("Materials Needed", "المواد المطلوبة");
const IMPORTANT_NOTES: Bilingual = Bilingual::new("Important Notes", "ملاحظات مهمة");

const UPCOMING_EXAMINATION: Bilingual = Bilingual::new("Upcoming Examination", "الاختبار القادم");
const ROOM: Bilingual = Bilingual::new("Room", "القاعة");
const SYLLABUS: Bilingual = Bilingual::new("Syllabus", "المنهج");
const WHAT_TO_BRING: Bilingual = Bilingual::new("What to Bring", "ما يجب إحضاره");

const IMPORTANT_NOTICE: Bilingual = Bilingual::new("Important Notice", "إشعار مهم");
const DETAILS: Bilingual = Bilingual::new("Details", "التفاصيل");
const EFFECTIVE_DATE: Bilingual = Bilingual::new("Effective Date", "تاريخ السريان");
const ACTION_REQUIRED: Bilingual = Bilingual::new("Action Required", "الإجراء المطلوب");

const CONGRATULATIONS: Bilingual = Bilingual::new("Congratulations!", "مبروك!");
const STUDENT: Bilingual = Bilingual::new("Student", "الطالب");
const CLASS: Bilingual = Bilingual::new("Class", "الصف");
const ACHIEVEMENT: Bilingual = Bilingual::new("Achievement", "الإنجاز");
const RECOGNITION: Bilingual = Bilingual::new("Recognition", "التكريم");
const PROUD_CLOSING: Bilingual = Bilingual::new(
    "We are proud of this accomplishment!",
    "نحن فخورون بهذا الإنجاز!",
);

const PTM_INVITATION: Bilingual = Bilingual::new("PTM Invitation", "دعوة لاجتماع");
const VENUE: Bilingual = Bilingual::new("Venue", "المكان");
const AGENDA: Bilingual = Bilingual::new("Agenda", "جدول الأعمال");
const PLEASE_BRING: Bilingual = Bilingual::new("Please bring", "يرجى إحضار");

#[doc = "Value of a field if it holds anything other than whitespace"]
pub fn field_value<'a>(fields: &'a FieldValues, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

/// Accumulates body lines for one template.
struct ContentWriter<'a> {
    lines: Vec<String>,
    fields: &'a FieldValues,
    language: Language,
    use_emojis: bool,
}

impl<'a> ContentWriter<'a> {
    fn new(fields: &'a FieldValues, language: Language, use_emojis: bool) -> Self {
        ContentWriter {
            lines: Vec::new(),
            fields,
            language,
            use_emojis,
        }
    }

    fn has(&self, key: &str) -> bool {
        field_value(self.fields, key).is_some()
    }

    fn prefix(&self, glyph: SectionGlyph) -> String {
        glyph_prefix(glyph.as_str(), self.use_emojis)
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// `{glyph }*{label}*`, emitted unconditionally.
    fn heading(&mut self, glyph: SectionGlyph, label: Bilingual) {
        let line: String = format!("{}{}", self.prefix(glyph), bold(label.get(self.language)));
        self.lines.push(line);
    }

    /// `{glyph }{text}`, emitted unconditionally.
    fn plain(&mut self, glyph: SectionGlyph, text: Bilingual) {
        let line: String = format!("{}{}", self.prefix(glyph), text.get(self.language));
        self.lines.push(line);
    }

    /// `{glyph }{label}: {value}`
    fn field_line(&mut self, key: &str, glyph: SectionGlyph, label: Bilingual) -> bool {
        let Some(value) = field_value(self.fields, key) else {
            return false;
        };

        let line: String = format!("{}{}: {}", self.prefix(glyph), label.get(self.language), value);
        self.lines.push(line);
        true
    }

    /// The value itself in bold, no label.
    fn bold_value(&mut self, key: &str) -> bool {
        let Some(value) = field_value(self.fields, key) else {
            return false;
        };

        self.lines.push(bold(value));
        true
    }

    fn section_label(&mut self, glyph: SectionGlyph, label: Bilingual) {
        let label_text: String = format!("{}:", label.get(self.language));
        let line: String = format!("{}{}", self.prefix(glyph), bold(&label_text));
        self.lines.push(line);
    }

    /// Bold label followed by one `- item` per non-blank line of the value.
    fn list_section(&mut self, key: &str, glyph: SectionGlyph, label: Bilingual) -> bool {
        let Some(value) = field_value(self.fields, key) else {
            return false;
        };

        self.section_label(glyph, label);
        for item in value.split('\n').map(str::trim).filter(|item| !item.is_empty()) {
            self.lines.push(format!("{BULLET}{item}"));
        }
        true
    }

    /// Bold label followed by the value verbatim, embedded newlines included.
    fn prose_section(&mut self, key: &str, glyph: SectionGlyph, label: Bilingual) -> bool {
        let Some(value) = field_value(self.fields, key) else {
            return false;
        };

        self.section_label(glyph, label);
        self.lines.push(value.to_string());
        true
    }

    fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[doc = "Body lines of a template; blank strings are spacer lines"]
pub fn render_template_content(
    template: TemplateType,
    fields: &FieldValues,
    language: Language,
    use_emojis: bool,
) -> Vec<String> {
    let mut writer: ContentWriter<'_> = ContentWriter::new(fields, language, use_emojis);

    match template {
        TemplateType::TodayLesson => write_today_lesson(&mut writer),
        TemplateType::Homework => write_homework(&mut writer),
        TemplateType::ExamNotice => write_exam_notice(&mut writer),
        TemplateType::Announcement => write_announcement(&mut writer),
        TemplateType::Achievement => write_achievement(&mut writer),
        TemplateType::Meeting => write_meeting(&mut writer),
    }

    writer.into_lines()
}

fn write_today_lesson(w: &mut ContentWriter<'_>) {
    w.field_line("date", Calendar, DATE);
    w.field_line("subject", Book, SUBJECT);
    w.blank();

    if w.list_section("topics", Pencil, TOPICS_COVERED) {
        w.blank();
    }
    if w.prose_section("activity", Memo, CLASS_ACTIVITY) {
        w.blank();
    }
    w.prose_section("performance", Star, STUDENT_PERFORMANCE);

    if w.has("notes") {
        w.blank();
        w.prose_section("notes", Pin, LESSON_NOTES);
    }
}

fn write_homework(w: &mut ContentWriter<'_>) {
    w.field_line("dateGiven", Calendar, DATE_GIVEN);
    w.field_line("dueDate", Calendar, DUE_DATE);
    w.field_line("subject", Book, SUBJECT);
    w.blank();

    if w.prose_section("assignment", Write, ASSIGNMENT) {
        w.blank();
    }
    if w.list_section("materials", Books, MATERIALS_NEEDED) {
        w.blank();
    }
    w.prose_section("notes", Alarm, IMPORTANT_NOTES);
}

fn write_exam_notice(w: &mut ContentWriter<'_>) {
    w.heading(Target, UPCOMING_EXAMINATION);
    w.blank();

    w.field_line("subject", Book, SUBJECT);
    w.field_line("date", Calendar, DATE);
    w.field_line("time", Clock, TIME);
    w.field_line("room", Location, ROOM);
    w.blank();

    if w.list_section("syllabus", Books, SYLLABUS) {
        w.blank();
    }
    w.list_section("requirements", Memo, WHAT_TO_BRING);
}

fn write_announcement(w: &mut ContentWriter<'_>) {
    w.heading(School, IMPORTANT_NOTICE);
    w.blank();

    w.bold_value("title");
    w.blank();

    if w.prose_section("details", Clipboard, DETAILS) {
        w.blank();
    }
    w.field_line("date", Calendar, EFFECTIVE_DATE);
    w.blank();

    w.prose_section("action", Warning, ACTION_REQUIRED);
}

fn write_achievement(w: &mut ContentWriter<'_>) {
    w.heading(Sparkles, CONGRATULATIONS);
    w.blank();

    w.field_line("studentName", Person, STUDENT);
    w.field_line("class", Books, CLASS);
    w.blank();

    if w.prose_section("achievement", Target, ACHIEVEMENT) {
        w.blank();
    }
    if w.prose_section("recognition", Party, RECOGNITION) {
        w.blank();
    }
    w.plain(Clap, PROUD_CLOSING);
}

fn write_meeting(w: &mut ContentWriter<'_>) {
    w.heading(Clipboard, PTM_INVITATION);
    w.blank();

    w.field_line("date", Calendar, DATE);
    w.field_line("time", Clock, TIME);
    w.field_line("venue", Location, VENUE);
    w.blank();

    if w.list_section("agenda", Memo, AGENDA) {
        w.blank();
    }
    w.list_section("requirements", Warning, PLEASE_BRING);
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn whitespace_only_values_are_absent() {
        let fields: FieldValues = values(&[("subject", "   "), ("date", "2024-05-01")]);
        assert_eq!(field_value(&fields, "subject"), None);
        assert_eq!(field_value(&fields, "date"), Some("2024-05-01"));
        assert_eq!(field_value(&fields, "missing"), None);
    }

    #[test]
    fn list_fields_become_trimmed_bullets() {
        let fields: FieldValues = values(&[("topics", "  Fractions \n\n   \nDecimals\r\n")]);
        let lines: Vec<String> =
            render_template_content(TemplateType::TodayLesson, &fields, Language::En, false);

        assert_eq!(
            lines,
            vec!["", "*Topics Covered:*", "- Fractions", "- Decimals", ""]
        );
    }

    #[test]
    fn prose_fields_keep_embedded_newlines() {
        let fields: FieldValues = values(&[("assignment", "Read pages 1-3\n  then summarise")]);
        let lines: Vec<String> =
            render_template_content(TemplateType::Homework, &fields, Language::En, false);

        assert_eq!(
            lines,
            vec!["", "*Assignment:*", "Read pages 1-3\n  then summarise", ""]
        );
    }

    #[test]
    fn lesson_without_fields_is_a_single_spacer() {
        let lines: Vec<String> = render_template_content(
            TemplateType::TodayLesson,
            &FieldValues::new(),
            Language::En,
            true,
        );
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn lesson_notes_are_preceded_by_a_spacer() {
        let fields: FieldValues = values(&[("performance", "Good"), ("notes", "Bring a ruler")]);
        let lines: Vec<String> =
            render_template_content(TemplateType::TodayLesson, &fields, Language::En, true);

        assert_eq!(
            lines,
            vec![
                "",
                "⭐ *Student Performance:*",
                "Good",
                "",
                "📌 *Notes:*",
                "Bring a ruler",
            ]
        );
    }

    #[test]
    fn fixed_headings_survive_empty_forms() {
        let empty: FieldValues = FieldValues::new();

        let exam = render_template_content(TemplateType::ExamNotice, &empty, Language::En, false);
        assert_eq!(exam[0], "*Upcoming Examination*");

        let notice = render_template_content(TemplateType::Announcement, &empty, Language::En, false);
        assert_eq!(notice[0], "*Important Notice*");

        let meeting = render_template_content(TemplateType::Meeting, &empty, Language::Ar, false);
        assert_eq!(meeting[0], "*دعوة لاجتماع*");

        let achievement =
            render_template_content(TemplateType::Achievement, &empty, Language::En, true);
        assert_eq!(achievement[0], "✨ *Congratulations!*");
        assert_eq!(
            achievement.last().map(String::as_str),
            Some("👏 We are proud of this accomplishment!")
        );
    }

    #[test]
    fn announcement_title_is_bold_without_label() {
        let fields: FieldValues = values(&[("title", "School Holiday"), ("date", "2024-06-01")]);
        let lines: Vec<String> =
            render_template_content(TemplateType::Announcement, &fields, Language::En, true);

        assert_eq!(
            lines,
            vec![
                "🏫 *Important Notice*",
                "",
                "*School Holiday*",
                "",
                "📅 Effective Date: 2024-06-01",
                "",
            ]
        );
    }

    #[test]
    fn meeting_in_arabic_with_emojis() {
        let fields: FieldValues = values(&[
            ("date", "2024-05-10"),
            ("venue", "Hall"),
            ("requirements", "ID\nReport card"),
        ]);
        let lines: Vec<String> =
            render_template_content(TemplateType::Meeting, &fields, Language::Ar, true);

        assert_eq!(
            lines,
            vec![
                "📋 *دعوة لاجتماع*",
                "",
                "📅 التاريخ: 2024-05-10",
                "📍 المكان: Hall",
                "",
                "⚠\u{fe0f} *يرجى إحضار:*",
                "- ID",
                "- Report card",
            ]
        );
    }

    #[test]
    fn schema_order_does_not_drive_output_order() {
        // exam notice schema lists subject before date; homework lists dates first
        let fields: FieldValues = values(&[("subject", "Science"), ("dueDate", "Fri"), ("dateGiven", "Mon")]);
        let lines: Vec<String> =
            render_template_content(TemplateType::Homework, &fields, Language::En, false);

        assert_eq!(
            lines,
            vec!["Date Given: Mon", "Due Date: Fri", "Subject: Science", ""]
        );
    }
}
