//! Static bilingual definitions for every template type.
//!
//! Every lookup is a `match` over the closed `TemplateType` enum, so adding a
//! template forces the schema, title, footer, emoji and content renderer to be
//! filled in together.

use crate::enums::{field_kind::*, language::*, template_type::*};

use crate::model::{bilingual::*, field_schema::*};

use crate::enums::field_kind::FieldKind::{Date, Text, Textarea};

const NO_PLACEHOLDER: (&str, &str) = ("", "");

const TODAY_LESSON_FIELDS: &[FieldSchema] = &[
    FieldSchema::new("date", Date, ("Date", "التاريخ"), NO_PLACEHOLDER),
    FieldSchema::new(
        "subject",
        Text,
        ("Subject", "المادة"),
        ("e.g., Mathematics", "مثال: الرياضيات"),
    ),
    FieldSchema::new(
        "topics",
        Textarea,
        ("Topics Covered", "المواضيع المغطاة"),
        ("List the topics covered today...", "اذكر المواضيع التي تمت تغطيتها..."),
    ),
    FieldSchema::new(
        "activity",
        Textarea,
        ("Class Activity", "نشاط الصف"),
        ("Describe the class activity...", "صف نشاط الصف..."),
    ),
    FieldSchema::new(
        "performance",
        Textarea,
        ("Student Performance", "أداء الطالب"),
        ("Overall feedback on student performance...", "التقييم العام لأداء الطالب..."),
    ),
    FieldSchema::new(
        "notes",
        Textarea,
        ("Additional Notes", "ملاحظات إضافية"),
        ("Any other notes for parents...", "أي ملاحظات أخرى لأولياء الأمور..."),
    ),
];

const HOMEWORK_FIELDS: &[FieldSchema] = &[
    FieldSchema::new("dateGiven", Date, ("Date Given", "تاريخ الإعطاء"), NO_PLACEHOLDER),
    FieldSchema::new("dueDate", Date, ("Due Date", "تاريخ التسليم"), NO_PLACEHOLDER),
    FieldSchema::new(
        "subject",
        Text,
        ("Subject", "المادة"),
        ("e.g., Science", "مثال: العلوم"),
    ),
    FieldSchema::new(
        "assignment",
        Textarea,
        ("Assignment Details", "تفاصيل الواجب"),
        ("Describe the homework assignment...", "صف الواجب المنزلي..."),
    ),
    FieldSchema::new(
        "materials",
        Textarea,
        ("Materials Needed", "المواد المطلوبة"),
        ("List required materials...", "اذكر المواد المطلوبة..."),
    ),
    FieldSchema::new(
        "notes",
        Textarea,
        ("Important Notes", "ملاحظات مهمة"),
        ("Any special instructions...", "أي تعليمات خاصة..."),
    ),
];

const EXAM_NOTICE_FIELDS: &[FieldSchema] = &[
    FieldSchema::new(
        "subject",
        Text,
        ("Subject", "المادة"),
        ("e.g., English", "مثال: اللغة الإنجليزية"),
    ),
    FieldSchema::new("date", Date, ("Exam Date", "تاريخ الاختبار"), NO_PLACEHOLDER),
    FieldSchema::new(
        "time",
        Text,
        ("Exam Time", "وقت الاختبار"),
        ("e.g., 9:00 AM - 11:00 AM", "مثال: 9:00 ص - 11:00 ص"),
    ),
    FieldSchema::new(
        "room",
        Text,
        ("Room/Location", "القاعة/المكان"),
        ("e.g., Room 101", "مثال: قاعة 101"),
    ),
    FieldSchema::new(
        "syllabus",
        Textarea,
        ("Syllabus/Topics", "المنهج/المواضيع"),
        ("List chapters or topics to study...", "اذكر الفصول أو المواضيع للمراجعة..."),
    ),
    FieldSchema::new(
        "requirements",
        Textarea,
        ("What to Bring", "ما يجب إحضاره"),
        ("List required items...", "اذكر الأدوات المطلوبة..."),
    ),
];

const ANNOUNCEMENT_FIELDS: &[FieldSchema] = &[
    FieldSchema::new(
        "title",
        Text,
        ("Announcement Title", "عنوان الإعلان"),
        ("e.g., School Holiday", "مثال: عطلة مدرسية"),
    ),
    FieldSchema::new(
        "details",
        Textarea,
        ("Details", "التفاصيل"),
        ("Describe the announcement...", "صف الإعلان..."),
    ),
    FieldSchema::new("date", Date, ("Effective Date", "تاريخ السريان"), NO_PLACEHOLDER),
    FieldSchema::new(
        "action",
        Textarea,
        ("Action Required", "الإجراء المطلوب"),
        ("What parents/students need to do...", "ما يحتاج أولياء الأمور/الطلاب فعله..."),
    ),
];

const ACHIEVEMENT_FIELDS: &[FieldSchema] = &[
    FieldSchema::new(
        "studentName",
        Text,
        ("Student Name", "اسم الطالب"),
        ("Enter student's name", "أدخل اسم الطالب"),
    ),
    FieldSchema::new(
        "class",
        Text,
        ("Class/Section", "الصف/الشعبة"),
        ("e.g., Grade 5-A", "مثال: الصف الخامس-أ"),
    ),
    FieldSchema::new(
        "achievement",
        Textarea,
        ("Achievement", "الإنجاز"),
        ("Describe the achievement...", "صف الإنجاز..."),
    ),
    FieldSchema::new(
        "recognition",
        Textarea,
        ("Recognition/Award", "التكريم/الجائزة"),
        ("Certificate, medal, etc.", "شهادة، ميدالية، إلخ."),
    ),
];

const MEETING_FIELDS: &[FieldSchema] = &[
    FieldSchema::new("date", Date, ("Meeting Date", "تاريخ الاجتماع"), NO_PLACEHOLDER),
    FieldSchema::new(
        "time",
        Text,
        ("Meeting Time", "وقت الاجتماع"),
        ("e.g., 3:00 PM", "مثال: 3:00 م"),
    ),
    FieldSchema::new(
        "venue",
        Text,
        ("Venue", "المكان"),
        ("e.g., School Auditorium", "مثال: قاعة المدرسة"),
    ),
    FieldSchema::new(
        "agenda",
        Textarea,
        ("Agenda", "جدول الأعمال"),
        ("List meeting topics...", "اذكر مواضيع الاجتماع..."),
    ),
    FieldSchema::new(
        "requirements",
        Textarea,
        ("Please Bring", "يرجى إحضار"),
        ("Required documents...", "المستندات المطلوبة..."),
    ),
];

#[doc = "Ordered form fields of a template"]
pub fn fields_for(template: TemplateType) -> &'static [FieldSchema] {
    match template {
        TemplateType::TodayLesson => TODAY_LESSON_FIELDS,
        TemplateType::Homework => HOMEWORK_FIELDS,
        TemplateType::ExamNotice => EXAM_NOTICE_FIELDS,
        TemplateType::Announcement => ANNOUNCEMENT_FIELDS,
        TemplateType::Achievement => ACHIEVEMENT_FIELDS,
        TemplateType::Meeting => MEETING_FIELDS,
    }
}

#[doc = "Bold heading at the top of the message"]
pub fn title_for(template: TemplateType, language: Language) -> &'static str {
    let title: Bilingual = match template {
        TemplateType::TodayLesson => Bilingual::new("Today's Lesson Report", "تقرير درس اليوم"),
        TemplateType::Homework => Bilingual::new("Homework Assignment", "الواجب المنزلي"),
        TemplateType::ExamNotice => Bilingual::new("Exam Notice", "إشعار اختبار"),
        TemplateType::Announcement => Bilingual::new("School Announcement", "إعلان مدرسي"),
        TemplateType::Achievement => Bilingual::new("Student Achievement", "إنجاز طالب"),
        TemplateType::Meeting => Bilingual::new("Parent-Teacher Meeting", "اجتماع أولياء الأمور"),
    };
    title.get(language)
}

#[doc = "Italic closing sentence of the message"]
pub fn footer_for(template: TemplateType, language: Language) -> &'static str {
    let footer: Bilingual = match template {
        TemplateType::TodayLesson => {
            Bilingual::new("Thank you for your attention!", "شكرا لاهتمامكم!")
        }
        TemplateType::Homework => Bilingual::new(
            "Complete on time! Good luck!",
            "أكمله في الوقت المحدد! بالتوفيق!",
        ),
        TemplateType::ExamNotice => {
            Bilingual::new("Study well! You can do it!", "ادرس جيدا! يمكنك فعلها!")
        }
        TemplateType::Announcement => {
            Bilingual::new("Thank you for your cooperation!", "شكرا لتعاونكم!")
        }
        TemplateType::Achievement => Bilingual::new("Keep up the great work!", "واصل التميز!"),
        TemplateType::Meeting => Bilingual::new(
            "Your presence is important! See you there!",
            "حضوركم مهم! نراكم هناك!",
        ),
    };
    footer.get(language)
}

pub fn lead_emoji_for(template: TemplateType) -> &'static str {
    match template {
        TemplateType::TodayLesson => "\u{1F4DA}",
        TemplateType::Homework => "\u{1F4DD}",
        TemplateType::ExamNotice => "\u{1F4CB}",
        TemplateType::Announcement => "\u{1F4E2}",
        TemplateType::Achievement => "\u{1F3C6}",
        TemplateType::Meeting => "\u{1F46A}",
    }
}

#[doc = "Short name shown in the template picker"]
pub fn display_name_for(template: TemplateType, language: Language) -> &'static str {
    let name: Bilingual = match template {
        TemplateType::TodayLesson => Bilingual::new("Today's Lesson", "درس اليوم"),
        TemplateType::Homework => Bilingual::new("Homework", "الواجب المنزلي"),
        TemplateType::ExamNotice => Bilingual::new("Exam Notice", "إشعار اختبار"),
        TemplateType::Announcement => Bilingual::new("Announcement", "إعلان"),
        TemplateType::Achievement => Bilingual::new("Achievement", "إنجاز"),
        TemplateType::Meeting => Bilingual::new("Meeting", "اجتماع"),
    };
    name.get(language)
}
