use crate::common::*;

use crate::enums::compose_error::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateType {
    TodayLesson,
    Homework,
    ExamNotice,
    Announcement,
    Achievement,
    Meeting,
}

impl TemplateType {
    /// Catalog order, as shown in the template picker.
    pub const ALL: [TemplateType; 6] = [
        TemplateType::TodayLesson,
        TemplateType::Homework,
        TemplateType::ExamNotice,
        TemplateType::Announcement,
        TemplateType::Achievement,
        TemplateType::Meeting,
    ];

    #[doc = "camelCase identifier used in request files and on the command line"]
    pub fn get_name(&self) -> &'static str {
        match self {
            TemplateType::TodayLesson => "todayLesson",
            TemplateType::Homework => "homework",
            TemplateType::ExamNotice => "examNotice",
            TemplateType::Announcement => "announcement",
            TemplateType::Achievement => "achievement",
            TemplateType::Meeting => "meeting",
        }
    }
}

impl Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_name())
    }
}

impl FromStr for TemplateType {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateType::ALL
            .iter()
            .copied()
            .find(|template| template.get_name() == s.trim())
            .ok_or_else(|| ComposeError::UnknownTemplate(s.to_string()))
    }
}
