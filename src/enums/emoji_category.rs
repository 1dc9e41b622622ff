use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiCategory {
    School,
    Time,
    Status,
    Alert,
    Emotion,
    Arrows,
    Numbers,
    Decorative,
}

impl EmojiCategory {
    pub const ALL: [EmojiCategory; 8] = [
        EmojiCategory::School,
        EmojiCategory::Time,
        EmojiCategory::Status,
        EmojiCategory::Alert,
        EmojiCategory::Emotion,
        EmojiCategory::Arrows,
        EmojiCategory::Numbers,
        EmojiCategory::Decorative,
    ];

    pub fn get_name(&self) -> &'static str {
        match self {
            EmojiCategory::School => "school",
            EmojiCategory::Time => "time",
            EmojiCategory::Status => "status",
            EmojiCategory::Alert => "alert",
            EmojiCategory::Emotion => "emotion",
            EmojiCategory::Arrows => "arrows",
            EmojiCategory::Numbers => "numbers",
            EmojiCategory::Decorative => "decorative",
        }
    }
}
