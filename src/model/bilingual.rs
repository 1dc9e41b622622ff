use crate::enums::language::*;

/// A compiled-in string with its English and Arabic variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Bilingual { en, ar }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}
