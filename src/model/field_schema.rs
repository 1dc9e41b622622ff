use crate::common::*;

use crate::enums::{field_kind::*, language::*};

#[doc = "One editable value of a template's input form"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct FieldSchema {
    key: &'static str,
    label_en: &'static str,
    label_ar: &'static str,
    kind: FieldKind,
    placeholder_en: &'static str,
    placeholder_ar: &'static str,
}

impl FieldSchema {
    pub const fn new(
        key: &'static str,
        kind: FieldKind,
        label: (&'static str, &'static str),
        placeholder: (&'static str, &'static str),
    ) -> Self {
        FieldSchema {
            key,
            label_en: label.0,
            label_ar: label.1,
            kind,
            placeholder_en: placeholder.0,
            placeholder_ar: placeholder.1,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.label_en,
            Language::Ar => self.label_ar,
        }
    }

    pub fn placeholder(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.placeholder_en,
            Language::Ar => self.placeholder_ar,
        }
    }
}
