use thiserror::Error;

#[doc = "Errors raised when untrusted strings are resolved into the closed enums at the boundary."]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("unknown template type '{0}' (expected one of: todayLesson, homework, examNotice, announcement, achievement, meeting)")]
    UnknownTemplate(String),

    #[error("unknown language '{0}' (expected 'en' or 'ar')")]
    UnknownLanguage(String),

    #[error("unknown link target '{0}' (expected 'desktop' or 'mobile')")]
    UnknownLinkTarget(String),

    #[error("unsupported request file format '{0}' (expected .toml or .json)")]
    UnsupportedRequestFormat(String),
}
