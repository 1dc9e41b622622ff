use crate::common::*;

use crate::enums::compose_error::*;

static MOBILE_UA_PATTERN: once_lazy<Regex> = once_lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile user agent pattern is a valid regex")
});

#[doc = "Which variant of the chat application's 'send text' deep link to build"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    #[default]
    Desktop,
    Mobile,
}

impl LinkTarget {
    pub fn base_url(&self) -> &'static str {
        match self {
            LinkTarget::Desktop => "https://web.whatsapp.com/send?text=",
            LinkTarget::Mobile => "whatsapp://send?text=",
        }
    }

    #[doc = "Picks the mobile scheme for phone/tablet browsers, the web client otherwise"]
    pub fn from_user_agent(user_agent: &str) -> Self {
        if MOBILE_UA_PATTERN.is_match(user_agent) {
            LinkTarget::Mobile
        } else {
            LinkTarget::Desktop
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            LinkTarget::Desktop => "desktop",
            LinkTarget::Mobile => "mobile",
        }
    }
}

impl FromStr for LinkTarget {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "desktop" => Ok(LinkTarget::Desktop),
            "mobile" => Ok(LinkTarget::Mobile),
            other => Err(ComposeError::UnknownLinkTarget(other.to_string())),
        }
    }
}
