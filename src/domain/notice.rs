use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Visual variant of a notice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
    Primary,
    Secondary,
    #[default]
    Info,
}

impl NoticeKind {
    /// Key under which the notice style is looked up in `styles`.
    pub fn style_key(&self) -> String {
        format!("notice.{self}")
    }
}

/// Transient notice content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeContent {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl NoticeContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(NoticeKind::Primary.to_string(), "primary");
        assert_eq!(NoticeKind::Secondary.style_key(), "notice.secondary");
        assert_eq!(NoticeKind::from_str("info").ok(), Some(NoticeKind::Info));
        assert!(NoticeKind::from_str("warning").is_err());
    }
}
