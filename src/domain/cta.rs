//! Call-to-action tokens and the notices they raise.
//!
//! The mapping is a static table rather than branching logic: each known
//! token owns one `(title, body, kind)` row, and everything else falls back to
//! [`DEFAULT_NOTICE`].

use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::notice::{NoticeContent, NoticeKind};

/// Action carried by a CTA control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CtaAction {
    Login,
    Schedule,
    Contact,
    #[strum(default)]
    Other(String),
}

impl CtaAction {
    /// Parses a raw token as written, without trimming or case folding.
    /// Unknown tokens map to [`CtaAction::Other`].
    pub fn parse(token: &str) -> Self {
        token
            .parse()
            .unwrap_or_else(|_| CtaAction::Other(token.to_string()))
    }

    pub fn token(&self) -> &str {
        match self {
            CtaAction::Login => "login",
            CtaAction::Schedule => "schedule",
            CtaAction::Contact => "contact",
            CtaAction::Other(token) => token,
        }
    }

    pub fn template(&self) -> &'static NoticeTemplate {
        CTA_NOTICES
            .iter()
            .find(|(token, _)| *token == self.token())
            .map(|(_, template)| template)
            .unwrap_or(&DEFAULT_NOTICE)
    }

    pub fn notice(&self) -> NoticeContent {
        self.template().to_content()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTemplate {
    pub title: &'static str,
    pub body: &'static str,
    pub kind: NoticeKind,
}

impl NoticeTemplate {
    pub fn to_content(&self) -> NoticeContent {
        NoticeContent::new(self.title, self.body, self.kind)
    }
}

const CTA_NOTICES: &[(&str, NoticeTemplate)] = &[
    (
        "login",
        NoticeTemplate {
            title: "Login to Asana",
            body: "Visit asana.com and use your @tn.gov email address to access your Tennessee \
                   Department of Health strategic plan projects. Look for projects labeled with \
                   TDH strategic plan goals.",
            kind: NoticeKind::Primary,
        },
    ),
    (
        "schedule",
        NoticeTemplate {
            title: "Schedule Training",
            body: "Contact the TDH Asana Admin team to schedule training: Jason Howes (Director \
                   of Business Intelligence) or Nathan Johnston (Innovation and Systems Manager).",
            kind: NoticeKind::Secondary,
        },
    ),
    (
        "contact",
        NoticeTemplate {
            title: "Contact Support",
            body: "Technical Support: Jason Howes & Nathan Johnston (Asana Admin Team) - \
                   Response: 1-2 business days. Strategic Plan Questions: Olivia Hall - \
                   Response: Same day for urgent items.",
            kind: NoticeKind::Info,
        },
    ),
];

pub const DEFAULT_NOTICE: NoticeTemplate = NoticeTemplate {
    title: "Tennessee Department of Health",
    body: "For additional support with your strategic plan projects, contact Jason Howes, \
           Olivia Hall, or Nathan Johnston.",
    kind: NoticeKind::Info,
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("login", CtaAction::Login)]
    #[case("schedule", CtaAction::Schedule)]
    #[case("contact", CtaAction::Contact)]
    #[case("donate", CtaAction::Other("donate".into()))]
    #[case("", CtaAction::Other(String::new()))]
    #[case(" login", CtaAction::Other(" login".into()))]
    #[case("Login", CtaAction::Other("Login".into()))]
    fn test_parse(#[case] token: &str, #[case] expected: CtaAction) {
        assert_eq!(CtaAction::parse(token), expected);
    }

    #[rstest]
    #[case(CtaAction::Login, "Login to Asana", NoticeKind::Primary)]
    #[case(CtaAction::Schedule, "Schedule Training", NoticeKind::Secondary)]
    #[case(CtaAction::Contact, "Contact Support", NoticeKind::Info)]
    #[case(
        CtaAction::Other("anything".into()),
        "Tennessee Department of Health",
        NoticeKind::Info
    )]
    fn test_notice_table(
        #[case] action: CtaAction,
        #[case] title: &str,
        #[case] kind: NoticeKind,
    ) {
        let notice = action.notice();
        assert_eq!(notice.title, title);
        assert_eq!(notice.kind, kind);
        assert!(!notice.body.is_empty());
    }

    #[test]
    fn test_padded_token_gets_default_notice() {
        assert_eq!(CtaAction::parse("schedule ").notice().title, DEFAULT_NOTICE.title);
    }

    #[test]
    fn test_token_round_trip() {
        assert_eq!(CtaAction::parse("contact").token(), "contact");
        assert_eq!(CtaAction::parse("weird").token(), "weird");
    }
}
