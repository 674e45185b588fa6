use serde::{Deserialize, Serialize};

/// One addressable unit of display content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Short display name used in navigation summaries.
    pub name: String,
    /// Heading drawn at the top of the slide. Falls back to `name` when empty.
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<String>,
}

impl Slide {
    pub fn new(name: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            name: name.into(),
            heading: String::new(),
            body,
        }
    }

    pub fn heading(&self) -> &str {
        if self.heading.is_empty() {
            &self.name
        } else {
            &self.heading
        }
    }
}

/// Table-of-contents link. `slide` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub label: String,
    pub slide: usize,
}

/// Call-to-action control on the final slide. `action` is the raw token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaButton {
    pub label: String,
    #[serde(default)]
    pub action: String,
}

/// The fixed, ordered collection of slides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub toc: Vec<TocEntry>,
    #[serde(default)]
    pub cta_buttons: Vec<CtaButton>,
    #[serde(default)]
    pub footer: String,
    /// Badge pinned to the bottom-right corner; empty for none.
    #[serde(default)]
    pub branding: String,
}

impl Deck {
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Self {
        Self {
            title: title.into(),
            slides,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Display name of the slide at `index`, or an empty string when absent.
    pub fn name(&self, index: usize) -> &str {
        self.slide(index).map(|s| s.name.as_str()).unwrap_or_default()
    }

    /// Resolves a 1-based TOC target to a 0-based index without range checks.
    /// Range checks belong to the navigator.
    pub fn toc_target(&self, entry: usize) -> Option<i64> {
        self.toc.get(entry).map(|e| e.slide as i64 - 1)
    }

    pub fn cta_button(&self, index: usize) -> Option<&CtaButton> {
        self.cta_buttons.get(index)
    }
}
