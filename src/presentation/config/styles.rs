use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"notice.primary": "#D22730 bold"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for `key`, or `fallback` when the key is not configured.
    pub fn get_or(&self, key: &str, fallback: Style) -> Style {
        self.get(key).copied().unwrap_or(fallback)
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| {
                parse_style(&raw)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parses a style string.
///
/// Tokens are whitespace separated: modifiers (`bold`, `dim`, `italic`,
/// `underlined`, `reversed`), a foreground color, and an optional background
/// color after `on`. Colors accept anything [`Color::from_str`] does, such as
/// `red`, `#D22730` or an indexed `42`.
pub fn parse_style(raw: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut tokens = raw.split_whitespace();
    while let Some(token) = tokens.next() {
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underlined" | "underline" => style = style.add_modifier(Modifier::UNDERLINED),
            "reversed" | "inverse" => style = style.add_modifier(Modifier::REVERSED),
            "on" => {
                let color = tokens
                    .next()
                    .ok_or_else(|| format!("Missing background color in `{raw}`"))?;
                style = style.bg(parse_color(color)?);
            }
            _ => style = style.fg(parse_color(token)?),
        }
    }
    Ok(style)
}

fn parse_color(raw: &str) -> Result<Color, String> {
    Color::from_str(raw).map_err(|_| format!("Unknown color `{raw}`"))
}
