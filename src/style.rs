// ABOUTME: Inline style handling for the deckgen library
// ABOUTME: Parses `style` attribute declarations and normalizes CSS colors to bare hex

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Matches the decimal components inside an `rgb(...)`/`rgba(...)` value.
static COLOR_COMPONENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            _ => None,
        }
    }

    /// DrawingML `algn` attribute value
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
            Align::Right => "r",
        }
    }
}

/// Text styling of a content element. Every field is optional so that a
/// partial value parsed from an inline style can be laid over defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    /// Font size in points.
    pub font_size: Option<u32>,
    pub font_face: Option<String>,
    /// Raw color as written in the markup; see [`normalize_color`].
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub align: Option<Align>,
}

impl StyleAttributes {
    /// Overlay `overrides` on `self`: fields set in `overrides` win,
    /// missing ones keep the value from `self`.
    pub fn merge(mut self, overrides: StyleAttributes) -> Self {
        if overrides.font_size.is_some() {
            self.font_size = overrides.font_size;
        }
        if overrides.font_face.is_some() {
            self.font_face = overrides.font_face;
        }
        if overrides.color.is_some() {
            self.color = overrides.color;
        }
        if overrides.bold.is_some() {
            self.bold = overrides.bold;
        }
        if overrides.italic.is_some() {
            self.italic = overrides.italic;
        }
        if overrides.underline.is_some() {
            self.underline = overrides.underline;
        }
        if overrides.align.is_some() {
            self.align = overrides.align;
        }
        self
    }
}

/// Parse a `style` attribute into the properties deckgen understands.
///
/// Rules are `;` separated and split on their first `:`. Keys are matched
/// case-insensitively; unknown keys and unusable values are ignored. When a
/// key repeats, the last declaration wins.
pub fn parse_inline_style(style: &str) -> StyleAttributes {
    let mut attrs = StyleAttributes::default();

    for rule in style.split(';') {
        let Some((key, value)) = rule.split_once(':') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        match key.as_str() {
            "color" => attrs.color = Some(value.to_string()),
            "font-size" => {
                match parse_leading_int(value).and_then(|size| u32::try_from(size).ok()) {
                    Some(size) if size > 0 => attrs.font_size = Some(size),
                    _ => debug!("Ignoring font-size value {:?}", value),
                }
            }
            "font-family" => attrs.font_face = Some(value.to_string()),
            "font-weight" => {
                let heavy = parse_leading_int(value).is_some_and(|weight| weight >= 600);
                if value.eq_ignore_ascii_case("bold") || heavy {
                    attrs.bold = Some(true);
                }
            }
            "font-style" => {
                if value.eq_ignore_ascii_case("italic") {
                    attrs.italic = Some(true);
                }
            }
            "text-decoration" => {
                if value.to_ascii_lowercase().contains("underline") {
                    attrs.underline = Some(true);
                }
            }
            "text-align" => match Align::parse(value) {
                Some(align) => attrs.align = Some(align),
                None => debug!("Ignoring text-align value {:?}", value),
            },
            _ => {}
        }
    }

    attrs
}

/// Integer prefix of `value`, the way `16px` reads as 16.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Normalize a CSS color to the bare hex form the serializer expects.
///
/// `#rrggbb` loses its `#`, `rgb(r, g, b)` (and `rgba`) becomes lowercase
/// hex of its first three components, anything else passes through, and an
/// absent color is black.
pub fn normalize_color(color: Option<&str>) -> String {
    let Some(color) = color else {
        return "000000".to_string();
    };

    if let Some(hex) = color.strip_prefix('#') {
        return hex.to_string();
    }

    if color.starts_with("rgb") {
        let components: Vec<u32> = COLOR_COMPONENT_REGEX
            .find_iter(color)
            .take(3)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .collect();
        if components.len() == 3 {
            return components
                .iter()
                .map(|c| format!("{:02x}", (*c).min(255)))
                .collect();
        }
    }

    color.to_string()
}
