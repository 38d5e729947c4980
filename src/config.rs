// ABOUTME: Configuration module for the deckgen library
// ABOUTME: Provides conversion options with documented defaults and environment variable handling

use crate::errors::{DeckError, Result};
use log::warn;
use std::env;
use std::path::PathBuf;

/// Default canvas width in inches (16:9).
pub const DEFAULT_SLIDE_WIDTH: f64 = 10.0;
/// Default canvas height in inches (16:9).
pub const DEFAULT_SLIDE_HEIGHT: f64 = 5.625;
/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 14;
/// Default font face.
pub const DEFAULT_FONT_FACE: &str = "Arial";

/// Options for a single conversion.
///
/// Every field has a default; explicitly set values override the default
/// field by field. Metadata fields left as `None` fall back to the
/// converter-specific defaults (see [`crate::convert`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Canvas width in inches. Default: 10.
    pub slide_width: f64,
    /// Canvas height in inches. Default: 5.625.
    pub slide_height: f64,
    /// Font size used when an element carries none. Default: 14pt.
    pub default_font_size: u32,
    /// Font face used when an element carries none. Default: "Arial".
    pub default_font_face: String,
    /// Lay out elements that overflow a slide on a following slide instead
    /// of dropping them. Default: false.
    pub carry_overflow: bool,
    /// Directory that relative image sources are resolved against.
    /// Default: the current working directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            default_font_size: DEFAULT_FONT_SIZE,
            default_font_face: DEFAULT_FONT_FACE.to_string(),
            carry_overflow: false,
            base_dir: None,
        }
    }
}

impl ConversionOptions {
    /// Create a new options instance with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from `DECKGEN_*` environment variables.
    /// Missing or unparsable variables keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let slide_width = env_parse("DECKGEN_SLIDE_WIDTH").unwrap_or(defaults.slide_width);
        let slide_height = env_parse("DECKGEN_SLIDE_HEIGHT").unwrap_or(defaults.slide_height);
        let default_font_size =
            env_parse("DECKGEN_FONT_SIZE").unwrap_or(defaults.default_font_size);
        let default_font_face = env::var("DECKGEN_FONT_FACE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.default_font_face);
        let carry_overflow = env::var("DECKGEN_CARRY_OVERFLOW")
            .ok()
            .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.carry_overflow);

        Self {
            title: env::var("DECKGEN_TITLE").ok(),
            author: env::var("DECKGEN_AUTHOR").ok(),
            subject: env::var("DECKGEN_SUBJECT").ok(),
            slide_width,
            slide_height,
            default_font_size,
            default_font_face,
            carry_overflow,
            base_dir: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_slide_size(mut self, width: f64, height: f64) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    pub fn with_default_font(mut self, face: impl Into<String>, size: u32) -> Self {
        self.default_font_face = face.into();
        self.default_font_size = size;
        self
    }

    pub fn with_carry_overflow(mut self, carry: bool) -> Self {
        self.carry_overflow = carry;
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Check that the canvas and font defaults are usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.slide_width), ("height", self.slide_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DeckError::ValidationError(format!(
                    "Slide {} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.default_font_size == 0 {
            return Err(DeckError::ValidationError(
                "Default font size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The canvas these options describe
    pub fn canvas(&self) -> CanvasConfig {
        CanvasConfig::from(self)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparsable value for {}: {:?}", key, raw);
            None
        }
    }
}

/// Size of the presentation canvas in inches, fixed for one conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SLIDE_WIDTH,
            height: DEFAULT_SLIDE_HEIGHT,
        }
    }
}

impl From<&ConversionOptions> for CanvasConfig {
    fn from(options: &ConversionOptions) -> Self {
        Self {
            width: options.slide_width,
            height: options.slide_height,
        }
    }
}
