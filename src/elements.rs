// ABOUTME: Content data model for the deckgen library
// ABOUTME: Defines the typed elements extracted from markup and the groups they are laid out in

use crate::style::StyleAttributes;

/// A rectangle in canvas units (inches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Line,
}

impl ShapeKind {
    /// DrawingML preset geometry name
    pub fn preset(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
        }
    }
}

/// One atomic piece of slide content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentElement {
    Text {
        content: String,
        style: StyleAttributes,
        bounds: Option<Rect>,
    },
    Image {
        /// File path or URL.
        source: String,
        bounds: Option<Rect>,
        alt: Option<String>,
    },
    /// Never produced by extraction; available to callers that build
    /// element lists by hand.
    Shape {
        kind: ShapeKind,
        bounds: Rect,
        fill: Option<String>,
        stroke: Option<String>,
        /// Stroke width in points.
        stroke_width: Option<f64>,
    },
}

impl ContentElement {
    pub fn text(content: impl Into<String>, style: StyleAttributes) -> Self {
        ContentElement::Text {
            content: content.into(),
            style,
            bounds: None,
        }
    }

    pub fn image(source: impl Into<String>, alt: Option<String>) -> Self {
        ContentElement::Image {
            source: source.into(),
            bounds: None,
            alt,
        }
    }

    /// Font size of a text element, if it has one
    pub fn font_size(&self) -> Option<u32> {
        match self {
            ContentElement::Text { style, .. } => style.font_size,
            _ => None,
        }
    }
}

/// The elements assigned to a single output slide.
pub type SlideGroup = Vec<ContentElement>;
