// ABOUTME: Slide layout engine for the deckgen library
// ABOUTME: Stacks the elements of a slide group vertically and detects overflow

use crate::config::{CanvasConfig, ConversionOptions};
use crate::elements::{ContentElement, Rect, ShapeKind, SlideGroup};
use crate::pptx::{TextFormat, VerticalAnchor};
use crate::style::normalize_color;
use log::{debug, warn};
use std::iter;

/// Top, bottom, left and right margin in inches.
pub const MARGIN: f64 = 0.5;
/// Vertical gap after a text block.
pub const TEXT_GAP: f64 = 0.2;
/// Vertical gap after an image.
pub const IMAGE_GAP: f64 = 0.3;
/// Rough number of characters that fit on one line.
pub const CHARS_PER_LINE: usize = 80;
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;
pub const POINTS_PER_INCH: f64 = 72.0;
/// Size of an image element that carries no bounds.
pub const DEFAULT_IMAGE_WIDTH: f64 = 4.0;
pub const DEFAULT_IMAGE_HEIGHT: f64 = 3.0;

/// A positioned element, ready to be handed to the serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Text {
        content: String,
        bounds: Rect,
        format: TextFormat,
    },
    Image {
        source: String,
        bounds: Rect,
        alt: Option<String>,
    },
    Shape {
        kind: ShapeKind,
        bounds: Rect,
        fill: Option<String>,
        stroke: Option<String>,
        stroke_width: Option<f64>,
    },
}

/// Result of laying out one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideLayout {
    pub placements: Vec<Placement>,
    /// The element that did not fit and everything after it, in order.
    pub overflow: Vec<ContentElement>,
}

/// Estimated height in inches of a text block.
pub fn estimate_text_height(content: &str, font_size: u32) -> f64 {
    let lines = content.chars().count().div_ceil(CHARS_PER_LINE).max(1);
    f64::from(font_size) * lines as f64 * LINE_HEIGHT_FACTOR / POINTS_PER_INCH
}

/// Position the elements of `group` top to bottom on one slide.
///
/// Layout stops at the first text or image that would cross the bottom
/// margin; that element and the rest of the group are returned as overflow.
pub fn layout_slide(
    group: SlideGroup,
    canvas: &CanvasConfig,
    options: &ConversionOptions,
) -> SlideLayout {
    let bottom = canvas.height - MARGIN;
    let mut cursor = MARGIN;
    let mut placements = Vec::with_capacity(group.len());
    let mut elements = group.into_iter();

    while let Some(element) = elements.next() {
        // Shapes sit at their own bounds and take no part in the stacking.
        let flow_height = match &element {
            ContentElement::Text { content, style, .. } => Some(estimate_text_height(
                content,
                style.font_size.unwrap_or(options.default_font_size),
            )),
            ContentElement::Image { bounds, .. } => {
                Some(bounds.map_or(DEFAULT_IMAGE_HEIGHT, |b| b.height))
            }
            ContentElement::Shape { .. } => None,
        };
        if flow_height.is_some_and(|height| cursor + height > bottom) {
            return overflowed(placements, element, elements);
        }
        let height = flow_height.unwrap_or_default();

        match element {
            ContentElement::Text { content, style, .. } => {
                let format = TextFormat {
                    font_size: style.font_size.unwrap_or(options.default_font_size),
                    font_face: style
                        .font_face
                        .unwrap_or_else(|| options.default_font_face.clone()),
                    color: normalize_color(style.color.as_deref()),
                    bold: style.bold.unwrap_or(false),
                    italic: style.italic.unwrap_or(false),
                    underline: style.underline.unwrap_or(false),
                    align: style.align.unwrap_or_default(),
                    anchor: VerticalAnchor::Top,
                };
                placements.push(Placement::Text {
                    content,
                    bounds: Rect::new(MARGIN, cursor, canvas.width - 2.0 * MARGIN, height),
                    format,
                });
                cursor += height + TEXT_GAP;
            }
            ContentElement::Image { source, bounds, alt } => {
                let width = bounds.map_or(DEFAULT_IMAGE_WIDTH, |b| b.width);
                placements.push(Placement::Image {
                    source,
                    bounds: Rect::new((canvas.width - width) / 2.0, cursor, width, height),
                    alt,
                });
                cursor += height + IMAGE_GAP;
            }
            ContentElement::Shape {
                kind,
                bounds,
                fill,
                stroke,
                stroke_width,
            } => {
                placements.push(Placement::Shape {
                    kind,
                    bounds,
                    fill,
                    stroke,
                    stroke_width,
                });
            }
        }
    }

    SlideLayout {
        placements,
        overflow: Vec::new(),
    }
}

fn overflowed(
    placements: Vec<Placement>,
    first: ContentElement,
    rest: impl Iterator<Item = ContentElement>,
) -> SlideLayout {
    let overflow: Vec<ContentElement> = iter::once(first).chain(rest).collect();
    debug!(
        "Slide full after {} elements, {} overflow",
        placements.len(),
        overflow.len()
    );
    SlideLayout {
        placements,
        overflow,
    }
}

/// Lay out every group, producing the placements of each output slide.
///
/// Overflow is dropped unless `options.carry_overflow` is set, in which case
/// it continues on the following slide. An element that does not fit even
/// on an empty slide is always dropped.
pub fn layout_groups(groups: Vec<SlideGroup>, options: &ConversionOptions) -> Vec<Vec<Placement>> {
    let canvas = options.canvas();
    let mut slides = Vec::with_capacity(groups.len());

    for group in groups {
        let mut pending = group;
        let first_slide = slides.len();
        loop {
            let SlideLayout {
                placements,
                mut overflow,
            } = layout_slide(pending, &canvas, options);

            if overflow.is_empty() {
                slides.push(placements);
                break;
            }

            if !options.carry_overflow {
                warn!(
                    "Dropping {} element(s) that overflow slide {}",
                    overflow.len(),
                    slides.len() + 1
                );
                slides.push(placements);
                break;
            }

            if placements.is_empty() {
                warn!("Dropping an element that is taller than an empty slide");
                overflow.remove(0);
                if overflow.is_empty() {
                    // Keep one slide per group, but no trailing empty one
                    if slides.len() == first_slide {
                        slides.push(placements);
                    }
                    break;
                }
            } else {
                slides.push(placements);
            }
            pending = overflow;
        }
    }

    slides
}
