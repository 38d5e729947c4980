// ABOUTME: Library module for the deckgen program.
// ABOUTME: Contains the HTML/image to PPTX conversion pipeline.

// Reexport modules
pub mod config;
pub mod convert;
pub mod elements;
pub mod errors;
pub mod fit;
pub mod grouping;
pub mod html;
pub mod layout;
pub mod pptx;
pub mod resources;
pub mod style;
pub mod utils;

// Reexport common types and functions
pub use config::{CanvasConfig, ConversionOptions};
pub use convert::{
    HtmlConverter, ImageConverter, create_presentation_from_html,
    create_presentation_from_images, html_to_pptx, images_to_pptx,
};
pub use elements::{ContentElement, Rect, ShapeKind, SlideGroup};
pub use errors::{DeckError, Result};
pub use pptx::{Metadata, Presentation, Slide, SlideShape, TextFormat, VerticalAnchor};
pub use style::{Align, StyleAttributes};

#[cfg(test)]
mod tests;
