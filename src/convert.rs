// ABOUTME: Conversion pipelines for the deckgen library
// ABOUTME: Turns HTML markup or image files into presentations and writes them out

use crate::config::ConversionOptions;
use crate::elements::Rect;
use crate::errors::{DeckError, Result};
use crate::fit::fit_image;
use crate::grouping::{SLIDE_ELEMENT_CAP, group_elements};
use crate::html::{extract_elements, extract_title, parse_document};
use crate::layout::{MARGIN, Placement, layout_groups};
use crate::pptx::{Metadata, Presentation, Slide, SlideShape, TextFormat, VerticalAnchor};
use crate::resources::{ImageData, ImageResource, read_local_bytes};
use crate::style::Align;
use log::info;
use std::path::Path;

/// Caption height in inches below an image slide.
const CAPTION_HEIGHT: f64 = 0.4;
/// Distance from the bottom edge to the top of the caption.
const CAPTION_OFFSET: f64 = 0.6;
const CAPTION_FONT_SIZE: u32 = 12;
const CAPTION_COLOR: &str = "666666";

fn metadata_with_defaults(
    options: &ConversionOptions,
    title: &str,
    author: &str,
    subject: &str,
) -> Metadata {
    Metadata {
        title: options.title.clone().unwrap_or_else(|| title.to_string()),
        author: options.author.clone().unwrap_or_else(|| author.to_string()),
        subject: options.subject.clone().unwrap_or_else(|| subject.to_string()),
    }
}

/// Converts HTML markup into slides.
#[derive(Debug)]
pub struct HtmlConverter {
    options: ConversionOptions,
    presentation: Presentation,
}

impl HtmlConverter {
    pub fn new(options: ConversionOptions) -> Result<Self> {
        options.validate()?;
        let metadata = metadata_with_defaults(
            &options,
            "Converted Presentation",
            "HTML to PPT Converter",
            "Generated from HTML",
        );
        let presentation = Presentation::new(metadata, options.canvas());
        Ok(Self {
            options,
            presentation,
        })
    }

    /// Convert `html` and append the resulting slides.
    ///
    /// Nothing is appended if any referenced image fails to load.
    pub fn convert_html(&mut self, html: &str) -> Result<&mut Presentation> {
        info!("Converting HTML ({} bytes)", html.len());

        let document = parse_document(html);
        let title = extract_title(&document);
        let elements = extract_elements(&document);
        let groups = group_elements(elements, SLIDE_ELEMENT_CAP);
        let laid_out = layout_groups(groups, &self.options);

        let mut slides = Vec::with_capacity(laid_out.len());
        for placements in laid_out {
            slides.push(self.build_slide(placements)?);
        }

        if self.options.title.is_none() {
            if let Some(title) = title {
                self.presentation.metadata_mut().title = title;
            }
        }

        info!("Created {} slides from HTML", slides.len());
        for slide in slides {
            self.presentation.push_slide(slide);
        }
        Ok(&mut self.presentation)
    }

    fn build_slide(&self, placements: Vec<Placement>) -> Result<Slide> {
        let mut slide = Slide::new();
        for placement in placements {
            match placement {
                Placement::Text {
                    content,
                    bounds,
                    format,
                } => {
                    slide.add_text(&content, bounds, format);
                }
                Placement::Image {
                    source,
                    bounds,
                    alt,
                } => {
                    let image = ImageResource::new(&source).load(self.options.base_dir.as_deref())?;
                    slide.add_picture(image, bounds, alt);
                }
                Placement::Shape {
                    kind,
                    bounds,
                    fill,
                    stroke,
                    stroke_width,
                } => {
                    slide.add_shape(SlideShape::Shape {
                        kind,
                        bounds,
                        fill,
                        stroke,
                        stroke_width,
                    });
                }
            }
        }
        Ok(slide)
    }

    /// Write the presentation built so far
    pub fn save(&self, output_file: &Path) -> Result<()> {
        self.presentation.write_to_file(output_file)
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn into_presentation(self) -> Presentation {
        self.presentation
    }
}

/// Converts images into one slide each, scaled to fit and centered.
#[derive(Debug)]
pub struct ImageConverter {
    options: ConversionOptions,
    presentation: Presentation,
}

impl ImageConverter {
    pub fn new(options: ConversionOptions) -> Result<Self> {
        options.validate()?;
        let metadata = metadata_with_defaults(
            &options,
            "Image Presentation",
            "Image to PPT Converter",
            "Generated from Images",
        );
        let presentation = Presentation::new(metadata, options.canvas());
        Ok(Self {
            options,
            presentation,
        })
    }

    /// Add one slide for the image at `path`, captioned with its file stem
    pub fn convert_image(&mut self, path: &Path) -> Result<&mut Presentation> {
        self.convert_images(&[path])
    }

    /// Add one slide per image, in order. Nothing is added if any image
    /// is missing or unreadable.
    pub fn convert_images<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<&mut Presentation> {
        let mut slides = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            info!("Adding image slide for {:?}", path);
            let image = ImageData::from_bytes(read_local_bytes(path)?)?;
            let caption = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
            slides.push(self.image_slide(image, caption));
        }

        for slide in slides {
            self.presentation.push_slide(slide);
        }
        Ok(&mut self.presentation)
    }

    /// Add a slide for an in-memory image, with an optional caption
    pub fn convert_image_bytes(
        &mut self,
        bytes: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<&mut Presentation> {
        let image = ImageData::from_bytes(bytes)?;
        let slide = self.image_slide(image, caption.map(str::to_string));
        self.presentation.push_slide(slide);
        Ok(&mut self.presentation)
    }

    fn image_slide(&self, image: ImageData, caption: Option<String>) -> Slide {
        let canvas = self.options.canvas();
        let bounds = fit_image(image.width, image.height, &canvas);

        let mut slide = Slide::new();
        slide.add_picture(image, bounds, caption.clone());

        if let Some(caption) = caption {
            let format = TextFormat {
                font_size: CAPTION_FONT_SIZE,
                font_face: self.options.default_font_face.clone(),
                color: CAPTION_COLOR.to_string(),
                align: Align::Center,
                anchor: VerticalAnchor::Middle,
                ..TextFormat::default()
            };
            let caption_bounds = Rect::new(
                MARGIN,
                canvas.height - CAPTION_OFFSET,
                canvas.width - 2.0 * MARGIN,
                CAPTION_HEIGHT,
            );
            slide.add_text(&caption, caption_bounds, format);
        }

        slide
    }

    /// Write the presentation built so far
    pub fn save(&self, output_file: &Path) -> Result<()> {
        self.presentation.write_to_file(output_file)
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn into_presentation(self) -> Presentation {
        self.presentation
    }
}

/// Build a presentation from HTML without writing it
pub fn create_presentation_from_html(
    html: &str,
    options: &ConversionOptions,
) -> Result<Presentation> {
    let mut converter = HtmlConverter::new(options.clone())?;
    converter.convert_html(html)?;
    Ok(converter.into_presentation())
}

/// Build a presentation from image files without writing it
pub fn create_presentation_from_images<P: AsRef<Path>>(
    paths: &[P],
    options: &ConversionOptions,
) -> Result<Presentation> {
    if paths.is_empty() {
        return Err(DeckError::ValidationError("No images given".to_string()));
    }
    let mut converter = ImageConverter::new(options.clone())?;
    converter.convert_images(paths)?;
    Ok(converter.into_presentation())
}

/// Convert HTML markup to a PPTX file
pub fn html_to_pptx(html: &str, output_file: &Path, options: &ConversionOptions) -> Result<()> {
    create_presentation_from_html(html, options)?.write_to_file(output_file)
}

/// Convert one or more images to a PPTX file, one slide per image
pub fn images_to_pptx<P: AsRef<Path>>(
    paths: &[P],
    output_file: &Path,
    options: &ConversionOptions,
) -> Result<()> {
    create_presentation_from_images(paths, options)?.write_to_file(output_file)
}
