// ABOUTME: PPTX generation module for the deckgen library
// ABOUTME: Builds presentations from positioned slide shapes and writes the package to disk

use crate::config::CanvasConfig;
use crate::elements::{Rect, ShapeKind};
use crate::errors::{DeckError, Result};
use crate::resources::{ImageData, media_type};
use crate::style::Align;
use crate::utils::ensure_parent_directory_exists;
use chrono::Utc;
use log::{debug, info, warn};
use quick_xml::escape::escape;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::{ZipWriter, write::FileOptions};

/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;
/// EMU per typographic point.
pub const EMU_PER_POINT: f64 = 12_700.0;

/// Slide size limits accepted by PowerPoint, in EMU.
const MIN_SLIDE_EMU: i64 = 914_400;
const MAX_SLIDE_EMU: i64 = 51_206_400;

const NS_DECL: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const REL_TYPE_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Convert inches to EMU
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Vertical anchoring of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    fn as_ooxml(self) -> &'static str {
        match self {
            VerticalAnchor::Top => "t",
            VerticalAnchor::Middle => "ctr",
            VerticalAnchor::Bottom => "b",
        }
    }
}

/// Fully resolved formatting of a text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormat {
    /// Size in points.
    pub font_size: u32,
    pub font_face: String,
    /// Six hex digits, no `#`.
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: Align,
    pub anchor: VerticalAnchor,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            font_size: crate::config::DEFAULT_FONT_SIZE,
            font_face: crate::config::DEFAULT_FONT_FACE.to_string(),
            color: "000000".to_string(),
            bold: false,
            italic: false,
            underline: false,
            align: Align::Left,
            anchor: VerticalAnchor::Top,
        }
    }
}

/// Document-level properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub subject: String,
}

/// One shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideShape {
    Text {
        text: String,
        bounds: Rect,
        format: TextFormat,
    },
    Picture {
        image: ImageData,
        bounds: Rect,
        description: Option<String>,
    },
    Shape {
        kind: ShapeKind,
        bounds: Rect,
        fill: Option<String>,
        stroke: Option<String>,
        /// Stroke width in points.
        stroke_width: Option<f64>,
    },
}

/// A slide under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    shapes: Vec<SlideShape>,
    background: Option<String>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text(&mut self, text: &str, bounds: Rect, format: TextFormat) -> &mut Self {
        self.shapes.push(SlideShape::Text {
            text: text.to_string(),
            bounds,
            format,
        });
        self
    }

    pub fn add_picture(
        &mut self,
        image: ImageData,
        bounds: Rect,
        description: Option<String>,
    ) -> &mut Self {
        self.shapes.push(SlideShape::Picture {
            image,
            bounds,
            description,
        });
        self
    }

    pub fn add_shape(&mut self, shape: SlideShape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Solid background color as six hex digits.
    pub fn set_background(&mut self, color: &str) -> &mut Self {
        self.background = Some(color.to_string());
        self
    }

    pub fn shapes(&self) -> &[SlideShape] {
        &self.shapes
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }
}

/// An in-memory presentation, owned by the conversion that builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    metadata: Metadata,
    canvas: CanvasConfig,
    slides: Vec<Slide>,
}

impl Presentation {
    pub fn new(metadata: Metadata, canvas: CanvasConfig) -> Self {
        Self {
            metadata,
            canvas,
            slides: Vec::new(),
        }
    }

    /// Append an empty slide and return it for editing
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn push_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn canvas(&self) -> CanvasConfig {
        self.canvas
    }

    /// Write the presentation to `output_file`.
    ///
    /// The package is written to a temporary sibling first and renamed into
    /// place, so `output_file` is either complete or untouched.
    pub fn write_to_file(&self, output_file: &Path) -> Result<()> {
        info!("Writing PPTX to {:?}", output_file);

        ensure_parent_directory_exists(output_file)?;

        let file_name = output_file
            .file_name()
            .ok_or_else(|| {
                DeckError::ValidationError(format!("Output path has no file name: {:?}", output_file))
            })?
            .to_string_lossy();
        let temp_path = output_file.with_file_name(format!(
            ".{}.{}.tmp",
            file_name,
            uuid::Uuid::new_v4()
        ));

        let result = fs::File::create(&temp_path)
            .map_err(DeckError::FileReadError)
            .and_then(|file| self.write_to(BufWriter::new(file)))
            .and_then(|writer| {
                writer
                    .into_inner()
                    .map_err(|e| DeckError::FileReadError(e.into_error()))
            })
            .and_then(|file| file.sync_all().map_err(DeckError::FileReadError))
            .and_then(|_| fs::rename(&temp_path, output_file).map_err(DeckError::FileReadError));

        if result.is_err() && temp_path.exists() {
            if let Err(e) = fs::remove_file(&temp_path) {
                warn!("Failed to clean up temporary file {:?}: {}", temp_path, e);
            }
        }

        if result.is_ok() {
            info!("PPTX file created at {:?}", output_file);
        }
        result
    }

    /// Write the package into any seekable sink and hand the sink back.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let (cx, cy) = (emu(self.canvas.width), emu(self.canvas.height));
        for (name, size) in [("width", cx), ("height", cy)] {
            if !(MIN_SLIDE_EMU..=MAX_SLIDE_EMU).contains(&size) {
                return Err(DeckError::PptxError(format!(
                    "Slide {} must be between 1 and 56 inches",
                    name
                )));
            }
        }

        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default();

        // Number media parts across the whole deck
        let mut media_names: Vec<Vec<String>> = Vec::with_capacity(self.slides.len());
        let mut media_types: BTreeMap<&'static str, &'static str> = BTreeMap::new();
        let mut media_count = 0;
        for slide in &self.slides {
            let mut names = Vec::new();
            for shape in &slide.shapes {
                if let SlideShape::Picture { image, .. } = shape {
                    let (ext, mime) = media_type(image.format)?;
                    media_types.insert(ext, mime);
                    media_count += 1;
                    names.push(format!("image{}.{}", media_count, ext));
                }
            }
            media_names.push(names);
        }

        info!("Creating PPTX structure: [Content_Types].xml");
        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(content_types_xml(self.slides.len(), &media_types).as_bytes())?;

        info!("Creating PPTX structure: _rels/.rels");
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(ROOT_RELS_XML.as_bytes())?;

        info!("Creating PPTX structure: docProps");
        zip.start_file("docProps/app.xml", options)?;
        zip.write_all(app_xml(self.slides.len()).as_bytes())?;
        zip.start_file("docProps/core.xml", options)?;
        zip.write_all(core_xml(&self.metadata).as_bytes())?;

        info!("Creating PPTX structure: ppt/presentation.xml");
        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
        zip.write_all(presentation_rels_xml(self.slides.len()).as_bytes())?;
        zip.start_file("ppt/presentation.xml", options)?;
        zip.write_all(presentation_xml(self.slides.len(), cx, cy).as_bytes())?;

        info!("Creating PPTX structure: master, layout and theme");
        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;
        zip.write_all(SLIDE_MASTER_XML.as_bytes())?;
        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;
        zip.write_all(SLIDE_MASTER_RELS_XML.as_bytes())?;
        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
        zip.write_all(SLIDE_LAYOUT_XML.as_bytes())?;
        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
        zip.write_all(SLIDE_LAYOUT_RELS_XML.as_bytes())?;
        zip.start_file("ppt/theme/theme1.xml", options)?;
        zip.write_all(THEME_XML.as_bytes())?;

        for (i, (slide, names)) in self.slides.iter().zip(&media_names).enumerate() {
            let slide_num = i + 1;
            info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);

            let mut picture_index = 0;
            for shape in &slide.shapes {
                if let SlideShape::Picture { image, .. } = shape {
                    let name = &names[picture_index];
                    debug!("Adding image to PPTX: ppt/media/{}", name);
                    zip.start_file(format!("ppt/media/{}", name), options)?;
                    zip.write_all(&image.bytes)?;
                    picture_index += 1;
                }
            }

            zip.start_file(
                format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
                options,
            )?;
            zip.write_all(slide_rels_xml(names).as_bytes())?;

            zip.start_file(format!("ppt/slides/slide{}.xml", slide_num), options)?;
            zip.write_all(slide_xml(slide).as_bytes())?;
        }

        info!("Finalizing PPTX package");
        Ok(zip.finish()?)
    }
}

/// Escaped character data with the characters XML 1.0 forbids removed.
fn xml_text(text: &str) -> String {
    let allowed = |c: &char| {
        !matches!(
            *c,
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
        )
    };
    if text.chars().all(|c| allowed(&c)) {
        return escape(text).into_owned();
    }
    let cleaned: String = text.chars().filter(allowed).collect();
    escape(&cleaned).into_owned()
}

/// Validated six-digit hex color for `srgbClr`
fn srgb(color: &str) -> String {
    if color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit()) {
        color.to_uppercase()
    } else {
        warn!("Invalid color {:?}, using black", color);
        "000000".to_string()
    }
}

fn xfrm(bounds: &Rect) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        emu(bounds.x),
        emu(bounds.y),
        emu(bounds.width).max(0),
        emu(bounds.height).max(0)
    )
}

fn slide_xml(slide: &Slide) -> String {
    let mut xml = format!("{}\n<p:sld {}><p:cSld>", XML_HEADER, NS_DECL);

    if let Some(color) = &slide.background {
        xml.push_str(&format!(
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
            srgb(color)
        ));
    }

    xml.push_str(
        r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    );

    // rId1 is the slide layout
    let mut next_rel = 2;
    for (i, shape) in slide.shapes.iter().enumerate() {
        let id = i + 2;
        match shape {
            SlideShape::Text {
                text,
                bounds,
                format,
            } => write_text_shape(&mut xml, id, text, bounds, format),
            SlideShape::Picture {
                bounds,
                description,
                ..
            } => {
                xml.push_str(&format!(
                    r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}" descr="{descr}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="rId{rel}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
                    id = id,
                    descr = xml_text(description.as_deref().unwrap_or("")),
                    rel = next_rel,
                    xfrm = xfrm(bounds),
                ));
                next_rel += 1;
            }
            SlideShape::Shape {
                kind,
                bounds,
                fill,
                stroke,
                stroke_width,
            } => {
                xml.push_str(&format!(
                    r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Shape {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{xfrm}<a:prstGeom prst="{prst}"><a:avLst/></a:prstGeom>"#,
                    id = id,
                    xfrm = xfrm(bounds),
                    prst = kind.preset(),
                ));
                match fill {
                    Some(color) => xml.push_str(&format!(
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        srgb(color)
                    )),
                    None => xml.push_str("<a:noFill/>"),
                }
                if stroke.is_some() || stroke_width.is_some() {
                    let width = (stroke_width.unwrap_or(1.0) * EMU_PER_POINT).round() as i64;
                    xml.push_str(&format!(
                        r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                        width,
                        srgb(stroke.as_deref().unwrap_or("000000"))
                    ));
                }
                xml.push_str("</p:spPr></p:sp>");
            }
        }
    }

    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    xml
}

fn write_text_shape(xml: &mut String, id: usize, text: &str, bounds: &Rect, format: &TextFormat) {
    xml.push_str(&format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Text {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#,
        id = id,
        xfrm = xfrm(bounds),
    ));
    xml.push_str(&format!(
        r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="{}"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
        format.anchor.as_ooxml()
    ));

    let mut run_props = format!(
        r#"<a:rPr lang="en-US" sz="{}" b="{}" i="{}""#,
        format.font_size * 100,
        u8::from(format.bold),
        u8::from(format.italic)
    );
    if format.underline {
        run_props.push_str(r#" u="sng""#);
    }
    run_props.push_str(&format!(
        r#" dirty="0"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:latin typeface="{face}"/><a:cs typeface="{face}"/></a:rPr>"#,
        color = srgb(&format.color),
        face = xml_text(&format.font_face),
    ));

    for line in text.split('\n') {
        xml.push_str(&format!(
            r#"<a:p><a:pPr algn="{}"/><a:r>{}<a:t>{}</a:t></a:r></a:p>"#,
            format.align.as_ooxml(),
            run_props,
            xml_text(line.trim_end_matches('\r'))
        ));
    }

    xml.push_str("</p:txBody></p:sp>");
}

fn slide_rels_xml(media_names: &[String]) -> String {
    let mut rels = format!(
        r#"{}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
        XML_HEADER, REL_TYPE_BASE
    );
    for (i, name) in media_names.iter().enumerate() {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}/image" Target="../media/{}"/>"#,
            i + 2,
            REL_TYPE_BASE,
            name
        ));
    }
    rels.push_str("</Relationships>");
    rels
}

fn content_types_xml(slide_count: usize, media_types: &BTreeMap<&str, &str>) -> String {
    let mut xml = format!(
        r#"{}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        XML_HEADER
    );
    for (ext, mime) in media_types {
        xml.push_str(&format!(
            r#"<Default Extension="{}" ContentType="{}"/>"#,
            ext, mime
        ));
    }
    xml.push_str(concat!(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
        r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
        r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
        r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
        r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
    ));
    for i in 1..=slide_count {
        xml.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            i
        ));
    }
    xml.push_str("</Types>");
    xml
}

fn app_xml(slide_count: usize) -> String {
    format!(
        r#"{}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>deckgen</Application><Slides>{}</Slides></Properties>"#,
        XML_HEADER, slide_count
    )
}

fn core_xml(metadata: &Metadata) -> String {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"{header}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{title}</dc:title><dc:subject>{subject}</dc:subject><dc:creator>{author}</dc:creator><cp:lastModifiedBy>{author}</cp:lastModifiedBy><cp:revision>1</cp:revision><dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified></cp:coreProperties>"#,
        header = XML_HEADER,
        title = xml_text(&metadata.title),
        subject = xml_text(&metadata.subject),
        author = xml_text(&metadata.author),
        now = now,
    )
}

/// rId1 is the master, rId2 the theme, slides follow from rId3.
fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = format!(
        r#"{header}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{base}/slideMaster" Target="slideMasters/slideMaster1.xml"/><Relationship Id="rId2" Type="{base}/theme" Target="theme/theme1.xml"/>"#,
        header = XML_HEADER,
        base = REL_TYPE_BASE
    );
    for i in 0..slide_count {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}/slide" Target="slides/slide{}.xml"/>"#,
            i + 3,
            REL_TYPE_BASE,
            i + 1
        ));
    }
    rels.push_str("</Relationships>");
    rels
}

fn presentation_xml(slide_count: usize, cx: i64, cy: i64) -> String {
    let slide_ids = (0..slide_count)
        .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 3))
        .collect::<Vec<String>>()
        .join("");
    let slide_id_list = if slide_count == 0 {
        String::new()
    } else {
        format!("<p:sldIdLst>{}</p:sldIdLst>", slide_ids)
    };
    format!(
        r#"{header}
<p:presentation {ns} saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>{slide_id_list}<p:sldSz cx="{cx}" cy="{cy}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#,
        header = XML_HEADER,
        ns = NS_DECL,
        slide_id_list = slide_id_list,
        cx = cx,
        cy = cy
    )
}

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#;

const SLIDE_MASTER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst><p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles></p:sldMaster>"#;

const SLIDE_MASTER_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/></Relationships>"#;

const SLIDE_LAYOUT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1"><p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#;

const SLIDE_LAYOUT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#;

const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements><a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="44546A"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2><a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2><a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4><a:accent5><a:srgbClr val="5B9BD5"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"#;
