// ABOUTME: HTML extraction module for the deckgen library
// ABOUTME: Walks a parsed document and emits a flat, ordered list of content elements

use crate::elements::ContentElement;
use crate::style::{Align, StyleAttributes, parse_inline_style};
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

/// Tags whose text already includes any nested `strong`/`b`.
const BLOCK_PARENTS: [&str; 8] = ["p", "li", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Parse raw markup into a document tree. html5ever recovers from
/// malformed input, so this never fails.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Default font size in points for a heading tag.
pub fn heading_font_size(tag: &str) -> u32 {
    match tag.to_ascii_lowercase().as_str() {
        "h1" => 32,
        "h2" => 28,
        "h3" => 24,
        "h4" => 20,
        "h5" => 18,
        "h6" => 16,
        _ => 16,
    }
}

/// Extract content elements in a fixed order: headings, paragraphs, list
/// items, images, then stand-alone emphasis. Document order is kept only
/// within each kind.
pub fn extract_elements(document: &Html) -> Vec<ContentElement> {
    let mut elements = Vec::new();

    for heading in select(document, "h1, h2, h3, h4, h5, h6") {
        let Some(text) = trimmed_text(&heading) else {
            debug!("Skipping empty <{}>", heading.value().name());
            continue;
        };
        let defaults = StyleAttributes {
            font_size: Some(heading_font_size(heading.value().name())),
            bold: Some(true),
            align: Some(Align::Center),
            ..Default::default()
        };
        elements.push(ContentElement::text(text, resolve_style(&heading, defaults)));
    }

    for paragraph in select(document, "p") {
        if let Some(text) = trimmed_text(&paragraph) {
            elements.push(ContentElement::text(
                text,
                resolve_style(&paragraph, body_defaults()),
            ));
        }
    }

    for item in select(document, "li") {
        if let Some(text) = trimmed_text(&item) {
            elements.push(ContentElement::text(
                format!("• {}", text),
                resolve_style(&item, body_defaults()),
            ));
        }
    }

    for img in select(document, "img") {
        match img.value().attr("src") {
            Some(src) if !src.trim().is_empty() => elements.push(ContentElement::image(
                src,
                img.value().attr("alt").map(str::to_string),
            )),
            Some(_) => debug!("Skipping <img> with empty src"),
            None => debug!("Skipping <img> without src"),
        }
    }

    for emphasis in select(document, "strong, b") {
        let Some(text) = trimmed_text(&emphasis) else {
            continue;
        };
        if has_block_parent(&emphasis) {
            continue;
        }
        let defaults = StyleAttributes {
            font_size: Some(14),
            bold: Some(true),
            ..Default::default()
        };
        elements.push(ContentElement::text(text, resolve_style(&emphasis, defaults)));
    }

    info!("Extracted {} content elements", elements.len());
    elements
}

/// The document title: `<title>` if non-empty, else the first `<h1>`.
pub fn extract_title(document: &Html) -> Option<String> {
    select(document, "title")
        .first()
        .and_then(trimmed_text)
        .or_else(|| select(document, "h1").first().and_then(trimmed_text))
}

fn body_defaults() -> StyleAttributes {
    StyleAttributes {
        font_size: Some(14),
        align: Some(Align::Left),
        ..Default::default()
    }
}

fn select<'a>(document: &'a Html, selectors: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selectors) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn trimmed_text(element: &ElementRef) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn resolve_style(element: &ElementRef, defaults: StyleAttributes) -> StyleAttributes {
    match element.value().attr("style") {
        Some(style) => defaults.merge(parse_inline_style(style)),
        None => defaults,
    }
}

fn has_block_parent(element: &ElementRef) -> bool {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| BLOCK_PARENTS.contains(&parent.value().name()))
}
