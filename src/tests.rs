use super::*;
use crate::fit::fit_image;
use crate::grouping::{SLIDE_ELEMENT_CAP, group_elements};
use crate::html::{extract_elements, extract_title, heading_font_size, parse_document};
use crate::layout::{Placement, estimate_text_height, layout_groups, layout_slide};
use crate::style::{normalize_color, parse_inline_style};

fn paragraph(text: &str) -> ContentElement {
    ContentElement::text(
        text,
        StyleAttributes {
            font_size: Some(14),
            align: Some(Align::Left),
            ..Default::default()
        },
    )
}

fn heading(text: &str, size: u32) -> ContentElement {
    ContentElement::text(
        text,
        StyleAttributes {
            font_size: Some(size),
            bold: Some(true),
            align: Some(Align::Center),
            ..Default::default()
        },
    )
}

fn text_of(element: &ContentElement) -> &str {
    match element {
        ContentElement::Text { content, .. } => content,
        other => panic!("expected text element, got {:?}", other),
    }
}

#[test]
fn test_inline_style_known_properties() {
    let style = parse_inline_style(
        "color: #ff0000; font-size: 18px; font-family: Georgia; font-weight: 700; font-style: italic; text-align: right",
    );

    assert_eq!(style.color.as_deref(), Some("#ff0000"));
    assert_eq!(style.font_size, Some(18));
    assert_eq!(style.font_face.as_deref(), Some("Georgia"));
    assert_eq!(style.bold, Some(true));
    assert_eq!(style.italic, Some(true));
    assert_eq!(style.align, Some(Align::Right));
}

#[test]
fn test_inline_style_ignores_unknown_properties() {
    let with_noise = parse_inline_style(
        "margin: 4px; color: blue; display: flex; font-size: 20; background: url(http://x/y.png)",
    );
    let clean = parse_inline_style("color: blue; font-size: 20");

    assert_eq!(with_noise, clean);
}

#[test]
fn test_inline_style_last_value_wins() {
    let style = parse_inline_style("font-size: 12; color: red; font-size: 30");
    assert_eq!(style.font_size, Some(30));
    assert_eq!(style.color.as_deref(), Some("red"));
}

#[test]
fn test_inline_style_rejects_bad_values() {
    let style = parse_inline_style(
        "font-size: large; font-weight: 400; font-style: normal; text-align: justify",
    );

    assert_eq!(style, StyleAttributes::default());
}

#[test]
fn test_inline_style_ignores_font_size_beyond_u32() {
    let style = parse_inline_style("font-size: 4294967310px");
    assert_eq!(style.font_size, None);

    let style = parse_inline_style("font-size: 4294967295px");
    assert_eq!(style.font_size, Some(u32::MAX));
}

#[test]
fn test_inline_style_bold_keyword_and_underline() {
    let style = parse_inline_style("FONT-WEIGHT: bold; text-decoration: underline dotted");
    assert_eq!(style.bold, Some(true));
    assert_eq!(style.underline, Some(true));
}

#[test]
fn test_style_merge_overrides_defaults() {
    let defaults = StyleAttributes {
        font_size: Some(32),
        bold: Some(true),
        align: Some(Align::Center),
        ..Default::default()
    };
    let merged = defaults.merge(parse_inline_style("text-align: left; color: #123456"));

    assert_eq!(merged.font_size, Some(32));
    assert_eq!(merged.bold, Some(true));
    assert_eq!(merged.align, Some(Align::Left));
    assert_eq!(merged.color.as_deref(), Some("#123456"));
}

#[test]
fn test_normalize_color() {
    assert_eq!(normalize_color(Some("ff0000")), "ff0000");
    assert_eq!(normalize_color(Some("#ff0000")), "ff0000");
    assert_eq!(normalize_color(Some("rgb(255, 0, 0)")), "ff0000");
    assert_eq!(normalize_color(Some("rgba(16, 32, 48, 0.5)")), "102030");
    assert_eq!(normalize_color(Some("rgb(1, 2)")), "rgb(1, 2)");
    assert_eq!(normalize_color(None), "000000");

    let once = normalize_color(Some("#abcdef"));
    assert_eq!(normalize_color(Some(&once)), once);
}

#[test]
fn test_heading_font_sizes() {
    let expected = [("h1", 32), ("h2", 28), ("h3", 24), ("h4", 20), ("h5", 18), ("h6", 16)];
    for (tag, size) in expected {
        assert_eq!(heading_font_size(tag), size, "size for {}", tag);
    }
    assert_eq!(heading_font_size("h7"), 16);
    assert_eq!(heading_font_size("header"), 16);
}

#[test]
fn test_extraction_order_is_by_kind() {
    let document = parse_document(
        r#"<body>
            <p>First paragraph</p>
            <ul><li>Item one</li></ul>
            <h2>Later heading</h2>
            <img src="pic.png" alt="A picture">
            <img alt="no source">
            <div><strong>Loose emphasis</strong></div>
            <p>Has <strong>nested</strong> emphasis</p>
            <p>   </p>
        </body>"#,
    );
    let elements = extract_elements(&document);

    assert_eq!(elements.len(), 6);
    assert_eq!(text_of(&elements[0]), "Later heading");
    assert_eq!(text_of(&elements[1]), "First paragraph");
    assert_eq!(text_of(&elements[2]), "Has nested emphasis");
    assert_eq!(text_of(&elements[3]), "• Item one");
    assert_eq!(
        elements[4],
        ContentElement::image("pic.png", Some("A picture".to_string()))
    );
    assert_eq!(text_of(&elements[5]), "Loose emphasis");

    match &elements[5] {
        ContentElement::Text { style, .. } => {
            assert_eq!(style.bold, Some(true));
            assert_eq!(style.font_size, Some(14));
        }
        other => panic!("unexpected element {:?}", other),
    }
}

#[test]
fn test_extraction_skips_images_with_empty_source() {
    let document = parse_document(r#"<h1>T</h1><img src=""><img src="   " alt="blank">"#);
    let elements = extract_elements(&document);

    assert_eq!(elements.len(), 1);
    assert_eq!(text_of(&elements[0]), "T");

    let presentation = create_presentation_from_html(
        r#"<h1>T</h1><img src="">"#,
        &ConversionOptions::default(),
    )
    .expect("Empty image sources should be skipped");
    assert_eq!(presentation.slide_count(), 1);
    assert_eq!(presentation.slides()[0].shapes().len(), 1);
}

#[test]
fn test_emphasis_inside_headings_and_list_items_is_not_duplicated() {
    let document = parse_document(
        "<h2><b>Bold heading</b></h2><ul><li><strong>Bold item</strong></li></ul>",
    );
    let elements = extract_elements(&document);

    assert_eq!(elements.len(), 2);
    assert_eq!(text_of(&elements[0]), "Bold heading");
    assert_eq!(text_of(&elements[1]), "• Bold item");
}

#[test]
fn test_extraction_applies_inline_styles() {
    let document =
        parse_document(r#"<h3 style="color: rgb(0, 128, 255); text-align: left">Styled</h3>"#);
    let elements = extract_elements(&document);

    match &elements[0] {
        ContentElement::Text { style, .. } => {
            assert_eq!(style.font_size, Some(24));
            assert_eq!(style.bold, Some(true));
            assert_eq!(style.align, Some(Align::Left));
            assert_eq!(normalize_color(style.color.as_deref()), "0080ff");
        }
        other => panic!("unexpected element {:?}", other),
    }
}

#[test]
fn test_extract_title() {
    let with_title =
        parse_document("<html><head><title> Deck </title></head><body><h1>Head</h1></body></html>");
    assert_eq!(extract_title(&with_title).as_deref(), Some("Deck"));

    let h1_only = parse_document("<html><head><title>  </title></head><body><h1>Head</h1><h1>Second</h1></body></html>");
    assert_eq!(extract_title(&h1_only).as_deref(), Some("Head"));

    let none = parse_document("<p>nothing here</p>");
    assert_eq!(extract_title(&none), None);
}

#[test]
fn test_grouping_caps_plain_paragraphs() {
    let elements: Vec<ContentElement> = (0..10).map(|i| paragraph(&format!("p{}", i))).collect();
    let groups = group_elements(elements, SLIDE_ELEMENT_CAP);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 8);
    assert_eq!(groups[1].len(), 2);
}

#[test]
fn test_grouping_breaks_on_large_headings() {
    let elements = vec![
        heading("h1", 32),
        paragraph("a"),
        paragraph("b"),
        heading("h2", 28),
        paragraph("c"),
    ];
    let groups = group_elements(elements, SLIDE_ELEMENT_CAP);

    assert_eq!(groups.len(), 2);
    assert_eq!(
        groups[0].iter().map(text_of).collect::<Vec<_>>(),
        vec!["h1", "a", "b"]
    );
    assert_eq!(groups[1].iter().map(text_of).collect::<Vec<_>>(), vec!["h2", "c"]);
}

#[test]
fn test_grouping_small_headings_do_not_break() {
    let elements = vec![heading("h1", 32), heading("h4", 20), paragraph("a")];
    let groups = group_elements(elements, SLIDE_ELEMENT_CAP);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
}

#[test]
fn test_grouping_cap_closes_heading_group() {
    let mut elements = vec![heading("title", 32)];
    elements.extend((0..8).map(|i| paragraph(&format!("p{}", i))));
    let groups = group_elements(elements, SLIDE_ELEMENT_CAP);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 8);
    assert_eq!(text_of(&groups[0][0]), "title");
    assert_eq!(groups[1].len(), 1);
}

#[test]
fn test_grouping_empty_input_yields_one_empty_group() {
    let groups = group_elements(Vec::new(), SLIDE_ELEMENT_CAP);
    assert_eq!(groups, vec![Vec::new()]);
}

#[test]
fn test_text_height_estimate() {
    let text = "x".repeat(160);
    assert_eq!(estimate_text_height(&text, 14), 14.0 * 2.0 * 1.2 / 72.0);
    assert_eq!(estimate_text_height("short", 14), 14.0 * 1.2 / 72.0);
    assert_eq!(estimate_text_height(&"x".repeat(161), 10), 10.0 * 3.0 * 1.2 / 72.0);
}

#[test]
fn test_image_fit_shrinks_and_centers() {
    let canvas = CanvasConfig::default();
    let rect = fit_image(1920, 1080, &canvas);

    assert!((rect.width - 10.0).abs() < 1e-9);
    assert!((rect.height - 5.625).abs() < 1e-9);
    assert!((rect.width / rect.height - 1920.0 / 1080.0).abs() < 1e-9);
    assert!(rect.x >= 0.0 && rect.y >= 0.0);
}

#[test]
fn test_image_fit_never_enlarges() {
    let canvas = CanvasConfig::default();
    let rect = fit_image(96, 48, &canvas);

    assert_eq!(rect.width, 1.0);
    assert_eq!(rect.height, 0.5);
    assert_eq!(rect.x, 4.5);
    assert!((rect.y - (5.625 - 0.5) / 2.0).abs() < 1e-9);
}

#[test]
fn test_image_fit_tall_image() {
    let canvas = CanvasConfig::default();
    let rect = fit_image(1000, 2000, &canvas);

    assert!((rect.height - 5.625).abs() < 1e-9);
    assert!((rect.width - 2.8125).abs() < 1e-9);
    assert!(rect.y.abs() < 1e-9);
    assert!(rect.x > 0.0);
}

#[test]
fn test_layout_places_title_and_body() {
    let options = ConversionOptions::default();
    let document = parse_document("<h1>Title</h1><p>Body text</p>");
    let groups = group_elements(extract_elements(&document), SLIDE_ELEMENT_CAP);
    assert_eq!(groups.len(), 1);

    let layout = layout_slide(groups[0].clone(), &options.canvas(), &options);
    assert!(layout.overflow.is_empty());
    assert_eq!(layout.placements.len(), 2);

    match &layout.placements[0] {
        Placement::Text {
            content,
            bounds,
            format,
        } => {
            assert_eq!(content, "Title");
            assert_eq!(format.font_size, 32);
            assert!(format.bold);
            assert_eq!(format.align, Align::Center);
            assert_eq!(format.color, "000000");
            assert_eq!(format.font_face, "Arial");
            assert_eq!(bounds.x, 0.5);
            assert_eq!(bounds.y, 0.5);
            assert_eq!(bounds.width, 9.0);
        }
        other => panic!("unexpected placement {:?}", other),
    }

    match &layout.placements[1] {
        Placement::Text {
            content,
            bounds,
            format,
        } => {
            assert_eq!(content, "Body text");
            assert_eq!(format.font_size, 14);
            assert!(!format.bold);
            assert_eq!(format.align, Align::Left);
            assert_eq!(format.color, "000000");
            let expected_y = 0.5 + 32.0 * 1.2 / 72.0 + 0.2;
            assert!((bounds.y - expected_y).abs() < 1e-9);
        }
        other => panic!("unexpected placement {:?}", other),
    }
}

#[test]
fn test_layout_centers_images_with_default_size() {
    let options = ConversionOptions::default();
    let group = vec![ContentElement::image("a.png", None)];
    let layout = layout_slide(group, &options.canvas(), &options);

    assert_eq!(
        layout.placements,
        vec![Placement::Image {
            source: "a.png".to_string(),
            bounds: Rect::new(3.0, 0.5, 4.0, 3.0),
            alt: None,
        }]
    );
}

#[test]
fn test_layout_overflow_stops_slide() {
    let options = ConversionOptions::default();
    let group = vec![
        paragraph("fits"),
        ContentElement::image("a.png", None),
        ContentElement::image("b.png", None),
        paragraph("never placed"),
    ];
    let layout = layout_slide(group, &options.canvas(), &options);

    assert_eq!(layout.placements.len(), 2);
    assert_eq!(layout.overflow.len(), 2);
    assert_eq!(layout.overflow[0], ContentElement::image("b.png", None));
}

#[test]
fn test_layout_groups_drops_overflow_by_default() {
    let options = ConversionOptions::default();
    let group = vec![
        ContentElement::image("a.png", None),
        ContentElement::image("b.png", None),
    ];
    let slides = layout_groups(vec![group], &options);

    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].len(), 1);
}

#[test]
fn test_layout_groups_carries_overflow_when_enabled() {
    let options = ConversionOptions::default().with_carry_overflow(true);
    let group = vec![
        ContentElement::image("a.png", None),
        ContentElement::image("b.png", None),
        paragraph("tail"),
    ];
    let slides = layout_groups(vec![group], &options);

    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].len(), 1);
    assert_eq!(slides[1].len(), 2);
    match &slides[1][0] {
        Placement::Image { source, bounds, .. } => {
            assert_eq!(source, "b.png");
            assert_eq!(bounds.y, 0.5);
        }
        other => panic!("unexpected placement {:?}", other),
    }
}

#[test]
fn test_layout_groups_drops_element_too_tall_for_any_slide() {
    let options = ConversionOptions::default().with_carry_overflow(true);
    let huge = ContentElement::Image {
        source: "huge.png".to_string(),
        bounds: Some(Rect::new(0.0, 0.0, 4.0, 20.0)),
        alt: None,
    };
    let slides = layout_groups(vec![vec![huge, paragraph("after")]], &options);

    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].len(), 1);
}

#[test]
fn test_layout_groups_carry_does_not_add_empty_slide() {
    let options = ConversionOptions::default().with_carry_overflow(true);
    let shape = ContentElement::Shape {
        kind: ShapeKind::Rect,
        bounds: Rect::new(1.0, 1.0, 2.0, 1.0),
        fill: None,
        stroke: Some("000000".to_string()),
        stroke_width: Some(1.0),
    };
    let huge = ContentElement::Image {
        source: "huge.png".to_string(),
        bounds: Some(Rect::new(0.0, 0.0, 4.0, 20.0)),
        alt: None,
    };
    let slides = layout_groups(vec![vec![shape, huge], vec![paragraph("next")]], &options);

    assert_eq!(slides.len(), 2);
    assert!(matches!(slides[0].as_slice(), [Placement::Shape { .. }]));
    assert!(matches!(slides[1].as_slice(), [Placement::Text { .. }]));
}

#[test]
fn test_layout_shapes_keep_their_bounds() {
    let options = ConversionOptions::default();
    let bounds = Rect::new(1.0, 1.0, 2.0, 2.0);
    let group = vec![
        ContentElement::Shape {
            kind: ShapeKind::Ellipse,
            bounds,
            fill: Some("ff0000".to_string()),
            stroke: None,
            stroke_width: None,
        },
        paragraph("below"),
    ];
    let layout = layout_slide(group, &options.canvas(), &options);

    assert_eq!(layout.placements.len(), 2);
    match &layout.placements[1] {
        Placement::Text { bounds, .. } => assert_eq!(bounds.y, 0.5),
        other => panic!("unexpected placement {:?}", other),
    }
}

#[test]
fn test_empty_html_yields_single_empty_slide() {
    let presentation = create_presentation_from_html("", &ConversionOptions::default())
        .expect("conversion should succeed");

    assert_eq!(presentation.slide_count(), 1);
    assert!(presentation.slides()[0].shapes().is_empty());
    assert_eq!(presentation.metadata().title, "Converted Presentation");
    assert_eq!(presentation.metadata().author, "HTML to PPT Converter");
}

#[test]
fn test_html_metadata_prefers_explicit_title() {
    let html = "<title>From Markup</title><h1>Heading</h1>";

    let extracted = create_presentation_from_html(html, &ConversionOptions::default()).unwrap();
    assert_eq!(extracted.metadata().title, "From Markup");

    let explicit = create_presentation_from_html(
        html,
        &ConversionOptions::default().with_title("Explicit"),
    )
    .unwrap();
    assert_eq!(explicit.metadata().title, "Explicit");
}

#[test]
fn test_options_validation() {
    assert!(ConversionOptions::default().validate().is_ok());
    assert!(
        ConversionOptions::default()
            .with_slide_size(0.0, 5.0)
            .validate()
            .is_err()
    );
    assert!(
        ConversionOptions::default()
            .with_slide_size(10.0, f64::NAN)
            .validate()
            .is_err()
    );
    assert!(
        ConversionOptions::default()
            .with_default_font("Arial", 0)
            .validate()
            .is_err()
    );
}

#[test]
fn test_options_defaults() {
    let options = ConversionOptions::new();
    assert_eq!(options.slide_width, 10.0);
    assert_eq!(options.slide_height, 5.625);
    assert_eq!(options.default_font_size, 14);
    assert_eq!(options.default_font_face, "Arial");
    assert!(!options.carry_overflow);
    assert_eq!(options.title, None);
}

#[test]
fn test_options_from_env() {
    // Only this test touches DECKGEN_* variables.
    std::env::set_var("DECKGEN_TITLE", "Env Deck");
    std::env::set_var("DECKGEN_SLIDE_HEIGHT", "7.5");
    std::env::set_var("DECKGEN_FONT_SIZE", "not-a-number");
    std::env::set_var("DECKGEN_CARRY_OVERFLOW", "true");

    let options = ConversionOptions::from_env();

    std::env::remove_var("DECKGEN_TITLE");
    std::env::remove_var("DECKGEN_SLIDE_HEIGHT");
    std::env::remove_var("DECKGEN_FONT_SIZE");
    std::env::remove_var("DECKGEN_CARRY_OVERFLOW");

    assert_eq!(options.title.as_deref(), Some("Env Deck"));
    assert_eq!(options.slide_height, 7.5);
    assert_eq!(options.slide_width, 10.0);
    assert_eq!(options.default_font_size, 14);
    assert!(options.carry_overflow);
}
