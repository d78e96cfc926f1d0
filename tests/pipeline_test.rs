//! Integration tests for the full span-to-Markdown pipeline.

use spandown::{
    BoundingBox, ConvertOptions, FontMetrics, JsonFormat, SpanDocument, Spandown, TextSpan,
};

const PAGE_HEIGHT: f32 = 792.0;
const BODY: &str = "Ordinary body prose with enough characters to dominate the size histogram.";

fn span(text: &str, size: f32, family: &str, page: u32, y: f32, idx: u32) -> TextSpan {
    TextSpan::new(
        text,
        FontMetrics::new(size, family),
        page,
        BoundingBox::new(72.0, y, 500.0, y + size),
        idx,
    )
}

/// Three pages, each with a top-margin page number, one heading-sized span,
/// and one body paragraph.
fn book_fixture() -> SpanDocument {
    let mut doc = SpanDocument::new(3);
    for p in 1..=3 {
        doc.set_page_height(p, PAGE_HEIGHT);
        doc.add_span(span(&format!("Page {}", p), 8.0, "Helvetica", p, 10.0, 0));
        doc.add_span(span(
            &format!("Chapter {}", p),
            18.0,
            "Helvetica",
            p,
            120.0,
            1,
        ));
        doc.add_span(span(BODY, 10.0, "Helvetica", p, 160.0, 2));
    }
    doc
}

#[test]
fn round_trip_suppresses_page_numbers_and_ranks_headings() {
    let markdown = spandown::to_markdown(&book_fixture(), &ConvertOptions::default()).unwrap();

    assert!(!markdown.contains("Page 1"));
    assert!(!markdown.contains("Page 2"));
    assert!(!markdown.contains("Page 3"));

    assert!(markdown.contains("# Chapter 1"));
    assert!(markdown.contains("# Chapter 2"));
    assert!(markdown.contains("# Chapter 3"));

    // Body renders as plain text, no markers.
    assert!(markdown.contains(&format!("\n\n{}", BODY)));
}

#[test]
fn adjacent_monospace_spans_share_one_fence() {
    let mut doc = SpanDocument::new(1);
    doc.set_page_height(1, PAGE_HEIGHT);
    doc.add_span(span("def f():", 10.0, "Courier", 1, 200.0, 0));
    doc.add_span(span("    return 1", 10.0, "Courier", 1, 214.0, 1));

    let markdown = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap();
    assert_eq!(markdown, "```\ndef f():\n    return 1\n```\n");
}

#[test]
fn monospace_overrides_size_even_at_body_size() {
    let mut doc = SpanDocument::new(1);
    doc.set_page_height(1, PAGE_HEIGHT);
    doc.add_span(span(BODY, 10.0, "Georgia", 1, 100.0, 0));
    doc.add_span(span("x = compute()", 10.0, "Consolas", 1, 130.0, 1));
    doc.add_span(span("big_call()", 16.0, "Courier New", 1, 160.0, 2));

    let markdown = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap();
    // Both monospace spans tag as code and merge into one fence, the 16pt
    // one included; neither surfaces as a heading.
    assert!(markdown.contains("```\nx = compute()\nbig_call()\n```"));
    assert!(!markdown.contains("# big_call()"));
}

#[test]
fn body_size_follows_character_volume_not_span_count() {
    let mut doc = SpanDocument::new(1);
    doc.set_page_height(1, PAGE_HEIGHT);
    // Many short spans at 14pt, few long ones at 10pt.
    for i in 0..12 {
        doc.add_span(span("nav", 14.0, "Helvetica", 1, 100.0 + i as f32, i));
    }
    doc.add_span(span(BODY, 10.0, "Helvetica", 1, 300.0, 12));
    doc.add_span(span(BODY, 10.0, "Helvetica", 1, 320.0, 13));

    let markdown = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap();
    // 14pt outranks the 10pt body, so the nav spans merge into one H1.
    assert!(markdown.starts_with("# nav"));
    assert!(markdown.contains(&format!("\n\n{}", BODY)));
}

#[test]
fn one_off_margin_content_is_kept() {
    let mut doc = book_fixture();
    // A dedication that happens to sit in the top band of page 1 only.
    doc.add_span(span("For the readers", 10.0, "Helvetica", 1, 30.0, 3));

    let markdown = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap();
    assert!(markdown.contains("For the readers"));
}

#[test]
fn short_documents_never_suppress_margins() {
    let mut doc = SpanDocument::new(2);
    for p in 1..=2 {
        doc.set_page_height(p, PAGE_HEIGHT);
        doc.add_span(span(&format!("Page {}", p), 8.0, "Helvetica", p, 10.0, 0));
        doc.add_span(span(BODY, 10.0, "Helvetica", p, 200.0, 1));
    }

    let markdown = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap();
    assert!(markdown.contains("Page 1"));
    assert!(markdown.contains("Page 2"));
}

#[test]
fn bold_and_italic_spans_carry_emphasis_into_merged_paragraphs() {
    let mut doc = SpanDocument::new(1);
    doc.set_page_height(1, PAGE_HEIGHT);
    doc.add_span(span(BODY, 10.0, "Georgia", 1, 100.0, 0));
    doc.add_span(TextSpan::new(
        "a crucial point",
        FontMetrics::with_flags(10.0, "Georgia", true, false),
        1,
        BoundingBox::new(72.0, 112.0, 200.0, 122.0),
        1,
    ));
    doc.add_span(TextSpan::new(
        "an aside",
        FontMetrics::with_flags(10.0, "Georgia", false, true),
        1,
        BoundingBox::new(210.0, 112.0, 300.0, 122.0),
        2,
    ));

    let markdown = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap();
    assert!(markdown.contains("**a crucial point**"));
    assert!(markdown.contains("*an aside*"));
}

#[test]
fn empty_document_is_fatal_with_no_output() {
    let doc = SpanDocument::new(0);
    let err = spandown::to_markdown(&doc, &ConvertOptions::default()).unwrap_err();
    assert!(err.to_string().contains("No extractable text"));
}

#[test]
fn conversion_is_deterministic() {
    let doc = book_fixture();
    let options = ConvertOptions::default();
    let first = spandown::to_markdown(&doc, &options).unwrap();
    let second = spandown::to_markdown(&doc, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn batch_conversion_matches_single_conversion() {
    let docs = vec![book_fixture(), book_fixture()];
    let builder = Spandown::new();

    let batch = builder.convert_all(&docs);
    let single = builder.convert(&docs[0]).unwrap();
    assert_eq!(batch.len(), 2);
    for result in batch {
        assert_eq!(result.unwrap(), single);
    }
}

#[test]
fn stats_report_suppressed_spans_and_block_counts() {
    let result =
        spandown::to_markdown_with_stats(&book_fixture(), &ConvertOptions::default()).unwrap();

    assert_eq!(result.stats.page_count, 3);
    assert_eq!(result.stats.span_count, 9);
    assert_eq!(result.stats.suppressed_span_count, 3);
    assert_eq!(result.stats.heading_count, 3);
    assert_eq!(result.stats.paragraph_count, 3);
    assert_eq!(result.stats.code_block_count, 0);
}

#[test]
fn json_output_lists_classified_blocks() {
    let json = spandown::to_json(
        &book_fixture(),
        &ConvertOptions::default(),
        JsonFormat::Compact,
    )
    .unwrap();

    assert!(json.contains("\"tag\":\"h1\""));
    assert!(json.contains("\"tag\":\"paragraph\""));
    assert!(!json.contains("Page 1"));
}

#[test]
fn text_output_has_no_markup() {
    let text = spandown::to_text(&book_fixture(), &ConvertOptions::default()).unwrap();
    assert!(text.contains("Chapter 1"));
    assert!(!text.contains('#'));
    assert!(!text.contains("```"));
}

#[test]
fn heading_cap_applies_to_deep_hierarchies() {
    let mut doc = SpanDocument::new(1);
    doc.set_page_height(1, PAGE_HEIGHT);
    doc.add_span(span(BODY, 9.0, "Helvetica", 1, 400.0, 0));
    for (i, size) in [30.0, 26.0, 22.0, 18.0].iter().enumerate() {
        doc.add_span(span(
            &format!("Level {}", i + 1),
            *size,
            "Helvetica",
            1,
            100.0 + 40.0 * i as f32,
            i as u32 + 1,
        ));
    }

    let options = ConvertOptions::new().with_max_heading(2);
    let markdown = spandown::to_markdown(&doc, &options).unwrap();
    assert!(markdown.contains("# Level 1"));
    // Levels 2-4 all fold into H2 and, as adjacent same-tag spans, merge
    // into a single heading block.
    assert!(markdown.contains("## Level 2 Level 3 Level 4"));
    assert!(!markdown.contains("### "));
}
