use wordrun::{ParagraphRecord, extract_paragraphs};

fn body(paragraphs: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            "<w:body>{}<w:sectPr/></w:body></w:document>"
        ),
        paragraphs
    )
}

fn texts(records: &[ParagraphRecord]) -> Vec<&str> {
    records.iter().map(|record| record.text.as_str()).collect()
}

#[test]
fn test_end_to_end_hello_world() {
    let xml = body(concat!(
        "<w:p>",
        r#"<w:r><w:t xml:space="preserve">Hello </w:t></w:r>"#,
        "<w:r><w:rPr><w:b/></w:rPr><w:t>world</w:t></w:r>",
        "</w:p>",
        "<w:p/>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "Hello world");
    assert_eq!(records[0].markup, "Hello <strong>world</strong>");
}

#[test]
fn test_whitespace_survives_without_preserve_attribute() {
    let xml = body(concat!(
        "<w:p>",
        "<w:r><w:t>Left</w:t></w:r>",
        "<w:r><w:rPr><w:i/></w:rPr><w:t> middle </w:t></w:r>",
        "<w:r><w:t>right</w:t></w:r>",
        "</w:p>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "Left middle right");
    assert_eq!(records[0].markup, "Left<em> middle </em>right");

    // repeated extraction gives the same result
    assert_eq!(extract_paragraphs(&xml), records);
}

#[test]
fn test_ampersand_is_escaped_exactly_once() {
    let xml = body("<w:p><w:r><w:t>R&amp;D</w:t></w:r></w:p>");

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "R&D");
    assert_eq!(records[0].markup, "R&amp;D");
    assert!(!records[0].markup.contains("&amp;amp;"));
}

#[test]
fn test_escaped_entity_text_decodes_one_level() {
    // the leaf holds the literal characters "&amp;" written once more escaped
    let xml = body("<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>&amp;amp;</w:t></w:r></w:p>");

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "&amp;");
    assert_eq!(records[0].markup, "<strong>&amp;amp;</strong>");
    assert_eq!(records[0].text.matches('&').count(), 1);
}

#[test]
fn test_markup_escapes_literal_angle_brackets_and_quotes() {
    let xml = body("<w:p><w:r><w:t>if a &lt; b &amp;&amp; &quot;c&quot; it&apos;s</w:t></w:r></w:p>");

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "if a < b && \"c\" it's");
    assert_eq!(
        records[0].markup,
        "if a &lt; b &amp;&amp; &quot;c&quot; it's"
    );
}

#[test]
fn test_nesting_order_with_all_flags() {
    let xml = body(concat!(
        "<w:p><w:r><w:rPr>",
        r#"<w:u w:val="single"/><w:i/><w:b/>"#,
        "</w:rPr><w:t>all</w:t></w:r></w:p>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].markup, "<strong><em><u>all</u></em></strong>");
}

#[test]
fn test_complex_script_bold_only() {
    let xml = body(concat!(
        "<w:p><w:r><w:rPr><w:bCs/><w:iCs/></w:rPr><w:t>cs</w:t></w:r></w:p>",
    ));

    assert_eq!(extract_paragraphs(&xml)[0].markup, "cs");
}

#[test]
fn test_bold_off_switch() {
    let xml = body(concat!(
        r#"<w:p><w:r><w:rPr><w:b w:val="0"/></w:rPr><w:t>off</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:rPr><w:b w:val="false"/></w:rPr><w:t>off</w:t></w:r></w:p>"#,
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.markup == "off"));
}

#[test]
fn test_underline_none_single_and_absent() {
    let xml = body(concat!(
        r#"<w:p><w:r><w:rPr><w:u w:val="none"/></w:rPr><w:t>none</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:rPr><w:u w:val="single"/></w:rPr><w:t>single</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:rPr><w:sz w:val="24"/></w:rPr><w:t>absent</w:t></w:r></w:p>"#,
    ));

    let markups: Vec<String> = extract_paragraphs(&xml)
        .into_iter()
        .map(|record| record.markup)
        .collect();
    assert_eq!(markups, vec!["none", "<u>single</u>", "absent"]);
}

#[test]
fn test_deletion_spanning_paragraphs() {
    let xml = body(concat!(
        "<w:p>",
        "<w:r><w:t>Keep one</w:t></w:r>",
        r#"<w:del w:id="1" w:author="Reviewer" w:date="2024-05-01T10:00:00Z">"#,
        "<w:r><w:delText> drop tail</w:delText></w:r>",
        "</w:p>",
        "<w:p>",
        "<w:r><w:t>drop head </w:t></w:r>",
        "</w:del>",
        "<w:r><w:t>Keep two</w:t></w:r>",
        "</w:p>",
    ));

    // the paragraph boundary inside the deletion goes with it
    let records = extract_paragraphs(&xml);
    assert_eq!(texts(&records), vec!["Keep oneKeep two"]);
    assert!(!records[0].text.contains("drop"));
}

#[test]
fn test_tracked_insertions_are_kept() {
    let xml = body(concat!(
        "<w:p>",
        "<w:r><w:t xml:space=\"preserve\">Before </w:t></w:r>",
        r#"<w:ins w:id="2" w:author="Reviewer"><w:r><w:t>inserted</w:t></w:r></w:ins>"#,
        r#"<w:del w:id="3" w:author="Reviewer"><w:r><w:delText>removed</w:delText></w:r></w:del>"#,
        "</w:p>",
    ));

    assert_eq!(texts(&extract_paragraphs(&xml)), vec!["Before inserted"]);
}

#[test]
fn test_break_only_paragraph_is_dropped() {
    let xml = body(concat!(
        "<w:p><w:r><w:t>first</w:t></w:r></w:p>",
        "<w:p><w:r><w:br/></w:r></w:p>",
        "<w:p><w:r><w:t>third</w:t></w:r></w:p>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(texts(&records), vec!["first", "third"]);
    assert_eq!(records[1].text, "third");
}

#[test]
fn test_soft_break_inside_paragraph() {
    let xml = body(concat!(
        "<w:p>",
        "<w:r><w:t>line one</w:t><w:br/></w:r>",
        "<w:r><w:t>line two</w:t></w:r>",
        "</w:p>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "line one\nline two");
    assert_eq!(records[0].markup, "line one\n<br>line two");
}

#[test]
fn test_page_break_does_not_split_lines() {
    let xml = body(concat!(
        "<w:p>",
        "<w:r><w:t>before</w:t></w:r>",
        r#"<w:r><w:br w:type="page"/></w:r>"#,
        "<w:r><w:t>after</w:t></w:r>",
        "</w:p>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "beforeafter");
    assert_eq!(records[0].markup, "beforeafter");
}

#[test]
fn test_two_tabs_contribute_two_tab_characters() {
    let xml = body(concat!(
        "<w:p>",
        "<w:r><w:t>Name</w:t></w:r>",
        "<w:r><w:tab/><w:tab/></w:r>",
        "<w:r><w:t>Value</w:t></w:r>",
        "</w:p>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "Name\t\tValue");
    assert_eq!(records[0].text.matches('\t').count(), 2);
}

#[test]
fn test_malformed_paragraph_is_skipped() {
    let xml = body(concat!(
        "<w:p><w:r><w:t>complete</w:t></w:r></w:p>",
        "<w:p><w:r><w:t>truncated</w:t></w:r>",
    ));

    assert_eq!(texts(&extract_paragraphs(&xml)), vec!["complete"]);
}

#[test]
fn test_paragraph_properties_are_ignored() {
    let xml = body(concat!(
        "<w:p>",
        r#"<w:pPr><w:pStyle w:val="Heading1"/><w:rPr><w:b/></w:rPr></w:pPr>"#,
        "<w:r><w:t>Heading text</w:t></w:r>",
        "</w:p>",
    ));

    let records = extract_paragraphs(&xml);
    assert_eq!(records[0].text, "Heading text");
    assert_eq!(records[0].markup, "Heading text");
}

#[test]
fn test_concurrent_extraction() {
    let xml = body("<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>shared</w:t></w:r></w:p>");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| extract_paragraphs(&xml)))
            .collect();
        for handle in handles {
            let records = handle.join().unwrap();
            assert_eq!(records[0].markup, "<strong>shared</strong>");
        }
    });
}
