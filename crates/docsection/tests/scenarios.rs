/*
 * scenarios.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end section assembly on small documents.
 */

use docsection::{SectionsConfig, SectionsTransform, TreeTransform};
use docsection_tree::{Document, Element, MetaValue, outline};

fn heading(level: u8, id: &str, text: &str) -> Element {
    Element::new(format!("h{}", level))
        .with_attr("id", id)
        .with_text(text)
}

fn para(text: &str) -> Element {
    Element::new("p").with_text(text)
}

/// Static config for the `section_<id>` style with subsection counting.
fn prefixed_config() -> SectionsConfig {
    SectionsConfig {
        hijack_header_id: false,
        count_subsections: true,
        ..SectionsConfig::default()
    }
}

fn run(config: SectionsConfig, children: Vec<Element>) -> String {
    let mut doc = Document::new(Element::new("div").with_children(children));
    SectionsTransform::new(config)
        .transform(&mut doc)
        .expect("transform should succeed");
    outline(&doc.root)
}

#[test]
fn test_single_header() {
    let out = run(
        prefixed_config(),
        vec![heading(1, "some-header", "Some Header")],
    );
    insta::assert_snapshot!(out, @r#"
    div
      section #section_some-header .level1
        h1 #some-header "Some Header"
    "#);
}

#[test]
fn test_single_header_with_class() {
    let h = Element::new("h1")
        .with_attr("class", "title")
        .with_attr("id", "the_header")
        .with_text("Some Header");
    let out = run(prefixed_config(), vec![h]);
    insta::assert_snapshot!(out, @r#"
    div
      section #section_the_header .level1 .title
        h1 #the_header .title "Some Header"
    "#);
}

#[test]
fn test_two_sections() {
    let out = run(
        prefixed_config(),
        vec![
            heading(1, "some-header", "Some Header"),
            para("Some text"),
            heading(2, "some-second-level-header", "Some second level header"),
            para("Some more text"),
        ],
    );
    insta::assert_snapshot!(out, @r#"
    div
      section #section_some-header .level1 .has1
        h1 #some-header "Some Header"
        p "Some text"
        section #section_some-second-level-header .level2
          h2 #some-second-level-header "Some second level header"
          p "Some more text"
    "#);
}

#[test]
fn test_three_sections() {
    let out = run(
        prefixed_config(),
        vec![
            heading(1, "some-header", "Some Header"),
            para("Some text"),
            heading(2, "some-second-level-header", "Some second level header"),
            para("Some more text"),
            heading(2, "another-second-level-header", "Another second level header"),
            para("Even more text"),
        ],
    );
    insta::assert_snapshot!(out, @r#"
    div
      section #section_some-header .level1 .has2
        h1 #some-header "Some Header"
        p "Some text"
        section #section_some-second-level-header .level2
          h2 #some-second-level-header "Some second level header"
          p "Some more text"
        section #section_another-second-level-header .level2
          h2 #another-second-level-header "Another second level header"
          p "Even more text"
    "#);
}

#[test]
fn test_three_sections_hijack() {
    let out = run(
        SectionsConfig::default(),
        vec![
            heading(1, "intro", "Intro"),
            para("Some text"),
            heading(2, "usage", "Usage"),
            para("Some more text"),
            heading(2, "faq", "FAQ"),
            para("Even more text"),
        ],
    );
    insta::assert_snapshot!(out, @r#"
    div
      section #intro .level1
        h1 "Intro"
        p "Some text"
        section #usage .level2
          h2 "Usage"
          p "Some more text"
        section #faq .level2
          h2 "FAQ"
          p "Even more text"
    "#);
}

#[test]
fn test_document_starting_with_h3() {
    let out = run(
        SectionsConfig::default(),
        vec![heading(3, "deep", "Deep"), para("x"), heading(1, "top", "Top")],
    );
    insta::assert_snapshot!(out, @r#"
    div
      section #deep .level3
        h3 "Deep"
        p "x"
      section #top .level1
        h1 "Top"
    "#);
}

#[test]
fn test_front_matter_switches_style() {
    let mut doc = Document::new(Element::new("div").with_children(vec![
        heading(1, "a", "A"),
        heading(2, "b", "B"),
        heading(4, "d", "D"),
    ]))
    .with_meta("hijack_header_id", MetaValue::List(vec!["no".into()]))
    .with_meta("class_prefix", "depth-")
    .with_meta("count_subsections", "yes");

    SectionsTransform::default().transform(&mut doc).unwrap();

    insta::assert_snapshot!(outline(&doc.root), @r#"
    div
      section #section_a .depth-1 .has1
        h1 #a "A"
        section #section_b .depth-2
          h2 #b "B"
          h4 #d "D"
    "#);
}

#[test]
fn test_document_round_trips_through_json() {
    let json = r#"{
        "meta": {"max_level": "2"},
        "root": {
            "tag": "div",
            "children": [
                {"tag": "h1", "attributes": {"id": "a"}, "text": "A"},
                {"tag": "p", "text": "body", "tail": "\n"},
                {"tag": "h3", "attributes": {"id": "c"}, "text": "C"}
            ]
        }
    }"#;
    let mut doc: Document = serde_json::from_str(json).unwrap();
    SectionsTransform::default().transform(&mut doc).unwrap();

    let section = &doc.root.children[0];
    assert_eq!(section.children.len(), 3);
    assert_eq!(section.children[1].tail.as_deref(), Some("\n"));
    assert_eq!(section.children[2].tag, "h3");

    let reparsed: Document = serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
    assert_eq!(reparsed, doc);
}
