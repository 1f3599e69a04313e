/*
 * outline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Indented debug rendering of an element tree.
 */

//! Indented, one-line-per-element rendering of a tree.
//!
//! This is a debugging aid, not a serializer: nothing is escaped and `tail`
//! text is omitted. Each line shows the tag, `#id`, one `.class` per class
//! token, remaining attributes as `key="value"`, and the element's text.
//!
//! ```text
//! div
//!   section #section_intro .level1
//!     h1 #intro "Intro"
//!     p "Some text"
//! ```

use crate::element::Element;
use std::fmt::Write;

/// Render `element` and its descendants, one element per line.
pub fn outline(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    if !out.is_empty() {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&element.tag);

    if let Some(id) = element.id().filter(|id| !id.is_empty()) {
        let _ = write!(out, " #{}", id);
    }
    for class in element.classes() {
        let _ = write!(out, " .{}", class);
    }
    for (name, value) in &element.attributes {
        if name != "id" && name != "class" {
            let _ = write!(out, " {}={:?}", name, value);
        }
    }
    if let Some(text) = element.text.as_deref().filter(|t| !t.is_empty()) {
        let _ = write!(out, " {:?}", text);
    }

    for child in &element.children {
        write_element(out, child, depth + 1);
    }
}
